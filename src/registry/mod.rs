//! # Registry Module
//!
//! Static configuration tables consumed by the scaffolding engine.
//!
//! Two registries exist: one mapping a router identifier to the Go code
//! fragments that framework needs (import lines, bind/encode expressions,
//! route registration), and one mapping a database identifier to its
//! connection and container fragments.
//!
//! Both are closed enums rather than string-keyed maps. Looking up an unknown
//! identifier is not an error: callers get `None` from [`RouterKind::parse`] /
//! [`DatabaseKind::parse`] and an all-empty fragment struct from
//! [`FrameworkConfig::for_id`] / [`DbConfig::for_id`], which downstream code
//! treats as "feature not applied".
//!
//! The one piece of behavior living next to the data is the route-group
//! generator: a pure function of `(entity, verb, lower_entity)` implemented as
//! [`RouterKind::route_group`] instead of a callable stored in a field.

mod database;
mod framework;

pub use database::{DatabaseKind, DbConfig};
pub use framework::{FrameworkConfig, RouterKind};
