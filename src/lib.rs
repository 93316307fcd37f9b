//! # goforge
//!
//! **goforge** is a command-line scaffolder for Go web projects. It renders an
//! embedded tree of text templates into a ready-to-build project: a router
//! framework of your choice, optional database wiring with docker-compose, and
//! handlers plus models fanned out over the entities you declare.
//!
//! ## Overview
//!
//! A single `new` invocation turns a [`descriptor::ProjectDescriptor`] (built
//! from flags, a YAML config file, or interactive prompts) into a directory
//! tree on disk. Frameworks and databases are closed registries of supported
//! identifiers; each contributes a template subtree and a set of text
//! fragments the shared templates splice in.
//!
//! ## Architecture
//!
//! - **[`cli`]** - Flag parsing, the interactive wizard and command dispatch
//! - **[`descriptor`]** - Normalized project input and the YAML config file
//! - **[`registry`]** - Supported router frameworks and database add-ons
//! - **[`generator`]** - Embedded template assets, the rendering engine and
//!   project orchestration
//! - **[`chat`]** - Client for the `ai` subcommand's chat backend
//!
//! ## Example
//!
//! ```bash
//! goforge new shop --router gin --db postgres --entity order,user
//! ```
//!
//! produces `shop/` with a gin router, per-entity handlers and models,
//! postgres wiring under `internal/db/` and a docker-compose file.

pub mod chat;
pub mod cli;
pub mod descriptor;
pub mod generator;
pub mod registry;
