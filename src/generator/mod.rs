//! # Generator Module
//!
//! The generator module is the core of goforge: it turns an embedded tree of
//! text templates plus a render context into a scaffolded Go project on disk.
//!
//! ## Overview
//!
//! ```text
//! ProjectDescriptor → RenderContext → Renderer → RenderSink → Project tree
//!                        ↑ fragments
//!            registry (framework / database)
//! ```
//!
//! 1. **Assets** — the read-only template tree compiled into the binary
//! 2. **Context** — every substitution field templates can reference
//! 3. **Engine** — tree walk, filename derivation and entity fan-out
//! 4. **Sink** — filesystem (or in-memory, for tests) output
//! 5. **Project** — job ordering and user-facing orchestration
//!
//! ## Entity fan-out
//!
//! A template named `internal/handler/example_handler.go.tmpl` rendered with
//! entities `["order", "user"]` produces two files,
//! `internal/handler/order_handler.go` and `internal/handler/user_handler.go`,
//! each rendered with its own context copy. With no entities declared, the
//! default entity `user` is substituted instead and exactly one file comes
//! out. Files whose names carry no `example` token are rendered once per
//! entity into the same path; the last write wins, which is deliberate.
//!
//! ## Failure semantics
//!
//! Jobs run in order and the run stops at the first failing job. Inside a
//! job every file and entity is attempted; failures are collected and
//! reported together. Partially written output stays on disk — the blast
//! radius is a directory the caller just created.

mod assets;
mod context;
mod engine;
mod project;
mod sink;

#[cfg(test)]
mod tests;

pub use assets::{TemplateFile, TemplateTree, EMBEDDED};
pub use context::{capitalize, RenderContext};
pub use engine::{
    output_name, RenderError, RenderJob, Renderer, COMMON_ROOT, DEFAULT_ENTITY, PLACEHOLDER,
    TEMPLATE_SUFFIX,
};
pub use project::scaffold_project;
pub use sink::{FsSink, MemorySink, RenderSink};
