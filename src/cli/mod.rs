//! # CLI Module
//!
//! Command-line interface for the goforge scaffolder.
//!
//! ## Commands
//!
//! ### `new`
//!
//! Create a Go web project:
//!
//! ```bash
//! goforge new shop --router gin --db postgres --entity order,user
//! ```
//!
//! Options:
//! - `[NAME]` - Project name (also the Go module and directory name)
//! - `--port <PORT>` - Port the generated service listens on (default: 8080)
//! - `--router <ID>` - Router framework: gin, chi, echo, fiber or mux
//! - `--db <ID>` - Database add-on: postgres, mysql, mongodb, sqlite,
//!   cockroachdb or mariadb
//! - `--entity <NAMES>` - Comma-separated entity names to fan handlers and
//!   models out over
//! - `--config <FILE>` - YAML config file; its values win over flags
//! - `--interactive` - Answer prompts instead of passing flags
//!
//! ### `ai`
//!
//! Ask the configured chat model a question:
//!
//! ```bash
//! goforge ai --prompt "idiomatic Go project layout for a REST API"
//! ```

mod commands;
mod wizard;


pub use commands::{run_cli, Cli, Commands};
pub use wizard::collect_from;
