//! Scaffolding orchestration: descriptor in, project tree out.

use std::path::{Path, PathBuf};

use anyhow::Context;

use super::assets::TemplateTree;
use super::context::RenderContext;
use super::engine::{RenderJob, Renderer};
use super::sink::FsSink;
use crate::descriptor::ProjectDescriptor;
use crate::registry::{DatabaseKind, RouterKind};

/// Scaffold a complete project from a validated descriptor.
///
/// Creates `<location>/<name>/` with an `internal/` subdirectory, then runs
/// the render jobs in order: the common root, the router root (when the
/// router identifier is known), and — when a database is selected — the
/// database compose root plus the shared wiring root under `internal/db/`.
///
/// # Errors
///
/// Returns an error if the descriptor is invalid (before any filesystem
/// mutation), or if directory creation or any render job fails. A partially
/// written project is left in place.
pub fn scaffold_project(descriptor: &ProjectDescriptor) -> anyhow::Result<PathBuf> {
    descriptor.validate()?;

    let router = RouterKind::parse(&descriptor.router);
    let database = DatabaseKind::parse(&descriptor.database);

    let dest = Path::new(&descriptor.location).join(&descriptor.name);
    std::fs::create_dir_all(dest.join("internal"))
        .with_context(|| format!("failed to create project directory {dest:?}"))?;

    let context = RenderContext::new(descriptor, router, database);
    let tree = TemplateTree::embedded();
    let renderer = Renderer::new(&tree, context, router);

    let mut jobs = vec![RenderJob::new("common", dest.clone())];
    if let Some(router) = router {
        jobs.push(RenderJob::new(router.template_root(), dest.clone()));
    }
    if let Some(database) = database {
        jobs.push(RenderJob::new(database.template_root(), dest.clone()));
        // depends on internal/ existing; writes the db wiring beneath it
        jobs.push(RenderJob::new("db/database", dest.join("internal").join("db")));
    }

    let mut sink = FsSink;
    renderer.run(&jobs, &mut sink)?;

    if let Some(database) = database {
        println!("✅ Added database support for '{}'", database.as_str());
    }
    println!("✅ Created '{}' successfully", descriptor.name);
    Ok(dest)
}
