//! Render context: the full set of substitution fields templates can see.

use serde::Serialize;

use crate::descriptor::ProjectDescriptor;
use crate::registry::{DatabaseKind, RouterKind};

/// All template substitution fields for one scaffold run.
///
/// Built once from the descriptor and the registries, then copied per
/// fan-out iteration with only the current-entity fields overwritten. The
/// struct serializes straight into the template engine's context, so field
/// names here are the names templates use.
#[derive(Debug, Clone, Serialize)]
pub struct RenderContext {
    pub module_name: String,
    pub port: String,
    /// Database identifier, empty when no database add-on applies
    pub db_type: String,
    /// Entity names in declaration order; empty means default fan-out
    pub entities: Vec<String>,
    /// Current entity, capitalized ("Order"); set per fan-out iteration
    pub entity: String,
    /// Current entity, lowercased ("order"); set per fan-out iteration
    pub lower_entity: String,

    // framework fragments
    pub imports: &'static str,
    pub context_name: &'static str,
    pub context_type: &'static str,
    pub bind: &'static str,
    pub json: &'static str,
    pub router: &'static str,
    pub start: &'static str,
    pub other_imports: &'static str,
    pub get: &'static str,
    pub full_context: &'static str,
    pub to_the_client: &'static str,
    pub response: &'static str,
    pub import_router: &'static str,
    pub import_handler: &'static str,

    // database fragments
    pub service_name: &'static str,
    pub image: &'static str,
    pub environment: &'static str,
    pub db_port: &'static str,
    pub volume: &'static str,
    pub volume_name: &'static str,
    pub db_name: &'static str,
    pub db_env_prefix: &'static str,
    pub db_import: &'static str,
    pub driver: &'static str,
    pub dsn: &'static str,
}

impl RenderContext {
    /// Assemble the base context from a descriptor and the resolved registry
    /// entries. Current-entity fields start empty; the engine overwrites them
    /// per fan-out iteration.
    pub fn new(
        descriptor: &ProjectDescriptor,
        router: Option<RouterKind>,
        database: Option<DatabaseKind>,
    ) -> Self {
        let fw = router.map(|r| r.fragments()).unwrap_or_default();
        let db = database.map(|d| d.fragments()).unwrap_or_default();
        Self {
            module_name: descriptor.name.clone(),
            port: descriptor.port.clone(),
            db_type: database.map(|d| d.as_str().to_string()).unwrap_or_default(),
            entities: descriptor.entities.clone(),
            entity: String::new(),
            lower_entity: String::new(),
            imports: fw.imports,
            context_name: fw.context_name,
            context_type: fw.context_type,
            bind: fw.bind,
            json: fw.json,
            router: fw.router,
            start: fw.start,
            other_imports: fw.other_imports,
            get: fw.get,
            full_context: fw.full_context,
            to_the_client: fw.to_the_client,
            response: fw.response,
            import_router: fw.import_router,
            import_handler: fw.import_handler,
            service_name: db.service_name,
            image: db.image,
            environment: db.environment,
            db_port: db.port,
            volume: db.volume,
            volume_name: db.volume_name,
            db_name: db.db_name,
            db_env_prefix: db.db_env_prefix,
            db_import: db.import,
            driver: db.driver,
            dsn: db.dsn,
        }
    }

    /// Independent copy with the current-entity fields set for `name`:
    /// `entity` gets the capitalized form, `lower_entity` the lowercased one.
    pub fn for_entity(&self, name: &str) -> Self {
        let mut ctx = self.clone();
        ctx.entity = capitalize(name);
        ctx.lower_entity = name.to_lowercase();
        ctx
    }
}

/// Uppercase the first character, leaving the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
