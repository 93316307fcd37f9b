//! Project descriptor: the normalized input the rendering engine consumes.
//!
//! Flags and the optional YAML config file both funnel into one
//! [`ProjectDescriptor`] value that is passed down explicitly — no ambient
//! state. When a config file is supplied, its values win over same-purpose
//! flag values.

use anyhow::Context;
use serde::Deserialize;
use std::path::Path;

/// Everything the scaffolder needs to know about one project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDescriptor {
    /// Project (and Go module) name; also the output directory name
    pub name: String,
    /// Port the generated service listens on
    pub port: String,
    /// Parent directory the project is created under
    pub location: String,
    /// Router identifier ("gin", "chi", ...); empty disables router templates
    pub router: String,
    /// Database identifier ("postgres", ...); empty disables the db add-on
    pub database: String,
    /// Entity names, in declaration order
    pub entities: Vec<String>,
}

/// YAML config file: a `project` section plus a top-level entity list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default)]
    pub entities: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectSection {
    #[serde(default)]
    pub name: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub location: String,
    #[serde(default, rename = "db")]
    pub database: String,
    #[serde(default)]
    pub router: String,
}

impl ProjectDescriptor {
    /// Build a descriptor from command-line values.
    pub fn from_flags(
        name: Option<String>,
        port: String,
        router: Option<String>,
        database: Option<String>,
        entities: Vec<String>,
    ) -> Self {
        Self {
            name: name.unwrap_or_default(),
            port,
            location: ".".to_string(),
            router: router.unwrap_or_default(),
            database: database.unwrap_or_default(),
            entities,
        }
    }

    /// Overlay values from a config file. File values take precedence over
    /// flag values for every field the file actually sets.
    pub fn merge_config(&mut self, cfg: &ConfigFile) {
        if !cfg.project.name.is_empty() {
            self.name = cfg.project.name.clone();
        }
        if let Some(port) = cfg.project.port {
            self.port = port.to_string();
        }
        if !cfg.project.location.is_empty() {
            self.location = cfg.project.location.clone();
        }
        if !cfg.project.router.is_empty() {
            self.router = cfg.project.router.clone();
        }
        if !cfg.project.database.is_empty() {
            self.database = cfg.project.database.clone();
        }
        if !cfg.entities.is_empty() {
            self.entities = cfg.entities.clone();
        }
    }

    /// Input validation, run before any filesystem mutation.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("project name is required (pass it as an argument or via --config)");
        }
        Ok(())
    }
}

/// Read and parse a YAML config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid YAML; nothing
/// has been rendered at that point.
pub fn read_config(path: &Path) -> anyhow::Result<ConfigFile> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {path:?}"))?;
    let cfg: ConfigFile = serde_yaml::from_str(&raw)
        .with_context(|| format!("failed to parse config file {path:?}"))?;
    Ok(cfg)
}
