//! The template rendering engine: tree walk, filename derivation and
//! per-entity fan-out.
//!
//! A [`Renderer`] executes a list of [`RenderJob`]s in declaration order.
//! Job order matters: a later job may write into a directory an earlier job
//! created (the shared database wiring lands under `internal/db/`). The run
//! fails fast on the first job error, but inside one job every file and every
//! entity is attempted and all failures are collected before the job reports
//! them together.
//!
//! Filename derivation, for each template file:
//!
//! 1. strip the `.tmpl` suffix (suffix match only — files without it keep
//!    their name and are still parsed as templates);
//! 2. under the `common` root only, the base names `env` and `golang-ci.yml`
//!    gain a leading dot so they come out hidden;
//! 3. replace the literal `example` token with the entity name, lowercased —
//!    every occurrence when falling back to the default entity, only the
//!    first when fanning out over a declared entity list.

use std::path::{Path, PathBuf};

use minijinja::{Environment, UndefinedBehavior};
use thiserror::Error;
use tracing::debug;

use super::assets::TemplateTree;
use super::context::{capitalize, RenderContext};
use super::sink::RenderSink;
use crate::registry::RouterKind;

/// Marker suffix identifying template files.
pub const TEMPLATE_SUFFIX: &str = ".tmpl";

/// Literal token in template filenames that fan-out rewrites.
pub const PLACEHOLDER: &str = "example";

/// Entity used when the descriptor declares none.
pub const DEFAULT_ENTITY: &str = "user";

/// The shared template root with the hidden-file renaming rule.
pub const COMMON_ROOT: &str = "common";

/// Base names that become hidden files, under the common root only.
const HIDDEN_BASENAMES: [&str; 2] = ["env", "golang-ci.yml"];

/// One unit of work: a template subtree rendered into a destination root.
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub template_root: String,
    pub dest: PathBuf,
}

impl RenderJob {
    pub fn new(template_root: impl Into<String>, dest: impl Into<PathBuf>) -> Self {
        Self {
            template_root: template_root.into(),
            dest: dest.into(),
        }
    }
}

/// Engine failure. Carries enough path context to point at the offending
/// template or destination; a job surfaces every collected failure at once.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template {template}: {source}")]
    Template {
        template: String,
        #[source]
        source: Box<minijinja::Error>,
    },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} file(s) failed to render:\n{}", failures.len(), failure_list(failures))]
    Failed { failures: Vec<RenderError> },
}

fn failure_list(failures: &[RenderError]) -> String {
    failures
        .iter()
        .map(|f| format!("  - {f}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Derive the output-relative path for a template file.
///
/// Strips the template suffix and applies the common-root hidden-file rule.
/// The entity token is handled separately during fan-out.
pub fn output_name(root: &str, rel_path: &str) -> String {
    let stripped = rel_path.strip_suffix(TEMPLATE_SUFFIX).unwrap_or(rel_path);
    if root == COMMON_ROOT {
        let (dir, base) = match stripped.rsplit_once('/') {
            Some((dir, base)) => (Some(dir), base),
            None => (None, stripped),
        };
        // the dot goes on the base name, so a nested file keeps its
        // directory visible: ci/golang-ci.yml.tmpl -> ci/.golang-ci.yml
        if HIDDEN_BASENAMES.contains(&base) {
            return match dir {
                Some(dir) => format!("{dir}/.{base}"),
                None => format!(".{base}"),
            };
        }
    }
    stripped.to_string()
}

/// Walks template trees and materializes rendered output through a sink.
pub struct Renderer<'a> {
    tree: &'a TemplateTree<'a>,
    context: RenderContext,
    router: Option<RouterKind>,
}

impl<'a> Renderer<'a> {
    pub fn new(tree: &'a TemplateTree<'a>, context: RenderContext, router: Option<RouterKind>) -> Self {
        Self {
            tree,
            context,
            router,
        }
    }

    /// Execute the jobs in order, failing fast on the first job error.
    /// Already-written output is never rolled back.
    pub fn run(&self, jobs: &[RenderJob], sink: &mut dyn RenderSink) -> Result<(), RenderError> {
        for job in jobs {
            self.render_tree(&job.template_root, &job.dest, sink)?;
        }
        Ok(())
    }

    /// Render every file under `root` into `dest`, fanning out over the
    /// entity list. All failures within the tree are collected and reported
    /// together once the walk completes.
    pub fn render_tree(
        &self,
        root: &str,
        dest: &Path,
        sink: &mut dyn RenderSink,
    ) -> Result<(), RenderError> {
        sink.ensure_dir(dest).map_err(|source| RenderError::Io {
            path: dest.to_path_buf(),
            source,
        })?;

        let mut failures = Vec::new();
        for (rel, content) in self.tree.files_under(root) {
            let template_path = format!("{root}/{rel}");
            let out_rel = output_name(root, rel);

            if self.context.entities.is_empty() {
                // Default fan-out: one output, every token occurrence replaced.
                let name = out_rel.replace(PLACEHOLDER, DEFAULT_ENTITY);
                let ctx = self.context.for_entity(DEFAULT_ENTITY);
                self.render_file(&template_path, content, &ctx, &dest.join(name), sink, &mut failures);
            } else {
                for entity in &self.context.entities {
                    let lower = entity.to_lowercase();
                    let name = out_rel.replacen(PLACEHOLDER, &lower, 1);
                    let ctx = self.context.for_entity(entity);
                    self.render_file(&template_path, content, &ctx, &dest.join(name), sink, &mut failures);
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            Err(RenderError::Failed { failures })
        }
    }

    /// Render one template into one destination file. Failures are recorded,
    /// not returned, so one entity's failure never blocks the others.
    fn render_file(
        &self,
        template_path: &str,
        content: &str,
        ctx: &RenderContext,
        target: &Path,
        sink: &mut dyn RenderSink,
        failures: &mut Vec<RenderError>,
    ) {
        let rendered = match self.render_content(template_path, content, ctx) {
            Ok(rendered) => rendered,
            Err(err) => {
                failures.push(err);
                return;
            }
        };

        if let Some(parent) = target.parent() {
            if let Err(source) = sink.ensure_dir(parent) {
                failures.push(RenderError::Io {
                    path: parent.to_path_buf(),
                    source,
                });
                return;
            }
        }
        match sink.write_file(target, &rendered) {
            Ok(()) => debug!(template = template_path, target = %target.display(), "rendered"),
            Err(source) => failures.push(RenderError::Io {
                path: target.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse and substitute one template body against a context copy.
    ///
    /// The framework route-group generator is exposed to templates as the
    /// callable `api_group(entity, verb, lower_entity)` — a pure function of
    /// its three string arguments. Without a router it returns an empty
    /// string.
    pub fn render_content(
        &self,
        template_path: &str,
        content: &str,
        ctx: &RenderContext,
    ) -> Result<String, RenderError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        // templates pass through verbatim apart from substitutions, final
        // newline included
        env.set_keep_trailing_newline(true);
        // shadows the builtin filter, which lowercases the tail and would
        // disagree with the fan-out naming for mixed-case entities
        env.add_filter("capitalize", |name: String| capitalize(&name));
        let router = self.router;
        env.add_function(
            "api_group",
            move |entity: String, verb: String, lower_entity: String| {
                router
                    .map(|r| r.route_group(&entity, &verb, &lower_entity))
                    .unwrap_or_default()
            },
        );

        let template = env
            .template_from_str(content)
            .map_err(|source| RenderError::Template {
                template: template_path.to_string(),
                source: Box::new(source),
            })?;
        template.render(ctx).map_err(|source| RenderError::Template {
            template: template_path.to_string(),
            source: Box::new(source),
        })
    }
}
