//! Embedded template asset tree.
//!
//! Every file under the repository's `templates/` directory is compiled into
//! the binary with `include_str!` and listed in one manifest. The tree is
//! read-only and lives for the whole process; the engine only ever borrows
//! views of it.

/// One template unit: a slash-separated relative path and its raw content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateFile<'a> {
    pub path: &'a str,
    pub content: &'a str,
}

macro_rules! asset {
    ($path:literal) => {
        TemplateFile {
            path: $path,
            content: include_str!(concat!("../../templates/", $path)),
        }
    };
}

/// Manifest of every embedded template, grouped by root.
pub const EMBEDDED: &[TemplateFile<'static>] = &[
    // shared/common root
    asset!("common/Makefile.tmpl"),
    asset!("common/README.md.tmpl"),
    asset!("common/env.tmpl"),
    asset!("common/golang-ci.yml.tmpl"),
    // one root per router
    asset!("rest/gin/go.mod.tmpl"),
    asset!("rest/gin/main.go.tmpl"),
    asset!("rest/gin/internal/handler/example_handler.go.tmpl"),
    asset!("rest/gin/internal/model/example.go.tmpl"),
    asset!("rest/gin/internal/router/router.go.tmpl"),
    asset!("rest/chi/go.mod.tmpl"),
    asset!("rest/chi/main.go.tmpl"),
    asset!("rest/chi/internal/handler/example_handler.go.tmpl"),
    asset!("rest/chi/internal/model/example.go.tmpl"),
    asset!("rest/chi/internal/router/router.go.tmpl"),
    asset!("rest/echo/go.mod.tmpl"),
    asset!("rest/echo/main.go.tmpl"),
    asset!("rest/echo/internal/handler/example_handler.go.tmpl"),
    asset!("rest/echo/internal/model/example.go.tmpl"),
    asset!("rest/echo/internal/router/router.go.tmpl"),
    asset!("rest/fiber/go.mod.tmpl"),
    asset!("rest/fiber/main.go.tmpl"),
    asset!("rest/fiber/internal/handler/example_handler.go.tmpl"),
    asset!("rest/fiber/internal/model/example.go.tmpl"),
    asset!("rest/fiber/internal/router/router.go.tmpl"),
    asset!("rest/mux/go.mod.tmpl"),
    asset!("rest/mux/main.go.tmpl"),
    asset!("rest/mux/internal/handler/example_handler.go.tmpl"),
    asset!("rest/mux/internal/model/example.go.tmpl"),
    asset!("rest/mux/internal/router/router.go.tmpl"),
    // one root per database
    asset!("db/postgres/docker-compose.yml.tmpl"),
    asset!("db/mysql/docker-compose.yml.tmpl"),
    asset!("db/mongodb/docker-compose.yml.tmpl"),
    asset!("db/sqlite/docker-compose.yml.tmpl"),
    asset!("db/cockroachdb/docker-compose.yml.tmpl"),
    asset!("db/mariadb/docker-compose.yml.tmpl"),
    // shared database wiring root
    asset!("db/database/database.go.tmpl"),
];

/// Read-only view over a set of template files.
///
/// Production code uses [`TemplateTree::embedded`]; tests build ad-hoc trees
/// from in-memory files via [`TemplateTree::from_files`].
#[derive(Debug, Clone)]
pub struct TemplateTree<'a> {
    files: Vec<TemplateFile<'a>>,
}

impl TemplateTree<'static> {
    /// View over the compiled-in template tree.
    pub fn embedded() -> Self {
        Self {
            files: EMBEDDED.to_vec(),
        }
    }
}

impl<'a> TemplateTree<'a> {
    pub fn from_files(files: Vec<TemplateFile<'a>>) -> Self {
        Self { files }
    }

    /// Files under `root`, as `(relative_path, content)` pairs in path order.
    ///
    /// `root` matches whole path components only: `db/data` does not match
    /// files under `db/database/`.
    pub fn files_under(&self, root: &str) -> Vec<(&'a str, &'a str)> {
        let prefix = format!("{}/", root.trim_end_matches('/'));
        let mut out: Vec<(&'a str, &'a str)> = self
            .files
            .iter()
            .filter_map(|f| f.path.strip_prefix(&prefix).map(|rel| (rel, f.content)))
            .collect();
        out.sort_by_key(|(rel, _)| *rel);
        out
    }
}
