#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use crate::descriptor::ProjectDescriptor;
use crate::registry::RouterKind;
use std::io;
use std::path::{Path, PathBuf};

fn tree_of(files: Vec<(&'static str, &'static str)>) -> TemplateTree<'static> {
    TemplateTree::from_files(
        files
            .into_iter()
            .map(|(path, content)| TemplateFile { path, content })
            .collect(),
    )
}

fn descriptor(entities: &[&str]) -> ProjectDescriptor {
    ProjectDescriptor {
        name: "demo".into(),
        port: "8080".into(),
        location: ".".into(),
        router: "gin".into(),
        database: String::new(),
        entities: entities.iter().map(|e| e.to_string()).collect(),
    }
}

#[test]
fn output_name_strips_suffix() {
    assert_eq!(output_name("rest/gin", "main.go.tmpl"), "main.go");
    assert_eq!(
        output_name("rest/gin", "internal/handler/example_handler.go.tmpl"),
        "internal/handler/example_handler.go"
    );
}

#[test]
fn output_name_without_suffix_passes_through() {
    assert_eq!(output_name("rest/gin", "LICENSE"), "LICENSE");
    // suffix match only: mid-path ".tmpl" is left alone
    assert_eq!(output_name("rest/gin", "a.tmpl.bak"), "a.tmpl.bak");
}

#[test]
fn output_name_hidden_rule_only_under_common() {
    assert_eq!(output_name("common", "env.tmpl"), ".env");
    assert_eq!(output_name("common", "golang-ci.yml.tmpl"), ".golang-ci.yml");
    // same base names outside the common root keep their name
    assert_eq!(output_name("rest/gin", "env.tmpl"), "env");
    assert_eq!(output_name("db/postgres", "golang-ci.yml.tmpl"), "golang-ci.yml");
    // other common files are not hidden
    assert_eq!(output_name("common", "Makefile.tmpl"), "Makefile");
}

#[test]
fn output_name_hidden_rule_applies_to_base_name() {
    assert_eq!(output_name("common", "ci/golang-ci.yml.tmpl"), "ci/.golang-ci.yml");
}

#[test]
fn fan_out_one_file_per_entity() {
    let tree = tree_of(vec![(
        "handler/example_handler.go.tmpl",
        "package handler // {{ entity }}",
    )]);
    let ctx = RenderContext::new(&descriptor(&["order", "user", "invoice"]), None, None);
    let renderer = Renderer::new(&tree, ctx, None);
    let mut sink = MemorySink::default();
    renderer.render_tree("handler", Path::new("out"), &mut sink).unwrap();

    let paths: Vec<PathBuf> = sink.files.keys().cloned().collect();
    assert_eq!(
        paths,
        vec![
            PathBuf::from("out/invoice_handler.go"),
            PathBuf::from("out/order_handler.go"),
            PathBuf::from("out/user_handler.go"),
        ]
    );
    assert_eq!(
        sink.files[Path::new("out/order_handler.go")],
        "package handler // Order"
    );
}

#[test]
fn fan_out_replaces_first_occurrence_only() {
    let tree = tree_of(vec![("r/example_example.go.tmpl", "x")]);
    let ctx = RenderContext::new(&descriptor(&["order"]), None, None);
    let renderer = Renderer::new(&tree, ctx, None);
    let mut sink = MemorySink::default();
    renderer.render_tree("r", Path::new("out"), &mut sink).unwrap();
    assert!(sink.files.contains_key(Path::new("out/order_example.go")));
}

#[test]
fn empty_entity_list_uses_default_and_replaces_all() {
    let tree = tree_of(vec![(
        "r/example_example.go.tmpl",
        "// {{ entity }}/{{ lower_entity }}",
    )]);
    let ctx = RenderContext::new(&descriptor(&[]), None, None);
    let renderer = Renderer::new(&tree, ctx, None);
    let mut sink = MemorySink::default();
    renderer.render_tree("r", Path::new("out"), &mut sink).unwrap();

    assert_eq!(sink.files.len(), 1);
    assert_eq!(sink.files[Path::new("out/user_user.go")], "// User/user");
}

#[test]
fn empty_entity_list_is_idempotent() {
    let tree = tree_of(vec![("r/example.go.tmpl", "// {{ entity }}")]);
    let ctx = RenderContext::new(&descriptor(&[]), None, None);
    let renderer = Renderer::new(&tree, ctx, None);
    let mut sink = MemorySink::default();
    renderer.render_tree("r", Path::new("out"), &mut sink).unwrap();
    let first = sink.files[Path::new("out/user.go")].clone();
    renderer.render_tree("r", Path::new("out"), &mut sink).unwrap();
    assert_eq!(sink.files[Path::new("out/user.go")], first);
    assert_eq!(sink.files.len(), 1);
}

#[test]
fn files_without_token_collide_last_write_wins() {
    let tree = tree_of(vec![("r/router.go.tmpl", "// {{ lower_entity }}")]);
    let ctx = RenderContext::new(&descriptor(&["order", "user"]), None, None);
    let renderer = Renderer::new(&tree, ctx, None);
    let mut sink = MemorySink::default();
    renderer.render_tree("r", Path::new("out"), &mut sink).unwrap();
    assert_eq!(sink.files.len(), 1);
    // last entity in declaration order wins
    assert_eq!(sink.files[Path::new("out/router.go")], "// user");
}

#[test]
fn rendered_content_keeps_trailing_newline() {
    let tree = tree_of(vec![("r/config.yml.tmpl", "port: {{ port }}\n")]);
    let ctx = RenderContext::new(&descriptor(&[]), None, None);
    let renderer = Renderer::new(&tree, ctx, None);
    let mut sink = MemorySink::default();
    renderer.render_tree("r", Path::new("out"), &mut sink).unwrap();
    assert_eq!(sink.files[Path::new("out/config.yml")], "port: 8080\n");
}

#[test]
fn capitalize_filter_preserves_mixed_case() {
    let tree = tree_of(vec![]);
    let ctx = RenderContext::new(&descriptor(&["APIKey"]), None, None);
    let renderer = Renderer::new(&tree, ctx.clone(), None);
    let out = renderer
        .render_content(
            "t",
            "{% for e in entities %}handler.Get{{ e | capitalize }}s{% endfor %}",
            &ctx,
        )
        .unwrap();
    // must name the same symbol the handler file declares
    assert_eq!(out, "handler.GetAPIKeys");
    assert_eq!(ctx.for_entity("APIKey").entity, "APIKey");
}

#[test]
fn mixed_case_entity_handler_and_filename_agree() {
    let tree = tree_of(vec![(
        "r/example_handler.go.tmpl",
        "func Get{{ entity }}s() {}\n",
    )]);
    let ctx = RenderContext::new(&descriptor(&["APIKey"]), None, None);
    let renderer = Renderer::new(&tree, ctx, None);
    let mut sink = MemorySink::default();
    renderer.render_tree("r", Path::new("out"), &mut sink).unwrap();
    assert_eq!(
        sink.files[Path::new("out/apikey_handler.go")],
        "func GetAPIKeys() {}\n"
    );
}

#[test]
fn render_content_exposes_api_group_function() {
    let tree = tree_of(vec![]);
    let ctx = RenderContext::new(&descriptor(&["order"]), Some(RouterKind::Gin), None);
    let renderer = Renderer::new(&tree, ctx.clone(), Some(RouterKind::Gin));
    let entity_ctx = ctx.for_entity("order");
    let out = renderer
        .render_content("t", "{{ api_group(entity, get, lower_entity) }}", &entity_ctx)
        .unwrap();
    assert!(out.contains("api.Group(\"/order\")"));
    assert!(out.contains("order.GET(\"\", handler.GetOrders)"));
    // pure: same inputs, same bytes
    let again = renderer
        .render_content("t", "{{ api_group(entity, get, lower_entity) }}", &entity_ctx)
        .unwrap();
    assert_eq!(out, again);
}

#[test]
fn render_content_without_router_gives_empty_group() {
    let tree = tree_of(vec![]);
    let ctx = RenderContext::new(&descriptor(&[]), None, None);
    let renderer = Renderer::new(&tree, ctx.clone(), None);
    let out = renderer
        .render_content("t", "[{{ api_group(entity, get, lower_entity) }}]", &ctx)
        .unwrap();
    assert_eq!(out, "[]");
}

#[test]
fn template_error_carries_template_path() {
    let tree = tree_of(vec![("r/bad.go.tmpl", "{{ not_a_field }}")]);
    let ctx = RenderContext::new(&descriptor(&[]), None, None);
    let renderer = Renderer::new(&tree, ctx, None);
    let mut sink = MemorySink::default();
    let err = renderer
        .render_tree("r", Path::new("out"), &mut sink)
        .unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("r/bad.go.tmpl"), "missing template path: {msg}");
    assert!(sink.files.is_empty());
}

#[test]
fn syntax_error_does_not_block_other_files() {
    let tree = tree_of(vec![
        ("r/bad.go.tmpl", "{% if %}"),
        ("r/good.go.tmpl", "fine"),
    ]);
    let ctx = RenderContext::new(&descriptor(&[]), None, None);
    let renderer = Renderer::new(&tree, ctx, None);
    let mut sink = MemorySink::default();
    let err = renderer
        .render_tree("r", Path::new("out"), &mut sink)
        .unwrap_err();
    // the healthy file was still attempted and written
    assert_eq!(sink.files[Path::new("out/good.go")], "fine");
    assert!(matches!(err, RenderError::Failed { .. }));
}

/// Sink that refuses writes whose path contains a marker, for exercising
/// per-entity failure isolation.
struct FlakySink {
    inner: MemorySink,
    poison: &'static str,
}

impl RenderSink for FlakySink {
    fn ensure_dir(&mut self, path: &Path) -> io::Result<()> {
        self.inner.ensure_dir(path)
    }

    fn write_file(&mut self, path: &Path, contents: &str) -> io::Result<()> {
        if path.to_string_lossy().contains(self.poison) {
            return Err(io::Error::other("disk said no"));
        }
        self.inner.write_file(path, contents)
    }
}

#[test]
fn one_entity_failure_does_not_stop_the_others() {
    let tree = tree_of(vec![("r/example_handler.go.tmpl", "// {{ entity }}")]);
    let ctx = RenderContext::new(&descriptor(&["alpha", "order", "zeta"]), None, None);
    let renderer = Renderer::new(&tree, ctx, None);
    let mut sink = FlakySink {
        inner: MemorySink::default(),
        poison: "order",
    };
    let err = renderer
        .render_tree("r", Path::new("out"), &mut sink)
        .unwrap_err();

    // both healthy entities landed
    assert!(sink.inner.files.contains_key(Path::new("out/alpha_handler.go")));
    assert!(sink.inner.files.contains_key(Path::new("out/zeta_handler.go")));
    // and the aggregate error names the failed destination
    match err {
        RenderError::Failed { failures } => {
            assert_eq!(failures.len(), 1);
            assert!(failures[0].to_string().contains("order_handler.go"));
        }
        other => panic!("expected Failed, got {other}"),
    }
}

#[test]
fn run_fails_fast_across_jobs() {
    let tree = tree_of(vec![
        ("a/bad.go.tmpl", "{% if %}"),
        ("b/fine.go.tmpl", "ok"),
    ]);
    let ctx = RenderContext::new(&descriptor(&[]), None, None);
    let renderer = Renderer::new(&tree, ctx, None);
    let jobs = vec![
        RenderJob::new("a", "out/a"),
        RenderJob::new("b", "out/b"),
    ];
    let mut sink = MemorySink::default();
    assert!(renderer.run(&jobs, &mut sink).is_err());
    // second job never ran
    assert!(!sink.files.contains_key(Path::new("out/b/fine.go")));
}

#[test]
fn job_order_allows_nested_destinations() {
    let tree = tree_of(vec![
        ("outer/keep.tmpl", "outer"),
        ("inner/db.go.tmpl", "inner"),
    ]);
    let ctx = RenderContext::new(&descriptor(&[]), None, None);
    let renderer = Renderer::new(&tree, ctx, None);
    let jobs = vec![
        RenderJob::new("outer", "proj"),
        RenderJob::new("inner", "proj/internal/db"),
    ];
    let mut sink = MemorySink::default();
    renderer.run(&jobs, &mut sink).unwrap();
    assert!(sink.files.contains_key(Path::new("proj/keep")));
    assert!(sink.files.contains_key(Path::new("proj/internal/db/db.go")));
}
