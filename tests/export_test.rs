//! Exporter behaviour through the public API

use std::cell::RefCell;
use std::fs;

use dotweave::export::{Engine, Exporter, GraphvizExporter, ImageFormat};
use dotweave::{Container, DotError, attrs, digraph, render};
use tempfile::TempDir;

#[derive(Default)]
struct FakeExporter {
    requests: RefCell<Vec<(Engine, ImageFormat)>>,
}

impl Exporter for FakeExporter {
    fn render_to_bytes(
        &self,
        dot: &str,
        engine: Engine,
        format: ImageFormat,
    ) -> dotweave::Result<Vec<u8>> {
        self.requests.borrow_mut().push((engine, format));
        Ok(format!("{format}:{dot}").into_bytes())
    }
}

#[test]
fn test_export_graph_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a/b/c/graph.svg");

    let mut g = digraph(None, attrs! {});
    g.edge("a", &["b"], attrs! {}).unwrap();

    let exporter = FakeExporter::default();
    exporter
        .export_graph(&g, &path, Engine::Twopi, ImageFormat::Svg)
        .unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        format!("svg:{}", render(&g))
    );
    assert_eq!(
        exporter.requests.borrow().as_slice(),
        [(Engine::Twopi, ImageFormat::Svg)]
    );
}

#[test]
fn test_missing_engine_keeps_dot_available() {
    let mut g = digraph(Some("kept"), attrs! {});
    g.node("n", attrs! {});
    let dot = render(&g);

    let exporter = GraphvizExporter::new().with_executable("/nonexistent/dotweave/dot");
    let err = exporter
        .render_to_bytes(&dot, Engine::Dot, ImageFormat::Png)
        .unwrap_err();

    assert!(matches!(err, DotError::EngineNotFound { .. }));
    assert_eq!(dot, "digraph \"kept\" {\n  \"n\";\n}");
}

