//! Serializer tests against reference DOT output

use dotweave::model::Statement;
use dotweave::{Container, DotRenderer, attrs, digraph, graph, html, render};
use pretty_assertions::assert_eq;

#[test]
fn test_directed_edge() {
    let mut g = digraph(None, attrs! {});
    g.edge("a", &["b"], attrs! {}).unwrap();

    assert_eq!(render(&g), "digraph {\n  \"a\"->\"b\";\n}");
}

#[test]
fn test_undirected_edge_with_label() {
    let mut g = graph(None, attrs! {});
    g.edge("a", &["b"], attrs! { "label" => "connect!" }).unwrap();

    assert_eq!(render(&g), "graph {\n  \"a\"--\"b\"[label=\"connect!\";];\n}");
}

#[test]
fn test_named_graph_with_attributes() {
    let mut g = graph(
        Some("hello"),
        attrs! { "fontname" => "sans serif", "bgcolor" => "#fff0e0" },
    );
    g.edge("a", &["b"], attrs! {}).unwrap();

    assert_eq!(
        render(&g),
        "graph \"hello\" {\n  graph[bgcolor=\"#fff0e0\";fontname=\"sans serif\";];\n  \"a\"--\"b\";\n}"
    );
}

#[test]
fn test_attribute_order_ignores_insertion_order() {
    let mut first = graph(None, attrs! {});
    first.node("n", attrs! { "shape" => "box", "color" => "red", "label" => "x" });

    let mut second = graph(None, attrs! {});
    second.node("n", attrs! { "label" => "x", "shape" => "box", "color" => "red" });

    assert_eq!(render(&first), render(&second));
    assert_eq!(
        render(&first),
        "graph {\n  \"n\"[color=\"red\";label=\"x\";shape=\"box\";];\n}"
    );
}

#[test]
fn test_render_is_idempotent() {
    let g = dotweave::demos::clusters().unwrap();
    let renderer = DotRenderer::new();

    assert_eq!(renderer.render(&g), renderer.render(&g));
    assert_eq!(render(&g), g.to_string());
    assert_eq!(render(&g), renderer.display(&g).to_string());
}

#[test]
fn test_same_calls_give_same_text() {
    let build = || {
        let mut g = digraph(Some("pipeline"), attrs! { "rankdir" => "LR" });
        g.attr("node", attrs! { "shape" => "box" })
            .unwrap()
            .edge("lex", &["parse", "emit"], attrs! {})
            .unwrap()
            .subgraph(Some("cluster_x"), attrs! { "label" => "x" })
            .node("inner", attrs! {});
        g
    };

    assert_eq!(render(&build()), render(&build()));
}

#[test]
fn test_declared_node_without_attributes() {
    let mut g = graph(None, attrs! {});
    g.node("n", attrs! {});

    assert_eq!(render(&g), "graph {\n  \"n\";\n}");
}

#[test]
fn test_subgraph_inherits_directedness() {
    let mut g = digraph(None, attrs! {});
    g.subgraph(None, attrs! {})
        .edge("x", &["y"], attrs! {})
        .unwrap();

    let dot = render(&g);
    assert!(dot.contains("    \"x\"->\"y\";\n"));
    assert!(!dot.contains("--"));

    let mut u = graph(None, attrs! {});
    u.subgraph(Some("s"), attrs! {})
        .subgraph(None, attrs! {})
        .edge("x", &["y"], attrs! {})
        .unwrap();
    assert!(render(&u).contains("      \"x\"--\"y\";\n"));
}

#[test]
fn test_html_label_is_raw() {
    let mut g = graph(None, attrs! {});
    g.node("t", attrs! { "label" => html("<b>bold</b>") });

    assert_eq!(render(&g), "graph {\n  \"t\"[label=<<b>bold</b>>;];\n}");
}

#[test]
fn test_statement_display() {
    let mut g = digraph(None, attrs! {});
    g.edge("a:out", &["b:in:n"], attrs! { "color" => "blue" })
        .unwrap();

    let Statement::Edge(edge) = &g.statements()[0] else {
        panic!("Expected edge statement");
    };
    assert_eq!(
        Statement::Edge(edge.clone()).to_string(),
        "\"a\":out->\"b\":in:n[color=\"blue\";]"
    );
}

#[test]
fn test_pipeline_demo_reference() {
    let expected = "digraph \"pipeline\" {
  graph[rankdir=\"LR\";];
  node[shape=\"box\";style=\"rounded\";];
  edge[color=\"#64B5F6\";];
  \"lex\"[label=\"tokenize\";];
  \"lex\"->\"parse\"->\"check\"->\"emit\";
  \"check\"->\"report\"[label=\"errors\";style=\"dashed\";];
}";

    assert_eq!(render(&dotweave::demos::pipeline().unwrap()), expected);
}
