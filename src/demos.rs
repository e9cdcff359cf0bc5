//! Bundled example graphs
//!
//! Each example exercises a different part of the builder. They back the
//! `demo` command and double as fixtures for the serializer tests.

use crate::attrs;
use crate::builder::{Container, digraph, graph};
use crate::error::Result;
use crate::model::{AttrComponent, Compass, Endpoint, Graph, NodeId, Subgraph, html};

/// All examples as `(name, graph)` pairs, in a fixed order
pub fn all() -> Result<Vec<(&'static str, Graph)>> {
    Ok(vec![
        ("hello", hello()?),
        ("pipeline", pipeline()?),
        ("clusters", clusters()?),
        ("records", records()?),
        ("html", html_table()?),
        ("strict", strict_multi_edges()?),
    ])
}

pub fn hello() -> Result<Graph> {
    let mut g = graph(
        Some("hello"),
        attrs! { "fontname" => "sans serif", "bgcolor" => "#fff0e0" },
    );
    g.edge("a", &["b"], attrs! {})?;
    Ok(g)
}

pub fn pipeline() -> Result<Graph> {
    let mut g = digraph(Some("pipeline"), attrs! { "rankdir" => "LR" });
    g.attr_for(
        AttrComponent::Node,
        attrs! { "shape" => "box", "style" => "rounded" },
    )
    .attr_for(AttrComponent::Edge, attrs! { "color" => "#64B5F6" })
    .node("lex", attrs! { "label" => "tokenize" })
    .edge("lex", &["parse", "check", "emit"], attrs! {})?
    .edge("check", &["report"], attrs! { "style" => "dashed", "label" => "errors" })?;
    Ok(g)
}

/// Two clusters joined by cluster-level and node-level edges
pub fn clusters() -> Result<Graph> {
    let mut g = digraph(Some("clusters"), attrs! { "compound" => true });

    g.subgraph(
        Some("cluster_frontend"),
        attrs! { "label" => "frontend", "color" => "#1976D2" },
    )
    .edge("ui", &["state"], attrs! {})?;

    g.subgraph(
        Some("cluster_backend"),
        attrs! { "label" => "backend", "color" => "#F57C00" },
    )
    .edge("api", &["db"], attrs! {})?;

    g.edge(
        "state",
        &["api"],
        attrs! { "ltail" => "cluster_frontend", "lhead" => "cluster_backend" },
    )?;

    let mut workers = Subgraph::new(None, g.is_directed());
    workers.node("worker_1", attrs! {}).node("worker_2", attrs! {});
    g.edge_between(
        NodeId::new("api"),
        vec![Endpoint::Subgraph(workers)],
        attrs! { "style" => "dotted" },
    )?;

    Ok(g)
}

/// Record-shaped nodes connected through ports and compass points
pub fn records() -> Result<Graph> {
    let mut g = digraph(Some("records"), attrs! {});
    g.attr("node", attrs! { "shape" => "record" })?
        .node("struct1", attrs! { "label" => "<f0> left|<f1> mid|<f2> right" })
        .node("struct2", attrs! { "label" => "<f0> one|<f1> two" })
        .edge("struct1:f1", &["struct2:f0"], attrs! {})?
        .edge_between(
            NodeId::with_compass("struct1", Some("f2"), Compass::S),
            vec![Endpoint::Node(NodeId::with_compass(
                "struct2",
                None,
                Compass::NE,
            ))],
            attrs! {},
        )?;
    Ok(g)
}

pub fn html_table() -> Result<Graph> {
    let mut g = graph(Some("html"), attrs! {});
    g.attr_for(AttrComponent::Node, attrs! { "shape" => "plaintext" })
        .node(
            "table",
            attrs! {
                "label" => html(
                    "<table border=\"0\" cellborder=\"1\"><tr><td port=\"in\">in</td><td><b>core</b></td><td port=\"out\">out</td></tr></table>"
                )
            },
        )
        .edge("source", &["table:in"], attrs! {})?
        .edge("table:out", &["sink"], attrs! {})?;
    Ok(g)
}

/// A strict graph; Graphviz merges the repeated edge
pub fn strict_multi_edges() -> Result<Graph> {
    let mut g = graph(Some("strict"), attrs! {});
    g.strict()
        .edge("a", &["b"], attrs! {})?
        .edge("a", &["b"], attrs! { "color" => "red" })?
        .assign("label", "edges between a and b are merged");
    Ok(g)
}
