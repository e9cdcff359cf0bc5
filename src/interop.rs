//! Conversion from `petgraph` graphs
//!
//! ```
//! use dotweave::interop::from_petgraph;
//! use dotweave::{attrs, render};
//! use petgraph::graph::DiGraph;
//!
//! # fn main() -> Result<(), dotweave::error::DotError> {
//! let mut deps = DiGraph::<&str, &str>::new();
//! let app = deps.add_node("app");
//! let core = deps.add_node("core");
//! deps.add_edge(app, core, "normal");
//!
//! let graph = from_petgraph(&deps, |_| attrs! {}, |kind| attrs! { "label" => *kind })?;
//! assert_eq!(
//!     render(&graph),
//!     "digraph {\n  \"app\";\n  \"core\";\n  \"app\"->\"core\"[label=\"normal\";];\n}"
//! );
//! # Ok(())
//! # }
//! ```

use std::fmt::Display;

use petgraph::EdgeType;
use petgraph::graph::IndexType;
use petgraph::visit::EdgeRef;

use crate::builder::Container;
use crate::error::Result;
use crate::model::{AttributeList, Endpoint, Graph, NodeId};

/// Build a DOT graph from a petgraph graph
///
/// Every node is declared, in index order, under its `Display` text; every
/// edge follows in index order. Nodes whose text is equal collapse into one
/// DOT node. Directedness follows the petgraph edge type.
pub fn from_petgraph<N, E, Ty, Ix, FN, FE>(
    graph: &petgraph::Graph<N, E, Ty, Ix>,
    mut node_attrs: FN,
    mut edge_attrs: FE,
) -> Result<Graph>
where
    N: Display,
    Ty: EdgeType,
    Ix: IndexType,
    FN: FnMut(&N) -> AttributeList,
    FE: FnMut(&E) -> AttributeList,
{
    let mut out = Graph::new(None, Ty::is_directed());

    for index in graph.node_indices() {
        let weight = &graph[index];
        out.node(NodeId::new(weight.to_string()), node_attrs(weight));
    }

    for edge in graph.edge_references() {
        let from = NodeId::new(graph[edge.source()].to_string());
        let to = NodeId::new(graph[edge.target()].to_string());
        out.edge_between(from, vec![Endpoint::Node(to)], edge_attrs(edge.weight()))?;
    }

    Ok(out)
}
