//! # Graph Data Model
//!
//! In-memory representation of a DOT document.
//!
//! ## Components
//!
//! - **Graph**: the root container, directed or undirected, optionally
//!   strict and named
//! - **Subgraph**: a nested container that inherits its parent's
//!   directedness; it is itself a statement and may be an edge endpoint
//! - **Statement**: closed set of body constructs (node, edge, attribute
//!   defaults, subgraph, bare `key=value`)
//! - **NodeId**: node name plus optional `:port[:compass]` suffix
//! - **AttributeList / AttrValue**: key-ordered attribute maps whose values
//!   are either plain strings or raw HTML markup
//!
//! ## Example
//!
//! ```
//! use dotweave::model::{Endpoint, EdgeStmt, Graph, NodeId, Statement};
//! use dotweave::attrs;
//!
//! # fn main() -> Result<(), dotweave::error::DotError> {
//! let graph = Graph::new(Some("deps"), true);
//! assert!(graph.is_directed());
//!
//! let edge = EdgeStmt::new(
//!     graph.is_directed(),
//!     Endpoint::Node(NodeId::parse("app:out")?),
//!     vec![Endpoint::Node(NodeId::new("core"))],
//!     attrs! { "label" => "uses" },
//! )?;
//! assert_eq!(edge.to().len(), 1);
//! # let _ = Statement::Edge(edge);
//! # Ok(())
//! # }
//! ```

mod attributes;
mod node_id;
mod types;

pub use attributes::{AttrValue, AttributeList, html};
pub use node_id::{Compass, NodeId};
pub use types::{
    AttrComponent, AttrStmt, EdgeStmt, Endpoint, Graph, IdentityStmt, NodeStmt, Statement,
    Subgraph,
};
