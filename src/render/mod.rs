//! # DOT Serializer
//!
//! Turns the graph model into DOT source. Output is deterministic: the
//! same builder calls always produce byte-identical text.
//!
//! ## Layout
//!
//! - The root header is `[strict] graph|digraph ["name"] {`
//! - Each statement sits on its own line, indented two spaces per nesting
//!   level, and ends with `;`
//! - Node names are always double-quoted; ports follow verbatim
//! - Attribute lists render as `[key="value";key=<html>;]`, empty lists are
//!   omitted from nodes and edges
//! - The root closing brace has no trailing newline
//!
//! ## Example
//!
//! ```
//! use dotweave::builder::{Container, graph};
//! use dotweave::render::DotRenderer;
//! use dotweave::attrs;
//!
//! # fn main() -> Result<(), dotweave::error::DotError> {
//! let mut g = graph(None, attrs! {});
//! g.edge("a", &["b"], attrs! { "label" => "connect!" })?;
//!
//! let dot = DotRenderer::new().render(&g);
//! assert_eq!(dot, "graph {\n  \"a\"--\"b\"[label=\"connect!\";];\n}");
//! # Ok(())
//! # }
//! ```

mod renderer;

pub use renderer::{DotRenderer, Rendered};

use crate::model::Graph;

/// Render with default settings (no quote escaping)
pub fn render(graph: &Graph) -> String {
    DotRenderer::default().render(graph)
}
