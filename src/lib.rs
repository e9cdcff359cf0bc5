//! # dotweave - Fluent Builder and Serializer for Graphviz DOT
//!
//! dotweave builds Graphviz graphs in memory through chainable calls and
//! serializes them to deterministic DOT text. Layout is left to Graphviz;
//! the [`export`] module hands DOT to an installed engine when an image is
//! wanted.
//!
//! ## Main Components
//!
//! - **Model**: graphs, subgraphs, statements, node identifiers and
//!   attribute lists
//! - **Builder**: the [`Container`] operations that append statements
//! - **Render**: the DOT serializer
//! - **Export**: Graphviz invocation for SVG, PNG and friends
//! - **Description**: JSON and TOML graph descriptions
//!
//! ## Usage
//!
//! ### Building a graph
//!
//! ```
//! use dotweave::{Container, attrs, graph, render};
//!
//! # fn main() -> Result<(), dotweave::DotError> {
//! let mut g = graph(
//!     Some("hello"),
//!     attrs! { "fontname" => "sans serif", "bgcolor" => "#fff0e0" },
//! );
//! g.edge("a", &["b"], attrs! {})?;
//!
//! assert_eq!(
//!     render(&g),
//!     "graph \"hello\" {\n  graph[bgcolor=\"#fff0e0\";fontname=\"sans serif\";];\n  \"a\"--\"b\";\n}"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ### Nesting subgraphs
//!
//! ```
//! use dotweave::{Container, attrs, digraph, render};
//!
//! # fn main() -> Result<(), dotweave::DotError> {
//! let mut g = digraph(None, attrs! {});
//! g.subgraph(Some("cluster_io"), attrs! { "label" => "io" })
//!     .edge("read", &["write"], attrs! {})?;
//!
//! assert_eq!(
//!     render(&g),
//!     "digraph {\n  subgraph \"cluster_io\" {\n    graph[label=\"io\";];\n    \"read\"->\"write\";\n  };\n}"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ### Rendering with Graphviz
//!
//! ```no_run
//! use dotweave::export::{Engine, Exporter, GraphvizExporter, ImageFormat};
//! use dotweave::{Container, attrs, digraph};
//!
//! # fn main() -> Result<(), dotweave::DotError> {
//! let mut g = digraph(Some("deps"), attrs! { "rankdir" => "LR" });
//! g.edge("app", &["core", "util"], attrs! {})?;
//!
//! GraphvizExporter::new().export_graph(
//!     &g,
//!     std::path::Path::new("target/deps.svg"),
//!     Engine::Dot,
//!     ImageFormat::Svg,
//! )?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod progress;

// Public modules
pub mod builder;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod demos;
pub mod description;
pub mod error;
pub mod executors;
pub mod export;
pub mod interop;
pub mod model;
pub mod render;

pub use builder::{Container, digraph, graph, strict};
pub use error::{DotError, Result};
pub use model::{
    AttrComponent, AttrValue, AttributeList, Compass, Endpoint, Graph, NodeId, Statement,
    Subgraph, html,
};
pub use render::{DotRenderer, render};

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    execute_command(cli.command)
}

fn init_tracing(verbose: u8) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
