//! # Export
//!
//! Hands DOT text to an external layout engine and collects the rendered
//! output. Everything here is I/O; the model and serializer never touch
//! processes or files.
//!
//! ## Components
//!
//! - **Exporter**: the collaborator interface (bytes or file output)
//! - **GraphvizExporter**: runs a Graphviz executable with DOT on stdin
//! - **Engine / ImageFormat**: the `-K` and `-T` selections
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use dotweave::builder::{Container, digraph};
//! use dotweave::export::{Engine, Exporter, GraphvizExporter, ImageFormat};
//! use dotweave::attrs;
//!
//! # fn main() -> miette::Result<()> {
//! let mut g = digraph(None, attrs! {});
//! g.edge("a", &["b"], attrs! {})?;
//!
//! GraphvizExporter::new().export_graph(
//!     &g,
//!     Path::new("out/graph.svg"),
//!     Engine::Dot,
//!     ImageFormat::Svg,
//! )?;
//! # Ok(())
//! # }
//! ```

mod graphviz;

use std::fmt;
use std::fs;
use std::path::Path;

pub use graphviz::GraphvizExporter;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::Graph;
use crate::render::render;

/// Graphviz layout engine
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    #[default]
    Dot,
    Neato,
    Fdp,
    Sfdp,
    Circo,
    Twopi,
    Osage,
    Patchwork,
}

impl Engine {
    pub fn as_str(&self) -> &'static str {
        match self {
            Engine::Dot => "dot",
            Engine::Neato => "neato",
            Engine::Fdp => "fdp",
            Engine::Sfdp => "sfdp",
            Engine::Circo => "circo",
            Engine::Twopi => "twopi",
            Engine::Osage => "osage",
            Engine::Patchwork => "patchwork",
        }
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format passed to Graphviz as `-T<format>`
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    #[default]
    Svg,
    Png,
    Pdf,
    Jpg,
    Gif,
    Ps,
    Json,
    Dot,
    Plain,
}

impl ImageFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Svg => "svg",
            ImageFormat::Png => "png",
            ImageFormat::Pdf => "pdf",
            ImageFormat::Jpg => "jpg",
            ImageFormat::Gif => "gif",
            ImageFormat::Ps => "ps",
            ImageFormat::Json => "json",
            ImageFormat::Dot => "dot",
            ImageFormat::Plain => "plain",
        }
    }

    /// File extension for outputs in this format
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Dot => "gv",
            ImageFormat::Plain => "txt",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts DOT text into rendered output
pub trait Exporter {
    fn render_to_bytes(&self, dot: &str, engine: Engine, format: ImageFormat) -> Result<Vec<u8>>;

    /// Render and write to `path`, creating missing parent directories
    fn render_to_file(
        &self,
        dot: &str,
        path: &Path,
        engine: Engine,
        format: ImageFormat,
    ) -> Result<()> {
        let bytes = self.render_to_bytes(dot, engine, format)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, bytes)?;

        tracing::debug!("Wrote {} output to {}", format, path.display());
        Ok(())
    }

    /// Serialize `graph` and render it to `path`
    fn export_graph(
        &self,
        graph: &Graph,
        path: &Path,
        engine: Engine,
        format: ImageFormat,
    ) -> Result<()> {
        self.render_to_file(&render(graph), path, engine, format)
    }
}
