//! Graph description files
//!
//! A description is the serde form of [`Graph`] written as JSON or TOML:
//!
//! ```toml
//! name = "pipeline"
//! directed = true
//! attributes = { rankdir = "LR" }
//!
//! [[statements]]
//! kind = "node"
//! id = "parse"
//! attributes = { shape = "box", label = { html = "<b>parse</b>" } }
//!
//! [[statements]]
//! kind = "edge"
//! from = "parse:out"
//! to = ["check", "emit"]
//! ```
//!
//! Files ending in `.dot` or `.gv` are not descriptions; [`load_input`]
//! passes them through as DOT text.

use std::path::Path;

use miette::{NamedSource, SourceSpan};

use crate::constants::input::{DOT_EXTENSIONS, JSON_EXTENSIONS, TOML_EXTENSIONS};
use crate::error::{DotError, Result, TomlParseError};
use crate::model::Graph;
use crate::render::DotRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Dot,
    Json,
    Toml,
}

impl InputKind {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if DOT_EXTENSIONS.contains(&ext.as_str()) {
            Ok(InputKind::Dot)
        } else if JSON_EXTENSIONS.contains(&ext.as_str()) {
            Ok(InputKind::Json)
        } else if TOML_EXTENSIONS.contains(&ext.as_str()) {
            Ok(InputKind::Toml)
        } else {
            Err(DotError::ConfigurationError {
                message: format!(
                    "Unsupported input '{}': expected a .dot, .gv, .json or .toml file",
                    path.display()
                ),
            })
        }
    }
}

/// A loaded input file
#[derive(Debug, Clone)]
pub enum InputDocument {
    /// Raw DOT source, rendered as-is
    Dot(String),
    /// A graph built from a description
    Graph(Graph),
}

impl InputDocument {
    pub fn to_dot(&self, renderer: &DotRenderer) -> String {
        match self {
            InputDocument::Dot(text) => text.clone(),
            InputDocument::Graph(graph) => renderer.render(graph),
        }
    }
}

/// Load any supported input file
pub fn load_input(path: &Path) -> Result<InputDocument> {
    match InputKind::from_path(path)? {
        InputKind::Dot => Ok(InputDocument::Dot(read_file(path)?)),
        InputKind::Json | InputKind::Toml => load_description(path).map(InputDocument::Graph),
    }
}

/// Load a JSON or TOML description into a graph
pub fn load_description(path: &Path) -> Result<Graph> {
    let kind = InputKind::from_path(path)?;
    let content = read_file(path)?;

    tracing::debug!("Loading {:?} description from {}", kind, path.display());

    match kind {
        InputKind::Json => parse_json(&content),
        InputKind::Toml => parse_toml(&content, &path.display().to_string()),
        InputKind::Dot => Err(DotError::ConfigurationError {
            message: format!("'{}' is DOT source, not a description", path.display()),
        }),
    }
}

pub fn parse_json(content: &str) -> Result<Graph> {
    Ok(serde_json::from_str(content)?)
}

/// Parse a TOML description; `file` names the source in diagnostics
pub fn parse_toml(content: &str, file: &str) -> Result<Graph> {
    toml::from_str(content).map_err(|e| {
        let span = e
            .span()
            .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

        DotError::TomlParseError(Box::new(TomlParseError {
            file: file.to_string(),
            source_code: NamedSource::new(file, content.to_string()),
            span,
            source: e,
        }))
    })
}

fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| DotError::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })
}
