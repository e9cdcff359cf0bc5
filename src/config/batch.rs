//! Batch command configuration

use std::path::PathBuf;

use crate::common::missing_field;
use crate::error::DotError;
use crate::export::{Engine, ImageFormat};

/// Configuration for rendering every file matched by a glob pattern
#[derive(Debug, Clone)]
pub struct BatchOptions {
    pub pattern: String,
    pub out_dir: PathBuf,
    pub engine: Engine,
    pub format: ImageFormat,
    pub graphviz: PathBuf,
    pub escape_quotes: bool,
}

impl BatchOptions {
    pub fn builder() -> BatchOptionsBuilder {
        BatchOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct BatchOptionsBuilder {
    pattern: Option<String>,
    out_dir: Option<PathBuf>,
    engine: Option<Engine>,
    format: Option<ImageFormat>,
    graphviz: Option<PathBuf>,
    escape_quotes: Option<bool>,
}

impl BatchOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(mut self, pattern: String) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn with_out_dir(mut self, out_dir: PathBuf) -> Self {
        self.out_dir = Some(out_dir);
        self
    }

    pub fn with_engine(mut self, engine: Engine) -> Self {
        self.engine = Some(engine);
        self
    }

    pub fn with_format(mut self, format: ImageFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_graphviz(mut self, graphviz: PathBuf) -> Self {
        self.graphviz = Some(graphviz);
        self
    }

    pub fn with_escape_quotes(mut self, escape_quotes: bool) -> Self {
        self.escape_quotes = Some(escape_quotes);
        self
    }
}

impl crate::common::ConfigBuilder for BatchOptionsBuilder {
    type Config = BatchOptions;

    fn build(self) -> Result<Self::Config, DotError> {
        let pattern = self.pattern.ok_or_else(|| missing_field("pattern"))?;
        if pattern.trim().is_empty() {
            return Err(DotError::ConfigurationError {
                message: "Glob pattern must not be empty".to_string(),
            });
        }

        Ok(BatchOptions {
            pattern,
            out_dir: self.out_dir.ok_or_else(|| missing_field("out_dir"))?,
            engine: self.engine.unwrap_or_default(),
            format: self.format.unwrap_or_default(),
            graphviz: self.graphviz.unwrap_or_else(|| {
                PathBuf::from(crate::constants::graphviz::DEFAULT_EXECUTABLE)
            }),
            escape_quotes: self.escape_quotes.unwrap_or(false),
        })
    }
}
