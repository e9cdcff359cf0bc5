//! Render command configuration

use std::path::PathBuf;

use crate::common::missing_field;
use crate::error::DotError;
use crate::export::{Engine, ImageFormat};

/// Configuration for rendering one input through Graphviz
#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub input: PathBuf,
    pub output: PathBuf,
    pub engine: Engine,
    pub format: ImageFormat,
    /// Graphviz executable to run
    pub graphviz: PathBuf,
    pub escape_quotes: bool,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct RenderOptionsBuilder {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    engine: Option<Engine>,
    format: Option<ImageFormat>,
    graphviz: Option<PathBuf>,
    escape_quotes: Option<bool>,
}

impl RenderOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
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

impl crate::common::ConfigBuilder for RenderOptionsBuilder {
    type Config = RenderOptions;

    fn build(self) -> Result<Self::Config, DotError> {
        Ok(RenderOptions {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            output: self.output.ok_or_else(|| missing_field("output"))?,
            engine: self.engine.unwrap_or_default(),
            format: self.format.unwrap_or_default(),
            graphviz: self.graphviz.unwrap_or_else(|| {
                PathBuf::from(crate::constants::graphviz::DEFAULT_EXECUTABLE)
            }),
            escape_quotes: self.escape_quotes.unwrap_or(false),
        })
    }
}
