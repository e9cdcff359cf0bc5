//! Build command configuration

use std::path::PathBuf;

use crate::common::missing_field;
use crate::error::DotError;

/// Configuration for serializing a description to DOT
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Description file to read
    pub input: PathBuf,
    /// Destination file; stdout when `None`
    pub output: Option<PathBuf>,
    /// Escape double quotes in names and plain values
    pub escape_quotes: bool,
}

impl BuildOptions {
    pub fn builder() -> BuildOptionsBuilder {
        BuildOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct BuildOptionsBuilder {
    input: Option<PathBuf>,
    output: Option<Option<PathBuf>>,
    escape_quotes: Option<bool>,
}

impl BuildOptionsBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_escape_quotes(mut self, escape_quotes: bool) -> Self {
        self.escape_quotes = Some(escape_quotes);
        self
    }
}

impl crate::common::ConfigBuilder for BuildOptionsBuilder {
    type Config = BuildOptions;

    fn build(self) -> Result<Self::Config, DotError> {
        Ok(BuildOptions {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            output: self.output.unwrap_or_default(),
            escape_quotes: self.escape_quotes.unwrap_or(false),
        })
    }
}
