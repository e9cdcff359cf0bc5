//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

use crate::export::{Engine, ImageFormat};

/// Graphviz selection shared by the rendering commands
#[derive(Args, Debug, Clone)]
pub struct EngineArgs {
    /// Layout engine
    #[arg(
        short,
        long,
        value_enum,
        default_value = crate::constants::graphviz::DEFAULT_ENGINE,
        env = "DOTWEAVE_ENGINE"
    )]
    pub engine: Engine,

    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value = crate::constants::graphviz::DEFAULT_FORMAT,
        env = "DOTWEAVE_FORMAT"
    )]
    pub format: ImageFormat,

    /// Path to the Graphviz executable
    #[arg(
        long,
        value_name = "PATH",
        default_value = crate::constants::graphviz::DEFAULT_EXECUTABLE,
        env = "DOTWEAVE_GRAPHVIZ"
    )]
    pub graphviz: PathBuf,
}

/// Serializer options shared by commands that produce DOT text
#[derive(Args, Debug, Clone)]
pub struct RenderStyleArgs {
    /// Escape double quotes inside names and plain attribute values
    #[arg(long, env = "DOTWEAVE_ESCAPE_QUOTES")]
    pub escape_quotes: bool,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::DotError>;
}

/// Trait for configurations that can be created from CLI commands
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::DotError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::DotError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Build a configuration error for a builder field that was never set
pub(crate) fn missing_field(field: &str) -> crate::error::DotError {
    crate::error::DotError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}
