//! Build command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::BuildOptions;
use crate::error::DotError;

impl FromCommand for BuildOptions {
    fn from_command(command: Commands) -> Result<Self, DotError> {
        match command {
            Commands::Build {
                input,
                output,
                style,
            } => BuildOptions::builder()
                .with_input(input)
                .with_output(output)
                .with_escape_quotes(style.escape_quotes)
                .build(),
            _ => Err(DotError::ConfigurationError {
                message: "Invalid command type for BuildOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(BuildOptions);

/// Execute the build command for serializing a description to DOT
pub fn execute_build_command(command: Commands) -> Result<()> {
    let config = BuildOptions::from_command(command)
        .wrap_err("Failed to parse build command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::build::BuildExecutor;
    BuildExecutor::execute(config)
}
