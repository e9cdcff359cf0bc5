//! Demo command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::FromCommand;
use crate::config::DemoOptions;
use crate::error::DotError;

impl FromCommand for DemoOptions {
    fn from_command(command: Commands) -> Result<Self, DotError> {
        match command {
            Commands::Demo { output } => Ok(DemoOptions { output }),
            _ => Err(DotError::ConfigurationError {
                message: "Invalid command type for DemoOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(DemoOptions);

/// Execute the demo command
pub fn execute_demo_command(command: Commands) -> Result<()> {
    let config = DemoOptions::from_command(command)
        .wrap_err("Failed to parse demo command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::demo::DemoExecutor;
    DemoExecutor::execute(config)
}
