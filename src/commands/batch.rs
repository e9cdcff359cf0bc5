//! Batch command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::BatchOptions;
use crate::error::DotError;

impl FromCommand for BatchOptions {
    fn from_command(command: Commands) -> Result<Self, DotError> {
        match command {
            Commands::Batch {
                pattern,
                out_dir,
                engine,
                style,
            } => BatchOptions::builder()
                .with_pattern(pattern)
                .with_out_dir(out_dir)
                .with_engine(engine.engine)
                .with_format(engine.format)
                .with_graphviz(engine.graphviz)
                .with_escape_quotes(style.escape_quotes)
                .build(),
            _ => Err(DotError::ConfigurationError {
                message: "Invalid command type for BatchOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(BatchOptions);

/// Execute the batch command for rendering many files in parallel
pub fn execute_batch_command(command: Commands) -> Result<()> {
    let config = BatchOptions::from_command(command)
        .wrap_err("Failed to parse batch command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::batch::BatchExecutor;
    BatchExecutor::execute(config)
}
