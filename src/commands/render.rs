//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderOptions;
use crate::error::DotError;

impl FromCommand for RenderOptions {
    fn from_command(command: Commands) -> Result<Self, DotError> {
        match command {
            Commands::Render {
                input,
                output,
                engine,
                style,
            } => RenderOptions::builder()
                .with_input(input)
                .with_output(output)
                .with_engine(engine.engine)
                .with_format(engine.format)
                .with_graphviz(engine.graphviz)
                .with_escape_quotes(style.escape_quotes)
                .build(),
            _ => Err(DotError::ConfigurationError {
                message: "Invalid command type for RenderOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderOptions);

/// Execute the render command for producing Graphviz output
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderOptions::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}
