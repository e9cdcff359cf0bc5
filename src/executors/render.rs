//! Render command executor

use console::style;
use miette::{Result, WrapErr};

use crate::config::RenderOptions;
use crate::description::load_input;
use crate::executors::CommandExecutor;
use crate::export::{Exporter, GraphvizExporter};
use crate::render::DotRenderer;

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let exporter = GraphvizExporter::new().with_executable(&config.graphviz);
        render_with(&exporter, &config)
    }
}

/// Render one input through any [`Exporter`]
pub(crate) fn render_with(exporter: &dyn Exporter, config: &RenderOptions) -> Result<()> {
    let document = load_input(&config.input)
        .wrap_err_with(|| format!("Failed to load {}", config.input.display()))?;
    let dot = document.to_dot(&DotRenderer::new().escape_quotes(config.escape_quotes));

    tracing::info!(
        "Rendering {} with {} as {}",
        config.input.display(),
        config.engine,
        config.format
    );

    exporter
        .render_to_file(&dot, &config.output, config.engine, config.format)
        .wrap_err_with(|| format!("Failed to render {}", config.input.display()))?;

    eprintln!(
        "{} Rendered {} {} {}",
        style("✓").green().bold(),
        style(config.input.display()).bold(),
        style("→").dim(),
        style(config.output.display()).bold()
    );

    Ok(())
}
