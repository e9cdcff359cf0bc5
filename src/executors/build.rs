//! Build command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::BuildOptions;
use crate::description::load_description;
use crate::executors::CommandExecutor;
use crate::render::DotRenderer;

pub struct BuildExecutor;

impl CommandExecutor for BuildExecutor {
    type Config = BuildOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let graph = load_description(&config.input)
            .wrap_err_with(|| format!("Failed to load {}", config.input.display()))?;
        let renderer = DotRenderer::new().escape_quotes(config.escape_quotes);

        tracing::info!(
            "Serializing {} top-level statement(s) from {}",
            graph.statements().len(),
            config.input.display()
        );

        match &config.output {
            Some(path) => {
                let file = File::create(path)
                    .into_diagnostic()
                    .wrap_err_with(|| format!("Failed to create {}", path.display()))?;
                let mut writer = BufWriter::new(file);
                renderer.render_to(&graph, &mut writer)?;
                writeln!(writer).into_diagnostic()?;
                writer.flush().into_diagnostic()?;

                eprintln!(
                    "{} Wrote DOT to {}",
                    style("✓").green().bold(),
                    style(path.display()).bold()
                );
            }
            None => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                renderer.render_to(&graph, &mut handle)?;
                writeln!(handle).into_diagnostic()?;
            }
        }

        Ok(())
    }
}
