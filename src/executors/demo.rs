//! Demo command executor

use std::fs;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::DemoOptions;
use crate::demos;
use crate::executors::CommandExecutor;
use crate::render::render;

pub struct DemoExecutor;

impl CommandExecutor for DemoExecutor {
    type Config = DemoOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let examples = demos::all().wrap_err("Failed to build example graphs")?;

        let Some(dir) = &config.output else {
            for (name, graph) in &examples {
                println!("// {name}");
                println!("{}\n", render(graph));
            }
            return Ok(());
        };

        fs::create_dir_all(dir)
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to create {}", dir.display()))?;

        for (name, graph) in &examples {
            let path = dir.join(format!("{name}.dot"));
            fs::write(&path, format!("{}\n", render(graph)))
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
            tracing::debug!("Wrote example {name} to {}", path.display());
        }

        eprintln!(
            "{} Wrote {} examples to {}",
            style("✓").green().bold(),
            style(examples.len()).yellow().bold(),
            style(dir.display()).bold()
        );
        Ok(())
    }
}
