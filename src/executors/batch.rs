//! Batch command executor

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use console::style;
use indicatif::ParallelProgressIterator;
use miette::{IntoDiagnostic, Result, WrapErr};
use rayon::prelude::*;

use crate::config::BatchOptions;
use crate::description::{InputKind, load_input};
use crate::error::DotError;
use crate::executors::CommandExecutor;
use crate::export::{Exporter, GraphvizExporter};
use crate::progress::ProgressReporter;
use crate::render::DotRenderer;

pub struct BatchExecutor;

impl CommandExecutor for BatchExecutor {
    type Config = BatchOptions;

    fn execute(config: Self::Config) -> Result<()> {
        let exporter = GraphvizExporter::new().with_executable(&config.graphviz);
        let summary = run_batch(&exporter, &config)?;

        if summary.failed > 0 {
            miette::bail!(
                "{} of {} file(s) failed to render",
                summary.failed,
                summary.failed + summary.rendered
            );
        }
        Ok(())
    }
}

/// Counts reported after a batch run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    pub rendered: usize,
    pub failed: usize,
}

/// Collect the files matched by `pattern` that have a supported extension
///
/// Directories and unsupported files are skipped; the result is sorted so
/// output naming does not depend on filesystem order.
pub fn collect_inputs(pattern: &str) -> Result<Vec<PathBuf>> {
    let paths = glob::glob(pattern)
        .into_diagnostic()
        .wrap_err_with(|| format!("Invalid glob pattern '{pattern}'"))?;

    let mut inputs: Vec<PathBuf> = paths
        .filter_map(|entry| match entry {
            Ok(path) => Some(path),
            Err(e) => {
                tracing::warn!("Skipping unreadable path: {e}");
                None
            }
        })
        .filter(|path| path.is_file() && InputKind::from_path(path).is_ok())
        .collect();

    inputs.sort();
    Ok(inputs)
}

/// Output path for one input: `out_dir/<stem>.<format extension>`
pub fn output_path(out_dir: &Path, input: &Path, extension: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "graph".to_string());
    out_dir.join(format!("{stem}.{extension}"))
}

/// Pair every input with its output path
///
/// Inputs that would write the same file (equal stems in different
/// directories, or `g.json` next to `g.toml`) are a configuration error;
/// nothing is rendered in that case.
pub fn plan_outputs(
    inputs: Vec<PathBuf>,
    out_dir: &Path,
    extension: &str,
) -> Result<Vec<(PathBuf, PathBuf)>, DotError> {
    let mut claimed: BTreeMap<PathBuf, PathBuf> = BTreeMap::new();
    let mut plan = Vec::with_capacity(inputs.len());

    for input in inputs {
        let output = output_path(out_dir, &input, extension);
        if let Some(previous) = claimed.get(&output) {
            return Err(DotError::ConfigurationError {
                message: format!(
                    "'{}' and '{}' would both be rendered to '{}'",
                    previous.display(),
                    input.display(),
                    output.display()
                ),
            });
        }
        claimed.insert(output.clone(), input.clone());
        plan.push((input, output));
    }

    Ok(plan)
}

/// Render every matched input through `exporter`, in parallel
pub(crate) fn run_batch<E>(exporter: &E, config: &BatchOptions) -> Result<BatchSummary>
where
    E: Exporter + Sync,
{
    let inputs = collect_inputs(&config.pattern)?;
    if inputs.is_empty() {
        eprintln!(
            "{} No supported files match {}",
            style("ℹ").blue(),
            style(&config.pattern).dim()
        );
        return Ok(BatchSummary {
            rendered: 0,
            failed: 0,
        });
    }

    let plan = plan_outputs(inputs, &config.out_dir, config.format.extension())?;

    fs::create_dir_all(&config.out_dir)
        .into_diagnostic()
        .wrap_err_with(|| format!("Failed to create {}", config.out_dir.display()))?;

    let reporter = ProgressReporter::new();
    let pb = reporter.start_batch(plan.len(), &config.pattern);
    let renderer = DotRenderer::new().escape_quotes(config.escape_quotes);

    let (rendered, errors): (Vec<PathBuf>, Vec<(PathBuf, miette::Report)>) = plan
        .into_par_iter()
        .progress_with(pb.clone())
        .map(|(input, output)| {
            let result = load_input(&input)
                .and_then(|document| {
                    exporter.render_to_file(
                        &document.to_dot(&renderer),
                        &output,
                        config.engine,
                        config.format,
                    )
                })
                .map_err(miette::Report::new);

            match result {
                Ok(()) => {
                    tracing::debug!("Rendered {} to {}", input.display(), output.display());
                    Ok(output)
                }
                Err(e) => Err((input, e)),
            }
        })
        .partition_map(|result| match result {
            Ok(v) => rayon::iter::Either::Left(v),
            Err(e) => rayon::iter::Either::Right(e),
        });

    reporter.finish_batch(&pb, rendered.len(), errors.len());
    for (path, error) in &errors {
        tracing::warn!("Failed to render {}: {}", path.display(), error);
        reporter.report_failure(path, error);
    }

    Ok(BatchSummary {
        rendered: rendered.len(),
        failed: errors.len(),
    })
}
