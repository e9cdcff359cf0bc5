use std::path::Path;

use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::TICK_INTERVAL;

const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";

/// Status output for the batch command, written to stderr
pub struct ProgressReporter {
    term: Term,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    pub fn start_batch(&self, total: usize, pattern: &str) -> ProgressBar {
        let _ = self.term.clear_line();
        eprintln!(
            "{} Rendering {} file{} matching {}",
            style("🕸️").cyan(),
            style(total).yellow().bold(),
            if total == 1 { "" } else { "s" },
            style(pattern).dim()
        );

        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(PROGRESS_BAR_TEMPLATE)
                .expect("Progress bar template should be valid")
                .progress_chars("█▉▊▋▌▍▎▏ "),
        );
        pb.set_message("Rendering");
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn report_failure(&self, path: &Path, error: &miette::Report) {
        eprintln!(
            "{} Failed to render {}: {:?}",
            style("⚠").yellow(),
            style(path.display()).bold(),
            error
        );
    }

    pub fn finish_batch(&self, pb: &ProgressBar, rendered: usize, failed: usize) {
        pb.finish_and_clear();
        if failed == 0 {
            eprintln!(
                "{} Rendered {} file{}",
                style("✓").green().bold(),
                style(rendered).yellow().bold(),
                if rendered == 1 { "" } else { "s" }
            );
        } else {
            eprintln!(
                "{} Rendered {} file{}, {} failed",
                style("⚠").yellow().bold(),
                style(rendered).yellow().bold(),
                if rendered == 1 { "" } else { "s" },
                style(failed).red().bold()
            );
        }
    }
}
