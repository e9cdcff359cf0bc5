//! Graphviz process invocation

use std::ffi::OsString;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::process::{ChildStdin, Command, Stdio};

use super::{Engine, Exporter, ImageFormat};
use crate::constants::graphviz::DEFAULT_EXECUTABLE;
use crate::error::{DotError, Result};

/// Runs `<executable> [prefix args] -K<engine> -T<format>` with the DOT text
/// on stdin and returns stdout.
#[derive(Debug, Clone)]
pub struct GraphvizExporter {
    executable: PathBuf,
    prefix_args: Vec<OsString>,
}

impl Default for GraphvizExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphvizExporter {
    pub fn new() -> Self {
        Self {
            executable: PathBuf::from(DEFAULT_EXECUTABLE),
            prefix_args: Vec::new(),
        }
    }

    pub fn with_executable(mut self, executable: impl Into<PathBuf>) -> Self {
        self.executable = executable.into();
        self
    }

    /// Arguments placed before the engine and format flags, for wrappers
    /// such as `flatpak run` or a shell script
    pub fn with_prefix_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.prefix_args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }
}

impl Exporter for GraphvizExporter {
    fn render_to_bytes(&self, dot: &str, engine: Engine, format: ImageFormat) -> Result<Vec<u8>> {
        tracing::debug!(
            "Running {} with engine {} and format {}",
            self.executable.display(),
            engine,
            format
        );

        let mut child = Command::new(&self.executable)
            .args(&self.prefix_args)
            .arg(format!("-K{engine}"))
            .arg(format!("-T{format}"))
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => DotError::EngineNotFound {
                    executable: self.executable.display().to_string(),
                },
                _ => DotError::Io(e),
            })?;

        // stdin is fed from its own thread while this one drains stdout and
        // stderr, otherwise a large graph fills a pipe and both sides block.
        let stdin = child.stdin.take();
        let output = std::thread::scope(|scope| {
            let writer = scope.spawn(move || write_stdin(stdin, dot.as_bytes()));
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|panic| std::panic::resume_unwind(panic));
            written.and(output)
        })?;

        if !output.status.success() {
            return Err(DotError::RenderFailed {
                engine: engine.to_string(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        tracing::debug!("Engine produced {} bytes", output.stdout.len());
        Ok(output.stdout)
    }
}

// An engine that exits early closes the pipe; its exit status and stderr
// explain why, so that is reported instead of the broken pipe.
fn write_stdin(stdin: Option<ChildStdin>, dot: &[u8]) -> std::io::Result<()> {
    let Some(mut stdin) = stdin else {
        return Ok(());
    };
    match stdin.write_all(dot) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            tracing::debug!("Engine closed stdin early");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
