use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result alias used by the library layers
pub type Result<T, E = DotError> = std::result::Result<T, E>;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(dotweave::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum DotError {
    #[error("Invalid argument: {message}")]
    #[diagnostic(
        code(dotweave::invalid_argument),
        help("Check the arguments passed to the graph builder")
    )]
    InvalidArgument { message: String },

    #[error("Graphviz executable '{executable}' was not found")]
    #[diagnostic(
        code(dotweave::engine_not_found),
        help("Install Graphviz or point --graphviz / DOTWEAVE_GRAPHVIZ at the executable")
    )]
    EngineNotFound { executable: String },

    #[error("Graphviz engine '{engine}' failed with {status}: {stderr}")]
    #[diagnostic(
        code(dotweave::render_failed),
        help("The DOT text is still available; inspect it with the `build` command")
    )]
    RenderFailed {
        engine: String,
        status: String,
        stderr: String,
    },

    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(dotweave::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error("JSON error")]
    #[diagnostic(
        code(dotweave::json_error),
        help("Check the JSON graph description for syntax or schema errors")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(dotweave::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(dotweave::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(dotweave::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

impl DotError {
    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        DotError::InvalidArgument {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use miette::NamedSource;

    use super::*;

    #[test]
    fn test_toml_parse_error_display() {
        let source_code = "invalid = toml content";
        let toml_err = toml::from_str::<toml::Value>(source_code).unwrap_err();

        let error = TomlParseError {
            file: "graph.toml".to_string(),
            source_code: NamedSource::new("graph.toml", source_code.to_string()),
            span: Some((10, 4).into()),
            source: toml_err,
        };

        assert_eq!(error.to_string(), "Invalid TOML syntax in 'graph.toml'");
    }

    #[test]
    fn test_invalid_argument() {
        let error = DotError::invalid_argument("edge requires at least one destination");

        assert_eq!(
            error.to_string(),
            "Invalid argument: edge requires at least one destination"
        );
    }

    #[test]
    fn test_render_failed() {
        let error = DotError::RenderFailed {
            engine: "neato".to_string(),
            status: "exit status: 1".to_string(),
            stderr: "syntax error in line 1".to_string(),
        };

        assert_eq!(
            error.to_string(),
            "Graphviz engine 'neato' failed with exit status: 1: syntax error in line 1"
        );
    }

    #[test]
    fn test_error_codes() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let file_err = DotError::FileReadError {
            path: PathBuf::from("graph.json"),
            source: io_err,
        };

        use miette::Diagnostic;
        assert!(file_err.code().is_some());
        assert!(file_err.help().is_some());

        let not_found = DotError::EngineNotFound {
            executable: "dot".to_string(),
        };
        assert!(not_found.code().is_some());
    }

    #[test]
    fn test_error_conversion_from_io() {
        let io_err = io::Error::other("broken pipe");
        let err: DotError = io_err.into();

        match err {
            DotError::Io(_) => {}
            _ => panic!("Expected Io variant"),
        }
    }

    #[test]
    fn test_error_conversion_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let err: DotError = json_err.into();

        match err {
            DotError::Json(_) => {}
            _ => panic!("Expected Json variant"),
        }
    }
}
