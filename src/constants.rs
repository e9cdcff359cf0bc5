//! Configuration constants for dotweave
//!
//! Defaults that the CLI exposes as argument values. Most of them can be
//! overridden through `DOTWEAVE_*` environment variables.

use std::time::Duration;

/// Graphviz invocation defaults
pub mod graphviz {
    /// Executable used when no `--graphviz` path is given
    pub const DEFAULT_EXECUTABLE: &str = "dot";

    /// Default `-K` engine
    pub const DEFAULT_ENGINE: &str = "dot";

    /// Default `-T` output format
    pub const DEFAULT_FORMAT: &str = "svg";
}

/// Input file handling
pub mod input {
    /// Extensions read verbatim as DOT source
    pub const DOT_EXTENSIONS: &[&str] = &["dot", "gv"];

    /// Extensions read as JSON graph descriptions
    pub const JSON_EXTENSIONS: &[&str] = &["json"];

    /// Extensions read as TOML graph descriptions
    pub const TOML_EXTENSIONS: &[&str] = &["toml"];
}

/// Progress bar configuration
pub mod progress {
    use super::*;

    /// Duration between progress bar updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);
}
