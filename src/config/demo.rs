//! Demo command configuration

use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct DemoOptions {
    /// Directory receiving the example `.dot` files; stdout when `None`
    pub output: Option<PathBuf>,
}
