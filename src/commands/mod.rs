//! Command implementations for the dotweave CLI
//!
//! This module contains the implementations for each CLI command:
//! - build: serialize a graph description to DOT
//! - render: render one DOT file or description with Graphviz
//! - batch: render every file matching a glob pattern
//! - demo: emit the bundled example graphs

pub mod batch;
pub mod build;
pub mod demo;
pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Build { .. } => build::execute_build_command(command),
        Commands::Render { .. } => render::execute_render_command(command),
        Commands::Batch { .. } => batch::execute_batch_command(command),
        Commands::Demo { .. } => demo::execute_demo_command(command),
    }
}
