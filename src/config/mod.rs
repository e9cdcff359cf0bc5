//! # Configuration Module
//!
//! Configuration structures for the dotweave commands. Each command with
//! more than a couple of options gets a builder so that the CLI layer and
//! tests construct it the same way.
//!
//! ## Command Configurations
//!
//! - **BuildOptions**: serialize a description to DOT
//! - **RenderOptions**: render one input through Graphviz
//! - **BatchOptions**: render every file matched by a glob pattern
//! - **DemoOptions**: emit the bundled example graphs
//!
//! ## Example
//!
//! ```
//! use dotweave::common::ConfigBuilder;
//! use dotweave::config::RenderOptions;
//! use dotweave::export::{Engine, ImageFormat};
//!
//! let options = RenderOptions::builder()
//!     .with_input("graph.toml".into())
//!     .with_output("graph.png".into())
//!     .with_engine(Engine::Neato)
//!     .with_format(ImageFormat::Png)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.engine, Engine::Neato);
//! ```

pub mod batch;
pub mod build;
pub mod demo;
pub mod render;

pub use batch::BatchOptions;
pub use build::BuildOptions;
pub use demo::DemoOptions;
pub use render::RenderOptions;
