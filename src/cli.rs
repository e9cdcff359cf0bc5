use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{EngineArgs, RenderStyleArgs};

#[derive(Parser)]
#[command(
    name = "dotweave",
    about = "🕸️ Build, serialize and render Graphviz DOT graphs",
    long_about = "dotweave turns graph descriptions (JSON or TOML) into deterministic DOT \
                  source and hands DOT to Graphviz to produce SVG, PNG and other formats. \
                  Layout itself is always done by the Graphviz engines.",
    version
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Serialize a graph description to DOT
    ///
    /// Reads a JSON or TOML description and writes the DOT source to stdout
    /// or to a file.
    #[command(
        long_about = "Serialize a JSON or TOML graph description to DOT text. The output is \
                      deterministic, so it can be committed and diffed. Attribute values are \
                      passed through verbatim unless --escape-quotes is given."
    )]
    Build {
        /// Description file (.json or .toml)
        #[arg(value_name = "FILE", env = "DOTWEAVE_INPUT")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "DOTWEAVE_OUTPUT")]
        output: Option<PathBuf>,

        #[command(flatten)]
        style: RenderStyleArgs,
    },

    /// Render a DOT file or description with Graphviz
    ///
    /// DOT files (.dot, .gv) are passed to the engine unchanged; descriptions
    /// are serialized first.
    #[command(
        long_about = "Render a graph to an image or other Graphviz output format. The input may \
                      be DOT source or a JSON/TOML description. Missing parent directories of \
                      the output path are created."
    )]
    Render {
        /// Input file (.dot, .gv, .json or .toml)
        #[arg(value_name = "FILE", env = "DOTWEAVE_INPUT")]
        input: PathBuf,

        /// Output file
        #[arg(short, long, env = "DOTWEAVE_OUTPUT")]
        output: PathBuf,

        #[command(flatten)]
        engine: EngineArgs,

        #[command(flatten)]
        style: RenderStyleArgs,
    },

    /// Render every file matching a glob pattern
    ///
    /// Files are rendered in parallel into the output directory, named after
    /// the input file with the format's extension.
    #[command(
        long_about = "Render many graphs at once. Every file matching the glob pattern with a \
                      supported extension is rendered in parallel. Inputs that would produce \
                      the same output file name are rejected before anything is rendered. \
                      Failures are reported per file and make the command exit with an error \
                      once all files were tried."
    )]
    Batch {
        /// Glob pattern selecting input files, e.g. 'graphs/**/*.toml'
        #[arg(value_name = "PATTERN", env = "DOTWEAVE_PATTERN")]
        pattern: String,

        /// Directory receiving the rendered files
        #[arg(long, value_name = "DIR", env = "DOTWEAVE_OUT_DIR")]
        out_dir: PathBuf,

        #[command(flatten)]
        engine: EngineArgs,

        #[command(flatten)]
        style: RenderStyleArgs,
    },

    /// Emit the bundled example graphs
    #[command(
        long_about = "Write the bundled example graphs as .dot files into a directory, or print \
                      them to stdout when no directory is given. Useful as a starting point and \
                      as a smoke test for a Graphviz installation."
    )]
    Demo {
        /// Directory receiving one .dot file per example
        #[arg(short, long, value_name = "DIR", env = "DOTWEAVE_DEMO_DIR")]
        output: Option<PathBuf>,
    },
}
