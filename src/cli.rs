use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{AttributeArgs, EngineArgs, SelectorArgs};

#[derive(Parser)]
#[command(
    name = "dotdraw",
    about = "Render graph documents through Graphviz",
    long_about = "dotdraw serializes graph documents (JSON or TOML) into the DOT language and \
                  runs a Graphviz layout engine over them. Raster output is decoded and checked; \
                  every other format is written as the engine produced it.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render graph documents to images
    ///
    /// Each document is serialized to DOT, handed to the layout engine and
    /// written next to its source (or into --output-dir) as
    /// `<stem>.<extension>`. Documents render in parallel.
    #[command(
        long_about = "Render one or more graph documents. Directories are searched recursively \
                      for .json and .toml documents. Layout algorithm and output format are \
                      checked before any engine process starts, so a typo fails fast. Raster \
                      formats (png, jpg, gif, bmp) are decoded after rendering to make sure the \
                      engine produced a real image."
    )]
    Render {
        /// Graph documents or directories containing them
        #[arg(value_name = "PATH", required = true)]
        paths: Vec<PathBuf>,

        #[command(flatten)]
        selectors: SelectorArgs,

        /// Directory for rendered files (defaults to each document's
        /// directory)
        #[arg(short, long, value_name = "DIR", env = "DOTDRAW_OUTPUT_DIR")]
        output_dir: Option<PathBuf>,

        #[command(flatten)]
        engine: EngineArgs,

        #[command(flatten)]
        attributes: AttributeArgs,

        /// Stop in-flight renders after the first failure
        #[arg(long, env = "DOTDRAW_FAIL_FAST")]
        fail_fast: bool,
    },

    /// Print the DOT document for a graph document
    Dot {
        /// Graph document to serialize
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "DOTDRAW_OUTPUT")]
        output: Option<PathBuf>,

        #[command(flatten)]
        attributes: AttributeArgs,
    },

    /// List supported layout algorithms and output formats
    Formats {
        /// Listing format
        #[arg(
            long,
            value_enum,
            default_value = "human",
            env = "DOTDRAW_LISTING_FORMAT"
        )]
        format: ListingFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum ListingFormat {
    Human,
    Json,
}
