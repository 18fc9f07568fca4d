//! CLI argument parsing via clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Build, export and inspect level-editor color themes.
#[derive(Debug, Parser)]
#[command(name = "pa-theme", version)]
pub struct Args {
    /// Seed for theme IDs. Without it, IDs are random.
    #[arg(long = "seed", global = true)]
    pub seed: Option<u64>,

    /// Log at debug level (overridden by `PA_THEME_LOG`).
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Build the "Full Gray" sample, export it, read it back and print it.
    Demo {
        /// Where to write the sample theme.
        #[arg(short = 'o', long = "out", default_value = "full_gray.lst")]
        out: PathBuf,
    },

    /// Create a theme with every slot set to one color.
    New {
        /// Theme name.
        name: String,

        /// Fill color as hex (`RRGGBB`, optional `#`).
        #[arg(short = 'f', long = "fill", default_value = "000000")]
        fill: String,

        /// Write to this file instead of printing.
        #[arg(short = 'o', long = "out")]
        out: Option<PathBuf>,

        /// Indent the printed JSON.
        #[arg(long = "pretty")]
        pretty: bool,
    },

    /// Read a theme file and print it.
    Show {
        /// Theme file to read.
        path: PathBuf,

        /// Indent the printed JSON.
        #[arg(long = "pretty")]
        pretty: bool,
    },
}
