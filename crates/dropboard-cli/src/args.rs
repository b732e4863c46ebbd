//! Command-line argument definitions for the dropboard CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, the rendered board state, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the dropboard skill board tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input skills file (TOML)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Render the physics drop instead of the static grid
    #[arg(long)]
    pub drop: bool,

    /// Number of simulation ticks to run before rendering the drop
    #[arg(long, default_value_t = 120)]
    pub steps: u32,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
