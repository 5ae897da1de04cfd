//! Command-line argument definitions for the CapDeck CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. The renderer needs no required arguments; flags control
//! the output path, configuration file selection, and logging verbosity.

use clap::Parser;

/// Command-line arguments for the CapDeck renderer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the output PDF file
    #[arg(short, long, default_value = "CapNet_Architecture_Diagrams.pdf")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
