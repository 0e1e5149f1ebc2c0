//! CLI module for PhraseClip
//!
//! This module handles command-line argument parsing and command dispatch.

use clap::{Parser, Subcommand};

pub mod args;

pub use args::{RunArgs, ScanArgs};

/// PhraseClip CLI
///
/// Scans a directory of video files, searches their embedded subtitle
/// tracks for a set of phrase variants, and trims one clip per matching
/// dialogue line.
#[derive(Parser)]
#[command(name = "phraseclip")]
#[command(about = "Clip video segments around matching subtitle lines")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Extract clips for every matching subtitle line
    Run(RunArgs),
    /// Report matching lines without writing any clips
    Scan(ScanArgs),
}
