//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Directory scanned for video files
    #[arg(short, long)]
    pub input_dir: PathBuf,

    /// Directory the trimmed clips are written to
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Seconds added to every clip's end boundary (may be fractional)
    #[arg(short, long)]
    pub end_offset: Option<f64>,

    /// Optional TOML configuration file (phrases, label, extensions, offset)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directory scanned for video files
    #[arg(short, long)]
    pub input_dir: PathBuf,

    /// Seconds added to every reported range's end boundary
    #[arg(short, long)]
    pub end_offset: Option<f64>,

    /// Optional TOML configuration file (phrases, label, extensions, offset)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
