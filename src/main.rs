//! PhraseClip CLI
//!
//! A command-line tool that scans a directory of video files, searches
//! their embedded subtitle tracks for a set of phrase variants, and trims
//! one clip per matching dialogue line.
//!
//! # Usage
//!
//! ```bash
//! phraseclip run --input-dir ./episodes --output-dir ./clips --end-offset 2.0
//! phraseclip scan --input-dir ./episodes
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use phraseclip_cli::app::Pipeline;
use phraseclip_cli::cli::{Cli, Commands};
use phraseclip_cli::config::RunConfig;

/// Main entry point for the PhraseClip CLI application
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --log-level when set
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    info!("Starting PhraseClip");

    match cli.command {
        Commands::Run(args) => {
            let config = RunConfig::load(args.config.as_deref(), args.end_offset)?;
            let pipeline = Pipeline::new(config);
            let clips = pipeline.run(&args.input_dir, &args.output_dir)?;
            info!("Wrote {} clips to {:?}", clips, args.output_dir);
        }
        Commands::Scan(args) => {
            let config = RunConfig::load(args.config.as_deref(), args.end_offset)?;
            let pipeline = Pipeline::new(config);
            let matches = pipeline.scan(&args.input_dir)?;
            info!("Found {} matching lines", matches);
        }
    }

    info!("PhraseClip completed successfully");
    Ok(())
}
