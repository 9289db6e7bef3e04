//! NVENC Transcode Planner CLI
//!
//! Decides whether a probed media file needs an HEVC NVENC transcode and
//! prints the ffmpeg arguments for it.
//!
//! # Usage
//!
//! ```bash
//! ffprobe -v quiet -print_format json -show_streams movie.mkv > movie.json
//! nvenc-plan plan --probe movie.json --enable-watermark true --watermark-position center
//! nvenc-plan inspect --probe movie.json
//! nvenc-plan batch --dir probes/ --config planner.toml
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::debug;

use nvenc_planner::cli::{commands, Cli, Commands};
use nvenc_planner::utils::logging::LoggingConfig;

/// Main entry point for the planner CLI
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    LoggingConfig::new(cli.log_level.clone(), cli.log_format).init()?;
    debug!("Starting nvenc-plan");

    // Execute the requested command
    match cli.command {
        Commands::Plan(args) => commands::plan_file(args)?,
        Commands::Inspect(args) => commands::inspect(args)?,
        Commands::Details(args) => commands::details(args)?,
        Commands::Defaults(args) => commands::defaults(args)?,
        Commands::Batch(args) => commands::batch(args)?,
    }

    debug!("nvenc-plan completed successfully");
    Ok(())
}
