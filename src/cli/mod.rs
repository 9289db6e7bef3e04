//! CLI module
//!
//! This module handles command-line argument parsing and command execution.

use clap::{Parser, Subcommand};

use crate::utils::logging::LogFormat;

pub mod args;
pub mod commands;

/// NVENC transcode planner
///
/// Reads ffprobe stream data, decides whether the file needs an HEVC NVENC
/// transcode and prints the ffmpeg arguments for it.
#[derive(Parser, Debug)]
#[command(name = "nvenc-plan")]
#[command(about = "Plan HEVC NVENC transcodes from ffprobe stream data")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level (overridden by RUST_LOG)
    #[arg(long, default_value = "warn", global = true)]
    pub log_level: String,

    /// Logging output format
    #[arg(long, value_enum, default_value = "compact", global = true)]
    pub log_format: LogFormat,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decide whether a file needs transcoding and print the arguments
    Plan(args::PlanArgs),
    /// Summarize the streams of a probe document
    Inspect(args::InspectArgs),
    /// Print the plugin descriptor
    Details(args::DetailsArgs),
    /// Print the default options as a config file
    Defaults(args::DefaultsArgs),
    /// Plan every probe document under a directory
    Batch(args::BatchArgs),
}
