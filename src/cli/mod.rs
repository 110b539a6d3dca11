//! CLI module for Screvi
//!
//! This module handles command-line argument parsing and command execution.

use std::path::PathBuf;

use clap::Parser;

pub mod args;
pub mod commands;

pub use args::ScreenshotArgs;

/// Screvi - preview screenshots from a video
///
/// Probes the video's duration, grabs frames at 10%, 25% and 40% into
/// `res/output_<n>.png` and re-encodes any image larger than 10240 bytes.
#[derive(Parser, Debug)]
#[command(name = "screvi")]
#[command(about = "Screvi - preview screenshots from a video file")]
#[command(version)]
pub struct Cli {
    /// Logging level
    #[arg(long, default_value = "info", env = "SCREVI_LOG_LEVEL")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,

    /// TOML file with tool locations and the per-invocation timeout
    #[arg(long, env = "SCREVI_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub args: ScreenshotArgs,
}
