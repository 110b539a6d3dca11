//! Screvi
//!
//! Derives preview screenshots from a video file: probes the duration with
//! `ffprobe`, grabs frames at fixed offsets with `ffmpeg` and re-encodes
//! oversized images with `magick`.
//!
//! # Usage
//!
//! ```bash
//! screvi video.mp4
//! screvi --config screvi.toml --json video.mp4
//! ```

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use screvi::cli::{commands, Cli};
use screvi::utils::{init_logging, LogLevel};

/// Main entry point; any error is reported once on stderr and exits with status 1
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let level = LogLevel::parse(&cli.log_level)?;
    init_logging(level, cli.log_json)?;

    info!("Starting Screvi");
    commands::screenshot(cli.args, cli.config.as_deref()).await?;
    info!("Screvi completed successfully");

    Ok(())
}
