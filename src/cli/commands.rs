//! Command implementations

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::adapters::TomlConfigAdapter;
use crate::app::{AppContainer, DefaultAppContainer, Progress};
use crate::cli::args::ScreenshotArgs;
use crate::domain::model::{RunReport, ScreenshotOutcome, ScreenshotPlan, VideoAsset};
use crate::domain::rules::seconds_to_hhmmss;
use crate::error::ScreviError;

const BYTES_PER_MB: f64 = 1_048_576.0;

/// Execute a screenshot run
pub async fn screenshot(args: ScreenshotArgs, config_path: Option<&Path>) -> Result<()> {
    let video_path = match args.video {
        Some(path) => path,
        None => anyhow::bail!("Provide path to video file."),
    };

    if !video_path.is_file() {
        return Err(ScreviError::InputFileNotFound {
            path: video_path.display().to_string(),
        }
        .into());
    }

    let tools = TomlConfigAdapter::load(config_path).context("Failed to load configuration")?;
    info!(
        "Using ffprobe={} ffmpeg={} magick={} (timeout {}s)",
        tools.ffprobe, tools.ffmpeg, tools.magick, tools.timeout_secs
    );

    let container = DefaultAppContainer::new(&tools);
    let interactor = container.screenshot_interactor();

    let video = interactor
        .probe(&video_path)
        .await
        .context("Error getting video duration")?;
    display_video_info(&video);

    let plan = interactor.plan(&video);
    display_plan(&plan);

    println!("Generating Screenshots:");
    println!("=====================");
    let outcomes = interactor
        .generate_with(&video, &plan, display_progress)
        .await
        .context("Failed to generate all screenshots")?;

    println!();
    println!("Successfully generated all screenshots");

    if args.json {
        let report = RunReport {
            video,
            plan,
            outcomes,
        };
        let json = serde_json::to_string_pretty(&report)
            .context("Failed to serialize run report to JSON")?;
        println!("{}", json);
    }

    Ok(())
}

/// Display video information in human-readable format
fn display_video_info(video: &VideoAsset) {
    println!();
    println!("Video Information:");
    println!("================");
    println!("Video path: {}", video.path.display());
    println!(
        "Duration: {} ({:.2} seconds)",
        seconds_to_hhmmss(video.duration_seconds),
        video.duration_seconds
    );
    println!();
}

fn display_plan(plan: &ScreenshotPlan) {
    println!("Screenshot Timestamps:");
    println!("====================");
    for entry in plan {
        println!(
            "Screenshot {}: {} ({:.2} seconds) - {:.1}% of video",
            entry.index,
            entry.formatted,
            entry.timestamp_seconds,
            entry.percentage()
        );
    }
    println!();
}

/// Print each screenshot's status as soon as it is known
fn display_progress(progress: Progress<'_>) {
    match progress {
        Progress::Started(entry) => {
            println!("Processing screenshot {} at {}", entry.index, entry.formatted);
        }
        Progress::Finished(outcome) => display_outcome(outcome),
    }
}

fn display_outcome(outcome: &ScreenshotOutcome) {
    if outcome.was_compressed {
        println!(
            "Screenshot {}: {} compressed from {:.2} MB to {:.2} MB",
            outcome.index,
            outcome.output_path.display(),
            outcome.original_size_bytes as f64 / BYTES_PER_MB,
            outcome.size_bytes as f64 / BYTES_PER_MB
        );
    } else {
        println!(
            "Screenshot {}: {} ({} bytes)",
            outcome.index,
            outcome.output_path.display(),
            outcome.size_bytes
        );
    }
}
