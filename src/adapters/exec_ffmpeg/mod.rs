//! FFmpeg execution adapter
//!
//! Grabs a single frame at a seek time into an image file.

use std::ffi::OsString;
use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use crate::adapters::process::{display_command, ToolRunner};
use crate::domain::errors::*;
use crate::ports::*;

/// FFmpeg-based frame extraction adapter
pub struct FFmpegAdapter {
    program: String,
    runner: ToolRunner,
}

impl FFmpegAdapter {
    /// Create new FFmpeg adapter
    pub fn new(program: impl Into<String>, runner: ToolRunner) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    fn extract_args(video_path: &Path, timestamp: &str, output_path: &Path) -> Vec<OsString> {
        vec![
            OsString::from("-ss"),
            OsString::from(timestamp),
            OsString::from("-y"),
            OsString::from("-i"),
            video_path.as_os_str().to_owned(),
            OsString::from("-frames:v"),
            OsString::from("1"),
            output_path.as_os_str().to_owned(),
        ]
    }
}

#[async_trait]
impl ExtractPort for FFmpegAdapter {
    async fn extract_frame(
        &self,
        video_path: &Path,
        timestamp: &str,
        output_path: &Path,
    ) -> Result<(), DomainError> {
        let args = Self::extract_args(video_path, timestamp, output_path);
        info!("Executing command: {}", display_command(&self.program, &args));

        // ffmpeg's own diagnostics stay captured
        self.runner
            .run(&self.program, &args)
            .await
            .map_err(|e| DomainError::Extraction(format!("{} at {}", e, timestamp)))?;

        Ok(())
    }
}
