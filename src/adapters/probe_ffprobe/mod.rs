//! FFprobe adapter for media duration probing
//!
//! Runs `ffprobe` with the bare-number output convention and parses the
//! single duration value it prints.

use std::ffi::OsString;
use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use crate::adapters::process::{display_command, ToolRunner};
use crate::domain::errors::*;
use crate::ports::*;

/// FFprobe-based probe adapter
pub struct FFprobeAdapter {
    program: String,
    runner: ToolRunner,
}

impl FFprobeAdapter {
    /// Create new FFprobe adapter
    pub fn new(program: impl Into<String>, runner: ToolRunner) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    fn probe_args(video_path: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            "-v",
            "error",
            "-show_entries",
            "format=duration",
            "-of",
            "default=noprint_wrappers=1:nokey=1",
        ]
        .iter()
        .map(OsString::from)
        .collect();
        args.push(video_path.as_os_str().to_owned());
        args
    }
}

/// Parse the first non-empty line of probe output as a non-negative duration
pub fn parse_duration(stdout: &str) -> Result<f64, DomainError> {
    let line = stdout
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .ok_or_else(|| DomainError::Probe("probe produced no output".to_string()))?;

    let duration: f64 = line
        .parse()
        .map_err(|_| DomainError::Probe(format!("unparseable duration '{}'", line)))?;

    if !duration.is_finite() || duration < 0.0 {
        return Err(DomainError::Probe(format!("invalid duration '{}'", line)));
    }

    Ok(duration)
}

#[async_trait]
impl ProbePort for FFprobeAdapter {
    async fn probe_duration(&self, video_path: &Path) -> Result<f64, DomainError> {
        let args = Self::probe_args(video_path);
        info!("Executing command: {}", display_command(&self.program, &args));

        let output = self
            .runner
            .run(&self.program, &args)
            .await
            .map_err(|e| DomainError::Probe(e.to_string()))?;

        parse_duration(&output.stdout)
    }
}
