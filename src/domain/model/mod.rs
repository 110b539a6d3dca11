// Domain models - Core types and data structures

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::errors::DomainError;

/// Fractions of the video duration at which screenshots are taken
pub const SCREENSHOT_FRACTIONS: [f64; 3] = [0.10, 0.25, 0.40];

/// Raw byte count above which a screenshot is re-encoded
pub const MAX_FILE_SIZE: u64 = 10_240;

/// Directory that receives the screenshots; it must already exist
pub const OUTPUT_DIR: &str = "res";

/// Prefix of the sibling file written while re-encoding
pub const TEMP_PREFIX: &str = "temp_";

/// Fixed values steering a run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineSettings {
    pub fractions: Vec<f64>,
    pub max_file_size: u64,
    pub output_dir: PathBuf,
}

impl Default for PipelineSettings {
    fn default() -> Self {
        Self {
            fractions: SCREENSHOT_FRACTIONS.to_vec(),
            max_file_size: MAX_FILE_SIZE,
            output_dir: PathBuf::from(OUTPUT_DIR),
        }
    }
}

impl PipelineSettings {
    /// Same settings, writing into another directory
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    /// Deterministic output path for a 1-based screenshot index
    pub fn output_path(&self, index: usize) -> PathBuf {
        self.output_dir.join(format!("output_{}.png", index))
    }
}

/// A video whose duration has been probed successfully
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VideoAsset {
    pub path: PathBuf,
    pub duration_seconds: f64,
}

impl VideoAsset {
    /// Create a video asset, rejecting durations that cannot be planned from
    pub fn new(path: impl Into<PathBuf>, duration_seconds: f64) -> Result<Self, DomainError> {
        let path = path.into();
        if !duration_seconds.is_finite() || duration_seconds < 0.0 {
            return Err(DomainError::Probe(format!(
                "invalid duration {} for {}",
                duration_seconds,
                path.display()
            )));
        }
        Ok(Self {
            path,
            duration_seconds,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One planned screenshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanEntry {
    /// 1-based position in the plan
    pub index: usize,
    pub fraction: f64,
    pub timestamp_seconds: f64,
    /// Seek time rendered as `HH:MM:SS`
    pub formatted: String,
    pub output_path: PathBuf,
}

impl PlanEntry {
    /// Offset into the video as a percentage
    pub fn percentage(&self) -> f64 {
        self.fraction * 100.0
    }
}

/// Ordered, immutable set of screenshots for one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenshotPlan {
    entries: Vec<PlanEntry>,
}

impl ScreenshotPlan {
    pub(crate) fn new(entries: Vec<PlanEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[PlanEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlanEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a ScreenshotPlan {
    type Item = &'a PlanEntry;
    type IntoIter = std::slice::Iter<'a, PlanEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Pipeline stage, used to tag failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Probe,
    Extract,
    SizeCheck,
    Compress,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Probe => "probe",
            Stage::Extract => "extract",
            Stage::SizeCheck => "size check",
            Stage::Compress => "compress",
        };
        write!(f, "{}", name)
    }
}

impl Stage {
    /// Stage a domain error belongs to
    pub fn of(error: &DomainError) -> Self {
        match error {
            DomainError::Probe(_) => Stage::Probe,
            DomainError::Extraction(_) => Stage::Extract,
            DomainError::Io(_) => Stage::SizeCheck,
            DomainError::Compression(_) => Stage::Compress,
        }
    }
}

/// Result of a screenshot that made it through every stage
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenshotOutcome {
    pub index: usize,
    pub output_path: PathBuf,
    /// Size right after extraction
    pub original_size_bytes: u64,
    /// Size after the guard ran, equal to the original when not compressed
    pub size_bytes: u64,
    pub was_compressed: bool,
}

impl ScreenshotOutcome {
    /// Outcome of a screenshot that stayed under the threshold
    pub fn extracted(index: usize, output_path: PathBuf, size_bytes: u64) -> Self {
        Self {
            index,
            output_path,
            original_size_bytes: size_bytes,
            size_bytes,
            was_compressed: false,
        }
    }

    /// Record the size measured after a compression pass
    pub fn compressed(mut self, new_size_bytes: u64) -> Self {
        self.size_bytes = new_size_bytes;
        self.was_compressed = true;
        self
    }
}

/// Aggregate of a successful run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    pub video: VideoAsset,
    pub plan: ScreenshotPlan,
    pub outcomes: Vec<ScreenshotOutcome>,
}

impl RunReport {
    pub fn compressed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.was_compressed).count()
    }
}
