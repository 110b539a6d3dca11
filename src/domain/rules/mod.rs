// Domain rules - Timestamp planning and size policy

use crate::domain::model::*;

/// Format seconds as zero-padded `HH:MM:SS`, truncating any fraction.
///
/// Hours are not wrapped, so durations past 99 hours widen the first field.
pub fn seconds_to_hhmmss(total_seconds: f64) -> String {
    // Saturating cast: negatives and NaN become 0
    let total = total_seconds as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Turns a probed duration into the fixed screenshot plan
pub struct TimestampPlanner;

impl TimestampPlanner {
    /// Build one entry per configured fraction, in order, with 1-based indices
    pub fn plan(duration_seconds: f64, settings: &PipelineSettings) -> ScreenshotPlan {
        let entries = settings
            .fractions
            .iter()
            .enumerate()
            .map(|(i, &fraction)| {
                let index = i + 1;
                let timestamp_seconds = duration_seconds * fraction;
                PlanEntry {
                    index,
                    fraction,
                    timestamp_seconds,
                    formatted: seconds_to_hhmmss(timestamp_seconds),
                    output_path: settings.output_path(index),
                }
            })
            .collect();

        ScreenshotPlan::new(entries)
    }
}

/// Decides when a screenshot has to be re-encoded
pub struct SizePolicy;

impl SizePolicy {
    /// Strictly greater than the threshold; both sides are raw bytes
    pub fn needs_compression(size_bytes: u64, max_file_size: u64) -> bool {
        size_bytes > max_file_size
    }
}
