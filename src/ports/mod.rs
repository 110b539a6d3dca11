// Ports - Interface definitions for every external collaborator

use std::path::Path;

use async_trait::async_trait;

use crate::domain::errors::*;

/// Port for media duration probing
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Duration of the video in seconds, as reported by the inspection tool
    async fn probe_duration(&self, video_path: &Path) -> Result<f64, DomainError>;
}

/// Port for single-frame extraction
#[async_trait]
pub trait ExtractPort: Send + Sync {
    /// Write exactly one frame taken at `timestamp` (`HH:MM:SS`) to `output_path`
    async fn extract_frame(
        &self,
        video_path: &Path,
        timestamp: &str,
        output_path: &Path,
    ) -> Result<(), DomainError>;
}

/// Port for image re-encoding
#[async_trait]
pub trait ConvertPort: Send + Sync {
    /// Re-encode `source` as a 32-bit PNG written to `destination`
    async fn convert_image(&self, source: &Path, destination: &Path) -> Result<(), DomainError>;
}

/// Port for the few file system operations the pipeline needs
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Size of the file in bytes
    async fn file_size(&self, file_path: &Path) -> Result<u64, DomainError>;

    /// Whether the file exists and can be opened for reading
    async fn is_readable(&self, file_path: &Path) -> bool;

    /// Replace `to` with `from`
    async fn rename(&self, from: &Path, to: &Path) -> Result<(), DomainError>;

    /// Delete a file; a missing file is not an error
    async fn remove_file(&self, file_path: &Path) -> Result<(), DomainError>;
}
