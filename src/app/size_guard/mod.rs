// Size guard - Re-encodes screenshots that exceed the byte threshold

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::SizePolicy;
use crate::ports::*;

const BYTES_PER_MB: f64 = 1_048_576.0;

/// Sibling path used while re-encoding, e.g. `res/temp_output_1.png`
pub fn temp_path_for(path: &Path) -> Result<PathBuf, DomainError> {
    let file_name = path.file_name().ok_or_else(|| {
        DomainError::Compression(format!("{} has no file name", path.display()))
    })?;
    let mut temp_name = OsString::from(TEMP_PREFIX);
    temp_name.push(file_name);
    Ok(path.with_file_name(temp_name))
}

/// Re-encodes an image in place through a temporary sibling file
pub struct ImageCompressor {
    convert_port: Arc<dyn ConvertPort>,
    fs_port: Arc<dyn FsPort>,
}

impl ImageCompressor {
    pub fn new(convert_port: Arc<dyn ConvertPort>, fs_port: Arc<dyn FsPort>) -> Self {
        Self {
            convert_port,
            fs_port,
        }
    }

    /// Convert into the temp file, then move it over the original.
    ///
    /// The temp file is removed on every failure path.
    pub async fn compress(&self, path: &Path) -> Result<(), DomainError> {
        let temp_path = temp_path_for(path)?;
        info!("Compressing image {}...", path.display());

        if let Err(e) = self.convert_port.convert_image(path, &temp_path).await {
            self.discard(&temp_path).await;
            return Err(match e {
                DomainError::Compression(_) => e,
                other => DomainError::Compression(other.to_string()),
            });
        }

        if let Err(e) = self.fs_port.rename(&temp_path, path).await {
            self.discard(&temp_path).await;
            return Err(DomainError::Compression(format!(
                "Error replacing original file with compressed version: {}",
                e
            )));
        }

        info!("Image compressed successfully");
        Ok(())
    }

    async fn discard(&self, temp_path: &Path) {
        if let Err(e) = self.fs_port.remove_file(temp_path).await {
            warn!("Could not remove temporary file {}: {}", temp_path.display(), e);
        }
    }
}

/// Measures a screenshot and compresses it once when it is too large
pub struct SizeGuard {
    fs_port: Arc<dyn FsPort>,
    compressor: ImageCompressor,
    max_file_size: u64,
}

impl SizeGuard {
    pub fn new(fs_port: Arc<dyn FsPort>, compressor: ImageCompressor, max_file_size: u64) -> Self {
        Self {
            fs_port,
            compressor,
            max_file_size,
        }
    }

    /// Single compression attempt; the new size is reported whether or not it fits
    pub async fn enforce(
        &self,
        index: usize,
        path: &Path,
    ) -> Result<ScreenshotOutcome, DomainError> {
        let size = self.fs_port.file_size(path).await?;
        let outcome = ScreenshotOutcome::extracted(index, path.to_path_buf(), size);

        if !SizePolicy::needs_compression(size, self.max_file_size) {
            return Ok(outcome);
        }

        info!(
            "Screenshot {} exceeds {} bytes (current size: {:.2} MB). Compressing...",
            path.display(),
            self.max_file_size,
            size as f64 / BYTES_PER_MB
        );
        self.compressor.compress(path).await?;

        let new_size = self.fs_port.file_size(path).await?;
        info!("New file size: {:.2} MB", new_size as f64 / BYTES_PER_MB);
        if SizePolicy::needs_compression(new_size, self.max_file_size) {
            warn!("Screenshot {} is still above the threshold", path.display());
        }

        Ok(outcome.compressed(new_size))
    }
}
