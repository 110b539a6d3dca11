//! ImageMagick adapter for re-encoding screenshots as 32-bit PNG

use std::ffi::OsString;
use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use crate::adapters::process::{display_command, ToolRunner};
use crate::domain::errors::*;
use crate::ports::*;

/// `magick`-based conversion adapter
pub struct MagickAdapter {
    program: String,
    runner: ToolRunner,
}

impl MagickAdapter {
    pub fn new(program: impl Into<String>, runner: ToolRunner) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    fn convert_args(source: &Path, destination: &Path) -> Vec<OsString> {
        let mut target = OsString::from("png32:");
        target.push(destination.as_os_str());
        vec![source.as_os_str().to_owned(), target]
    }
}

#[async_trait]
impl ConvertPort for MagickAdapter {
    async fn convert_image(&self, source: &Path, destination: &Path) -> Result<(), DomainError> {
        let args = Self::convert_args(source, destination);
        info!("Executing command: {}", display_command(&self.program, &args));

        self.runner
            .run(&self.program, &args)
            .await
            .map_err(|e| DomainError::Compression(e.to_string()))?;

        Ok(())
    }
}
