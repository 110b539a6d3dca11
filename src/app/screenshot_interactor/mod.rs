// Screenshot interactor - Orchestrates probe, plan, extract and size guard

use std::path::Path;
use std::sync::Arc;

use tracing::info;

use crate::app::size_guard::{ImageCompressor, SizeGuard};
use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::TimestampPlanner;
use crate::error::{ScreviError, ScreviResult};
use crate::ports::*;

/// Progress of a single screenshot, reported while a run is underway
#[derive(Debug, Clone, Copy)]
pub enum Progress<'a> {
    Started(&'a PlanEntry),
    Finished(&'a ScreenshotOutcome),
}

/// Interactor for the screenshot generation use case.
///
/// Runs strictly in order: probe once, plan once, then extract and guard
/// each entry. The first failing stage ends the run.
pub struct ScreenshotInteractor {
    probe_port: Arc<dyn ProbePort>,
    extract_port: Arc<dyn ExtractPort>,
    fs_port: Arc<dyn FsPort>,
    size_guard: SizeGuard,
    settings: PipelineSettings,
}

impl ScreenshotInteractor {
    /// Create new screenshot interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        extract_port: Arc<dyn ExtractPort>,
        convert_port: Arc<dyn ConvertPort>,
        fs_port: Arc<dyn FsPort>,
        settings: PipelineSettings,
    ) -> Self {
        let compressor = ImageCompressor::new(convert_port, Arc::clone(&fs_port));
        let size_guard = SizeGuard::new(Arc::clone(&fs_port), compressor, settings.max_file_size);
        Self {
            probe_port,
            extract_port,
            fs_port,
            size_guard,
            settings,
        }
    }

    /// Full run: probe, plan, then every screenshot
    pub async fn run(&self, video_path: &Path) -> ScreviResult<RunReport> {
        let video = self.probe(video_path).await?;
        let plan = self.plan(&video);
        let outcomes = self.generate(&video, &plan).await?;
        Ok(RunReport {
            video,
            plan,
            outcomes,
        })
    }

    /// Probe the duration; nothing is extracted if this fails
    pub async fn probe(&self, video_path: &Path) -> ScreviResult<VideoAsset> {
        let video = self
            .probe_port
            .probe_duration(video_path)
            .await
            .and_then(|duration| VideoAsset::new(video_path, duration))
            .map_err(|e| ScreviError::pipeline(None, e))?;

        info!(
            "Probed {}: {:.2} seconds",
            video_path.display(),
            video.duration_seconds
        );
        Ok(video)
    }

    pub fn plan(&self, video: &VideoAsset) -> ScreenshotPlan {
        TimestampPlanner::plan(video.duration_seconds, &self.settings)
    }

    /// Process each entry in order, stopping at the first failure
    pub async fn generate(
        &self,
        video: &VideoAsset,
        plan: &ScreenshotPlan,
    ) -> ScreviResult<Vec<ScreenshotOutcome>> {
        self.generate_with(video, plan, |_| {}).await
    }

    /// Like `generate`, calling `on_progress` before and after each screenshot
    pub async fn generate_with<F>(
        &self,
        video: &VideoAsset,
        plan: &ScreenshotPlan,
        mut on_progress: F,
    ) -> ScreviResult<Vec<ScreenshotOutcome>>
    where
        F: FnMut(Progress<'_>),
    {
        let mut outcomes = Vec::with_capacity(plan.len());

        for entry in plan {
            info!("Processing screenshot {}", entry.index);
            on_progress(Progress::Started(entry));

            let outcome = self
                .generate_one(video, entry)
                .await
                .map_err(|e| ScreviError::pipeline(Some(entry.index), e))?;

            on_progress(Progress::Finished(&outcome));
            outcomes.push(outcome);
        }

        Ok(outcomes)
    }

    async fn generate_one(
        &self,
        video: &VideoAsset,
        entry: &PlanEntry,
    ) -> Result<ScreenshotOutcome, DomainError> {
        self.extract(video, entry).await?;
        self.size_guard.enforce(entry.index, &entry.output_path).await
    }

    async fn extract(&self, video: &VideoAsset, entry: &PlanEntry) -> Result<(), DomainError> {
        self.extract_port
            .extract_frame(video.path(), &entry.formatted, &entry.output_path)
            .await
            .map_err(|e| match e {
                DomainError::Extraction(_) => e,
                other => DomainError::Extraction(other.to_string()),
            })?;

        if !self.fs_port.is_readable(&entry.output_path).await {
            return Err(DomainError::Extraction(format!(
                "{} is not readable after extraction",
                entry.output_path.display()
            )));
        }

        info!(
            "Generated screenshot {} at {} ({:.2} seconds)",
            entry.index, entry.formatted, entry.timestamp_seconds
        );
        Ok(())
    }
}
