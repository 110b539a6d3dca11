use std::sync::Arc;

use crate::adapters::{
    FFmpegAdapter, FFprobeAdapter, FsLocalAdapter, MagickAdapter, ToolConfig, ToolRunner,
};
use crate::app::screenshot_interactor::ScreenshotInteractor;
use crate::domain::model::PipelineSettings;
use crate::ports::{ConvertPort, ExtractPort, FsPort, ProbePort};

pub trait AppContainer: Send + Sync {
    fn screenshot_interactor(&self) -> Arc<ScreenshotInteractor>;
}

/// Wires the real tool adapters
pub struct DefaultAppContainer {
    screenshot_interactor: Arc<ScreenshotInteractor>,
}

impl DefaultAppContainer {
    pub fn new(tools: &ToolConfig) -> Self {
        Self::with_settings(tools, PipelineSettings::default())
    }

    pub fn with_settings(tools: &ToolConfig, settings: PipelineSettings) -> Self {
        let runner = ToolRunner::new(tools.timeout());

        let probe_port = Arc::new(FFprobeAdapter::new(tools.ffprobe.clone(), runner.clone()));
        let extract_port = Arc::new(FFmpegAdapter::new(tools.ffmpeg.clone(), runner.clone()));
        let convert_port = Arc::new(MagickAdapter::new(tools.magick.clone(), runner));
        let fs_port = Arc::new(FsLocalAdapter::new());

        let screenshot_interactor = Arc::new(ScreenshotInteractor::new(
            probe_port as Arc<dyn ProbePort>,
            extract_port as Arc<dyn ExtractPort>,
            convert_port as Arc<dyn ConvertPort>,
            fs_port as Arc<dyn FsPort>,
            settings,
        ));

        Self {
            screenshot_interactor,
        }
    }
}

impl AppContainer for DefaultAppContainer {
    fn screenshot_interactor(&self) -> Arc<ScreenshotInteractor> {
        Arc::clone(&self.screenshot_interactor)
    }
}
