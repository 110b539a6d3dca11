// Adapters - External system implementations

pub mod convert_magick;
pub mod exec_ffmpeg;
pub mod fs_local;
pub mod probe_ffprobe;
pub mod process;
pub mod toml_config;

// Re-export adapters
pub use convert_magick::MagickAdapter;
pub use exec_ffmpeg::FFmpegAdapter;
pub use fs_local::FsLocalAdapter;
pub use probe_ffprobe::FFprobeAdapter;
pub use process::{ToolFailure, ToolRunner};
pub use toml_config::{TomlConfigAdapter, ToolConfig};
