// TOML config adapter - Tool locations and invocation limits

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::adapters::process::DEFAULT_TIMEOUT;
use crate::error::{ScreviError, ScreviResult};

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "screvi.toml";

/// External tools and how long each invocation may run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ToolConfig {
    pub ffprobe: String,
    pub ffmpeg: String,
    pub magick: String,
    pub timeout_secs: u64,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            ffprobe: "ffprobe".to_string(),
            ffmpeg: "ffmpeg".to_string(),
            magick: "magick".to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl ToolConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    tools: ToolConfig,
}

/// Loads `ToolConfig` with precedence env > file > defaults
pub struct TomlConfigAdapter;

impl TomlConfigAdapter {
    /// Load from `explicit` if given, else from `screvi.toml` when present, then apply env
    pub fn load(explicit: Option<&Path>) -> ScreviResult<ToolConfig> {
        let config = match explicit {
            Some(path) => Self::load_file(path)?,
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.is_file() {
                    Self::load_file(&default_path)?
                } else {
                    debug!("No config file found, using defaults");
                    ToolConfig::default()
                }
            }
        };

        let config = Self::apply_env_overrides(config, |key| std::env::var(key).ok())?;
        Self::validate(&config)?;
        Ok(config)
    }

    fn load_file(path: &Path) -> ScreviResult<ToolConfig> {
        info!("Loading configuration from: {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| {
            ScreviError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse the `[tools]` table of a config file
    pub fn from_toml_str(content: &str) -> ScreviResult<ToolConfig> {
        let parsed: ConfigFile = toml::from_str(content)
            .map_err(|e| ScreviError::config(format!("failed to parse TOML config: {}", e)))?;
        Ok(parsed.tools)
    }

    /// Override individual values from `SCREVI_*` variables
    pub fn apply_env_overrides<F>(mut config: ToolConfig, lookup: F) -> ScreviResult<ToolConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut overrides = 0;

        for (key, slot) in [
            ("SCREVI_FFPROBE", &mut config.ffprobe),
            ("SCREVI_FFMPEG", &mut config.ffmpeg),
            ("SCREVI_MAGICK", &mut config.magick),
        ] {
            if let Some(value) = lookup(key) {
                debug!("Found environment override: {} = {}", key, value);
                *slot = value;
                overrides += 1;
            }
        }

        if let Some(value) = lookup("SCREVI_TIMEOUT_SECS") {
            config.timeout_secs = value.trim().parse().map_err(|_| {
                ScreviError::config(format!("SCREVI_TIMEOUT_SECS is not a number: {}", value))
            })?;
            overrides += 1;
        }

        if overrides > 0 {
            info!("Applied {} environment variable overrides", overrides);
        }

        Ok(config)
    }

    fn validate(config: &ToolConfig) -> ScreviResult<()> {
        if config.timeout_secs == 0 {
            return Err(ScreviError::config("timeout_secs must be greater than zero"));
        }
        for (name, program) in [
            ("ffprobe", &config.ffprobe),
            ("ffmpeg", &config.ffmpeg),
            ("magick", &config.magick),
        ] {
            if program.trim().is_empty() {
                return Err(ScreviError::config(format!("{} program must not be empty", name)));
            }
        }
        Ok(())
    }
}
