use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::cue::DEFAULT_GAIN;

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "FOLIO_API_URL";

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub api: ApiConfig,
    pub sound: SoundConfig,
    pub data: DataConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Enable mouse click zones (left half turns back, right half forward).
    pub mouse_enabled: bool,
}

/// Portfolio backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL the endpoint paths are appended to.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Page-flip sound configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundConfig {
    /// Initial state of the sound toggle.
    pub enabled: bool,
    /// Output gain (0.0 - 1.0).
    pub volume: f32,
}

/// Data directory configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Override the default data directory.
    pub data_dir: Option<PathBuf>,
}

/// Where the loaded configuration came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Missing(PathBuf),
    /// The file exists but did not parse; defaults are in use.
    Invalid { path: PathBuf, error: String },
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => log::info!("Loaded config from {}", path.display()),
            ConfigSource::Missing(path) => {
                log::debug!("No config file at {}, using defaults", path.display())
            }
            ConfigSource::Invalid { path, error } => log::warn!(
                "Failed to parse config at {}: {error}, using defaults",
                path.display()
            ),
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            mouse_enabled: true,
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: 10,
        }
    }
}

impl Default for SoundConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            volume: DEFAULT_GAIN,
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/folio/config.toml`, then apply
    /// environment overrides. Returns defaults if the file is missing or
    /// unparseable.
    ///
    /// Runs before logging exists, so the outcome is returned for the caller
    /// to log once it can.
    pub fn load() -> (Self, ConfigSource) {
        let (mut config, source) = Self::load_from(&Self::config_path());
        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.apply_api_url(url);
        }
        (config, source)
    }

    /// Load configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> (Self, ConfigSource) {
        let path = config_path.to_path_buf();
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => (config, ConfigSource::File(path)),
                Err(e) => (
                    Self::default(),
                    ConfigSource::Invalid {
                        path,
                        error: e.to_string(),
                    },
                ),
            },
            Err(_) => (Self::default(), ConfigSource::Missing(path)),
        }
    }

    /// Override the API base URL; blank values are ignored.
    pub fn apply_api_url(&mut self, url: String) {
        let url = url.trim();
        if !url.is_empty() {
            self.api.base_url = url.to_string();
        }
    }

    /// Resolved data directory (override or XDG default).
    pub fn data_dir(&self) -> PathBuf {
        self.data.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("folio"))
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tui.tick_rate_ms.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.api.timeout_secs.max(1))
    }

    /// Volume clamped to the valid gain range.
    pub fn volume(&self) -> f32 {
        self.sound.volume.clamp(0.0, 1.0)
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("folio").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
