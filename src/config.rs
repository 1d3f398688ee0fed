use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub logging: LoggingConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// How many ticks a notification stays on screen.
    pub notification_ttl_ticks: u32,
}

/// Log output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive; `RUST_LOG` takes precedence.
    pub level: String,
    /// Override the default log directory.
    pub log_dir: Option<PathBuf>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            notification_ttl_ticks: 60,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
        }
    }
}

/// Where the active configuration came from.
///
/// Loading happens before logging is up, so the outcome is returned and
/// logged by the caller once the subscriber exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigOrigin {
    /// Parsed from this file.
    File(PathBuf),
    /// No file at this path; defaults in use.
    Missing(PathBuf),
    /// File exists but failed to parse; defaults in use.
    Invalid { path: PathBuf, error: String },
}

impl ConfigOrigin {
    /// Emit the load diagnostic through the `log` macros.
    pub fn log(&self) {
        match self {
            ConfigOrigin::File(path) => log::info!("Loaded config from {}", path.display()),
            ConfigOrigin::Missing(path) => {
                log::debug!("No config file at {}; using defaults", path.display())
            }
            ConfigOrigin::Invalid { path, error } => log::warn!(
                "Failed to parse config at {}: {error}; using defaults",
                path.display()
            ),
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/profile-wizard/config.toml`.
    /// Falls back to `Default` if the file is missing or unparseable.
    pub fn load() -> (Self, ConfigOrigin) {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults.
    pub fn load_from(config_path: &Path) -> (Self, ConfigOrigin) {
        let path = config_path.to_path_buf();
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => (config, ConfigOrigin::File(path)),
                Err(e) => (
                    Self::default(),
                    ConfigOrigin::Invalid {
                        path,
                        error: e.to_string(),
                    },
                ),
            },
            Err(_) => (Self::default(), ConfigOrigin::Missing(path)),
        }
    }

    /// Resolved log directory (override or XDG data dir).
    pub fn log_dir(&self) -> PathBuf {
        self.logging.log_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join(crate::NAME).join("logs"))
                .unwrap_or_else(|| PathBuf::from("logs"))
        })
    }

    pub fn tick_rate(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tui.tick_rate_ms.max(1))
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join(crate::NAME).join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
