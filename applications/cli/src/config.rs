/// CLI configuration
use crate::error::{CliError, Result};
use encore_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    #[serde(default = "default_user")]
    pub user: String,

    #[serde(default)]
    pub library: LibrarySettings,

    #[serde(default)]
    pub playback: PlaybackSettings,
}

/// Where the library comes from. A server URL wins over a file.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LibrarySettings {
    #[serde(default)]
    pub server_url: Option<String>,

    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_restart_threshold_secs")]
    pub restart_threshold_secs: f64,

    #[serde(default = "default_volume")]
    pub volume: f32,

    #[serde(default = "default_notification_timeout_secs")]
    pub notification_timeout_secs: u64,
}

impl Default for PlaybackSettings {
    fn default() -> Self {
        Self {
            restart_threshold_secs: default_restart_threshold_secs(),
            volume: default_volume(),
            notification_timeout_secs: default_notification_timeout_secs(),
        }
    }
}

impl CliConfig {
    /// Load configuration from file and environment
    ///
    /// Without an explicit path, `encore.toml` in the working directory is
    /// used if present. `ENCORE_`-prefixed variables override file values,
    /// with `__` separating sections (`ENCORE_PLAYBACK__VOLUME=0.5`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from("encore.toml");
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("ENCORE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.user.trim().is_empty() {
            return Err(CliError::Config("user cannot be empty".to_string()));
        }

        let threshold = self.playback.restart_threshold_secs;
        if !threshold.is_finite() || threshold < 0.0 {
            return Err(CliError::Config(format!(
                "restart_threshold_secs must be a non-negative number, got {}",
                threshold
            )));
        }

        if !(0.0..=1.0).contains(&self.playback.volume) {
            return Err(CliError::Config(format!(
                "volume must be within 0.0..=1.0, got {}",
                self.playback.volume
            )));
        }

        if let Some(url) = &self.library.server_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(CliError::Config(format!(
                    "server_url must start with http:// or https://, got {:?}",
                    url
                )));
            }
        }

        Ok(())
    }

    /// Playback tunables for the sequencer and player
    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            restart_threshold: Duration::from_secs_f64(self.playback.restart_threshold_secs),
            volume: self.playback.volume,
        }
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_secs(self.playback.notification_timeout_secs)
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            user: default_user(),
            library: LibrarySettings::default(),
            playback: PlaybackSettings::default(),
        }
    }
}

// Default values
fn default_user() -> String {
    "guest".to_string()
}

fn default_restart_threshold_secs() -> f64 {
    3.0
}

fn default_volume() -> f32 {
    1.0
}

fn default_notification_timeout_secs() -> u64 {
    3
}
