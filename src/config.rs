//! Client configuration.
//!
//! Defaults are compiled in. With the `config` feature a TOML file can override
//! them; command-line flags are applied on top by the binary.

use crate::error::{MatcherError, Result};
use std::path::Path;
#[cfg(feature = "config")]
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_PLAYER_ID: &str = "guest";
pub const DEFAULT_ROOM_ID: &str = "lobby";
/// Interval at which the supervisor re-checks the cancellation token.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;
/// Pause before the first menu render.
pub const DEFAULT_STARTUP_DELAY_MS: u64 = 1000;

/// Runtime settings for the client host.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "config",
    derive(serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct ClientConfig {
    pub player_id: String,
    pub room_id: String,
    pub poll_interval_ms: u64,
    pub startup_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            player_id: DEFAULT_PLAYER_ID.to_string(),
            room_id: DEFAULT_ROOM_ID.to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            startup_delay_ms: DEFAULT_STARTUP_DELAY_MS,
        }
    }
}

impl ClientConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn startup_delay(&self) -> Duration {
        Duration::from_millis(self.startup_delay_ms)
    }

    /// Reject values the host cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.player_id.trim().is_empty() {
            return Err(MatcherError::config("player_id must not be empty"));
        }
        if self.room_id.trim().is_empty() {
            return Err(MatcherError::config("room_id must not be empty"));
        }
        if self.poll_interval_ms == 0 {
            return Err(MatcherError::config(
                "poll_interval_ms must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Resolve the configuration for this process.
    ///
    /// An explicit path must exist and parse. Without one, the default config
    /// file is used when present, and compiled defaults otherwise.
    #[cfg(feature = "config")]
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                log::debug!("Loading configuration from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    #[cfg(not(feature = "config"))]
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Err(MatcherError::config(format!(
                "cannot load {}: built without the `config` feature",
                path.display()
            ))),
            None => Ok(Self::default()),
        }
    }

    #[cfg(feature = "config")]
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents).map_err(|e| MatcherError::config(e.to_string()))
    }

    #[cfg(feature = "config")]
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            MatcherError::config(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    /// `<config_dir>/matcher/config.toml`, if the platform has a config directory.
    #[cfg(feature = "config")]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("matcher").join("config.toml"))
    }
}
