//! Configuration loading and management
//!
//! Handles parsing of `.todos.toml` configuration files.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::clock::Clock;

pub const CONFIG_FILE: &str = ".todos.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Seed file loaded when no `--seed` is given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<PathBuf>,

    /// Calendar used for default month/year
    #[serde(default)]
    pub clock: ClockConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Clock-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClockConfig {
    /// `local` or `utc`
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    "local".to_string()
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
        }
    }
}

impl ClockConfig {
    pub fn clock(&self) -> crate::error::Result<Clock> {
        Clock::parse(&self.timezone).ok_or_else(|| {
            crate::error::Error::InvalidConfig(format!(
                "clock.timezone: invalid value '{}' (expected local|utc)",
                self.timezone
            ))
        })
    }
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    /// Emit JSON envelopes by default
    #[serde(default)]
    pub json: bool,
}

impl Config {
    /// Load configuration from a `.todos.toml` file
    pub fn load(path: &Path) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a directory, or return defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            match Self::load(&config_path) {
                Ok(config) => config,
                Err(err) => {
                    tracing::warn!(path = %config_path.display(), %err, "ignoring invalid config");
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> crate::error::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> crate::error::Result<()> {
        self.clock.clock()?;
        if let Some(seed) = &self.seed {
            if seed.as_os_str().is_empty() {
                return Err(crate::error::Error::InvalidConfig(
                    "seed cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}
