//! Launchcal configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{LaunchCalError, LaunchCalResult};

pub static DEFAULT_EVENTS_URL: &str =
    "https://run.mocky.io/v3/555e0256-3863-48c3-ae92-f3f3fbd3b290";

fn default_events_url() -> String {
    DEFAULT_EVENTS_URL.to_string()
}

/// Configuration at ~/.config/launchcal/config.toml, overridable with
/// `LAUNCHCAL_*` environment variables.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LaunchCalConfig {
    #[serde(default = "default_events_url")]
    pub events_url: String,
}

impl Default for LaunchCalConfig {
    fn default() -> Self {
        LaunchCalConfig {
            events_url: default_events_url(),
        }
    }
}

impl LaunchCalConfig {
    pub fn config_path() -> LaunchCalResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| LaunchCalError::Config("Could not determine config directory".into()))?
            .join("launchcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default path, creating a commented template first if
    /// nothing is there yet.
    pub fn load() -> LaunchCalResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> LaunchCalResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(Environment::with_prefix("LAUNCHCAL"))
            .build()
            .map_err(|e| LaunchCalError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| LaunchCalError::Config(e.to_string()))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> LaunchCalResult<()> {
        let contents = format!(
            "\
# launchcal configuration

# Where launch events are fetched from:
# events_url = \"{}\"
",
            DEFAULT_EVENTS_URL
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                LaunchCalError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| LaunchCalError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    pub fn to_toml(&self) -> LaunchCalResult<String> {
        toml::to_string_pretty(self).map_err(|e| LaunchCalError::Config(e.to_string()))
    }
}
