//! Configuration persistence.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

/// Default API root, matching a locally deployed watchlist service.
pub const DEFAULT_API_BASE: &str = "http://localhost/api";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub theme: Theme,
    /// UI language code, for example "en-US" or "ru-RU"
    pub language: String,
    /// Base URL of the watchlist API
    pub api_base: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Dark,
            language: "en-US".to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

/// Configuration service trait.
pub trait ConfigService: Send + Sync {
    /// Load the configuration.
    fn load(&self) -> Result<ConsoleConfig>;

    /// Save the configuration.
    fn save(&self, config: &ConsoleConfig) -> Result<()>;
}

/// Configuration stored as JSON under the platform config directory.
pub struct LocalConfigService;

impl LocalConfigService {
    /// `{config_dir}/squatwatch/config.json`, None when the platform has no
    /// config directory.
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("squatwatch").join("config.json"))
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<ConsoleConfig> {
        let Some(path) = Self::config_path() else {
            return Ok(ConsoleConfig::default());
        };

        if !path.exists() {
            // First run: materialize the defaults so the operator has a file
            // to edit
            let config = ConsoleConfig::default();
            if let Err(err) = self.save(&config) {
                log::debug!("Could not write the default configuration: {err:#}");
            }
            return Ok(config);
        }

        let raw = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let config = serde_json::from_str(&raw)
            .with_context(|| format!("invalid configuration in {}", path.display()))?;

        Ok(config)
    }

    fn save(&self, config: &ConsoleConfig) -> Result<()> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let raw = serde_json::to_string_pretty(config)?;
        fs::write(&path, raw).with_context(|| format!("failed to write {}", path.display()))?;

        Ok(())
    }
}
