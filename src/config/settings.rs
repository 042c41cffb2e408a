//! Application settings management

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::pipeline::{
    ClassifierConfig, PrefillBuilder, PrefillConfig, UrlEncoder, DEFAULT_CLIP_LIMIT,
};
use crate::APP_NAME;

/// Environment variable that fills an empty `widget.base_url`
pub const BASE_URL_ENV: &str = "PREFILL_BASE_URL";

/// Main application settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Scheduling widget settings
    #[serde(default)]
    pub widget: WidgetSettings,

    /// Summary settings
    #[serde(default)]
    pub summary: SummarySettings,

    /// Subject classification rules
    #[serde(default)]
    pub classifier: ClassifierConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetSettings {
    /// Embed URL of the scheduling page (empty = must be given on the command line)
    #[serde(default)]
    pub base_url: String,

    /// Append `hide_gdpr_banner=1` to prefilled URLs
    #[serde(default = "default_true")]
    pub hide_gdpr_banner: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySettings {
    /// Character cap for free-text fields (1 to 500; can only lower the cap)
    #[serde(default = "default_clip_limit")]
    pub clip_limit: usize,
}

// Default value functions

fn default_true() -> bool {
    true
}

fn default_clip_limit() -> usize {
    DEFAULT_CLIP_LIMIT
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            hide_gdpr_banner: true,
        }
    }
}

impl Default for SummarySettings {
    fn default() -> Self {
        Self {
            clip_limit: default_clip_limit(),
        }
    }
}

impl Settings {
    /// Load settings from the configuration file
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            tracing::info!("No config file found, using defaults");
            let mut settings = Self::default();
            settings.apply_env_overrides();
            return Ok(settings);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let mut settings = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        settings.apply_env_overrides();

        Ok(settings)
    }

    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if self.widget.base_url.trim().is_empty() {
            if let Ok(url) = std::env::var(BASE_URL_ENV) {
                if !url.trim().is_empty() {
                    self.widget.base_url = url.trim().to_string();
                }
            }
        }
    }

    /// Get the path to the configuration file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("com", APP_NAME, APP_NAME)
            .context("Could not determine config directory")?;

        let config_dir = dirs.config_dir();
        Ok(config_dir.join("config.toml"))
    }

    /// Write default configuration to a file
    pub fn write_default(path: &PathBuf) -> Result<()> {
        let settings = Self::default();
        let content = toml::to_string_pretty(&settings)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Prefill construction settings
    pub fn prefill_config(&self) -> PrefillConfig {
        PrefillConfig {
            clip_limit: self.summary.clip_limit,
            classifier: self.classifier.clone(),
        }
    }

    /// Builder configured from these settings
    pub fn prefill_builder(&self) -> Result<PrefillBuilder> {
        PrefillBuilder::new(&self.prefill_config())
            .context("Invalid [summary] or [classifier] settings")
    }

    /// URL encoder configured from these settings
    pub fn url_encoder(&self) -> UrlEncoder {
        UrlEncoder::new(self.widget.hide_gdpr_banner)
    }
}
