use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::ExtmanResult;
use crate::filter::FilterMode;
use crate::theme::parse_hex_color;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub appearance: AppearanceConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Filter applied at startup.
    pub default_filter: FilterMode,
    /// Overrides the location of the preference file.
    pub preferences_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub accent_color: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Cards per row in the grid.
    pub columns: u32,
    /// Directory the records' logo paths are relative to.
    pub assets_dir: PathBuf,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_filter: FilterMode::All,
            preferences_path: None,
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            accent_color: "#c7231a".to_string(),
            window_width: 1100,
            window_height: 760,
            columns: 3,
            assets_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| {
                dirs::home_dir()
                    .map(|h| h.join(".config"))
                    .unwrap_or_else(|| PathBuf::from("/tmp"))
            })
            .join("extman")
            .join("config.toml")
    }

    /// Load config from the default path, or return defaults if missing or broken
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        let mut config = if path.exists() {
            match Self::read(path) {
                Ok(config) => config,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to load config, using defaults");
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.validate();
        config
    }

    /// Parse the config at `path`, reporting errors.
    pub fn read(path: &Path) -> ExtmanResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate and clamp config values to acceptable ranges
    fn validate(&mut self) {
        let defaults = AppearanceConfig::default();
        let appearance = &mut self.appearance;

        if parse_hex_color(&appearance.accent_color).is_none() {
            warn!(color = %appearance.accent_color, "Invalid accent color, using default");
            appearance.accent_color = defaults.accent_color;
        }

        appearance.window_width = appearance.window_width.clamp(480, 1600);
        appearance.window_height = appearance.window_height.clamp(400, 1200);
        appearance.columns = appearance.columns.clamp(1, 4);
    }
}
