// ABOUTME: Layout engine configuration handling.
// ABOUTME: Loads and saves raster, padding, and size settings from TOML config files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::Padding;

/// Dashlet size (in raster cells) below which the edit controls switch to a compact form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlimThresholds {
    pub width: i32,
    pub height: i32,
}

impl Default for SlimThresholds {
    fn default() -> Self {
        Self {
            width: 28,
            height: 14,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Raster the dashlet coords are measured in (px)
    pub grid_size: i32,

    /// Margin between outer border of a dashlet and its content
    pub dashlet_padding: Padding,

    /// Minimum dashlet size in raster cells (columns, rows), used as the starting size for GROW
    pub dashlet_min_size: [i32; 2],

    /// Compact edit controls below this size
    pub slim_editor_thresholds: SlimThresholds,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            dashlet_padding: Padding::default(),
            dashlet_min_size: [12, 12],
            slim_editor_thresholds: SlimThresholds::default(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Invalid config value for {field}: {value}")]
    InvalidValue { field: &'static str, value: i32 },
}

impl LayoutConfig {
    /// Get the default config file path (~/.config/dashgrid/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dashgrid").join("config.toml"))
    }

    /// Reject values the engine cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size <= 0 {
            return Err(ConfigError::InvalidValue {
                field: "grid_size",
                value: self.grid_size,
            });
        }
        for (field, value) in [
            ("dashlet_min_size[0]", self.dashlet_min_size[0]),
            ("dashlet_min_size[1]", self.dashlet_min_size[1]),
        ] {
            if value <= 0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }
        Ok(())
    }

    /// Load config from a path
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: LayoutConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from default path, or return default config if not found
    pub fn load_or_default() -> Self {
        Self::default_path()
            .and_then(|path| Self::load(&path).ok())
            .unwrap_or_default()
    }

    /// Save config to a path
    pub fn save(&self, path: &std::path::Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Save config to default path
    pub fn save_to_default(&self) -> Result<PathBuf, ConfigError> {
        let path = Self::default_path().ok_or_else(|| {
            ConfigError::ReadError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "Could not determine config directory",
            ))
        })?;
        self.save(&path)?;
        Ok(path)
    }
}
