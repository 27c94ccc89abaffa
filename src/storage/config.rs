//! Build and playground configuration.
//!
//! Stored as TOML in the platform data directory. Every section falls back
//! to its defaults when missing, so a partial file is valid.

use crate::color::AA_RATIO;
use crate::theme::preset::LIGHT;
use crate::theme::{SpacingScale, TypeScale};
use crate::tokens::css::{DEFAULT_FONT_IMPORT, DEFAULT_VERSION};
use crate::tokens::{ThemeCssGenerator, DEFAULT_PREFIX};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Preset applied when nothing else is requested
    pub default_preset: String,
    /// Token build settings
    pub tokens: TokenSettings,
    /// Contrast checking settings
    pub contrast: ContrastSettings,
    /// Type and spacing scale settings
    pub scale: ScaleSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_preset: LIGHT.to_string(),
            tokens: TokenSettings::default(),
            contrast: ContrastSettings::default(),
            scale: ScaleSettings::default(),
        }
    }
}

/// Token build settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenSettings {
    /// Directory holding base.json, light.json and dark.json
    pub source_dir: PathBuf,
    /// Directory the stylesheets are written to
    pub output_dir: PathBuf,
    /// Custom property prefix
    pub prefix: String,
    /// Web font stylesheet imported by the combined CSS; empty for none
    pub font_import: String,
    /// Version written into the stylesheet header
    pub version: String,
}

impl Default for TokenSettings {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from("tokens"),
            output_dir: PathBuf::from("dist"),
            prefix: DEFAULT_PREFIX.to_string(),
            font_import: DEFAULT_FONT_IMPORT.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl TokenSettings {
    /// Stylesheet generator for these settings.
    pub fn generator(&self) -> ThemeCssGenerator {
        ThemeCssGenerator::new()
            .with_prefix(self.prefix.clone())
            .with_version(self.version.clone())
            .with_font_import(Some(self.font_import.clone()).filter(|url| !url.is_empty()))
    }
}

/// Contrast checking settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastSettings {
    /// Ratio fix suggestions aim for
    pub target_ratio: f64,
}

impl Default for ContrastSettings {
    fn default() -> Self {
        Self {
            target_ratio: AA_RATIO,
        }
    }
}

/// Type and spacing scale settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleSettings {
    pub type_base_px: f64,
    pub type_ratio: f64,
    pub spacing_base_px: f64,
}

impl Default for ScaleSettings {
    fn default() -> Self {
        let type_scale = TypeScale::default();
        Self {
            type_base_px: type_scale.base,
            type_ratio: type_scale.ratio,
            spacing_base_px: SpacingScale::default().base,
        }
    }
}

impl ScaleSettings {
    pub fn type_scale(&self) -> TypeScale {
        TypeScale::new(self.type_base_px, self.type_ratio)
    }

    pub fn spacing_scale(&self) -> SpacingScale {
        SpacingScale::new(self.spacing_base_px)
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "arcana", "ArcanaUI")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load configuration from `path`; a missing file yields the defaults.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Save configuration to the default location.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    save_config_to(&get_config_path(), config)
}

/// Save configuration to `path`, creating parent directories.
pub fn save_config_to(path: &Path, config: &AppConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
