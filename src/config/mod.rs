//! Configuration file support for magicanvas.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/magicanvas/config.toml`. Settings include the starting brush,
//! canvas size, export location and the optional drawing commentary.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{CanvasConfig, CommentaryConfig, DrawingConfig, ExportConfig};

use crate::draw::brush::{MAX_BRUSH_SIZE, MIN_BRUSH_SIZE};
use crate::export::is_valid_filename_template;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_CANVAS_DIMENSION: u32 = 8192;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "crayon"
/// default_brush_size = 12.0
/// background_color = "white"
///
/// [canvas]
/// width = 1920
/// height = 1080
///
/// [commentary]
/// enabled = true
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Starting brush and background
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Canvas dimensions
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Where and how drawings are exported
    #[serde(default)]
    pub export: ExportConfig,

    /// AI commentary on finished drawings
    #[serde(default)]
    pub commentary: CommentaryConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_brush_size`: 2.0 - 50.0
    /// - `canvas.width` / `canvas.height`: 1 - 8192
    /// - `commentary.temperature`: 0.0 - 2.0
    /// - `commentary.top_p`: 0.0 - 1.0
    fn validate_and_clamp(&mut self) {
        // Brush size: 2.0 - 50.0
        if !(MIN_BRUSH_SIZE..=MAX_BRUSH_SIZE).contains(&self.drawing.default_brush_size) {
            log::warn!(
                "Invalid default_brush_size {:.1}, clamping to {:.1}-{:.1} range",
                self.drawing.default_brush_size,
                MIN_BRUSH_SIZE,
                MAX_BRUSH_SIZE
            );
            self.drawing.default_brush_size = if self.drawing.default_brush_size.is_nan() {
                MIN_BRUSH_SIZE
            } else {
                self.drawing
                    .default_brush_size
                    .clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE)
            };
        }

        // Canvas: 1 - 8192 per side
        for (name, value) in [
            ("width", &mut self.canvas.width),
            ("height", &mut self.canvas.height),
        ] {
            if !(1..=MAX_CANVAS_DIMENSION).contains(&*value) {
                log::warn!(
                    "Invalid canvas {} {}, clamping to 1-{} range",
                    name,
                    value,
                    MAX_CANVAS_DIMENSION
                );
                *value = (*value).clamp(1, MAX_CANVAS_DIMENSION);
            }
        }

        // Temperature: 0.0 - 2.0
        if !(0.0..=2.0).contains(&self.commentary.temperature) {
            log::warn!(
                "Invalid commentary temperature {:.2}, clamping to 0.0-2.0 range",
                self.commentary.temperature
            );
            self.commentary.temperature = self.commentary.temperature.clamp(0.0, 2.0);
        }

        // Top-p: 0.0 - 1.0
        if !(0.0..=1.0).contains(&self.commentary.top_p) {
            log::warn!(
                "Invalid commentary top_p {:.2}, clamping to 0.0-1.0 range",
                self.commentary.top_p
            );
            self.commentary.top_p = self.commentary.top_p.clamp(0.0, 1.0);
        }

        if self.export.filename_template.trim().is_empty() {
            log::warn!("Empty export filename_template, falling back to default");
            self.export.filename_template = ExportConfig::default().filename_template;
        } else if !is_valid_filename_template(&self.export.filename_template) {
            log::warn!(
                "Invalid export filename_template '{}', falling back to default",
                self.export.filename_template
            );
            self.export.filename_template = ExportConfig::default().filename_template;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/magicanvas/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("magicanvas");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default path, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined, or the file
    /// exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file
    /// does not exist. All loaded values are validated and clamped.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or contains invalid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config = Self::parse(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        config.validate_and_clamp();
        Ok(config)
    }

    /// Parses TOML text without validation.
    fn parse(config_str: &str) -> Result<Self> {
        Ok(toml::from_str(config_str)?)
    }

    /// Writes the documented example config to `config_path`.
    ///
    /// # Errors
    /// Returns an error if a file already exists at the target path, or the
    /// directory or file cannot be written.
    pub fn create_default_file(config_path: &Path) -> Result<()> {
        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(config_path, default_config)?;

        info!("Created default config at {}", config_path.display());
        Ok(())
    }

    /// JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Tool;

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.drawing.default_tool, Tool::CyclingRainbow);
        assert_eq!(config.drawing.default_brush_size, 20.0);
        assert_eq!(config.canvas.width, 1280);
        assert!(!config.commentary.enabled);
        assert_eq!(config.commentary.model, "gemini-3-flash-preview");
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::parse(
            r#"
            [drawing]
            default_brush_size = 120.0

            [canvas]
            width = 0
            height = 100000

            [commentary]
            temperature = 5.0
            top_p = -1.0
            "#,
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.drawing.default_brush_size, 50.0);
        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, MAX_CANVAS_DIMENSION);
        assert_eq!(config.commentary.temperature, 2.0);
        assert_eq!(config.commentary.top_p, 0.0);
    }

    #[test]
    fn bad_filename_template_falls_back_to_default() {
        let mut config = Config::parse(
            r#"
            [export]
            filename_template = "magic-art-%Q"
            "#,
        )
        .unwrap();
        config.validate_and_clamp();
        assert_eq!(config.export.filename_template, "magic-art-%Y-%m-%d_%H%M%S");
    }

    #[test]
    fn example_file_parses_and_is_valid() {
        let config = Config::parse(include_str!("../../config.example.toml")).unwrap();
        assert_eq!(config.drawing.default_tool, Tool::CyclingRainbow);
        assert_eq!(config.drawing.background_color, ColorSpec::Name("white".into()));
        assert_eq!(config.export.filename_template, "magic-art-%Y-%m-%d_%H%M%S");
    }

    #[test]
    fn load_from_missing_path_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config.canvas.height, 720);
    }

    #[test]
    fn create_default_file_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("magicanvas").join("config.toml");
        Config::create_default_file(&path).unwrap();
        assert!(path.exists());
        assert!(Config::create_default_file(&path).is_err());
    }

    #[test]
    fn schema_mentions_sections() {
        let schema = serde_json::to_string(&Config::json_schema()).unwrap();
        assert!(schema.contains("commentary"));
        assert!(schema.contains("multi-rainbow"));
    }
}
