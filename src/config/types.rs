//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::Tool;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the brush the canvas starts with. The toolbar can change these
/// at runtime.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Tool selected at startup (pencil, eraser, rainbow, multi-rainbow, crayon)
    #[serde(default = "default_tool")]
    pub default_tool: Tool,

    /// Brush width in pixels (valid range: 2.0 - 50.0)
    #[serde(default = "default_brush_size")]
    pub default_brush_size: f64,

    /// Canvas background - a named color or an RGB array like `[255, 255, 255]`
    #[serde(default = "default_background")]
    pub background_color: ColorSpec,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: default_tool(),
            default_brush_size: default_brush_size(),
            background_color: default_background(),
        }
    }
}

/// Canvas surface dimensions used when no viewport size is known.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

/// Image export settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ExportConfig {
    /// Directory exported drawings are written to (`~/` is expanded)
    #[serde(default = "default_save_directory")]
    pub save_directory: String,

    /// File name template; chrono format specifiers are replaced with the
    /// export time and `.png` is appended
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
        }
    }
}

/// AI drawing commentary settings.
///
/// When enabled, the finished drawing is sent to a Gemini model which
/// replies with a short encouraging comment. Any failure yields `fallback`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CommentaryConfig {
    /// Request commentary after exporting a drawing
    #[serde(default)]
    pub enabled: bool,

    /// Environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature (valid range: 0.0 - 2.0)
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Nucleus sampling cutoff (valid range: 0.0 - 1.0)
    #[serde(default = "default_top_p")]
    pub top_p: f64,

    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Instruction sent along with the image
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Reply used whenever the request fails
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

impl Default for CommentaryConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            api_key_env: default_api_key_env(),
            endpoint: default_endpoint(),
            model: default_model(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            timeout_secs: default_timeout_secs(),
            prompt: default_prompt(),
            fallback: default_fallback(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_tool() -> Tool {
    Tool::CyclingRainbow
}

fn default_brush_size() -> f64 {
    20.0
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_canvas_width() -> u32 {
    1280
}

fn default_canvas_height() -> u32 {
    720
}

fn default_save_directory() -> String {
    dirs::picture_dir()
        .map(|dir| dir.join("MagicCanvas").to_string_lossy().into_owned())
        .unwrap_or_else(|| "~/Pictures/MagicCanvas".to_string())
}

fn default_filename_template() -> String {
    "magic-art-%Y-%m-%d_%H%M%S".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_top_p() -> f64 {
    0.95
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_prompt() -> String {
    "You are an art critic and creative companion. Look at this drawing and provide a brief, \
     encouraging comment (2-3 sentences). Mention the colors used and suggest one fun thing \
     they could add to the scene to make it more magical. If it's just scribbles, be playful \
     about it!"
        .to_string()
}

fn default_fallback() -> String {
    "I couldn't quite see that. Maybe try drawing something more!".to_string()
}
