//! Brush tool selection.

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// Each tool owns a distinct stroke style; see [`crate::draw::stroke`].
/// Serialized names match the ids used in config files and stroke scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Spectrum bands laid across the stroke direction ("Classic Pencil")
    Pencil,
    /// Erases to transparency with destination-out compositing
    Eraser,
    /// Single stroke whose hue cycles as you draw ("Magic Cycle")
    #[serde(rename = "rainbow")]
    #[value(name = "rainbow")]
    CyclingRainbow,
    /// Seven undulating parallel lines ("Rainbow Pencil")
    MultiRainbow,
    /// Textured stroke with grain speckles ("Rainbow Crayon")
    Crayon,
}

impl Tool {
    /// Every tool in toolbar order.
    pub const ALL: [Tool; 5] = [
        Tool::Crayon,
        Tool::MultiRainbow,
        Tool::CyclingRainbow,
        Tool::Pencil,
        Tool::Eraser,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Tool::Pencil => "Classic Pencil",
            Tool::Eraser => "Eraser",
            Tool::CyclingRainbow => "Magic Cycle",
            Tool::MultiRainbow => "Rainbow Pencil",
            Tool::Crayon => "Rainbow Crayon",
        }
    }

    /// Hue advance per rendered segment, for color-cycling tools.
    pub fn hue_step(self) -> Option<u32> {
        match self {
            Tool::CyclingRainbow => Some(4),
            Tool::MultiRainbow => Some(3),
            Tool::Crayon => Some(2),
            Tool::Pencil | Tool::Eraser => None,
        }
    }
}
