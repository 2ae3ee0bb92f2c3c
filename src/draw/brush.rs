//! Brush configuration shared across strokes.

use crate::input::Tool;

/// Smallest allowed brush width in pixels.
pub const MIN_BRUSH_SIZE: f64 = 2.0;
/// Largest allowed brush width in pixels.
pub const MAX_BRUSH_SIZE: f64 = 50.0;

/// Active tool, brush width and the hue counter driving color-cycling tools.
///
/// The hue counter is shared by every tool and is never reset on a tool
/// switch. Only the stroke renderer advances it, once per painted segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushConfig {
    pub tool: Tool,
    size: f64,
    hue: u32,
}

impl BrushConfig {
    /// Creates a brush with the size clamped into range and hue at 0.
    pub fn new(tool: Tool, size: f64) -> Self {
        Self {
            tool,
            size: clamp_size(size),
            hue: 0,
        }
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    /// Sets the brush width, clamping to 2.0-50.0.
    pub fn set_size(&mut self, size: f64) {
        let clamped = clamp_size(size);
        if clamped != size {
            log::warn!(
                "Brush size {:.1} out of range, clamping to {:.1}",
                size,
                clamped
            );
        }
        self.size = clamped;
    }

    /// Current hue in degrees, always within 0..360.
    pub fn hue(&self) -> u32 {
        self.hue
    }

    /// Starts the counter somewhere other than 0 (scripted sessions, tests).
    pub fn with_hue(mut self, hue: u32) -> Self {
        self.hue = hue % 360;
        self
    }

    /// Advances the hue by `step` degrees, wrapping at 360.
    pub(crate) fn advance_hue(&mut self, step: u32) {
        self.hue = (self.hue + step) % 360;
    }
}

impl Default for BrushConfig {
    fn default() -> Self {
        Self::new(Tool::CyclingRainbow, 20.0)
    }
}

fn clamp_size(size: f64) -> f64 {
    if size.is_nan() {
        return MIN_BRUSH_SIZE;
    }
    size.clamp(MIN_BRUSH_SIZE, MAX_BRUSH_SIZE)
}
