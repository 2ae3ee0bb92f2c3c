//! Backend-neutral input events.

use serde::{Deserialize, Serialize};

use super::tool::Tool;

/// A single user interaction with the canvas.
///
/// Pointer and touch sources are normalized to these events with
/// surface-local coordinates. The serialized form (tagged by `"type"`) is
/// what stroke scripts contain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// Pointer/touch pressed: starts a stroke
    Down { x: f64, y: f64 },
    /// Pointer/touch moved: extends the stroke and paints
    Move { x: f64, y: f64 },
    /// Pointer/touch released: ends the stroke
    Up,
    /// Pointer left the surface: ends the stroke like `Up`
    Leave,
    /// Tool picked from the toolbar
    Tool { tool: Tool },
    /// Brush size slider changed
    BrushSize { size: f64 },
    /// Clear button pressed
    Clear,
    /// Viewport changed size
    Resize { width: u32, height: u32 },
}
