//! Rendering primitives and the stroke renderer (Cairo-based).
//!
//! This module defines the core drawing types used by the canvas:
//! - [`Color`] / [`Hsl`]: RGBA colors, CSS-style HSL and the rainbow spectrum
//! - [`Point`] and [`QuadraticPath`]: stroke geometry and smoothing
//! - [`Surface`]: the paint target, implemented by [`CairoSurface`]
//! - [`render_segment`]: per-tool styling of the newest stroke segment

pub mod brush;
pub mod cairo_surface;
pub mod color;
pub mod geometry;
pub mod recording;
pub mod stroke;
pub mod surface;

// Re-export commonly used types at module level
pub use brush::BrushConfig;
pub use cairo_surface::CairoSurface;
pub use color::{Color, Hsl, RAINBOW};
pub use geometry::{Point, QuadraticPath};
pub use recording::{PaintOp, RecordingSurface};
pub use stroke::render_segment;
pub use surface::{CompositeMode, StrokeStyle, Surface};
