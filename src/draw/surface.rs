//! The paint target abstraction used by the stroke renderer.

use super::color::Color;
use super::geometry::{Point, QuadraticPath};

/// How new pixels combine with what is already on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeMode {
    /// Normal painting: the stroke color is laid over existing pixels
    #[default]
    SourceOver,
    /// Erasing: pixels under the stroke become transparent
    DestinationOut,
}

/// Stroke parameters for a single path operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub line_width: f64,
    pub composite: CompositeMode,
}

impl StrokeStyle {
    /// Normal-compositing stroke.
    pub fn paint(color: Color, line_width: f64) -> Self {
        Self {
            color,
            line_width,
            composite: CompositeMode::SourceOver,
        }
    }

    /// Destination-out stroke; the color only contributes its alpha.
    pub fn erase(line_width: f64) -> Self {
        Self {
            color: super::color::BLACK,
            line_width,
            composite: CompositeMode::DestinationOut,
        }
    }
}

/// A persistent raster the renderer paints onto.
///
/// Implementations use round caps and joins for every stroke. Paint calls
/// never fail from the caller's point of view; backend errors are swallowed.
pub trait Surface {
    /// Current size in pixels as `(width, height)`.
    fn size(&self) -> (u32, u32);

    /// Strokes one quadratic curve.
    fn draw_quadratic_path(&mut self, path: &QuadraticPath, style: &StrokeStyle);

    /// Fills a circle with `color` at the given opacity.
    fn fill_circle(&mut self, center: Point, radius: f64, color: Color, alpha: f64);

    /// Changes the surface size, keeping existing pixels at the same
    /// coordinates and filling newly exposed area with `fill`.
    fn resize(&mut self, width: u32, height: u32, fill: Color);

    /// Fills the whole surface with `fill` using normal compositing.
    fn clear(&mut self, fill: Color);
}
