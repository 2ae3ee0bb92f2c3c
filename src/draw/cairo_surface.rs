//! Cairo-backed raster surface.

use super::color::Color;
use super::geometry::{Point, QuadraticPath};
use super::surface::{CompositeMode, StrokeStyle, Surface};
use crate::export::ExportError;

/// An ARGB32 Cairo image surface that persists across strokes.
///
/// A fresh Cairo context is created per paint call, so the surface is never
/// borrowed between calls and its pixel data stays accessible.
pub struct CairoSurface {
    surface: cairo::ImageSurface,
}

impl CairoSurface {
    /// Creates a surface filled with `fill`.
    ///
    /// # Errors
    /// Returns Cairo's error if the image surface cannot be allocated.
    pub fn new(width: u32, height: u32, fill: Color) -> Result<Self, cairo::Error> {
        let mut canvas = Self {
            surface: create_image(width, height)?,
        };
        canvas.clear(fill);
        Ok(canvas)
    }

    /// Encodes the current contents as PNG.
    pub fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        let mut buffer = Vec::new();
        self.surface
            .write_to_png(&mut buffer)
            .map_err(|e| ExportError::Encode(e.to_string()))?;
        Ok(buffer)
    }

    /// Reads one pixel as premultiplied `[r, g, b, a]`.
    ///
    /// Returns `None` for coordinates outside the surface.
    pub fn pixel(&mut self, x: u32, y: u32) -> Option<[u8; 4]> {
        let (width, height) = self.size();
        if x >= width || y >= height {
            return None;
        }

        self.surface.flush();
        let stride = self.surface.stride() as usize;
        let data = self.surface.data().ok()?;
        let offset = y as usize * stride + x as usize * 4;
        // ARGB32 pixels are native-endian u32 words
        let word = u32::from_ne_bytes([
            data[offset],
            data[offset + 1],
            data[offset + 2],
            data[offset + 3],
        ]);
        Some([
            (word >> 16) as u8,
            (word >> 8) as u8,
            word as u8,
            (word >> 24) as u8,
        ])
    }

    fn context(&self) -> Option<cairo::Context> {
        match cairo::Context::new(&self.surface) {
            Ok(ctx) => Some(ctx),
            Err(e) => {
                log::warn!("Failed to create Cairo context: {}", e);
                None
            }
        }
    }
}

impl Surface for CairoSurface {
    fn size(&self) -> (u32, u32) {
        (
            self.surface.width().max(0) as u32,
            self.surface.height().max(0) as u32,
        )
    }

    fn draw_quadratic_path(&mut self, path: &QuadraticPath, style: &StrokeStyle) {
        let Some(ctx) = self.context() else {
            return;
        };

        ctx.set_operator(match style.composite {
            CompositeMode::SourceOver => cairo::Operator::Over,
            CompositeMode::DestinationOut => cairo::Operator::DestOut,
        });
        let color = style.color;
        ctx.set_source_rgba(color.r, color.g, color.b, color.a);
        ctx.set_line_width(style.line_width);
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.set_line_join(cairo::LineJoin::Round);

        let (c1, c2) = path.cubic_controls();
        ctx.move_to(path.from.x, path.from.y);
        ctx.curve_to(c1.x, c1.y, c2.x, c2.y, path.to.x, path.to.y);
        let _ = ctx.stroke();
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color, alpha: f64) {
        if radius <= 0.0 {
            return;
        }
        let Some(ctx) = self.context() else {
            return;
        };

        ctx.set_source_rgba(color.r, color.g, color.b, color.a * alpha.clamp(0.0, 1.0));
        ctx.arc(center.x, center.y, radius, 0.0, std::f64::consts::PI * 2.0);
        let _ = ctx.fill();
    }

    fn resize(&mut self, width: u32, height: u32, fill: Color) {
        if self.size() == (width, height) {
            return;
        }

        let resized = match create_image(width, height) {
            Ok(surface) => surface,
            Err(e) => {
                log::warn!("Failed to resize canvas to {}x{}: {}", width, height, e);
                return;
            }
        };

        let previous = std::mem::replace(&mut self.surface, resized);
        self.clear(fill);

        if let Some(ctx) = self.context() {
            if ctx.set_source_surface(&previous, 0.0, 0.0).is_ok() {
                let _ = ctx.paint();
            }
        }
        log::debug!("Canvas resized to {}x{}", width, height);
    }

    fn clear(&mut self, fill: Color) {
        let Some(ctx) = self.context() else {
            return;
        };
        ctx.set_operator(cairo::Operator::Source);
        ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
        let _ = ctx.paint();
    }
}

fn create_image(width: u32, height: u32) -> Result<cairo::ImageSurface, cairo::Error> {
    let width = width.clamp(1, i32::MAX as u32) as i32;
    let height = height.clamp(1, i32::MAX as u32) as i32;
    cairo::ImageSurface::create(cairo::Format::ARgb32, width, height)
}
