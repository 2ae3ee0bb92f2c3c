//! A surface that records paint operations instead of rasterizing them.

use super::color::Color;
use super::geometry::{Point, QuadraticPath};
use super::surface::{StrokeStyle, Surface};

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum PaintOp {
    Stroke {
        path: QuadraticPath,
        style: StrokeStyle,
    },
    Circle {
        center: Point,
        radius: f64,
        color: Color,
        alpha: f64,
    },
    Resize {
        width: u32,
        height: u32,
        fill: Color,
    },
    Clear {
        fill: Color,
    },
}

/// Records every operation in call order.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    ops: Vec<PaintOp>,
}

impl RecordingSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Removes and returns everything recorded so far.
    pub fn take_ops(&mut self) -> Vec<PaintOp> {
        std::mem::take(&mut self.ops)
    }

    /// Recorded strokes, in order.
    pub fn strokes(&self) -> impl Iterator<Item = (&QuadraticPath, &StrokeStyle)> {
        self.ops.iter().filter_map(|op| match op {
            PaintOp::Stroke { path, style } => Some((path, style)),
            _ => None,
        })
    }

    /// Recorded circle fills as `(center, radius, alpha)`, in order.
    pub fn circles(&self) -> impl Iterator<Item = (Point, f64, f64)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            PaintOp::Circle {
                center,
                radius,
                alpha,
                ..
            } => Some((*center, *radius, *alpha)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn draw_quadratic_path(&mut self, path: &QuadraticPath, style: &StrokeStyle) {
        self.ops.push(PaintOp::Stroke {
            path: *path,
            style: *style,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f64, color: Color, alpha: f64) {
        self.ops.push(PaintOp::Circle {
            center,
            radius,
            color,
            alpha,
        });
    }

    fn resize(&mut self, width: u32, height: u32, fill: Color) {
        self.width = width;
        self.height = height;
        self.ops.push(PaintOp::Resize {
            width,
            height,
            fill,
        });
    }

    fn clear(&mut self, fill: Color) {
        self.ops.push(PaintOp::Clear { fill });
    }
}
