use crate::draw::{Point, Surface, render_segment};

use super::InputState;

impl<S: Surface> InputState<S> {
    /// Processes a pointer/touch press.
    ///
    /// Starts a stroke with the point recorded twice so the first move has a
    /// previous point to curve from. Nothing is painted yet.
    pub fn on_pointer_down(&mut self, point: Point) {
        self.drawing = true;
        self.points.clear();
        self.points.extend([point, point]);
        log::debug!(
            "Stroke started at ({:.1}, {:.1}) with {}",
            point.x,
            point.y,
            self.brush.tool.label()
        );
    }

    /// Processes pointer/touch motion.
    ///
    /// While a stroke is in progress the point is appended and the newest
    /// segment is painted. Returns whether anything was painted.
    pub fn on_pointer_move(&mut self, point: Point) -> bool {
        if !self.drawing {
            return false;
        }

        self.points.push(point);

        let Some(surface) = self.surface.as_mut() else {
            return false;
        };

        render_segment(surface, &self.points, &mut self.brush, &mut self.rng)
    }

    /// Processes pointer/touch release or the pointer leaving the surface.
    ///
    /// Ends the stroke and discards its history.
    pub fn on_pointer_up(&mut self) {
        if self.drawing {
            log::debug!("Stroke ended after {} points", self.points.len());
        }
        self.drawing = false;
        self.points.clear();
    }
}
