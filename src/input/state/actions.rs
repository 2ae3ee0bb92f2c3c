use crate::draw::{CairoSurface, Point, Surface};
use crate::export::ExportError;
use crate::input::{InputEvent, Tool};

use super::InputState;

impl<S: Surface> InputState<S> {
    /// Dispatches a single input event.
    ///
    /// Returns `true` when the event painted a stroke segment.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        match event {
            InputEvent::Move { x, y } => return self.on_pointer_move(Point::new(x, y)),
            InputEvent::Down { x, y } => self.on_pointer_down(Point::new(x, y)),
            InputEvent::Up | InputEvent::Leave => self.on_pointer_up(),
            InputEvent::Tool { tool } => self.set_tool(tool),
            InputEvent::BrushSize { size } => self.set_brush_size(size),
            InputEvent::Clear => self.clear(),
            InputEvent::Resize { width, height } => self.resize(width, height),
        }
        false
    }

    /// Switches the active tool.
    ///
    /// Leaves the stroke history and the hue counter alone, so switching in
    /// the middle of a stroke continues it with the new style.
    pub fn set_tool(&mut self, tool: Tool) {
        if self.brush.tool != tool {
            log::info!("Tool: {}", tool.label());
        }
        self.brush.tool = tool;
    }

    /// Sets the brush width (clamped to 2.0-50.0).
    pub fn set_brush_size(&mut self, size: f64) {
        self.brush.set_size(size);
    }

    /// Fills the whole surface with the background color.
    pub fn clear(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            surface.clear(self.background);
        }
    }

    /// Resizes the surface, keeping what has been painted so far and
    /// filling new area with the background.
    pub fn resize(&mut self, width: u32, height: u32) {
        if let Some(surface) = self.surface.as_mut() {
            surface.resize(width, height, self.background);
        }
    }
}

impl InputState<CairoSurface> {
    /// Encodes the canvas as PNG.
    ///
    /// # Errors
    /// Returns [`ExportError::NoSurface`] before a surface is attached, or
    /// an encoding error from Cairo.
    pub fn export_png(&self) -> Result<Vec<u8>, ExportError> {
        self.surface
            .as_ref()
            .ok_or(ExportError::NoSurface)?
            .encode_png()
    }
}
