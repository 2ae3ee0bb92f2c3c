//! Input state: stroke history, brush state and the owned surface.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::draw::{BrushConfig, Color, Point, Surface, color::WHITE};

/// Main input state containing all drawing session state.
///
/// Holds the per-stroke point history, the persistent brush configuration
/// and the surface the renderer paints onto. The surface is optional: until
/// one is attached every paint-related call is a silent no-op.
pub struct InputState<S: Surface> {
    /// Active tool, brush size and hue counter (persist across strokes)
    pub brush: BrushConfig,
    /// Points of the stroke in progress (empty between strokes)
    pub(super) points: Vec<Point>,
    /// Whether a stroke is in progress (pointer held down)
    pub(super) drawing: bool,
    /// Paint target, absent until the host initializes it
    pub(super) surface: Option<S>,
    /// Fill color for `clear` and for area exposed by `resize`
    pub(super) background: Color,
    /// Randomness for crayon grain
    pub(super) rng: StdRng,
}

impl<S: Surface> InputState<S> {
    /// Creates an idle state with no surface attached.
    pub fn new(brush: BrushConfig) -> Self {
        Self {
            brush,
            points: Vec::new(),
            drawing: false,
            surface: None,
            background: WHITE,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates an idle state painting onto `surface`.
    pub fn with_surface(brush: BrushConfig, surface: S) -> Self {
        let mut state = Self::new(brush);
        state.surface = Some(surface);
        state
    }

    /// Replaces the randomness source with a seeded one, making crayon grain
    /// reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Sets the color `clear` and `resize` fill with.
    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// Detaches and returns the surface.
    pub fn take_surface(&mut self) -> Option<S> {
        self.surface.take()
    }

    /// Points recorded for the stroke in progress.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Whether a stroke is in progress.
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }
}
