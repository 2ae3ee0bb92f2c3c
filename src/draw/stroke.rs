//! Stroke renderer: turns the growing point history into painted segments.
//!
//! Every tool shares the same midpoint-quadratic centerline (see
//! [`smooth_segment`]); only the styling laid on top of it differs.

use rand::Rng;

use super::brush::BrushConfig;
use super::color::{Color, Hsl, RAINBOW};
use super::geometry::{Point, Segment, smooth_segment, unit_normal};
use super::surface::{StrokeStyle, Surface};
use crate::input::Tool;

/// Grain speckles laid down per crayon segment.
pub const CRAYON_SPECKLES: usize = 5;
/// Speckle jitter as a fraction of brush size, in each axis.
pub const CRAYON_JITTER: f64 = 0.6;
/// Upper bound (exclusive) of a speckle radius.
pub const CRAYON_SPECKLE_MAX_RADIUS: f64 = 2.0;
/// Opacity of crayon speckles.
pub const CRAYON_SPECKLE_ALPHA: f64 = 0.4;

/// Paints the newest segment of `points` and advances the hue for
/// color-cycling tools.
///
/// Returns `false` without touching the surface or the brush when fewer
/// than two points are available.
pub fn render_segment<S, R>(
    surface: &mut S,
    points: &[Point],
    brush: &mut BrushConfig,
    rng: &mut R,
) -> bool
where
    S: Surface + ?Sized,
    R: Rng,
{
    let Some(segment) = smooth_segment(points) else {
        return false;
    };

    let size = brush.size();
    let hue = brush.hue();

    match brush.tool {
        Tool::Pencil => render_pencil(surface, &segment, size),
        Tool::Eraser => render_eraser(surface, &segment, size),
        Tool::CyclingRainbow => render_cycling(surface, &segment, size, hue),
        Tool::MultiRainbow => render_multi_rainbow(surface, &segment, size, hue),
        Tool::Crayon => render_crayon(surface, &segment, size, hue, rng),
    }

    if let Some(step) = brush.tool.hue_step() {
        brush.advance_hue(step);
    }
    true
}

/// Spectrum bands laid side by side across the segment direction.
fn render_pencil<S: Surface + ?Sized>(surface: &mut S, segment: &Segment, size: f64) {
    let count = RAINBOW.len();
    let step = size / count as f64;
    let center = (count - 1) as f64 / 2.0;
    let (nx, ny) = unit_normal(segment.previous, segment.latest);

    for (i, color) in RAINBOW.iter().enumerate() {
        let offset = (i as f64 - center) * step;
        let path = segment.path.translated(nx * offset, ny * offset);
        surface.draw_quadratic_path(&path, &StrokeStyle::paint(*color, step * 1.5));
    }
}

fn render_eraser<S: Surface + ?Sized>(surface: &mut S, segment: &Segment, size: f64) {
    surface.draw_quadratic_path(&segment.path, &StrokeStyle::erase(size));
}

fn render_cycling<S: Surface + ?Sized>(surface: &mut S, segment: &Segment, size: f64, hue: u32) {
    let color = Color::from(Hsl::vivid(f64::from(hue)));
    surface.draw_quadratic_path(&segment.path, &StrokeStyle::paint(color, size));
}

/// Seven copies of the centerline, offset diagonally, undulating with hue.
fn render_multi_rainbow<S: Surface + ?Sized>(
    surface: &mut S,
    segment: &Segment,
    size: f64,
    hue: u32,
) {
    let wave = (f64::from(hue) / 12.0).sin() * (size / 2.0);
    for (i, color) in RAINBOW.iter().enumerate() {
        let offset = (i as f64 - 3.0) * (size / 3.0) + wave;
        let path = segment.path.translated(offset, offset);
        surface.draw_quadratic_path(&path, &StrokeStyle::paint(*color, size / 4.0));
    }
}

fn render_crayon<S, R>(surface: &mut S, segment: &Segment, size: f64, hue: u32, rng: &mut R)
where
    S: Surface + ?Sized,
    R: Rng,
{
    let color = crayon_color(hue);
    surface.draw_quadratic_path(&segment.path, &StrokeStyle::paint(color, size));

    let spread = size * CRAYON_JITTER * 2.0;
    for _ in 0..CRAYON_SPECKLES {
        let dx = (rng.random::<f64>() - 0.5) * spread;
        let dy = (rng.random::<f64>() - 0.5) * spread;
        let radius = rng.random::<f64>() * CRAYON_SPECKLE_MAX_RADIUS;
        surface.fill_circle(
            segment.latest.offset(dx, dy),
            radius,
            color,
            CRAYON_SPECKLE_ALPHA,
        );
    }
}

/// Spectrum color for the crayon: one band per 60 degrees of hue.
pub fn crayon_color(hue: u32) -> Color {
    RAINBOW[(hue / 60) as usize % RAINBOW.len()]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::recording::{PaintOp, RecordingSurface};
    use crate::draw::surface::CompositeMode;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn stroke(points: &[(f64, f64)]) -> Vec<Point> {
        points.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    fn render(tool: Tool, hue: u32, points: &[Point]) -> (RecordingSurface, BrushConfig, bool) {
        let mut surface = RecordingSurface::new(200, 200);
        let mut brush = BrushConfig::new(tool, 21.0).with_hue(hue);
        let mut rng = StdRng::seed_from_u64(7);
        let painted = render_segment(&mut surface, points, &mut brush, &mut rng);
        (surface, brush, painted)
    }

    #[test]
    fn short_history_is_a_no_op() {
        for tool in Tool::ALL {
            let (surface, brush, painted) = render(tool, 10, &stroke(&[(5.0, 5.0)]));
            assert!(!painted);
            assert!(surface.ops().is_empty());
            assert_eq!(brush.hue(), 10);
        }
    }

    #[test]
    fn cycling_rainbow_uses_hue_color_and_full_width() {
        let pts = stroke(&[(100.0, 100.0), (100.0, 100.0), (110.0, 100.0)]);
        let (surface, brush, painted) = render(Tool::CyclingRainbow, 0, &pts);
        assert!(painted);
        assert_eq!(brush.hue(), 4);

        let strokes: Vec<_> = surface.strokes().collect();
        assert_eq!(strokes.len(), 1);
        let (path, style) = strokes[0];
        assert_eq!(path.from, Point::new(100.0, 100.0));
        assert_eq!(path.to, Point::new(105.0, 100.0));
        assert_eq!(style.line_width, 21.0);
        assert_eq!(style.color, Color::from(Hsl::vivid(0.0)));
        assert_eq!(style.composite, CompositeMode::SourceOver);
    }

    #[test]
    fn multi_rainbow_draws_seven_spectrum_bands() {
        let pts = stroke(&[(0.0, 0.0), (30.0, 0.0), (60.0, 0.0)]);
        let (surface, brush, _) = render(Tool::MultiRainbow, 0, &pts);
        assert_eq!(brush.hue(), 3);

        let strokes: Vec<_> = surface.strokes().collect();
        assert_eq!(strokes.len(), 7);
        let centerline = smooth_segment(&pts).unwrap().path;
        for (i, (path, style)) in strokes.iter().enumerate() {
            assert_eq!(style.color, RAINBOW[i]);
            assert_eq!(style.line_width, 21.0 / 4.0);
            // hue 0: no undulation, offset is (i - 3) * size / 3 on both axes
            let offset = (i as f64 - 3.0) * 7.0;
            assert!((path.from.x - (centerline.from.x + offset)).abs() < 1e-9);
            assert!((path.from.y - (centerline.from.y + offset)).abs() < 1e-9);
        }
    }

    #[test]
    fn multi_rainbow_undulates_with_hue() {
        let pts = stroke(&[(0.0, 0.0), (30.0, 0.0), (60.0, 0.0)]);
        let (surface, _, _) = render(Tool::MultiRainbow, 90, &pts);
        let centerline = smooth_segment(&pts).unwrap().path;
        let (middle, _) = surface.strokes().nth(3).unwrap();
        let wave = (90.0f64 / 12.0).sin() * 10.5;
        assert!((middle.to.x - (centerline.to.x + wave)).abs() < 1e-9);
    }

    #[test]
    fn crayon_adds_five_speckles_near_latest_point() {
        let pts = stroke(&[(50.0, 50.0), (60.0, 55.0), (70.0, 60.0)]);
        let (surface, brush, _) = render(Tool::Crayon, 130, &pts);
        assert_eq!(brush.hue(), 132);

        let ops = surface.ops();
        assert_eq!(ops.len(), 1 + CRAYON_SPECKLES);
        match &ops[0] {
            PaintOp::Stroke { style, .. } => {
                assert_eq!(style.color, RAINBOW[2]);
                assert_eq!(style.line_width, 21.0);
            }
            other => panic!("expected main stroke first, got {:?}", other),
        }

        let latest = pts[2];
        let reach = 21.0 * CRAYON_JITTER;
        for (center, radius, alpha) in surface.circles() {
            assert!((center.x - latest.x).abs() <= reach);
            assert!((center.y - latest.y).abs() <= reach);
            assert!((0.0..CRAYON_SPECKLE_MAX_RADIUS).contains(&radius));
            assert_eq!(alpha, CRAYON_SPECKLE_ALPHA);
        }
        assert_eq!(surface.circles().count(), CRAYON_SPECKLES);
    }

    #[test]
    fn crayon_color_cycles_through_spectrum() {
        assert_eq!(crayon_color(0), RAINBOW[0]);
        assert_eq!(crayon_color(59), RAINBOW[0]);
        assert_eq!(crayon_color(60), RAINBOW[1]);
        assert_eq!(crayon_color(359), RAINBOW[5]);
    }

    #[test]
    fn eraser_uses_destination_out_and_keeps_hue() {
        let pts = stroke(&[(10.0, 10.0), (20.0, 20.0), (30.0, 10.0)]);
        let (surface, brush, painted) = render(Tool::Eraser, 42, &pts);
        assert!(painted);
        assert_eq!(brush.hue(), 42);

        let strokes: Vec<_> = surface.strokes().collect();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].1.composite, CompositeMode::DestinationOut);
        assert_eq!(strokes[0].1.line_width, 21.0);
    }

    #[test]
    fn pencil_bands_run_across_segment_direction() {
        // Horizontal movement: normal points along +y
        let pts = stroke(&[(0.0, 50.0), (20.0, 50.0), (40.0, 50.0)]);
        let (surface, brush, _) = render(Tool::Pencil, 17, &pts);
        assert_eq!(brush.hue(), 17);

        let centerline = smooth_segment(&pts).unwrap().path;
        let strokes: Vec<_> = surface.strokes().collect();
        assert_eq!(strokes.len(), 7);
        for (i, (path, style)) in strokes.iter().enumerate() {
            let offset = (i as f64 - 3.0) * 3.0;
            assert_eq!(style.color, RAINBOW[i]);
            assert!((style.line_width - 4.5).abs() < 1e-9);
            assert!((path.from.x - centerline.from.x).abs() < 1e-9);
            assert!((path.from.y - (centerline.from.y + offset)).abs() < 1e-9);
        }
    }

    #[test]
    fn pencil_degenerate_segment_stacks_bands() {
        let pts = stroke(&[(10.0, 10.0), (10.0, 10.0), (10.05, 10.0)]);
        let (surface, _, _) = render(Tool::Pencil, 0, &pts);
        let centerline = smooth_segment(&pts).unwrap().path;
        for (path, _) in surface.strokes() {
            assert_eq!(*path, centerline);
            assert!(path.to.x.is_finite() && path.to.y.is_finite());
        }
    }
}
