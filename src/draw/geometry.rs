//! Point and curve geometry for stroke smoothing.

/// Segments shorter than this have no meaningful direction.
pub const MIN_NORMAL_LENGTH: f64 = 0.1;

/// A surface-local coordinate (origin top-left).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Point halfway between `self` and `other`.
    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Returns the point shifted by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Point {
        Point::new(self.x + dx, self.y + dy)
    }

    /// Linear interpolation towards `other` (`t = 0` is `self`, `t = 1` is `other`).
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }
}

/// Unit normal of the direction `from → to`, rotated a quarter turn.
///
/// Returns `(0.0, 0.0)` when the two points are closer than
/// [`MIN_NORMAL_LENGTH`] so near-zero segments never divide by ~0.
pub fn unit_normal(from: Point, to: Point) -> (f64, f64) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = dx.hypot(dy);
    if len > MIN_NORMAL_LENGTH {
        (-dy / len, dx / len)
    } else {
        (0.0, 0.0)
    }
}

/// A single quadratic Bézier piece: starts at `from`, bends towards
/// `control`, ends at `to`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticPath {
    pub from: Point,
    pub control: Point,
    pub to: Point,
}

impl QuadraticPath {
    pub fn new(from: Point, control: Point, to: Point) -> Self {
        Self { from, control, to }
    }

    /// The same curve moved rigidly by `(dx, dy)`.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            from: self.from.offset(dx, dy),
            control: self.control.offset(dx, dy),
            to: self.to.offset(dx, dy),
        }
    }

    /// Control points of the equivalent cubic curve (degree elevation).
    ///
    /// Cairo only draws cubics, so quadratics go through this first.
    pub fn cubic_controls(&self) -> (Point, Point) {
        let c1 = self.from.lerp(self.control, 2.0 / 3.0);
        let c2 = self.to.lerp(self.control, 2.0 / 3.0);
        (c1, c2)
    }

    /// Evaluates the curve at parameter `t` in `[0, 1]`.
    pub fn point_at(&self, t: f64) -> Point {
        let a = self.from.lerp(self.control, t);
        let b = self.control.lerp(self.to, t);
        a.lerp(b, t)
    }
}

/// The newest smoothed piece of a stroke.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    /// Centerline curve from the previous midpoint to the current midpoint
    pub path: QuadraticPath,
    /// Second-to-last recorded point, `P[n-1]`
    pub previous: Point,
    /// Newest recorded point, `P[n]`
    pub latest: Point,
}

/// Midpoint-quadratic smoothing of the newest slice of a stroke.
///
/// With points `P[n-2], P[n-1], P[n]` the curve runs from
/// `mid(P[n-2], P[n-1])` through control `P[n-1]` to `mid(P[n-1], P[n])`.
/// With only two points the start is `P[n-1]` itself. Fewer than two
/// points yield `None`.
pub fn smooth_segment(points: &[Point]) -> Option<Segment> {
    let n = points.len();
    if n < 2 {
        return None;
    }

    let previous = points[n - 2];
    let latest = points[n - 1];
    let mid = previous.midpoint(latest);
    let prev_mid = if n > 2 {
        points[n - 3].midpoint(previous)
    } else {
        previous
    };

    Some(Segment {
        path: QuadraticPath::new(prev_mid, previous, mid),
        previous,
        latest,
    })
}
