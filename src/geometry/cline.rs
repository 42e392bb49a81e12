use crate::math::Point2;

/// An infinite line in implicit form: `a * x + b * y + c = 0`.
///
/// Vertical lines need no special case. A line with `a == b == 0` is
/// degenerate; it comes out of [`Cline::through_points`] when the two
/// points coincide, and callers must check [`Cline::is_degenerate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cline {
    /// Coefficient of `x`.
    pub a: f64,
    /// Coefficient of `y`.
    pub b: f64,
    /// Constant term.
    pub c: f64,
}

impl Cline {
    /// Creates a line from its coefficients.
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    /// Returns the line through `p1` and `p2`.
    ///
    /// The direction from `p1` to `p2` is `(-b, a)`.
    #[must_use]
    pub fn through_points(p1: &Point2, p2: &Point2) -> Self {
        Self {
            a: p2.y - p1.y,
            b: p1.x - p2.x,
            c: p2.x * p1.y - p1.x * p2.y,
        }
    }

    /// Returns the line through `point` at `angle` degrees from the +X axis.
    #[must_use]
    pub fn at_angle(point: &Point2, angle: f64) -> Self {
        let (dy, dx) = angle.to_radians().sin_cos();
        Self::through_points(point, &Point2::new(point.x + dx, point.y + dy))
    }

    /// Returns the line through `vertex` at fraction `factor` of the way
    /// from the bearing `vertex -> p1` to the bearing `vertex -> p2`.
    ///
    /// The raw bearing difference is interpolated without wrapping it into
    /// `(-180, 180]`, so when the two bearings straddle the -X axis the
    /// result is the bisector of the reflex angle.
    #[must_use]
    pub fn angle_bisector(vertex: &Point2, p1: &Point2, p2: &Point2, factor: f64) -> Self {
        let ang1 = (p1.y - vertex.y).atan2(p1.x - vertex.x);
        let ang2 = (p2.y - vertex.y).atan2(p2.x - vertex.x);
        let bisect = factor * (ang2 - ang1) + ang1;
        Self::at_angle(vertex, bisect.to_degrees())
    }

    /// Returns `true` if both direction coefficients are exactly zero.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.a == 0.0 && self.b == 0.0
    }

    /// Evaluates `a * x + b * y + c` at `point`.
    ///
    /// Zero on the line; the sign tells which side the point is on.
    #[must_use]
    pub fn eval(&self, point: &Point2) -> f64 {
        self.a * point.x + self.b * point.y + self.c
    }

    /// Returns the orthogonal projection of `point` onto this line.
    ///
    /// A degenerate line leaves the point unchanged.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn project(&self, point: &Point2) -> Point2 {
        let Self { a, b, c } = *self;
        let denom = a * a + b * b;
        if denom == 0.0 {
            return *point;
        }
        let (x, y) = (point.x, point.y);
        Point2::new(
            (b * b * x - a * b * y - a * c) / denom,
            (a * a * y - a * b * x - b * c) / denom,
        )
    }

    /// Returns the line through `point` parallel to this one.
    #[must_use]
    pub fn parallel_through(&self, point: &Point2) -> Self {
        Self {
            a: self.a,
            b: self.b,
            c: -(self.a * point.x + self.b * point.y),
        }
    }

    /// Returns the two lines parallel to this one at perpendicular `distance`,
    /// one on each side.
    #[must_use]
    pub fn offset_pair(&self, distance: f64) -> (Self, Self) {
        let shift = self.a.hypot(self.b) * distance;
        (
            Self::new(self.a, self.b, self.c + shift),
            Self::new(self.a, self.b, self.c - shift),
        )
    }

    /// Returns the line through `point` perpendicular to this one.
    #[must_use]
    pub fn perpendicular_through(&self, point: &Point2) -> Self {
        Self {
            a: self.b,
            b: -self.a,
            c: self.a * point.y - self.b * point.x,
        }
    }
}
