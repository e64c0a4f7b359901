use super::Vec2;

/// Per-corner radii for a rounded rectangle (pixels).
///
/// Each corner carries an `(x, y)` pair so elliptical corners are expressible.
/// Corners follow CSS convention: top-left, top-right, bottom-right, bottom-left.
/// Negative and non-finite values are treated as zero by [`sanitized`](Self::sanitized).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: Vec2,
    pub top_right: Vec2,
    pub bottom_right: Vec2,
    pub bottom_left: Vec2,
}

impl CornerRadii {
    #[inline]
    pub const fn new(top_left: Vec2, top_right: Vec2, bottom_right: Vec2, bottom_left: Vec2) -> Self {
        Self { top_left, top_right, bottom_right, bottom_left }
    }

    /// Uniform circular radius on all four corners.
    #[inline]
    pub const fn all(r: f32) -> Self {
        let v = Vec2::splat(r);
        Self { top_left: v, top_right: v, bottom_right: v, bottom_left: v }
    }

    /// Circular radius per corner.
    #[inline]
    pub const fn circular(top_left: f32, top_right: f32, bottom_right: f32, bottom_left: f32) -> Self {
        Self {
            top_left: Vec2::splat(top_left),
            top_right: Vec2::splat(top_right),
            bottom_right: Vec2::splat(bottom_right),
            bottom_left: Vec2::splat(bottom_left),
        }
    }

    /// No rounding.
    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    /// Builds radii from eight floats, `x, y` per corner in
    /// top-left, top-right, bottom-right, bottom-left order.
    #[inline]
    pub const fn from_pairs(v: [f32; 8]) -> Self {
        Self {
            top_left: Vec2::new(v[0], v[1]),
            top_right: Vec2::new(v[2], v[3]),
            bottom_right: Vec2::new(v[4], v[5]),
            bottom_left: Vec2::new(v[6], v[7]),
        }
    }

    #[inline]
    pub const fn to_pairs(self) -> [f32; 8] {
        [
            self.top_left.x, self.top_left.y,
            self.top_right.x, self.top_right.y,
            self.bottom_right.x, self.bottom_right.y,
            self.bottom_left.x, self.bottom_left.y,
        ]
    }

    /// Corners in CSS order.
    #[inline]
    pub const fn corners(self) -> [Vec2; 4] {
        [self.top_left, self.top_right, self.bottom_right, self.bottom_left]
    }

    /// `true` when no corner is rounded.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.corners().iter().all(|c| c.x <= 0.0 || c.y <= 0.0)
    }

    /// Largest radius component on any corner.
    #[inline]
    pub fn max(self) -> f32 {
        self.to_pairs().iter().fold(0.0f32, |m, &v| m.max(v))
    }

    /// Applies `f` to every corner.
    #[inline]
    #[must_use]
    pub fn map(self, mut f: impl FnMut(Vec2) -> Vec2) -> Self {
        Self {
            top_left: f(self.top_left),
            top_right: f(self.top_right),
            bottom_right: f(self.bottom_right),
            bottom_left: f(self.bottom_left),
        }
    }

    /// Replaces negative and non-finite components with zero. A corner with
    /// one zero component is square, so both components collapse to zero.
    #[inline]
    #[must_use]
    pub fn sanitized(self) -> Self {
        self.map(|c| {
            let fix = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
            let (x, y) = (fix(c.x), fix(c.y));
            if x == 0.0 || y == 0.0 { Vec2::zero() } else { Vec2::new(x, y) }
        })
    }

    #[inline]
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        self.map(|c| c * factor)
    }

    /// Grows rounded corners by `d` on both axes (shrinks for negative `d`).
    /// Square corners stay square, so offsets of a sharp rectangle stay sharp.
    #[inline]
    #[must_use]
    pub fn adjusted(self, d: f32) -> Self {
        self.map(|c| {
            if c.x <= 0.0 || c.y <= 0.0 {
                Vec2::zero()
            } else {
                Vec2::new((c.x + d).max(0.0), (c.y + d).max(0.0))
            }
        })
        .sanitized()
    }

    /// Per-component minimum against per-corner limits.
    #[inline]
    #[must_use]
    pub fn limited(self, limits: CornerRadii) -> Self {
        Self {
            top_left: self.top_left.min(limits.top_left),
            top_right: self.top_right.min(limits.top_right),
            bottom_right: self.bottom_right.min(limits.bottom_right),
            bottom_left: self.bottom_left.min(limits.bottom_left),
        }
        .sanitized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_follows_corner_order() {
        let r = CornerRadii::from_pairs([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
        assert_eq!(r.top_left, Vec2::new(1.0, 2.0));
        assert_eq!(r.top_right, Vec2::new(3.0, 4.0));
        assert_eq!(r.bottom_right, Vec2::new(5.0, 6.0));
        assert_eq!(r.bottom_left, Vec2::new(7.0, 8.0));
        assert_eq!(r.to_pairs(), [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    }

    #[test]
    fn sanitized_zeroes_negative_and_nan() {
        let r = CornerRadii::circular(-4.0, f32::NAN, 3.0, f32::INFINITY).sanitized();
        assert_eq!(r, CornerRadii::circular(0.0, 0.0, 3.0, 0.0));
    }

    #[test]
    fn half_zero_corner_is_square() {
        let r = CornerRadii::new(Vec2::new(5.0, 0.0), Vec2::zero(), Vec2::zero(), Vec2::zero());
        assert!(r.sanitized().is_zero());
    }

    #[test]
    fn adjusted_keeps_square_corners_square() {
        let r = CornerRadii::circular(10.0, 0.0, 4.0, 0.0).adjusted(5.0);
        assert_eq!(r, CornerRadii::circular(15.0, 0.0, 9.0, 0.0));
        let shrunk = CornerRadii::circular(10.0, 0.0, 4.0, 0.0).adjusted(-5.0);
        assert_eq!(shrunk, CornerRadii::circular(5.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn limited_caps_each_component() {
        let r = CornerRadii::all(20.0).limited(CornerRadii::circular(8.0, 30.0, 8.0, 30.0));
        assert_eq!(r, CornerRadii::circular(8.0, 20.0, 8.0, 20.0));
    }

    #[test]
    fn max_finds_largest_component() {
        let r = CornerRadii::new(Vec2::new(1.0, 9.0), Vec2::zero(), Vec2::splat(3.0), Vec2::zero());
        assert_eq!(r.max(), 9.0);
    }
}
