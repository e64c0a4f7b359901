use core::ops::Add;

/// Distances on all four sides (content inset, outsets, padding).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Insets {
    /// CSS order: top, right, bottom, left.
    #[inline]
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self { top, right, bottom, left }
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::all(0.0)
    }

    #[inline]
    pub const fn all(v: f32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    #[inline]
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
    }

    /// Total inset on the horizontal axis.
    #[inline]
    pub fn h(self) -> f32 {
        self.left + self.right
    }

    /// Total inset on the vertical axis.
    #[inline]
    pub fn v(self) -> f32 {
        self.top + self.bottom
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }

    /// Per-edge maximum.
    #[inline]
    #[must_use]
    pub fn max(self, other: Insets) -> Insets {
        Insets {
            top: self.top.max(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
            left: self.left.max(other.left),
        }
    }

    /// Rounds every edge up to whole pixels.
    #[inline]
    #[must_use]
    pub fn ceil(self) -> Insets {
        Insets {
            top: self.top.ceil(),
            right: self.right.ceil(),
            bottom: self.bottom.ceil(),
            left: self.left.ceil(),
        }
    }

    /// Replaces negative and non-finite edges with zero.
    #[inline]
    #[must_use]
    pub fn non_negative(self) -> Insets {
        let f = |v: f32| if v.is_finite() && v > 0.0 { v } else { 0.0 };
        Insets {
            top: f(self.top),
            right: f(self.right),
            bottom: f(self.bottom),
            left: f(self.left),
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.top, self.right, self.bottom, self.left]
    }
}

impl Add for Insets {
    type Output = Insets;
    #[inline]
    fn add(self, rhs: Insets) -> Insets {
        Insets {
            top: self.top + rhs.top,
            right: self.right + rhs.right,
            bottom: self.bottom + rhs.bottom,
            left: self.left + rhs.left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_is_per_edge() {
        let a = Insets::new(1.0, 5.0, 2.0, 0.0);
        let b = Insets::new(3.0, 1.0, 2.0, 4.0);
        assert_eq!(a.max(b), Insets::new(3.0, 5.0, 2.0, 4.0));
    }

    #[test]
    fn ceil_rounds_up_fractions() {
        assert_eq!(Insets::all(2.1).ceil(), Insets::all(3.0));
    }

    #[test]
    fn non_negative_drops_nan_and_negatives() {
        let i = Insets::new(-1.0, f32::NAN, 2.0, 0.0).non_negative();
        assert_eq!(i, Insets::new(0.0, 0.0, 2.0, 0.0));
    }
}
