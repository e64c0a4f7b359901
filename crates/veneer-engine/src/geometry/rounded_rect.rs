use crate::coords::{CornerRadii, Insets, Rect, Vec2};

/// A resolved rounded rectangle: bounds plus radii that fit them.
///
/// Instances come from [`GeometryResolver`](super::GeometryResolver), which
/// guarantees that radii sharing an edge never sum past its length. Coverage
/// is evaluated analytically, so the same value backs fills, strokes, clips
/// and shadow silhouettes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RoundedRect {
    rect: Rect,
    radii: CornerRadii,
}

impl RoundedRect {
    /// Callers are responsible for `radii` fitting `rect`.
    #[inline]
    pub(crate) const fn new_unchecked(rect: Rect, radii: CornerRadii) -> Self {
        Self { rect, radii }
    }

    /// A sharp-cornered rectangle. Always valid.
    #[inline]
    pub const fn from_rect(rect: Rect) -> Self {
        Self { rect, radii: CornerRadii::zero() }
    }

    /// The empty shape: covers nothing.
    #[inline]
    pub const fn empty() -> Self {
        Self { rect: Rect::new(0.0, 0.0, 0.0, 0.0), radii: CornerRadii::zero() }
    }

    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    #[inline]
    pub fn radii(&self) -> CornerRadii {
        self.radii
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rect.is_empty()
    }

    /// `true` when at least one corner is rounded.
    #[inline]
    pub fn is_rounded(&self) -> bool {
        !self.radii.is_zero()
    }

    #[inline]
    #[must_use]
    pub fn translate(&self, offset: Vec2) -> RoundedRect {
        Self { rect: self.rect.translate(offset), radii: self.radii }
    }

    /// Concentric offset: bounds grow by `d` and rounded corners grow with them.
    ///
    /// The result is not re-clamped; go through the resolver for that.
    #[inline]
    #[must_use]
    pub fn outset(&self, d: f32) -> RoundedRect {
        if self.is_empty() {
            return *self;
        }
        let rect = if d >= 0.0 {
            self.rect.outset(Insets::all(d))
        } else {
            self.rect.inset(Insets::all(-d))
        };
        if rect.is_empty() {
            return RoundedRect::empty();
        }
        Self { rect, radii: self.radii.adjusted(d) }
    }

    /// Concentric shrink by `d`; the inverse of [`outset`](Self::outset).
    #[inline]
    #[must_use]
    pub fn inset(&self, d: f32) -> RoundedRect {
        self.outset(-d)
    }

    /// Approximate signed distance from `p` to the boundary (negative inside).
    ///
    /// Exact for sharp and circular corners; elliptical corners use the
    /// normalized-radius approximation, which is exact on the ellipse itself.
    pub fn signed_distance(&self, p: Vec2) -> f32 {
        if self.is_empty() {
            return f32::INFINITY;
        }

        let half = self.rect.size * 0.5;
        let c = self.rect.center();
        let qx = (p.x - c.x).abs() - half.x;
        let qy = (p.y - c.y).abs() - half.y;
        let outside = Vec2::new(qx.max(0.0), qy.max(0.0)).length();
        let mut d = outside + qx.max(qy).min(0.0);

        let min = self.rect.min();
        let max = self.rect.max();

        // Each rounded corner carves its quadrant; intersection of shapes is the
        // max of their distances.
        let corners = [
            (self.radii.top_left, Vec2::new(min.x, min.y), Vec2::new(1.0, 1.0)),
            (self.radii.top_right, Vec2::new(max.x, min.y), Vec2::new(-1.0, 1.0)),
            (self.radii.bottom_right, Vec2::new(max.x, max.y), Vec2::new(-1.0, -1.0)),
            (self.radii.bottom_left, Vec2::new(min.x, max.y), Vec2::new(1.0, -1.0)),
        ];
        for (r, corner, dir) in corners {
            if r.x <= 0.0 || r.y <= 0.0 {
                continue;
            }
            let center = Vec2::new(corner.x + dir.x * r.x, corner.y + dir.y * r.y);
            let beyond_x = (p.x - center.x) * dir.x < 0.0;
            let beyond_y = (p.y - center.y) * dir.y < 0.0;
            if beyond_x && beyond_y {
                let n = Vec2::new((p.x - center.x) / r.x, (p.y - center.y) / r.y);
                let corner_d = (n.length() - 1.0) * r.x.min(r.y);
                d = d.max(corner_d);
            }
        }

        d
    }

    /// Anti-aliased coverage in `[0, 1]` of the pixel whose center is `p`.
    #[inline]
    pub fn coverage(&self, p: Vec2) -> f32 {
        (0.5 - self.signed_distance(p)).clamp(0.0, 1.0)
    }

    /// Coverage of pixel `(x, y)`, sampled at its center.
    #[inline]
    pub fn pixel_coverage(&self, x: u32, y: u32) -> f32 {
        self.coverage(Vec2::new(x as f32 + 0.5, y as f32 + 0.5))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rr(w: f32, h: f32, r: f32) -> RoundedRect {
        RoundedRect::new_unchecked(Rect::new(0.0, 0.0, w, h), CornerRadii::all(r))
    }

    // ── coverage ──────────────────────────────────────────────────────────

    #[test]
    fn sharp_rect_edges_are_crisp() {
        let s = RoundedRect::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(s.pixel_coverage(0, 0), 1.0);
        assert_eq!(s.pixel_coverage(9, 9), 1.0);
        assert_eq!(s.coverage(Vec2::new(10.5, 5.0)), 0.0);
    }

    #[test]
    fn rounded_corner_pixel_is_outside() {
        let s = rr(100.0, 100.0, 20.0);
        assert_eq!(s.pixel_coverage(0, 0), 0.0);
        assert_eq!(s.pixel_coverage(50, 0), 1.0);
        assert_eq!(s.pixel_coverage(50, 50), 1.0);
    }

    #[test]
    fn circular_corner_distance_is_exact() {
        let s = rr(100.0, 100.0, 20.0);
        // Point on the diagonal through the corner center, 5px outside the arc.
        let k = 20.0 - 25.0 / 2f32.sqrt();
        let d = s.signed_distance(Vec2::new(k, k));
        assert!((d - 5.0).abs() < 1e-3, "d = {d}");
    }

    #[test]
    fn empty_shape_covers_nothing() {
        assert_eq!(RoundedRect::empty().coverage(Vec2::zero()), 0.0);
    }

    // ── outset ────────────────────────────────────────────────────────────

    #[test]
    fn outset_grows_bounds_and_radii() {
        let o = rr(100.0, 50.0, 10.0).outset(5.0);
        assert_eq!(o.rect(), Rect::new(-5.0, -5.0, 110.0, 60.0));
        assert_eq!(o.radii(), CornerRadii::all(15.0));
    }

    #[test]
    fn inset_past_center_is_empty() {
        assert!(rr(10.0, 10.0, 0.0).inset(6.0).is_empty());
    }

    #[test]
    fn outset_keeps_sharp_corners_sharp() {
        let o = rr(10.0, 10.0, 0.0).outset(3.0);
        assert!(!o.is_rounded());
    }
}
