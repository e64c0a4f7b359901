use std::hash::{Hash, Hasher};

use veneer_engine::coords::Insets;
use veneer_engine::paint::Color;

/// How far a blur of `blur` pixels reaches past its silhouette once rasterized.
///
/// Mask blurs run three box passes of `ceil(blur / 3)`, so the support is a
/// whole multiple of three.
#[inline]
pub(crate) fn blur_reach(blur: f32) -> f32 {
    if blur > 0.0 { 3.0 * (blur / 3.0).ceil() } else { 0.0 }
}

fn non_negative(v: f32) -> f32 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

fn finite_or_zero(v: f32) -> f32 {
    if v.is_finite() { v } else { 0.0 }
}

// ── ShadowSpec ────────────────────────────────────────────────────────────

/// Drop shadow cast by the effect's silhouette.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShadowSpec {
    pub blur: f32,
    pub dx: f32,
    pub dy: f32,
    pub spread: f32,
    pub color: Color,
}

impl ShadowSpec {
    /// Centered shadow with no spread.
    #[inline]
    pub const fn new(blur: f32, color: Color) -> Self {
        Self { blur, dx: 0.0, dy: 0.0, spread: 0.0, color }
    }

    #[inline]
    pub fn offset(mut self, dx: f32, dy: f32) -> Self {
        self.dx = dx;
        self.dy = dy;
        self
    }

    #[inline]
    pub fn spread(mut self, spread: f32) -> Self {
        self.spread = spread;
        self
    }

    /// Shadow that bleeds `left`, `top`, `right` and `bottom` pixels past the
    /// shape. Unequal opposite sides turn into an offset toward the larger one.
    pub fn from_sides(left: f32, top: f32, right: f32, bottom: f32, color: Color) -> Self {
        let (l, t, r, b) = (non_negative(left), non_negative(top), non_negative(right), non_negative(bottom));
        let blur = ((l + r) / 2.0).max((t + b) / 2.0);
        Self::new(blur, color).offset((r - l) / 2.0, (b - t) / 2.0)
    }

    /// Negative or non-finite blur and spread become zero, offsets become finite.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            blur: non_negative(self.blur),
            dx: finite_or_zero(self.dx),
            dy: finite_or_zero(self.dy),
            spread: non_negative(self.spread),
            color: self.color.clamped(),
        }
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        !self.color.is_transparent()
    }

    /// Distance the shadow extends past the shape on each side.
    pub fn extent(&self) -> Insets {
        let s = self.sanitized();
        let reach = blur_reach(s.blur) + s.spread;
        Insets::new(reach - s.dy, reach + s.dx, reach + s.dy, reach - s.dx).non_negative()
    }

    /// Stronger variant used for focused and pressed states.
    #[must_use]
    pub fn emphasized(self) -> Self {
        let s = self.sanitized();
        Self { blur: s.blur * 1.5, spread: s.spread + 1.0, ..s }
    }

    pub(crate) fn hash_into<H: Hasher>(&self, h: &mut H) {
        [self.blur, self.dx, self.dy, self.spread].map(f32::to_bits).hash(h);
        self.color.to_bits().hash(h);
    }
}

// ── StrokeSpec ────────────────────────────────────────────────────────────

/// Border drawn centered on the effect boundary.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeSpec {
    pub width: f32,
    pub color: Color,
}

impl StrokeSpec {
    #[inline]
    pub const fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }

    /// Zero width or a fully transparent color draws nothing.
    #[inline]
    pub fn is_visible(&self) -> bool {
        self.width > 0.0 && self.width.is_finite() && !self.color.is_transparent()
    }

    /// Half the width on every side when visible: the stroke's outward bleed
    /// and its inward reach into the content.
    pub fn half_extent(&self) -> Insets {
        if self.is_visible() { Insets::all(self.width / 2.0) } else { Insets::zero() }
    }

    /// Half the width on every side, whatever the color. Content stays clear
    /// of the stroke's inner half even while the stroke is invisible.
    pub fn content_reach(&self) -> Insets {
        Insets::all(non_negative(self.width) / 2.0)
    }

    /// 1.5× wider, and at least one pixel wider.
    #[must_use]
    pub fn emphasized(self) -> Self {
        let w = non_negative(self.width);
        Self { width: (w * 1.5).max(w + 1.0), ..self }
    }

    pub(crate) fn hash_into<H: Hasher>(&self, h: &mut H) {
        self.width.to_bits().hash(h);
        self.color.to_bits().hash(h);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── ShadowSpec ────────────────────────────────────────────────────────

    #[test]
    fn centered_shadow_extent_is_blur_reach() {
        let s = ShadowSpec::new(6.0, Color::black());
        assert_eq!(s.extent(), Insets::all(6.0));
        let s = ShadowSpec::new(4.0, Color::black());
        assert_eq!(s.extent(), Insets::all(6.0));
    }

    #[test]
    fn offset_moves_extent_toward_offset() {
        let s = ShadowSpec::new(6.0, Color::black()).offset(2.0, 3.0).spread(1.0);
        assert_eq!(s.extent(), Insets::new(4.0, 9.0, 10.0, 5.0));
    }

    #[test]
    fn from_sides_reproduces_side_sizes() {
        let s = ShadowSpec::from_sides(3.0, 6.0, 9.0, 6.0, Color::black());
        assert_eq!(s.blur, 6.0);
        assert_eq!((s.dx, s.dy), (3.0, 0.0));
        let e = s.extent();
        assert_eq!((e.left, e.right, e.top, e.bottom), (3.0, 9.0, 6.0, 6.0));
    }

    #[test]
    fn negative_blur_sanitizes_to_zero() {
        let s = ShadowSpec::new(-4.0, Color::black()).spread(f32::NAN).sanitized();
        assert_eq!((s.blur, s.spread), (0.0, 0.0));
    }

    #[test]
    fn emphasized_shadow_grows() {
        let s = ShadowSpec::new(4.0, Color::black()).emphasized();
        assert_eq!((s.blur, s.spread), (6.0, 1.0));
    }

    // ── StrokeSpec ────────────────────────────────────────────────────────

    #[test]
    fn invisible_strokes() {
        assert!(!StrokeSpec::new(0.0, Color::white()).is_visible());
        assert!(!StrokeSpec::new(3.0, Color::transparent()).is_visible());
        assert_eq!(StrokeSpec::new(0.0, Color::white()).half_extent(), Insets::zero());
    }

    #[test]
    fn content_reach_ignores_color() {
        let clear = StrokeSpec::new(10.0, Color::transparent());
        assert_eq!(clear.half_extent(), Insets::zero());
        assert_eq!(clear.content_reach(), Insets::all(5.0));
        assert_eq!(StrokeSpec::new(-2.0, Color::white()).content_reach(), Insets::zero());
    }

    #[test]
    fn emphasized_stroke_is_at_least_one_pixel_wider() {
        assert_eq!(StrokeSpec::new(1.0, Color::white()).emphasized().width, 2.0);
        assert_eq!(StrokeSpec::new(10.0, Color::white()).emphasized().width, 15.0);
    }
}
