use crate::coords::{CornerRadii, Rect, Vec2};

use super::{Edge, GeometryConfig, InvalidGeometryError, RoundedRect};

/// Outer and inner boundaries of a stroke. The stroke covers `outer − inner`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StrokeBand {
    pub outer: RoundedRect,
    pub inner: RoundedRect,
}

impl StrokeBand {
    /// Coverage of the band at pixel center `p`.
    #[inline]
    pub fn coverage(&self, p: Vec2) -> f32 {
        (self.outer.coverage(p) - self.inner.coverage(p)).clamp(0.0, 1.0)
    }
}

/// Worst edge overflow found in a set of radii.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Overflow {
    edge: Edge,
    sum: f32,
    length: f32,
    /// Factor that brings every edge back within its length.
    scale: f32,
}

/// Finds the smallest `length / sum` ratio over the four edges, if any is below one.
fn overflow(size: Vec2, r: &CornerRadii) -> Option<Overflow> {
    let edges = [
        (Edge::Top, r.top_left.x + r.top_right.x, size.x),
        (Edge::Bottom, r.bottom_left.x + r.bottom_right.x, size.x),
        (Edge::Left, r.top_left.y + r.bottom_left.y, size.y),
        (Edge::Right, r.top_right.y + r.bottom_right.y, size.y),
    ];

    let mut worst: Option<Overflow> = None;
    for (edge, sum, length) in edges {
        if sum <= length {
            continue;
        }
        let scale = length / sum;
        if worst.is_none_or(|w| scale < w.scale) {
            worst = Some(Overflow { edge, sum, length, scale });
        }
    }
    worst
}

/// Turns bounds and radii into paths every effect layer agrees on.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GeometryResolver {
    config: GeometryConfig,
}

impl GeometryResolver {
    #[inline]
    pub const fn new(config: GeometryConfig) -> Self {
        Self { config }
    }

    /// Resolver over the installed process default.
    #[inline]
    pub fn from_process_default() -> Self {
        Self::new(GeometryConfig::process_default())
    }

    #[inline]
    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// Resolves `radii` against `bounds`, always clamping.
    ///
    /// Zero-area, negative or non-finite bounds give an empty path. Radii
    /// that overflow an edge are scaled down together by the same factor, so
    /// every corner keeps its aspect and adjacent corners stay tangent.
    pub fn resolve(&self, bounds: Rect, radii: CornerRadii) -> RoundedRect {
        if !bounds.is_finite() || bounds.is_empty() {
            return RoundedRect::empty();
        }
        let radii = radii.sanitized();
        match overflow(bounds.size, &radii) {
            None => RoundedRect::new_unchecked(bounds, radii),
            Some(o) => {
                log::debug!(
                    "clamping corner radii: {} edge sums to {} over length {}, scale {:.4}",
                    o.edge, o.sum, o.length, o.scale
                );
                RoundedRect::new_unchecked(bounds, radii.scaled(o.scale).sanitized())
            }
        }
    }

    /// Resolves without repairing anything.
    pub fn try_resolve(&self, bounds: Rect, radii: CornerRadii) -> Result<RoundedRect, InvalidGeometryError> {
        if !bounds.is_finite() {
            return Err(InvalidGeometryError::NonFinite);
        }
        if bounds.size.x < 0.0 || bounds.size.y < 0.0 {
            return Err(InvalidGeometryError::NegativeBounds { width: bounds.size.x, height: bounds.size.y });
        }
        if bounds.is_empty() {
            return Ok(RoundedRect::empty());
        }
        let radii = radii.sanitized();
        match overflow(bounds.size, &radii) {
            None => Ok(RoundedRect::new_unchecked(bounds, radii)),
            Some(o) => Err(InvalidGeometryError::RadiiOverflow { edge: o.edge, sum: o.sum, length: o.length }),
        }
    }

    /// Clamps or reports according to [`GeometryConfig::auto_clamp`].
    #[inline]
    pub fn resolve_checked(&self, bounds: Rect, radii: CornerRadii) -> Result<RoundedRect, InvalidGeometryError> {
        if self.config.auto_clamp {
            Ok(self.resolve(bounds, radii))
        } else {
            self.try_resolve(bounds, radii)
        }
    }

    /// Concentric offset of an already resolved shape, re-clamped.
    #[inline]
    pub fn offset(&self, shape: &RoundedRect, d: f32) -> RoundedRect {
        let grown = shape.outset(d);
        self.resolve(grown.rect(), grown.radii())
    }

    /// Whether a stroke of `width` gets corner optimization.
    ///
    /// An explicit choice wins; otherwise thick strokes are optimized when the
    /// config allows it. Sharp shapes are never optimized.
    pub fn should_optimize_stroke(&self, width: f32, explicit: Option<bool>, rounded: bool) -> bool {
        if !rounded {
            return false;
        }
        explicit.unwrap_or(self.config.auto_optimize_stroke_corners && width > self.config.stroke_thick_limit)
    }

    /// Band of a stroke of `width` centered on `boundary`.
    ///
    /// With `optimize`, the inner edge keeps the configured radii so the
    /// stroke hugs content of that radius, and the outer edge grows by the
    /// full stroke width so the band does not look pinched at the corners.
    pub fn stroke_band(&self, boundary: &RoundedRect, width: f32, optimize: bool) -> StrokeBand {
        if boundary.is_empty() || width.is_nan() || width <= 0.0 {
            return StrokeBand { outer: RoundedRect::empty(), inner: RoundedRect::empty() };
        }
        let half = width / 2.0;
        let outer_rect = boundary.outset(half).rect();
        let inner_rect = boundary.inset(half).rect();
        let r = boundary.radii();

        let (outer_radii, inner_radii) = if optimize && boundary.is_rounded() {
            (r.adjusted(width), r)
        } else {
            (r.adjusted(half), r.adjusted(-half))
        };

        StrokeBand {
            outer: self.resolve(outer_rect, outer_radii),
            inner: self.resolve(inner_rect, inner_radii),
        }
    }
}
