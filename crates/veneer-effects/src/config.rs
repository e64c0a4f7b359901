use std::sync::Arc;

use veneer_engine::coords::{CornerRadii, Insets, PixelSize};
use veneer_engine::geometry::GeometryResolver;
use veneer_engine::paint::Color;
use veneer_engine::patch::{PatchImage, PatchImageSource};

use crate::compositor::{CompiledLayer, EffectDrawable};
use crate::effect::{ShadowSpec, StrokeSpec};
use crate::error::EffectError;

// ── Base ──────────────────────────────────────────────────────────────────

/// The visual the effects are layered around.
#[derive(Debug, Clone, PartialEq)]
pub enum Base {
    /// Plain rounded shape, optionally filled.
    Drawing { fill: Option<Color> },
    /// Stretchable patch image, stretched to the boundary.
    Patch(Arc<PatchImage>),
}

// ── BoundsMode ────────────────────────────────────────────────────────────

/// Where the effect is drawn relative to the view bounds.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub enum BoundsMode {
    /// The shape fills the view and shadows/strokes bleed outside it.
    #[default]
    Outer,
    /// The shape is inset so every effect stays inside the view; the inset
    /// becomes part of the content inset.
    Padding,
}

// ── ContentCap ────────────────────────────────────────────────────────────

/// Minimum content inset requested by the caller.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ContentCap {
    Uniform(f32),
    Edges(Insets),
}

impl ContentCap {
    #[inline]
    pub fn insets(self) -> Insets {
        match self {
            ContentCap::Uniform(v) => Insets::all(v),
            ContentCap::Edges(e) => e,
        }
        .non_negative()
    }
}

// ── EffectParams ──────────────────────────────────────────────────────────

/// Frozen effect parameters shared by a built [`EffectDrawable`].
#[derive(Debug, Clone, PartialEq)]
pub struct EffectParams {
    pub(crate) base: Base,
    pub(crate) shadow: Option<ShadowSpec>,
    pub(crate) stroke: Option<StrokeSpec>,
    pub(crate) radii: CornerRadii,
    pub(crate) content_cap: Option<ContentCap>,
    pub(crate) bounds: BoundsMode,
    pub(crate) optimize_stroke_corner: Option<bool>,
}

impl EffectParams {
    fn new(base: Base) -> Self {
        Self {
            base,
            shadow: None,
            stroke: None,
            radii: CornerRadii::zero(),
            content_cap: None,
            bounds: BoundsMode::Outer,
            optimize_stroke_corner: None,
        }
    }

    #[inline]
    pub fn base(&self) -> &Base {
        &self.base
    }

    #[inline]
    pub fn shadow(&self) -> Option<&ShadowSpec> {
        self.shadow.as_ref()
    }

    #[inline]
    pub fn stroke(&self) -> Option<&StrokeSpec> {
        self.stroke.as_ref()
    }

    #[inline]
    pub fn radii(&self) -> CornerRadii {
        self.radii
    }

    #[inline]
    pub fn content_cap(&self) -> Option<ContentCap> {
        self.content_cap
    }

    #[inline]
    pub fn bounds_mode(&self) -> BoundsMode {
        self.bounds
    }

    /// Explicit stroke-corner choice; `None` defers to the geometry config.
    #[inline]
    pub fn optimize_stroke_corner(&self) -> Option<bool> {
        self.optimize_stroke_corner
    }
}

// ── EffectConfig ──────────────────────────────────────────────────────────

/// Owned builder for one effect. Configure it, then consume it with
/// [`build`](Self::build), [`compile`](Self::compile),
/// [`into_view`](Self::into_view) or
/// [`build_focus_selector`](Self::build_focus_selector).
///
/// ```rust
/// use veneer_effects::prelude::*;
///
/// let layer = EffectConfig::with_drawing_base()
///     .corner_radius(20.0)
///     .stroke(StrokeSpec::new(10.0, Color::from_argb(0xffff0000)))
///     .compile(PixelSize::new(200, 100))
///     .unwrap();
/// assert!(layer.content_inset().top >= 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EffectConfig {
    params: EffectParams,
}

impl EffectConfig {
    pub fn with_drawing_base() -> Self {
        Self { params: EffectParams::new(Base::Drawing { fill: None }) }
    }

    /// Decodes `source` now; malformed images fail here, not at compile time.
    pub fn with_patch_image(source: &PatchImageSource) -> Result<Self, EffectError> {
        let patch = PatchImage::decode(source)?;
        Ok(Self::with_patch(patch))
    }

    pub fn with_patch(patch: impl Into<Arc<PatchImage>>) -> Self {
        Self { params: EffectParams::new(Base::Patch(patch.into())) }
    }

    #[inline]
    pub fn params(&self) -> &EffectParams {
        &self.params
    }

    /// Solid fill for a drawing base.
    pub fn fill(mut self, color: Color) -> Result<Self, EffectError> {
        match &mut self.params.base {
            Base::Drawing { fill } => {
                *fill = Some(color);
                Ok(self)
            }
            Base::Patch(_) => Err(EffectError::ConfigurationConflict {
                call: "fill",
                reason: "a patch image base cannot also take a fill color".into(),
            }),
        }
    }

    #[inline]
    pub fn shadow(mut self, shadow: ShadowSpec) -> Self {
        self.params.shadow = Some(shadow.sanitized());
        self
    }

    #[inline]
    pub fn stroke(mut self, stroke: StrokeSpec) -> Self {
        self.params.stroke = Some(stroke);
        self
    }

    /// Sets the stroke width, starting from a white stroke if none is set.
    pub fn stroke_width(mut self, width: f32) -> Self {
        let color = self.params.stroke.map_or(Color::white(), |s| s.color);
        self.params.stroke = Some(StrokeSpec::new(width, color));
        self
    }

    /// Sets the stroke color, starting from a zero-width stroke if none is set.
    pub fn stroke_color(mut self, color: Color) -> Self {
        let width = self.params.stroke.map_or(0.0, |s| s.width);
        self.params.stroke = Some(StrokeSpec::new(width, color));
        self
    }

    /// Same radius on every corner. Replaces any earlier radii.
    #[inline]
    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.params.radii = CornerRadii::all(radius);
        self
    }

    /// Replaces any earlier radii.
    #[inline]
    pub fn corner_radii(mut self, radii: CornerRadii) -> Self {
        self.params.radii = radii;
        self
    }

    #[inline]
    pub fn content_cap(mut self, inset: f32) -> Self {
        self.params.content_cap = Some(ContentCap::Uniform(inset));
        self
    }

    #[inline]
    pub fn content_cap_edges(mut self, insets: Insets) -> Self {
        self.params.content_cap = Some(ContentCap::Edges(insets));
        self
    }

    #[inline]
    pub fn outer_bounds(mut self) -> Self {
        self.params.bounds = BoundsMode::Outer;
        self
    }

    #[inline]
    pub fn padding_bounds(mut self) -> Self {
        self.params.bounds = BoundsMode::Padding;
        self
    }

    /// Forces stroke corner optimization on or off for this effect.
    #[inline]
    pub fn optimize_stroke_corner(mut self, enabled: bool) -> Self {
        self.params.optimize_stroke_corner = Some(enabled);
        self
    }

    /// Freezes the configuration into a size-independent drawable.
    #[inline]
    pub fn build(self) -> EffectDrawable {
        EffectDrawable::new(self.params)
    }

    /// Compiles for `size` with the process-default geometry config.
    pub fn compile(self, size: PixelSize) -> Result<CompiledLayer, EffectError> {
        self.build().compile(size)
    }

    pub fn compile_with(self, resolver: &GeometryResolver, size: PixelSize) -> Result<CompiledLayer, EffectError> {
        self.build().compile_with(resolver, size)
    }
}
