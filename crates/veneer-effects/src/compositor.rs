//! Compiles frozen effect parameters into one layered raster.
//!
//! Every compile records the same three layers in the same order:
//! shadow (`ZIndex::SHADOW`), base (`ZIndex::BASE`), stroke (`ZIndex::STROKE`).
//! All of them are derived from a single resolved boundary, so the shadow
//! silhouette, the fill, the patch clip and the stroke band agree on corners.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use veneer_engine::coords::{CornerRadii, Insets, PixelSize, Rect, Vec2};
use veneer_engine::geometry::{GeometryResolver, InvalidGeometryError, RoundedRect};
use veneer_engine::render::{Mask, Pixmap, Rasterizer, MAX_PIXMAP_SIDE};
use veneer_engine::scene::shapes::Silhouette;
use veneer_engine::scene::{DrawList, ZIndex};

use crate::config::{Base, BoundsMode, EffectParams};
use crate::effect::{ShadowSpec, StrokeSpec};
use crate::error::EffectError;

// ── EffectDrawable ────────────────────────────────────────────────────────

/// Immutable, size-independent effect. Clones share the parameters.
#[derive(Debug, Clone)]
pub struct EffectDrawable {
    params: Arc<EffectParams>,
    fingerprint: u64,
}

impl PartialEq for EffectDrawable {
    fn eq(&self, other: &Self) -> bool {
        self.fingerprint == other.fingerprint && self.params == other.params
    }
}

fn fingerprint_of(p: &EffectParams) -> u64 {
    let mut h = DefaultHasher::new();
    match &p.base {
        Base::Drawing { fill } => {
            0u8.hash(&mut h);
            fill.map(|c| c.to_bits()).hash(&mut h);
        }
        Base::Patch(patch) => {
            1u8.hash(&mut h);
            patch.fingerprint().hash(&mut h);
        }
    }
    p.shadow.is_some().hash(&mut h);
    if let Some(s) = &p.shadow {
        s.hash_into(&mut h);
    }
    p.stroke.is_some().hash(&mut h);
    if let Some(s) = &p.stroke {
        s.hash_into(&mut h);
    }
    p.radii.to_pairs().map(f32::to_bits).hash(&mut h);
    p.content_cap.map(|c| c.insets().to_array().map(f32::to_bits)).hash(&mut h);
    p.bounds.hash(&mut h);
    p.optimize_stroke_corner.hash(&mut h);
    h.finish()
}

impl EffectDrawable {
    pub(crate) fn new(params: EffectParams) -> Self {
        let fingerprint = fingerprint_of(&params);
        Self { params: Arc::new(params), fingerprint }
    }

    #[inline]
    pub fn params(&self) -> &EffectParams {
        &self.params
    }

    /// Stable hash of every parameter; equal parameters hash equal.
    #[inline]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// `true` when both handles share the same frozen parameters.
    #[inline]
    pub fn ptr_eq(&self, other: &EffectDrawable) -> bool {
        Arc::ptr_eq(&self.params, &other.params)
    }

    /// Whole-pixel distance the shadow and stroke reach past the shape.
    pub fn effect_extent(&self) -> Insets {
        let shadow = self.visible_shadow().map_or(Insets::zero(), |s| s.extent());
        let stroke = self.visible_stroke().map_or(Insets::zero(), |s| s.half_extent());
        shadow.max(stroke).ceil()
    }

    /// How far the compiled raster extends past the view bounds.
    pub fn outsets(&self) -> Insets {
        match self.params.bounds {
            BoundsMode::Outer => self.effect_extent(),
            BoundsMode::Padding => Insets::zero(),
        }
    }

    /// Per edge: the largest of the content cap, half the stroke width and the
    /// patch image's embedded inset. Padding-bounds effects add their extent.
    pub fn content_inset(&self) -> Insets {
        let p = &*self.params;
        let mut inset = p.stroke.map_or(Insets::zero(), |s| s.content_reach());
        if let Some(cap) = p.content_cap {
            inset = inset.max(cap.insets());
        }
        if let Base::Patch(patch) = &p.base {
            inset = inset.max(patch.content_inset());
        }
        match p.bounds {
            BoundsMode::Outer => inset,
            BoundsMode::Padding => inset + self.effect_extent(),
        }
    }

    /// Variant with a stronger stroke and shadow, for focused and pressed
    /// states. Without either, this is the same drawable.
    pub fn emphasized(&self) -> EffectDrawable {
        let p = &*self.params;
        if p.shadow.is_none() && p.stroke.is_none() {
            return self.clone();
        }
        let mut next = p.clone();
        next.shadow = p.shadow.map(ShadowSpec::emphasized);
        next.stroke = p.stroke.map(StrokeSpec::emphasized);
        EffectDrawable::new(next)
    }

    /// Compiles for `size` with the process-default geometry config.
    pub fn compile(&self, size: PixelSize) -> Result<CompiledLayer, EffectError> {
        self.compile_with(&GeometryResolver::from_process_default(), size)
    }

    pub fn compile_with(&self, resolver: &GeometryResolver, size: PixelSize) -> Result<CompiledLayer, EffectError> {
        let p = &*self.params;
        let content_inset = self.content_inset();
        if size.is_empty() {
            log::debug!("effect compiled for empty size {size}");
            return Ok(CompiledLayer {
                pixmap: Arc::new(Pixmap::new(size)),
                size,
                outsets: Insets::zero(),
                content_inset,
                boundary: RoundedRect::empty(),
            });
        }

        let extent = self.effect_extent();
        let (outsets, shape_inset) = match p.bounds {
            BoundsMode::Outer => (extent, Insets::zero()),
            BoundsMode::Padding => (Insets::zero(), extent),
        };
        let canvas = size
            .checked_expand(outsets)
            .filter(|c| c.width <= MAX_PIXMAP_SIDE && c.height <= MAX_PIXMAP_SIDE)
            .ok_or(InvalidGeometryError::CanvasTooLarge { size, outsets, limit: MAX_PIXMAP_SIDE })?;
        let origin = Vec2::new(outsets.left, outsets.top);
        let rect = Rect::from_origin_size(origin, size.to_vec2()).inset(shape_inset);
        let boundary = resolver.resolve_checked(rect, self.base_radii())?;

        let mut list = DrawList::new();
        let base_mask = record_base(&mut list, &p.base, &boundary, canvas);
        if let Some(shadow) = self.visible_shadow() {
            record_shadow(&mut list, resolver, shadow, &boundary, base_mask, canvas);
        }
        if let Some(stroke) = self.visible_stroke() {
            let optimize = resolver.should_optimize_stroke(stroke.width, p.optimize_stroke_corner, boundary.is_rounded());
            let band = resolver.stroke_band(&boundary, stroke.width, optimize);
            list.push_stroke(ZIndex::STROKE, band, stroke.color);
        }

        let mut pixmap = Pixmap::new(canvas);
        Rasterizer::new().render(&mut list, &mut pixmap);
        log::debug!("compiled effect {:016x} at {size}: {} layers on {canvas}", self.fingerprint, list.len());

        Ok(CompiledLayer {
            pixmap: Arc::new(pixmap),
            size,
            outsets,
            content_inset,
            boundary: boundary.translate(-origin),
        })
    }

    fn visible_shadow(&self) -> Option<ShadowSpec> {
        self.params.shadow.filter(ShadowSpec::is_visible)
    }

    fn visible_stroke(&self) -> Option<StrokeSpec> {
        self.params.stroke.filter(StrokeSpec::is_visible)
    }

    /// Configured radii, held inside the fixed corner art of a patch base.
    fn base_radii(&self) -> CornerRadii {
        let radii = self.params.radii.sanitized();
        match &self.params.base {
            Base::Patch(patch) if !radii.is_zero() => {
                let limited = radii.limited(patch.corner_limits()).sanitized();
                if limited != radii {
                    log::warn!(
                        "corner radii {:?} exceed the patch image's fixed corners; clamped to {:?}",
                        radii.to_pairs(),
                        limited.to_pairs()
                    );
                }
                limited
            }
            _ => radii,
        }
    }
}

/// Records the base layer. Patch bases return their coverage so the shadow
/// can be cast from the image's own alpha.
fn record_base(list: &mut DrawList, base: &Base, boundary: &RoundedRect, canvas: PixelSize) -> Option<Arc<Mask>> {
    match base {
        Base::Drawing { fill } => {
            if let Some(color) = fill.filter(|c| !c.is_transparent()) {
                list.push_fill(ZIndex::BASE, *boundary, color);
            }
            None
        }
        Base::Patch(patch) => {
            let r = boundary.rect();
            let target = PixelSize::new(r.width().round() as u32, r.height().round() as u32);
            let at = (r.min().x.round() as i32, r.min().y.round() as i32);
            let art = Arc::new(patch.render(target));
            let clip = boundary.is_rounded().then_some(*boundary);

            let placed = Mask::placed(canvas, &Mask::from_alpha(&art), at);
            let coverage = match &clip {
                Some(shape) => Mask::from_fn(canvas, |x, y| placed.get(x, y) * shape.pixel_coverage(x, y)),
                None => placed,
            };
            list.push_image(ZIndex::BASE, art, at, clip);
            Some(Arc::new(coverage))
        }
    }
}

fn record_shadow(
    list: &mut DrawList,
    resolver: &GeometryResolver,
    shadow: ShadowSpec,
    boundary: &RoundedRect,
    base_mask: Option<Arc<Mask>>,
    canvas: PixelSize,
) {
    let (silhouette, knockout) = match base_mask {
        None => {
            let moved = boundary.translate(Vec2::new(shadow.dx, shadow.dy));
            (
                Silhouette::Shape(resolver.offset(&moved, shadow.spread)),
                Silhouette::Shape(*boundary),
            )
        }
        Some(mask) => {
            let shift = (shadow.dx.round() as i32, shadow.dy.round() as i32);
            let cast = Mask::placed(canvas, &mask, shift).dilate(shadow.spread.round() as u32);
            (
                Silhouette::Mask { mask: Arc::new(cast), origin: (0, 0) },
                Silhouette::Mask { mask, origin: (0, 0) },
            )
        }
    };
    list.push_shadow(silhouette, shadow.blur, shadow.color, Some(knockout));
}

// ── CompiledLayer ─────────────────────────────────────────────────────────

/// A rendered effect for one view size.
///
/// The pixmap's top-left sits at `(-outsets.left, -outsets.top)` in view
/// coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledLayer {
    pixmap: Arc<Pixmap>,
    size: PixelSize,
    outsets: Insets,
    content_inset: Insets,
    boundary: RoundedRect,
}

impl CompiledLayer {
    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    #[inline]
    pub fn shared_pixmap(&self) -> Arc<Pixmap> {
        Arc::clone(&self.pixmap)
    }

    /// View size this layer was compiled for.
    #[inline]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    #[inline]
    pub fn outsets(&self) -> Insets {
        self.outsets
    }

    #[inline]
    pub fn content_inset(&self) -> Insets {
        self.content_inset
    }

    /// Resolved effect boundary in view coordinates.
    #[inline]
    pub fn boundary(&self) -> RoundedRect {
        self.boundary
    }

    /// Raster bounds in view coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            -self.outsets.left,
            -self.outsets.top,
            self.pixmap.width() as f32,
            self.pixmap.height() as f32,
        )
    }

    /// `true` when the raster bleeds past the view bounds.
    #[inline]
    pub fn is_out_of_bounds(&self) -> bool {
        !self.outsets.is_zero()
    }

    #[inline]
    pub fn pixel_hash(&self) -> u64 {
        self.pixmap.content_hash()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use veneer_engine::geometry::GeometryConfig;
    use veneer_engine::paint::Color;
    use veneer_engine::patch::{PatchImage, PatchImageSource};
    use veneer_engine::render::Pixel;

    use proptest::prelude::*;

    use crate::config::{ContentCap, EffectConfig};

    fn resolver() -> GeometryResolver {
        GeometryResolver::new(GeometryConfig::default())
    }

    fn red() -> Color {
        Color::from_argb(0xffff0000)
    }

    /// 8×8 content, 3px fixed corners, 2px stretch middle, embedded inset 2px.
    fn rounded_patch() -> PatchImage {
        let black = image::Rgba([0, 0, 0, 255]);
        let mut img = image::RgbaImage::from_pixel(10, 10, image::Rgba([0, 0, 0, 0]));
        for i in 4..6 {
            img.put_pixel(i, 0, black);
            img.put_pixel(0, i, black);
        }
        for i in 3..7 {
            img.put_pixel(i, 9, black);
            img.put_pixel(9, i, black);
        }
        for y in 1..9 {
            for x in 1..9 {
                img.put_pixel(x, y, image::Rgba([0, 128, 255, 255]));
            }
        }
        PatchImage::decode(&PatchImageSource::from_rgba(img)).unwrap()
    }

    // ── pipeline ──────────────────────────────────────────────────────────

    #[test]
    fn compile_is_deterministic() {
        let make = || {
            EffectConfig::with_drawing_base()
                .fill(Color::white())
                .unwrap()
                .corner_radius(12.0)
                .shadow(ShadowSpec::new(6.0, Color::black()).offset(2.0, 3.0))
                .stroke(StrokeSpec::new(3.0, red()))
                .compile_with(&resolver(), PixelSize::new(64, 40))
                .unwrap()
        };
        let (a, b) = (make(), make());
        assert_eq!(a.pixel_hash(), b.pixel_hash());
        assert_eq!(a.pixmap(), b.pixmap());
    }

    #[test]
    fn thick_stroke_keeps_radius_and_insets_content() {
        let layer = EffectConfig::with_drawing_base()
            .corner_radius(20.0)
            .stroke(StrokeSpec::new(10.0, red()))
            .compile_with(&resolver(), PixelSize::new(200, 100))
            .unwrap();
        let inset = layer.content_inset();
        for v in inset.to_array() {
            assert!(v >= 5.0);
        }
        assert_eq!(layer.boundary().radii(), CornerRadii::all(20.0));
        assert_eq!(layer.outsets(), Insets::all(5.0));
        assert_eq!(layer.pixmap().size(), PixelSize::new(210, 110));
        // Middle of the top edge lies inside the band, the view center does not.
        assert_eq!(layer.pixmap().get(105, 5), Some(Pixel::new(255, 0, 0, 255)));
        assert_eq!(layer.pixmap().get(105, 55), Some(Pixel::TRANSPARENT));
    }

    #[test]
    fn oversized_radius_is_clamped() {
        let layer = EffectConfig::with_drawing_base()
            .corner_radius(80.0)
            .fill(Color::white())
            .unwrap()
            .compile_with(&resolver(), PixelSize::new(100, 50))
            .unwrap();
        for c in layer.boundary().radii().corners() {
            assert!(c.x <= 25.0 && c.y <= 25.0);
        }
    }

    #[test]
    fn disabled_clamping_surfaces_invalid_geometry() {
        let strict = GeometryResolver::new(GeometryConfig::default().auto_clamp(false));
        let err = EffectConfig::with_drawing_base()
            .corner_radius(80.0)
            .compile_with(&strict, PixelSize::new(100, 50))
            .unwrap_err();
        assert!(matches!(err, EffectError::InvalidGeometry(InvalidGeometryError::RadiiOverflow { .. })));
    }

    #[test]
    fn runaway_effect_size_is_an_error() {
        let err = EffectConfig::with_drawing_base()
            .shadow(ShadowSpec::new(3.0e9, Color::black()))
            .compile_with(&resolver(), PixelSize::new(10, 10))
            .unwrap_err();
        assert!(matches!(err, EffectError::InvalidGeometry(InvalidGeometryError::CanvasTooLarge { .. })));

        let err = EffectConfig::with_drawing_base()
            .stroke(StrokeSpec::new(40_000.0, red()))
            .compile_with(&resolver(), PixelSize::new(10, 10))
            .unwrap_err();
        assert!(matches!(err, EffectError::InvalidGeometry(InvalidGeometryError::CanvasTooLarge { limit: MAX_PIXMAP_SIDE, .. })));
    }

    #[test]
    fn huge_blur_inside_padding_bounds_stays_in_the_view() {
        let layer = EffectConfig::with_drawing_base()
            .shadow(ShadowSpec::new(3.0e9, Color::black()))
            .padding_bounds()
            .compile_with(&resolver(), PixelSize::new(10, 10))
            .unwrap();
        assert_eq!(layer.pixmap().size(), PixelSize::new(10, 10));
    }

    #[test]
    fn empty_size_compiles_to_empty_layer() {
        let layer = EffectConfig::with_drawing_base()
            .shadow(ShadowSpec::new(4.0, Color::black()))
            .compile_with(&resolver(), PixelSize::new(0, 30))
            .unwrap();
        assert!(layer.pixmap().is_blank());
        assert!(!layer.is_out_of_bounds());
    }

    // ── shadow ────────────────────────────────────────────────────────────

    #[test]
    fn shadow_bleeds_outside_but_never_under_the_base() {
        let layer = EffectConfig::with_drawing_base()
            .shadow(ShadowSpec::new(6.0, Color::black()))
            .compile_with(&resolver(), PixelSize::new(40, 40))
            .unwrap();
        assert!(layer.is_out_of_bounds());
        assert_eq!(layer.outsets(), Insets::all(6.0));
        let px = layer.pixmap();
        assert!(px.get(4, 26).unwrap().a > 0);
        assert_eq!(px.get(26, 26), Some(Pixel::TRANSPARENT));
        assert_eq!(px.get(0, 0).map(|p| p.a), Some(0));
    }

    #[test]
    fn transparent_shadow_is_skipped() {
        let layer = EffectConfig::with_drawing_base()
            .shadow(ShadowSpec::new(6.0, Color::transparent()))
            .compile_with(&resolver(), PixelSize::new(20, 20))
            .unwrap();
        assert_eq!(layer.outsets(), Insets::zero());
        assert!(layer.pixmap().is_blank());
    }

    #[test]
    fn patch_shadow_follows_image_alpha() {
        let layer = EffectConfig::with_patch(rounded_patch())
            .shadow(ShadowSpec::new(3.0, Color::black()).offset(0.0, 2.0))
            .compile_with(&resolver(), PixelSize::new(16, 16))
            .unwrap();
        let px = layer.pixmap();
        let o = layer.outsets();
        assert_eq!(o, Insets::new(1.0, 3.0, 5.0, 3.0));
        assert_eq!(px.get(3 + 8, 1 + 8), Some(Pixel::new(0, 128, 255, 255)));
        assert!(px.get(3 + 8, 1 + 16 + 2).unwrap().a > 0);
    }

    // ── bounds ────────────────────────────────────────────────────────────

    #[test]
    fn padding_bounds_keep_effects_inside_the_view() {
        let layer = EffectConfig::with_drawing_base()
            .shadow(ShadowSpec::new(6.0, Color::black()))
            .stroke(StrokeSpec::new(2.0, red()))
            .padding_bounds()
            .compile_with(&resolver(), PixelSize::new(50, 30))
            .unwrap();
        assert!(!layer.is_out_of_bounds());
        assert_eq!(layer.pixmap().size(), PixelSize::new(50, 30));
        assert_eq!(layer.boundary().rect(), Rect::new(6.0, 6.0, 38.0, 18.0));
        assert_eq!(layer.content_inset(), Insets::all(7.0));
    }

    #[test]
    fn bounds_are_in_view_coordinates() {
        let layer = EffectConfig::with_drawing_base()
            .stroke(StrokeSpec::new(4.0, red()))
            .compile_with(&resolver(), PixelSize::new(10, 10))
            .unwrap();
        assert_eq!(layer.bounds(), Rect::new(-2.0, -2.0, 14.0, 14.0));
        assert_eq!(layer.boundary().rect(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    // ── content inset ─────────────────────────────────────────────────────

    #[test]
    fn content_inset_is_the_largest_source() {
        let patch = rounded_patch();
        let embedded = patch.content_inset();
        let d = EffectConfig::with_patch(patch)
            .stroke(StrokeSpec::new(2.0, red()))
            .content_cap_edges(Insets::new(0.0, 0.0, 9.0, 0.0))
            .build();
        let inset = d.content_inset();
        assert_eq!(inset.bottom, 9.0);
        assert_eq!(inset.top, embedded.top.max(1.0));
        assert!(inset.left >= embedded.left && inset.left >= 1.0);
    }

    #[test]
    fn zero_width_stroke_adds_no_inset() {
        let d = EffectConfig::with_drawing_base().stroke_color(red()).build();
        assert_eq!(d.content_inset(), Insets::zero());
    }

    #[test]
    fn transparent_stroke_still_pads_content() {
        let d = EffectConfig::with_drawing_base()
            .stroke(StrokeSpec::new(10.0, Color::transparent()))
            .build();
        assert_eq!(d.content_inset(), Insets::all(5.0));
        // Nothing is drawn, so nothing bleeds.
        assert_eq!(d.outsets(), Insets::zero());
        let layer = d.compile_with(&resolver(), PixelSize::new(20, 20)).unwrap();
        assert!(layer.pixmap().is_blank());
        assert_eq!(layer.content_inset(), Insets::all(5.0));
    }

    fn cap_strategy() -> impl Strategy<Value = Option<ContentCap>> {
        prop_oneof![
            Just(None),
            (0.0f32..30.0).prop_map(|v| Some(ContentCap::Uniform(v))),
            (0.0f32..30.0, 0.0f32..30.0, 0.0f32..30.0, 0.0f32..30.0)
                .prop_map(|(t, r, b, l)| Some(ContentCap::Edges(Insets::new(t, r, b, l)))),
        ]
    }

    proptest! {
        #[test]
        fn content_inset_covers_every_source(
            width in 0.0f32..40.0,
            opaque in any::<bool>(),
            cap in cap_strategy(),
            patch in any::<bool>(),
            padding in any::<bool>(),
            blur in 0.0f32..12.0,
        ) {
            let color = if opaque { red() } else { Color::transparent() };
            let mut config = if patch {
                EffectConfig::with_patch(rounded_patch())
            } else {
                EffectConfig::with_drawing_base()
            };
            config = config.stroke(StrokeSpec::new(width, color)).shadow(ShadowSpec::new(blur, Color::black()));
            config = match cap {
                Some(ContentCap::Uniform(v)) => config.content_cap(v),
                Some(ContentCap::Edges(e)) => config.content_cap_edges(e),
                None => config,
            };
            if padding {
                config = config.padding_bounds();
            }
            let embedded = if patch { rounded_patch().content_inset() } else { Insets::zero() };
            let cap = cap.map_or(Insets::zero(), ContentCap::insets);

            let inset = config.build().content_inset().to_array();
            for i in 0..4 {
                prop_assert!(inset[i] >= width / 2.0);
                prop_assert!(inset[i] >= cap.to_array()[i]);
                prop_assert!(inset[i] >= embedded.to_array()[i]);
            }
        }
    }

    // ── patch base ────────────────────────────────────────────────────────

    #[test]
    fn plain_patch_at_native_size_is_exact() {
        let patch = rounded_patch();
        let native = patch.pixmap().clone();
        let layer = EffectConfig::with_patch(patch)
            .compile_with(&resolver(), native.size())
            .unwrap();
        assert_eq!(layer.pixmap(), &native);
    }

    #[test]
    fn patch_radii_are_held_inside_fixed_corners() {
        let layer = EffectConfig::with_patch(rounded_patch())
            .corner_radius(10.0)
            .compile_with(&resolver(), PixelSize::new(30, 30))
            .unwrap();
        for c in layer.boundary().radii().corners() {
            assert!(c.x <= 4.0 && c.y <= 4.0);
        }
    }

    // ── drawable ──────────────────────────────────────────────────────────

    #[test]
    fn fingerprint_tracks_parameters() {
        let a = EffectConfig::with_drawing_base().corner_radius(4.0).build();
        let b = EffectConfig::with_drawing_base().corner_radius(4.0).build();
        let c = EffectConfig::with_drawing_base().corner_radius(5.0).build();
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn emphasis_without_effects_is_identity() {
        let d = EffectConfig::with_drawing_base().fill(Color::white()).unwrap().build();
        assert!(d.emphasized().ptr_eq(&d));
    }

    #[test]
    fn emphasis_widens_stroke() {
        let d = EffectConfig::with_drawing_base().stroke(StrokeSpec::new(2.0, red())).build();
        let e = d.emphasized();
        assert_eq!(e.params().stroke().map(|s| s.width), Some(3.0));
        assert_ne!(e.fingerprint(), d.fingerprint());
    }
}
