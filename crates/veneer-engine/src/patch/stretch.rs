use std::fmt;
use std::hash::{Hash, Hasher};

use crate::coords::{CornerRadii, Insets, PixelSize, Vec2};
use crate::render::{Pixel, Pixmap};

/// Image axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        })
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Copied pixel-exact.
    Fixed,
    /// Resampled to absorb extra length.
    Stretch,
}

/// Half-open span `[start, end)` of content pixels along one axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    pub start: u32,
    pub end: u32,
    pub kind: SegmentKind,
}

impl Segment {
    #[inline]
    pub const fn new(start: u32, end: u32, kind: SegmentKind) -> Self {
        Self { start, end, kind }
    }

    #[inline]
    pub const fn len(&self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    #[inline]
    pub fn is_stretch(&self) -> bool {
        self.kind == SegmentKind::Stretch
    }
}

/// A decoded patch image: content pixels (border stripped, premultiplied)
/// plus the per-axis segment layout and embedded content inset.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchImage {
    pixmap: Pixmap,
    horizontal: Vec<Segment>,
    vertical: Vec<Segment>,
    content_inset: Insets,
    fingerprint: u64,
}

impl PatchImage {
    pub(super) fn from_parts(
        pixmap: Pixmap,
        horizontal: Vec<Segment>,
        vertical: Vec<Segment>,
        content_inset: Insets,
    ) -> Self {
        let mut h = std::collections::hash_map::DefaultHasher::new();
        pixmap.content_hash().hash(&mut h);
        horizontal.hash(&mut h);
        vertical.hash(&mut h);
        content_inset.to_array().map(f32::to_bits).hash(&mut h);
        let fingerprint = h.finish();
        Self { pixmap, horizontal, vertical, content_inset, fingerprint }
    }

    /// Decodes a bordered source image. See [`decode`](super::decode).
    #[inline]
    pub fn decode(source: &super::PatchImageSource) -> Result<Self, super::DecodeError> {
        super::decode(source)
    }

    /// Native content size (border excluded).
    #[inline]
    pub fn size(&self) -> PixelSize {
        self.pixmap.size()
    }

    /// Native content pixels.
    #[inline]
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    #[inline]
    pub fn segments(&self, axis: Axis) -> &[Segment] {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    pub fn fixed_regions(&self, axis: Axis) -> impl Iterator<Item = Segment> + '_ {
        self.segments(axis).iter().copied().filter(|s| !s.is_stretch())
    }

    pub fn stretch_regions(&self, axis: Axis) -> impl Iterator<Item = Segment> + '_ {
        self.segments(axis).iter().copied().filter(Segment::is_stretch)
    }

    /// Content inset embedded in the image, in native pixels.
    #[inline]
    pub fn content_inset(&self) -> Insets {
        self.content_inset
    }

    /// Smallest size that renders every fixed segment unscaled.
    pub fn min_size(&self) -> PixelSize {
        let sum = |axis| -> u32 { self.fixed_regions(axis).map(|s| s.len()).sum() };
        PixelSize::new(sum(Axis::Horizontal), sum(Axis::Vertical))
    }

    /// Largest radius each corner can take while staying inside the fixed
    /// corner art: the leading and trailing fixed segment on each axis.
    pub fn corner_limits(&self) -> CornerRadii {
        let edge = |segs: &[Segment], first: bool| {
            let s = if first { segs.first() } else { segs.last() };
            s.filter(|s| !s.is_stretch()).map_or(0.0, |s| s.len() as f32)
        };
        let left = edge(&self.horizontal, true);
        let right = edge(&self.horizontal, false);
        let top = edge(&self.vertical, true);
        let bottom = edge(&self.vertical, false);
        CornerRadii::new(
            Vec2::new(left, top),
            Vec2::new(right, top),
            Vec2::new(right, bottom),
            Vec2::new(left, bottom),
        )
    }

    /// Stable hash of pixels and layout.
    #[inline]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Stretches the image to `size`.
    ///
    /// Extra length goes to stretch segments in proportion to their native
    /// length (the last one takes the rounding remainder). Below the fixed
    /// total, fixed segments shrink proportionally and stretch segments vanish.
    pub fn render(&self, size: PixelSize) -> Pixmap {
        if size.is_empty() {
            return Pixmap::new(size);
        }
        if size == self.size() {
            return self.pixmap.clone();
        }
        let xs = samples(&self.horizontal, size.width);
        let ys = samples(&self.vertical, size.height);
        Pixmap::from_fn(size, |x, y| self.sample(xs[x as usize], ys[y as usize]))
    }

    fn sample(&self, sx: Sample, sy: Sample) -> Pixel {
        let px = |x, y| self.pixmap.get(x, y).unwrap_or(Pixel::TRANSPARENT);
        if sx.t == 0.0 && sy.t == 0.0 {
            return px(sx.i0, sy.i0);
        }
        let p00 = px(sx.i0, sy.i0);
        let p10 = px(sx.i1, sy.i0);
        let p01 = px(sx.i0, sy.i1);
        let p11 = px(sx.i1, sy.i1);
        let mix = |a: u8, b: u8, c: u8, d: u8| {
            let top = a as f32 + (b as f32 - a as f32) * sx.t;
            let bottom = c as f32 + (d as f32 - c as f32) * sx.t;
            (top + (bottom - top) * sy.t).round().clamp(0.0, 255.0) as u8
        };
        Pixel::new(
            mix(p00.r, p10.r, p01.r, p11.r),
            mix(p00.g, p10.g, p01.g, p11.g),
            mix(p00.b, p10.b, p01.b, p11.b),
            mix(p00.a, p10.a, p01.a, p11.a),
        )
    }
}

// ── stretch plan ──────────────────────────────────────────────────────────

/// Source position for one destination pixel: `i0` blended toward `i1` by `t`.
#[derive(Debug, Copy, Clone, PartialEq)]
struct Sample {
    i0: u32,
    i1: u32,
    t: f32,
}

impl Sample {
    #[inline]
    const fn exact(i: u32) -> Self {
        Self { i0: i, i1: i, t: 0.0 }
    }
}

/// Destination length of every segment for a `target` length.
fn allocate(segments: &[Segment], target: u32) -> Vec<u32> {
    let total = |kind: SegmentKind| -> u64 {
        segments.iter().filter(|s| s.kind == kind).map(|s| s.len() as u64).sum()
    };
    let fixed = total(SegmentKind::Fixed);
    let stretch = total(SegmentKind::Stretch);
    let target = target as u64;

    // Growing hands the extra to stretch segments; shrinking below the fixed
    // total scales fixed segments instead.
    let (grow_kind, budget, pool) = if target >= fixed {
        (SegmentKind::Stretch, target - fixed, stretch)
    } else {
        (SegmentKind::Fixed, target, fixed)
    };
    let last = segments.iter().rposition(|s| s.kind == grow_kind);

    let mut given = 0u64;
    segments
        .iter()
        .enumerate()
        .map(|(i, s)| {
            if s.kind != grow_kind {
                return if grow_kind == SegmentKind::Stretch { s.len() } else { 0 };
            }
            let share = if Some(i) == last {
                budget - given
            } else {
                budget * s.len() as u64 / pool.max(1)
            };
            given += share;
            share as u32
        })
        .collect()
}

fn samples(segments: &[Segment], target: u32) -> Vec<Sample> {
    let mut out = Vec::with_capacity(target as usize);
    for (seg, dlen) in segments.iter().zip(allocate(segments, target)) {
        let len = seg.len();
        for d in 0..dlen {
            let s = if dlen == len {
                Sample::exact(seg.start + d)
            } else {
                match seg.kind {
                    SegmentKind::Fixed => {
                        let i = (d as u64 * 2 + 1) * len as u64 / (2 * dlen as u64);
                        Sample::exact((seg.start + i as u32).min(seg.end - 1))
                    }
                    SegmentKind::Stretch => {
                        let last = (seg.end - 1) as f32;
                        let pos = (seg.start as f32 + (d as f32 + 0.5) * len as f32 / dlen as f32 - 0.5)
                            .clamp(seg.start as f32, last);
                        let i0 = pos.floor();
                        let i1 = (i0 + 1.0).min(last);
                        Sample { i0: i0 as u32, i1: i1 as u32, t: pos - i0 }
                    }
                }
            };
            out.push(s);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segs(spec: &[(u32, u32, bool)]) -> Vec<Segment> {
        spec.iter()
            .map(|&(s, e, stretch)| {
                Segment::new(s, e, if stretch { SegmentKind::Stretch } else { SegmentKind::Fixed })
            })
            .collect()
    }

    // ── allocate ──────────────────────────────────────────────────────────

    #[test]
    fn extra_length_goes_to_stretch_segments_proportionally() {
        let s = segs(&[(0, 2, false), (2, 3, true), (3, 6, true), (6, 8, false)]);
        // fixed 4, stretch 4, target 16: extra 12 split 1:3.
        assert_eq!(allocate(&s, 16), vec![2, 3, 9, 2]);
    }

    #[test]
    fn remainder_goes_to_last_stretch_segment() {
        let s = segs(&[(0, 1, true), (1, 2, false), (2, 3, true)]);
        assert_eq!(allocate(&s, 6), vec![2, 1, 3]);
    }

    #[test]
    fn shrinking_below_fixed_total_scales_fixed_segments() {
        let s = segs(&[(0, 4, false), (4, 5, true), (5, 9, false)]);
        let a = allocate(&s, 4);
        assert_eq!(a, vec![2, 0, 2]);
        assert_eq!(a.iter().sum::<u32>(), 4);
    }

    // ── samples ───────────────────────────────────────────────────────────

    #[test]
    fn native_length_samples_are_exact() {
        let s = segs(&[(0, 2, false), (2, 5, true), (5, 7, false)]);
        let out = samples(&s, 7);
        assert!(out.iter().enumerate().all(|(i, smp)| *smp == Sample::exact(i as u32)));
    }

    #[test]
    fn stretch_samples_stay_inside_their_segment() {
        let s = segs(&[(0, 2, false), (2, 4, true), (4, 6, false)]);
        for smp in &samples(&s, 40)[2..38] {
            assert!((2..4).contains(&smp.i0) && (2..4).contains(&smp.i1), "{smp:?}");
        }
    }
}
