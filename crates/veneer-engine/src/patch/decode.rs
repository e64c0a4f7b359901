use image::RgbaImage;

use crate::coords::{Insets, PixelSize};
use crate::render::{Pixel, Pixmap};

use super::{Axis, DecodeError, PatchImage, PatchImageSource, Segment, SegmentKind};

const MARKED: [u8; 4] = [0, 0, 0, 255];
const OPTICAL_BOUNDS: [u8; 4] = [255, 0, 0, 255];

/// Reads one border line. `coords` walks the line in content order.
fn read_markers(
    img: &RgbaImage,
    coords: impl Iterator<Item = (u32, u32)>,
    allow_optical: bool,
) -> Result<Vec<bool>, DecodeError> {
    coords
        .map(|(x, y)| {
            let pixel = img.get_pixel(x, y).0;
            match pixel {
                MARKED => Ok(true),
                [_, _, _, 0] => Ok(false),
                OPTICAL_BOUNDS if allow_optical => Ok(false),
                _ => Err(DecodeError::InvalidMarker { x, y, pixel }),
            }
        })
        .collect()
}

/// Contiguous marked runs as half-open `(start, end)` spans.
fn runs(marks: &[bool]) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    let mut start = None;
    for (i, &m) in marks.iter().enumerate() {
        match (m, start) {
            (true, None) => start = Some(i as u32),
            (false, Some(s)) => {
                out.push((s, i as u32));
                start = None;
            }
            _ => {}
        }
    }
    if let Some(s) = start {
        out.push((s, marks.len() as u32));
    }
    out
}

/// Splits `[0, len)` into alternating fixed and stretch segments.
fn segments(stretch: &[(u32, u32)], len: u32) -> Vec<Segment> {
    let mut out = Vec::with_capacity(stretch.len() * 2 + 1);
    let mut cursor = 0;
    for &(s, e) in stretch {
        if s > cursor {
            out.push(Segment::new(cursor, s, SegmentKind::Fixed));
        }
        out.push(Segment::new(s, e, SegmentKind::Stretch));
        cursor = e;
    }
    if cursor < len {
        out.push(Segment::new(cursor, len, SegmentKind::Fixed));
    }
    out
}

/// Leading and trailing content inset along one axis.
///
/// Without content markers the stretch area doubles as the content area.
fn content_inset(
    marks: &[bool],
    stretch: &[(u32, u32)],
    len: u32,
    axis: Axis,
) -> Result<(f32, f32), DecodeError> {
    let spans = runs(marks);
    let (start, end) = match spans.as_slice() {
        [] => {
            let first = stretch.first().map_or(0, |s| s.0);
            let last = stretch.last().map_or(len, |s| s.1);
            (first, last)
        }
        [only] => *only,
        _ => return Err(DecodeError::DisjointContentMarkers { axis }),
    };
    Ok((start as f32, (len - end) as f32))
}

/// Decodes a bordered patch image.
///
/// Fails when the image is smaller than 3×3, a border pixel is neither a
/// marker nor transparent, either axis lacks stretch markers, or a content
/// line is split.
pub fn decode(source: &PatchImageSource) -> Result<PatchImage, DecodeError> {
    let img = source.image();
    let (w, h) = img.dimensions();
    if w < 3 || h < 3 {
        return Err(DecodeError::TooSmall { width: w, height: h });
    }
    let (cw, ch) = (w - 2, h - 2);

    let top = read_markers(img, (1..w - 1).map(|x| (x, 0)), false)?;
    let left = read_markers(img, (1..h - 1).map(|y| (0, y)), false)?;
    let bottom = read_markers(img, (1..w - 1).map(|x| (x, h - 1)), true)?;
    let right = read_markers(img, (1..h - 1).map(|y| (w - 1, y)), true)?;

    let h_stretch = runs(&top);
    if h_stretch.is_empty() {
        return Err(DecodeError::MissingStretchMarkers { axis: Axis::Horizontal });
    }
    let v_stretch = runs(&left);
    if v_stretch.is_empty() {
        return Err(DecodeError::MissingStretchMarkers { axis: Axis::Vertical });
    }

    let (inset_left, inset_right) = content_inset(&bottom, &h_stretch, cw, Axis::Horizontal)?;
    let (inset_top, inset_bottom) = content_inset(&right, &v_stretch, ch, Axis::Vertical)?;

    let pixmap = Pixmap::from_fn(PixelSize::new(cw, ch), |x, y| {
        Pixel::from_straight(img.get_pixel(x + 1, y + 1).0)
    });

    log::debug!(
        "decoded {}x{} patch: {} horizontal / {} vertical stretch spans",
        cw, ch, h_stretch.len(), v_stretch.len()
    );

    Ok(PatchImage::from_parts(
        pixmap,
        segments(&h_stretch, cw),
        segments(&v_stretch, ch),
        Insets::new(inset_top, inset_right, inset_bottom, inset_left),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use image::{ImageFormat, Rgba};
    use proptest::prelude::*;

    use crate::coords::CornerRadii;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    /// Bordered image of `cw × ch` content pixels colored by position.
    fn bordered(cw: u32, ch: u32) -> RgbaImage {
        RgbaImage::from_fn(cw + 2, ch + 2, |x, y| {
            if x == 0 || y == 0 || x == cw + 1 || y == ch + 1 {
                Rgba([0, 0, 0, 0])
            } else {
                Rgba([(x * 20) as u8, (y * 20) as u8, 128, 255])
            }
        })
    }

    /// Marks content span `[s, e)` on the top row and left column.
    fn with_stretch(mut img: RgbaImage, h: (u32, u32), v: (u32, u32)) -> RgbaImage {
        for x in h.0..h.1 {
            img.put_pixel(x + 1, 0, BLACK);
        }
        for y in v.0..v.1 {
            img.put_pixel(0, y + 1, BLACK);
        }
        img
    }

    fn decode_img(img: RgbaImage) -> Result<PatchImage, DecodeError> {
        decode(&PatchImageSource::from_rgba(img))
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn single_stretch_span_gives_three_segments() {
        let p = decode_img(with_stretch(bordered(5, 5), (2, 3), (1, 4))).unwrap();
        assert_eq!(
            p.segments(Axis::Horizontal),
            &[
                Segment::new(0, 2, SegmentKind::Fixed),
                Segment::new(2, 3, SegmentKind::Stretch),
                Segment::new(3, 5, SegmentKind::Fixed),
            ]
        );
        assert_eq!(p.stretch_regions(Axis::Vertical).collect::<Vec<_>>(), vec![Segment::new(1, 4, SegmentKind::Stretch)]);
        assert_eq!(p.fixed_regions(Axis::Vertical).count(), 2);
        assert_eq!(p.size(), PixelSize::new(5, 5));
        assert_eq!(p.min_size(), PixelSize::new(4, 2));
    }

    #[test]
    fn stretch_at_edge_has_no_leading_fixed_segment() {
        let p = decode_img(with_stretch(bordered(4, 4), (0, 2), (0, 4))).unwrap();
        assert_eq!(p.segments(Axis::Horizontal)[0].kind, SegmentKind::Stretch);
        assert_eq!(p.segments(Axis::Vertical).len(), 1);
        assert_eq!(p.corner_limits(), CornerRadii::from_pairs([0.0, 0.0, 2.0, 0.0, 2.0, 0.0, 0.0, 0.0]));
    }

    #[test]
    fn content_inset_defaults_to_stretch_area() {
        let p = decode_img(with_stretch(bordered(8, 6), (3, 5), (1, 4))).unwrap();
        assert_eq!(p.content_inset(), Insets::new(1.0, 3.0, 2.0, 3.0));
    }

    #[test]
    fn explicit_content_markers_win() {
        let mut img = with_stretch(bordered(8, 6), (3, 5), (1, 4));
        for x in 1..7 {
            img.put_pixel(x + 1, 7, BLACK);
        }
        for y in 2..4 {
            img.put_pixel(9, y + 1, BLACK);
        }
        let p = decode_img(img).unwrap();
        assert_eq!(p.content_inset(), Insets::new(2.0, 1.0, 2.0, 1.0));
    }

    #[test]
    fn optical_bounds_markers_are_ignored() {
        let mut img = with_stretch(bordered(6, 6), (2, 4), (2, 4));
        img.put_pixel(1, 7, RED);
        img.put_pixel(7, 1, RED);
        assert!(decode_img(img).is_ok());
    }

    // ── errors ────────────────────────────────────────────────────────────

    #[test]
    fn missing_stretch_markers_fail() {
        let img = bordered(4, 4);
        assert_eq!(
            decode_img(img).unwrap_err(),
            DecodeError::MissingStretchMarkers { axis: Axis::Horizontal }
        );
        let mut only_h = bordered(4, 4);
        only_h.put_pixel(2, 0, BLACK);
        assert_eq!(
            decode_img(only_h).unwrap_err(),
            DecodeError::MissingStretchMarkers { axis: Axis::Vertical }
        );
    }

    #[test]
    fn gray_marker_is_rejected_with_position() {
        let mut img = with_stretch(bordered(4, 4), (1, 2), (1, 2));
        img.put_pixel(3, 0, Rgba([128, 128, 128, 255]));
        assert_eq!(
            decode_img(img).unwrap_err(),
            DecodeError::InvalidMarker { x: 3, y: 0, pixel: [128, 128, 128, 255] }
        );
    }

    #[test]
    fn red_on_stretch_line_is_rejected() {
        let mut img = with_stretch(bordered(4, 4), (1, 2), (1, 2));
        img.put_pixel(0, 4, RED);
        assert!(matches!(decode_img(img), Err(DecodeError::InvalidMarker { x: 0, y: 4, .. })));
    }

    #[test]
    fn split_content_markers_fail() {
        let mut img = with_stretch(bordered(6, 4), (1, 2), (1, 2));
        img.put_pixel(2, 5, BLACK);
        img.put_pixel(5, 5, BLACK);
        assert_eq!(
            decode_img(img).unwrap_err(),
            DecodeError::DisjointContentMarkers { axis: Axis::Horizontal }
        );
    }

    #[test]
    fn tiny_images_are_rejected() {
        let img = RgbaImage::new(2, 5);
        assert_eq!(decode_img(img).unwrap_err(), DecodeError::TooSmall { width: 2, height: 5 });
    }

    #[test]
    fn garbage_bytes_are_an_image_error() {
        assert!(matches!(PatchImageSource::from_png_bytes(b"not a png"), Err(DecodeError::Image(_))));
    }

    // ── rendering ─────────────────────────────────────────────────────────

    #[test]
    fn native_size_render_is_byte_exact() {
        let img = with_stretch(bordered(7, 5), (3, 4), (2, 3));
        let p = decode_img(img.clone()).unwrap();
        let expected = Pixmap::from_fn(PixelSize::new(7, 5), |x, y| Pixel::from_straight(img.get_pixel(x + 1, y + 1).0));
        assert_eq!(p.render(PixelSize::new(7, 5)).as_bytes(), expected.as_bytes());
    }

    #[test]
    fn png_source_decodes_like_raw_source() {
        let img = with_stretch(bordered(6, 6), (2, 4), (2, 4));
        let mut bytes = Vec::new();
        img.write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
        let from_png = decode(&PatchImageSource::from_png_bytes(&bytes).unwrap()).unwrap();
        assert_eq!(from_png, decode_img(img).unwrap());
    }

    #[test]
    fn fixed_corners_survive_stretching() {
        let p = decode_img(with_stretch(bordered(7, 7), (3, 4), (3, 4))).unwrap();
        let out = p.render(PixelSize::new(30, 20));
        let src = p.pixmap();
        for (dx, dy, sx, sy) in [(0, 0, 0, 0), (2, 2, 2, 2), (29, 19, 6, 6), (27, 0, 4, 0), (0, 17, 0, 4)] {
            assert_eq!(out.get(dx, dy), src.get(sx, sy), "dst {dx},{dy}");
        }
    }

    proptest! {
        #[test]
        fn any_target_renders_at_exact_size(w in 0u32..60, h in 0u32..60) {
            let p = decode_img(with_stretch(bordered(6, 5), (2, 4), (1, 3))).unwrap();
            let out = p.render(PixelSize::new(w, h));
            prop_assert_eq!(out.size(), PixelSize::new(w, h));
        }

        #[test]
        fn top_left_fixed_corner_is_exact_when_growing(w in 6u32..80, h in 5u32..80) {
            let p = decode_img(with_stretch(bordered(6, 5), (2, 4), (1, 3))).unwrap();
            let out = p.render(PixelSize::new(w, h));
            for y in 0..1 {
                for x in 0..2 {
                    prop_assert_eq!(out.get(x, y), p.pixmap().get(x, y));
                }
            }
            prop_assert_eq!(out.get(w - 1, h - 1), p.pixmap().get(5, 4));
        }
    }
}
