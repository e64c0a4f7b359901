use std::hash::{Hash, Hasher};

use bytemuck::{Pod, Zeroable};
use image::RgbaImage;

use crate::coords::PixelSize;
use crate::geometry::RoundedRect;
use crate::paint::Color;

/// Largest width or height a compiled effect raster may take.
pub const MAX_PIXMAP_SIDE: u32 = 16_384;

// ── Pixel ─────────────────────────────────────────────────────────────────

/// Premultiplied RGBA8 pixel, laid out as four consecutive bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

#[inline]
fn quantize(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Pixel {
    pub const TRANSPARENT: Pixel = Pixel { r: 0, g: 0, b: 0, a: 0 };

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub fn from_color(c: Color) -> Self {
        let c = c.clamped();
        Self { r: quantize(c.r), g: quantize(c.g), b: quantize(c.b), a: quantize(c.a) }
    }

    #[inline]
    pub fn to_color(self) -> Color {
        Color::from_premul(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            self.a as f32 / 255.0,
        )
    }

    /// Premultiplies straight-alpha bytes.
    #[inline]
    pub fn from_straight(rgba: [u8; 4]) -> Self {
        let a = rgba[3] as u16;
        let mul = |c: u8| ((c as u16 * a + 127) / 255) as u8;
        Self { r: mul(rgba[0]), g: mul(rgba[1]), b: mul(rgba[2]), a: rgba[3] }
    }

    /// Straight-alpha bytes. Fully transparent pixels come back as zero.
    #[inline]
    pub fn to_straight(self) -> [u8; 4] {
        if self.a == 0 {
            return [0, 0, 0, 0];
        }
        let a = self.a as u16;
        let div = |c: u8| ((c as u16 * 255 + a / 2) / a).min(255) as u8;
        [div(self.r), div(self.g), div(self.b), self.a]
    }

    /// Source-over of `src` scaled by `coverage`.
    #[inline]
    #[must_use]
    pub fn over(self, src: Color, coverage: f32) -> Pixel {
        let cov = coverage.clamp(0.0, 1.0);
        if cov <= 0.0 || src.a <= 0.0 {
            return self;
        }
        let dst = self.to_color();
        let inv = 1.0 - src.a * cov;
        Pixel::from_color(Color::from_premul(
            src.r * cov + dst.r * inv,
            src.g * cov + dst.g * inv,
            src.b * cov + dst.b * inv,
            src.a * cov + dst.a * inv,
        ))
    }
}

// ── Pixmap ────────────────────────────────────────────────────────────────

/// Owned premultiplied RGBA8 raster, row-major, top-left origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pixmap {
    size: PixelSize,
    pixels: Vec<Pixel>,
}

impl Pixmap {
    /// Fully transparent pixmap.
    pub fn new(size: PixelSize) -> Self {
        Self { size, pixels: vec![Pixel::TRANSPARENT; size.area()] }
    }

    pub fn from_fn(size: PixelSize, mut f: impl FnMut(u32, u32) -> Pixel) -> Self {
        let mut pixels = Vec::with_capacity(size.area());
        for y in 0..size.height {
            for x in 0..size.width {
                pixels.push(f(x, y));
            }
        }
        Self { size, pixels }
    }

    /// Premultiplies a straight-alpha image.
    pub fn from_rgba_image(img: &RgbaImage) -> Self {
        let size = PixelSize::new(img.width(), img.height());
        let pixels = img.pixels().map(|p| Pixel::from_straight(p.0)).collect();
        Self { size, pixels }
    }

    /// Straight-alpha copy, ready for encoding.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let bytes: Vec<u8> = self.pixels.iter().flat_map(|p| p.to_straight()).collect();
        // Length matches width * height * 4 by construction.
        RgbaImage::from_raw(self.size.width, self.size.height, bytes).unwrap_or_default()
    }

    #[inline]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.size.height
    }

    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Raw premultiplied bytes (`r, g, b, a` per pixel).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.size.width as usize + x as usize
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x < self.size.width && y < self.size.height {
            Some(self.pixels[self.index(x, y)])
        } else {
            None
        }
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, p: Pixel) {
        if x < self.size.width && y < self.size.height {
            let i = self.index(x, y);
            self.pixels[i] = p;
        }
    }

    /// Composites `color` over pixel `(x, y)` with the given coverage.
    #[inline]
    pub fn blend(&mut self, x: u32, y: u32, color: Color, coverage: f32) {
        if x < self.size.width && y < self.size.height {
            let i = self.index(x, y);
            self.pixels[i] = self.pixels[i].over(color, coverage);
        }
    }

    /// Composites `src` with its top-left at `origin`, optionally clipped.
    pub fn draw_pixmap(&mut self, src: &Pixmap, origin: (i32, i32), clip: Option<&RoundedRect>) {
        for sy in 0..src.height() {
            let ty = origin.1 + sy as i32;
            if ty < 0 || ty >= self.size.height as i32 {
                continue;
            }
            for sx in 0..src.width() {
                let tx = origin.0 + sx as i32;
                if tx < 0 || tx >= self.size.width as i32 {
                    continue;
                }
                let p = src.pixels[src.index(sx, sy)];
                if p.a == 0 {
                    continue;
                }
                let coverage = match clip {
                    Some(shape) => shape.pixel_coverage(tx as u32, ty as u32),
                    None => 1.0,
                };
                if coverage >= 1.0 && p.a == 255 {
                    self.set(tx as u32, ty as u32, p);
                } else {
                    self.blend(tx as u32, ty as u32, p.to_color(), coverage);
                }
            }
        }
    }

    /// `true` when every pixel is fully transparent.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|p| p.a == 0)
    }

    /// Hash of size and pixel bytes; equal rasters hash equal.
    pub fn content_hash(&self) -> u64 {
        let mut h = std::collections::hash_map::DefaultHasher::new();
        self.size.hash(&mut h);
        self.as_bytes().hash(&mut h);
        h.finish()
    }
}
