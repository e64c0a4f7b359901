use crate::coords::PixelSize;
use crate::geometry::RoundedRect;

use super::Pixmap;

/// Single-channel coverage raster in `[0, 1]`.
///
/// Pixels outside the mask read as zero, which is also the boundary
/// condition for [`blur`](Self::blur) and [`dilate`](Self::dilate).
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    size: PixelSize,
    data: Vec<f32>,
}

impl Mask {
    pub fn new(size: PixelSize) -> Self {
        Self { size, data: vec![0.0; size.area()] }
    }

    pub fn from_fn(size: PixelSize, mut f: impl FnMut(u32, u32) -> f32) -> Self {
        let mut data = Vec::with_capacity(size.area());
        for y in 0..size.height {
            for x in 0..size.width {
                data.push(f(x, y).clamp(0.0, 1.0));
            }
        }
        Self { size, data }
    }

    /// Anti-aliased coverage of `shape`.
    pub fn from_shape(size: PixelSize, shape: &RoundedRect) -> Self {
        if shape.is_empty() {
            return Self::new(size);
        }
        Self::from_fn(size, |x, y| shape.pixel_coverage(x, y))
    }

    /// Alpha channel of a pixmap.
    pub fn from_alpha(pixmap: &Pixmap) -> Self {
        Self {
            size: pixmap.size(),
            data: pixmap.pixels().iter().map(|p| p.a as f32 / 255.0).collect(),
        }
    }

    /// Copies `src` onto a blank mask of `size` with its top-left at `origin`.
    pub fn placed(size: PixelSize, src: &Mask, origin: (i32, i32)) -> Self {
        Self::from_fn(size, |x, y| src.get_signed(x as i32 - origin.0, y as i32 - origin.1))
    }

    #[inline]
    pub fn size(&self) -> PixelSize {
        self.size
    }

    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        self.get_signed(x as i32, y as i32)
    }

    #[inline]
    fn get_signed(&self, x: i32, y: i32) -> f32 {
        if x < 0 || y < 0 || x >= self.size.width as i32 || y >= self.size.height as i32 {
            0.0
        } else {
            self.data[y as usize * self.size.width as usize + x as usize]
        }
    }

    /// Grows covered areas by `radius` pixels (square structuring element).
    #[must_use]
    pub fn dilate(&self, radius: u32) -> Mask {
        if radius == 0 || self.size.is_empty() {
            return self.clone();
        }
        let (w, h) = (self.size.width as usize, self.size.height as usize);
        let r = radius as usize;
        let mut tmp = vec![0.0f32; self.data.len()];
        for y in 0..h {
            let row = &self.data[y * w..(y + 1) * w];
            for x in 0..w {
                let lo = x.saturating_sub(r);
                let hi = (x + r + 1).min(w);
                tmp[y * w + x] = row[lo..hi].iter().copied().fold(0.0, f32::max);
            }
        }
        let mut out = vec![0.0f32; self.data.len()];
        for x in 0..w {
            for y in 0..h {
                let lo = y.saturating_sub(r);
                let hi = (y + r + 1).min(h);
                out[y * w + x] = (lo..hi).map(|yy| tmp[yy * w + x]).fold(0.0, f32::max);
            }
        }
        Mask { size: self.size, data: out }
    }

    /// Approximates a Gaussian blur whose visible reach is `radius` pixels
    /// with three box passes per axis.
    #[must_use]
    pub fn blur(&self, radius: f32) -> Mask {
        if radius.is_nan() || radius <= 0.0 || self.size.is_empty() {
            return self.clone();
        }
        let box_r = (radius / 3.0).ceil().max(1.0) as usize;
        let (w, h) = (self.size.width as usize, self.size.height as usize);
        let mut a = self.data.clone();
        let mut b = vec![0.0f32; a.len()];
        for _ in 0..3 {
            box_pass(&a, &mut b, w, h, box_r, Axis::X);
            box_pass(&b, &mut a, w, h, box_r, Axis::Y);
        }
        Mask { size: self.size, data: a }
    }

    /// Removes coverage where `other` is covered: `self *= 1 - other`.
    pub fn knock_out(&mut self, other: &Mask) {
        for y in 0..self.size.height {
            for x in 0..self.size.width {
                let i = y as usize * self.size.width as usize + x as usize;
                self.data[i] *= 1.0 - other.get(x, y);
            }
        }
    }

    /// `true` when nothing is covered.
    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&v| v <= 0.0)
    }
}

#[derive(Copy, Clone)]
enum Axis {
    X,
    Y,
}

/// One box-filter pass of half-width `r`; samples outside the raster are zero.
fn box_pass(src: &[f32], dst: &mut [f32], w: usize, h: usize, r: usize, axis: Axis) {
    let norm = 1.0 / (2.0 * r as f32 + 1.0);
    let (lines, len) = match axis {
        Axis::X => (h, w),
        Axis::Y => (w, h),
    };
    let at = |line: usize, i: usize| match axis {
        Axis::X => line * w + i,
        Axis::Y => i * w + line,
    };

    let mut prefix = vec![0.0f32; len + 1];
    for line in 0..lines {
        for i in 0..len {
            prefix[i + 1] = prefix[i] + src[at(line, i)];
        }
        for i in 0..len {
            let lo = i.saturating_sub(r);
            let hi = i.saturating_add(r).saturating_add(1).min(len);
            dst[at(line, i)] = ((prefix[hi] - prefix[lo]) * norm).clamp(0.0, 1.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot(size: u32, x: u32, y: u32) -> Mask {
        Mask::from_fn(PixelSize::new(size, size), |px, py| if px == x && py == y { 1.0 } else { 0.0 })
    }

    #[test]
    fn dilate_grows_by_radius() {
        let m = dot(9, 4, 4).dilate(2);
        assert_eq!(m.get(2, 2), 1.0);
        assert_eq!(m.get(6, 6), 1.0);
        assert_eq!(m.get(1, 4), 0.0);
    }

    #[test]
    fn blur_spreads_and_stays_bounded() {
        let m = Mask::from_fn(PixelSize::new(40, 40), |x, y| {
            if (15..25).contains(&x) && (15..25).contains(&y) { 1.0 } else { 0.0 }
        });
        let b = m.blur(6.0);
        assert!(b.get(12, 20) > 0.0);
        assert!(b.get(20, 20) > 0.5);
        assert_eq!(b.get(0, 0), 0.0);
        assert!(b.values().iter().all(|v| (0.0..=1.0).contains(v)));
    }

    #[test]
    fn zero_blur_is_identity() {
        let m = dot(5, 2, 2);
        assert_eq!(m.blur(0.0), m);
    }

    #[test]
    fn knock_out_removes_covered_area() {
        let mut m = Mask::from_fn(PixelSize::new(4, 1), |_, _| 1.0);
        let k = Mask::from_fn(PixelSize::new(4, 1), |x, _| if x < 2 { 1.0 } else { 0.25 });
        m.knock_out(&k);
        assert_eq!(m.values(), &[0.0, 0.0, 0.75, 0.75]);
    }

    #[test]
    fn placed_shifts_with_zero_fill() {
        let m = Mask::placed(PixelSize::new(5, 5), &dot(2, 0, 0), (3, 1));
        assert_eq!(m.get(3, 1), 1.0);
        assert_eq!(m.get(0, 0), 0.0);
    }
}
