use super::{Insets, Vec2};

/// Integer size of a raster target in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    pub const fn area(self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Grows the size by whole-pixel outsets (fractions are rounded up).
    /// `None` when a side no longer fits in `u32`.
    pub fn checked_expand(self, outsets: Insets) -> Option<PixelSize> {
        let o = outsets.non_negative().ceil();
        let grow = |v: f32| (v <= u32::MAX as f32).then_some(v as u32);
        Some(PixelSize::new(
            self.width.checked_add(grow(o.left + o.right)?)?,
            self.height.checked_add(grow(o.top + o.bottom)?)?,
        ))
    }
}

impl core::fmt::Display for PixelSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
