use image::{ImageFormat, RgbaImage};

use super::DecodeError;

/// Raw patch image, marker border included, as straight-alpha RGBA.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchImageSource {
    image: RgbaImage,
}

impl PatchImageSource {
    #[inline]
    pub fn from_rgba(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Reads an encoded PNG from memory.
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, DecodeError> {
        let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .map_err(|e| DecodeError::Image(e.to_string()))?
            .to_rgba8();
        Ok(Self { image })
    }

    #[inline]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

impl From<RgbaImage> for PatchImageSource {
    fn from(image: RgbaImage) -> Self {
        Self::from_rgba(image)
    }
}
