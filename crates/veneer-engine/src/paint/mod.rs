//! Paint model shared between the compositor and the rasterizer.
//!
//! Colors are linear premultiplied alpha in `f32`; the raster target stores
//! premultiplied `u8` pixels (see `render::Pixel`).

pub mod color;

pub use color::Color;
