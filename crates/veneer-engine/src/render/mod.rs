//! CPU rasterization subsystem.
//!
//! The rasterizer consumes a `scene` draw stream and flattens it into one
//! premultiplied RGBA8 [`Pixmap`]. Each layer kind has its own painter under
//! `render::shapes`.
//!
//! Convention:
//! - geometry is in pixels (top-left origin, +Y down)
//! - coverage is sampled at pixel centers
//! - compositing is premultiplied source-over

mod mask;
mod pixmap;
mod rasterizer;
pub mod shapes;

pub use mask::Mask;
pub use pixmap::{Pixel, Pixmap, MAX_PIXMAP_SIDE};
pub use rasterizer::Rasterizer;
