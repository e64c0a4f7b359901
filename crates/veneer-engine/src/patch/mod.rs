//! Stretchable patch images.
//!
//! A patch image carries a one-pixel marker border around its content:
//!
//! | border | meaning |
//! |--------|---------|
//! | top row | horizontal stretch spans |
//! | left column | vertical stretch spans |
//! | bottom row | horizontal content span (optional) |
//! | right column | vertical content span (optional) |
//!
//! Marked pixels are opaque black, unmarked pixels fully transparent. Opaque
//! red on the bottom row and right column (optical-bounds markers) reads as
//! unmarked.
//!
//! [`decode`] strips the border into a [`PatchImage`], whose
//! [`render`](PatchImage::render) stretches it to any size while copying
//! fixed regions pixel-exact.

mod decode;
mod error;
mod stretch;
mod source;

pub use decode::decode;
pub use error::DecodeError;
pub use stretch::{Axis, PatchImage, Segment, SegmentKind};
pub use source::PatchImageSource;
