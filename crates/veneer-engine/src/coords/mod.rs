//! Coordinate and geometry types shared across the engine and effect crates.
//!
//! Canonical CPU space:
//! - Pixels (the effect crate converts density-independent units before this)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Pixel `(x, y)` covers `[x, x + 1) × [y, y + 1)`; coverage is sampled at its center.

mod corner_radii;
mod insets;
mod rect;
mod size;
mod vec2;

pub use corner_radii::CornerRadii;
pub use insets::Insets;
pub use rect::Rect;
pub use size::PixelSize;
pub use vec2::Vec2;
