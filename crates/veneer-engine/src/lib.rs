//! Veneer engine crate.
//!
//! This crate owns the size-independent geometry and the CPU raster pieces
//! used by the effect compositor: rounded-rect resolution, stretchable patch
//! images, the draw stream and the rasterizer that flattens it.

pub mod coords;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod patch;
pub mod render;
pub mod scene;
