use std::fmt;

use crate::coords::{Insets, PixelSize};

/// Edge of a rectangle, named for diagnostics.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Edge::Top => "top",
            Edge::Right => "right",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
        })
    }
}

/// Geometry that cannot be honoured as given.
///
/// Only surfaced when clamping is disabled; the default resolver repairs
/// these cases and logs instead.
#[derive(Debug, Clone, PartialEq)]
pub enum InvalidGeometryError {
    /// Bounds with a negative width or height.
    NegativeBounds { width: f32, height: f32 },
    /// Two radii sharing an edge are longer than the edge.
    RadiiOverflow { edge: Edge, sum: f32, length: f32 },
    /// Bounds or radii containing NaN or infinity.
    NonFinite,
    /// A view of `size` grown by `outsets` does not fit a raster of
    /// `limit` pixels per side.
    CanvasTooLarge { size: PixelSize, outsets: Insets, limit: u32 },
}

impl fmt::Display for InvalidGeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidGeometryError::NegativeBounds { width, height } => {
                write!(f, "invalid geometry: negative bounds {}x{}", width, height)
            }
            InvalidGeometryError::RadiiOverflow { edge, sum, length } => write!(
                f,
                "invalid geometry: radii on the {} edge sum to {} but the edge is {} long",
                edge, sum, length
            ),
            InvalidGeometryError::NonFinite => f.write_str("invalid geometry: non-finite value"),
            InvalidGeometryError::CanvasTooLarge { size, outsets, limit } => write!(
                f,
                "invalid geometry: {} view with outsets {:?} exceeds the {}px canvas limit",
                size,
                outsets.to_array(),
                limit
            ),
        }
    }
}

impl std::error::Error for InvalidGeometryError {}
