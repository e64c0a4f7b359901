use std::fmt;

use super::Axis;

/// A patch image that cannot be decoded. Always fatal: no partial image is produced.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The encoded bytes could not be read as an image.
    Image(String),
    /// Smaller than the 3×3 minimum (border plus one content pixel).
    TooSmall { width: u32, height: u32 },
    /// No stretch span marked on the given axis.
    MissingStretchMarkers { axis: Axis },
    /// A border pixel that is neither a marker nor transparent.
    InvalidMarker { x: u32, y: u32, pixel: [u8; 4] },
    /// More than one content span marked on the given axis.
    DisjointContentMarkers { axis: Axis },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Image(msg) => write!(f, "patch decode error: {}", msg),
            DecodeError::TooSmall { width, height } => {
                write!(f, "patch decode error: {}x{} is smaller than 3x3", width, height)
            }
            DecodeError::MissingStretchMarkers { axis } => {
                write!(f, "patch decode error: no {} stretch markers", axis)
            }
            DecodeError::InvalidMarker { x, y, pixel } => write!(
                f,
                "patch decode error: invalid marker pixel #{:02x}{:02x}{:02x}{:02x} at {},{}",
                pixel[0], pixel[1], pixel[2], pixel[3], x, y
            ),
            DecodeError::DisjointContentMarkers { axis } => {
                write!(f, "patch decode error: {} content markers are not contiguous", axis)
            }
        }
    }
}

impl std::error::Error for DecodeError {}
