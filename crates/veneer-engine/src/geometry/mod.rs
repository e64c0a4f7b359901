//! Rounded-rectangle geometry shared by every effect layer.
//!
//! The resolver turns caller-supplied bounds and corner radii into a
//! [`RoundedRect`] that is guaranteed not to self-intersect, and derives the
//! stroke band from it. Behaviour that used to hang off process-wide toggles
//! lives in an explicit [`GeometryConfig`].

mod config;
mod error;
mod resolver;
mod rounded_rect;

pub use config::GeometryConfig;
pub use error::{Edge, InvalidGeometryError};
pub use resolver::{GeometryResolver, StrokeBand};
pub use rounded_rect::RoundedRect;
