//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store rasterizer-agnostic layer commands for one compiled effect
//! - provide deterministic ordering (z-index + insertion order)
//! - keep layer-specific payloads and push helpers isolated under `scene::shapes`

mod cmd;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::{DrawItem, DrawList, SortKey};
pub use z_index::ZIndex;
