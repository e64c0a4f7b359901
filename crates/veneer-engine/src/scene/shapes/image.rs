use std::sync::Arc;

use crate::geometry::RoundedRect;
use crate::render::Pixmap;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Pre-rendered pixels placed at an integer offset, optionally clipped.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageCmd {
    pub pixmap: Arc<Pixmap>,
    /// Top-left corner of the image on the target, in whole pixels.
    pub origin: (i32, i32),
    /// Anti-aliased clip in target coordinates.
    pub clip: Option<RoundedRect>,
}

impl DrawList {
    #[inline]
    pub fn push_image(&mut self, z: ZIndex, pixmap: Arc<Pixmap>, origin: (i32, i32), clip: Option<RoundedRect>) {
        self.push(z, DrawCmd::Image(ImageCmd { pixmap, origin, clip }));
    }
}
