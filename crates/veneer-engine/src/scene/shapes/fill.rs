use crate::geometry::RoundedRect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Solid fill clipped to a resolved rounded rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct FillCmd {
    pub shape: RoundedRect,
    pub color: Color,
}

impl DrawList {
    /// Records a solid rounded-rect fill.
    #[inline]
    pub fn push_fill(&mut self, z: ZIndex, shape: RoundedRect, color: Color) {
        self.push(z, DrawCmd::Fill(FillCmd { shape, color }));
    }
}
