use crate::geometry::StrokeBand;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Stroke painted as the band between two rounded rectangles.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeCmd {
    pub band: StrokeBand,
    pub color: Color,
}

impl DrawList {
    #[inline]
    pub fn push_stroke(&mut self, z: ZIndex, band: StrokeBand, color: Color) {
        self.push(z, DrawCmd::Stroke(StrokeCmd { band, color }));
    }
}
