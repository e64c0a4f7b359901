use std::sync::Arc;

use crate::geometry::RoundedRect;
use crate::paint::Color;
use crate::render::Mask;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Shape a shadow or knockout is cast from.
#[derive(Debug, Clone, PartialEq)]
pub enum Silhouette {
    /// Analytic rounded rectangle, already offset and spread.
    Shape(RoundedRect),
    /// Coverage mask placed at an integer offset on the target.
    Mask { mask: Arc<Mask>, origin: (i32, i32) },
}

/// Blurred silhouette tinted with `color`.
///
/// Coverage inside `knockout` is removed after blurring so the shadow never
/// shows through the base it sits under.
#[derive(Debug, Clone, PartialEq)]
pub struct ShadowCmd {
    pub silhouette: Silhouette,
    pub blur: f32,
    pub color: Color,
    pub knockout: Option<Silhouette>,
}

impl DrawList {
    #[inline]
    pub fn push_shadow(&mut self, silhouette: Silhouette, blur: f32, color: Color, knockout: Option<Silhouette>) {
        self.push(ZIndex::SHADOW, DrawCmd::Shadow(ShadowCmd { silhouette, blur, color, knockout }));
    }
}
