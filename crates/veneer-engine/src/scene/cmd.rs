use crate::scene::shapes::fill::FillCmd;
use crate::scene::shapes::image::ImageCmd;
use crate::scene::shapes::shadow::ShadowCmd;
use crate::scene::shapes::stroke::StrokeCmd;

/// Rasterizer-agnostic layer command stream.
///
/// Extending the scene:
/// - add a new payload module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that module
/// - add a matching painter under `render::shapes::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Shadow(ShadowCmd),
    Fill(FillCmd),
    Image(ImageCmd),
    Stroke(StrokeCmd),
}
