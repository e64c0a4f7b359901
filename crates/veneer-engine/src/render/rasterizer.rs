use crate::scene::{DrawCmd, DrawList};

use super::{shapes, Pixmap};

/// Flattens a draw stream into a pixmap, back to front.
#[derive(Debug, Default, Copy, Clone)]
pub struct Rasterizer;

impl Rasterizer {
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Paints every item of `list` onto `target` in paint order.
    pub fn render(&self, list: &mut DrawList, target: &mut Pixmap) {
        for item in list.iter_in_paint_order() {
            match &item.cmd {
                DrawCmd::Shadow(cmd) => shapes::shadow::paint(cmd, target),
                DrawCmd::Fill(cmd) => shapes::fill::paint(cmd, target),
                DrawCmd::Image(cmd) => shapes::image::paint(cmd, target),
                DrawCmd::Stroke(cmd) => shapes::stroke::paint(cmd, target),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{CornerRadii, PixelSize, Rect};
    use crate::geometry::{GeometryConfig, GeometryResolver};
    use crate::paint::Color;
    use crate::render::Pixel;
    use crate::scene::ZIndex;
    use crate::scene::shapes::Silhouette;

    fn resolver() -> GeometryResolver {
        GeometryResolver::new(GeometryConfig::default())
    }

    #[test]
    fn stroke_paints_over_fill_regardless_of_push_order() {
        let r = resolver();
        let shape = r.resolve(Rect::new(0.0, 0.0, 20.0, 20.0), CornerRadii::zero());
        let mut list = DrawList::new();
        list.push_stroke(ZIndex::STROKE, r.stroke_band(&shape, 4.0, false), Color::from_argb(0xFFFF0000));
        list.push_fill(ZIndex::BASE, shape, Color::from_argb(0xFF0000FF));

        let mut pm = Pixmap::new(PixelSize::new(20, 20));
        Rasterizer::new().render(&mut list, &mut pm);
        assert_eq!(pm.get(0, 10), Some(Pixel::new(255, 0, 0, 255)));
        assert_eq!(pm.get(10, 10), Some(Pixel::new(0, 0, 255, 255)));
    }

    #[test]
    fn knocked_out_shadow_leaves_base_area_clear() {
        let r = resolver();
        let shape = r.resolve(Rect::new(10.0, 10.0, 20.0, 20.0), CornerRadii::all(4.0));
        let mut list = DrawList::new();
        list.push_shadow(Silhouette::Shape(shape), 6.0, Color::black(), Some(Silhouette::Shape(shape)));

        let mut pm = Pixmap::new(PixelSize::new(40, 40));
        Rasterizer::new().render(&mut list, &mut pm);
        assert_eq!(pm.get(20, 20), Some(Pixel::TRANSPARENT));
        assert!(pm.get(8, 20).is_some_and(|p| p.a > 0));
    }

    #[test]
    fn rendering_is_deterministic() {
        let r = resolver();
        let shape = r.resolve(Rect::new(4.0, 4.0, 30.0, 18.0), CornerRadii::all(7.0));
        let build = || {
            let mut list = DrawList::new();
            list.push_shadow(Silhouette::Shape(shape.translate(crate::coords::Vec2::new(1.0, 2.0))), 3.0, Color::black(), Some(Silhouette::Shape(shape)));
            list.push_fill(ZIndex::BASE, shape, Color::from_argb(0x80FF8800));
            list.push_stroke(ZIndex::STROKE, r.stroke_band(&shape, 2.0, false), Color::white());
            let mut pm = Pixmap::new(PixelSize::new(40, 30));
            Rasterizer::new().render(&mut list, &mut pm);
            pm
        };
        assert_eq!(build(), build());
    }
}
