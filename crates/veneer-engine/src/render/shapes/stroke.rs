use crate::coords::Vec2;
use crate::render::Pixmap;
use crate::scene::shapes::StrokeCmd;

pub(crate) fn paint(cmd: &StrokeCmd, target: &mut Pixmap) {
    if cmd.band.outer.is_empty() || cmd.color.is_transparent() {
        return;
    }
    for y in 0..target.height() {
        for x in 0..target.width() {
            let c = cmd.band.coverage(Vec2::new(x as f32 + 0.5, y as f32 + 0.5));
            if c > 0.0 {
                target.blend(x, y, cmd.color, c);
            }
        }
    }
}
