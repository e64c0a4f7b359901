use crate::render::Pixmap;
use crate::scene::shapes::FillCmd;

pub(crate) fn paint(cmd: &FillCmd, target: &mut Pixmap) {
    if cmd.shape.is_empty() || cmd.color.is_transparent() {
        return;
    }
    for y in 0..target.height() {
        for x in 0..target.width() {
            let c = cmd.shape.pixel_coverage(x, y);
            if c > 0.0 {
                target.blend(x, y, cmd.color, c);
            }
        }
    }
}
