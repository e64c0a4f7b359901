use crate::render::Pixmap;
use crate::scene::shapes::ImageCmd;

pub(crate) fn paint(cmd: &ImageCmd, target: &mut Pixmap) {
    target.draw_pixmap(&cmd.pixmap, cmd.origin, cmd.clip.as_ref());
}
