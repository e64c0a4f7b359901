use crate::coords::PixelSize;
use crate::render::{Mask, Pixmap};
use crate::scene::shapes::{ShadowCmd, Silhouette};

fn rasterize(silhouette: &Silhouette, size: PixelSize) -> Mask {
    match silhouette {
        Silhouette::Shape(shape) => Mask::from_shape(size, shape),
        Silhouette::Mask { mask, origin } => Mask::placed(size, mask, *origin),
    }
}

pub(crate) fn paint(cmd: &ShadowCmd, target: &mut Pixmap) {
    if cmd.color.is_transparent() {
        return;
    }
    let size = target.size();
    let mut mask = rasterize(&cmd.silhouette, size).blur(cmd.blur);
    if let Some(knockout) = &cmd.knockout {
        mask.knock_out(&rasterize(knockout, size));
    }
    if mask.is_blank() {
        log::trace!("shadow fully knocked out");
        return;
    }
    for y in 0..size.height {
        for x in 0..size.width {
            let c = mask.get(x, y);
            if c > 0.0 {
                target.blend(x, y, cmd.color, c);
            }
        }
    }
}
