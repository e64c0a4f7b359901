/// Z-ordering key for draw items.
///
/// Higher values appear on top of lower values. Effect layers use the fixed
/// constants below, so the paint order never depends on push order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Drop shadow, bottom-most.
    pub const SHADOW: ZIndex = ZIndex(0);
    /// Solid fill or patch image.
    pub const BASE: ZIndex = ZIndex(1);
    /// Stroke, drawn last so it stays crisp over shadow and base.
    pub const STROKE: ZIndex = ZIndex(2);

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }
}
