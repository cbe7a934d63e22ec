/// Z-ordering key for draw items. Higher values are drawn on top.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

impl ZIndex {
    /// Layers a sprite depth is spread across.
    const DEPTH_LAYERS: f32 = 10_000.0;

    #[inline]
    pub const fn new(v: i32) -> Self {
        Self(v)
    }

    /// Maps a sprite-batch layer depth (0 = front, 1 = back) onto z.
    ///
    /// Depth is clamped to `[0, 1]`; NaN is treated as the front layer.
    pub fn from_depth(depth: f32) -> Self {
        let d = if depth.is_nan() { 0.0 } else { depth.clamp(0.0, 1.0) };
        Self(((1.0 - d) * Self::DEPTH_LAYERS).round() as i32)
    }
}
