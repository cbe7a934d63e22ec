use glam::{Mat4, Vec2};

use crate::content::TextureId;

/// World-space textured quad, already oriented.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BillboardCmd {
    pub texture: TextureId,
    /// Quad-local to world transform.
    pub world: Mat4,
    /// Quad extent in world units.
    pub size: Vec2,
}

/// Screen-space sprite draw.
///
/// Mirrors a sprite-batch call: position, rotation around `origin`, uniform
/// scale and a layer depth in `[0, 1]` (0 = front).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SpriteCmd {
    pub texture: TextureId,
    pub position: Vec2,
    /// Radians, clockwise in screen space.
    pub rotation: f32,
    pub origin: Vec2,
    pub scale: f32,
    pub depth: f32,
}

/// Renderer-agnostic draw command stream.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Billboard(BillboardCmd),
    Sprite(SpriteCmd),
}

impl DrawCmd {
    pub fn texture(&self) -> TextureId {
        match self {
            DrawCmd::Billboard(cmd) => cmd.texture,
            DrawCmd::Sprite(cmd) => cmd.texture,
        }
    }
}
