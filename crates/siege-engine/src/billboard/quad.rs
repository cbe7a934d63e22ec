use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Vertex layout of a billboard quad: position + texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct BillboardVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

static QUAD_INDICES: [u16; 6] = BillboardQuad::INDICES;

/// Two-triangle quad in the billboard's local XY plane, centered on the
/// origin and facing +Z.
///
/// The quad is CPU-side geometry owned by its billboard; the host uploads the
/// bytes into whatever buffer it manages and drops that buffer with the billboard.
#[derive(Debug, Clone, PartialEq)]
pub struct BillboardQuad {
    vertices: [BillboardVertex; 4],
    size: Vec2,
}

impl BillboardQuad {
    pub const INDICES: [u16; 6] = [0, 1, 2, 0, 2, 3];

    pub fn new(size: Vec2) -> Self {
        let hw = size.x * 0.5;
        let hh = size.y * 0.5;

        let vertices = [
            BillboardVertex { position: [-hw, -hh, 0.0], uv: [0.0, 1.0] },
            BillboardVertex { position: [hw, -hh, 0.0], uv: [1.0, 1.0] },
            BillboardVertex { position: [hw, hh, 0.0], uv: [1.0, 0.0] },
            BillboardVertex { position: [-hw, hh, 0.0], uv: [0.0, 0.0] },
        ];

        Self { vertices, size }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    #[inline]
    pub fn vertices(&self) -> &[BillboardVertex] {
        &self.vertices
    }

    /// Raw vertex bytes, ready for upload.
    #[inline]
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    #[inline]
    pub fn index_bytes() -> &'static [u8] {
        bytemuck::cast_slice(&QUAD_INDICES)
    }
}
