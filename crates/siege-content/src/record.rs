use bytemuck::{Pod, Zeroable};

/// Mesh vertex: position, normal, texture coordinate (32 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct VertexPositionNormalTexture {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

impl VertexPositionNormalTexture {
    pub const SIZE: usize = std::mem::size_of::<Self>();

    /// Builds a vertex from its eight little-endian words.
    pub(crate) fn from_le_words(w: [u32; 8]) -> Self {
        let f = |i: usize| f32::from_bits(u32::from_le(w[i]));
        Self {
            position: [f(0), f(1), f(2)],
            normal: [f(3), f(4), f(5)],
            uv: [f(6), f(7)],
        }
    }
}

/// Indexed, textured triangle list.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshRecord {
    pub texture: String,
    pub vertices: Vec<VertexPositionNormalTexture>,
    pub indices: Vec<u16>,
}

impl MeshRecord {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TowerRecord {
    pub mesh: MeshRecord,
    pub position: [f32; 3],
    pub height: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct WallRecord {
    pub mesh: MeshRecord,
    pub start: [f32; 3],
    pub end: [f32; 3],
    pub thickness: f32,
}

impl WallRecord {
    pub fn length(&self) -> f32 {
        let d = [
            self.end[0] - self.start[0],
            self.end[1] - self.start[1],
            self.end[2] - self.start[2],
        ];
        (d[0] * d[0] + d[1] * d[1] + d[2] * d[2]).sqrt()
    }
}

/// Cube skybox: half-extent plus one texture per face.
#[derive(Debug, Clone, PartialEq)]
pub struct SkyboxRecord {
    pub size: f32,
    /// Face textures in +X, -X, +Y, -Y, +Z, -Z order.
    pub faces: [String; 6],
}

/// Record type, identified on the wire by a one-byte tag.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ContentKind {
    Castle,
    Tower,
    Wall,
    Skybox,
}

impl ContentKind {
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            1 => Some(ContentKind::Castle),
            2 => Some(ContentKind::Tower),
            3 => Some(ContentKind::Wall),
            4 => Some(ContentKind::Skybox),
            _ => None,
        }
    }

    pub fn tag(self) -> u8 {
        match self {
            ContentKind::Castle => 1,
            ContentKind::Tower => 2,
            ContentKind::Wall => 3,
            ContentKind::Skybox => 4,
        }
    }
}

/// A decoded content record.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentRecord {
    Castle(MeshRecord),
    Tower(TowerRecord),
    Wall(WallRecord),
    Skybox(SkyboxRecord),
}

impl ContentRecord {
    pub fn kind(&self) -> ContentKind {
        match self {
            ContentRecord::Castle(_) => ContentKind::Castle,
            ContentRecord::Tower(_) => ContentKind::Tower,
            ContentRecord::Wall(_) => ContentKind::Wall,
            ContentRecord::Skybox(_) => ContentKind::Skybox,
        }
    }

    /// Mesh geometry, if the record carries any.
    pub fn mesh(&self) -> Option<&MeshRecord> {
        match self {
            ContentRecord::Castle(mesh) => Some(mesh),
            ContentRecord::Tower(t) => Some(&t.mesh),
            ContentRecord::Wall(w) => Some(&w.mesh),
            ContentRecord::Skybox(_) => None,
        }
    }
}
