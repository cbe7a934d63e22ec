use crate::record::{
    ContentKind, ContentRecord, MeshRecord, SkyboxRecord, TowerRecord, VertexPositionNormalTexture,
    WallRecord,
};
use crate::{ByteReader, ContentError, Result};

type DecodeFn = fn(&mut ByteReader<'_>) -> Result<ContentRecord>;

/// Decoder per record kind.
static DECODERS: [(ContentKind, DecodeFn); 4] = [
    (ContentKind::Castle, decode_castle),
    (ContentKind::Tower, decode_tower),
    (ContentKind::Wall, decode_wall),
    (ContentKind::Skybox, decode_skybox),
];

/// Decodes one record from the front of `bytes`.
///
/// Returns the record and the number of bytes it occupied.
pub fn decode_record(bytes: &[u8]) -> Result<(ContentRecord, usize)> {
    let mut r = ByteReader::new(bytes);
    let record = read_record(&mut r)?;
    Ok((record, r.position()))
}

/// Decodes every record in `bytes`.
pub fn decode_all(bytes: &[u8]) -> Result<Vec<ContentRecord>> {
    let mut r = ByteReader::new(bytes);
    let mut out = Vec::new();
    while !r.is_empty() {
        out.push(read_record(&mut r)?);
    }
    log::debug!("decoded {} content records ({} bytes)", out.len(), bytes.len());
    Ok(out)
}

fn read_record(r: &mut ByteReader<'_>) -> Result<ContentRecord> {
    let tag = r.read_u8()?;
    let (_, decode) = DECODERS
        .iter()
        .find(|(kind, _)| kind.tag() == tag)
        .ok_or(ContentError::UnknownTag(tag))?;
    decode(r)
}

// ── field decoders ────────────────────────────────────────────────────────

fn read_mesh(r: &mut ByteReader<'_>) -> Result<MeshRecord> {
    let texture = r.read_string()?;

    let vertex_count = r.read_u32()? as usize;
    let vertices = r
        .read_pod_array::<[u32; 8]>(vertex_count)?
        .into_iter()
        .map(VertexPositionNormalTexture::from_le_words)
        .collect::<Vec<_>>();

    let index_count = r.read_u32()? as usize;
    let indices = r
        .read_pod_array::<[u8; 2]>(index_count)?
        .into_iter()
        .map(u16::from_le_bytes)
        .collect::<Vec<_>>();

    if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertices.len()) {
        return Err(ContentError::IndexOutOfRange {
            index,
            vertex_count: vertices.len(),
        });
    }

    Ok(MeshRecord {
        texture,
        vertices,
        indices,
    })
}

fn decode_castle(r: &mut ByteReader<'_>) -> Result<ContentRecord> {
    read_mesh(r).map(ContentRecord::Castle)
}

fn decode_tower(r: &mut ByteReader<'_>) -> Result<ContentRecord> {
    Ok(ContentRecord::Tower(TowerRecord {
        mesh: read_mesh(r)?,
        position: r.read_vec3()?,
        height: r.read_f32()?,
    }))
}

fn decode_wall(r: &mut ByteReader<'_>) -> Result<ContentRecord> {
    Ok(ContentRecord::Wall(WallRecord {
        mesh: read_mesh(r)?,
        start: r.read_vec3()?,
        end: r.read_vec3()?,
        thickness: r.read_f32()?,
    }))
}

fn decode_skybox(r: &mut ByteReader<'_>) -> Result<ContentRecord> {
    let size = r.read_f32()?;
    let faces = [
        r.read_string()?,
        r.read_string()?,
        r.read_string()?,
        r.read_string()?,
        r.read_string()?,
        r.read_string()?,
    ];
    Ok(ContentRecord::Skybox(SkyboxRecord { size, faces }))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal writer for hand-built fixtures.
    #[derive(Default)]
    struct Fixture(Vec<u8>);

    impl Fixture {
        fn u8(mut self, v: u8) -> Self {
            self.0.push(v);
            self
        }
        fn u16(mut self, v: u16) -> Self {
            self.0.extend_from_slice(&v.to_le_bytes());
            self
        }
        fn u32(mut self, v: u32) -> Self {
            self.0.extend_from_slice(&v.to_le_bytes());
            self
        }
        fn f32s(mut self, vs: &[f32]) -> Self {
            for v in vs {
                self.0.extend_from_slice(&v.to_le_bytes());
            }
            self
        }
        fn str(self, s: &str) -> Self {
            let mut f = self.u16(s.len() as u16);
            f.0.extend_from_slice(s.as_bytes());
            f
        }
        /// Mesh with one triangle.
        fn triangle(self, texture: &str) -> Self {
            self.str(texture)
                .u32(3)
                .f32s(&[0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0])
                .f32s(&[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0])
                .f32s(&[0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 1.0])
                .u32(3)
                .u16(0)
                .u16(1)
                .u16(2)
        }
    }

    #[test]
    fn decodes_castle_mesh() {
        let bytes = Fixture::default().u8(1).triangle("keep").0;
        let (record, used) = decode_record(&bytes).unwrap();
        assert_eq!(used, bytes.len());

        let ContentRecord::Castle(mesh) = record else {
            panic!("expected castle");
        };
        assert_eq!(mesh.texture, "keep");
        assert_eq!(mesh.vertices.len(), 3);
        assert_eq!(mesh.vertices[1].position, [1.0, 0.0, 0.0]);
        assert_eq!(mesh.vertices[2].uv, [0.0, 1.0]);
        assert_eq!(mesh.vertices[0].normal, [0.0, 1.0, 0.0]);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn decodes_tower_placement() {
        let bytes = Fixture::default()
            .u8(2)
            .triangle("tower")
            .f32s(&[10.0, 0.0, -4.0])
            .f32s(&[12.5])
            .0;
        let (record, _) = decode_record(&bytes).unwrap();
        let ContentRecord::Tower(tower) = record else {
            panic!("expected tower");
        };
        assert_eq!(tower.position, [10.0, 0.0, -4.0]);
        assert_eq!(tower.height, 12.5);
        assert_eq!(tower.mesh.texture, "tower");
    }

    #[test]
    fn decodes_wall_segment() {
        let bytes = Fixture::default()
            .u8(3)
            .triangle("wall")
            .f32s(&[0.0, 0.0, 0.0, 6.0, 0.0, 8.0, 1.5])
            .0;
        let (record, _) = decode_record(&bytes).unwrap();
        let ContentRecord::Wall(wall) = record else {
            panic!("expected wall");
        };
        assert_eq!(wall.length(), 10.0);
        assert_eq!(wall.thickness, 1.5);
    }

    #[test]
    fn decodes_skybox_faces_in_order() {
        let mut f = Fixture::default().u8(4).f32s(&[500.0]);
        for face in ["px", "nx", "py", "ny", "pz", "nz"] {
            f = f.str(face);
        }
        let (record, _) = decode_record(&f.0).unwrap();
        assert!(record.mesh().is_none());
        let ContentRecord::Skybox(sky) = record else {
            panic!("expected skybox");
        };
        assert_eq!(sky.size, 500.0);
        assert_eq!(sky.faces[0], "px");
        assert_eq!(sky.faces[5], "nz");
    }

    #[test]
    fn decode_all_walks_mixed_stream() {
        let bytes = Fixture::default()
            .u8(1)
            .triangle("keep")
            .u8(2)
            .triangle("tower")
            .f32s(&[1.0, 2.0, 3.0, 4.0])
            .0;
        let records = decode_all(&bytes).unwrap();
        let kinds: Vec<_> = records.iter().map(ContentRecord::kind).collect();
        assert_eq!(kinds, vec![ContentKind::Castle, ContentKind::Tower]);
    }

    #[test]
    fn empty_stream_has_no_records() {
        assert_eq!(decode_all(&[]).unwrap(), vec![]);
    }

    #[test]
    fn unknown_tag_is_rejected() {
        assert_eq!(decode_record(&[9]).unwrap_err(), ContentError::UnknownTag(9));
    }

    #[test]
    fn truncated_record_reports_eof() {
        let mut bytes = Fixture::default().u8(1).triangle("keep").0;
        bytes.truncate(bytes.len() - 1);
        assert!(matches!(
            decode_record(&bytes),
            Err(ContentError::UnexpectedEof { needed: 1, .. })
        ));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let bytes = Fixture::default()
            .u8(1)
            .str("bad")
            .u32(1)
            .f32s(&[0.0; 8])
            .u32(3)
            .u16(0)
            .u16(0)
            .u16(4)
            .0;
        assert_eq!(
            decode_record(&bytes).unwrap_err(),
            ContentError::IndexOutOfRange { index: 4, vertex_count: 1 }
        );
    }
}
