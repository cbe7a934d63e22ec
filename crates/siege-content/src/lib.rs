//! Compiled content records for the siege game.
//!
//! A content stream is a sequence of records, each introduced by a one-byte
//! type tag. Decoding is a table lookup from tag to a pure `bytes -> record`
//! function; there is no reader class per record type.
//!
//! ```ignore
//! let records = siege_content::decode_all(&bytes)?;
//! ```

mod error;
mod reader;
mod record;
mod table;

pub use error::ContentError;
pub use reader::ByteReader;
pub use record::{
    ContentKind, ContentRecord, MeshRecord, SkyboxRecord, TowerRecord, VertexPositionNormalTexture,
    WallRecord,
};
pub use table::{decode_all, decode_record};

pub type Result<T> = std::result::Result<T, ContentError>;
