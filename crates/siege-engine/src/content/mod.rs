//! Content seam.
//!
//! Frames reference textures by opaque `TextureId`. Resolving a name to an id is
//! the job of an injected `ResourceLoader`; the engine never reaches for a
//! global content manager.

mod loader;

pub use loader::{ResourceLoader, TextureId, TextureRegistry};
