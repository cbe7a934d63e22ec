use std::collections::HashMap;
use std::fmt;

use anyhow::{bail, Result};

/// Opaque handle to a texture owned by the host's content pipeline.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct TextureId(pub u32);

impl fmt::Display for TextureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tex#{}", self.0)
    }
}

/// Resolves named content to drawable handles.
///
/// Called during a load phase; handles stay valid for as long as the host keeps
/// the underlying resource alive.
pub trait ResourceLoader {
    fn load_texture(&mut self, name: &str) -> Result<TextureId>;
}

/// In-memory loader that hands out stable ids per name.
///
/// Useful for hosts that key GPU textures by id themselves, and for tests.
#[derive(Debug, Default)]
pub struct TextureRegistry {
    ids: HashMap<String, TextureId>,
    names: Vec<String>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name a handle was registered under.
    pub fn name_of(&self, id: TextureId) -> Option<&str> {
        self.names.get(id.0 as usize).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl ResourceLoader for TextureRegistry {
    fn load_texture(&mut self, name: &str) -> Result<TextureId> {
        if name.trim().is_empty() {
            bail!("texture name must not be empty");
        }

        if let Some(&id) = self.ids.get(name) {
            return Ok(id);
        }

        let id = TextureId(self.names.len() as u32);
        self.ids.insert(name.to_owned(), id);
        self.names.push(name.to_owned());
        log::debug!("TextureRegistry: registered {name:?} as {id}");
        Ok(id)
    }
}
