//! Scene (draw stream) types.
//!
//! The engine never issues GPU calls itself. Adapters record `DrawCmd`s into a
//! `DrawList`; the host renderer walks it in paint order and draws each frame
//! resource with the recorded placement.

mod cmd;
mod key;
mod list;
mod z_index;

pub use cmd::{BillboardCmd, DrawCmd, SpriteCmd};
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use z_index::ZIndex;
