//! Camera-facing animated billboards.
//!
//! An `AnimatedBillboard` pairs a `FrameSequencer` with a world position and
//! re-orients itself about the vertical axis toward the viewpoint every update.

mod animated;
mod orient;
mod quad;

pub use animated::AnimatedBillboard;
pub use orient::facing_rotation;
pub use quad::{BillboardQuad, BillboardVertex};
