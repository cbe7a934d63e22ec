//! Audio volume wrapper.
//!
//! The engine does not mix or play sound. It keeps the player's volume
//! settings and pushes the effective levels into an injected `AudioSink`.

mod volume;

pub use volume::{AudioSink, AudioVolumes, SoundCategory};
