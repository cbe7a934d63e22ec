//! Frame sequencing.
//!
//! A `FrameSequencer` owns an ordered list of frames (resource handle + display
//! duration) and a play-head that is advanced by elapsed time each tick.
//! Billboards and screen-space sprites both drive their visuals through it.

mod error;
mod frame;
mod sequencer;

pub use error::SequenceError;
pub use frame::AnimationFrame;
pub use sequencer::{Advance, FrameSequencer, PlaybackState};
