//! Time subsystem.
//!
//! Produces the per-tick delta that drives every `FrameSequencer`.
//! Intended usage:
//! - one `FrameClock` per update loop
//! - call `tick()` once per update, then feed `FrameTime::dt` to `advance`/`update`

mod frame_clock;

pub use frame_clock::{ClockConfig, FrameClock, FrameTime};
