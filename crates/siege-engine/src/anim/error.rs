use thiserror::Error;

/// Errors raised by `FrameSequencer`.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SequenceError {
    /// Frame durations must be finite and strictly positive.
    #[error("invalid frame duration {0}s: must be finite and > 0")]
    InvalidDuration(f32),

    /// The sequencer holds no frames.
    #[error("sequencer has no frames")]
    Empty,
}
