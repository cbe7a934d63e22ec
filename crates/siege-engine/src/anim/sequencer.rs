use super::{AnimationFrame, SequenceError};

/// Coarse playback state derived from the play-head.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PlaybackState {
    /// Paused with the play-head at frame 0, no time accumulated.
    Stopped,
    /// Advancing on every tick.
    Playing,
    /// Paused somewhere other than the start.
    Paused,
}

/// Summary of a single `advance` call.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Advance {
    /// Frame boundaries crossed.
    pub steps: u32,
    /// Times a looping sequence wrapped from the last frame back to frame 0.
    pub wraps: u32,
    /// A one-shot sequence ran past its last frame and stopped itself.
    pub finished: bool,
}

impl Advance {
    /// True if the visible frame may have changed.
    #[inline]
    pub fn changed_frame(&self) -> bool {
        self.steps > 0 || self.finished
    }
}

/// Elapsed-time driven frame play-head.
///
/// Semantics:
/// - construction leaves the sequencer playing at frame 0
/// - `advance(dt)` accumulates time and steps forward while the accumulated time
///   covers the current frame's duration
/// - a looping sequence wraps to frame 0; a one-shot sequence that runs past its
///   last frame pauses itself and rewinds to frame 0 (it does not hold the last frame)
///
/// `H` is an opaque resource handle; the sequencer never inspects it.
#[derive(Debug, Clone)]
pub struct FrameSequencer<H> {
    frames: Vec<AnimationFrame<H>>,
    index: usize,
    elapsed: f32,
    /// Time since frame 0 of the current one-shot run.
    played: f32,
    looping: bool,
    paused: bool,
    cycle: f32,
}

impl<H> FrameSequencer<H> {
    /// Creates an empty sequencer.
    pub fn new(looping: bool) -> Self {
        Self {
            frames: Vec::new(),
            index: 0,
            elapsed: 0.0,
            played: 0.0,
            looping,
            paused: false,
            cycle: 0.0,
        }
    }

    /// Creates a sequencer from pre-validated frames.
    pub fn from_frames(
        frames: impl IntoIterator<Item = AnimationFrame<H>>,
        looping: bool,
    ) -> Self {
        let mut seq = Self::new(looping);
        for frame in frames {
            seq.push_frame(frame);
        }
        seq
    }

    /// Appends a frame shown for `duration` seconds.
    ///
    /// Rejects non-finite or non-positive durations; a zero duration would never
    /// let the step loop in `advance` consume time.
    pub fn add_frame(&mut self, resource: H, duration: f32) -> Result<(), SequenceError> {
        let frame = AnimationFrame::new(resource, duration).inspect_err(|err| {
            log::warn!("FrameSequencer: {err}");
        })?;
        self.push_frame(frame);
        Ok(())
    }

    /// Appends an already validated frame.
    pub fn push_frame(&mut self, frame: AnimationFrame<H>) {
        self.cycle += frame.duration();
        self.frames.push(frame);
    }

    /// Rewinds and unpauses, ready for a fresh playback.
    pub fn prepare(&mut self) {
        self.reset();
        self.paused = false;
    }

    /// Advances the play-head by `dt` seconds.
    ///
    /// No-op while paused, when empty, or when `dt` is negative or not finite.
    pub fn advance(&mut self, dt: f32) -> Advance {
        let mut out = Advance::default();

        if self.paused || self.frames.is_empty() || !dt.is_finite() || dt < 0.0 {
            return out;
        }

        self.elapsed += dt;

        // Per-frame subtraction drifts in f32; compare the run total against the
        // cycle instead so running exactly the cycle always finishes.
        if !self.looping {
            self.played += dt;
            if self.played >= self.cycle {
                out.steps = (self.frames.len() - self.index) as u32;
                self.finish(&mut out);
                return out;
            }
        }

        // Whole cycles land on the same index; skip them arithmetically so huge
        // deltas do not walk every frame.
        if self.looping && self.elapsed >= self.cycle {
            let rem = self.elapsed.rem_euclid(self.cycle);
            let cycles = ((self.elapsed - rem) / self.cycle).round();
            self.elapsed = rem;

            let cycles = cycles as u32;
            out.wraps = cycles;
            out.steps = cycles.saturating_mul(self.frames.len() as u32);
        }

        while self.elapsed >= self.frames[self.index].duration() {
            self.elapsed -= self.frames[self.index].duration();
            out.steps = out.steps.saturating_add(1);

            let next = self.index + 1;
            if next < self.frames.len() {
                self.index = next;
            } else if self.looping {
                self.index = 0;
                out.wraps = out.wraps.saturating_add(1);
            } else {
                self.finish(&mut out);
                break;
            }
        }

        out
    }

    fn finish(&mut self, out: &mut Advance) {
        log::trace!("FrameSequencer: one-shot finished after {} frames", self.frames.len());
        self.stop();
        out.finished = true;
    }

    /// Frame under the play-head.
    pub fn current_frame(&self) -> Result<&AnimationFrame<H>, SequenceError> {
        self.frames.get(self.index).ok_or(SequenceError::Empty)
    }

    #[inline]
    pub fn play(&mut self) {
        self.paused = false;
    }

    #[inline]
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Pauses and rewinds to frame 0.
    pub fn stop(&mut self) {
        self.paused = true;
        self.reset();
    }

    /// Rewinds to frame 0 without touching the pause flag.
    pub fn reset(&mut self) {
        self.index = 0;
        self.elapsed = 0.0;
        self.played = 0.0;
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    #[inline]
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Time accumulated within the current frame, in seconds.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    #[inline]
    pub fn frames(&self) -> &[AnimationFrame<H>] {
        &self.frames
    }

    /// Sum of all frame durations, in seconds.
    #[inline]
    pub fn cycle_duration(&self) -> f32 {
        self.cycle
    }

    pub fn state(&self) -> PlaybackState {
        match (self.paused, self.index == 0 && self.elapsed == 0.0) {
            (false, _) => PlaybackState::Playing,
            (true, true) => PlaybackState::Stopped,
            (true, false) => PlaybackState::Paused,
        }
    }
}

impl<H> Default for FrameSequencer<H> {
    fn default() -> Self {
        Self::new(false)
    }
}
