use super::SequenceError;

/// A single visual resource paired with the time it stays on screen.
///
/// Frames are immutable once built; the duration is validated on construction.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnimationFrame<H> {
    resource: H,
    duration: f32,
}

impl<H> AnimationFrame<H> {
    /// Creates a frame, rejecting non-finite or non-positive durations.
    pub fn new(resource: H, duration: f32) -> Result<Self, SequenceError> {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(SequenceError::InvalidDuration(duration));
        }
        Ok(Self { resource, duration })
    }

    #[inline]
    pub fn resource(&self) -> &H {
        &self.resource
    }

    /// Display duration in seconds.
    #[inline]
    pub fn duration(&self) -> f32 {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_positive_duration() {
        let f = AnimationFrame::new("smoke_0", 0.05).unwrap();
        assert_eq!(*f.resource(), "smoke_0");
        assert_eq!(f.duration(), 0.05);
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert_eq!(AnimationFrame::new(0u32, 0.0), Err(SequenceError::InvalidDuration(0.0)));
        assert_eq!(AnimationFrame::new(0u32, -1.0), Err(SequenceError::InvalidDuration(-1.0)));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(AnimationFrame::new(0u32, f32::NAN).is_err());
        assert!(AnimationFrame::new(0u32, f32::INFINITY).is_err());
    }
}
