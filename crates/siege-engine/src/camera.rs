//! Viewpoint seam.
//!
//! Billboards only need to know where the viewer is; the camera itself stays
//! with the host and is passed in explicitly every update.

use glam::Vec3;

/// Anything with a world-space eye position.
pub trait Viewpoint {
    fn position(&self) -> Vec3;
}

impl Viewpoint for Vec3 {
    #[inline]
    fn position(&self) -> Vec3 {
        *self
    }
}

impl<T: Viewpoint + ?Sized> Viewpoint for &T {
    #[inline]
    fn position(&self) -> Vec3 {
        (**self).position()
    }
}

/// A viewpoint that never moves.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct FixedViewpoint {
    pub eye: Vec3,
}

impl FixedViewpoint {
    pub const fn new(eye: Vec3) -> Self {
        Self { eye }
    }
}

impl Viewpoint for FixedViewpoint {
    #[inline]
    fn position(&self) -> Vec3 {
        self.eye
    }
}
