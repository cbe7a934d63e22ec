use std::collections::HashSet;

use glam::Vec2;

use super::types::{MouseButton, MouseEvent};

/// Per-frame mouse deltas.
///
/// `MouseState` holds what is currently down; `MouseFrame` holds what changed
/// since the last `MouseState::begin_frame`.
#[derive(Debug, Default)]
pub struct MouseFrame {
    /// Raw events in arrival order.
    pub events: Vec<MouseEvent>,

    pub buttons_pressed: HashSet<MouseButton>,
    pub buttons_released: HashSet<MouseButton>,

    /// Pointer travel in logical pixels.
    pub movement: Vec2,

    /// Wheel travel in scroll lines.
    pub wheel: Vec2,
}

impl MouseFrame {
    pub fn clear(&mut self) {
        self.events.clear();
        self.buttons_pressed.clear();
        self.buttons_released.clear();
        self.movement = Vec2::ZERO;
        self.wheel = Vec2::ZERO;
    }

    pub fn pressed(&self, button: MouseButton) -> bool {
        self.buttons_pressed.contains(&button)
    }

    pub fn released(&self, button: MouseButton) -> bool {
        self.buttons_released.contains(&button)
    }
}
