use glam::Vec2;

/// Pixel distance treated as one scroll line when normalizing wheel input.
pub const PIXELS_PER_LINE: f32 = 20.0;

/// Mouse button identifier.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Mouse wheel delta.
///
/// `Line` corresponds to notched wheels; `Pixel` to touchpads.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseWheelDelta {
    Line { x: f32, y: f32 },
    Pixel { x: f32, y: f32 },
}

impl MouseWheelDelta {
    /// Delta expressed in scroll lines.
    pub fn in_lines(self) -> Vec2 {
        match self {
            MouseWheelDelta::Line { x, y } => Vec2::new(x, y),
            MouseWheelDelta::Pixel { x, y } => Vec2::new(x, y) / PIXELS_PER_LINE,
        }
    }
}

/// Platform-agnostic mouse events.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MouseEvent {
    /// Pointer moved to a position in logical pixels.
    Moved(Vec2),
    Button {
        button: MouseButton,
        state: ButtonState,
    },
    Wheel(MouseWheelDelta),
    /// Pointer left the window surface.
    Left,
    /// Window focus change.
    Focused(bool),
}
