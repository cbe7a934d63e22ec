use std::collections::HashSet;

use glam::Vec2;

use super::frame::MouseFrame;
use super::types::{ButtonState, MouseButton, MouseEvent};

/// Current mouse state for the game window.
#[derive(Debug, Default)]
pub struct MouseState {
    /// Whether the window is focused.
    pub focused: bool,

    /// Pointer position in logical pixels; `None` while outside the window.
    pub position: Option<Vec2>,

    /// Currently held buttons.
    pub buttons_down: HashSet<MouseButton>,

    /// Wheel travel accumulated since creation, in scroll lines.
    pub scroll: Vec2,
}

impl MouseState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a new update tick: forgets the previous frame's transitions.
    pub fn begin_frame(&self, frame: &mut MouseFrame) {
        frame.clear();
    }

    /// Applies an event to the held state and records transitions into `frame`.
    pub fn apply_event(&mut self, frame: &mut MouseFrame, ev: MouseEvent) {
        match ev {
            MouseEvent::Focused(focused) => {
                self.focused = focused;
                if !focused {
                    // Releases are not delivered while unfocused.
                    self.buttons_down.clear();
                }
            }

            MouseEvent::Moved(pos) => {
                if let Some(prev) = self.position {
                    frame.movement += pos - prev;
                }
                self.position = Some(pos);
            }

            MouseEvent::Left => {
                self.position = None;
            }

            MouseEvent::Button { button, state } => match state {
                ButtonState::Pressed => {
                    if self.buttons_down.insert(button) {
                        frame.buttons_pressed.insert(button);
                    }
                }
                ButtonState::Released => {
                    if self.buttons_down.remove(&button) {
                        frame.buttons_released.insert(button);
                    }
                }
            },

            MouseEvent::Wheel(delta) => {
                let lines = delta.in_lines();
                self.scroll += lines;
                frame.wheel += lines;
            }
        }

        frame.events.push(ev);
    }

    pub fn button_down(&self, button: MouseButton) -> bool {
        self.buttons_down.contains(&button)
    }
}
