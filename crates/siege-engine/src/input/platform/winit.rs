use glam::Vec2;
use winit::dpi::PhysicalPosition;
use winit::event::{ElementState, MouseButton as WinitMouseButton, MouseScrollDelta, WindowEvent};

use crate::input::{ButtonState, MouseButton, MouseEvent, MouseWheelDelta};

/// Translates a winit `WindowEvent` into a `MouseEvent`.
///
/// `scale_factor` is the window's current DPI scale, used to convert physical
/// positions to logical pixels. Returns `None` for non-mouse events.
pub fn translate_window_event(scale_factor: f64, event: &WindowEvent) -> Option<MouseEvent> {
    match event {
        WindowEvent::Focused(f) => Some(MouseEvent::Focused(*f)),

        WindowEvent::CursorLeft { .. } => Some(MouseEvent::Left),

        WindowEvent::CursorMoved { position, .. } => {
            Some(MouseEvent::Moved(to_logical(scale_factor, *position)))
        }

        WindowEvent::MouseInput { state, button, .. } => {
            let state = match state {
                ElementState::Pressed => ButtonState::Pressed,
                ElementState::Released => ButtonState::Released,
            };
            Some(MouseEvent::Button {
                button: map_mouse_button(*button),
                state,
            })
        }

        WindowEvent::MouseWheel { delta, .. } => {
            let delta = match delta {
                MouseScrollDelta::LineDelta(x, y) => MouseWheelDelta::Line { x: *x, y: *y },
                MouseScrollDelta::PixelDelta(p) => {
                    let v = to_logical(scale_factor, *p);
                    MouseWheelDelta::Pixel { x: v.x, y: v.y }
                }
            };
            Some(MouseEvent::Wheel(delta))
        }

        _ => None,
    }
}

fn to_logical(scale_factor: f64, pos: PhysicalPosition<f64>) -> Vec2 {
    let logical = pos.to_logical::<f64>(scale_factor);
    Vec2::new(logical.x as f32, logical.y as f32)
}

fn map_mouse_button(b: WinitMouseButton) -> MouseButton {
    match b {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Back,
        WinitMouseButton::Forward => MouseButton::Forward,
        WinitMouseButton::Other(v) => MouseButton::Other(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_and_leave_map_directly() {
        assert_eq!(
            translate_window_event(1.0, &WindowEvent::Focused(false)),
            Some(MouseEvent::Focused(false))
        );
    }

    #[test]
    fn physical_positions_become_logical() {
        let v = to_logical(2.0, PhysicalPosition::new(200.0, 50.0));
        assert_eq!(v, Vec2::new(100.0, 25.0));
    }

    #[test]
    fn buttons_map_one_to_one() {
        assert_eq!(map_mouse_button(WinitMouseButton::Left), MouseButton::Left);
        assert_eq!(map_mouse_button(WinitMouseButton::Other(7)), MouseButton::Other(7));
    }

    #[test]
    fn keyboard_events_are_ignored() {
        assert_eq!(translate_window_event(1.0, &WindowEvent::CloseRequested), None);
    }
}
