//! Mouse input component.
//!
//! Public API is platform-agnostic. `platform::winit` translates window events
//! into `MouseEvent`s; game code reads held state from `MouseState` and
//! per-frame transitions from `MouseFrame`.

mod frame;
pub mod platform;
mod state;
mod types;

pub use frame::MouseFrame;
pub use state::MouseState;
pub use types::{ButtonState, MouseButton, MouseEvent, MouseWheelDelta, PIXELS_PER_LINE};
