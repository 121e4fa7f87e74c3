//! Touch/mouse joystick that turns handle drags into directional key signals.
//!
//! A [`Joystick`] owns the drag state of one on-screen stick. Hosts feed it
//! pointer events, it clamps the handle to its circular track and reports
//! the active [`Direction`] through press/release signals, either to
//! owner-supplied closures or to a built-in simulated keyboard.

pub mod config;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod joystick;
pub mod keyboard;
pub mod pointer;
pub mod signal;

pub use config::{HostMount, JoystickOptions, JoystickSettings, PressMode};
pub use direction::{map_direction, Direction, DIRECTION_THRESHOLD};
pub use error::{JoystickError, Result};
pub use geometry::Vec2;
pub use joystick::Joystick;
pub use keyboard::{LogicalKey, SimulatedKey};
pub use pointer::{CursorHint, PointerEvent, PointerId, PointerPhase};
