//! Platform abstraction layer
//!
//! Maps browser input devices onto simulation commands. The DOM wiring
//! itself lives in the wasm entry point.

pub mod input;

pub use input::{ControlButton, canvas_touch, is_autopilot_toggle, key_down, key_up};
