//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Command`] and provides a
//! non-blocking [`KeyboardInput`] that the game loop polls between gravity
//! ticks.

pub mod keyboard;
pub mod map;

pub use tui_blocks_engine as engine;
pub use tui_blocks_types as types;

pub use keyboard::KeyboardInput;
pub use map::{handle_key_event, should_quit};
