//! Terminal rendering module.
//!
//! Turns board snapshots into text and puts that text on screen.
//!
//! - [`view`]: pure snapshot-to-lines layout, unit-testable
//! - [`renderer`]: crossterm full-screen redraws, welcome banner, raw mode
//! - [`json`]: JSON-lines render sink for headless runs

pub mod json;
pub mod renderer;
pub mod view;

pub use tui_blocks_core as core;
pub use tui_blocks_engine as engine;
pub use tui_blocks_types as types;

pub use json::JsonLinesSink;
pub use renderer::{encode_full_into, TerminalRenderer};
pub use view::{glyph, TextView, INSTRUCTIONS, WELCOME};
