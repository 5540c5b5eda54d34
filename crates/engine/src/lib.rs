//! Game loop module.
//!
//! Owns timing and nothing else: when gravity fires, how often input is
//! polled and when the run stops. Rendering, keyboard input and waiting are
//! reached through the [`RenderSink`], [`InputSource`] and [`Pacer`] traits,
//! so the loop runs unchanged in a terminal or in a test.

pub mod game_loop;
pub mod io;

pub use tui_blocks_core as core;
pub use tui_blocks_types as types;

pub use game_loop::{polls_per_tick, GameLoop, RunOutcome};
pub use io::{
    FrameLog, InputSource, InstantPacer, Pacer, RenderSink, ScriptedInput, ThreadPacer,
};
