//! TUI Blocks (workspace facade crate).
//!
//! Re-exports the workspace crates under one name:
//! `tui_blocks::{core, engine, input, term, types}`. The implementation lives
//! in the dedicated crates under `crates/`.

pub use tui_blocks_core as core;
pub use tui_blocks_engine as engine;
pub use tui_blocks_input as input;
pub use tui_blocks_term as term;
pub use tui_blocks_types as types;
