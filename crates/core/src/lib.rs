//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains every rule of the game: the shape catalog, piece
//! geometry, collision, locking, row clearing, spawning, scoring and
//! leveling. It does no terminal I/O and owns no clock, so the same board
//! can be driven by the interactive loop, a headless runner or a unit test.
//!
//! # Module Structure
//!
//! - [`pieces`]: the seven fixed shapes as `(row, col)` offsets
//! - [`piece`]: a movable piece that proposes moves without applying them
//! - [`board`]: 20x10 locked grid, collision predicate and the lock/clear/spawn cycle
//! - [`status`]: `Playing` and the two terminal game-over states
//! - [`rng`]: injectable random sources (entropy, seeded LCG, scripted)
//! - [`snapshot`]: render frames with the active piece overlaid
//!
//! # Game Rules
//!
//! - Gravity moves the active piece down one row per tick; when it can't, the piece locks.
//! - Full rows are removed and everything above falls by one row. Clears score nothing.
//! - A locked cell left in row 0 ends the game; so does a blocked spawn.
//! - Score counts spawned pieces. Once score exceeds `20 * level` the level rises
//!   and the gravity interval shrinks by a factor of 0.75.
//! - Rotation swaps the row and column of each offset (a transpose).
//!
//! # Example
//!
//! ```
//! use tui_blocks_core::{Board, ScriptedRng};
//! use tui_blocks_types::Command;
//!
//! // Always spawn catalog shape 0 (a vertical bar) at column 0.
//! let mut board = Board::new(ScriptedRng::new(vec![0, 0]));
//! assert!(board.spawn());
//! assert_eq!(board.score(), 1);
//!
//! // The left wall rejects the move silently.
//! board.try_move(Command::Left);
//! assert_eq!(board.active().unwrap().anchor(), (0, 0));
//!
//! board.try_move(Command::Down);
//! assert_eq!(board.active().unwrap().anchor(), (1, 0));
//! ```

pub mod board;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod snapshot;
pub mod status;

pub use tui_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows, MoveOutcome, BOARD_SIZE};
pub use piece::{candidate_for, Piece};
pub use pieces::{shape_offsets, shape_width, transpose, PieceShape};
pub use rng::{EntropyRng, RandomSource, ScriptedRng, SimpleRng};
pub use snapshot::{Snapshot, Tile, TileGrid};
pub use status::{GameOver, GameStatus};
