//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data with no external dependencies, so they can be used
//! by the core rules, the game loop, the keyboard mapping and the renderer alike.
//!
//! # Board Dimensions
//!
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Coordinates**: `(row, col)` pairs; `(0, 0)` is the top-left cell
//! - **Spawn row**: 0, at a random column that keeps the whole shape on the board
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_REFRESH_SECS` | 0.3 | Gravity interval at level 1 |
//! | `POLL_INTERVAL_MS` | 100 | Input sub-interval between gravity ticks |
//! | `SPEEDUP_FACTOR` | 0.75 | Interval multiplier applied per level-up |
//! | `LEVEL_STEP` | 20 | Level rises once score exceeds `LEVEL_STEP * level` |
//!
//! # Examples
//!
//! ```
//! use tui_blocks_types::{Command, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_index(1), Some(PieceKind::O));
//! assert_eq!(PieceKind::O.index(), 1);
//! assert!(Command::Rotate.is_player_command());
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use std::time::Duration;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity interval at level 1, in seconds
pub const BASE_REFRESH_SECS: f64 = 0.3;

/// Input polling sub-interval in milliseconds
pub const POLL_INTERVAL_MS: u64 = 100;

/// Gravity interval multiplier applied on every level-up
pub const SPEEDUP_FACTOR: f64 = 0.75;

/// Score needed per level before the next level-up
pub const LEVEL_STEP: u32 = 20;

/// A `(row, col)` pair. Used both for absolute cells and for offsets from an anchor.
pub type Coord = (i8, i8);

/// The seven catalog piece kinds, in catalog order.
///
/// The names follow the usual tetromino letters; the actual cells live in the
/// core catalog and are defined as relative offsets, not as named drawings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    S,
    T,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds in catalog order. Random spawn selection indexes into this.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Number of kinds in the catalog
    pub const COUNT: usize = 7;

    /// Catalog position of this kind
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::S => 2,
            PieceKind::T => 3,
            PieceKind::Z => 4,
            PieceKind::J => 5,
            PieceKind::L => 6,
        }
    }

    /// Look up a kind by catalog position
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_blocks_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_index(6), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Commands that move the active piece
///
/// `Down` is issued by gravity, `Left`/`Right`/`Rotate` come from input and
/// `SpawnCheck` is only used to validate a freshly spawned piece in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move one row down
    Down,
    /// Move one column left
    Left,
    /// Move one column right
    Right,
    /// Swap the row and column of every offset
    Rotate,
    /// Keep the piece where it is
    SpawnCheck,
}

impl Command {
    /// True for the commands a player may issue between gravity ticks
    pub fn is_player_command(&self) -> bool {
        matches!(self, Command::Left | Command::Right | Command::Rotate)
    }
}

/// Tunable rules for a single run.
///
/// Board dimensions are fixed at compile time; everything else defaults to the
/// constants above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Gravity interval at level 1, in seconds
    pub base_refresh_secs: f64,
    /// Input polling sub-interval, in milliseconds
    pub poll_interval_ms: u64,
    /// Level rises while `score > level_step * level`
    pub level_step: u32,
    /// Interval multiplier per level-up
    pub speedup: f64,
}

impl GameConfig {
    /// Input polling sub-interval as a `Duration`
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_refresh_secs: BASE_REFRESH_SECS,
            poll_interval_ms: POLL_INTERVAL_MS,
            level_step: LEVEL_STEP,
            speedup: SPEEDUP_FACTOR,
        }
    }
}
