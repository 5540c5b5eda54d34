//! Board module - locked grid, active piece and game progression
//!
//! The board is a 20x10 grid of locked cells stored as a flat row-major array.
//! The active piece is kept separately and never written into the grid until
//! it locks, so collision checks only ever compare candidate cells against
//! locked cells and the board edges.
//!
//! Coordinates are `(row, col)`: row 0 is the top, col 0 is the left edge.
//! New pieces appear in row 0 at a random column.

use std::time::Duration;

use arrayvec::ArrayVec;
use log::debug;

use crate::piece::Piece;
use crate::pieces::{shape_width, PieceShape};
use crate::rng::RandomSource;
use crate::status::{GameOver, GameStatus};
use crate::types::{Command, Coord, GameConfig, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
pub const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row indices removed by one clear pass, top to bottom
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// Result of [`Board::try_move`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The candidate was free and the piece moved
    Moved,
    /// The move was illegal, or there was nothing to move. Nothing changed.
    Rejected,
    /// A blocked `Down` locked the piece and the next piece spawned
    Landed { cleared: ClearedRows },
    /// A blocked `Down` locked the piece and ended the game
    Ended(GameOver),
}

/// The game board plus the single active piece and progression counters
#[derive(Debug, Clone)]
pub struct Board<R> {
    /// Locked cells, row-major (row * WIDTH + col)
    cells: [bool; BOARD_SIZE],
    active: Option<Piece>,
    /// Pieces successfully spawned
    score: u32,
    level: u32,
    /// Gravity interval in seconds
    refresh_rate: f64,
    status: GameStatus,
    config: GameConfig,
    rng: R,
}

impl<R: RandomSource> Board<R> {
    /// Create an empty board with the default rules
    pub fn new(rng: R) -> Self {
        Self::with_config(GameConfig::default(), rng)
    }

    /// Create an empty board with custom rules
    pub fn with_config(config: GameConfig, rng: R) -> Self {
        Self {
            cells: [false; BOARD_SIZE],
            active: None,
            score: 0,
            level: 1,
            refresh_rate: config.base_refresh_secs,
            status: GameStatus::Playing,
            config,
            rng,
        }
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return None;
        }
        Some((row as usize) * WIDTH + (col as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// True if the cell is in bounds and locked
    pub fn is_locked(&self, row: i8, col: i8) -> bool {
        Self::index(row, col).is_some_and(|idx| self.cells[idx])
    }

    /// Set a locked cell directly. Returns false if out of bounds.
    ///
    /// Used for building positions in tests and tools; play only locks
    /// cells through landing pieces.
    pub fn set_locked(&mut self, row: i8, col: i8, locked: bool) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = locked;
                true
            }
            None => false,
        }
    }

    /// Number of locked cells on the board
    pub fn locked_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Locked cells of one row, left to right. `None` past the bottom row.
    pub fn row(&self, row: usize) -> Option<&[bool]> {
        if row >= HEIGHT {
            return None;
        }
        let start = row * WIDTH;
        Some(&self.cells[start..start + WIDTH])
    }

    /// Check if a row has no empty cell
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row).is_some_and(|cells| cells.iter().all(|&c| c))
    }

    fn row_has_locked(&self, row: usize) -> bool {
        self.row(row).is_some_and(|cells| cells.iter().any(|&c| c))
    }

    /// Check whether a piece at `anchor` with `offsets` would leave the board
    /// or overlap a locked cell.
    ///
    /// All movement and spawning goes through this predicate.
    pub fn is_blocked(&self, anchor: Coord, offsets: &PieceShape) -> bool {
        let (row, col) = anchor;
        offsets.iter().any(|&(dr, dc)| {
            let r = row as i16 + dr as i16;
            let c = col as i16 + dc as i16;
            if r < 0 || r >= HEIGHT as i16 || c < 0 || c >= WIDTH as i16 {
                return true;
            }
            self.cells[(r as usize) * WIDTH + c as usize]
        })
    }

    /// Apply a command to the active piece.
    ///
    /// Illegal `Left`/`Right`/`Rotate` moves are rejected without any state
    /// change. A blocked `Down` locks the piece, clears full rows, checks for
    /// game over and spawns the next piece.
    pub fn try_move(&mut self, command: Command) -> MoveOutcome {
        if self.status.is_terminal() {
            return MoveOutcome::Rejected;
        }
        let Some(piece) = self.active.as_ref() else {
            return MoveOutcome::Rejected;
        };

        let (anchor, offsets) = piece.candidate_for(command);
        let blocked = self.is_blocked(anchor, &offsets);

        match (command, blocked) {
            (Command::Down, true) => self.land(),
            (Command::Left | Command::Right | Command::Rotate | Command::SpawnCheck, true) => {
                MoveOutcome::Rejected
            }
            (_, false) => {
                if let Some(piece) = self.active.as_mut() {
                    piece.commit(command);
                }
                MoveOutcome::Moved
            }
        }
    }

    /// Lock the active piece, clear rows, then spawn or end the game.
    fn land(&mut self) -> MoveOutcome {
        let Some(piece) = self.active.take() else {
            return MoveOutcome::Rejected;
        };

        for (row, col) in piece.cells() {
            self.set_locked(row, col, true);
        }
        debug!("locked {:?} at {:?}", piece.kind(), piece.anchor());

        let cleared = self.clear_full_rows();
        if !cleared.is_empty() {
            debug!("cleared rows {:?}", cleared.as_slice());
        }

        if self.row_has_locked(0) {
            self.status = GameStatus::GameOverTopReached;
            debug!("top row reached, score {}", self.score);
            return MoveOutcome::Ended(GameOver::TopReached);
        }

        if !self.spawn() {
            return MoveOutcome::Ended(GameOver::NoSpawn);
        }

        MoveOutcome::Landed { cleared }
    }

    /// Remove every full row and let the rows above fall into the gap.
    ///
    /// Two-pointer compaction from the bottom: non-full rows are copied down
    /// to the write position, then the rows left over at the top are emptied.
    /// Returns the removed row indices, top to bottom.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_row = HEIGHT;

        for read_row in (0..HEIGHT).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * WIDTH;
                    self.cells.copy_within(src..src + WIDTH, write_row * WIDTH);
                }
            }
        }

        for cell in &mut self.cells[..write_row * WIDTH] {
            *cell = false;
        }

        cleared.reverse();
        cleared
    }

    /// Spawn a random piece in row 0.
    ///
    /// Picks a kind uniformly, then a column uniformly in `[0, W - width]`.
    /// On success the piece becomes active, the score goes up by one and
    /// levels are re-evaluated. If the spawn cells are blocked the game ends
    /// with [`GameOver::NoSpawn`] and the score is unchanged.
    pub fn spawn(&mut self) -> bool {
        if self.status.is_terminal() {
            return false;
        }

        let kind_idx = self.rng.next_below(PieceKind::COUNT as u32) as usize;
        let kind = PieceKind::ALL[kind_idx % PieceKind::COUNT];
        let max_col = BOARD_WIDTH - shape_width(kind);
        let col = self.rng.next_below(max_col as u32 + 1) as i8;

        let piece = Piece::new(kind, (0, col));
        let (anchor, offsets) = piece.candidate_for(Command::SpawnCheck);
        if self.is_blocked(anchor, &offsets) {
            self.active = None;
            self.status = GameStatus::GameOverNoSpawn;
            debug!("spawn of {:?} at column {} blocked", kind, col);
            return false;
        }

        self.active = Some(piece);
        self.score += 1;
        self.check_level_up();
        true
    }

    /// Put a specific piece in play, replacing any active piece.
    ///
    /// Returns false (and changes nothing) if the piece would be blocked or
    /// the game is over. Does not touch the score.
    pub fn place(&mut self, piece: Piece) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        let (anchor, offsets) = piece.candidate_for(Command::SpawnCheck);
        if self.is_blocked(anchor, &offsets) {
            return false;
        }
        self.active = Some(piece);
        true
    }

    fn check_level_up(&mut self) {
        let step = self.config.level_step.max(1);
        while self.score > step * self.level {
            self.level += 1;
            self.refresh_rate *= self.config.speedup;
            debug!(
                "level {} reached, gravity every {:.3}s",
                self.level, self.refresh_rate
            );
        }
    }
}

impl<R> Board<R> {
    /// Pieces successfully spawned so far
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Current level, starting at 1
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Gravity interval in seconds
    pub fn refresh_rate(&self) -> f64 {
        self.refresh_rate
    }

    /// Gravity interval as a `Duration`
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs_f64(self.refresh_rate)
    }

    /// Current lifecycle state
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game has ended
    pub fn is_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// The piece currently in play, if any
    pub fn active(&self) -> Option<&Piece> {
        self.active.as_ref()
    }

    /// Rules this board was built with
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The random source used for spawning
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Locked cells as a flat row-major slice
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }
}
