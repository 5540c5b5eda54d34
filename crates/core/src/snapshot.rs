//! Render snapshot - the board as the outside world sees it
//!
//! Locked cells and the active piece are merged into one grid here and only
//! here; the board itself keeps them apart.

use serde::Serialize;

use crate::board::Board;
use crate::status::GameStatus;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// What occupies a cell in a rendered frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tile {
    #[default]
    Empty,
    Locked,
    Active,
}

/// Grid rows, top to bottom
pub type TileGrid = [[Tile; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Everything a render sink needs to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub grid: TileGrid,
    pub score: u32,
    pub level: u32,
    /// Gravity interval in seconds
    pub refresh_rate: f64,
    pub status: GameStatus,
}

impl Snapshot {
    /// Number of cells showing `tile`
    pub fn count(&self, tile: Tile) -> usize {
        self.grid.iter().flatten().filter(|&&t| t == tile).count()
    }

    pub fn reason(&self) -> Option<&'static str> {
        self.status.reason()
    }
}

impl<R> Board<R> {
    /// Build a frame: locked cells overlaid with the active piece
    pub fn snapshot(&self) -> Snapshot {
        let mut grid: TileGrid = [[Tile::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

        for (cell, locked) in grid.iter_mut().flatten().zip(self.cells()) {
            if *locked {
                *cell = Tile::Locked;
            }
        }

        if let Some(piece) = self.active() {
            for (row, col) in piece.cells() {
                if let Some(cell) = grid
                    .get_mut(row as usize)
                    .and_then(|r| r.get_mut(col as usize))
                {
                    *cell = Tile::Active;
                }
            }
        }

        Snapshot {
            grid,
            score: self.score(),
            level: self.level(),
            refresh_rate: self.refresh_rate(),
            status: self.status(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use crate::rng::ScriptedRng;
    use crate::types::PieceKind;

    #[test]
    fn test_active_piece_overlays_locked_grid() {
        let mut board = Board::new(ScriptedRng::new(vec![0, 0]));
        board.set_locked(19, 0, true);
        assert!(board.place(Piece::new(PieceKind::O, (3, 4))));

        let snap = board.snapshot();
        assert_eq!(snap.grid[19][0], Tile::Locked);
        assert_eq!(snap.grid[3][4], Tile::Active);
        assert_eq!(snap.grid[4][5], Tile::Active);
        assert_eq!(snap.count(Tile::Active), 4);
        assert_eq!(snap.count(Tile::Locked), 1);
        // The grid itself is untouched by the overlay.
        assert!(!board.is_locked(3, 4));
    }

    #[test]
    fn test_snapshot_serializes_tiles_as_names() {
        let board = Board::new(ScriptedRng::new(vec![0, 0]));
        let value = serde_json::to_value(board.snapshot()).unwrap();
        assert_eq!(value["grid"][0][0], "empty");
        assert_eq!(value["status"], "playing");
        assert_eq!(value["level"], 1);
    }
}
