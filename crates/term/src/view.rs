//! TextView: maps a [`Snapshot`] into lines of terminal text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Snapshot, Tile};

/// Key help shown above the board and in the welcome banner.
pub const INSTRUCTIONS: &str =
    "Press \"j\" to move Left, \"l\" to move Right, and \"k\" to Invert the piece. \"q\" quits.";

/// Welcome banner lines, shown once before the first piece spawns.
pub const WELCOME: [&str; 3] = [
    "Welcome to Tetris!",
    INSTRUCTIONS,
    "Press any key to acknowledge.",
];

/// Character used for a tile
pub fn glyph(tile: Tile) -> char {
    match tile {
        Tile::Empty => ' ',
        Tile::Locked => '#',
        Tile::Active => '@',
    }
}

/// Text layout for the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for TextView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl TextView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Render a frame: help line, framed board, points and level.
    pub fn render_lines(&self, frame: &Snapshot) -> Vec<String> {
        let cols = frame.grid.first().map_or(0, |row| row.len());
        let inner = cols * self.cell_w as usize;
        let border = format!("+{}+", "-".repeat(inner));

        let mut lines = Vec::with_capacity(frame.grid.len() + 6);
        lines.push(INSTRUCTIONS.to_string());
        lines.push(border.clone());
        for row in &frame.grid {
            let mut line = String::with_capacity(inner + 2);
            line.push('|');
            for &tile in row {
                for _ in 0..self.cell_w {
                    line.push(glyph(tile));
                }
            }
            line.push('|');
            lines.push(line);
        }
        lines.push(border);
        lines.push(format!("Points: {}", frame.score));
        lines.push(format!("Level: {}", frame.level));
        if let Some(reason) = frame.reason() {
            lines.push(reason.to_string());
        }
        lines
    }
}
