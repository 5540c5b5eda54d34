//! Piece module - the single movable piece
//!
//! A piece only does geometry. It computes where a command would take it and
//! applies that once the board has checked the result; whether a move is legal
//! is decided entirely by [`Board`](crate::board::Board).

use crate::pieces::{shape_offsets, transpose, PieceShape};
use crate::types::{Command, Coord, PieceKind};

/// Anchor and offsets produced by [`candidate_for`]
pub type Candidate = (Coord, PieceShape);

/// Compute the anchor and offsets a command would produce.
pub fn candidate_for(command: Command, anchor: Coord, offsets: &PieceShape) -> Candidate {
    let (row, col) = anchor;
    match command {
        Command::Down => ((row + 1, col), *offsets),
        Command::Left => ((row, col - 1), *offsets),
        Command::Right => ((row, col + 1), *offsets),
        Command::SpawnCheck => (anchor, *offsets),
        Command::Rotate => (anchor, transpose(offsets)),
    }
}

/// A piece instance on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    anchor: Coord,
    offsets: PieceShape,
}

impl Piece {
    /// Create a piece of `kind` in its catalog orientation at `anchor`
    pub fn new(kind: PieceKind, anchor: Coord) -> Self {
        Self {
            kind,
            anchor,
            offsets: shape_offsets(kind),
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn anchor(&self) -> Coord {
        self.anchor
    }

    pub fn offsets(&self) -> &PieceShape {
        &self.offsets
    }

    /// Absolute cells occupied by the piece
    pub fn cells(&self) -> [Coord; 4] {
        let (row, col) = self.anchor;
        self.offsets.map(|(dr, dc)| (row + dr, col + dc))
    }

    /// Where `command` would take this piece, without moving it
    pub fn candidate_for(&self, command: Command) -> Candidate {
        candidate_for(command, self.anchor, &self.offsets)
    }

    /// Apply `command`. Callers validate the candidate first.
    pub fn commit(&mut self, command: Command) {
        let (anchor, offsets) = self.candidate_for(command);
        self.anchor = anchor;
        self.offsets = offsets;
    }
}
