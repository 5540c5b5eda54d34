//! Pieces module - the fixed shape catalog
//!
//! Every shape is four `(row, col)` offsets from the piece anchor. The table is
//! fixed for the whole run; spawn column selection depends on each shape's
//! width, so order and offsets must not change.

use crate::types::{Coord, PieceKind};

/// Shape of a piece - 4 cell offsets from the piece anchor
pub type PieceShape = [Coord; 4];

/// Offsets for every kind, indexed by `PieceKind::index()`
const CATALOG: [PieceShape; PieceKind::COUNT] = [
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    [(0, 0), (1, 0), (0, 1), (1, 1)],
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(0, 0), (1, 0), (1, 1), (2, 0)],
    [(0, 1), (1, 1), (1, 0), (2, 0)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 0)],
];

/// Get the spawn offsets for a piece kind
pub fn shape_offsets(kind: PieceKind) -> PieceShape {
    CATALOG[kind.index()]
}

/// Number of columns the spawn shape spans (1 + max column offset)
pub fn shape_width(kind: PieceKind) -> u8 {
    let max_col = CATALOG[kind.index()]
        .iter()
        .map(|&(_, col)| col)
        .max()
        .unwrap_or(0);
    (max_col + 1) as u8
}

/// Swap row and column of every offset.
///
/// This is a transpose, not a 90° turn: it mirrors the shape across its
/// main diagonal and is its own inverse.
pub fn transpose(shape: &PieceShape) -> PieceShape {
    shape.map(|(row, col)| (col, row))
}
