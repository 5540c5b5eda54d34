//! Piece catalog and piece geometry tests

use tui_blocks::core::{candidate_for, shape_offsets, shape_width, transpose, Piece};
use tui_blocks::types::{Command, PieceKind};

#[test]
fn test_every_shape_has_four_distinct_cells() {
    for kind in PieceKind::ALL {
        let shape = shape_offsets(kind);
        for (i, a) in shape.iter().enumerate() {
            for b in &shape[i + 1..] {
                assert_ne!(a, b, "{:?} repeats a cell", kind);
            }
        }
    }
}

#[test]
fn test_offsets_are_non_negative() {
    for kind in PieceKind::ALL {
        for (row, col) in shape_offsets(kind) {
            assert!(row >= 0 && col >= 0, "{:?} has a negative offset", kind);
        }
    }
}

#[test]
fn test_shape_width_is_one_plus_max_column() {
    for kind in PieceKind::ALL {
        let max_col = shape_offsets(kind).iter().map(|&(_, c)| c).max().unwrap();
        assert_eq!(shape_width(kind) as i8, max_col + 1);
    }
    assert_eq!(shape_width(PieceKind::I), 1);
    assert_eq!(shape_width(PieceKind::J), 3);
}

#[test]
fn test_rotate_twice_is_identity_for_every_shape() {
    for kind in PieceKind::ALL {
        let shape = shape_offsets(kind);
        assert_eq!(transpose(&transpose(&shape)), shape, "{:?}", kind);

        let mut piece = Piece::new(kind, (4, 4));
        piece.commit(Command::Rotate);
        piece.commit(Command::Rotate);
        assert_eq!(piece.offsets(), &shape);
        assert_eq!(piece.anchor(), (4, 4));
    }
}

#[test]
fn test_rotate_of_vertical_bar_is_horizontal() {
    let (anchor, offsets) = candidate_for(Command::Rotate, (2, 3), &shape_offsets(PieceKind::I));
    assert_eq!(anchor, (2, 3));
    assert_eq!(offsets, [(0, 0), (0, 1), (0, 2), (0, 3)]);
}

#[test]
fn test_square_is_unchanged_by_rotate() {
    let shape = shape_offsets(PieceKind::O);
    let mut rotated = transpose(&shape);
    let mut original = shape;
    rotated.sort();
    original.sort();
    assert_eq!(rotated, original);
}

#[test]
fn test_candidate_for_each_command() {
    let offsets = shape_offsets(PieceKind::T);
    assert_eq!(candidate_for(Command::Down, (3, 3), &offsets).0, (4, 3));
    assert_eq!(candidate_for(Command::Left, (3, 3), &offsets).0, (3, 2));
    assert_eq!(candidate_for(Command::Right, (3, 3), &offsets).0, (3, 4));
    assert_eq!(candidate_for(Command::SpawnCheck, (3, 3), &offsets), ((3, 3), offsets));
    for command in [Command::Down, Command::Left, Command::Right] {
        assert_eq!(candidate_for(command, (3, 3), &offsets).1, offsets);
    }
}

#[test]
fn test_cells_are_anchor_plus_offsets() {
    let piece = Piece::new(PieceKind::Z, (10, 6));
    assert_eq!(piece.cells(), [(10, 7), (11, 7), (11, 6), (12, 6)]);
}
