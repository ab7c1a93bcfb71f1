//! Piece tests: movement, rotation, and the atomic rejection rules.

use blockfall::core::{create_piece, Board, FallStatus, NullEvents};
use blockfall::types::{PieceKind, BOARD_COLS};

#[test]
fn test_move_left_then_right_restores_anchor() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let mut piece = create_piece(kind);
        piece.set_y(5);
        let x = piece.x();
        assert!(piece.move_left(&board));
        assert!(piece.move_right(&board));
        assert_eq!(piece.x(), x, "{kind:?}");
    }
}

#[test]
fn test_rotate_then_unrotate_restores_index() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let mut piece = create_piece(kind);
        piece.set_x(4);
        piece.set_y(8);
        let start = piece.rotation();
        if piece.rotate(1, &board) {
            assert!(piece.rotate(-1, &board));
            assert_eq!(piece.rotation(), start, "{kind:?}");
        }
    }
}

#[test]
fn test_rotation_index_wraps_modulo_frame_count() {
    let board = Board::new();
    let mut piece = create_piece(PieceKind::Z);
    piece.set_x(4);
    piece.set_y(8);
    assert_eq!(piece.frame_count(), 2);

    piece.set_rotation(1);
    assert!(piece.rotate(1, &board));
    assert_eq!(piece.rotation(), 0);

    // (0 + 3) mod 2 = 1
    assert!(piece.rotate(3, &board));
    assert_eq!(piece.rotation(), 1);

    // Negative amounts normalize into range.
    assert!(piece.rotate(-3, &board));
    assert_eq!(piece.rotation(), 0);
}

#[test]
fn test_move_left_stops_at_wall() {
    let board = Board::new();
    let mut piece = create_piece(PieceKind::I);
    piece.set_y(5);
    // Walk to the wall, then one more is rejected without moving.
    while piece.leftmost_board_col() > 0 {
        assert!(piece.move_left(&board));
    }
    let x = piece.x();
    assert!(!piece.move_left(&board));
    assert_eq!(piece.x(), x);
}

#[test]
fn test_move_right_stops_at_wall() {
    let board = Board::new();
    let mut piece = create_piece(PieceKind::O);
    piece.set_y(5);
    while piece.rightmost_board_col() < BOARD_COLS as i8 - 1 {
        assert!(piece.move_right(&board));
    }
    let x = piece.x();
    assert!(!piece.move_right(&board));
    assert_eq!(piece.x(), x);
}

#[test]
fn test_move_rejected_by_landed_block() {
    let mut board = Board::new();
    let mut piece = create_piece(PieceKind::O);
    piece.set_x(4);
    piece.set_y(10);
    // Block immediately left of the square's top-left cell.
    board.set(10, 3, Some(PieceKind::T));

    assert!(!piece.move_left(&board));
    assert_eq!(piece.x(), 4);

    // The other direction is still open.
    assert!(piece.move_right(&board));
    assert_eq!(piece.x(), 5);
}

#[test]
fn test_rotate_rejected_by_floor() {
    let board = Board::new();
    let mut piece = create_piece(PieceKind::I);
    piece.set_x(3);
    piece.set_y(17); // horizontal frame sits on row 18
    // Vertical frame would span rows 17..=20, past the bottom edge.
    assert!(!piece.rotate(1, &board));
    assert_eq!(piece.rotation(), 0);
}

#[test]
fn test_rotate_rejected_by_occupancy_restores_index() {
    let mut board = Board::new();
    let mut piece = create_piece(PieceKind::T);
    piece.set_x(4);
    piece.set_y(8);
    // Frame 1 of T adds a cell at local (1, 2); block that board cell.
    board.set(10, 5, Some(PieceKind::S));

    assert!(!piece.rotate(1, &board));
    assert_eq!(piece.rotation(), 0);
    // The same rotation works once the blocker is gone.
    board.set(10, 5, None);
    assert!(piece.rotate(1, &board));
    assert_eq!(piece.rotation(), 1);
}

#[test]
fn test_square_rotation_is_identity() {
    let board = Board::new();
    let mut piece = create_piece(PieceKind::O);
    piece.set_y(5);
    assert_eq!(piece.frame_count(), 1);
    assert!(piece.rotate(1, &board));
    assert_eq!(piece.rotation(), 0);
}

#[test]
fn test_fall_advances_anchor_until_locked() {
    let mut board = Board::new();
    let mut piece = create_piece(PieceKind::O);
    // Square spans local rows 0..=1; from y=0 it can descend to y=18.
    let mut drops = 0;
    while piece.fall(&mut board, &mut NullEvents) == FallStatus::CanFall {
        drops += 1;
    }
    assert_eq!(drops, 18);
    assert_eq!(piece.y(), 18);
    // The lock wrote the cells at the resting position.
    assert!(board.is_occupied(18, 3));
    assert!(board.is_occupied(19, 4));
}

#[test]
fn test_every_frame_has_four_cells() {
    for kind in PieceKind::ALL {
        let piece = create_piece(kind);
        for i in 0..4 {
            let (col, row) = piece.local_cell(i);
            assert_eq!((col, row), (piece.local_col(i), piece.local_row(i)));
        }
    }
}
