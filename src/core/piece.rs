//! The falling piece: anchor position, rotation index, and the movement and
//! rotation rules it validates against the board.
//!
//! A piece never writes to the board itself; locking happens inside
//! `Board::check_fall` when the piece can no longer descend.

use crate::core::board::{Board, FallStatus};
use crate::core::events::GameEvents;
use crate::core::pieces::PieceFrame;
use crate::types::{PieceKind, BLOCK_SIZE, BOARD_COLS, BOARD_ROWS};

/// A falling tetromino-like shape.
#[derive(Debug, Clone)]
pub struct Piece {
    kind: PieceKind,
    /// One frame per distinct orientation, each exactly 4 (col, row) offsets.
    frames: &'static [PieceFrame],
    /// Current index into `frames`.
    rotation: usize,
    /// Anchor column on the board.
    x: i8,
    /// Anchor row on the board.
    y: i8,
}

/// Spawn anchor for new pieces (col, row).
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

impl Piece {
    pub fn new(kind: PieceKind, frames: &'static [PieceFrame]) -> Self {
        debug_assert!(!frames.is_empty());
        Self {
            kind,
            frames,
            rotation: 0,
            x: SPAWN_POSITION.0,
            y: SPAWN_POSITION.1,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    pub fn rotation(&self) -> usize {
        self.rotation
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Column offset of cell `i` (0..4) in the current frame.
    pub fn local_col(&self, i: usize) -> i8 {
        self.frames[self.rotation][i].0
    }

    /// Row offset of cell `i` (0..4) in the current frame.
    pub fn local_row(&self, i: usize) -> i8 {
        self.frames[self.rotation][i].1
    }

    /// Cell `i` as a (col, row) offset pair.
    pub fn local_cell(&self, i: usize) -> (i8, i8) {
        self.frames[self.rotation][i]
    }

    /// Board column of cell `i`.
    pub fn board_col(&self, i: usize) -> i8 {
        self.x + self.local_col(i)
    }

    /// Board row of cell `i`.
    pub fn board_row(&self, i: usize) -> i8 {
        self.y + self.local_row(i)
    }

    /// Cell `i` as an absolute (col, row) board position.
    pub fn board_cell(&self, i: usize) -> (i8, i8) {
        (self.board_col(i), self.board_row(i))
    }

    /// Smallest column offset in the current frame.
    pub fn leftmost_local_col(&self) -> i8 {
        (0..4).map(|i| self.local_col(i)).min().unwrap_or(0)
    }

    /// Largest column offset in the current frame.
    pub fn rightmost_local_col(&self) -> i8 {
        (0..4).map(|i| self.local_col(i)).max().unwrap_or(0)
    }

    pub fn leftmost_board_col(&self) -> i8 {
        self.x + self.leftmost_local_col()
    }

    pub fn rightmost_board_col(&self) -> i8 {
        self.x + self.rightmost_local_col()
    }

    /// Bounding height of the current frame in layout units.
    ///
    /// Only used by renderers to position the next-piece preview.
    pub fn height(&self) -> i32 {
        let max_row = (0..4).map(|i| self.local_row(i)).max().unwrap_or(0);
        (max_row as i32 + 1) * BLOCK_SIZE
    }

    /// Try to descend one row.
    ///
    /// Delegates to `Board::check_fall`; on `Locked` the piece's cells are
    /// already on the board and the caller must drop it.
    pub fn fall(&mut self, board: &mut Board, events: &mut dyn GameEvents) -> FallStatus {
        let status = board.check_fall(self, events);
        if status == FallStatus::CanFall {
            self.y += 1;
        }
        status
    }

    /// Shift one column left if the edge and landed blocks allow it.
    /// The anchor changes all-or-nothing.
    pub fn move_left(&mut self, board: &Board) -> bool {
        if self.leftmost_board_col() <= 0 {
            return false;
        }
        for i in 0..4 {
            if board.is_occupied(self.board_row(i), self.board_col(i) - 1) {
                return false;
            }
        }
        self.x -= 1;
        true
    }

    /// Shift one column right if the edge and landed blocks allow it.
    pub fn move_right(&mut self, board: &Board) -> bool {
        if self.rightmost_board_col() >= BOARD_COLS as i8 - 1 {
            return false;
        }
        for i in 0..4 {
            if board.is_occupied(self.board_row(i), self.board_col(i) + 1) {
                return false;
            }
        }
        self.x += 1;
        true
    }

    /// Rotate by `amount` frames (negative for counter-clockwise).
    ///
    /// The new index is applied provisionally; if any resulting cell falls
    /// outside the board or on a landed block, the previous index is
    /// restored and false is returned. There is no wall-kick search: a
    /// rotation either fits in place or is rejected.
    pub fn rotate(&mut self, amount: i32, board: &Board) -> bool {
        let old = self.rotation;
        let count = self.frames.len() as i32;
        self.rotation = (self.rotation as i32 + amount).rem_euclid(count) as usize;

        for i in 0..4 {
            let row = self.board_row(i);
            let col = self.board_col(i);
            if row < 0 || row >= BOARD_ROWS as i8 || col < 0 || col >= BOARD_COLS as i8 {
                self.rotation = old;
                return false;
            }
            if board.is_occupied(row, col) {
                self.rotation = old;
                return false;
            }
        }

        true
    }

    /// Move the anchor directly. Used by tests and preview layout.
    pub fn set_x(&mut self, x: i8) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: i8) {
        self.y = y;
    }

    pub fn set_rotation(&mut self, rotation: usize) {
        debug_assert!(rotation < self.frames.len());
        self.rotation = rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pieces::create_piece;

    #[test]
    fn test_spawn_state() {
        let piece = create_piece(PieceKind::T);
        assert_eq!((piece.x(), piece.y()), SPAWN_POSITION);
        assert_eq!(piece.rotation(), 0);
        assert_eq!(piece.frame_count(), 4);
    }

    #[test]
    fn test_board_cells_are_anchor_plus_offsets() {
        let mut piece = create_piece(PieceKind::O);
        piece.set_x(4);
        piece.set_y(7);
        for i in 0..4 {
            assert_eq!(piece.board_col(i), 4 + piece.local_col(i));
            assert_eq!(piece.board_row(i), 7 + piece.local_row(i));
        }
    }

    #[test]
    fn test_height_uses_block_units() {
        let line = create_piece(PieceKind::I);
        // Horizontal frame occupies rows 0..=1.
        assert_eq!(line.height(), 2 * BLOCK_SIZE);

        let mut vertical = create_piece(PieceKind::I);
        vertical.set_rotation(1);
        assert_eq!(vertical.height(), 4 * BLOCK_SIZE);
    }
}
