//! Board module - the grid of landed blocks and the line-clear cycle
//!
//! A 20x10 grid where each cell is empty or holds the kind of the piece that
//! landed there. Stored as a flat array for cache locality.
//! Coordinates are (row, col): row 0 is the top, row 19 the bottom.
//!
//! Clearing runs as a small state machine: `start_clearing` flags full rows,
//! then `advance_clearing` is called once per animation tick until it reports
//! completion.

use arrayvec::ArrayVec;

use crate::core::events::GameEvents;
use crate::core::piece::Piece;
use crate::types::{Cell, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_ROWS as usize) * (BOARD_COLS as usize);

/// Outcome of a fall check.
///
/// `Locked` means the piece's cells have already been written into the board;
/// the caller must drop the piece and never re-check it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallStatus {
    CanFall,
    Locked,
}

/// The playfield: landed cells plus clear-cycle state.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; BOARD_SIZE],
    /// Rows currently animating their clear, strictly decreasing indices.
    clearing_rows: ArrayVec<i8, 4>,
    /// Animation step counter, 0 at rest.
    clear_stage: u8,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
            clearing_rows: ArrayVec::new(),
            clear_stage: 0,
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if row < 0 || row >= BOARD_ROWS as i8 || col < 0 || col >= BOARD_COLS as i8 {
            return None;
        }
        Some((row as usize) * (BOARD_COLS as usize) + (col as usize))
    }

    pub fn rows(&self) -> u8 {
        BOARD_ROWS
    }

    pub fn cols(&self) -> u8 {
        BOARD_COLS
    }

    /// Get cell at (row, col). Returns None if out of bounds.
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if a cell holds a landed block. Out of bounds reads as empty.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Reset every cell to empty for a new game.
    pub fn clear(&mut self) {
        self.cells = [None; BOARD_SIZE];
        self.clearing_rows.clear();
        self.clear_stage = 0;
    }

    /// Raw view of all cells, row-major. Used by rendering.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Check whether the piece can keep falling, locking it if it cannot.
    ///
    /// If any of the piece's 4 cells rests on the bottom row or on a landed
    /// block, all 4 cells are written into the board with the piece's kind,
    /// `events.piece_landed()` fires, and `Locked` is returned. The tagged
    /// result exists precisely so callers don't re-check a locked piece:
    /// its coordinates are stale once its cells are on the board.
    pub fn check_fall(&mut self, piece: &Piece, events: &mut dyn GameEvents) -> FallStatus {
        for i in 0..4 {
            let row = piece.board_row(i);
            let col = piece.board_col(i);
            if row == BOARD_ROWS as i8 - 1 || self.is_occupied(row + 1, col) {
                for j in 0..4 {
                    self.set(piece.board_row(j), piece.board_col(j), Some(piece.kind()));
                }
                events.piece_landed();
                return FallStatus::Locked;
            }
        }
        FallStatus::CanFall
    }

    /// Whether any of the piece's cells overlaps a landed block.
    ///
    /// Used right after spawning to detect that the well has filled up and
    /// the game is over.
    pub fn overlaps(&self, piece: &Piece) -> bool {
        (0..4).any(|i| self.is_occupied(piece.board_row(i), piece.board_col(i)))
    }

    /// Scan for full rows and begin the clear animation.
    ///
    /// Rows are scanned bottom to top. The scan stops at the first completely
    /// empty row (everything above it is empty in a well-formed game) or once
    /// 4 full rows are flagged, the standard cap for a single lock.
    /// Returns true iff at least one row was flagged, firing
    /// `events.lines_clearing()` on the way.
    pub fn start_clearing(&mut self, events: &mut dyn GameEvents) -> bool {
        self.clearing_rows.clear();
        self.clear_stage = 0;

        for row in (0..BOARD_ROWS as i8).rev() {
            let filled = (0..BOARD_COLS as i8)
                .filter(|&col| self.is_occupied(row, col))
                .count();

            if filled == 0 {
                // Completely empty row, nothing above can be full.
                break;
            }
            if filled == BOARD_COLS as usize {
                self.clearing_rows.push(row);
                if self.clearing_rows.is_full() {
                    break;
                }
            }
        }

        let started = !self.clearing_rows.is_empty();
        if started {
            events.lines_clearing();
        }
        started
    }

    /// Whether a clear cycle is in progress.
    pub fn is_clearing(&self) -> bool {
        !self.clearing_rows.is_empty()
    }

    /// Rows currently being cleared, bottom-most first.
    pub fn clearing_rows(&self) -> &[i8] {
        &self.clearing_rows
    }

    /// Perform one step of the clear animation.
    ///
    /// Each step blanks two cells per flagged row, converging from the
    /// horizontal center outward. The step that blanks the outermost pair
    /// also commits: flagged rows are removed, fresh empty rows appear at
    /// the top, the cleared count is reported via `events.lines_cleared`,
    /// and `false` is returned. Every earlier step returns `true`.
    ///
    /// Calling this while no clear is in progress does nothing and returns
    /// `false`.
    pub fn advance_clearing(&mut self, events: &mut dyn GameEvents) -> bool {
        if self.clearing_rows.is_empty() {
            return false;
        }

        let cols = BOARD_COLS as i8;
        let mid = cols / 2;
        let stage = self.clear_stage as i8;
        for i in 0..self.clearing_rows.len() {
            let row = self.clearing_rows[i];
            if cols % 2 == 0 {
                self.set(row, mid + stage, None);
                self.set(row, mid - stage - 1, None);
            } else {
                self.set(row, mid - stage, None);
                self.set(row, mid + stage, None);
            }
        }

        self.clear_stage += 1;
        if self.clear_stage >= (BOARD_COLS / 2) {
            self.commit_cleared_rows(events);
            return false;
        }
        true
    }

    /// Remove the flagged rows and insert empty rows at the top.
    ///
    /// `clearing_rows` is strictly decreasing, so each removal shifts the
    /// remaining (higher) flagged rows down by one: the i-th stored index
    /// must be offset by the i removals already applied below it.
    fn commit_cleared_rows(&mut self, events: &mut dyn GameEvents) {
        let count = self.clearing_rows.len();
        let rows = std::mem::take(&mut self.clearing_rows);
        for (i, &row) in rows.iter().enumerate() {
            self.remove_row(row as usize + i);
        }
        self.clear_stage = 0;
        events.lines_cleared(count);
    }

    /// Delete one row, shifting everything above it down and blanking row 0.
    fn remove_row(&mut self, row: usize) {
        debug_assert!(row < BOARD_ROWS as usize);
        let width = BOARD_COLS as usize;

        // copy_within handles the overlapping ranges safely.
        for r in (1..=row).rev() {
            let src_start = (r - 1) * width;
            let dst_start = r * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::events::NullEvents;
    use crate::types::PieceKind;

    #[test]
    fn test_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 9), Some(9));
        assert_eq!(Board::index(1, 0), Some(10));
        assert_eq!(Board::index(19, 9), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(20, 0), None);
        assert_eq!(Board::index(0, 10), None);
    }

    #[test]
    fn test_set_get_and_occupancy() {
        let mut board = Board::new();
        assert!(!board.is_occupied(2, 2));

        assert!(board.set(2, 2, Some(PieceKind::T)));
        assert_eq!(board.get(2, 2), Some(Some(PieceKind::T)));
        assert!(board.is_occupied(2, 2));

        // Out of bounds is never occupied and set is rejected.
        assert!(!board.is_occupied(-1, 0));
        assert!(!board.set(20, 0, Some(PieceKind::T)));
    }

    #[test]
    fn test_remove_row_shifts_down() {
        let mut board = Board::new();
        board.set(17, 4, Some(PieceKind::I));
        board.set(18, 2, Some(PieceKind::L));

        board.remove_row(18);

        // Row 17's block moved to 18, row 18's block is gone, top is empty.
        assert_eq!(board.get(18, 4), Some(Some(PieceKind::I)));
        assert!(!board.is_occupied(17, 4));
        assert!(!board.is_occupied(18, 2));
        assert!((0..10).all(|col| !board.is_occupied(0, col)));
    }

    #[test]
    fn test_start_clearing_resets_previous_state() {
        let mut board = Board::new();
        for col in 0..10 {
            board.set(19, col, Some(PieceKind::S));
        }
        assert!(board.start_clearing(&mut NullEvents));
        assert_eq!(board.clearing_rows(), &[19]);

        // Starting again re-scans from scratch.
        board.clear();
        assert!(!board.start_clearing(&mut NullEvents));
        assert!(board.clearing_rows().is_empty());
        assert!(!board.is_clearing());
    }
}
