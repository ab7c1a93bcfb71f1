//! Shape tables and the piece factory.
//!
//! Each shape carries one frame per distinct orientation; a frame is 4
//! (col, row) offsets from the piece anchor. Symmetric shapes get fewer
//! frames: the square has 1, the line/S/Z have 2, the rest have 4.

use crate::core::piece::Piece;
use crate::types::PieceKind;

/// One cell of a frame: (column offset, row offset) from the anchor.
pub type CellOffset = (i8, i8);

/// One rotation frame - exactly 4 cells.
pub type PieceFrame = [CellOffset; 4];

const J_FRAMES: [PieceFrame; 4] = [
    [(3, 0), (3, 1), (2, 1), (1, 1)],
    [(3, 2), (2, 2), (2, 1), (2, 0)],
    [(1, 2), (1, 1), (2, 1), (3, 1)],
    [(1, 0), (2, 0), (2, 1), (2, 2)],
];

const S_FRAMES: [PieceFrame; 2] = [
    [(0, 1), (1, 1), (1, 0), (2, 0)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
];

const T_FRAMES: [PieceFrame; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 1)],
    [(1, 2), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (0, 1)],
];

const Z_FRAMES: [PieceFrame; 2] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
];

const I_FRAMES: [PieceFrame; 2] = [
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(1, 0), (1, 1), (1, 2), (1, 3)],
];

const L_FRAMES: [PieceFrame; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (1, 2), (0, 2)],
];

const O_FRAMES: [PieceFrame; 1] = [[(0, 0), (1, 0), (0, 1), (1, 1)]];

/// Rotation frames for a piece kind.
pub fn frames(kind: PieceKind) -> &'static [PieceFrame] {
    match kind {
        PieceKind::J => &J_FRAMES,
        PieceKind::S => &S_FRAMES,
        PieceKind::T => &T_FRAMES,
        PieceKind::Z => &Z_FRAMES,
        PieceKind::I => &I_FRAMES,
        PieceKind::L => &L_FRAMES,
        PieceKind::O => &O_FRAMES,
    }
}

/// Create a fully initialized piece of the given kind at the spawn position.
pub fn create_piece(kind: PieceKind) -> Piece {
    Piece::new(kind, frames(kind))
}
