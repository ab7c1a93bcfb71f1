//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions (rows x columns)
pub const BOARD_ROWS: u8 = 20;
pub const BOARD_COLS: u8 = 10;

/// Layout unit: pixel size of one block when a renderer lays things out.
pub const BLOCK_SIZE: i32 = 22;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const BASE_FALL_MS: u32 = 1000;
pub const FALL_MS_PER_LEVEL: u32 = 45;
pub const MAX_SPEED_LEVEL: u32 = 22;
pub const CLEAR_STEP_MS: u32 = 60;

/// Line clear scoring, indexed by (lines cleared - 1)
pub const LINE_SCORES: [u32; 4] = [40, 100, 300, 1200];

/// Lines needed to reach the next level is `(level + 1) * LINES_PER_LEVEL`
pub const LINES_PER_LEVEL: u32 = 10;

/// The seven piece shapes.
///
/// Discriminants are the values stored in occupied board cells, starting at 1
/// so that "empty" never collides with a piece id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PieceKind {
    J = 1,
    S = 2,
    T = 3,
    Z = 4,
    I = 5,
    L = 6,
    O = 7,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::J,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
        PieceKind::I,
        PieceKind::L,
        PieceKind::O,
    ];

    /// Numeric id stored in board cells (1..=7).
    pub fn id(self) -> u8 {
        self as u8
    }

    /// Look up a kind by numeric id. Unrecognized ids fall back to the
    /// square, matching the factory's default case.
    pub fn from_id(id: u8) -> Self {
        match id {
            1 => PieceKind::J,
            2 => PieceKind::S,
            3 => PieceKind::T,
            4 => PieceKind::Z,
            5 => PieceKind::I,
            6 => PieceKind::L,
            _ => PieceKind::O,
        }
    }

    /// Color palette index for rendering (0-based).
    pub fn color_index(self) -> usize {
        (self.id() - 1) as usize
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Game actions accepted by the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    RotateCcw,
    Pause,
    Restart,
    ToggleNextPiece,
}
