//! Deterministic RNG for piece selection.
//!
//! Piece selection is a plain uniform draw over the seven kinds; fancier bag
//! schemes live outside the core.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator), Numerical Recipes constants.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed. A zero seed is bumped to 1 so
    /// the stream never degenerates.
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw a uniformly random piece kind.
    pub fn next_piece(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(7) as usize]
    }
}
