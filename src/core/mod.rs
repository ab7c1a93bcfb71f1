//! Core module - pure game logic with no I/O dependencies
//!
//! Everything under here is deterministic and synchronous: the board, the
//! falling piece, the clear-cycle state machine, and the session that drives
//! them one tick at a time.

pub mod board;
pub mod events;
pub mod game;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;

pub use board::{Board, FallStatus};
pub use events::{EventRecorder, GameEvent, GameEvents, NullEvents};
pub use game::{Game, Substate};
pub use piece::Piece;
pub use pieces::create_piece;
pub use rng::SimpleRng;
