//! Terminal falling-block puzzle game.
//!
//! `core` holds the playfield state machine (board, piece, clear cycle,
//! session); `term` and `input` are the crossterm front end layered on top.

pub mod core;
pub mod input;
pub mod term;
pub mod types;
