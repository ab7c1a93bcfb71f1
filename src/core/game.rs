//! Game session - ties the board, falling piece, RNG, and scoring together.
//!
//! The session advances in two substates: while a piece is falling it takes
//! movement input and gravity steps; while lines are clearing it only ticks
//! the clear animation and ignores movement. Exactly one of the two runs per
//! game tick.

use arrayvec::ArrayVec;

use crate::core::board::{Board, FallStatus};
use crate::core::events::{EventRecorder, GameEvent};
use crate::core::piece::Piece;
use crate::core::pieces::create_piece;
use crate::core::rng::SimpleRng;
use crate::core::scoring::{fall_interval_ms, line_clear_score, should_level_up};
use crate::types::{GameAction, CLEAR_STEP_MS};

/// Which half of the tick protocol is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Substate {
    PieceFalling,
    LinesClearing,
}

/// Complete state of one game session.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    falling: Option<Piece>,
    next: Piece,
    rng: SimpleRng,
    recorder: EventRecorder,
    substate: Substate,
    score: u32,
    level: u32,
    lines: u32,
    fall_timer_ms: u32,
    clear_timer_ms: u32,
    paused: bool,
    game_over: bool,
    show_next_piece: bool,
}

impl Game {
    /// Create a new session with the given RNG seed.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next = create_piece(rng.next_piece());
        Self {
            board: Board::new(),
            falling: None,
            next,
            rng,
            recorder: EventRecorder::new(),
            substate: Substate::PieceFalling,
            score: 0,
            level: 0,
            lines: 0,
            fall_timer_ms: 0,
            clear_timer_ms: 0,
            paused: false,
            game_over: false,
            show_next_piece: true,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for rendering experiments and test setup.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn falling_piece(&self) -> Option<&Piece> {
        self.falling.as_ref()
    }

    pub fn next_piece(&self) -> &Piece {
        &self.next
    }

    pub fn substate(&self) -> Substate {
        self.substate
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn show_next_piece(&self) -> bool {
        self.show_next_piece
    }

    /// Drain the notifications emitted since the last call.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, 4> {
        self.recorder.take_events()
    }

    /// Reset everything for a fresh game.
    pub fn start_new_game(&mut self) {
        self.board.clear();
        self.falling = None;
        self.next = create_piece(self.rng.next_piece());
        self.substate = Substate::PieceFalling;
        self.score = 0;
        self.level = 0;
        self.lines = 0;
        self.fall_timer_ms = 0;
        self.clear_timer_ms = 0;
        self.paused = false;
        self.game_over = false;
        let _ = self.recorder.take_events();
        let _ = self.recorder.take_cleared();
    }

    /// Apply a player action.
    ///
    /// Movement, rotation, and soft drops are only accepted while a piece is
    /// falling; the clearing substate takes no piece input. Rejected moves
    /// leave the state untouched.
    pub fn apply_action(&mut self, action: GameAction) {
        match action {
            GameAction::Restart => {
                self.start_new_game();
                return;
            }
            GameAction::Pause => {
                if !self.game_over {
                    self.paused = !self.paused;
                }
                return;
            }
            GameAction::ToggleNextPiece => {
                self.show_next_piece = !self.show_next_piece;
                return;
            }
            _ => {}
        }

        if self.paused || self.game_over || self.substate != Substate::PieceFalling {
            return;
        }

        match action {
            GameAction::MoveLeft => {
                if let Some(piece) = self.falling.as_mut() {
                    piece.move_left(&self.board);
                }
            }
            GameAction::MoveRight => {
                if let Some(piece) = self.falling.as_mut() {
                    piece.move_right(&self.board);
                }
            }
            GameAction::RotateCw => {
                if let Some(piece) = self.falling.as_mut() {
                    piece.rotate(1, &self.board);
                }
            }
            GameAction::RotateCcw => {
                if let Some(piece) = self.falling.as_mut() {
                    piece.rotate(-1, &self.board);
                }
            }
            GameAction::SoftDrop => {
                self.drop_falling_piece();
            }
            GameAction::Pause | GameAction::Restart | GameAction::ToggleNextPiece => {}
        }
    }

    /// Advance the session by `dt_ms` milliseconds.
    pub fn tick(&mut self, dt_ms: u32) {
        if self.paused || self.game_over {
            return;
        }

        match self.substate {
            Substate::PieceFalling => {
                if self.falling.is_none() {
                    self.spawn_piece();
                    if self.game_over {
                        return;
                    }
                }
                self.fall_timer_ms += dt_ms;
                if self.fall_timer_ms >= fall_interval_ms(self.level) {
                    self.fall_timer_ms = 0;
                    self.drop_falling_piece();
                }
            }
            Substate::LinesClearing => {
                self.clear_timer_ms += dt_ms;
                if self.clear_timer_ms >= CLEAR_STEP_MS {
                    self.clear_timer_ms = 0;
                    if !self.board.advance_clearing(&mut self.recorder) {
                        if let Some(count) = self.recorder.take_cleared() {
                            self.apply_cleared_lines(count);
                        }
                        self.substate = Substate::PieceFalling;
                    }
                }
            }
        }
    }

    /// Promote the next piece to falling and draw a fresh next piece.
    ///
    /// If the new piece overlaps landed blocks the well has filled up and
    /// the game ends; the overlapping piece stays visible.
    fn spawn_piece(&mut self) {
        let piece = std::mem::replace(&mut self.next, create_piece(self.rng.next_piece()));
        if self.board.overlaps(&piece) {
            self.game_over = true;
        }
        self.falling = Some(piece);
        self.fall_timer_ms = 0;
    }

    /// One gravity step: lower the falling piece, and on lock kick off the
    /// clear cycle if any rows filled up.
    fn drop_falling_piece(&mut self) {
        let Some(piece) = self.falling.as_mut() else {
            return;
        };
        if piece.fall(&mut self.board, &mut self.recorder) == FallStatus::Locked {
            self.falling = None;
            if self.board.start_clearing(&mut self.recorder) {
                self.substate = Substate::LinesClearing;
                self.clear_timer_ms = 0;
            }
        }
    }

    fn apply_cleared_lines(&mut self, count: usize) {
        self.score += line_clear_score(count, self.level);
        self.lines += count as u32;
        if should_level_up(self.lines, self.level) {
            self.level += 1;
        }
    }
}
