//! Collaborator interfaces the core notifies while it runs.
//!
//! The board never talks to audio or scoring directly; it reports through
//! this trait and the session (or a test) decides what to do with it.

use arrayvec::ArrayVec;

/// Notifications emitted by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A falling piece locked into the board.
    PieceLanded,
    /// One or more full rows started their clear animation.
    LinesClearing,
}

/// Sink for core notifications plus the cleared-row count report.
///
/// All methods default to no-ops so collaborators only implement what they
/// care about.
pub trait GameEvents {
    fn piece_landed(&mut self) {}
    fn lines_clearing(&mut self) {}
    /// Reports how many rows a completed clear cycle removed (1..=4).
    fn lines_cleared(&mut self, _count: usize) {}
}

/// Sink that ignores everything. Handy for tests and tools.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEvents;

impl GameEvents for NullEvents {}

/// Collecting sink used by the game session and by tests.
///
/// A single board call emits at most two events (landed + clearing), and a
/// tick drains the recorder, so a small fixed-capacity buffer suffices.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: ArrayVec<GameEvent, 4>,
    cleared: Option<usize>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain all recorded notifications in emission order.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, 4> {
        std::mem::take(&mut self.events)
    }

    /// Take the cleared-row count reported since the last call, if any.
    pub fn take_cleared(&mut self) -> Option<usize> {
        self.cleared.take()
    }
}

impl GameEvents for EventRecorder {
    fn piece_landed(&mut self) {
        let _ = self.events.try_push(GameEvent::PieceLanded);
    }

    fn lines_clearing(&mut self) {
        let _ = self.events.try_push(GameEvent::LinesClearing);
    }

    fn lines_cleared(&mut self, count: usize) {
        self.cleared = Some(count);
    }
}
