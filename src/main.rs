//! Terminal game runner.
//!
//! Drives the session with a fixed tick, polls crossterm for input between
//! ticks, and renders through the framebuffer view.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::Game;
use blockfall::input::{handle_key_event, handle_view_key, should_quit, ViewCommand};
use blockfall::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use blockfall::types::TICK_MS;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = std::time::UNIX_EPOCH
        .elapsed()
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);
    let mut game = Game::new(seed);
    let mut view = GameView::new();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until the next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.apply_action(action);
                    }
                    if let Some(ViewCommand::ToggleBlockStyle) = handle_view_key(key) {
                        view.toggle_strategy();
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            game.tick(TICK_MS);
            // Events are drained so a future sound backend can hook in here.
            let _ = game.take_events();
        }
    }
}
