//! GameView: maps a `core::Game` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested against the framebuffer contents.

use crate::core::{Game, Piece};
use crate::term::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::term::strategy::{
    BlockRenderStrategy, SolidBlockStrategy, TexturedBlockStrategy,
};
use crate::types::{BOARD_COLS, BOARD_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Board cell width in terminal columns (2x1 compensates for glyph aspect).
const CELL_W: u16 = 2;
/// Gap between the board frame and the stats pane.
const PANE_GAP: u16 = 3;
const PANE_W: u16 = 14;

/// Renders the session into a framebuffer using a swappable block strategy.
pub struct GameView {
    strategy: Box<dyn BlockRenderStrategy>,
    textured: bool,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            strategy: Box::new(SolidBlockStrategy),
            textured: false,
        }
    }
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap between the solid and textured block strategies.
    pub fn toggle_strategy(&mut self) {
        self.textured = !self.textured;
        self.strategy = if self.textured {
            Box::new(TexturedBlockStrategy)
        } else {
            Box::new(SolidBlockStrategy)
        };
    }

    pub fn is_textured(&self) -> bool {
        self.textured
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, game: &Game, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Default::default());

        let board_w = BOARD_COLS as u16 * CELL_W;
        let board_h = BOARD_ROWS as u16;
        let frame_w = board_w + 2;
        let frame_h = board_h + 2;
        let total_w = frame_w + PANE_GAP + PANE_W;

        let x0 = (viewport.width.saturating_sub(total_w)) / 2;
        let y0 = (viewport.height.saturating_sub(frame_h)) / 2;

        self.draw_frame(fb, x0, y0, frame_w, frame_h);
        self.draw_board(game, fb, x0 + 1, y0 + 1);

        if let Some(piece) = game.falling_piece() {
            self.draw_board_piece(piece, fb, x0 + 1, y0 + 1);
        }

        self.draw_pane(game, fb, x0 + frame_w + PANE_GAP, y0 + 1);

        if game.game_over() {
            self.draw_banner(fb, x0 + 1, y0 + frame_h / 2, board_w, "GAME OVER - R RESTARTS");
        } else if game.paused() {
            self.draw_banner(fb, x0 + 1, y0 + frame_h / 2, board_w, "PAUSED");
        }
    }

    /// Convenience wrapper that allocates a fresh framebuffer.
    pub fn render(&self, game: &Game, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, viewport, &mut fb);
        fb
    }

    fn draw_frame(&self, fb: &mut FrameBuffer, x0: u16, y0: u16, w: u16, h: u16) {
        let style = CellStyle {
            fg: Rgb::new(140, 140, 160),
            ..Default::default()
        };
        for x in x0 + 1..x0 + w - 1 {
            fb.put(x, y0, Cell { ch: '─', style });
            fb.put(x, y0 + h - 1, Cell { ch: '─', style });
        }
        for y in y0 + 1..y0 + h - 1 {
            fb.put(x0, y, Cell { ch: '│', style });
            fb.put(x0 + w - 1, y, Cell { ch: '│', style });
        }
        fb.put(x0, y0, Cell { ch: '┌', style });
        fb.put(x0 + w - 1, y0, Cell { ch: '┐', style });
        fb.put(x0, y0 + h - 1, Cell { ch: '└', style });
        fb.put(x0 + w - 1, y0 + h - 1, Cell { ch: '┘', style });
    }

    fn draw_board(&self, game: &Game, fb: &mut FrameBuffer, x0: u16, y0: u16) {
        let board = game.board();
        for row in 0..BOARD_ROWS as i8 {
            for col in 0..BOARD_COLS as i8 {
                if let Some(Some(kind)) = board.get(row, col) {
                    self.strategy.paint(
                        fb,
                        x0 + col as u16 * CELL_W,
                        y0 + row as u16,
                        kind.color_index(),
                    );
                }
            }
        }
    }

    fn draw_board_piece(&self, piece: &Piece, fb: &mut FrameBuffer, x0: u16, y0: u16) {
        for i in 0..4 {
            let row = piece.board_row(i);
            let col = piece.board_col(i);
            if row < 0 || col < 0 {
                continue;
            }
            self.strategy.paint(
                fb,
                x0 + col as u16 * CELL_W,
                y0 + row as u16,
                piece.kind().color_index(),
            );
        }
    }

    fn draw_pane(&self, game: &Game, fb: &mut FrameBuffer, x0: u16, y0: u16) {
        let label = CellStyle {
            fg: Rgb::new(160, 160, 180),
            ..Default::default()
        };
        let value = CellStyle::default();

        fb.put_str(x0, y0, "SCORE", label);
        fb.put_str(x0, y0 + 1, &format!("{:>8}", game.score()), value);
        fb.put_str(x0, y0 + 3, "LEVEL", label);
        fb.put_str(x0, y0 + 4, &format!("{:>8}", game.level()), value);
        fb.put_str(x0, y0 + 6, "LINES", label);
        fb.put_str(x0, y0 + 7, &format!("{:>8}", game.lines()), value);

        if game.show_next_piece() {
            fb.put_str(x0, y0 + 9, "NEXT", label);
            let piece = game.next_piece();
            for i in 0..4 {
                let col = piece.local_col(i) as u16;
                let row = piece.local_row(i) as u16;
                self.strategy.paint(
                    fb,
                    x0 + col * CELL_W,
                    y0 + 10 + row,
                    piece.kind().color_index(),
                );
            }
        }
    }

    fn draw_banner(&self, fb: &mut FrameBuffer, x0: u16, y: u16, w: u16, text: &str) {
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(96, 32, 32),
        };
        let x = x0 + w.saturating_sub(text.len() as u16) / 2;
        fb.put_str(x, y, text, style);
    }
}
