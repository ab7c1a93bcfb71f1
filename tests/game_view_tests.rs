//! View tests: framebuffer layout and block strategy swapping.

use blockfall::core::Game;
use blockfall::term::{FrameBuffer, GameView, Viewport, BLOCK_COLORS};
use blockfall::types::PieceKind;

const VIEW: Viewport = Viewport {
    width: 80,
    height: 24,
};

// With an 80x24 viewport the 22x22 board frame plus the 14-wide stats pane
// centers at x=20, y=1; board cell (row, col) lands at (21 + 2*col, 2 + row).
fn cell_pos(row: u16, col: u16) -> (u16, u16) {
    (21 + 2 * col, 2 + row)
}

#[test]
fn test_renders_board_frame() {
    let game = Game::new(1);
    let view = GameView::new();
    let fb = view.render(&game, VIEW);

    assert_eq!(fb.get(20, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(41, 1).unwrap().ch, '┐');
    assert_eq!(fb.get(20, 22).unwrap().ch, '└');
    assert_eq!(fb.get(30, 1).unwrap().ch, '─');
    assert_eq!(fb.get(20, 10).unwrap().ch, '│');
}

#[test]
fn test_solid_strategy_paints_landed_cell() {
    let mut game = Game::new(1);
    game.board_mut().set(19, 0, Some(PieceKind::J));

    let view = GameView::new();
    let fb = view.render(&game, VIEW);

    let (x, y) = cell_pos(19, 0);
    let cell = fb.get(x, y).unwrap();
    assert_eq!(cell.style.bg, BLOCK_COLORS[PieceKind::J.color_index()]);
    // Both terminal columns of the block match.
    assert_eq!(fb.get(x + 1, y), Some(cell));
    // An empty neighbor keeps the default background.
    let (ex, ey) = cell_pos(19, 1);
    assert_ne!(fb.get(ex, ey).unwrap().style.bg, cell.style.bg);
}

#[test]
fn test_toggle_swaps_block_strategy() {
    let mut game = Game::new(1);
    game.board_mut().set(10, 4, Some(PieceKind::T));

    let mut view = GameView::new();
    assert!(!view.is_textured());
    let solid = view.render(&game, VIEW);

    view.toggle_strategy();
    assert!(view.is_textured());
    let textured = view.render(&game, VIEW);

    let (x, y) = cell_pos(10, 4);
    assert_ne!(solid.get(x, y), textured.get(x, y));
    assert_eq!(textured.get(x, y).unwrap().ch, '▓');

    view.toggle_strategy();
    let solid_again = view.render(&game, VIEW);
    assert_eq!(solid_again.get(x, y), solid.get(x, y));
}

#[test]
fn test_stats_pane_shows_labels() {
    let game = Game::new(1);
    let view = GameView::new();
    let fb = view.render(&game, VIEW);

    // Pane starts right of the frame: x0 + frame_w + gap = 20 + 22 + 3.
    let px = 45;
    let text: String = (0..5).map(|i| fb.get(px + i, 2).unwrap().ch).collect();
    assert_eq!(text, "SCORE");
    let text: String = (0..4).map(|i| fb.get(px + i, 11).unwrap().ch).collect();
    assert_eq!(text, "NEXT");
}

#[test]
fn test_next_piece_preview_respects_toggle() {
    let mut game = Game::new(1);
    game.apply_action(blockfall::types::GameAction::ToggleNextPiece);

    let view = GameView::new();
    let fb = view.render(&game, VIEW);
    let text: String = (0..4).map(|i| fb.get(45 + i, 11).unwrap().ch).collect();
    assert_ne!(text, "NEXT");
}

#[test]
fn test_game_over_banner() {
    let mut game = Game::new(1);
    for row in 0..4 {
        for col in 0..10 {
            game.board_mut().set(row, col, Some(PieceKind::L));
        }
    }
    game.tick(16);
    assert!(game.game_over());

    let view = GameView::new();
    let fb = view.render(&game, VIEW);
    // Banner is centered on the board's middle row.
    let text: String = (0..9).map(|i| fb.get(21 + i, 12).unwrap().ch).collect();
    assert_eq!(text, "GAME OVER");
}

#[test]
fn test_render_into_reuses_buffer() {
    let game = Game::new(1);
    let view = GameView::new();
    let mut fb = FrameBuffer::new(10, 10);
    view.render_into(&game, VIEW, &mut fb);
    assert_eq!(fb.width(), 80);
    assert_eq!(fb.height(), 24);
}
