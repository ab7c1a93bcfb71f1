//! Terminal presentation: framebuffer, block strategies, view, renderer.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod strategy;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
pub use strategy::{BlockRenderStrategy, SolidBlockStrategy, TexturedBlockStrategy, BLOCK_COLORS};
