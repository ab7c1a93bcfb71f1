//! Block painting strategies.
//!
//! How a single block looks is pluggable: the view holds one strategy and
//! can swap it for another at runtime (the `b` key toggles). Both paint one
//! board cell into the framebuffer at a given terminal position.

use crate::term::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Palette indexed by `PieceKind::color_index()`.
pub const BLOCK_COLORS: [Rgb; 7] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 128, 0),
    Rgb::new(224, 224, 0),
    Rgb::new(0, 224, 0),
    Rgb::new(0, 0, 255),
    Rgb::new(75, 0, 130),
    Rgb::new(244, 114, 244),
];

/// A way of painting one block.
///
/// `x`/`y` are terminal coordinates of the block's left cell; blocks are two
/// terminal columns wide to compensate for glyph aspect ratio.
pub trait BlockRenderStrategy {
    fn paint(&self, fb: &mut FrameBuffer, x: u16, y: u16, color: usize);
}

/// Flat fill: the block is a solid colored rectangle.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolidBlockStrategy;

impl BlockRenderStrategy for SolidBlockStrategy {
    fn paint(&self, fb: &mut FrameBuffer, x: u16, y: u16, color: usize) {
        let rgb = BLOCK_COLORS[color % BLOCK_COLORS.len()];
        let cell = Cell {
            ch: ' ',
            style: CellStyle {
                fg: rgb,
                bg: rgb,
            },
        };
        fb.put(x, y, cell);
        fb.put(x + 1, y, cell);
    }
}

/// Textured look: a bright glyph on a darkened body.
#[derive(Debug, Clone, Copy, Default)]
pub struct TexturedBlockStrategy;

impl BlockRenderStrategy for TexturedBlockStrategy {
    fn paint(&self, fb: &mut FrameBuffer, x: u16, y: u16, color: usize) {
        let rgb = BLOCK_COLORS[color % BLOCK_COLORS.len()];
        let body = Rgb::new(rgb.r / 2, rgb.g / 2, rgb.b / 2);
        let cell = Cell {
            ch: '▓',
            style: CellStyle { fg: rgb, bg: body },
        };
        fb.put(x, y, cell);
        fb.put(x + 1, y, cell);
    }
}
