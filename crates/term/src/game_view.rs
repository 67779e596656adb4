//! GameView: maps a [`GameState`] into a terminal framebuffer.
//!
//! Pure (no I/O), so layout can be unit-tested.

use crate::core::{GameState, Piece};
use crate::fb::{FrameBuffer, Glyph, Rgb};
use crate::types::{Color, BOARD_HEIGHT, BOARD_WIDTH};

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

const WELL_BG: Rgb = Rgb(30, 30, 40);

const BORDER: Glyph = Glyph {
    ch: ' ',
    fg: Rgb(200, 200, 200),
    bg: Rgb(0, 0, 0),
    bold: false,
};

const EMPTY: Glyph = Glyph {
    ch: '·',
    fg: Rgb(90, 90, 100),
    bg: WELL_BG,
    bold: false,
};

const LABEL: Glyph = Glyph {
    ch: ' ',
    fg: Rgb(220, 220, 220),
    bg: Rgb(0, 0, 0),
    bold: true,
};

const VALUE: Glyph = Glyph {
    bold: false,
    ..LABEL
};

/// Renders the board at `cell_w` terminal columns per board cell.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell roughly squares typical terminal glyphs.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Outer size of the bordered well.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 + 2,
        )
    }

    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let (frame_w, frame_h) = self.frame_size();
        let left = viewport.width.saturating_sub(frame_w) / 2;
        let top = viewport.height.saturating_sub(frame_h) / 2;

        self.draw_border(&mut fb, left, top, frame_w, frame_h);

        for (r, row) in state.board().rows().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let glyph = match cell {
                    Some(color) => block(*color),
                    None => EMPTY,
                };
                self.draw_cell(&mut fb, left + 1, top + 1, r as i32, c as i32, glyph);
            }
        }

        // Cells still above the well are not drawn.
        for (r, c, color) in state.piece().cells() {
            self.draw_cell(&mut fb, left + 1, top + 1, r, c, block(color));
        }

        self.draw_panel(&mut fb, state, left + frame_w + 2, top);

        if state.game_over() {
            let text = "GAME OVER";
            let x = left + frame_w.saturating_sub(text.len() as u16) / 2;
            fb.put_str(x, top + frame_h / 2, text, Glyph { fg: Rgb(255, 255, 255), ..LABEL });
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let right = x + w - 1;
        let bottom = y + h - 1;
        for dx in 1..w - 1 {
            fb.put(x + dx, y, BORDER.with_char('─'));
            fb.put(x + dx, bottom, BORDER.with_char('─'));
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, BORDER.with_char('│'));
            fb.put(right, y + dy, BORDER.with_char('│'));
        }
        fb.put(x, y, BORDER.with_char('┌'));
        fb.put(right, y, BORDER.with_char('┐'));
        fb.put(x, bottom, BORDER.with_char('└'));
        fb.put(right, bottom, BORDER.with_char('┘'));
    }

    /// Draw one board cell whose top-left corner sits at `(origin_x, origin_y)`.
    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        origin_x: u16,
        origin_y: u16,
        row: i32,
        col: i32,
        glyph: Glyph,
    ) {
        let (Ok(row), Ok(col)) = (u16::try_from(row), u16::try_from(col)) else {
            return;
        };
        fb.fill(origin_x + col * self.cell_w, origin_y + row, self.cell_w, 1, glyph);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, state: &GameState, x: u16, top: u16) {
        if x >= fb.width() {
            return;
        }

        let mut y = top;
        for (label, value) in [
            ("SCORE", state.score()),
            ("LEVEL", state.level()),
            ("LINES", state.lines()),
        ] {
            fb.put_str(x, y, label, LABEL);
            fb.put_str(x, y + 1, &value.to_string(), VALUE);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", LABEL);
        self.draw_preview(fb, state.next_piece(), x, y + 1);

        if let Some(event) = state.last_event().filter(|e| e.lines_cleared > 0) {
            let text = format!("+{} ({} lines)", event.score_delta, event.lines_cleared);
            fb.put_str(x, y + 6, &text, VALUE);
        }
    }

    /// The preview anchor is relative to a small box under the NEXT label.
    fn draw_preview(&self, fb: &mut FrameBuffer, piece: &Piece, x: u16, y: u16) {
        for (r, c, color) in piece.cells() {
            self.draw_cell(fb, x.saturating_sub(self.cell_w), y, r, c, block(color));
        }
    }
}

fn block(color: Color) -> Glyph {
    Glyph {
        ch: '█',
        fg: color.rgb().into(),
        bg: WELL_BG,
        bold: true,
    }
}
