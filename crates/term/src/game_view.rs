//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::{Rgb, Tile};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Driver-side state shown on top of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlay {
    pub paused: bool,
}

/// Renders the field, the active piece and a HUD panel.
#[derive(Debug, Clone, Copy)]
pub struct GameView {
    /// Field cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell compensate for the terminal glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self { cell_w: cell_w.max(1) }
    }

    pub fn render(&self, snap: &GameSnapshot, overlay: Overlay, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        // Layout math is done in u32; anything past the viewport is clipped.
        let cell_w = u32::from(self.cell_w);
        let frame_w = to_u32(snap.cols).saturating_mul(cell_w).saturating_add(2);
        let frame_h = to_u32(snap.rows).saturating_add(2);
        let start_x = u32::from(viewport.width).saturating_sub(frame_w) / 2;
        let start_y = u32::from(viewport.height).saturating_sub(frame_h) / 2;

        draw_border(&mut fb, start_x, start_y, frame_w, frame_h);

        // Cells beyond the viewport can never be visible.
        let visible_cols = snap
            .cols
            .min(usize::from(viewport.width) / usize::from(self.cell_w) + 1);
        let visible_rows = snap.rows.min(usize::from(viewport.height) + 1);

        let origin = (start_x + 1, start_y + 1);
        let empty = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG);
        for y in 0..visible_rows {
            for x in 0..visible_cols {
                match snap.cell(x, y) {
                    Some(tile) => self.draw_tile(&mut fb, origin, &tile),
                    None => self.fill_cell(&mut fb, origin, x, y, '·', empty),
                }
            }
        }
        for tile in &snap.active {
            self.draw_tile(&mut fb, origin, tile);
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_panel(&mut fb, snap, panel_x, start_y);

        if overlay.paused {
            draw_centered(&mut fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        } else if snap.game_over {
            draw_centered(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
            draw_centered(&mut fb, start_x, start_y + 1, frame_w, frame_h, "r: restart");
        }

        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, origin: (u32, u32), tile: &Tile) {
        let style = CellStyle::new(tile.color, BOARD_BG).bold();
        self.fill_cell(fb, origin, tile.x, tile.y, '█', style);
    }

    /// `origin` is the screen position of field cell (0, 0).
    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: (u32, u32),
        x: usize,
        y: usize,
        ch: char,
        style: CellStyle,
    ) {
        let px = origin
            .0
            .saturating_add(to_u32(x).saturating_mul(u32::from(self.cell_w)));
        let py = origin.1.saturating_add(to_u32(y));
        fb.fill_rect(clip(px), clip(py), self.cell_w, 1, ch, style);
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u32, y: u32) {
        let (x, y) = (clip(x), clip(y));
        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        fb.put_str(x, y, "SCORE", label);
        fb.put_str(x, y.saturating_add(1), &snap.score.to_string(), value);

        fb.put_str(x, y.saturating_add(3), "LEVEL", label);
        fb.put_str(x, y.saturating_add(4), &snap.level.to_string(), value);

        fb.put_str(x, y.saturating_add(6), "LINES", label);
        let lines = format!("{}/{}", snap.lines_cleared_this_level, snap.lines_to_level_up);
        fb.put_str(x, y.saturating_add(7), &lines, value);

        fb.put_str(x, y.saturating_add(9), "NEXT", label);
        fb.put_char(x.saturating_add(5), y.saturating_add(9), snap.next_kind.letter(), value);

        // Preview normalized to the top-left of the piece's cells.
        let min_x = snap.next.iter().map(|t| t.x).min().unwrap_or(0);
        let min_y = snap.next.iter().map(|t| t.y).min().unwrap_or(0);
        for tile in &snap.next {
            let style = CellStyle::new(tile.color, SCREEN_BG);
            let px = x.saturating_add(((tile.x - min_x) as u16).saturating_mul(self.cell_w));
            let py = y.saturating_add(10 + (tile.y - min_y) as u16);
            fb.fill_rect(px, py, self.cell_w, 1, '█', style);
        }
    }
}

fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// Screen coordinate, pinned to `u16::MAX` (always outside the framebuffer).
fn clip(n: u32) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn draw_border(fb: &mut FrameBuffer, x: u32, y: u32, w: u32, h: u32) {
    let style = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);
    let mut put = |px: u32, py: u32, ch: char| fb.put_char(clip(px), clip(py), ch, style);

    put(x, y, '┌');
    put(right, y, '┐');
    put(x, bottom, '└');
    put(right, bottom, '┘');

    // Edges are only walked as far as the screen reaches.
    for px in x + 1..right.min(u32::from(u16::MAX)) {
        put(px, y, '─');
        put(px, bottom, '─');
    }
    for py in y + 1..bottom.min(u32::from(u16::MAX)) {
        put(x, py, '│');
        put(right, py, '│');
    }
}

fn draw_centered(fb: &mut FrameBuffer, x: u32, y: u32, w: u32, h: u32, text: &str) {
    let text_w = to_u32(text.chars().count());
    let tx = x.saturating_add(w.saturating_sub(text_w) / 2);
    let ty = y.saturating_add(h / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    fb.put_str(clip(tx), clip(ty), text, style);
}
