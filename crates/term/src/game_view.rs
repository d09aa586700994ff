//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{digit_count, FrameBuffer, GlyphStyle, Rgb};
use crate::types::{Tile, BOARD_SIDE};

const GAP: u16 = 1;
const FRAME_BG: Rgb = Rgb::new(187, 173, 160);
const EMPTY_BG: Rgb = Rgb::new(205, 193, 180);
const DARK_TEXT: Rgb = Rgb::new(119, 110, 101);
const LIGHT_TEXT: Rgb = Rgb::new(249, 246, 242);

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

/// Vertical placement of the board inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the 2048 grid.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 7x3 fits five digits with padding and keeps tiles roughly square.
        Self {
            tile_w: 7,
            tile_h: 3,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Outer size of the framed grid, border included.
    pub fn frame_size(&self) -> (u16, u16) {
        let side = BOARD_SIDE as u16;
        let inner_w = side * self.tile_w + (side + 1) * GAP;
        let inner_h = side * self.tile_h + (side + 1) * GAP;
        (inner_w + 2, inner_h + 2)
    }

    /// Render into an existing framebuffer.
    ///
    /// This is the allocation-free path. Callers can reuse a framebuffer across
    /// frames; it only reallocates when the viewport grows.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let border = GlyphStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            GlyphStyle::new(FRAME_BG, FRAME_BG),
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);
        if snap.reached_goal() {
            self.draw_goal_banner(fb, start_x, start_y, frame_w);
        }

        for (row, values) in snap.board.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                let fresh = snap.last_spawn == Some(row * BOARD_SIDE + col);
                self.draw_tile(fb, start_x, start_y, row as u16, col as u16, value, fresh);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        if snap.game_over {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Top-left terminal position of a tile.
    pub fn tile_origin(&self, start_x: u16, start_y: u16, row: u16, col: u16) -> (u16, u16) {
        (
            start_x + 1 + GAP + col * (self.tile_w + GAP),
            start_y + 1 + GAP + row * (self.tile_h + GAP),
        )
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: GlyphStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '╭', style);
        fb.put_char(x + w - 1, y, '╮', style);
        fb.put_char(x, y + h - 1, '╰', style);
        fb.put_char(x + w - 1, y + h - 1, '╯', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_tile(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        row: u16,
        col: u16,
        value: Tile,
        fresh: bool,
    ) {
        let (px, py) = self.tile_origin(start_x, start_y, row, col);
        let mid_y = py + self.tile_h / 2;

        if value == 0 {
            let style = GlyphStyle::new(DARK_TEXT, EMPTY_BG).dim();
            fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', style);
            fb.put_char(px + self.tile_w / 2, mid_y, '·', style);
            return;
        }

        let (bg, fg) = tile_colors(value);
        // Freshly spawned tiles are drawn dim so the player can spot them.
        let style = if fresh {
            GlyphStyle::new(fg, bg).dim()
        } else {
            GlyphStyle::new(fg, bg).bold()
        };
        fb.fill_rect(px, py, self.tile_w, self.tile_h, ' ', style);

        let digits = digit_count(value);
        let text_x = px + self.tile_w.saturating_sub(digits) / 2;
        fb.put_u32(text_x, mid_y, value, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = GlyphStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = GlyphStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
        let hint = value.dim();

        let mut y = start_y;
        for (name, number) in [("SCORE", snap.score), ("BEST TILE", snap.max_tile), ("MOVES", snap.moves)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), number, value);
            y = y.saturating_add(3);
        }

        for line in ["arrows/hjkl/wasd", "r restart", "q quit"] {
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    /// " 2048! " centred on the top border.
    fn draw_goal_banner(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, frame_w: u16) {
        const BANNER: &str = " 2048! ";
        let text_w = BANNER.len() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = GlyphStyle::new(Rgb::new(237, 194, 46), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, start_y, BANNER, style);
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = GlyphStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Background and text colors for a tile value.
pub fn tile_colors(value: Tile) -> (Rgb, Rgb) {
    match value {
        2 => (Rgb::new(238, 228, 218), DARK_TEXT),
        4 => (Rgb::new(237, 224, 200), DARK_TEXT),
        8 => (Rgb::new(242, 177, 121), LIGHT_TEXT),
        16 => (Rgb::new(245, 149, 99), LIGHT_TEXT),
        32 => (Rgb::new(246, 124, 95), LIGHT_TEXT),
        64 => (Rgb::new(246, 94, 59), LIGHT_TEXT),
        128 => (Rgb::new(237, 207, 114), LIGHT_TEXT),
        256 => (Rgb::new(237, 204, 97), LIGHT_TEXT),
        512 => (Rgb::new(237, 200, 80), LIGHT_TEXT),
        1024 => (Rgb::new(237, 197, 63), LIGHT_TEXT),
        2048 => (Rgb::new(237, 194, 46), LIGHT_TEXT),
        _ => (Rgb::new(60, 58, 50), LIGHT_TEXT),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_size_default() {
        // 4 tiles of 7 plus 5 gaps = 33 wide, 4 of 3 plus 5 gaps = 17 tall, plus border.
        assert_eq!(GameView::default().frame_size(), (35, 19));
    }

    #[test]
    fn tile_colors_distinguish_small_and_large() {
        assert_eq!(tile_colors(2).1, DARK_TEXT);
        assert_eq!(tile_colors(8).1, LIGHT_TEXT);
        assert_eq!(tile_colors(4096), tile_colors(1 << 17));
    }

    #[test]
    fn tile_origin_steps_by_tile_plus_gap() {
        let view = GameView::default();
        assert_eq!(view.tile_origin(0, 0, 0, 0), (2, 2));
        assert_eq!(view.tile_origin(0, 0, 1, 1), (10, 6));
    }
}
