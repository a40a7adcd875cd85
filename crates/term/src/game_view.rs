//! GameView: maps a core [`Frame`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::Frame;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Color, COLS, ROWS};

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

const PLAYFIELD_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const LABEL: CellStyle = CellStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
const VALUE: CellStyle = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
const HINT: CellStyle = CellStyle::new(Rgb::new(120, 120, 130), Rgb::new(0, 0, 0));

const CONTROLS: [&str; 5] = [
    "←/→  move",
    "↓    down",
    "↑    rotate",
    "SPC  drop",
    "R/Q  new/quit",
];

/// Terminal palette for a cell color tag
pub fn color_rgb(color: Color) -> Rgb {
    match color {
        Color::Cyan => Rgb::new(80, 220, 220),
        Color::Blue => Rgb::new(80, 120, 220),
        Color::Orange => Rgb::new(255, 165, 0),
        Color::Yellow => Rgb::new(240, 220, 80),
        Color::Green => Rgb::new(100, 220, 120),
        Color::Purple => Rgb::new(200, 120, 220),
        Color::Red => Rgb::new(220, 80, 80),
    }
}

/// Lays out the playfield, the score panel, and the game-over overlay.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Terminal glyphs are roughly twice as tall as wide.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Outer size of the bordered playfield.
    pub fn playfield_size(&self) -> (u16, u16) {
        (
            COLS as u16 * self.cell_w + 2,
            ROWS as u16 * self.cell_h + 2,
        )
    }

    /// Render one frame into a new framebuffer.
    pub fn render(&self, frame: &Frame, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.playfield_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(&mut fb, start_x, start_y, frame_w, frame_h);

        for y in 0..ROWS {
            for x in 0..COLS {
                let (ch, style) = match frame.cell_at(x, y) {
                    Some(color) => ('█', CellStyle::new(color_rgb(color), PLAYFIELD_BG)),
                    None => ('·', CellStyle::new(Rgb::new(90, 90, 100), PLAYFIELD_BG)),
                };
                let px = start_x + 1 + x as u16 * self.cell_w;
                let py = start_y + 1 + y as u16 * self.cell_h;
                fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
            }
        }

        self.draw_side_panel(&mut fb, frame, viewport, start_x + frame_w + 2, start_y);

        if frame.is_over() {
            draw_game_over(&mut fb, frame.score, start_x, start_y, frame_w, frame_h);
        }

        fb
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        frame: &Frame,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x.saturating_add(12) > viewport.width {
            return;
        }

        fb.put_str(panel_x, start_y, "SCORE", LABEL);
        fb.put_str(panel_x, start_y + 1, &frame.score.to_string(), VALUE);

        let mut y = start_y + 3;
        for line in CONTROLS {
            fb.put_str(panel_x, y, line, HINT);
            y += 1;
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    let (right, bottom) = (x + w - 1, y + h - 1);
    fb.put_char(x, y, '┌', BORDER);
    fb.put_char(right, y, '┐', BORDER);
    fb.put_char(x, bottom, '└', BORDER);
    fb.put_char(right, bottom, '┘', BORDER);
    for cx in x + 1..right {
        fb.put_char(cx, y, '─', BORDER);
        fb.put_char(cx, bottom, '─', BORDER);
    }
    for cy in y + 1..bottom {
        fb.put_char(x, cy, '│', BORDER);
        fb.put_char(right, cy, '│', BORDER);
    }
}

fn draw_game_over(fb: &mut FrameBuffer, score: u32, x: u16, y: u16, w: u16, h: u16) {
    let lines = [
        "GAME OVER".to_string(),
        format!("Final score: {score}"),
        "R to restart".to_string(),
    ];
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    let top = y + h / 2 - 1;
    for (i, text) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let tx = x + w.saturating_sub(text_w) / 2;
        fb.put_str(tx, top + i as u16, text, style);
    }
}
