//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Glyph, Tone};
use crate::types::{Coord, Mode};

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

/// One-line hint shown under the score for each mode.
pub fn status_text(mode: Mode) -> &'static str {
    match mode {
        Mode::Idle => "Press any direction to start",
        Mode::Paused => "Paused",
        Mode::Running => "Arrows or WASD",
        Mode::GameOver => "Game Over",
        Mode::Won => "You Win",
    }
}

fn banner(mode: Mode) -> Option<&'static str> {
    match mode {
        Mode::Paused => Some("PAUSED"),
        Mode::GameOver => Some("GAME OVER"),
        Mode::Won => Some("YOU WIN"),
        Mode::Idle | Mode::Running => None,
    }
}

const KEY_HELP: [&str; 3] = ["p/space  pause", "r        restart", "q        quit"];

/// Screen rectangle of the framed board.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

/// Draws a snapshot as a framed grid with a side panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Terminal glyphs are about twice as tall as wide.
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

    /// Render a snapshot into an existing framebuffer, resizing it to the
    /// viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let w = snap.board.cols.saturating_mul(self.cell_w).saturating_add(2);
        let h = snap.board.rows.saturating_mul(self.cell_h).saturating_add(2);
        let frame = Frame {
            x: viewport.width.saturating_sub(w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        };

        draw_frame(fb, frame);

        for y in 0..snap.board.rows as i32 {
            for x in 0..snap.board.cols as i32 {
                self.paint(fb, frame, snap, Coord::new(x, y), Glyph::Grid);
            }
        }
        if let Some(food) = snap.food {
            self.paint(fb, frame, snap, food, Glyph::Food);
        }
        // Tail first so the head wins if a hand-built snapshot overlaps.
        for (i, &seg) in snap.snake.iter().enumerate().rev() {
            let glyph = match (i, snap.mode) {
                (0, Mode::GameOver) => Glyph::DeadHead,
                (0, _) => Glyph::Head,
                _ => Glyph::Body,
            };
            self.paint(fb, frame, snap, seg, glyph);
        }

        draw_panel(fb, snap, viewport, frame);

        if let Some(text) = banner(snap.mode) {
            let len = text.chars().count() as u16;
            let x = frame.x.saturating_add(frame.w.saturating_sub(len) / 2);
            fb.text(x, frame.y.saturating_add(frame.h / 2), text, Tone::Banner);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Paint one board coordinate; anything off the board is skipped.
    fn paint(&self, fb: &mut FrameBuffer, frame: Frame, snap: &GameSnapshot, c: Coord, glyph: Glyph) {
        let (Ok(cx), Ok(cy)) = (u16::try_from(c.x), u16::try_from(c.y)) else {
            return;
        };
        if cx >= snap.board.cols || cy >= snap.board.rows {
            return;
        }
        let px = frame.x.saturating_add(1).saturating_add(cx.saturating_mul(self.cell_w));
        let py = frame.y.saturating_add(1).saturating_add(cy.saturating_mul(self.cell_h));
        fb.tile(px, py, self.cell_w, self.cell_h, glyph);
    }
}

fn draw_frame(fb: &mut FrameBuffer, f: Frame) {
    if f.w < 2 || f.h < 2 {
        return;
    }
    let (right, bottom) = (f.x + f.w - 1, f.y + f.h - 1);
    let line = |ch| Glyph::Text(ch, Tone::Frame);

    fb.tile(f.x + 1, f.y, f.w - 2, 1, line('─'));
    fb.tile(f.x + 1, bottom, f.w - 2, 1, line('─'));
    fb.tile(f.x, f.y + 1, 1, f.h - 2, line('│'));
    fb.tile(right, f.y + 1, 1, f.h - 2, line('│'));
    fb.put(f.x, f.y, line('┌'));
    fb.put(right, f.y, line('┐'));
    fb.put(f.x, bottom, line('└'));
    fb.put(right, bottom, line('┘'));
}

fn draw_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
    let x = frame.x.saturating_add(frame.w).saturating_add(2);
    if viewport.width.saturating_sub(x) < 12 {
        return;
    }

    let mut y = frame.y;
    let mut next = |step: u16| {
        let at = y;
        y = y.saturating_add(step);
        at
    };

    fb.text(x, next(1), "SCORE", Tone::Label);
    fb.number(x, next(2), snap.score, Tone::Value);
    fb.text(x, next(1), "LENGTH", Tone::Label);
    fb.number(x, next(2), u32::try_from(snap.length).unwrap_or(u32::MAX), Tone::Value);
    fb.text(x, next(1), "HEADING", Tone::Label);
    fb.text(x, next(2), snap.direction.as_str(), Tone::Value);
    fb.text(x, next(2), status_text(snap.mode), Tone::Value);
    for line in KEY_HELP {
        fb.text(x, next(1), line, Tone::Hint);
    }
}
