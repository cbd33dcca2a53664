//! TerminalRenderer: flushes a glyph framebuffer to a real terminal.
//!
//! Between two frames of the same size only one span per row is rewritten:
//! from the first to the last glyph that changed. A moving snake touches at
//! most the rows of its head and tail plus a panel line or two, so a tick
//! usually costs a handful of short writes. A size change (or
//! [`TerminalRenderer::invalidate`]) repaints everything.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal,
};

use crate::fb::{FrameBuffer, Glyph, Ink, Rgb};

pub struct TerminalRenderer {
    out: io::Stdout,
    shown: Option<FrameBuffer>,
    bytes: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            shown: None,
            bytes: Vec::with_capacity(8 * 1024),
        }
    }

    /// Raw mode on an alternate screen with the cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        let mut out = self.out.lock();
        queue!(
            out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        out.flush()?;
        Ok(())
    }

    /// Undo [`enter`](Self::enter).
    pub fn exit(&mut self) -> Result<()> {
        let mut out = self.out.lock();
        queue!(
            out,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        out.flush()?;
        drop(out);
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint everything (terminal resize).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Show `fb`, writing only what differs from the last shown frame.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.bytes.clear();
        encode_frame(self.shown.as_ref(), fb, &mut self.bytes)?;
        if !self.bytes.is_empty() {
            self.out.write_all(&self.bytes)?;
            self.out.flush()?;
        }

        match &mut self.shown {
            Some(shown) => shown.clone_from(fb),
            None => self.shown = Some(fb.clone()),
        }
        Ok(())
    }
}

/// Encode the commands that turn `prev` into `next`; returns the number of
/// rows written.
///
/// `prev == None` or a size mismatch clears the screen and writes every row.
/// Nothing is appended when the frames are identical.
pub fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<usize> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        queue!(out, terminal::Clear(terminal::ClearType::All))?;
    }

    let mut ink: Option<Ink> = None;
    let mut rows = 0;
    for y in 0..next.height() {
        let row = next.row(y);
        let span = match prev {
            Some(p) => changed_span(p.row(y), row),
            None => (!row.is_empty()).then(|| (0, row.len() - 1)),
        };
        let Some((lo, hi)) = span else {
            continue;
        };

        queue!(out, cursor::MoveTo(lo as u16, y))?;
        for &glyph in &row[lo..=hi] {
            put_glyph(out, glyph, &mut ink)?;
        }
        rows += 1;
    }

    if rows > 0 || prev.is_none() {
        queue!(out, ResetColor, SetAttribute(Attribute::Reset))?;
    }
    Ok(rows)
}

/// First and last index where two equal-length rows differ.
fn changed_span(prev: &[Glyph], next: &[Glyph]) -> Option<(usize, usize)> {
    let lo = prev.iter().zip(next).position(|(a, b)| a != b)?;
    let hi = prev.iter().zip(next).rposition(|(a, b)| a != b)?;
    Some((lo, hi))
}

fn put_glyph(out: &mut Vec<u8>, glyph: Glyph, current: &mut Option<Ink>) -> Result<()> {
    let ink = glyph.ink();
    if *current != Some(ink) {
        queue!(
            out,
            SetAttribute(Attribute::Reset),
            SetForegroundColor(color(ink.fg)),
            SetBackgroundColor(color(ink.bg))
        )?;
        if ink.bold {
            queue!(out, SetAttribute(Attribute::Bold))?;
        }
        if ink.dim {
            queue!(out, SetAttribute(Attribute::Dim))?;
        }
        *current = Some(ink);
    }
    queue!(out, Print(glyph.ch()))?;
    Ok(())
}

fn color(Rgb(r, g, b): Rgb) -> Color {
    Color::Rgb { r, g, b }
}
