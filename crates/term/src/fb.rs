//! Framebuffer of board glyphs.
//!
//! A cell holds a [`Glyph`]: either a board tile (grid dot, food, snake) or a
//! text character tagged with a [`Tone`]. Glyphs carry their own character and
//! [`Ink`], so the view only decides what goes where and the renderer only
//! compares glyphs.

/// 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

const BOARD_BG: Rgb = Rgb(20, 24, 20);
const SCREEN_BG: Rgb = Rgb(0, 0, 0);
const TEXT_FG: Rgb = Rgb(200, 200, 200);

/// Resolved terminal styling for one glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ink {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl Ink {
    const fn plain(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }
}

/// Role of a text character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Board frame lines.
    Frame,
    /// Side panel headings.
    Label,
    /// Side panel values and status line.
    Value,
    /// Key help.
    Hint,
    /// PAUSED / GAME OVER / YOU WIN over the board.
    Banner,
}

/// Content of one terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Glyph {
    #[default]
    Blank,
    /// Empty board cell.
    Grid,
    Food,
    Body,
    Head,
    /// Head after a collision.
    DeadHead,
    Text(char, Tone),
}

impl Glyph {
    pub fn ch(self) -> char {
        match self {
            Glyph::Blank => ' ',
            Glyph::Grid => '·',
            Glyph::Food => '●',
            Glyph::Body => '▓',
            Glyph::Head | Glyph::DeadHead => '█',
            Glyph::Text(ch, _) => ch,
        }
    }

    pub fn ink(self) -> Ink {
        match self {
            Glyph::Blank => Ink::plain(Rgb(220, 220, 220), SCREEN_BG),
            Glyph::Grid => Ink::plain(Rgb(70, 80, 70), BOARD_BG).dim(),
            Glyph::Food => Ink::plain(Rgb(230, 70, 70), BOARD_BG).bold(),
            Glyph::Body => Ink::plain(Rgb(70, 180, 80), BOARD_BG),
            Glyph::Head => Ink::plain(Rgb(140, 240, 120), BOARD_BG).bold(),
            Glyph::DeadHead => Ink::plain(Rgb(230, 70, 70), BOARD_BG).bold(),
            Glyph::Text(_, tone) => match tone {
                Tone::Frame | Tone::Value => Ink::plain(TEXT_FG, SCREEN_BG),
                Tone::Label => Ink::plain(Rgb(220, 220, 220), SCREEN_BG).bold(),
                Tone::Hint => Ink::plain(TEXT_FG, SCREEN_BG).dim(),
                Tone::Banner => Ink::plain(Rgb(255, 255, 255), SCREEN_BG).bold(),
            },
        }
    }

    /// Whether the glyph sits on the board area.
    pub fn is_board(self) -> bool {
        matches!(
            self,
            Glyph::Grid | Glyph::Food | Glyph::Body | Glyph::Head | Glyph::DeadHead
        )
    }
}

/// Row-major grid of glyphs sized to the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::Blank; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Blank every cell at the given size, reusing the allocation.
    pub fn reset(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs.resize(width as usize * height as usize, Glyph::Blank);
    }

    fn offset(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.offset(x, y).map(|i| self.glyphs[i])
    }

    /// Off-screen writes are dropped.
    pub fn put(&mut self, x: u16, y: u16, glyph: Glyph) {
        if let Some(i) = self.offset(x, y) {
            self.glyphs[i] = glyph;
        }
    }

    /// Row `y`, empty when off-screen.
    pub fn row(&self, y: u16) -> &[Glyph] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.glyphs[start..start + self.width as usize]
    }

    /// Paint a `w`x`h` block, e.g. one board cell at the view's cell size.
    pub fn tile(&mut self, x: u16, y: u16, w: u16, h: u16, glyph: Glyph) {
        for dy in 0..h {
            for dx in 0..w {
                self.put(x.saturating_add(dx), y.saturating_add(dy), glyph);
            }
        }
    }

    /// Write `s` starting at column `x`; returns the column after the last
    /// character. Clipped at the right edge.
    pub fn text(&mut self, x: u16, y: u16, s: &str, tone: Tone) -> u16 {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.put(cx, y, Glyph::Text(ch, tone));
            cx += 1;
        }
        cx
    }

    /// Write a decimal number without allocating; returns the next column.
    pub fn number(&mut self, x: u16, y: u16, mut v: u32, tone: Tone) -> u16 {
        let mut digits = [0u8; 10];
        let mut n = 0;
        loop {
            digits[n] = b'0' + (v % 10) as u8;
            n += 1;
            v /= 10;
            if v == 0 {
                break;
            }
        }
        let mut cx = x;
        for &d in digits[..n].iter().rev() {
            self.put(cx, y, Glyph::Text(d as char, tone));
            cx = cx.saturating_add(1);
        }
        cx
    }

    /// Row `y` as plain characters.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|g| g.ch()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_glyphs_share_board_background() {
        for g in [Glyph::Grid, Glyph::Food, Glyph::Body, Glyph::Head, Glyph::DeadHead] {
            assert!(g.is_board());
            assert_eq!(g.ink().bg, BOARD_BG);
        }
        assert!(!Glyph::Text('x', Tone::Label).is_board());
        assert_ne!(Glyph::Head.ink(), Glyph::DeadHead.ink());
        assert_eq!(Glyph::Head.ch(), Glyph::DeadHead.ch());
    }

    #[test]
    fn number_writes_digits_and_returns_next_column() {
        let mut fb = FrameBuffer::new(12, 1);
        assert_eq!(fb.number(1, 0, 4096, Tone::Value), 5);
        fb.number(8, 0, 0, Tone::Value);
        assert_eq!(fb.row_text(0), " 4096   0   ");
    }

    #[test]
    fn text_clips_at_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        assert_eq!(fb.text(2, 0, "snake", Tone::Hint), 4);
        assert_eq!(fb.row_text(0), "  sn");
    }

    #[test]
    fn reset_blanks_and_resizes() {
        let mut fb = FrameBuffer::new(3, 2);
        fb.tile(0, 0, 3, 2, Glyph::Body);
        fb.reset(2, 3);
        assert_eq!((fb.width(), fb.height()), (2, 3));
        assert!((0..3).all(|y| fb.row(y).iter().all(|&g| g == Glyph::Blank)));
    }

    #[test]
    fn off_screen_access_is_ignored() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.put(5, 5, Glyph::Food);
        assert_eq!(fb.get(5, 5), None);
        assert!(fb.row(7).is_empty());
        assert_eq!(fb.row_text(0), "  ");
    }
}
