//! Half-block pixel canvas
//!
//! Each terminal cell shows two vertically stacked pixels using `▀` with the
//! foreground as the top pixel and the background as the bottom one. Text
//! labels are drawn over the pixels after the grid.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color},
};

/// 24-bit color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    pub fn from_array([r, g, b]: [u8; 3]) -> Self {
        Rgb(r, g, b)
    }

    fn color(self) -> Color {
        Color::Rgb {
            r: self.0,
            g: self.1,
            b: self.2,
        }
    }
}

/// Text placed at a terminal cell
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub col: u16,
    pub row: u16,
    pub text: String,
    pub fg: Rgb,
    pub bold: bool,
}

/// Pixel buffer with half-block rendering
pub struct Canvas {
    w: usize,
    /// Pixel height = terminal rows * 2
    h: usize,
    px: Vec<Rgb>,
    labels: Vec<Label>,
}

impl Canvas {
    /// Canvas covering `cols` x `rows` terminal cells
    pub fn new(cols: u16, rows: u16) -> Self {
        let (w, h) = (cols as usize, rows as usize * 2);
        Self {
            w,
            h,
            px: vec![Rgb(0, 0, 0); w * h],
            labels: Vec::new(),
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.w = cols as usize;
        self.h = rows as usize * 2;
        self.px.clear();
        self.px.resize(self.w * self.h, Rgb(0, 0, 0));
    }

    /// Size in pixels
    pub fn size(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    /// Size in terminal cells
    pub fn cells(&self) -> (u16, u16) {
        (self.w as u16, (self.h / 2) as u16)
    }

    pub fn clear(&mut self, c: Rgb) {
        self.px.fill(c);
        self.labels.clear();
    }

    pub fn set(&mut self, x: i32, y: i32, c: Rgb) {
        if x >= 0 && y >= 0 && (x as usize) < self.w && (y as usize) < self.h {
            self.px[y as usize * self.w + x as usize] = c;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Rgb {
        self.px[y * self.w + x]
    }

    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        for dy in 0..h {
            for dx in 0..w {
                self.set(x + dx, y + dy, c);
            }
        }
    }

    /// One-pixel outline
    pub fn stroke_rect(&mut self, x: i32, y: i32, w: i32, h: i32, c: Rgb) {
        if w <= 0 || h <= 0 {
            return;
        }
        self.fill_rect(x, y, w, 1, c);
        self.fill_rect(x, y + h - 1, w, 1, c);
        self.fill_rect(x, y, 1, h, c);
        self.fill_rect(x + w - 1, y, 1, h, c);
    }

    pub fn label(&mut self, label: Label) {
        self.labels.push(label);
    }

    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Write the whole frame to the terminal
    pub fn render(&self, out: &mut impl Write) -> io::Result<()> {
        queue!(out, cursor::MoveTo(0, 0))?;
        let rows = self.h / 2;
        let mut prev: Option<(Rgb, Rgb)> = None;

        for row in 0..rows {
            for col in 0..self.w {
                let top = self.get(col, row * 2);
                let bot = self.get(col, row * 2 + 1);
                if prev != Some((top, bot)) {
                    queue!(
                        out,
                        style::SetForegroundColor(top.color()),
                        style::SetBackgroundColor(bot.color())
                    )?;
                    prev = Some((top, bot));
                }
                if top == bot {
                    queue!(out, style::Print(' '))?;
                } else {
                    queue!(out, style::Print('\u{2580}'))?; // ▀
                }
            }
            if row + 1 < rows {
                queue!(out, style::ResetColor, style::Print("\r\n"))?;
                prev = None;
            }
        }

        for label in &self.labels {
            let bg = self.get(
                (label.col as usize).min(self.w.saturating_sub(1)),
                (label.row as usize * 2 + 1).min(self.h.saturating_sub(1)),
            );
            queue!(
                out,
                cursor::MoveTo(label.col, label.row),
                style::SetForegroundColor(label.fg.color()),
                style::SetBackgroundColor(bg.color())
            )?;
            if label.bold {
                queue!(out, style::SetAttribute(style::Attribute::Bold))?;
            }
            queue!(out, style::Print(&label.text), style::SetAttribute(style::Attribute::Reset))?;
        }

        queue!(out, style::ResetColor)?;
        out.flush()
    }
}
