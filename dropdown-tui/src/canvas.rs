//! A grid of styled terminal cells.

use crossterm::style::Color;
use unicode_width::UnicodeWidthChar;

/// Text attributes of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellStyle {
    pub fg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub underline: bool,
    pub reverse: bool,
}

impl CellStyle {
    pub const fn new() -> Self {
        Self {
            fg: None,
            bold: false,
            dim: false,
            underline: false,
            reverse: false,
        }
    }

    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub const fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub const fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Layer `other` on top: set attributes win, colours are replaced when given.
    pub fn merge(self, other: CellStyle) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bold: self.bold || other.bold,
            dim: self.dim || other.dim,
            underline: self.underline || other.underline,
            reverse: self.reverse || other.reverse,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
    /// Second column of a wide character; never written on its own.
    pub wide_continuation: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::new(),
            wide_continuation: false,
        }
    }
}

/// Rectangle in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    pub fn intersect(&self, other: CellRect) -> CellRect {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        CellRect::new(x, y, right.saturating_sub(x), bottom.saturating_sub(y))
    }
}

#[derive(Debug, Clone)]
pub struct Canvas {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); (width as usize) * (height as usize)],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn area(&self) -> CellRect {
        CellRect::new(0, 0, self.width, self.height)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        (x < self.width && y < self.height).then(|| &self.cells[self.index(x, y)])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if x < self.width && y < self.height {
            let idx = self.index(x, y);
            self.cells[idx] = cell;
        }
    }

    fn index(&self, x: u16, y: u16) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Write `text` starting at `(x, y)`, clipped to `clip`.
    ///
    /// Returns the number of columns the text occupies, including columns
    /// that were clipped away. Wide characters that do not fit in the clip
    /// are dropped whole.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, style: CellStyle, clip: CellRect) -> u16 {
        let clip = clip.intersect(self.area());
        let mut col = x;

        for ch in text.chars() {
            let width = ch.width().unwrap_or(0) as u16;
            if width == 0 {
                continue;
            }
            let fits = clip.contains(col, y) && (width == 1 || clip.contains(col + 1, y));
            if fits {
                self.set(col, y, Cell {
                    ch,
                    style,
                    wide_continuation: false,
                });
                if width == 2 {
                    self.set(col + 1, y, Cell {
                        ch: ' ',
                        style,
                        wide_continuation: true,
                    });
                }
            }
            col = col.saturating_add(width);
        }

        col - x
    }

    /// Blank every cell in `rect`.
    pub fn fill(&mut self, rect: CellRect, style: CellStyle) {
        let rect = rect.intersect(self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set(x, y, Cell {
                    ch: ' ',
                    style,
                    wide_continuation: false,
                });
            }
        }
    }

    /// Layer `style` over every cell in `rect`.
    pub fn apply_style(&mut self, rect: CellRect, style: CellStyle) {
        let rect = rect.intersect(self.area());
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                let idx = self.index(x, y);
                self.cells[idx].style = self.cells[idx].style.merge(style);
            }
        }
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Cells that differ from `other`, with their positions.
    pub fn diff<'a>(&'a self, other: &'a Canvas) -> impl Iterator<Item = (u16, u16, &'a Cell)> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(move |(i, (cell, _))| {
                let x = (i % self.width as usize) as u16;
                let y = (i / self.width as usize) as u16;
                (x, y, cell)
            })
    }

    /// Characters of row `y`, with trailing blanks trimmed.
    pub fn row_text(&self, y: u16) -> String {
        if y >= self.height {
            return String::new();
        }
        let start = self.index(0, y);
        let line: String = self.cells[start..start + self.width as usize]
            .iter()
            .filter(|cell| !cell.wide_continuation)
            .map(|cell| cell.ch)
            .collect();
        line.trim_end().to_string()
    }
}
