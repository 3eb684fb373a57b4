//! In-memory cell grid: the render target of every draw pass, and the headless backend for tests.

use crate::ui::backend::Backend;
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub symbol: String,
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: " ".to_string(),
            style: Style::default(),
        }
    }
}

/// Cells persist between passes; only resizing clears them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    size: Size,
    cells: Vec<Cell>,
    clip: Option<Rect>,
    cursor: Option<Pos>,
}

impl Surface {
    pub fn new(size: Size) -> Self {
        let len = (size.w.max(0) * size.h.max(0)) as usize;
        Self {
            size,
            cells: vec![Cell::default(); len],
            clip: None,
            cursor: None,
        }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn area(&self) -> Rect {
        Rect::from_parts(Pos::ZERO, self.size)
    }

    /// Resize, blanking every cell. A no-op when the size is unchanged.
    pub fn resize(&mut self, size: Size) {
        if size != self.size {
            *self = Self::new(size);
        }
    }

    pub fn cursor(&self) -> Option<Pos> {
        self.cursor
    }

    pub fn cell(&self, x: i32, y: i32) -> Option<&Cell> {
        let idx = self.idx(x, y)?;
        self.cells.get(idx)
    }

    pub fn cell_mut(&mut self, x: i32, y: i32) -> Option<&mut Cell> {
        let idx = self.idx(x, y)?;
        self.cells.get_mut(idx)
    }

    /// The symbols of row `y`, concatenated.
    pub fn row_text(&self, y: i32) -> String {
        (0..self.size.w)
            .filter_map(|x| self.cell(x, y))
            .map(|c| c.symbol.as_str())
            .collect()
    }

    fn idx(&self, x: i32, y: i32) -> Option<usize> {
        if !self.area().contains(Pos::new(x, y)) {
            return None;
        }
        Some(y as usize * self.size.w as usize + x as usize)
    }

    /// The region commands may currently touch.
    fn bounds(&self) -> Rect {
        match self.clip {
            Some(clip) => clip.intersect(self.area()),
            None => self.area(),
        }
    }

    /// Write one cell. A `layered` style goes over the cell's current one, otherwise it replaces
    /// it.
    fn put(&mut self, x: i32, y: i32, symbol: &str, style: Style, layered: bool) {
        if !self.bounds().contains(Pos::new(x, y)) {
            return;
        }
        if let Some(cell) = self.cell_mut(x, y) {
            cell.symbol.clear();
            cell.symbol.push_str(symbol);
            cell.style = if layered { style.over(cell.style) } else { style };
        }
    }
}

impl Backend for Surface {
    fn draw(&mut self, cmds: &[PaintCmd]) {
        for cmd in cmds {
            match cmd {
                PaintCmd::FillRect { rect, style } => fill_rect(self, *rect, *style),
                PaintCmd::HLine {
                    pos,
                    len,
                    ch,
                    style,
                } => draw_line(self, *pos, Pos::new(1, 0), *len, *ch, *style),
                PaintCmd::VLine {
                    pos,
                    len,
                    ch,
                    style,
                } => draw_line(self, *pos, Pos::new(0, 1), *len, *ch, *style),
                PaintCmd::Text { pos, text, style } => draw_text(self, *pos, text, *style),
                PaintCmd::Clip(clip) => self.clip = *clip,
            }
        }
        self.clip = None;
    }

    fn set_cursor(&mut self, pos: Option<Pos>) {
        self.cursor = pos;
    }
}

fn fill_rect(s: &mut Surface, rect: Rect, style: Style) {
    let clip = rect.intersect(s.bounds());
    for y in clip.y..clip.bottom() {
        for x in clip.x..clip.right() {
            s.put(x, y, " ", style, false);
        }
    }
}

fn draw_line(s: &mut Surface, pos: Pos, step: Pos, len: i32, ch: char, style: Style) {
    let mut buf = [0u8; 4];
    let symbol = ch.encode_utf8(&mut buf);
    let mut at = pos;
    for _ in 0..len.max(0) {
        s.put(at.x, at.y, symbol, style, true);
        at = at + step;
    }
}

fn draw_text(s: &mut Surface, pos: Pos, text: &str, style: Style) {
    let bounds = s.bounds();
    if pos.y < bounds.y || pos.y >= bounds.bottom() {
        return;
    }
    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as i32;
        if w == 0 {
            continue;
        }
        if x >= bounds.right() {
            break;
        }
        // Wide glyphs are drawn whole or not at all.
        if x < bounds.x || x + w > bounds.right() {
            x += w;
            continue;
        }
        s.put(x, pos.y, g, style, true);
        for dx in 1..w {
            s.put(x + dx, pos.y, " ", style, true);
        }
        x += w;
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/surface.rs"]
mod tests;
