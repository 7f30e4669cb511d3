//! Character-grid surface for terminals and headless runs

use std::ops::Range;

use glam::Vec2;

use super::{Color, Surface};
use crate::sim::Rect;

const EMPTY: char = ' ';
const RECT: char = '#';
const CIRCLE: char = 'O';
const DASH: char = ':';

/// Rasterizes draw calls onto a fixed grid of characters
///
/// Colors are ignored; each primitive has its own glyph. Text is written
/// verbatim starting at the cell under its anchor.
#[derive(Debug, Clone)]
pub struct AsciiSurface {
    cols: usize,
    rows: usize,
    /// Cells per field unit on each axis
    scale: Vec2,
    cells: Vec<char>,
}

impl AsciiSurface {
    /// Grid of `cols` x `rows` covering a field of size `field`
    pub fn new(field: Vec2, cols: usize, rows: usize) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            scale: Vec2::new(cols as f32 / field.x, rows as f32 / field.y),
            cells: vec![EMPTY; cols * rows],
        }
    }

    #[cfg(test)]
    fn get(&self, col: usize, row: usize) -> Option<char> {
        (col < self.cols && row < self.rows).then(|| self.cells[row * self.cols + col])
    }

    /// Grid as text, one line per row
    pub fn to_text(&self) -> String {
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn put(&mut self, col: usize, row: usize, ch: char) {
        if col < self.cols && row < self.rows {
            self.cells[row * self.cols + col] = ch;
        }
    }

    /// Cell containing a field-space point, clamped onto the grid
    fn cell_of(&self, p: Vec2) -> (usize, usize) {
        let col = ((p.x * self.scale.x).floor().max(0.0) as usize).min(self.cols - 1);
        let row = ((p.y * self.scale.y).floor().max(0.0) as usize).min(self.rows - 1);
        (col, row)
    }

    /// Cells covered by `lo..hi` (field units) on an axis; at least one cell
    /// when the span touches the grid at all
    fn span(lo: f32, hi: f32, scale: f32, n: usize) -> Range<usize> {
        let start = (lo * scale).floor().max(0.0) as usize;
        let end = ((hi * scale).ceil().max(0.0) as usize).min(n);
        if start >= n {
            return n..n;
        }
        start..end.max(start + 1)
    }
}

impl Surface for AsciiSurface {
    fn clear(&mut self) {
        self.cells.fill(EMPTY);
    }

    fn fill_rect(&mut self, rect: Rect, _color: Color) {
        let cols = Self::span(rect.left(), rect.right(), self.scale.x, self.cols);
        let rows = Self::span(rect.top(), rect.bottom(), self.scale.y, self.rows);
        for row in rows {
            for col in cols.clone() {
                self.put(col, row, RECT);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, _color: Color) {
        let cols = Self::span(center.x - radius, center.x + radius, self.scale.x, self.cols);
        let rows = Self::span(center.y - radius, center.y + radius, self.scale.y, self.rows);
        for row in rows {
            for col in cols.clone() {
                // Cell center back in field units
                let p = Vec2::new(
                    (col as f32 + 0.5) / self.scale.x,
                    (row as f32 + 0.5) / self.scale.y,
                );
                if p.distance(center) <= radius {
                    self.put(col, row, CIRCLE);
                }
            }
        }
        // Small circles may miss every cell center
        let (col, row) = self.cell_of(center);
        self.put(col, row, CIRCLE);
    }

    fn dashed_vline(&mut self, x: f32, top: f32, bottom: f32, dash: (f32, f32), _color: Color) {
        let (col, _) = self.cell_of(Vec2::new(x, top));
        let period = dash.0 + dash.1;
        for row in Self::span(top, bottom, self.scale.y, self.rows) {
            let y = (row as f32 + 0.5) / self.scale.y;
            if period <= 0.0 || (y - top).rem_euclid(period) < dash.0 {
                self.put(col, row, DASH);
            }
        }
    }

    fn draw_text(&mut self, text: &str, pos: Vec2, _size_px: f32, _color: Color) {
        let (col, row) = self.cell_of(pos);
        for (i, ch) in text.chars().enumerate() {
            self.put(col + i, row, ch);
        }
    }
}
