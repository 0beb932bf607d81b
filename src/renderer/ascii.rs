//! Character-grid surface
//!
//! Rasterizes fills into a coarse text grid so the headless demo can show a
//! frame in the log. Each cell samples the shape at its center.

use std::f32::consts::TAU;

use glam::Vec2;

use super::surface::Surface;
use crate::{Color, ENEMY_PALETTE};

pub struct AsciiSurface {
    cols: usize,
    rows: usize,
    /// Canvas pixels per cell
    cell: Vec2,
    cells: Vec<char>,
}

impl AsciiSurface {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cell: Vec2::ONE,
            cells: vec![' '; cols * rows],
        }
    }

    /// Rendered grid, one line per row
    pub fn to_text(&self) -> String {
        self.cells
            .chunks(self.cols.max(1))
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn glyph(color: Color) -> char {
        match color {
            Color::YELLOW => 'C',
            Color::WHITE => '.',
            Color::BLACK => 'o',
            c if ENEMY_PALETTE.contains(&c) => 'M',
            _ => '#',
        }
    }

    /// Fill every cell whose center satisfies `inside`
    fn fill_where(&mut self, color: Color, inside: impl Fn(Vec2) -> bool) {
        let glyph = Self::glyph(color);
        for row in 0..self.rows {
            for col in 0..self.cols {
                let center = Vec2::new(col as f32 + 0.5, row as f32 + 0.5) * self.cell;
                if inside(center) {
                    self.cells[row * self.cols + col] = glyph;
                }
            }
        }
    }

    /// Grid index of the cell containing `pos`, if on the grid
    fn index_of(&self, pos: Vec2) -> Option<usize> {
        let col = (pos.x / self.cell.x).floor();
        let row = (pos.y / self.cell.y).floor();
        if col >= 0.0 && row >= 0.0 && (col as usize) < self.cols && (row as usize) < self.rows {
            Some(row as usize * self.cols + col as usize)
        } else {
            None
        }
    }

    fn cell_at(&self, pos: Vec2) -> Option<char> {
        self.index_of(pos).map(|i| self.cells[i])
    }

    /// Shapes smaller than a cell still leave a mark in their own cell
    fn mark(&mut self, pos: Vec2, color: Color) {
        if let Some(i) = self.index_of(pos) {
            self.cells[i] = Self::glyph(color);
        }
    }
}

impl Surface for AsciiSurface {
    fn clear(&mut self, size: Vec2) {
        self.cell = size / Vec2::new(self.cols.max(1) as f32, self.rows.max(1) as f32);
        self.cells.fill(' ');
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if radius < self.cell.min_element() {
            // Sub-cell details (eyes, pupils) never overwrite a body
            if self.cell_at(center) == Some(' ') {
                self.mark(center, color);
            }
            return;
        }
        self.fill_where(color, |p| p.distance(center) <= radius);
    }

    fn fill_wedge(&mut self, center: Vec2, radius: f32, start: f32, end: f32, color: Color) {
        let span = (end - start).rem_euclid(TAU);
        self.fill_where(color, |p| {
            let d = p - center;
            if d.length() > radius {
                return false;
            }
            let theta = (d.y.atan2(d.x) - start).rem_euclid(TAU);
            theta <= span
        });
        self.mark(center, color);
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 {
            return;
        }
        self.fill_where(color, |p| point_in_polygon(p, points));
    }
}

/// Even-odd ray cast
fn point_in_polygon(p: Vec2, points: &[Vec2]) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (a, b) = (points[i], points[j]);
        if (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x {
            inside = !inside;
        }
        j = i;
    }
    inside
}
