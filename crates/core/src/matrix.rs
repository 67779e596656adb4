//! Matrix module - rectangular grids of cells
//!
//! A piece footprint is a small square matrix of cells. Storage is a flat,
//! row-major `Vec` so a matrix clones cheaply into every new state value.
//! Coordinates are `(row, col)` with row 0 at the top.

use crate::types::{Cell, Color};

/// Rectangular row-major grid of [`Cell`]s.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Matrix {
    /// Create an all-empty matrix.
    pub fn empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Build from nested rows.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        assert!(
            rows.iter().all(|row| row.len() == width),
            "matrix rows must all have length {width}"
        );

        let cells = rows.into_iter().flatten().collect();
        Self {
            rows: height,
            cols: width,
            cells,
        }
    }

    /// Build a square matrix, as required for piece footprints.
    ///
    /// # Panics
    ///
    /// Panics if the rows are ragged or the matrix is not square.
    pub fn square(rows: Vec<Vec<Cell>>) -> Self {
        let m = Self::from_rows(rows);
        assert_eq!(m.rows, m.cols, "piece matrix must be square");
        m
    }

    /// Convert a 0/1 template into colored cells (1 → `color`, 0 → empty).
    pub fn from_template(template: &[&[u8]], color: Color) -> Self {
        Self::square(
            template
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|&bit| if bit != 0 { Some(color) } else { None })
                        .collect()
                })
                .collect(),
        )
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at `(row, col)`; `None` when out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// Iterate the non-empty cells as `(row, col, color)`.
    pub fn filled(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.map(|color| (i / cols, i % cols, color)))
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// 0/1 mask of the matrix, handy for comparing against templates.
    pub fn mask(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|r| self.row(r).iter().map(|c| u8::from(c.is_some())).collect())
            .collect()
    }

    /// Rotate 90° clockwise: `new[i][j] = old[n - j][i]` with `n = side - 1`.
    ///
    /// # Panics
    ///
    /// Panics if the matrix is not square.
    pub fn rotate_cw(&self) -> Self {
        assert_eq!(self.rows, self.cols, "only square matrices rotate");
        let side = self.rows;
        let mut out = Self::empty(side, side);
        if side == 0 {
            return out;
        }
        let n = side - 1;
        for i in 0..side {
            for j in 0..side {
                out.cells[i * side + j] = self.cells[(n - j) * side + i];
            }
        }
        out
    }
}
