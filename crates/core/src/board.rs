//! Board module - the fixed 20x10 playfield and the placement rule
//!
//! The board is a flat, row-major array of cells for cache locality and
//! allocation-free cloning. Coordinates are `(row, col)`: row 0..19 top to
//! bottom, col 0..9 left to right.

use arrayvec::ArrayVec;

use crate::matrix::Matrix;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = WIDTH * HEIGHT;

/// Row indices removed by a single clear, bottom to top.
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// Result of writing a piece into the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LockOutcome {
    /// Cells copied into the board.
    pub written: usize,
    /// Cells skipped because they were above row 0.
    pub above_top: usize,
}

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * WIDTH + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Build a board from nested rows.
    ///
    /// # Panics
    ///
    /// Panics unless there are exactly 20 rows of exactly 10 cells.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        assert_eq!(rows.len(), HEIGHT, "board must have {HEIGHT} rows");
        assert!(
            rows.iter().all(|row| row.len() == WIDTH),
            "board rows must have {WIDTH} columns"
        );

        let mut board = Self::new();
        for (r, row) in rows.iter().enumerate() {
            board.cells[r * WIDTH..(r + 1) * WIDTH].copy_from_slice(row);
        }
        board
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i32, col: i32) -> Option<usize> {
        if row < 0 || row >= HEIGHT as i32 || col < 0 || col >= WIDTH as i32 {
            return None;
        }
        Some(row as usize * WIDTH + col as usize)
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at (row, col). Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// One row as a slice.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(WIDTH)
    }

    /// A row is full iff all 10 cells are non-empty
    pub fn is_row_full(&self, row: usize) -> bool {
        row < HEIGHT && self.row(row).iter().all(|cell| cell.is_some())
    }

    /// Row indices of every full row, top to bottom.
    pub fn full_rows(&self) -> ClearedRows {
        (0..HEIGHT).filter(|&r| self.is_row_full(r)).collect()
    }

    /// Remove all full rows, shift the rows above down, and fill the top with
    /// empty rows. Returns the removed row indices (bottom to top).
    ///
    /// Two-pointer compaction over the flat array; no allocation.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_row = HEIGHT;

        for read_row in (0..HEIGHT).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
                continue;
            }
            write_row -= 1;
            if write_row != read_row {
                let src = read_row * WIDTH;
                self.cells.copy_within(src..src + WIDTH, write_row * WIDTH);
            }
        }

        self.cells[..write_row * WIDTH].fill(None);
        cleared
    }

    /// Write every filled cell of `matrix`, anchored at (row, col), into the
    /// board. Cells above row 0 are not written; they are counted in
    /// [`LockOutcome::above_top`].
    pub fn lock(&mut self, matrix: &Matrix, row: i32, col: i32) -> LockOutcome {
        let mut outcome = LockOutcome::default();
        for (r, c, color) in matrix.filled() {
            let target_row = row + r as i32;
            let target_col = col + c as i32;
            if target_row < 0 {
                outcome.above_top += 1;
                continue;
            }
            if self.set(target_row, target_col, Some(color)) {
                outcome.written += 1;
            }
        }
        outcome
    }

    /// Number of filled cells on the board.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Convert to nested rows for display and assertions.
    pub fn to_rows(&self) -> Vec<Vec<Cell>> {
        self.rows().map(<[Cell]>::to_vec).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `matrix` anchored at (`row`, `col`) is a legal placement.
///
/// For every filled cell at `(r, c)`:
/// - `c + col` must be in `[0, 10)` and `r + row` must be `< 20`. There is no
///   lower bound on the row; negative rows are the spawn overhang.
/// - if `r + row >= 0`, the board cell there must be empty.
pub fn is_valid_move(board: &Board, matrix: &Matrix, row: i32, col: i32) -> bool {
    matrix.filled().all(|(r, c, _)| {
        let target_row = row + r as i32;
        let target_col = col + c as i32;

        let in_bounds = (0..WIDTH as i32).contains(&target_col) && target_row < HEIGHT as i32;
        if !in_bounds {
            return false;
        }
        target_row < 0 || !board.is_occupied(target_row, target_col)
    })
}
