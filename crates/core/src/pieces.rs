//! Pieces module - the seven-shape catalog and the active piece type
//!
//! Each shape is a square 0/1 template paired with one fixed color. Spawning
//! converts the template into a colored [`Matrix`]; rotation is a plain
//! clockwise matrix rotation with no kicks.

use crate::board::{is_valid_move, Board};
use crate::matrix::Matrix;
use crate::rng::PieceSource;
use crate::types::{Color, ShapeKind, PREVIEW_COL, PREVIEW_ROW, SPAWN_COL, SPAWN_ROW};

/// Binary footprint of a shape, row-major.
pub type Template = &'static [&'static [u8]];

const I_TEMPLATE: Template = &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]];
const J_TEMPLATE: Template = &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]];
const L_TEMPLATE: Template = &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]];
const O_TEMPLATE: Template = &[&[1, 1], &[1, 1]];
const S_TEMPLATE: Template = &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]];
const Z_TEMPLATE: Template = &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]];
const T_TEMPLATE: Template = &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]];

/// Spawn-orientation template for a shape.
pub fn template(kind: ShapeKind) -> Template {
    match kind {
        ShapeKind::I => I_TEMPLATE,
        ShapeKind::J => J_TEMPLATE,
        ShapeKind::L => L_TEMPLATE,
        ShapeKind::O => O_TEMPLATE,
        ShapeKind::S => S_TEMPLATE,
        ShapeKind::Z => Z_TEMPLATE,
        ShapeKind::T => T_TEMPLATE,
    }
}

/// The fixed color of a shape.
pub fn color(kind: ShapeKind) -> Color {
    match kind {
        ShapeKind::I => Color::Cyan,
        ShapeKind::J => Color::Blue,
        ShapeKind::L => Color::Orange,
        ShapeKind::O => Color::Yellow,
        ShapeKind::S => Color::Green,
        ShapeKind::Z => Color::Red,
        ShapeKind::T => Color::Purple,
    }
}

/// Colored spawn-orientation matrix for a shape.
pub fn shape_matrix(kind: ShapeKind) -> Matrix {
    Matrix::from_template(template(kind), color(kind))
}

/// A shape footprint plus its anchor (top-left of the matrix) on the board.
///
/// `row` may be negative while the piece overhangs the top edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub matrix: Matrix,
    pub row: i32,
    pub col: i32,
}

impl Piece {
    /// A piece in spawn orientation at the spawn anchor.
    pub fn spawn(kind: ShapeKind) -> Self {
        Self {
            kind,
            matrix: shape_matrix(kind),
            row: SPAWN_ROW,
            col: SPAWN_COL,
        }
    }

    /// A piece in spawn orientation at the next-piece preview anchor.
    pub fn preview(kind: ShapeKind) -> Self {
        Self::spawn(kind).at_preview()
    }

    /// Same piece re-anchored at (row, col).
    pub fn at(self, row: i32, col: i32) -> Self {
        Self { row, col, ..self }
    }

    /// Re-anchored at the spawn position.
    pub fn at_spawn(self) -> Self {
        self.at(SPAWN_ROW, SPAWN_COL)
    }

    /// Re-anchored at the preview position.
    pub fn at_preview(self) -> Self {
        self.at(PREVIEW_ROW, PREVIEW_COL)
    }

    /// Candidate shifted by (d_row, d_col).
    pub fn shifted(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
            ..self.clone()
        }
    }

    /// Candidate rotated 90° clockwise around the same anchor.
    pub fn rotated(&self) -> Self {
        Self {
            matrix: self.matrix.rotate_cw(),
            ..self.clone()
        }
    }

    /// Whether this placement is legal on `board`.
    pub fn fits(&self, board: &Board) -> bool {
        is_valid_move(board, &self.matrix, self.row, self.col)
    }

    /// Absolute board coordinates of the filled cells.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32, Color)> + '_ {
        self.matrix
            .filled()
            .map(move |(r, c, color)| (self.row + r as i32, self.col + c as i32, color))
    }
}

/// Draw one shape from `source` and build it at the spawn anchor.
pub fn spawn_piece(source: &mut dyn PieceSource) -> Piece {
    Piece::spawn(source.next_shape())
}
