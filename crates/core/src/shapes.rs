//! Shape catalog and matrix rotation.
//!
//! A shape is a small rectangular boolean matrix (at most 4x4). The seven
//! canonical templates are read-only; rotation always produces a new
//! matrix by repeated 90-degree clockwise transform (reverse row order,
//! then transpose).

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Maximum extent of a shape matrix in either dimension.
pub const MAX_SHAPE_DIM: usize = 4;

type ShapeRow = ArrayVec<bool, MAX_SHAPE_DIM>;

/// Immutable rectangular boolean matrix describing a piece geometry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: ArrayVec<ShapeRow, MAX_SHAPE_DIM>,
}

impl Shape {
    /// Build a shape from bit rows. Rows must be non-empty, rectangular,
    /// and at most [`MAX_SHAPE_DIM`] in either dimension.
    pub fn from_bits(bits: &[&[u8]]) -> Self {
        assert!(!bits.is_empty() && bits.len() <= MAX_SHAPE_DIM);
        let cols = bits[0].len();
        assert!(cols > 0 && cols <= MAX_SHAPE_DIM);

        let mut rows = ArrayVec::new();
        for bit_row in bits {
            assert_eq!(bit_row.len(), cols, "shape rows must be rectangular");
            let mut row = ShapeRow::new();
            for &bit in bit_row.iter() {
                row.push(bit != 0);
            }
            rows.push(row);
        }
        Self { rows }
    }

    /// Number of rows in the matrix.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the matrix.
    pub fn cols(&self) -> usize {
        self.rows[0].len()
    }

    /// Whether the cell at (x, y) is filled. Out-of-matrix queries are
    /// simply empty.
    pub fn filled(&self, x: usize, y: usize) -> bool {
        self.rows
            .get(y)
            .and_then(|row| row.get(x))
            .copied()
            .unwrap_or(false)
    }

    /// Iterate the filled cells as (x, y) offsets from the matrix origin.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &filled)| filled)
                .map(move |(x, _)| (x as i8, y as i8))
        })
    }

    /// One 90-degree clockwise turn: `new[y][x] = old[rows - 1 - x][y]`.
    pub fn rotated_cw(&self) -> Self {
        let (r, c) = (self.rows(), self.cols());
        let mut rows = ArrayVec::new();
        for y in 0..c {
            let mut row = ShapeRow::new();
            for x in 0..r {
                row.push(self.rows[r - 1 - x][y]);
            }
            rows.push(row);
        }
        Self { rows }
    }

    /// Rotate by `turns` quarter-turns clockwise, taken mod 4. Negative
    /// turns rotate counter-clockwise: `rotated(-1)` equals three
    /// clockwise turns and exactly undoes `rotated(1)`.
    pub fn rotated(&self, turns: i32) -> Self {
        let mut shape = self.clone();
        for _ in 0..turns.rem_euclid(4) {
            shape = shape.rotated_cw();
        }
        shape
    }
}

/// The canonical template for a piece kind, in spawn orientation.
pub fn template(kind: PieceKind) -> Shape {
    let bits: &[&[u8]] = match kind {
        PieceKind::I => &[&[1, 1, 1, 1]],
        PieceKind::O => &[&[1, 1], &[1, 1]],
        PieceKind::T => &[&[0, 1, 0], &[1, 1, 1]],
        PieceKind::S => &[&[1, 1, 0], &[0, 1, 1]],
        PieceKind::Z => &[&[0, 1, 1], &[1, 1, 0]],
        PieceKind::L => &[&[1, 0, 0], &[1, 1, 1]],
        PieceKind::J => &[&[0, 0, 1], &[1, 1, 1]],
    };
    Shape::from_bits(bits)
}
