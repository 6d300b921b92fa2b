//! The active falling piece.

use crate::shapes::{template, Shape};
use crate::types::{PieceKind, Rgb};

/// The currently falling piece: a (possibly rotated) shape matrix, a
/// top-left offset on the board, and a color drawn from the palette.
///
/// Exactly one of these exists at a time, owned by the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
    pub color: Rgb,
}

impl Piece {
    pub fn new(shape: Shape, x: i8, y: i8, color: Rgb) -> Self {
        Self { shape, x, y, color }
    }

    /// Spawn a piece of the given kind at the top of the board,
    /// horizontally centered: `x = board_width / 2 - shape_cols / 2`.
    pub fn spawn(kind: PieceKind, color: Rgb, board_width: u8) -> Self {
        let shape = template(kind);
        let x = (board_width / 2) as i8 - (shape.cols() / 2) as i8;
        Self::new(shape, x, 0, color)
    }

    /// Iterate the filled cells in absolute board coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        let (x, y) = (self.x, self.y);
        self.shape.cells().map(move |(dx, dy)| (x + dx, y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_centers_horizontally() {
        // 13-wide board: I (4 cols) spawns at 6 - 2 = 4, O (2 cols) at 5.
        let piece = Piece::spawn(PieceKind::I, Rgb::new(255, 0, 0), 13);
        assert_eq!((piece.x, piece.y), (4, 0));

        let piece = Piece::spawn(PieceKind::O, Rgb::new(255, 0, 0), 13);
        assert_eq!((piece.x, piece.y), (5, 0));
    }

    #[test]
    fn test_spawn_on_narrow_board() {
        // 4-wide board: O spawns at 2 - 1 = 1.
        let piece = Piece::spawn(PieceKind::O, Rgb::new(255, 0, 0), 4);
        assert_eq!(piece.x, 1);
    }

    #[test]
    fn test_cells_are_absolute() {
        let mut piece = Piece::spawn(PieceKind::O, Rgb::new(0, 255, 0), 13);
        piece.y = 3;
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(5, 3), (6, 3), (5, 4), (6, 4)]);
    }
}
