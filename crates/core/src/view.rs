//! Read-only view of the session state.

use crate::board::Board;
use crate::piece::Piece;

/// Borrowed snapshot of everything a renderer or move policy may read:
/// the board grid, the active piece, and the session counters. Returned
/// by every tick; never grants mutation.
#[derive(Debug, Clone, Copy)]
pub struct StateView<'a> {
    pub board: &'a Board,
    pub piece: &'a Piece,
    pub score: u32,
    pub generation: u32,
}
