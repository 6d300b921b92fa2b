//! Terminal rendering layer.
//!
//! Two pieces: [`game_view`] composes the board and active piece into an
//! owned color grid (pure, unit-testable), and [`renderer`] owns the
//! terminal (raw mode, alternate screen) and draws that grid with a
//! generation/score header.

pub mod game_view;
pub mod renderer;

pub use auto_tetris_core as core;
pub use auto_tetris_types as types;

pub use game_view::{compose_board, BoardImage};
pub use renderer::TerminalRenderer;
