//! Engine core - pure, deterministic game logic.
//!
//! This crate contains the full game-state engine with **zero
//! dependencies** on UI, timing, or I/O:
//!
//! - [`board`]: the fixed-size grid with collision detection, locking,
//!   and line clearing
//! - [`shapes`]: the seven piece matrices and 90-degree matrix rotation
//! - [`piece`]: the active falling piece (shape + position + color)
//! - [`session`]: the spawn/fall/lock/clear/respawn cycle with automatic
//!   restart and generation counting
//! - [`policy`]: the pluggable move-policy interface and the reference
//!   random-nudge policy
//! - [`rng`]: seedable LCG so a whole game replays from one seed
//! - [`scoring`]: the classic line-clear score table
//!
//! # Example
//!
//! ```
//! use auto_tetris_core::GameSession;
//! use auto_tetris_types::{GameAction, GameConfig};
//!
//! let mut session = GameSession::new(GameConfig::default());
//! let view = session.tick(Some(GameAction::MoveLeft));
//! assert_eq!(view.generation, 0);
//! ```

pub mod board;
pub mod piece;
pub mod policy;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shapes;
pub mod view;

pub use auto_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use piece::Piece;
pub use policy::{Idle, MovePolicy, RandomNudge};
pub use rng::SimpleRng;
pub use session::GameSession;
pub use shapes::{template, Shape};
pub use view::StateView;
