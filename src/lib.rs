//! Auto Tetris (workspace facade crate).
//!
//! This package exposes the member crates under the stable
//! `auto_tetris::{core,input,term,types}` module names; the
//! implementation lives in dedicated crates under `crates/`.

pub use auto_tetris_core as core;
pub use auto_tetris_input as input;
pub use auto_tetris_term as term;
pub use auto_tetris_types as types;
