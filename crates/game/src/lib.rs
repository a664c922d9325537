//! Othello game lifecycle
//!
//! This crate owns everything a presentation layer polls or drives:
//! - The menu / mode-selection / gameplay phase machine
//! - Human and computer player roles
//! - The per-turn protocol with pass and game-over handling

mod game;
mod player;

pub use game::*;
pub use player::*;
