//! Moves and the engine that applies them.

pub mod twist;
pub mod engine;

pub use twist::{Axis, Direction, Move};
pub use engine::MoveEngine;
