//! Puzzle facade and observer hooks.

#[allow(clippy::module_inception)]
pub mod puzzle;
pub mod observer;

pub use puzzle::Puzzle;
pub use observer::{MoveLog, PuzzleObserver};
