//! Win conditions.
//!
//! The solved check is a read-only scan over the grid's outer faces. It
//! never mutates state and can be called after every move.

pub mod solved;

pub use solved::{SolvedChecker, WinCondition};
