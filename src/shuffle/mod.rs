//! Scrambling.
//!
//! The shuffler only ever drives the [`MoveEngine`](crate::moves::MoveEngine)
//! with valid moves, so every scramble it produces is solvable by replaying
//! [`Scramble::inverse`].

pub mod shuffler;

pub use shuffler::{Scramble, ShuffleConfig, Shuffler, MAX_SCRAMBLE_TURNS};
