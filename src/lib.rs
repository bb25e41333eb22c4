//! # cubelet
//!
//! A discrete NxNxN twisty cube puzzle engine.
//!
//! ## Design Principles
//!
//! 1. **Size-Agnostic**: Every rule is written for an arbitrary cube size
//!    N ≥ 2. Nothing assumes a 3×3×3.
//!
//! 2. **Atomic Moves**: A move is read in full before it is written, and
//!    either applies completely or not at all.
//!
//! 3. **Exact Permutations**: Moves only relabel and relocate what already
//!    exists. No cublet or color is ever created or destroyed.
//!
//! ## Architecture
//!
//! - **Arena + Flat Grid**: Cublets live in an arena; the grid is one flat
//!   array of cublet IDs, so the bijection invariant is a single scan.
//!
//! - **Constant Cycles**: The three color relabelings are compile-time
//!   4-cycle tables, one per move family.
//!
//! - **Rendering Outside**: Drag tracking, angle snapping and drawing live
//!   in the interaction layer, which commits whole quarter turns and reads
//!   cublet colors back.
//!
//! ## Modules
//!
//! - `core`: Faces, colors, cublets, cycles, grid, RNG, configuration, errors
//! - `moves`: Move representation and the move engine
//! - `rules`: Solved-state check and win conditions
//! - `shuffle`: Random scramble generation
//! - `puzzle`: The puzzle facade and observer hooks

pub mod core;
pub mod moves;
pub mod rules;
pub mod shuffle;
pub mod puzzle;

// Re-export commonly used types
pub use crate::core::{
    Face, FaceMap, Color, FaceColors, default_face_colors,
    FaceCycle, Cublet, CubletId, Grid, SlotPos,
    PuzzleConfig, PuzzleRng, PuzzleRngState,
    CubeError, Result,
};

pub use crate::moves::{Axis, Direction, Move, MoveEngine};

pub use crate::rules::{SolvedChecker, WinCondition};

pub use crate::shuffle::{Scramble, ShuffleConfig, Shuffler, MAX_SCRAMBLE_TURNS};

pub use crate::puzzle::{MoveLog, Puzzle, PuzzleObserver};
