//! Core puzzle types: faces, colors, cublets, cycles, grid, RNG, configuration.
//!
//! This module holds the data model. It knows nothing about how moves are
//! chosen or when the puzzle counts as solved.

pub mod face;
pub mod color;
pub mod cycle;
pub mod cublet;
pub mod grid;
pub mod config;
pub mod rng;
pub mod error;

pub use face::{Face, FaceMap};
pub use color::{default_face_colors, Color, FaceColors};
pub use cycle::FaceCycle;
pub use cublet::{Cublet, CubletId};
pub use grid::{Grid, SlotPos, MIN_SIZE};
pub use config::PuzzleConfig;
pub use rng::{PuzzleRng, PuzzleRngState};
pub use error::{CubeError, Result};
