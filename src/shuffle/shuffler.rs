//! Random scramble generation.

use log::debug;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::core::grid::Grid;
use crate::moves::{Axis, Move, MoveEngine};

/// Largest quarter-turn count a scramble move can use. Four turns would be
/// the identity.
pub const MAX_SCRAMBLE_TURNS: u32 = 3;

/// Moves preallocated for a scramble record; longer scrambles grow on demand.
const PREALLOCATED_MOVES: usize = 1024;

/// Scramble parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShuffleConfig {
    /// Number of rounds. Each round applies one vertical and one horizontal
    /// slice move.
    pub iterations: usize,

    /// Upper bound on the quarter turns of a single scramble move.
    /// Each move turns between 1 and this many quarter turns. Must lie in
    /// `1..=MAX_SCRAMBLE_TURNS`; the shuffler clamps anything else.
    pub max_quarter_turns: u32,
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        Self {
            iterations: 20,
            max_quarter_turns: 3,
        }
    }
}

impl ShuffleConfig {
    /// Set the number of rounds.
    #[must_use]
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Set the quarter-turn bound.
    #[must_use]
    pub fn with_max_quarter_turns(mut self, max_quarter_turns: u32) -> Self {
        self.max_quarter_turns = max_quarter_turns;
        self
    }
}

/// Moves applied by one scramble, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scramble {
    moves: Vec<Move>,
}

impl Scramble {
    /// Moves in the order they were applied.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Check if no moves were applied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// The move sequence that undoes this scramble.
    #[must_use]
    pub fn inverse(&self) -> Vec<Move> {
        self.moves.iter().rev().map(Move::inverse).collect()
    }
}

/// Drives the move engine with random slice moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct Shuffler {
    config: ShuffleConfig,
}

impl Shuffler {
    /// Create a shuffler.
    #[must_use]
    pub fn new(config: ShuffleConfig) -> Self {
        Self { config }
    }

    /// Get the scramble parameters.
    #[must_use]
    pub fn config(&self) -> &ShuffleConfig {
        &self.config
    }

    /// Pick a random slice move on `axis`.
    pub fn random_move<R: Rng + ?Sized>(&self, size: usize, axis: Axis, rng: &mut R) -> Move {
        let max = self.config.max_quarter_turns.clamp(1, MAX_SCRAMBLE_TURNS);
        let index = rng.gen_range(0..size);
        let turns = i32::try_from(rng.gen_range(1..=max)).unwrap_or(1);
        Move::new(axis, index, turns, Default::default())
    }

    fn move_capacity(&self) -> usize {
        self.config.iterations.saturating_mul(2).min(PREALLOCATED_MOVES)
    }

    /// Scramble a grid in place and return the moves applied.
    pub fn shuffle<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> Result<Scramble> {
        let size = grid.size();
        let mut moves = Vec::with_capacity(self.move_capacity());

        for _ in 0..self.config.iterations {
            for axis in [Axis::Vertical, Axis::Horizontal] {
                let mv = self.random_move(size, axis, rng);
                MoveEngine::apply(grid, &mv)?;
                moves.push(mv);
            }
        }

        debug!("scrambled size {size} cube with {} moves", moves.len());
        Ok(Scramble { moves })
    }
}
