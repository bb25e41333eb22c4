//! The puzzle: the API the interaction layer talks to.
//!
//! ## Lifecycle
//!
//! 1. Build with [`Puzzle::new`] (or [`Puzzle::construct`]): N³ cublets in
//!    the solved state.
//! 2. Optionally [`Puzzle::shuffle`].
//! 3. For each committed gesture call [`Puzzle::apply_move`], then
//!    [`Puzzle::is_solved`].
//!
//! Moves are applied one at a time and each is all-or-nothing. The puzzle
//! owns its grid exclusively; share it across threads only behind a lock.

use log::{debug, error};
use rand::Rng;
use rustc_hash::FxHashMap;

use super::observer::PuzzleObserver;
use crate::core::color::{Color, FaceColors};
use crate::core::config::PuzzleConfig;
use crate::core::cublet::{Cublet, CubletId};
use crate::core::error::Result;
use crate::core::face::FaceMap;
use crate::core::grid::{Grid, SlotPos};
use crate::core::rng::{PuzzleRng, PuzzleRngState};
use crate::moves::{Axis, Direction, Move, MoveEngine};
use crate::rules::SolvedChecker;
use crate::shuffle::{Scramble, Shuffler};

/// An NxNxN cube puzzle.
pub struct Puzzle {
    config: PuzzleConfig,
    grid: Grid,
    checker: SolvedChecker,
    rng: PuzzleRng,
    observers: Vec<Box<dyn PuzzleObserver>>,
}

impl std::fmt::Debug for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Puzzle")
            .field("config", &self.config)
            .field("grid", &self.grid)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Puzzle {
    /// Build a solved puzzle from a configuration.
    pub fn new(config: PuzzleConfig) -> Result<Self> {
        config.validate()?;
        let grid = Grid::new(config.size, &config.face_colors)?;
        debug!("built size {} cube with {} cublets", config.size, grid.len());

        Ok(Self {
            checker: SolvedChecker::new(config.win_condition),
            rng: PuzzleRng::new(config.seed),
            grid,
            config,
            observers: Vec::new(),
        })
    }

    /// Build a solved puzzle of `size` with the given face colors and
    /// default settings otherwise.
    pub fn construct(size: usize, face_colors: FaceColors) -> Result<Self> {
        Self::new(PuzzleConfig::new(size).with_face_colors(face_colors))
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Cube size N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Read-only view of the grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Register an observer.
    pub fn add_observer(&mut self, observer: Box<dyn PuzzleObserver>) {
        self.observers.push(observer);
    }

    /// Apply a committed move given as its parts.
    pub fn apply_move(
        &mut self,
        axis: Axis,
        index: usize,
        quarter_turns: i32,
        clockwise: bool,
    ) -> Result<()> {
        let direction = if clockwise {
            Direction::Clockwise
        } else {
            Direction::CounterClockwise
        };
        self.apply(Move::new(axis, index, quarter_turns, direction))
    }

    /// Apply a committed move.
    ///
    /// On error the puzzle is unchanged and observers are not called.
    pub fn apply(&mut self, mv: Move) -> Result<()> {
        MoveEngine::apply(&mut self.grid, &mv)?;
        self.notify(&mv);
        Ok(())
    }

    /// Apply a sequence of moves.
    ///
    /// Every move is validated before any is applied, so an invalid move
    /// anywhere in the sequence leaves the puzzle untouched.
    pub fn apply_moves(&mut self, moves: &[Move]) -> Result<()> {
        for mv in moves {
            MoveEngine::validate(&self.grid, mv)?;
        }
        for mv in moves {
            self.apply(*mv)?;
        }
        Ok(())
    }

    fn notify(&mut self, mv: &Move) {
        if self.observers.is_empty() {
            return;
        }
        let solved = self.is_solved();
        for observer in &mut self.observers {
            observer.on_move(mv, &self.grid);
            if solved {
                observer.on_solved();
            }
        }
    }

    /// Check the win condition.
    ///
    /// An exposure invariant violation is logged and reported as unsolved;
    /// use [`Puzzle::try_is_solved`] to see the error.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        match self.try_is_solved() {
            Ok(solved) => solved,
            Err(err) => {
                error!("solved check failed: {err}");
                false
            }
        }
    }

    /// Check the win condition, surfacing invariant violations.
    pub fn try_is_solved(&self) -> Result<bool> {
        self.checker.check(&self.grid)
    }

    /// Face colors of the cublet at `(layer, slot)`.
    pub fn cublet(&self, layer: usize, slot: usize) -> Result<&FaceMap<Option<Color>>> {
        Ok(self.grid.get(layer, slot)?.colors())
    }

    /// The cublet at `(layer, slot)`.
    pub fn cublet_at(&self, layer: usize, slot: usize) -> Result<&Cublet> {
        self.grid.get(layer, slot)
    }

    /// Find where a cublet currently sits.
    ///
    /// The interaction layer uses this to turn a clicked cublet into the
    /// slice indices of a move.
    #[must_use]
    pub fn locate(&self, id: CubletId) -> Option<SlotPos> {
        self.grid.locate(id)
    }

    /// Count stickers of each color across the whole cube.
    #[must_use]
    pub fn color_counts(&self) -> FxHashMap<Color, usize> {
        let mut counts = FxHashMap::default();
        for (_, cublet) in self.grid.iter() {
            for color in cublet.colors().values().flatten() {
                *counts.entry(*color).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Scramble with `iterations` rounds from the puzzle's own RNG.
    ///
    /// Observers are not notified of scramble moves.
    pub fn shuffle(&mut self, iterations: usize) -> Result<Scramble> {
        let shuffler = Shuffler::new(self.config.shuffle.with_iterations(iterations));
        shuffler.shuffle(&mut self.grid, &mut self.rng)
    }

    /// Scramble with `iterations` rounds from a caller-supplied RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, iterations: usize, rng: &mut R) -> Result<Scramble> {
        let shuffler = Shuffler::new(self.config.shuffle.with_iterations(iterations));
        shuffler.shuffle(&mut self.grid, rng)
    }

    /// Scramble with the configured number of rounds.
    pub fn scramble(&mut self) -> Result<Scramble> {
        self.shuffle(self.config.shuffle.iterations)
    }

    /// Capture the RNG position so a saved puzzle can resume its scramble
    /// sequence.
    #[must_use]
    pub fn rng_state(&self) -> PuzzleRngState {
        self.rng.state()
    }

    /// Resume the RNG from a captured position.
    pub fn restore_rng(&mut self, state: &PuzzleRngState) {
        self.rng = PuzzleRng::from_state(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::default_face_colors;
    use crate::core::error::CubeError;
    use crate::core::face::Face;

    #[test]
    fn test_construct_is_solved() {
        let puzzle = Puzzle::construct(3, default_face_colors()).unwrap();
        assert_eq!(puzzle.size(), 3);
        assert!(puzzle.is_solved());
        assert_eq!(puzzle.try_is_solved(), Ok(true));
    }

    #[test]
    fn test_construct_rejects_size_one() {
        let err = Puzzle::construct(1, default_face_colors()).unwrap_err();
        assert_eq!(err, CubeError::InvalidSize { size: 1 });
    }

    #[test]
    fn test_apply_move_direction_flag() {
        let mut a = Puzzle::new(PuzzleConfig::default()).unwrap();
        let mut b = Puzzle::new(PuzzleConfig::default()).unwrap();
        a.apply_move(Axis::Horizontal, 1, 1, false).unwrap();
        b.apply_move(Axis::Horizontal, 1, 3, true).unwrap();
        assert_eq!(a.grid(), b.grid());
    }

    #[test]
    fn test_cublet_read_access() {
        let puzzle = Puzzle::new(PuzzleConfig::default()).unwrap();
        let colors = puzzle.cublet(0, 0).unwrap();
        assert_eq!(colors[Face::Front], Some(Color(1)));
        assert!(puzzle.cublet(3, 0).is_err());
        assert_eq!(puzzle.cublet_at(2, 8).unwrap().id(), CubletId(26));
    }

    #[test]
    fn test_color_counts() {
        let puzzle = Puzzle::new(PuzzleConfig::new(4)).unwrap();
        let counts = puzzle.color_counts();
        assert_eq!(counts.len(), 6);
        assert!(counts.values().all(|&n| n == 16));
    }

    #[test]
    fn test_apply_moves_is_all_or_nothing() {
        let mut puzzle = Puzzle::new(PuzzleConfig::default()).unwrap();
        let before = puzzle.grid().clone();
        let moves = [Move::vertical(0, 1), Move::layer(7, 1)];
        assert!(puzzle.apply_moves(&moves).is_err());
        assert_eq!(puzzle.grid(), &before);
    }

    #[test]
    fn test_scramble_uses_config() {
        let config = PuzzleConfig::default().with_shuffle(
            crate::shuffle::ShuffleConfig::default().with_iterations(5),
        );
        let mut puzzle = Puzzle::new(config).unwrap();
        let scramble = puzzle.scramble().unwrap();
        assert_eq!(scramble.len(), 10);
    }

    #[test]
    fn test_rng_checkpoint_replays_scramble() {
        let mut puzzle = Puzzle::new(PuzzleConfig::default()).unwrap();
        puzzle.shuffle(2).unwrap();
        let checkpoint = puzzle.rng_state();

        let first = puzzle.shuffle(5).unwrap();
        puzzle.restore_rng(&checkpoint);
        let replay = puzzle.shuffle(5).unwrap();
        assert_eq!(first, replay);
    }
}
