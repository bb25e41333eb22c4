//! Observer hooks for the interaction layer.
//!
//! The renderer subscribes to committed moves so it can resync cublet
//! transforms, and to the solved event to show the win screen. Observers
//! only see state after a move has fully completed.

use std::cell::RefCell;
use std::rc::Rc;

use crate::core::grid::Grid;
use crate::moves::Move;

/// Receives puzzle events. Every method has an empty default.
pub trait PuzzleObserver {
    /// Called after a move has been applied.
    fn on_move(&mut self, _mv: &Move, _grid: &Grid) {}

    /// Called after a move leaves the puzzle solved.
    fn on_solved(&mut self) {}
}

/// Observer that records what it sees. Handy in tests and replays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveLog {
    /// Moves seen, in order.
    pub moves: Vec<Move>,
    /// Number of solved notifications.
    pub solved_count: u32,
}

impl PuzzleObserver for MoveLog {
    fn on_move(&mut self, mv: &Move, _grid: &Grid) {
        self.moves.push(*mv);
    }

    fn on_solved(&mut self) {
        self.solved_count += 1;
    }
}

/// Shared observer, so the caller can keep a handle while the puzzle owns
/// another.
impl<T: PuzzleObserver> PuzzleObserver for Rc<RefCell<T>> {
    fn on_move(&mut self, mv: &Move, grid: &Grid) {
        self.borrow_mut().on_move(mv, grid);
    }

    fn on_solved(&mut self) {
        self.borrow_mut().on_solved();
    }
}
