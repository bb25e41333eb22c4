//! Move representation: axis + slice index + signed quarter turns.
//!
//! A move is what the interaction layer commits once a drag has been
//! snapped to whole quarter turns. Only `quarter_turns mod 4` affects the
//! puzzle state.

use serde::{Deserialize, Serialize};

use crate::core::cycle::FaceCycle;

/// The three slice-rotation families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// A column slice spanning every depth layer, turning Top → Front → Bottom.
    Vertical,
    /// A row slice spanning every depth layer, turning Left → Front → Right.
    Horizontal,
    /// One whole depth layer turning in its own plane.
    Layer,
}

impl Axis {
    /// All three axes.
    pub const ALL: [Axis; 3] = [Axis::Vertical, Axis::Horizontal, Axis::Layer];

    /// The color relabeling applied to every cublet this axis moves.
    #[must_use]
    pub const fn cycle(self) -> &'static FaceCycle {
        match self {
            Axis::Vertical => &FaceCycle::VERTICAL,
            Axis::Horizontal => &FaceCycle::HORIZONTAL,
            Axis::Layer => &FaceCycle::LAYER,
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Axis::Vertical => "vertical",
            Axis::Horizontal => "horizontal",
            Axis::Layer => "layer",
        };
        f.write_str(name)
    }
}

/// Turning direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// The other direction.
    #[must_use]
    pub const fn reversed(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A committed, discrete move.
///
/// ## Example
///
/// ```
/// use cubelet::moves::{Axis, Direction, Move};
///
/// let mv = Move::new(Axis::Vertical, 0, 1, Direction::CounterClockwise);
/// assert_eq!(mv.clockwise_steps(), 3);
/// assert_eq!(mv.inverse().clockwise_steps(), 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Which slice family turns.
    pub axis: Axis,

    /// Column (vertical), row (horizontal) or depth layer (layer twist).
    pub index: usize,

    /// Signed quarter turns; positive is clockwise.
    pub quarter_turns: i32,
}

impl Move {
    /// Create a move turning `quarter_turns` in `direction`.
    #[must_use]
    pub const fn new(axis: Axis, index: usize, quarter_turns: i32, direction: Direction) -> Self {
        let quarter_turns = match direction {
            Direction::Clockwise => quarter_turns,
            Direction::CounterClockwise => quarter_turns.wrapping_neg(),
        };
        Self {
            axis,
            index,
            quarter_turns,
        }
    }

    /// Single clockwise quarter turn.
    #[must_use]
    pub const fn clockwise(axis: Axis, index: usize) -> Self {
        Self::new(axis, index, 1, Direction::Clockwise)
    }

    /// Single counter-clockwise quarter turn.
    #[must_use]
    pub const fn counter_clockwise(axis: Axis, index: usize) -> Self {
        Self::new(axis, index, 1, Direction::CounterClockwise)
    }

    /// Vertical slice move at a column.
    #[must_use]
    pub const fn vertical(column: usize, quarter_turns: i32) -> Self {
        Self::new(Axis::Vertical, column, quarter_turns, Direction::Clockwise)
    }

    /// Horizontal slice move at a row.
    #[must_use]
    pub const fn horizontal(row: usize, quarter_turns: i32) -> Self {
        Self::new(Axis::Horizontal, row, quarter_turns, Direction::Clockwise)
    }

    /// Layer twist of a depth layer.
    #[must_use]
    pub const fn layer(layer: usize, quarter_turns: i32) -> Self {
        Self::new(Axis::Layer, layer, quarter_turns, Direction::Clockwise)
    }

    /// Number of clockwise single quarter turns this move amounts to (0-3).
    #[must_use]
    pub const fn clockwise_steps(&self) -> u32 {
        self.quarter_turns.rem_euclid(4) as u32
    }

    /// Check whether this move leaves the puzzle unchanged.
    #[must_use]
    pub const fn is_identity(&self) -> bool {
        self.clockwise_steps() == 0
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(&self) -> Self {
        Self {
            axis: self.axis,
            index: self.index,
            quarter_turns: self.quarter_turns.wrapping_neg(),
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} x{}", self.axis, self.index, self.quarter_turns)
    }
}
