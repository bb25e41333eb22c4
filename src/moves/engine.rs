//! Move engine: the permutation algebra behind every slice rotation.
//!
//! A quarter turn does two things to every cublet in the turning slice:
//! it moves the cublet to a new slot and relabels its colors with the
//! axis's [`FaceCycle`]. Both happen together, per cublet, from a plan
//! built by reading the whole slice before anything is written.
//!
//! ## Quarter-turn maps (clockwise, size N)
//!
//! | Axis         | From                  | To                         |
//! |--------------|-----------------------|----------------------------|
//! | `Vertical`   | `(d, c + N·row)`      | `(row, c + N·(N-1-d))`     |
//! | `Horizontal` | `(d, N·r + col)`      | `(col, N·r + (N-1-d))`     |
//! | `Layer`      | `(d, N·row + col)`    | `(d, N·col + (N-1-row))`   |
//!
//! Moves of `k` quarter turns run `k mod 4` single clockwise steps;
//! counter-clockwise turns are normalised to their clockwise equivalent.

use log::{trace, warn};
use smallvec::SmallVec;

use super::twist::{Axis, Move};
use crate::core::cublet::CubletId;
use crate::core::error::{CubeError, Result};
use crate::core::grid::{Grid, SlotPos};

/// Applies moves to a [`Grid`].
///
/// Stateless: every call takes the grid it works on.
#[derive(Clone, Copy, Debug, Default)]
pub struct MoveEngine;

impl MoveEngine {
    /// Check that a move fits a cube of the grid's size.
    pub fn validate(grid: &Grid, mv: &Move) -> Result<()> {
        let size = grid.size();
        if mv.index >= size {
            return Err(CubeError::InvalidMove {
                axis: mv.axis,
                index: mv.index,
                size,
            });
        }
        Ok(())
    }

    /// Apply a move.
    ///
    /// Either the whole move is applied or, on error, nothing changes.
    pub fn apply(grid: &mut Grid, mv: &Move) -> Result<()> {
        if let Err(err) = Self::validate(grid, mv) {
            warn!("rejected move {mv}: {err}");
            return Err(err);
        }

        for _ in 0..mv.clockwise_steps() {
            Self::quarter_turn(grid, mv.axis, mv.index)?;
        }
        Ok(())
    }

    /// Positions belonging to a slice, in the order the slice is read.
    ///
    /// Bounds are not checked; `index` must be below `size`.
    #[must_use]
    pub fn slice_positions(size: usize, axis: Axis, index: usize) -> Vec<SlotPos> {
        let mut positions = Vec::with_capacity(size * size);
        match axis {
            Axis::Vertical => {
                for layer in 0..size {
                    for row in 0..size {
                        positions.push(SlotPos::from_row_col(layer, row, index, size));
                    }
                }
            }
            Axis::Horizontal => {
                for layer in 0..size {
                    for col in 0..size {
                        positions.push(SlotPos::from_row_col(layer, index, col, size));
                    }
                }
            }
            Axis::Layer => {
                for slot in 0..size * size {
                    positions.push(SlotPos::new(index, slot));
                }
            }
        }
        positions
    }

    /// Where a position in a turning slice lands after one clockwise
    /// quarter turn.
    #[must_use]
    pub fn quarter_turn_target(size: usize, axis: Axis, pos: SlotPos) -> SlotPos {
        let last = size - 1;
        let (row, col) = (pos.row(size), pos.col(size));
        match axis {
            Axis::Vertical => SlotPos::from_row_col(row, last - pos.layer, col, size),
            Axis::Horizontal => SlotPos::from_row_col(col, row, last - pos.layer, size),
            Axis::Layer => SlotPos::from_row_col(pos.layer, col, last - row, size),
        }
    }

    /// One clockwise quarter turn of a validated slice.
    fn quarter_turn(grid: &mut Grid, axis: Axis, index: usize) -> Result<()> {
        let size = grid.size();

        // Read the whole slice before writing any of it.
        let plan = Self::slice_positions(size, axis, index)
            .into_iter()
            .map(|from| {
                let id = grid.id_at(from.layer, from.slot)?;
                Ok((id, Self::quarter_turn_target(size, axis, from)))
            })
            .collect::<Result<SmallVec<[(CubletId, SlotPos); 36]>>>()?;

        let cycle = axis.cycle();
        for &(id, to) in &plan {
            grid.set(to.layer, to.slot, id)?;
            grid.cublet_mut(id)
                .ok_or(CubeError::UnknownCublet { id })?
                .rotate(cycle);
        }

        trace!("{axis} slice {index}: quarter turn moved {} cublets", plan.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::default_face_colors;
    use crate::core::face::Face;

    fn grid(size: usize) -> Grid {
        Grid::new(size, &default_face_colors()).unwrap()
    }

    #[test]
    fn test_targets_are_a_permutation_of_the_slice() {
        for size in 2..=5 {
            for axis in Axis::ALL {
                for index in 0..size {
                    let mut from = MoveEngine::slice_positions(size, axis, index);
                    let mut to: Vec<_> = from
                        .iter()
                        .map(|&p| MoveEngine::quarter_turn_target(size, axis, p))
                        .collect();
                    from.sort_by_key(|p| (p.layer, p.slot));
                    to.sort_by_key(|p| (p.layer, p.slot));
                    assert_eq!(from, to, "size {size} {axis} {index}");
                }
            }
        }
    }

    #[test]
    fn test_vertical_target_3x3() {
        // Front-top of column 0 rolls down to front-bottom.
        let to = MoveEngine::quarter_turn_target(3, Axis::Vertical, SlotPos::new(0, 0));
        assert_eq!(to, SlotPos::new(0, 6));
        // Front-bottom goes to back-bottom.
        let to = MoveEngine::quarter_turn_target(3, Axis::Vertical, SlotPos::new(0, 6));
        assert_eq!(to, SlotPos::new(2, 6));
    }

    #[test]
    fn test_horizontal_target_3x3() {
        // Front-left of row 1 swings to front-right.
        let to = MoveEngine::quarter_turn_target(3, Axis::Horizontal, SlotPos::new(0, 3));
        assert_eq!(to, SlotPos::new(0, 5));
        let to = MoveEngine::quarter_turn_target(3, Axis::Horizontal, SlotPos::new(0, 5));
        assert_eq!(to, SlotPos::new(2, 5));
    }

    #[test]
    fn test_layer_target_3x3() {
        // Top-left corner goes to top-right.
        let to = MoveEngine::quarter_turn_target(3, Axis::Layer, SlotPos::new(1, 0));
        assert_eq!(to, SlotPos::new(1, 2));
        let to = MoveEngine::quarter_turn_target(3, Axis::Layer, SlotPos::new(1, 4));
        assert_eq!(to, SlotPos::new(1, 4));
    }

    #[test]
    fn test_invalid_move_changes_nothing() {
        let mut g = grid(3);
        let before = g.clone();
        let err = MoveEngine::apply(&mut g, &Move::vertical(3, 1)).unwrap_err();
        assert_eq!(
            err,
            CubeError::InvalidMove {
                axis: Axis::Vertical,
                index: 3,
                size: 3
            }
        );
        assert_eq!(g, before);
    }

    #[test]
    fn test_zero_turns_is_noop() {
        let mut g = grid(3);
        let before = g.clone();
        MoveEngine::apply(&mut g, &Move::layer(0, 0)).unwrap();
        MoveEngine::apply(&mut g, &Move::layer(0, 8)).unwrap();
        assert_eq!(g, before);
    }

    #[test]
    fn test_moves_keep_invariants() {
        for size in 2..=4 {
            let mut g = grid(size);
            for axis in Axis::ALL {
                for index in 0..size {
                    MoveEngine::apply(&mut g, &Move::new(axis, index, 1, Default::default())).unwrap();
                    g.check_invariants().unwrap();
                }
            }
        }
    }

    #[test]
    fn test_counter_clockwise_undoes_clockwise() {
        let mut g = grid(3);
        let before = g.clone();
        MoveEngine::apply(&mut g, &Move::clockwise(Axis::Horizontal, 2)).unwrap();
        assert_ne!(g, before);
        MoveEngine::apply(&mut g, &Move::counter_clockwise(Axis::Horizontal, 2)).unwrap();
        assert_eq!(g, before);
    }

    #[test]
    fn test_layer_twist_moves_stickers() {
        let colors = default_face_colors();
        let mut g = grid(3);
        MoveEngine::apply(&mut g, &Move::layer(0, 1)).unwrap();

        // The old top-left corner is now top-right: its Left sticker is on Top.
        let moved = g.get(0, 2).unwrap();
        assert_eq!(moved.color_at(Face::Top), Some(colors[Face::Left]));
        assert_eq!(moved.color_at(Face::Right), Some(colors[Face::Top]));
        assert_eq!(moved.color_at(Face::Front), Some(colors[Face::Front]));
    }
}
