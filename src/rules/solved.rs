//! Solved-state check.
//!
//! A face is solved when every exterior cublet on it shows the same color
//! as a reference cublet on that face. Exterior cublets of a face are:
//!
//! - Front / Back: every slot of layer 0 / layer N-1
//! - Left / Right: column 0 / column N-1 of every row of every layer
//! - Top / Bottom: row 0 / row N-1 of every layer
//!
//! By default only the four side faces are checked; Top and Bottom join
//! in with [`WinCondition::AllFaces`].

use serde::{Deserialize, Serialize};

use crate::core::error::{CubeError, Result};
use crate::core::face::Face;
use crate::core::grid::{Grid, SlotPos};

/// Which faces must be uniform for the puzzle to count as solved.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WinCondition {
    /// Front, Back, Left and Right.
    #[default]
    SideFaces,
    /// All six faces.
    AllFaces,
}

impl WinCondition {
    /// Faces this condition inspects.
    #[must_use]
    pub fn faces(self) -> &'static [Face] {
        match self {
            WinCondition::SideFaces => &[Face::Front, Face::Back, Face::Left, Face::Right],
            WinCondition::AllFaces => &Face::ALL,
        }
    }
}

/// Read-only inspector for the solved state.
#[derive(Clone, Copy, Debug, Default)]
pub struct SolvedChecker {
    condition: WinCondition,
}

impl SolvedChecker {
    /// Create a checker for the given win condition.
    #[must_use]
    pub fn new(condition: WinCondition) -> Self {
        Self { condition }
    }

    /// Get the win condition.
    #[must_use]
    pub fn condition(&self) -> WinCondition {
        self.condition
    }

    /// Exterior positions on a face.
    #[must_use]
    pub fn face_positions(size: usize, face: Face) -> Vec<SlotPos> {
        let last = size - 1;
        let per_layer = size * size;
        match face {
            Face::Front => (0..per_layer).map(|slot| SlotPos::new(0, slot)).collect(),
            Face::Back => (0..per_layer).map(|slot| SlotPos::new(last, slot)).collect(),
            Face::Left | Face::Right | Face::Top | Face::Bottom => {
                let mut positions = Vec::with_capacity(per_layer);
                for layer in 0..size {
                    for i in 0..size {
                        let (row, col) = match face {
                            Face::Left => (i, 0),
                            Face::Right => (i, last),
                            Face::Top => (0, i),
                            _ => (last, i),
                        };
                        positions.push(SlotPos::from_row_col(layer, row, col, size));
                    }
                }
                positions
            }
        }
    }

    /// Check whether a single face shows one color.
    ///
    /// Fails with `InconsistentColorMap` if an exterior cublet has no color
    /// on the face, which means a move broke the exposure invariant.
    pub fn is_face_solved(grid: &Grid, face: Face) -> Result<bool> {
        let mut reference = None;
        for pos in Self::face_positions(grid.size(), face) {
            let color = grid
                .get(pos.layer, pos.slot)?
                .color_at(face)
                .ok_or(CubeError::InconsistentColorMap {
                    face,
                    layer: pos.layer,
                    slot: pos.slot,
                })?;
            match reference {
                None => reference = Some(color),
                Some(expected) if expected != color => return Ok(false),
                Some(_) => {}
            }
        }
        Ok(true)
    }

    /// Check every face the win condition names.
    pub fn check(&self, grid: &Grid) -> Result<bool> {
        for &face in self.condition.faces() {
            if !Self::is_face_solved(grid, face)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::default_face_colors;
    use crate::moves::{Move, MoveEngine};

    fn grid(size: usize) -> Grid {
        Grid::new(size, &default_face_colors()).unwrap()
    }

    #[test]
    fn test_face_positions_count() {
        for size in 2..=6 {
            for face in Face::all() {
                let positions = SolvedChecker::face_positions(size, face);
                assert_eq!(positions.len(), size * size);
                assert!(positions.iter().all(|p| p.is_exposed(face, size)));
            }
        }
    }

    #[test]
    fn test_fresh_grid_is_solved() {
        for size in 2..=5 {
            let g = grid(size);
            assert!(SolvedChecker::new(WinCondition::SideFaces).check(&g).unwrap());
            assert!(SolvedChecker::new(WinCondition::AllFaces).check(&g).unwrap());
        }
    }

    #[test]
    fn test_vertical_move_breaks_front() {
        let mut g = grid(3);
        MoveEngine::apply(&mut g, &Move::vertical(0, 1)).unwrap();
        assert!(!SolvedChecker::is_face_solved(&g, Face::Front).unwrap());
        // The turning column is the whole left face, which only spins.
        assert!(SolvedChecker::is_face_solved(&g, Face::Left).unwrap());
        assert!(!SolvedChecker::default().check(&g).unwrap());
    }

    #[test]
    fn test_top_checked_only_with_all_faces() {
        let mut g = grid(3);
        MoveEngine::apply(&mut g, &Move::vertical(1, 1)).unwrap();
        assert!(!SolvedChecker::is_face_solved(&g, Face::Top).unwrap());
        assert!(!SolvedChecker::new(WinCondition::AllFaces).check(&g).unwrap());

        // A horizontal turn of the top row only spins the top face.
        let mut g = grid(3);
        MoveEngine::apply(&mut g, &Move::horizontal(0, 1)).unwrap();
        assert!(SolvedChecker::is_face_solved(&g, Face::Top).unwrap());
        assert!(!SolvedChecker::is_face_solved(&g, Face::Front).unwrap());
    }

    #[test]
    fn test_missing_color_is_reported() {
        let mut g = grid(3);
        let core = g.id_at(1, 4).unwrap();
        let corner = g.id_at(0, 0).unwrap();
        g.set(0, 0, core).unwrap();
        g.set(1, 4, corner).unwrap();

        assert_eq!(
            SolvedChecker::is_face_solved(&g, Face::Front),
            Err(CubeError::InconsistentColorMap {
                face: Face::Front,
                layer: 0,
                slot: 0
            })
        );
    }

    #[test]
    fn test_all_faces_condition() {
        assert_eq!(WinCondition::SideFaces.faces().len(), 4);
        assert_eq!(WinCondition::AllFaces.faces().len(), 6);
        assert!(!WinCondition::SideFaces.faces().contains(&Face::Top));
    }
}
