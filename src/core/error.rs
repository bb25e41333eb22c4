//! Error types for puzzle construction, grid access and moves.
//!
//! Every failure here is a programming or input error; nothing is
//! transient, so callers should not retry.

use thiserror::Error;

use super::cublet::CubletId;
use super::face::Face;
use crate::moves::Axis;

/// Errors reported by the puzzle engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// Cube size below the smallest supported cube.
    #[error("cube size {size} is invalid (must be at least 2)")]
    InvalidSize { size: usize },

    /// Move references a slice outside `[0, N)`.
    #[error("invalid move: {axis} index {index} is out of range for a size {size} cube")]
    InvalidMove { axis: Axis, index: usize, size: usize },

    /// Direct grid access with bad coordinates.
    #[error("grid position (layer {layer}, slot {slot}) is out of range for a size {size} cube")]
    IndexOutOfRange {
        layer: usize,
        slot: usize,
        size: usize,
    },

    /// A face that should be exposed has no color, or a hidden face has one.
    ///
    /// This means an engine invariant was broken (this is a bug).
    #[error("inconsistent color map on {face} face at (layer {layer}, slot {slot})")]
    InconsistentColorMap { face: Face, layer: usize, slot: usize },

    /// A cublet ID that is not in the grid's arena.
    #[error("{id} does not belong to this cube")]
    UnknownCublet { id: CubletId },

    /// One cublet sits in two slots, breaking the one-slot-per-cublet rule.
    ///
    /// Like `InconsistentColorMap`, this is a bug.
    #[error("{id} occupies a second slot at (layer {layer}, slot {slot})")]
    DuplicateCublet {
        id: CubletId,
        layer: usize,
        slot: usize,
    },

    /// Configuration rejected by [`PuzzleConfig::validate`](super::PuzzleConfig::validate).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CubeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CubeError::InvalidMove {
            axis: Axis::Vertical,
            index: 5,
            size: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid move: vertical index 5 is out of range for a size 3 cube"
        );

        let err = CubeError::IndexOutOfRange {
            layer: 0,
            slot: 9,
            size: 3,
        };
        assert!(err.to_string().contains("slot 9"));

        let err = CubeError::DuplicateCublet {
            id: CubletId(4),
            layer: 2,
            slot: 8,
        };
        assert_eq!(
            err.to_string(),
            "Cublet(4) occupies a second slot at (layer 2, slot 8)"
        );
    }
}
