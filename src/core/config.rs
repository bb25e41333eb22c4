//! Puzzle configuration.
//!
//! The interaction layer configures a puzzle at startup by providing:
//! - the cube size N
//! - the solved color of each face
//! - which faces count towards the win check
//! - scramble parameters and an RNG seed
//!
//! The engine never hardcodes any of these.

use serde::{Deserialize, Serialize};

use super::color::{default_face_colors, Color, FaceColors};
use super::error::{CubeError, Result};
use super::face::Face;
use super::grid::MIN_SIZE;
use crate::rules::WinCondition;
use crate::shuffle::{ShuffleConfig, MAX_SCRAMBLE_TURNS};

/// Complete puzzle configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Cube size N (N layers of N×N cublets).
    pub size: usize,

    /// Color shown by each face of the solved cube.
    pub face_colors: FaceColors,

    /// Faces that must be uniform for the puzzle to count as solved.
    pub win_condition: WinCondition,

    /// Scramble parameters.
    pub shuffle: ShuffleConfig,

    /// Seed for the puzzle's RNG.
    /// Same seed produces the same scramble.
    pub seed: u64,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            size: 3,
            face_colors: default_face_colors(),
            win_condition: WinCondition::default(),
            shuffle: ShuffleConfig::default(),
            seed: 42,
        }
    }
}

impl PuzzleConfig {
    /// Create a configuration for a cube of the given size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Set the solved color of every face.
    #[must_use]
    pub fn with_face_colors(mut self, face_colors: FaceColors) -> Self {
        self.face_colors = face_colors;
        self
    }

    /// Set the solved color of a single face.
    #[must_use]
    pub fn with_face_color(mut self, face: Face, color: Color) -> Self {
        self.face_colors[face] = color;
        self
    }

    /// Set the win condition.
    #[must_use]
    pub fn with_win_condition(mut self, win_condition: WinCondition) -> Self {
        self.win_condition = win_condition;
        self
    }

    /// Set the scramble parameters.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: ShuffleConfig) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check that the configuration describes a buildable puzzle.
    pub fn validate(&self) -> Result<()> {
        if self.size < MIN_SIZE {
            return Err(CubeError::InvalidSize { size: self.size });
        }
        if !(1..=MAX_SCRAMBLE_TURNS).contains(&self.shuffle.max_quarter_turns) {
            return Err(CubeError::InvalidConfig(format!(
                "shuffle.max_quarter_turns must be between 1 and {MAX_SCRAMBLE_TURNS}, got {}",
                self.shuffle.max_quarter_turns
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PuzzleConfig::default();
        assert_eq!(config.size, 3);
        assert_eq!(config.seed, 42);
        assert_eq!(config.win_condition, WinCondition::SideFaces);
        assert_eq!(config.shuffle.iterations, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PuzzleConfig::new(5)
            .with_seed(7)
            .with_face_color(Face::Top, Color(9))
            .with_win_condition(WinCondition::AllFaces)
            .with_shuffle(ShuffleConfig::default().with_iterations(3));

        assert_eq!(config.size, 5);
        assert_eq!(config.seed, 7);
        assert_eq!(config.face_colors[Face::Top], Color(9));
        assert_eq!(config.win_condition, WinCondition::AllFaces);
        assert_eq!(config.shuffle.iterations, 3);
    }

    #[test]
    fn test_validate_rejects_tiny_cube() {
        assert_eq!(
            PuzzleConfig::new(1).validate(),
            Err(CubeError::InvalidSize { size: 1 })
        );
    }

    #[test]
    fn test_validate_rejects_turn_bounds_outside_range() {
        for bound in [0, 4, u32::MAX] {
            let config = PuzzleConfig::default()
                .with_shuffle(ShuffleConfig::default().with_max_quarter_turns(bound));
            assert!(matches!(config.validate(), Err(CubeError::InvalidConfig(_))), "bound {bound}");
        }
        for bound in 1..=3 {
            let config = PuzzleConfig::default()
                .with_shuffle(ShuffleConfig::default().with_max_quarter_turns(bound));
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_config_serde() {
        let config = PuzzleConfig::new(4).with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let back: PuzzleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
