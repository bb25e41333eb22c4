//! Sticker colors.
//!
//! The engine never interprets colors - they are opaque palette indices
//! compared for equality. The renderer maps them to real RGB values.

use serde::{Deserialize, Serialize};

use super::face::{Face, FaceMap};

/// Palette index of a sticker color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Color(pub u8);

impl Color {
    /// Create a new color.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw palette index.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({})", self.0)
    }
}

/// The color each face of a solved cube shows.
pub type FaceColors = FaceMap<Color>;

/// Default palette assignment.
///
/// Back, Front, Left, Right, Top, Bottom take palette indices 0 through 5.
#[must_use]
pub fn default_face_colors() -> FaceColors {
    FaceMap::new(|face| match face {
        Face::Back => Color(0),
        Face::Front => Color(1),
        Face::Left => Color(2),
        Face::Right => Color(3),
        Face::Top => Color(4),
        Face::Bottom => Color(5),
    })
}
