//! Cublets: the N³ elementary pieces of the cube.
//!
//! A cublet carries colors only on the faces that are exposed at its
//! current grid slot. Moves relabel those colors with one of the fixed
//! [`FaceCycle`]s and never invent or drop one.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::Color;
use super::cycle::FaceCycle;
use super::face::{Face, FaceMap};

/// Stable identity of a cublet for the lifetime of a puzzle.
///
/// IDs are allocated in construction order, so the cublet built for
/// `(layer, slot)` gets `layer * N² + slot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CubletId(pub u32);

impl CubletId {
    /// Get the raw index into the cublet arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CubletId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Cublet({})", self.0)
    }
}

/// One piece of the cube and its face colors.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cublet {
    id: CubletId,
    colors: FaceMap<Option<Color>>,
}

impl Cublet {
    /// Create a cublet with the given colored faces.
    #[must_use]
    pub fn new(id: CubletId, colors: FaceMap<Option<Color>>) -> Self {
        Self { id, colors }
    }

    /// Get this cublet's identity.
    #[must_use]
    pub fn id(&self) -> CubletId {
        self.id
    }

    /// Get the color on a face, or `None` if the face is hidden.
    #[must_use]
    pub fn color_at(&self, face: Face) -> Option<Color> {
        self.colors[face]
    }

    /// Get the full face → color mapping.
    #[must_use]
    pub fn colors(&self) -> &FaceMap<Option<Color>> {
        &self.colors
    }

    /// Faces that currently carry a color (at most three).
    #[must_use]
    pub fn colored_faces(&self) -> SmallVec<[Face; 3]> {
        self.colors
            .iter()
            .filter(|(_, color)| color.is_some())
            .map(|(face, _)| face)
            .collect()
    }

    /// Apply one step of `cycle` to the color mapping.
    ///
    /// Reads from a snapshot so that a receiver overwritten early in the
    /// cycle is still read correctly as a source later on.
    pub fn rotate(&mut self, cycle: &FaceCycle) {
        let snapshot = self.colors;
        for &(receiver, source) in cycle.pairs() {
            self.colors[receiver] = snapshot[source];
        }
    }

    /// Apply `cycle` `quarter_turns mod 4` times.
    pub fn rotate_by(&mut self, cycle: &FaceCycle, quarter_turns: u32) {
        for _ in 0..quarter_turns % 4 {
            self.rotate(cycle);
        }
    }
}
