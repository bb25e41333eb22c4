//! Face labels and per-face data storage.
//!
//! ## Face
//!
//! The six outward directions of the cube. Every cublet and every grid slot
//! talks about its sides in terms of these labels.
//!
//! ## FaceMap
//!
//! Fixed-size per-face storage backed by an array for O(1) access.
//! Supports iteration and indexing by `Face`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the six sides of the cube.
///
/// Depth runs Front → Back, rows run Top → Bottom, and columns run
/// Left → Right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    Left,
    Right,
    Top,
    Bottom,
    Back,
    Front,
}

impl Face {
    /// All six faces, in declaration order.
    pub const ALL: [Face; 6] = [
        Face::Left,
        Face::Right,
        Face::Top,
        Face::Bottom,
        Face::Back,
        Face::Front,
    ];

    /// Get the dense index of this face (0-5).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get the face on the other side of the cube.
    ///
    /// ```
    /// use cubelet::core::Face;
    ///
    /// assert_eq!(Face::Left.opposite(), Face::Right);
    /// assert_eq!(Face::Front.opposite().opposite(), Face::Front);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
            Face::Back => Face::Front,
            Face::Front => Face::Back,
        }
    }

    /// Iterate over all faces.
    pub fn all() -> impl Iterator<Item = Face> {
        Self::ALL.into_iter()
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Face::Left => "left",
            Face::Right => "right",
            Face::Top => "top",
            Face::Bottom => "bottom",
            Face::Back => "back",
            Face::Front => "front",
        };
        f.write_str(name)
    }
}

/// Per-face data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use cubelet::core::{Face, FaceMap};
///
/// let mut marks: FaceMap<u32> = FaceMap::new(|face| face.index() as u32);
/// assert_eq!(marks[Face::Top], 2);
///
/// marks[Face::Top] = 7;
/// assert_eq!(marks[Face::Top], 7);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceMap<T> {
    data: [T; 6],
}

impl<T> FaceMap<T> {
    /// Create a new FaceMap with values from a factory function.
    pub fn new(factory: impl Fn(Face) -> T) -> Self {
        Self {
            data: Face::ALL.map(factory),
        }
    }

    /// Create a new FaceMap with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a face's data.
    #[must_use]
    pub fn get(&self, face: Face) -> &T {
        &self.data[face.index()]
    }

    /// Get a mutable reference to a face's data.
    pub fn get_mut(&mut self, face: Face) -> &mut T {
        &mut self.data[face.index()]
    }

    /// Iterate over (Face, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over values.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T: Default> Default for FaceMap<T> {
    fn default() -> Self {
        Self::new(|_| T::default())
    }
}

impl<T> Index<Face> for FaceMap<T> {
    type Output = T;

    fn index(&self, face: Face) -> &T {
        self.get(face)
    }
}

impl<T> IndexMut<Face> for FaceMap<T> {
    fn index_mut(&mut self, face: Face) -> &mut T {
        self.get_mut(face)
    }
}
