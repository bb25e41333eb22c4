//! The grid: which cublet sits in which slot.
//!
//! ## Layout
//!
//! - `layer ∈ [0, N)` is depth, Front (0) → Back (N-1)
//! - `slot ∈ [0, N²)` is row-major within a layer: `row = slot / N`,
//!   `col = slot % N`; rows run Top → Bottom, columns Left → Right
//!
//! Cublets live in an arena indexed by [`CubletId`]; the grid proper is a
//! single flat array of `N · N²` IDs at offset `layer * N² + slot`. Keeping
//! the IDs in one array makes the bijection invariant a simple scan.
//!
//! The grid is pure storage. Rotation logic lives in
//! [`MoveEngine`](crate::moves::MoveEngine).

use log::error;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::color::FaceColors;
use super::cublet::{Cublet, CubletId};
use super::error::{CubeError, Result};
use super::face::{Face, FaceMap};

/// Smallest supported cube.
pub const MIN_SIZE: usize = 2;

/// A `(layer, slot)` grid coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SlotPos {
    /// Depth layer, Front (0) → Back (N-1).
    pub layer: usize,
    /// Row-major index within the layer.
    pub slot: usize,
}

impl SlotPos {
    /// Create a new position. Bounds are not checked.
    #[must_use]
    pub const fn new(layer: usize, slot: usize) -> Self {
        Self { layer, slot }
    }

    /// Build a position from `(layer, row, col)` on a cube of `size`.
    #[must_use]
    pub const fn from_row_col(layer: usize, row: usize, col: usize, size: usize) -> Self {
        Self {
            layer,
            slot: row * size + col,
        }
    }

    /// Row within the layer (0 = top).
    #[must_use]
    pub const fn row(self, size: usize) -> usize {
        self.slot / size
    }

    /// Column within the layer (0 = left).
    #[must_use]
    pub const fn col(self, size: usize) -> usize {
        self.slot % size
    }

    /// Faces that are on the outside of the cube at this position.
    ///
    /// Left/Right are decided by column, Top/Bottom by row and Front/Back
    /// by layer. Interior positions have none.
    #[must_use]
    pub fn exposed_faces(self, size: usize) -> SmallVec<[Face; 3]> {
        let last = size - 1;
        let (row, col) = (self.row(size), self.col(size));
        let mut faces = SmallVec::new();

        if col == 0 {
            faces.push(Face::Left);
        } else if col == last {
            faces.push(Face::Right);
        }

        if row == 0 {
            faces.push(Face::Top);
        } else if row == last {
            faces.push(Face::Bottom);
        }

        if self.layer == 0 {
            faces.push(Face::Front);
        } else if self.layer == last {
            faces.push(Face::Back);
        }

        faces
    }

    /// Check if a face is exposed at this position.
    #[must_use]
    pub fn is_exposed(self, face: Face, size: usize) -> bool {
        self.exposed_faces(size).contains(&face)
    }
}

impl std::fmt::Display for SlotPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(layer {}, slot {})", self.layer, self.slot)
    }
}

/// N layers of N×N cublet slots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    /// Cublet arena, indexed by `CubletId`.
    cublets: Vec<Cublet>,
    /// Flat slot array: `layer * N² + slot` -> occupant.
    slots: Vec<CubletId>,
}

impl Grid {
    /// Build a solved grid of the given size.
    ///
    /// Each cublet gets the solved color of every face exposed at its
    /// starting slot and nothing else.
    pub fn new(size: usize, face_colors: &FaceColors) -> Result<Self> {
        if size < MIN_SIZE {
            return Err(CubeError::InvalidSize { size });
        }

        let per_layer = size * size;
        let total = per_layer * size;
        let mut cublets = Vec::with_capacity(total);
        let mut slots = Vec::with_capacity(total);

        for layer in 0..size {
            for slot in 0..per_layer {
                let id = CubletId((layer * per_layer + slot) as u32);
                let mut colors = FaceMap::default();
                for face in SlotPos::new(layer, slot).exposed_faces(size) {
                    colors[face] = Some(face_colors[face]);
                }
                cublets.push(Cublet::new(id, colors));
                slots.push(id);
            }
        }

        Ok(Self {
            size,
            cublets,
            slots,
        })
    }

    /// Cube size N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of depth layers (N).
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.size
    }

    /// Number of slots in each layer (N²).
    #[must_use]
    pub fn slots_per_layer(&self) -> usize {
        self.size * self.size
    }

    /// Total number of cublets (N³).
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// A grid always holds at least 8 cublets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    fn offset(&self, layer: usize, slot: usize) -> Result<usize> {
        if layer >= self.layer_count() || slot >= self.slots_per_layer() {
            return Err(CubeError::IndexOutOfRange {
                layer,
                slot,
                size: self.size,
            });
        }
        Ok(layer * self.slots_per_layer() + slot)
    }

    /// Get the ID of the cublet at `(layer, slot)`.
    pub fn id_at(&self, layer: usize, slot: usize) -> Result<CubletId> {
        let offset = self.offset(layer, slot)?;
        Ok(self.slots[offset])
    }

    /// Get the cublet at `(layer, slot)`.
    pub fn get(&self, layer: usize, slot: usize) -> Result<&Cublet> {
        let id = self.id_at(layer, slot)?;
        Ok(&self.cublets[id.index()])
    }

    /// Place a cublet at `(layer, slot)`, returning the previous occupant.
    ///
    /// This does not move the cublet out of its old slot; callers doing a
    /// permutation must write every affected slot before the grid is read
    /// again.
    pub fn set(&mut self, layer: usize, slot: usize, id: CubletId) -> Result<CubletId> {
        let offset = self.offset(layer, slot)?;
        if id.index() >= self.cublets.len() {
            return Err(CubeError::UnknownCublet { id });
        }
        Ok(std::mem::replace(&mut self.slots[offset], id))
    }

    /// Look up a cublet by identity.
    #[must_use]
    pub fn cublet(&self, id: CubletId) -> Option<&Cublet> {
        self.cublets.get(id.index())
    }

    pub(crate) fn cublet_mut(&mut self, id: CubletId) -> Option<&mut Cublet> {
        self.cublets.get_mut(id.index())
    }

    /// Find the slot a cublet currently occupies.
    #[must_use]
    pub fn locate(&self, id: CubletId) -> Option<SlotPos> {
        let per_layer = self.slots_per_layer();
        self.slots
            .iter()
            .position(|&occupant| occupant == id)
            .map(|offset| SlotPos::new(offset / per_layer, offset % per_layer))
    }

    /// Iterate over every position and its cublet, layer by layer.
    pub fn iter(&self) -> impl Iterator<Item = (SlotPos, &Cublet)> + '_ {
        let per_layer = self.slots_per_layer();
        self.slots.iter().enumerate().map(move |(offset, id)| {
            (
                SlotPos::new(offset / per_layer, offset % per_layer),
                &self.cublets[id.index()],
            )
        })
    }

    /// The raw slot array, in `layer * N² + slot` order.
    #[must_use]
    pub fn slots(&self) -> &[CubletId] {
        &self.slots
    }

    /// Verify the bijection and exposure invariants.
    ///
    /// Every cublet must occupy exactly one slot, every exposed face must
    /// carry a color and every hidden face must be blank.
    pub fn check_invariants(&self) -> Result<()> {
        let per_layer = self.slots_per_layer();
        let mut seen = vec![false; self.cublets.len()];
        for (offset, id) in self.slots.iter().enumerate() {
            let (layer, slot) = (offset / per_layer, offset % per_layer);
            let taken = seen
                .get_mut(id.index())
                .ok_or(CubeError::UnknownCublet { id: *id })?;
            if *taken {
                error!("{id} occupies more than one slot");
                return Err(CubeError::DuplicateCublet { id: *id, layer, slot });
            }
            *taken = true;
        }

        for (pos, cublet) in self.iter() {
            let exposed = pos.exposed_faces(self.size);
            for face in Face::all() {
                if exposed.contains(&face) != cublet.color_at(face).is_some() {
                    error!("{} at {pos} has a bad {face} face", cublet.id());
                    return Err(CubeError::InconsistentColorMap {
                        face,
                        layer: pos.layer,
                        slot: pos.slot,
                    });
                }
            }
        }

        Ok(())
    }
}
