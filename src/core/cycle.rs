//! Fixed 4-cycles over face labels.
//!
//! Every color relabeling the puzzle performs is one of three constant
//! cycles, one per move family. Each entry reads `(receiver, source)`: after
//! one application the receiving face holds the color the source face held
//! before.

use super::face::Face;

/// A 4-cycle over faces, stored as `(receiver, source)` pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaceCycle {
    pairs: [(Face, Face); 4],
}

impl FaceCycle {
    /// Vertical slice turn: Bottom←Front, Front←Top, Top←Back, Back←Bottom.
    pub const VERTICAL: FaceCycle = FaceCycle {
        pairs: [
            (Face::Bottom, Face::Front),
            (Face::Front, Face::Top),
            (Face::Top, Face::Back),
            (Face::Back, Face::Bottom),
        ],
    };

    /// Horizontal slice turn: Right←Front, Front←Left, Left←Back, Back←Right.
    pub const HORIZONTAL: FaceCycle = FaceCycle {
        pairs: [
            (Face::Right, Face::Front),
            (Face::Back, Face::Right),
            (Face::Front, Face::Left),
            (Face::Left, Face::Back),
        ],
    };

    /// Layer twist: Top←Left, Left←Bottom, Bottom←Right, Right←Top.
    pub const LAYER: FaceCycle = FaceCycle {
        pairs: [
            (Face::Top, Face::Left),
            (Face::Left, Face::Bottom),
            (Face::Bottom, Face::Right),
            (Face::Right, Face::Top),
        ],
    };

    /// The `(receiver, source)` pairs of this cycle.
    #[must_use]
    pub const fn pairs(&self) -> &[(Face, Face); 4] {
        &self.pairs
    }

    /// Where a color sitting on `face` ends up after one application.
    ///
    /// Faces outside the cycle are fixed.
    #[must_use]
    pub fn image(&self, face: Face) -> Face {
        self.pairs
            .iter()
            .find(|&&(_, source)| source == face)
            .map_or(face, |&(receiver, _)| receiver)
    }

    /// Check whether the cycle moves `face`.
    #[must_use]
    pub fn contains(&self, face: Face) -> bool {
        self.pairs.iter().any(|&(receiver, _)| receiver == face)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CYCLES: [FaceCycle; 3] = [FaceCycle::VERTICAL, FaceCycle::HORIZONTAL, FaceCycle::LAYER];

    #[test]
    fn test_cycles_are_permutations() {
        for cycle in CYCLES {
            let mut receivers: Vec<_> = cycle.pairs().iter().map(|p| p.0).collect();
            let mut sources: Vec<_> = cycle.pairs().iter().map(|p| p.1).collect();
            receivers.sort();
            sources.sort();
            assert_eq!(receivers, sources);
        }
    }

    #[test]
    fn test_cycles_have_order_four() {
        for cycle in CYCLES {
            for face in Face::all() {
                let mut f = face;
                for _ in 0..4 {
                    f = cycle.image(f);
                }
                assert_eq!(f, face);
                if cycle.contains(face) {
                    assert_ne!(cycle.image(face), face);
                    assert_ne!(cycle.image(cycle.image(face)), face);
                }
            }
        }
    }

    #[test]
    fn test_fixed_axes() {
        assert_eq!(FaceCycle::VERTICAL.image(Face::Left), Face::Left);
        assert_eq!(FaceCycle::HORIZONTAL.image(Face::Top), Face::Top);
        assert_eq!(FaceCycle::LAYER.image(Face::Front), Face::Front);
    }

    #[test]
    fn test_vertical_direction() {
        // Front stickers roll down onto the bottom.
        assert_eq!(FaceCycle::VERTICAL.image(Face::Front), Face::Bottom);
        assert_eq!(FaceCycle::VERTICAL.image(Face::Top), Face::Front);
    }
}
