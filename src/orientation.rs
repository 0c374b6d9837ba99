//! Orientation catalogs: the geometrically distinct transforms of a piece.
//!
//! Eight transform combinations are tried per piece: four quarter turns,
//! each with and without an X-axis flip. A single reflection axis suffices
//! because a Y flip equals a 180 degree rotation followed by an X flip, so
//! the other axis adds no shapes the combinations cannot already reach.

use crate::shape::Shape;

/// One geometrically distinct orientation of a piece.
///
/// Identity is the transformed shape's cell pattern; the generating
/// `(quarter_turns, flip_x, flip_y)` triple is one representative kept for
/// display and serialization. Symmetric pieces reach the same shape through
/// several triples, and only the first is retained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Orientation {
    /// Clockwise quarter turns applied to the canonical shape.
    pub quarter_turns: u8,
    /// Whether an X-axis flip follows the rotation.
    pub flip_x: bool,
    /// Whether a Y-axis flip follows; always false for generated catalogs,
    /// carried for the persistence contract.
    pub flip_y: bool,
    /// The transformed footprint.
    pub shape: Shape,
}

/// Generates the distinct orientations of a canonical shape.
///
/// The result has between 1 entry (full rotational and mirror symmetry)
/// and 8 (no symmetry at all). Deduplication compares shapes structurally,
/// never the generating parameters.
pub fn distinct_orientations(canonical: &Shape) -> Vec<Orientation> {
    let mut orientations: Vec<Orientation> = Vec::with_capacity(8);

    for quarter_turns in 0..4u8 {
        for flip_x in [false, true] {
            let shape = canonical.rotate_then_flip(quarter_turns, flip_x, false);
            if orientations.iter().any(|o| o.shape == shape) {
                continue;
            }
            orientations.push(Orientation {
                quarter_turns,
                flip_x,
                flip_y: false,
                shape,
            });
        }
    }

    orientations
}
