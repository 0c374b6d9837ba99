//! Puzzle piece definitions and the validated piece catalog.
//!
//! The classic puzzle uses the twelve pentominoes; arbitrary catalogs are
//! supported so long as every shape passes validation.

use crate::error::{validation_error, PuzzleError, Result};
use crate::shape::Shape;

/// Stable identifier of a piece within a catalog.
pub type PieceId = u8;

/// A named puzzle piece with one canonical footprint.
#[derive(Debug, Clone)]
pub struct Piece {
    /// Stable id, referenced by placements and persistence records.
    pub id: PieceId,
    /// Single-character label used when rendering boards.
    pub label: char,
    /// Canonical footprint; orientations are derived from this.
    pub shape: Shape,
}

/// A validated, immutable collection of pieces.
#[derive(Debug, Clone)]
pub struct PieceSet {
    pieces: Vec<Piece>,
}

impl PieceSet {
    /// Builds a catalog, rejecting duplicate ids.
    ///
    /// Shape validation happens at [`Shape::from_matrix`] time, so every
    /// shape reaching this point is already well-formed.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the catalog is empty or two pieces
    /// share an id.
    pub fn new(pieces: Vec<Piece>) -> Result<Self> {
        if pieces.is_empty() {
            return Err(validation_error("piece catalog is empty"));
        }
        for (i, piece) in pieces.iter().enumerate() {
            if pieces[..i].iter().any(|other| other.id == piece.id) {
                return Err(validation_error(format!(
                    "duplicate piece id {} in catalog",
                    piece.id
                )));
            }
        }
        Ok(Self { pieces })
    }

    /// The twelve classic pentominoes, ids 1 through 12.
    pub fn standard() -> Self {
        let definitions: &[(char, &[&[u8]])] = &[
            ('F', &[&[0, 1, 1], &[1, 1, 0], &[0, 1, 0]]),
            ('I', &[&[1, 1, 1, 1, 1]]),
            ('L', &[&[1, 0], &[1, 0], &[1, 0], &[1, 1]]),
            ('N', &[&[0, 1], &[0, 1], &[1, 1], &[1, 0]]),
            ('P', &[&[1, 1], &[1, 1], &[1, 0]]),
            ('T', &[&[1, 1, 1], &[0, 1, 0], &[0, 1, 0]]),
            ('U', &[&[1, 0, 1], &[1, 1, 1]]),
            ('V', &[&[1, 0, 0], &[1, 0, 0], &[1, 1, 1]]),
            ('W', &[&[1, 0, 0], &[1, 1, 0], &[0, 1, 1]]),
            ('X', &[&[0, 1, 0], &[1, 1, 1], &[0, 1, 0]]),
            ('Y', &[&[0, 1], &[1, 1], &[0, 1], &[0, 1]]),
            ('Z', &[&[1, 1, 0], &[0, 1, 0], &[0, 1, 1]]),
        ];

        let pieces = definitions
            .iter()
            .enumerate()
            .map(|(index, &(label, matrix))| Piece {
                id: (index + 1) as PieceId,
                label,
                shape: Shape::from_matrix(matrix)
                    .unwrap_or_else(|e| unreachable!("pentomino catalog is well-formed: {e}")),
            })
            .collect();

        Self { pieces }
    }

    /// All pieces, in catalog order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Ids of all pieces, in catalog order.
    pub fn ids(&self) -> Vec<PieceId> {
        self.pieces.iter().map(|p| p.id).collect()
    }

    /// Looks up a piece by id.
    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.iter().find(|p| p.id == id)
    }

    /// Looks up a piece by id, failing with `PieceNotFound`.
    ///
    /// # Errors
    ///
    /// Returns `PieceNotFound` if the id is absent; per the solver contract
    /// this aborts the whole run, not just one branch.
    pub fn require(&self, id: PieceId) -> Result<&Piece> {
        self.get(id).ok_or(PuzzleError::PieceNotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog_has_twelve_pentominoes() {
        let set = PieceSet::standard();
        assert_eq!(set.pieces().len(), 12);
        for piece in set.pieces() {
            assert_eq!(piece.shape.area(), 5, "piece {} is not a pentomino", piece.label);
        }
    }

    #[test]
    fn test_standard_catalog_labels_are_unique() {
        let set = PieceSet::standard();
        let mut labels: Vec<char> = set.pieces().iter().map(|p| p.label).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), 12);
    }

    #[test]
    fn test_lookup_by_id() {
        let set = PieceSet::standard();
        assert_eq!(set.get(1).map(|p| p.label), Some('F'));
        assert_eq!(set.get(12).map(|p| p.label), Some('Z'));
        assert!(set.get(13).is_none());
    }

    #[test]
    fn test_require_missing_id_fails() {
        let set = PieceSet::standard();
        assert_eq!(
            set.require(99).unwrap_err(),
            PuzzleError::PieceNotFound { id: 99 }
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let shape = Shape::from_matrix(&[&[1]]).unwrap();
        let pieces = vec![
            Piece { id: 1, label: 'A', shape: shape.clone() },
            Piece { id: 1, label: 'B', shape },
        ];
        assert!(PieceSet::new(pieces).is_err());
    }
}
