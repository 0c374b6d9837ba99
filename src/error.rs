//! Error types for puzzle construction and solving.

use std::fmt;

use crate::board::Cell;
use crate::pieces::PieceId;

/// Fatal conditions raised by the puzzle core.
///
/// `Overlap` and `Invariant` signal a broken occupancy invariant. They must
/// abort the run; continuing on a corrupted grid would invalidate every
/// result produced afterwards in that branch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleError {
    /// A shape or catalog failed validation before the search started.
    Validation {
        /// Description of what is wrong with the input.
        reason: String,
    },

    /// A referenced piece id is not present in the catalog.
    PieceNotFound {
        /// The missing piece id.
        id: PieceId,
    },

    /// Attempted to place a piece onto an already-occupied cell.
    Overlap {
        /// The occupied cell that was targeted.
        cell: Cell,
    },

    /// Attempted to remove a piece from an already-empty cell.
    Invariant {
        /// The empty cell that was targeted.
        cell: Cell,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation { reason } => write!(f, "invalid puzzle input: {reason}"),
            Self::PieceNotFound { id } => write!(f, "piece id {id} is not in the catalog"),
            Self::Overlap { cell } => {
                write!(f, "placement overlaps occupied cell ({}, {})", cell.0, cell.1)
            }
            Self::Invariant { cell } => {
                write!(f, "removal targeted empty cell ({}, {})", cell.0, cell.1)
            }
        }
    }
}

impl std::error::Error for PuzzleError {}

/// Convenience alias for results produced by the puzzle core.
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Creates a `Validation` error from anything printable.
pub fn validation_error(reason: impl ToString) -> PuzzleError {
    PuzzleError::Validation {
        reason: reason.to_string(),
    }
}
