//! Difficulty tiers and level derivation.
//!
//! A level pre-places a uniformly random subset of a solution's pieces on
//! the board and leaves the rest for the player. How many pieces stay on
//! the board is determined by the level's difficulty tier, which in turn is
//! assigned from the level id by modulo arithmetic.

use rand::seq::index;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::persistence::SolutionRecord;

/// Level difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Difficulty {
    Easy,
    Intermediate,
    Expert,
    Wizard,
}

impl Difficulty {
    /// Assigns a tier from a level id: 1 -> EASY, 2 -> INTERMEDIATE,
    /// 3 -> EXPERT, 0 -> WIZARD (all modulo 4).
    pub fn from_id(id: u32) -> Self {
        match id % 4 {
            1 => Self::Easy,
            2 => Self::Intermediate,
            3 => Self::Expert,
            _ => Self::Wizard,
        }
    }

    /// How many of a solution's pieces stay pre-placed on the board.
    pub fn prefilled_count(self) -> usize {
        match self {
            Self::Easy => 8,
            Self::Intermediate => 6,
            Self::Expert => 4,
            Self::Wizard => 2,
        }
    }
}

/// A playable level derived from a persisted solution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelRecord {
    pub id: u32,
    pub difficulty: Difficulty,
    pub solution_id: u32,
    /// Ids of the solution-piece records left pre-placed on the board.
    pub solution_pieces: Vec<u32>,
}

/// Derives a level from a solution, pre-placing a random piece subset.
///
/// The subset size follows the tier's prefilled count, clamped to the
/// number of pieces the solution actually uses.
pub fn build_level<R: Rng + ?Sized>(id: u32, solution: &SolutionRecord, rng: &mut R) -> LevelRecord {
    let difficulty = Difficulty::from_id(id);
    let count = difficulty.prefilled_count().min(solution.pieces.len());

    let mut solution_pieces: Vec<u32> = index::sample(rng, solution.pieces.len(), count)
        .iter()
        .map(|i| solution.pieces[i].id)
        .collect();
    solution_pieces.sort_unstable();

    LevelRecord {
        id,
        difficulty,
        solution_id: solution.id,
        solution_pieces,
    }
}
