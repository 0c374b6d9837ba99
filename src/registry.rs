//! Ordered collection of discovered solutions with canonical deduplication.

use rustc_hash::FxHashSet;

use crate::board::Cell;
use crate::pieces::PieceId;
use crate::solver::Solution;

/// Canonical serialization of one placement: piece id, generating transform,
/// and the covered cells in sorted order.
pub type PlacementKey = (PieceId, u8, bool, bool, Vec<Cell>);

/// Collects solutions in discovery order.
///
/// Two solutions covering the same cells with the same pieces canonicalize
/// identically regardless of the order the search found their placements in,
/// because the key sorts placements by piece id and cells by coordinate
/// before comparing.
#[derive(Debug, Default)]
pub struct SolutionRegistry {
    solutions: Vec<Solution>,
}

impl SolutionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a solution, preserving discovery order.
    pub fn record(&mut self, solution: Solution) {
        self.solutions.push(solution);
    }

    /// Number of solutions recorded so far.
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Removes exact duplicates under the canonical form, keeping the first
    /// occurrence of each and the overall discovery order.
    pub fn dedup(&mut self) {
        let mut seen: FxHashSet<Vec<PlacementKey>> = FxHashSet::default();
        self.solutions
            .retain(|solution| seen.insert(canonical_key(solution)));
    }

    /// Consumes the registry, yielding the collected solutions.
    pub fn into_solutions(self) -> Vec<Solution> {
        self.solutions
    }
}

/// Canonical form of a solution: placements sorted by piece id, each with
/// its covered cells sorted.
pub fn canonical_key(solution: &Solution) -> Vec<PlacementKey> {
    let mut keys: Vec<PlacementKey> = solution
        .placements
        .iter()
        .map(|p| {
            let mut cells = p.cells.clone();
            cells.sort_unstable();
            (
                p.piece_id,
                p.orientation.quarter_turns,
                p.orientation.flip_x,
                p.orientation.flip_y,
                cells,
            )
        })
        .collect();
    keys.sort_unstable();
    keys
}
