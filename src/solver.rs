//! Recursive backtracking search for exact board tilings.
//!
//! The search fills the first empty cell (row-major from the origin) with
//! every orientation of every unused piece, recursing on a fresh board
//! snapshot per candidate. Branches that fill the board emit a solution;
//! branches with no viable candidate simply return. There are no heuristics
//! beyond overlap and piece-reuse pruning, so the search is exhaustive.

use std::time::{Duration, Instant};

use crate::board::{covered_cells, Board, BoardDims, Cell};
use crate::error::{validation_error, Result};
use crate::orientation::{distinct_orientations, Orientation};
use crate::pieces::{PieceId, PieceSet};
use crate::registry::SolutionRegistry;

/// Upper bound on pieces per solve, imposed by the unused-piece bitmask.
pub const MAX_PIECES: usize = 16;

/// A piece resolved to absolute board cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub piece_id: PieceId,
    /// The orientation chosen for this placement, including its
    /// representative generating transform.
    pub orientation: Orientation,
    /// The cell the orientation's local origin was aligned to.
    pub anchor: Cell,
    /// Absolute cells occupied, in shape scan order.
    pub cells: Vec<Cell>,
}

/// An ordered list of placements exactly covering the board.
///
/// Created the instant the board is detected full and immutable thereafter.
/// Pieces not appearing in any placement were simply unused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub placements: Vec<Placement>,
}

/// Optional safeguards for the otherwise unbounded exhaustive search.
#[derive(Debug, Clone, Copy, Default)]
pub struct SolveConfig {
    /// Stop after this many solutions have been recorded.
    pub max_solutions: Option<usize>,
    /// Stop once this much wall-clock time has elapsed.
    pub deadline: Option<Duration>,
}

/// Signals whether ancestor branches should keep searching.
enum Flow {
    Continue,
    Stop,
}

/// Finds every way the listed pieces can completely tile a board of the
/// given dimensions, deduplicated by canonical form.
///
/// # Errors
///
/// Fails with `PieceNotFound` if any requested id is absent from the
/// catalog, and with a validation error for duplicate ids or more than
/// [`MAX_PIECES`] pieces. Either aborts the whole run before or during the
/// search; no partial results are returned.
pub fn solve(
    pieces: &PieceSet,
    piece_ids: &[PieceId],
    dims: BoardDims,
    config: &SolveConfig,
) -> Result<Vec<Solution>> {
    if dims.width == 0 || dims.height == 0 {
        return Err(validation_error("board dimensions must be non-zero"));
    }
    if piece_ids.len() > MAX_PIECES {
        return Err(validation_error(format!(
            "solve supports at most {MAX_PIECES} pieces, got {}",
            piece_ids.len()
        )));
    }
    for (i, id) in piece_ids.iter().enumerate() {
        if piece_ids[..i].contains(id) {
            return Err(validation_error(format!("piece id {id} requested twice")));
        }
    }

    // orientation catalogs are computed once and reused for the entire run
    let catalog: Vec<(PieceId, Vec<Orientation>)> = piece_ids
        .iter()
        .map(|&id| {
            let piece = pieces.require(id)?;
            Ok((id, distinct_orientations(&piece.shape)))
        })
        .collect::<Result<_>>()?;

    let mut search = Search {
        catalog,
        registry: SolutionRegistry::new(),
        max_solutions: config.max_solutions,
        deadline: config.deadline.map(|d| Instant::now() + d),
    };

    let board = Board::empty(dims);
    let all_unused = (1u32 << search.catalog.len()) - 1;
    let mut placements = Vec::new();
    search.step(&board, all_unused, &mut placements)?;

    let mut registry = search.registry;
    registry.dedup();
    Ok(registry.into_solutions())
}

/// Solves with the full catalog and default (unbounded) configuration.
pub fn solve_all(pieces: &PieceSet, dims: BoardDims) -> Result<Vec<Solution>> {
    solve(pieces, &pieces.ids(), dims, &SolveConfig::default())
}

struct Search {
    catalog: Vec<(PieceId, Vec<Orientation>)>,
    registry: SolutionRegistry,
    max_solutions: Option<usize>,
    deadline: Option<Instant>,
}

impl Search {
    /// One search step: fill the first empty cell or record a solution.
    ///
    /// Each recursive call receives its own board snapshot, so no undo step
    /// is needed; the placement list is the only shared state and is
    /// restored by pop after every branch.
    fn step(&mut self, board: &Board, unused: u32, placements: &mut Vec<Placement>) -> Result<Flow> {
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Ok(Flow::Stop);
            }
        }

        let Some(target) = board.next_empty_cell() else {
            self.registry.record(Solution {
                placements: placements.clone(),
            });
            if self
                .max_solutions
                .is_some_and(|cap| self.registry.len() >= cap)
            {
                return Ok(Flow::Stop);
            }
            return Ok(Flow::Continue);
        };

        for index in 0..self.catalog.len() {
            if unused & (1 << index) == 0 {
                continue;
            }
            for orientation_index in 0..self.catalog[index].1.len() {
                let (piece_id, ref orientations) = self.catalog[index];
                let orientation = orientations[orientation_index].clone();

                let cells = covered_cells(target, &orientation.shape);
                if !board.is_placeable(&cells) {
                    continue;
                }

                let next = board.place(&cells)?;
                placements.push(Placement {
                    piece_id,
                    orientation,
                    anchor: target,
                    cells,
                });
                let flow = self.step(&next, unused & !(1 << index), placements)?;
                placements.pop();

                if matches!(flow, Flow::Stop) {
                    return Ok(Flow::Stop);
                }
            }
        }

        // no candidate advanced the search; this branch is exhausted
        Ok(Flow::Continue)
    }
}
