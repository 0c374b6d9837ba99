//! Board occupancy grid and placement geometry.
//!
//! The board is a flat row-major grid of filled/empty cells. Placement and
//! removal return fresh boards, so each branch of the search owns its own
//! snapshot and sibling branches never alias state.

use crate::error::{PuzzleError, Result};
use crate::shape::Shape;

/// A zero-based grid coordinate: `(x, y)` with `x` in `[0, width)` and
/// `y` in `[0, height)`.
pub type Cell = (usize, usize);

/// Board dimensions, a configuration parameter of the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardDims {
    pub width: usize,
    pub height: usize,
}

impl BoardDims {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Total cell count.
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }
}

/// The 11x5 grid used for classic solution generation.
pub const CLASSIC_DIMS: BoardDims = BoardDims::new(11, 5);

/// The 12x6 variant grid.
pub const WIDE_DIMS: BoardDims = BoardDims::new(12, 6);

/// Fixed-size occupancy grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dims: BoardDims,
    cells: Vec<bool>,
}

/// Computes the absolute cells a shape occupies when its local origin is
/// aligned to `anchor`.
///
/// The anchor receives the shape's local (0, 0) whether or not that local
/// cell is filled; when it is not, none of the emitted cells equal the
/// anchor. This is a deliberate contract, not an oversight, and the solver's
/// enumeration order depends on it.
pub fn covered_cells(anchor: Cell, shape: &Shape) -> Vec<Cell> {
    shape
        .filled_cells()
        .map(|(dx, dy)| (anchor.0 + dx, anchor.1 + dy))
        .collect()
}

impl Board {
    /// A board with every cell empty.
    pub fn empty(dims: BoardDims) -> Self {
        Self {
            dims,
            cells: vec![false; dims.cell_count()],
        }
    }

    pub fn dims(&self) -> BoardDims {
        self.dims
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        cell.1 * self.dims.width + cell.0
    }

    /// Whether `cell` is within bounds and currently filled.
    pub fn filled(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && self.cells[self.index(cell)]
    }

    #[inline]
    fn in_bounds(&self, cell: Cell) -> bool {
        cell.0 < self.dims.width && cell.1 < self.dims.height
    }

    /// True iff every cell is in bounds and empty.
    ///
    /// A false result is an ordinary negative, used by the solver to move on
    /// to the next candidate; it is never an error.
    pub fn is_placeable(&self, cells: &[Cell]) -> bool {
        cells
            .iter()
            .all(|&cell| self.in_bounds(cell) && !self.cells[self.index(cell)])
    }

    /// Returns a new board with `cells` marked filled.
    ///
    /// # Errors
    ///
    /// Returns `Overlap` if any target cell is out of bounds or already
    /// filled. Callers pre-check with [`Board::is_placeable`], so an error
    /// here is a broken invariant and aborts the run.
    pub fn place(&self, cells: &[Cell]) -> Result<Self> {
        let mut next = self.clone();
        for &cell in cells {
            if !next.in_bounds(cell) || next.cells[next.index(cell)] {
                return Err(PuzzleError::Overlap { cell });
            }
            let index = next.index(cell);
            next.cells[index] = true;
        }
        Ok(next)
    }

    /// Returns a new board with `cells` marked empty; inverse of `place`.
    ///
    /// # Errors
    ///
    /// Returns `Invariant` if any target cell is out of bounds or already
    /// empty, which signals a corrupted grid.
    pub fn remove(&self, cells: &[Cell]) -> Result<Self> {
        let mut next = self.clone();
        for &cell in cells {
            if !next.in_bounds(cell) || !next.cells[next.index(cell)] {
                return Err(PuzzleError::Invariant { cell });
            }
            let index = next.index(cell);
            next.cells[index] = false;
        }
        Ok(next)
    }

    /// First empty cell in row-major order, always scanning from (0, 0).
    ///
    /// Returns `None` when the board is full.
    pub fn next_empty_cell(&self) -> Option<Cell> {
        for y in 0..self.dims.height {
            for x in 0..self.dims.width {
                if !self.cells[y * self.dims.width + x] {
                    return Some((x, y));
                }
            }
        }
        None
    }

    /// Whether every cell is filled.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c)
    }
}
