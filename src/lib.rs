//! Polyomino Placement Puzzle Core
//!
//! Geometry and exhaustive search for polyomino placement puzzles: shape
//! rotation/reflection, orientation catalogs deduplicated under the
//! symmetry group, a board occupancy grid with placement and validity
//! checks, and a backtracking solver that enumerates every way a piece set
//! can completely tile a board. Discovered solutions can be exported in the
//! relational shape the surrounding application persists, and levels can be
//! derived from them by difficulty tier.

pub mod board;
pub mod error;
pub mod levels;
pub mod orientation;
pub mod persistence;
pub mod pieces;
pub mod registry;
pub mod shape;
pub mod solver;

pub use board::{covered_cells, Board, BoardDims, Cell, CLASSIC_DIMS, WIDE_DIMS};
pub use error::{PuzzleError, Result};
pub use pieces::{Piece, PieceId, PieceSet};
pub use shape::{Axis, Shape};
pub use solver::{solve, solve_all, Placement, Solution, SolveConfig};
