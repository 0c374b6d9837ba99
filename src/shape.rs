//! Piece footprints and the transforms that produce their orientations.
//!
//! A shape is a rectangular binary matrix with a tight bounding box: every
//! row and every column contains at least one filled cell. All transforms
//! are pure and return a fresh shape, so callers can derive orientations
//! without worrying about aliasing.

use crate::error::{validation_error, Result};

/// Mirror axis for [`Shape::flip`].
///
/// `X` reverses the row order (vertical mirror); `Y` reverses each row's
/// element order (horizontal mirror).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// An immutable binary matrix describing a piece footprint.
///
/// Stored row-major; `(x, y)` indexes column `x` of row `y`, matching the
/// board's coordinate convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Shape {
    /// Builds a shape from a row-major 0/1 matrix.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty matrix, ragged rows, or a
    /// loose bounding box (a row or column with no filled cell).
    pub fn from_matrix(matrix: &[&[u8]]) -> Result<Self> {
        let rows = matrix.len();
        if rows == 0 {
            return Err(validation_error("shape matrix has no rows"));
        }
        let cols = matrix[0].len();
        if cols == 0 {
            return Err(validation_error("shape matrix has empty rows"));
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (y, row) in matrix.iter().enumerate() {
            if row.len() != cols {
                return Err(validation_error(format!(
                    "shape row {y} has {} cells, expected {cols}",
                    row.len()
                )));
            }
            cells.extend(row.iter().map(|&v| v != 0));
        }

        let shape = Self { rows, cols, cells };
        for y in 0..rows {
            if !(0..cols).any(|x| shape.filled(x, y)) {
                return Err(validation_error(format!("shape row {y} has no filled cell")));
            }
        }
        for x in 0..cols {
            if !(0..rows).any(|y| shape.filled(x, y)) {
                return Err(validation_error(format!(
                    "shape column {x} has no filled cell"
                )));
            }
        }
        Ok(shape)
    }

    /// Number of rows in the bounding box.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the bounding box.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the cell at column `x`, row `y` is filled.
    #[inline]
    pub fn filled(&self, x: usize, y: usize) -> bool {
        self.cells[y * self.cols + x]
    }

    /// Iterates the filled cells as `(dx, dy)` offsets from the local origin.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.rows)
            .flat_map(move |y| (0..self.cols).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.filled(x, y))
    }

    /// Number of filled cells. Invariant under every transform.
    pub fn area(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Rotates 90 degrees clockwise: transpose, then reverse each row.
    ///
    /// Applying this four times reproduces the original shape exactly.
    pub fn rotate_cw(&self) -> Self {
        let rows = self.cols;
        let cols = self.rows;
        let mut cells = vec![false; rows * cols];
        for y in 0..rows {
            for x in 0..cols {
                cells[y * cols + x] = self.filled(y, self.rows - 1 - x);
            }
        }
        Self { rows, cols, cells }
    }

    /// Rotates by `n` quarter turns clockwise (`n` taken modulo 4).
    pub fn rotate_quarter_turns(&self, n: u8) -> Self {
        let mut shape = self.clone();
        for _ in 0..(n % 4) {
            shape = shape.rotate_cw();
        }
        shape
    }

    /// Mirrors across the given axis. Each flip is its own inverse.
    pub fn flip(&self, axis: Axis) -> Self {
        let mut cells = vec![false; self.rows * self.cols];
        for y in 0..self.rows {
            for x in 0..self.cols {
                let value = match axis {
                    Axis::X => self.filled(x, self.rows - 1 - y),
                    Axis::Y => self.filled(self.cols - 1 - x, y),
                };
                cells[y * self.cols + x] = value;
            }
        }
        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Applies rotation, then an optional X flip, then an optional Y flip.
    ///
    /// The order is part of the contract: flip-then-rotate produces a
    /// different shape for asymmetric pieces.
    pub fn rotate_then_flip(&self, quarter_turns: u8, flip_x: bool, flip_y: bool) -> Self {
        let mut shape = self.rotate_quarter_turns(quarter_turns);
        if flip_x {
            shape = shape.flip(Axis::X);
        }
        if flip_y {
            shape = shape.flip(Axis::Y);
        }
        shape
    }

    /// Renders the shape as a 0/1 matrix for serialization.
    pub fn to_matrix(&self) -> Vec<Vec<u8>> {
        (0..self.rows)
            .map(|y| (0..self.cols).map(|x| u8::from(self.filled(x, y))).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_tromino() -> Shape {
        Shape::from_matrix(&[&[1, 0], &[1, 1]]).unwrap()
    }

    #[test]
    fn test_four_quarter_turns_is_identity() {
        let shape = l_tromino();
        assert_eq!(shape.rotate_quarter_turns(4), shape);
        assert_eq!(
            shape.rotate_cw().rotate_cw().rotate_cw().rotate_cw(),
            shape
        );
    }

    #[test]
    fn test_rotate_cw_swaps_dimensions() {
        let shape = Shape::from_matrix(&[&[1, 1, 1, 1]]).unwrap();
        let rotated = shape.rotate_cw();
        assert_eq!(rotated.rows(), 4);
        assert_eq!(rotated.cols(), 1);
    }

    #[test]
    fn test_rotate_cw_moves_cells_correctly() {
        // .X     X.
        // XX  -> XX
        let shape = Shape::from_matrix(&[&[0, 1], &[1, 1]]).unwrap();
        let rotated = shape.rotate_cw();
        assert_eq!(rotated, Shape::from_matrix(&[&[1, 0], &[1, 1]]).unwrap());
    }

    #[test]
    fn test_double_flip_is_identity() {
        let shape = l_tromino();
        assert_eq!(shape.flip(Axis::X).flip(Axis::X), shape);
        assert_eq!(shape.flip(Axis::Y).flip(Axis::Y), shape);
    }

    #[test]
    fn test_flip_axes_differ() {
        let shape = l_tromino();
        // X.          XX          .X
        // XX  -flipX> X.  -flipY> XX
        assert_eq!(
            shape.flip(Axis::X),
            Shape::from_matrix(&[&[1, 1], &[1, 0]]).unwrap()
        );
        assert_eq!(
            shape.flip(Axis::Y),
            Shape::from_matrix(&[&[0, 1], &[1, 1]]).unwrap()
        );
    }

    #[test]
    fn test_transforms_preserve_area() {
        let shape = Shape::from_matrix(&[&[0, 1, 1], &[1, 1, 0], &[0, 1, 0]]).unwrap();
        let area = shape.area();
        for turns in 0..4 {
            for flip_x in [false, true] {
                for flip_y in [false, true] {
                    assert_eq!(shape.rotate_then_flip(turns, flip_x, flip_y).area(), area);
                }
            }
        }
    }

    #[test]
    fn test_rotate_then_flip_order_matters() {
        let shape = l_tromino();
        let rotate_first = shape.rotate_cw().flip(Axis::X);
        let flip_first = shape.flip(Axis::X).rotate_cw();
        assert_ne!(rotate_first, flip_first);
        assert_eq!(shape.rotate_then_flip(1, true, false), rotate_first);
    }

    #[test]
    fn test_rejects_empty_matrix() {
        assert!(Shape::from_matrix(&[]).is_err());
        let empty_row: &[u8] = &[];
        assert!(Shape::from_matrix(&[empty_row]).is_err());
    }

    #[test]
    fn test_rejects_ragged_rows() {
        assert!(Shape::from_matrix(&[&[1, 1], &[1]]).is_err());
    }

    #[test]
    fn test_rejects_loose_bounding_box() {
        // blank row
        assert!(Shape::from_matrix(&[&[1, 1], &[0, 0]]).is_err());
        // blank column
        assert!(Shape::from_matrix(&[&[1, 0], &[1, 0]]).is_err());
    }

    #[test]
    fn test_matrix_roundtrip() {
        let shape = Shape::from_matrix(&[&[0, 1], &[1, 1]]).unwrap();
        assert_eq!(shape.to_matrix(), vec![vec![0, 1], vec![1, 1]]);
    }
}
