//! Lazy matrix-product view

use crate::error::Result;
use crate::traits::Matrix;
use crate::validation::{check_multiplicable, padded_or_check};

/// Lazy matrix product of two operand matrices
///
/// Construction validates that the left operand's column count equals the
/// right operand's row count; the result has the left operand's rows and
/// the right operand's columns. Every element access recomputes the full
/// inner-product sum from current operand state.
pub struct ProductMatrix<A: Matrix, B: Matrix> {
    left: A,
    right: B,
}

impl<A: Matrix, B: Matrix> ProductMatrix<A, B> {
    /// Create a product view over two operands
    ///
    /// Fails with
    /// [`IncompatibleDimensions`](crate::MatrixError::IncompatibleDimensions)
    /// unless `left.columns() == right.rows()`.
    pub fn new(left: A, right: B) -> Result<Self> {
        check_multiplicable(left.columns(), right.rows())?;
        Ok(Self { left, right })
    }
}

impl<A: Matrix, B: Matrix> Matrix for ProductMatrix<A, B> {
    fn rows(&self) -> usize {
        self.left.rows()
    }

    fn columns(&self) -> usize {
        self.right.columns()
    }

    fn is_zero_padded(&self) -> bool {
        self.left.is_zero_padded() && self.right.is_zero_padded()
    }

    fn get(&self, row: usize, column: usize) -> Result<f32> {
        if padded_or_check(row, column, self.rows(), self.columns(), self.is_zero_padded())? {
            return Ok(0.0);
        }
        let mut total = 0.0;
        for k in 0..self.left.columns() {
            total += self.left.get(row, k)? * self.right.get(k, column)?;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use crate::view::grid::Grid;
    use crate::{Matrix, MatrixError};

    #[test]
    fn test_product_dimensions() {
        let a = Grid::new([[0.0; 3]; 2]);
        let b = Grid::new([[0.0; 4]; 3]);
        let view = (&a).multiply(&b).unwrap();

        assert_eq!(view.dimensions(), (2, 4));
    }

    #[test]
    fn test_product_rejects_incompatible_shapes() {
        let a = Grid::new([[0.0; 3]; 2]);
        let c = Grid::new([[0.0; 4]; 2]);

        assert_eq!(
            (&a).multiply(&c).err(),
            Some(MatrixError::IncompatibleDimensions {
                left_columns: 3,
                right_rows: 2,
            })
        );
    }

    #[test]
    fn test_product_values() {
        let a = Grid::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Grid::new([[5.0, 6.0], [7.0, 8.0]]);
        let view = (&a).multiply(&b).unwrap();

        assert_eq!(view.get(0, 0), Ok(19.0));
        assert_eq!(view.get(0, 1), Ok(22.0));
        assert_eq!(view.get(1, 0), Ok(43.0));
        assert_eq!(view.get(1, 1), Ok(50.0));
    }

    #[test]
    fn test_product_out_of_range() {
        let a = Grid::zero_padded([[1.0]]);
        let b = Grid::zero_padded([[1.0]]);
        let padded = (&a).multiply(&b).unwrap();
        assert_eq!(padded.get(4, 4), Ok(0.0));

        let c = Grid::new([[1.0]]);
        let d = Grid::new([[1.0]]);
        let strict = (&c).multiply(&d).unwrap();
        assert!(matches!(
            strict.get(4, 4),
            Err(MatrixError::OutOfBounds { .. })
        ));
    }
}
