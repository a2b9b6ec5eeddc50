//! Coordinate-remapping views: transpose, translation, enlargement

use crate::error::{MatrixError, Result};
use crate::traits::Matrix;

/// Lazy transpose of an operand matrix
///
/// Pure coordinate swap; bounds and zero-padding are the operand's own,
/// applied to the swapped coordinates.
pub struct TransposedMatrix<A: Matrix> {
    operand: A,
}

impl<A: Matrix> TransposedMatrix<A> {
    /// Create a transpose view over an operand
    pub fn new(operand: A) -> Self {
        Self { operand }
    }
}

impl<A: Matrix> Matrix for TransposedMatrix<A> {
    fn rows(&self) -> usize {
        self.operand.columns()
    }

    fn columns(&self) -> usize {
        self.operand.rows()
    }

    fn is_zero_padded(&self) -> bool {
        self.operand.is_zero_padded()
    }

    fn get(&self, row: usize, column: usize) -> Result<f32> {
        self.operand.get(column, row)
    }
}

/// Lazy translation of an operand by signed row/column offsets
///
/// Repositions the operand inside a logically larger (or smaller)
/// coordinate space: reading `(row, column)` reads the operand at
/// `(row - row_offset, column - column_offset)`. Coordinates that map
/// before the operand's origin behave exactly like out-of-range reads on
/// the operand itself.
pub struct TranslatedMatrix<A: Matrix> {
    operand: A,
    row_offset: isize,
    column_offset: isize,
}

impl<A: Matrix> TranslatedMatrix<A> {
    /// Create a translation view over an operand
    pub fn new(operand: A, row_offset: isize, column_offset: isize) -> Self {
        Self {
            operand,
            row_offset,
            column_offset,
        }
    }

    fn offset_extent(extent: usize, offset: isize) -> usize {
        (extent as isize + offset).max(0) as usize
    }
}

impl<A: Matrix> Matrix for TranslatedMatrix<A> {
    fn rows(&self) -> usize {
        Self::offset_extent(self.operand.rows(), self.row_offset)
    }

    fn columns(&self) -> usize {
        Self::offset_extent(self.operand.columns(), self.column_offset)
    }

    fn is_zero_padded(&self) -> bool {
        self.operand.is_zero_padded()
    }

    fn get(&self, row: usize, column: usize) -> Result<f32> {
        let source_row = row as isize - self.row_offset;
        let source_column = column as isize - self.column_offset;
        if source_row < 0 || source_column < 0 {
            if self.operand.is_zero_padded() {
                return Ok(0.0);
            }
            return Err(MatrixError::OutOfBounds {
                row,
                column,
                rows: self.rows(),
                columns: self.columns(),
            });
        }
        self.operand.get(source_row as usize, source_column as usize)
    }
}

/// Lazy enlargement: the primary operand where in range, the fallback
/// everywhere else
///
/// Dimensions are the elementwise maximum of the operands; zero-padding
/// follows the fallback, which supplies every coordinate the primary does
/// not cover.
pub struct EnlargedMatrix<A: Matrix, B: Matrix> {
    primary: A,
    fallback: B,
}

impl<A: Matrix, B: Matrix> EnlargedMatrix<A, B> {
    /// Create an enlargement view over two operands
    pub fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: Matrix, B: Matrix> Matrix for EnlargedMatrix<A, B> {
    fn rows(&self) -> usize {
        self.primary.rows().max(self.fallback.rows())
    }

    fn columns(&self) -> usize {
        self.primary.columns().max(self.fallback.columns())
    }

    fn is_zero_padded(&self) -> bool {
        self.fallback.is_zero_padded()
    }

    fn get(&self, row: usize, column: usize) -> Result<f32> {
        if row < self.primary.rows() && column < self.primary.columns() {
            self.primary.get(row, column)
        } else {
            self.fallback.get(row, column)
        }
    }
}
