//! Elementwise arithmetic views: sum, difference, scaling, Hadamard product
//!
//! The two-operand views take the elementwise maximum of their operand
//! dimensions rather than demanding equal shapes. Reads beyond a smaller
//! operand rely on that operand's zero-padding; when it has none, the read
//! fails at use time, not at construction time.

use crate::error::Result;
use crate::traits::Matrix;
use crate::validation::padded_or_check;

/// Lazy elementwise sum of two operand matrices
pub struct SumMatrix<A: Matrix, B: Matrix> {
    left: A,
    right: B,
}

impl<A: Matrix, B: Matrix> SumMatrix<A, B> {
    /// Create a sum view over two operands
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A: Matrix, B: Matrix> Matrix for SumMatrix<A, B> {
    fn rows(&self) -> usize {
        self.left.rows().max(self.right.rows())
    }

    fn columns(&self) -> usize {
        self.left.columns().max(self.right.columns())
    }

    fn is_zero_padded(&self) -> bool {
        self.left.is_zero_padded() && self.right.is_zero_padded()
    }

    fn get(&self, row: usize, column: usize) -> Result<f32> {
        if padded_or_check(row, column, self.rows(), self.columns(), self.is_zero_padded())? {
            return Ok(0.0);
        }
        Ok(self.left.get(row, column)? + self.right.get(row, column)?)
    }
}

/// Lazy elementwise difference of two operand matrices
pub struct DifferenceMatrix<A: Matrix, B: Matrix> {
    left: A,
    right: B,
}

impl<A: Matrix, B: Matrix> DifferenceMatrix<A, B> {
    /// Create a difference view over two operands
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A: Matrix, B: Matrix> Matrix for DifferenceMatrix<A, B> {
    fn rows(&self) -> usize {
        self.left.rows().max(self.right.rows())
    }

    fn columns(&self) -> usize {
        self.left.columns().max(self.right.columns())
    }

    fn is_zero_padded(&self) -> bool {
        self.left.is_zero_padded() && self.right.is_zero_padded()
    }

    fn get(&self, row: usize, column: usize) -> Result<f32> {
        if padded_or_check(row, column, self.rows(), self.columns(), self.is_zero_padded())? {
            return Ok(0.0);
        }
        Ok(self.left.get(row, column)? - self.right.get(row, column)?)
    }
}

/// Lazy multiplication of every operand element by a scalar
///
/// Dimensions and zero-padding pass through unchanged.
pub struct ScaledMatrix<A: Matrix> {
    operand: A,
    factor: f32,
}

impl<A: Matrix> ScaledMatrix<A> {
    /// Create a scaling view over an operand
    pub fn new(operand: A, factor: f32) -> Self {
        Self { operand, factor }
    }
}

impl<A: Matrix> Matrix for ScaledMatrix<A> {
    fn rows(&self) -> usize {
        self.operand.rows()
    }

    fn columns(&self) -> usize {
        self.operand.columns()
    }

    fn is_zero_padded(&self) -> bool {
        self.operand.is_zero_padded()
    }

    fn get(&self, row: usize, column: usize) -> Result<f32> {
        Ok(self.operand.get(row, column)? * self.factor)
    }
}

/// Lazy elementwise (Hadamard) product of two operand matrices
pub struct HadamardMatrix<A: Matrix, B: Matrix> {
    left: A,
    right: B,
}

impl<A: Matrix, B: Matrix> HadamardMatrix<A, B> {
    /// Create a Hadamard-product view over two operands
    pub fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A: Matrix, B: Matrix> Matrix for HadamardMatrix<A, B> {
    fn rows(&self) -> usize {
        self.left.rows().max(self.right.rows())
    }

    fn columns(&self) -> usize {
        self.left.columns().max(self.right.columns())
    }

    fn is_zero_padded(&self) -> bool {
        self.left.is_zero_padded() && self.right.is_zero_padded()
    }

    fn get(&self, row: usize, column: usize) -> Result<f32> {
        if padded_or_check(row, column, self.rows(), self.columns(), self.is_zero_padded())? {
            return Ok(0.0);
        }
        Ok(self.left.get(row, column)? * self.right.get(row, column)?)
    }
}
