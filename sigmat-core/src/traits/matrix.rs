//! Read and write contracts for logical matrices
//!
//! [`Matrix`] is the read capability: bounded or zero-padded element
//! access, reductions, and lazy algebra builders. [`MutableMatrix`] layers
//! the write capability on top. Both speak logical `(row, column)`
//! coordinates only; physical index mappings stay private to each storage
//! strategy.

use core::cell::RefCell;

use crate::error::{MatrixError, Result};
use crate::validation::check_length;
use crate::view::{
    DifferenceMatrix, EnlargedMatrix, HadamardMatrix, ProductMatrix, ScaledMatrix, SumMatrix,
    TranslatedMatrix, TransposedMatrix,
};

#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Read contract for logical matrices
///
/// For any in-range coordinate, [`get`](Self::get) is deterministic given
/// the current state of all transitively referenced storage. When the
/// matrix is zero-padded, out-of-range reads yield 0 instead of failing;
/// writes to out-of-range coordinates always fail regardless.
///
/// The algebra builders each return a lazy view over their operands: no
/// copying, no caching, values recomputed from current operand state on
/// every access. Plug operands in by reference (`&m`) or, when a view must
/// observe later mutation of its operand, through [`RefCell`] (this layer
/// is single-threaded; see the crate docs).
pub trait Matrix {
    /// Number of rows
    fn rows(&self) -> usize;

    /// Number of columns
    fn columns(&self) -> usize;

    /// Whether out-of-range reads yield 0 instead of failing
    fn is_zero_padded(&self) -> bool;

    /// Read the value at `(row, column)`
    fn get(&self, row: usize, column: usize) -> Result<f32>;

    /// Matrix dimensions as (rows, columns)
    fn dimensions(&self) -> (usize, usize) {
        (self.rows(), self.columns())
    }

    /// Read a value in backing-buffer order
    ///
    /// Only meaningful for buffer-backed storage, which overrides this.
    /// Composition views and map-based sparse matrices have no buffer and
    /// signal [`Unsupported`](MatrixError::Unsupported).
    fn get_linear(&self, index: usize) -> Result<f32> {
        let _ = index;
        Err(MatrixError::Unsupported(
            "linear access requires a backing buffer",
        ))
    }

    /// Sum of all elements
    ///
    /// Generic O(rows * columns) definition over repeated [`get`](Self::get);
    /// sparse storage overrides this to visit stored entries only.
    ///
    /// Reductions assume every in-extent read succeeds, which holds for
    /// all storage matrices. On a view whose smaller operand is not
    /// zero-padded that assumption is the caller's to establish.
    fn sum(&self) -> f32 {
        let mut total = 0.0;
        for row in 0..self.rows() {
            for column in 0..self.columns() {
                // In-range reads cannot fail
                total += self.get(row, column).unwrap_or(0.0);
            }
        }
        total
    }

    /// Per-row sums, one entry per row
    #[cfg(feature = "alloc")]
    fn row_sums(&self) -> Vec<f32> {
        let mut sums = Vec::with_capacity(self.rows());
        for row in 0..self.rows() {
            let mut total = 0.0;
            for column in 0..self.columns() {
                total += self.get(row, column).unwrap_or(0.0);
            }
            sums.push(total);
        }
        sums
    }

    /// Per-column sums, one entry per column
    #[cfg(feature = "alloc")]
    fn column_sums(&self) -> Vec<f32> {
        let mut sums = Vec::with_capacity(self.columns());
        for column in 0..self.columns() {
            let mut total = 0.0;
            for row in 0..self.rows() {
                total += self.get(row, column).unwrap_or(0.0);
            }
            sums.push(total);
        }
        sums
    }

    /// Read all values of a row, in column order
    #[cfg(feature = "alloc")]
    fn get_row(&self, row: usize) -> Result<Vec<f32>> {
        let mut values = Vec::with_capacity(self.columns());
        for column in 0..self.columns() {
            values.push(self.get(row, column)?);
        }
        Ok(values)
    }

    /// Read all values of a column, in row order
    #[cfg(feature = "alloc")]
    fn get_column(&self, column: usize) -> Result<Vec<f32>> {
        let mut values = Vec::with_capacity(self.rows());
        for row in 0..self.rows() {
            values.push(self.get(row, column)?);
        }
        Ok(values)
    }

    /// Lazy elementwise sum with `other`
    ///
    /// Dimensions are the elementwise maximum of the operands; the result
    /// is zero-padded only when both operands are.
    fn add<B: Matrix>(self, other: B) -> SumMatrix<Self, B>
    where
        Self: Sized,
    {
        SumMatrix::new(self, other)
    }

    /// Lazy elementwise difference with `other`
    fn subtract<B: Matrix>(self, other: B) -> DifferenceMatrix<Self, B>
    where
        Self: Sized,
    {
        DifferenceMatrix::new(self, other)
    }

    /// Lazy multiplication of every element by a scalar
    fn scale(self, factor: f32) -> ScaledMatrix<Self>
    where
        Self: Sized,
    {
        ScaledMatrix::new(self, factor)
    }

    /// Lazy matrix product with `other`
    ///
    /// Fails with [`IncompatibleDimensions`](MatrixError::IncompatibleDimensions)
    /// unless `self.columns() == other.rows()`.
    fn multiply<B: Matrix>(self, other: B) -> Result<ProductMatrix<Self, B>>
    where
        Self: Sized,
    {
        ProductMatrix::new(self, other)
    }

    /// Lazy elementwise (Hadamard) product with `other`
    ///
    /// Shapes need not match; reads beyond the smaller operand rely on its
    /// zero-padding and fail at use time when it has none.
    fn hadamard<B: Matrix>(self, other: B) -> HadamardMatrix<Self, B>
    where
        Self: Sized,
    {
        HadamardMatrix::new(self, other)
    }

    /// Lazy transpose
    fn transpose(self) -> TransposedMatrix<Self>
    where
        Self: Sized,
    {
        TransposedMatrix::new(self)
    }

    /// Lazy translation by signed row/column offsets
    ///
    /// Repositions the operand inside a logically larger coordinate space;
    /// the new extent is `max(0, extent + offset)` per axis.
    fn translate(self, row_offset: isize, column_offset: isize) -> TranslatedMatrix<Self>
    where
        Self: Sized,
    {
        TranslatedMatrix::new(self, row_offset, column_offset)
    }

    /// Lazy enlargement: `self` where in range, `other` everywhere else
    fn enlarge<B: Matrix>(self, other: B) -> EnlargedMatrix<Self, B>
    where
        Self: Sized,
    {
        EnlargedMatrix::new(self, other)
    }
}

/// Write contract layered on the read capability
///
/// Writes always validate coordinates: zero-padding never applies to
/// [`set`](Self::set). Backends with restricted representations fail with
/// [`ValueOutOfRange`](MatrixError::ValueOutOfRange) instead of storing an
/// approximation outside their domain.
pub trait MutableMatrix: Matrix {
    /// Store a value at `(row, column)`
    fn set(&mut self, row: usize, column: usize, value: f32) -> Result<()>;

    /// Store the same value at every writable coordinate
    fn fill(&mut self, value: f32) -> Result<()> {
        for row in 0..self.rows() {
            for column in 0..self.columns() {
                self.set(row, column, value)?;
            }
        }
        Ok(())
    }

    /// Bulk-load values in row-major order
    ///
    /// The slice length must equal `rows * columns`.
    fn copy_from_slice(&mut self, values: &[f32]) -> Result<()> {
        check_length(self.rows() * self.columns(), values.len())?;
        let columns = self.columns();
        for (index, &value) in values.iter().enumerate() {
            self.set(index / columns, index % columns, value)?;
        }
        Ok(())
    }

    /// Copy every element of an equally-shaped source matrix
    fn copy_matrix<S: Matrix + ?Sized>(&mut self, source: &S) -> Result<()>
    where
        Self: Sized,
    {
        check_length(self.rows(), source.rows())?;
        check_length(self.columns(), source.columns())?;
        for row in 0..self.rows() {
            for column in 0..self.columns() {
                self.set(row, column, source.get(row, column)?)?;
            }
        }
        Ok(())
    }

    /// Copy a `rows * columns` region of `source` starting at
    /// `(from_row, from_column)` to `(to_row, to_column)` in `self`
    ///
    /// Source reads outside the source extent follow its zero-padding rule;
    /// destination writes outside `self` always fail.
    #[allow(clippy::too_many_arguments)]
    fn copy_region<S: Matrix + ?Sized>(
        &mut self,
        source: &S,
        from_row: usize,
        from_column: usize,
        to_row: usize,
        to_column: usize,
        rows: usize,
        columns: usize,
    ) -> Result<()>
    where
        Self: Sized,
    {
        for row in 0..rows {
            for column in 0..columns {
                let value = source.get(from_row + row, from_column + column)?;
                self.set(to_row + row, to_column + column, value)?;
            }
        }
        Ok(())
    }

    /// Bulk-set one row; the slice length must equal `columns`
    fn set_row(&mut self, row: usize, values: &[f32]) -> Result<()> {
        check_length(self.columns(), values.len())?;
        for (column, &value) in values.iter().enumerate() {
            self.set(row, column, value)?;
        }
        Ok(())
    }

    /// Bulk-set one column; the slice length must equal `rows`
    fn set_column(&mut self, column: usize, values: &[f32]) -> Result<()> {
        check_length(self.rows(), values.len())?;
        for (row, &value) in values.iter().enumerate() {
            self.set(row, column, value)?;
        }
        Ok(())
    }
}

// Forwarding impl so views can hold operands as plain references. Required
// methods and the overridable ones forward to preserve storage-aware fast
// paths; the Sized-gated builders keep their defaults.
impl<M: Matrix + ?Sized> Matrix for &M {
    fn rows(&self) -> usize {
        (**self).rows()
    }

    fn columns(&self) -> usize {
        (**self).columns()
    }

    fn is_zero_padded(&self) -> bool {
        (**self).is_zero_padded()
    }

    fn get(&self, row: usize, column: usize) -> Result<f32> {
        (**self).get(row, column)
    }

    fn get_linear(&self, index: usize) -> Result<f32> {
        (**self).get_linear(index)
    }

    fn sum(&self) -> f32 {
        (**self).sum()
    }

    #[cfg(feature = "alloc")]
    fn row_sums(&self) -> Vec<f32> {
        (**self).row_sums()
    }

    #[cfg(feature = "alloc")]
    fn column_sums(&self) -> Vec<f32> {
        (**self).column_sums()
    }

    #[cfg(feature = "alloc")]
    fn get_row(&self, row: usize) -> Result<Vec<f32>> {
        (**self).get_row(row)
    }

    #[cfg(feature = "alloc")]
    fn get_column(&self, column: usize) -> Result<Vec<f32>> {
        (**self).get_column(column)
    }
}

// Forwarding impl for shared single-threaded mutability: a view built over
// `&RefCell<M>` observes writes made through `borrow_mut` afterwards,
// without being rebuilt. Reads take a shared borrow for the duration of
// one element access only.
impl<M: Matrix> Matrix for RefCell<M> {
    fn rows(&self) -> usize {
        self.borrow().rows()
    }

    fn columns(&self) -> usize {
        self.borrow().columns()
    }

    fn is_zero_padded(&self) -> bool {
        self.borrow().is_zero_padded()
    }

    fn get(&self, row: usize, column: usize) -> Result<f32> {
        self.borrow().get(row, column)
    }

    fn get_linear(&self, index: usize) -> Result<f32> {
        self.borrow().get_linear(index)
    }

    fn sum(&self) -> f32 {
        self.borrow().sum()
    }

    #[cfg(feature = "alloc")]
    fn row_sums(&self) -> Vec<f32> {
        self.borrow().row_sums()
    }

    #[cfg(feature = "alloc")]
    fn column_sums(&self) -> Vec<f32> {
        self.borrow().column_sums()
    }

    #[cfg(feature = "alloc")]
    fn get_row(&self, row: usize) -> Result<Vec<f32>> {
        self.borrow().get_row(row)
    }

    #[cfg(feature = "alloc")]
    fn get_column(&self, column: usize) -> Result<Vec<f32>> {
        self.borrow().get_column(column)
    }
}
