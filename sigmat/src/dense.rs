//! Dense row-major storage matrix

use crate::buffers::FloatBuffer;
use sigmat_core::validation::{check_bounds, check_index, padded_or_check};
use sigmat_core::{matrices_equal, BackingBuffer, Matrix, MutableMatrix, Result};

/// Dense matrix over a pluggable backing buffer
///
/// Coordinates map to the buffer row-major:
/// `index = row * columns + column`. The buffer choice is the physical
/// representation only; the logical contract is identical for an exact
/// [`FloatBuffer`], a quantized byte buffer, or a sparse one.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FullMatrix<B: BackingBuffer = FloatBuffer> {
    rows: usize,
    columns: usize,
    buffer: B,
    zero_padded: bool,
}

impl FullMatrix<FloatBuffer> {
    /// Create a zeroed matrix with exact float storage
    pub fn new(rows: usize, columns: usize) -> Self {
        Self::with_buffer(rows, columns, FloatBuffer::new(), false)
    }

    /// Create a zeroed, zero-padded matrix with exact float storage
    pub fn zero_padded(rows: usize, columns: usize) -> Self {
        Self::with_buffer(rows, columns, FloatBuffer::new(), true)
    }

    /// Create a matrix from row-major values
    ///
    /// The slice length must equal `rows * columns`.
    pub fn from_slice(rows: usize, columns: usize, values: &[f32]) -> Result<Self> {
        let mut matrix = Self::new(rows, columns);
        matrix.copy_from_slice(values)?;
        Ok(matrix)
    }

    /// Deep-copy any matrix into dense float storage
    ///
    /// O(rows * columns); the source must not be mutated during the copy.
    pub fn copy_of<S: Matrix + ?Sized>(source: &S) -> Result<Self> {
        let mut matrix = Self::with_buffer(
            source.rows(),
            source.columns(),
            FloatBuffer::new(),
            source.is_zero_padded(),
        );
        matrix.copy_matrix(source)?;
        Ok(matrix)
    }
}

impl<B: BackingBuffer> FullMatrix<B> {
    /// Create a matrix over an explicit backing buffer
    ///
    /// An unallocated buffer is allocated to `rows * columns`; an already
    /// allocated buffer is used as-is and must have that size.
    pub fn with_buffer(rows: usize, columns: usize, mut buffer: B, zero_padded: bool) -> Self {
        if !buffer.is_allocated() {
            buffer.allocate(rows * columns);
        }
        Self {
            rows,
            columns,
            buffer,
            zero_padded,
        }
    }

    /// The underlying backing buffer
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    fn index(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }
}

impl<B: BackingBuffer> Matrix for FullMatrix<B> {
    fn rows(&self) -> usize {
        self.rows
    }

    fn columns(&self) -> usize {
        self.columns
    }

    fn is_zero_padded(&self) -> bool {
        self.zero_padded
    }

    fn get(&self, row: usize, column: usize) -> Result<f32> {
        if padded_or_check(row, column, self.rows, self.columns, self.zero_padded)? {
            return Ok(0.0);
        }
        Ok(self.buffer.get(self.index(row, column)))
    }

    fn get_linear(&self, index: usize) -> Result<f32> {
        check_index(index, self.rows * self.columns)?;
        Ok(self.buffer.get(index))
    }
}

impl<B: BackingBuffer> MutableMatrix for FullMatrix<B> {
    fn set(&mut self, row: usize, column: usize, value: f32) -> Result<()> {
        check_bounds(row, column, self.rows, self.columns)?;
        self.buffer.set(self.index(row, column), value)
    }
}

impl<B: BackingBuffer, B2: BackingBuffer> PartialEq<FullMatrix<B2>> for FullMatrix<B> {
    fn eq(&self, other: &FullMatrix<B2>) -> bool {
        matrices_equal(self, other)
    }
}
