//! Triangular and banded compacted storage
//!
//! Both matrices here are square and symmetric: a write through `(i, j)`
//! is visible when reading `(j, i)`. They differ in how much of the upper
//! triangle they physically keep.

use crate::buffers::FloatBuffer;
use sigmat_core::validation::{check_bounds, check_index, check_odd_bandwidth, padded_or_check};
use sigmat_core::{matrices_equal, BackingBuffer, Matrix, MatrixError, MutableMatrix, Result};

/// Swap coordinates into the stored (upper) triangle
const fn ordered(row: usize, column: usize) -> (usize, usize) {
    if row > column {
        (column, row)
    } else {
        (row, column)
    }
}

/// Symmetric matrix storing only the upper triangle
///
/// A `length * length` matrix keeps `length * (length + 1) / 2` values;
/// accesses below the diagonal are mirrored across it before the index
/// mapping `index = row * length + column - row * (row + 1) / 2` applies.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymmetricMatrix<B: BackingBuffer = FloatBuffer> {
    length: usize,
    buffer: B,
    zero_padded: bool,
}

impl SymmetricMatrix<FloatBuffer> {
    /// Create a zeroed symmetric matrix with exact float storage
    pub fn new(length: usize) -> Self {
        Self::with_buffer(length, FloatBuffer::new(), false)
    }

    /// Create a zeroed, zero-padded symmetric matrix
    pub fn zero_padded(length: usize) -> Self {
        Self::with_buffer(length, FloatBuffer::new(), true)
    }
}

impl<B: BackingBuffer> SymmetricMatrix<B> {
    /// Create a symmetric matrix over an explicit backing buffer
    ///
    /// An unallocated buffer is allocated to the compacted triangle size.
    pub fn with_buffer(length: usize, mut buffer: B, zero_padded: bool) -> Self {
        if !buffer.is_allocated() {
            buffer.allocate(length * (length + 1) / 2);
        }
        Self {
            length,
            buffer,
            zero_padded,
        }
    }

    /// Edge length of the square matrix
    pub fn length(&self) -> usize {
        self.length
    }

    /// The underlying backing buffer
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    fn index(&self, row: usize, column: usize) -> usize {
        // Callers have already swapped to row <= column
        row * self.length + column - row * (row + 1) / 2
    }
}

impl<B: BackingBuffer> Matrix for SymmetricMatrix<B> {
    fn rows(&self) -> usize {
        self.length
    }

    fn columns(&self) -> usize {
        self.length
    }

    fn is_zero_padded(&self) -> bool {
        self.zero_padded
    }

    fn get(&self, row: usize, column: usize) -> Result<f32> {
        if padded_or_check(row, column, self.length, self.length, self.zero_padded)? {
            return Ok(0.0);
        }
        let (row, column) = ordered(row, column);
        Ok(self.buffer.get(self.index(row, column)))
    }

    fn get_linear(&self, index: usize) -> Result<f32> {
        check_index(index, self.length * (self.length + 1) / 2)?;
        Ok(self.buffer.get(index))
    }
}

impl<B: BackingBuffer> MutableMatrix for SymmetricMatrix<B> {
    fn set(&mut self, row: usize, column: usize, value: f32) -> Result<()> {
        check_bounds(row, column, self.length, self.length)?;
        let (row, column) = ordered(row, column);
        self.buffer.set(self.index(row, column), value)
    }
}

impl<B: BackingBuffer, B2: BackingBuffer> PartialEq<SymmetricMatrix<B2>> for SymmetricMatrix<B> {
    fn eq(&self, other: &SymmetricMatrix<B2>) -> bool {
        matrices_equal(self, other)
    }
}

/// Symmetric matrix storing only a diagonal band
///
/// For an odd `bandwidth = 2k + 1`, values with `|row - column| <= k` are
/// stored; in-range reads outside the band yield a configurable default
/// (0 unless set) and writes outside the band fail. Each row over-allocates
/// to a fixed `columns_per_row = min(k + 1, length)` slots, mapped as
/// `index = row * columns_per_row + (column - row)` after the symmetric
/// swap.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SymmetricBandMatrix<B: BackingBuffer = FloatBuffer> {
    length: usize,
    half_bandwidth: usize,
    columns_per_row: usize,
    default_value: f32,
    buffer: B,
    zero_padded: bool,
}

impl SymmetricBandMatrix<FloatBuffer> {
    /// Create a zeroed banded matrix with exact float storage
    ///
    /// Fails with [`InvalidBandwidth`](MatrixError::InvalidBandwidth) when
    /// `bandwidth` is even.
    pub fn new(length: usize, bandwidth: usize) -> Result<Self> {
        Self::with_buffer(length, bandwidth, FloatBuffer::new(), false)
    }

    /// Create a zeroed, zero-padded banded matrix
    pub fn zero_padded(length: usize, bandwidth: usize) -> Result<Self> {
        Self::with_buffer(length, bandwidth, FloatBuffer::new(), true)
    }
}

impl<B: BackingBuffer> SymmetricBandMatrix<B> {
    /// Create a banded matrix over an explicit backing buffer
    pub fn with_buffer(
        length: usize,
        bandwidth: usize,
        mut buffer: B,
        zero_padded: bool,
    ) -> Result<Self> {
        check_odd_bandwidth(bandwidth)?;
        let half_bandwidth = bandwidth / 2;
        let columns_per_row = (half_bandwidth + 1).min(length);
        if !buffer.is_allocated() {
            buffer.allocate(length * columns_per_row);
        }
        Ok(Self {
            length,
            half_bandwidth,
            columns_per_row,
            default_value: 0.0,
            buffer,
            zero_padded,
        })
    }

    /// Set the value reported for in-range reads outside the band
    pub fn with_default_value(mut self, default_value: f32) -> Self {
        self.default_value = default_value;
        self
    }

    /// Edge length of the square matrix
    pub fn length(&self) -> usize {
        self.length
    }

    /// Total width of the stored band, always odd
    pub fn bandwidth(&self) -> usize {
        2 * self.half_bandwidth + 1
    }

    /// The value reported outside the band
    pub fn default_value(&self) -> f32 {
        self.default_value
    }

    /// The underlying backing buffer
    pub fn buffer(&self) -> &B {
        &self.buffer
    }

    fn band_index(&self, row: usize, column: usize) -> Option<usize> {
        let (row, column) = ordered(row, column);
        if column - row > self.half_bandwidth {
            return None;
        }
        Some(row * self.columns_per_row + (column - row))
    }
}

impl<B: BackingBuffer> Matrix for SymmetricBandMatrix<B> {
    fn rows(&self) -> usize {
        self.length
    }

    fn columns(&self) -> usize {
        self.length
    }

    fn is_zero_padded(&self) -> bool {
        self.zero_padded
    }

    fn get(&self, row: usize, column: usize) -> Result<f32> {
        if padded_or_check(row, column, self.length, self.length, self.zero_padded)? {
            return Ok(0.0);
        }
        match self.band_index(row, column) {
            Some(index) => Ok(self.buffer.get(index)),
            None => Ok(self.default_value),
        }
    }

    fn get_linear(&self, index: usize) -> Result<f32> {
        check_index(index, self.length * self.columns_per_row)?;
        Ok(self.buffer.get(index))
    }
}

impl<B: BackingBuffer> MutableMatrix for SymmetricBandMatrix<B> {
    fn set(&mut self, row: usize, column: usize, value: f32) -> Result<()> {
        check_bounds(row, column, self.length, self.length)?;
        match self.band_index(row, column) {
            Some(index) => self.buffer.set(index, value),
            None => Err(MatrixError::OutOfBounds {
                row,
                column,
                rows: self.length,
                columns: self.length,
            }),
        }
    }

    fn fill(&mut self, value: f32) -> Result<()> {
        // Only the band is writable
        for row in 0..self.length {
            for column in row..(row + self.half_bandwidth + 1).min(self.length) {
                self.set(row, column, value)?;
            }
        }
        Ok(())
    }
}

impl<B: BackingBuffer, B2: BackingBuffer> PartialEq<SymmetricBandMatrix<B2>>
    for SymmetricBandMatrix<B>
{
    fn eq(&self, other: &SymmetricBandMatrix<B2>) -> bool {
        matrices_equal(self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symmetric_mirrors_writes() {
        let mut matrix = SymmetricMatrix::new(4);

        matrix.set(0, 3, 7.0).unwrap();
        assert_eq!(matrix.get(0, 3), Ok(7.0));
        assert_eq!(matrix.get(3, 0), Ok(7.0));

        matrix.set(2, 1, -2.0).unwrap();
        assert_eq!(matrix.get(1, 2), Ok(-2.0));
    }

    #[test]
    fn test_symmetric_property_holds_everywhere() {
        let mut matrix = SymmetricMatrix::new(3);
        let values = [(0, 1, 1.0), (1, 2, 2.0), (0, 2, 3.0), (1, 1, 4.0)];
        for (row, column, value) in values {
            matrix.set(row, column, value).unwrap();
        }

        for row in 0..3 {
            for column in 0..3 {
                assert_eq!(matrix.get(row, column), matrix.get(column, row));
            }
        }
    }

    #[test]
    fn test_symmetric_compact_buffer_size() {
        let matrix = SymmetricMatrix::new(5);
        assert_eq!(matrix.buffer().len(), 15);
        assert!(matrix.get_linear(14).is_ok());
        assert!(matrix.get_linear(15).is_err());
    }

    #[test]
    fn test_symmetric_bounds() {
        let matrix = SymmetricMatrix::new(3);
        assert!(matrix.get(3, 0).is_err());

        let padded = SymmetricMatrix::zero_padded(3);
        assert_eq!(padded.get(3, 0), Ok(0.0));
    }

    #[test]
    fn test_band_rejects_even_bandwidth() {
        assert_eq!(
            SymmetricBandMatrix::new(5, 4).err(),
            Some(MatrixError::InvalidBandwidth { bandwidth: 4 })
        );
    }

    #[test]
    fn test_band_mirrors_writes_inside_band() {
        let mut matrix = SymmetricBandMatrix::new(5, 3).unwrap();

        matrix.set(0, 1, 7.0).unwrap();
        assert_eq!(matrix.get(1, 0), Ok(7.0));
        assert_eq!(matrix.get(0, 1), Ok(7.0));
    }

    #[test]
    fn test_band_writes_outside_band_fail() {
        let mut matrix = SymmetricBandMatrix::new(5, 3).unwrap();

        // Distance 4 exceeds the half-bandwidth of 1
        assert!(matches!(
            matrix.set(0, 4, 1.0),
            Err(MatrixError::OutOfBounds { .. })
        ));
    }

    #[test]
    fn test_band_reads_outside_band_yield_default() {
        let matrix = SymmetricBandMatrix::new(5, 3)
            .unwrap()
            .with_default_value(9.0);

        assert_eq!(matrix.get(0, 4), Ok(9.0));
        assert_eq!(matrix.get(4, 0), Ok(9.0));
        assert_eq!(matrix.get(0, 0), Ok(0.0));
        assert_eq!(matrix.default_value(), 9.0);
    }

    #[test]
    fn test_band_fill_touches_band_only() {
        let mut matrix = SymmetricBandMatrix::new(4, 3).unwrap();
        matrix.fill(1.0).unwrap();

        assert_eq!(matrix.get(2, 2), Ok(1.0));
        assert_eq!(matrix.get(2, 3), Ok(1.0));
        assert_eq!(matrix.get(0, 3), Ok(0.0));
    }

    #[test]
    fn test_band_wider_than_matrix() {
        let mut matrix = SymmetricBandMatrix::new(2, 7).unwrap();
        assert_eq!(matrix.bandwidth(), 7);

        // Every coordinate is inside the band of a 2x2 matrix
        matrix.set(0, 1, 5.0).unwrap();
        assert_eq!(matrix.get(1, 0), Ok(5.0));
    }
}
