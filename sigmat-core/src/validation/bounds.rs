//! Coordinate and linear-index bounds validation
//!
//! These are the only bounds checks in the crate; every storage matrix and
//! composition view routes element access through them.

use crate::MatrixError;

/// Validate a `(row, column)` coordinate against a matrix extent
///
/// Fails with [`MatrixError::OutOfBounds`] whenever the coordinate lies
/// outside `[0, rows) x [0, columns)`.
pub const fn check_bounds(
    row: usize,
    column: usize,
    rows: usize,
    columns: usize,
) -> Result<(), MatrixError> {
    if row >= rows || column >= columns {
        return Err(MatrixError::OutOfBounds {
            row,
            column,
            rows,
            columns,
        });
    }
    Ok(())
}

/// Validate a linear index against a buffer size
pub const fn check_index(index: usize, size: usize) -> Result<(), MatrixError> {
    if index >= size {
        return Err(MatrixError::IndexOutOfBounds { index, size });
    }
    Ok(())
}

/// The shared zero-padding guard used by every `get`
///
/// Returns `Ok(true)` when the coordinate is out of range but the matrix is
/// zero-padded, meaning the caller must substitute the padding value.
/// Returns `Ok(false)` when the coordinate is valid and the real lookup
/// should proceed. Fails with [`MatrixError::OutOfBounds`] otherwise.
pub const fn padded_or_check(
    row: usize,
    column: usize,
    rows: usize,
    columns: usize,
    zero_padded: bool,
) -> Result<bool, MatrixError> {
    if row < rows && column < columns {
        return Ok(false);
    }
    if zero_padded {
        return Ok(true);
    }
    Err(MatrixError::OutOfBounds {
        row,
        column,
        rows,
        columns,
    })
}
