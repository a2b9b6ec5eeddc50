//! Shape compatibility validation
//!
//! Checks applied at construction time of composition views and compacted
//! storage, before any element is touched.

use crate::MatrixError;

/// Validate operand shapes for a matrix product
///
/// The product `A * B` is only defined when `A.columns == B.rows`.
pub const fn check_multiplicable(
    left_columns: usize,
    right_rows: usize,
) -> Result<(), MatrixError> {
    if left_columns != right_rows {
        return Err(MatrixError::IncompatibleDimensions {
            left_columns,
            right_rows,
        });
    }
    Ok(())
}

/// Validate the bandwidth of a banded matrix
///
/// A band is always centered on the diagonal, so its width `2k + 1` must be
/// odd.
pub const fn check_odd_bandwidth(bandwidth: usize) -> Result<(), MatrixError> {
    if bandwidth % 2 == 0 {
        return Err(MatrixError::InvalidBandwidth { bandwidth });
    }
    Ok(())
}

/// Validate the length of a bulk operand against the expected extent
pub const fn check_length(expected: usize, actual: usize) -> Result<(), MatrixError> {
    if expected != actual {
        return Err(MatrixError::LengthMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_multiplicable() {
        assert_eq!(check_multiplicable(3, 3), Ok(()));
        assert_eq!(
            check_multiplicable(3, 4),
            Err(MatrixError::IncompatibleDimensions {
                left_columns: 3,
                right_rows: 4,
            })
        );
    }

    #[test]
    fn test_check_odd_bandwidth() {
        assert_eq!(check_odd_bandwidth(1), Ok(()));
        assert_eq!(check_odd_bandwidth(3), Ok(()));
        assert_eq!(
            check_odd_bandwidth(4),
            Err(MatrixError::InvalidBandwidth { bandwidth: 4 })
        );
        // Zero is even, and a band of no width is meaningless anyway
        assert!(check_odd_bandwidth(0).is_err());
    }

    #[test]
    fn test_check_length() {
        assert_eq!(check_length(6, 6), Ok(()));
        assert_eq!(
            check_length(6, 5),
            Err(MatrixError::LengthMismatch {
                expected: 6,
                actual: 5,
            })
        );
    }
}
