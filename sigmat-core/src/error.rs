//! Error types for matrix operations

/// Errors that can occur during matrix and backing-buffer operations
///
/// Every variant is a programming or input error surfaced immediately;
/// nothing in this layer is transient or retryable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatrixError {
    /// Coordinate access outside the logical extent of a matrix
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        column: usize,
        /// Number of rows in the matrix
        rows: usize,
        /// Number of columns in the matrix
        columns: usize,
    },
    /// Linear access outside the extent of a backing buffer
    IndexOutOfBounds {
        /// Requested linear index
        index: usize,
        /// Buffer size
        size: usize,
    },
    /// Operand shapes incompatible for a matrix product
    IncompatibleDimensions {
        /// Columns of the left operand
        left_columns: usize,
        /// Rows of the right operand
        right_rows: usize,
    },
    /// Bandwidth of a banded matrix must be odd
    InvalidBandwidth {
        /// The rejected bandwidth
        bandwidth: usize,
    },
    /// Value outside the representable range of a backing buffer
    ValueOutOfRange {
        /// The rejected value
        value: f32,
        /// Smallest representable value
        min: f32,
        /// Largest representable value
        max: f32,
    },
    /// Bulk operand length does not match the matrix extent
    LengthMismatch {
        /// Expected element count
        expected: usize,
        /// Actual element count
        actual: usize,
    },
    /// Operation is structurally inapplicable to this matrix kind
    Unsupported(&'static str),
}

impl core::fmt::Display for MatrixError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MatrixError::OutOfBounds {
                row,
                column,
                rows,
                columns,
            } => write!(
                f,
                "coordinate ({row}, {column}) outside matrix extent {rows}x{columns}"
            ),
            MatrixError::IndexOutOfBounds { index, size } => {
                write!(f, "linear index {index} outside buffer of size {size}")
            }
            MatrixError::IncompatibleDimensions {
                left_columns,
                right_rows,
            } => write!(
                f,
                "product requires left columns ({left_columns}) to equal right rows ({right_rows})"
            ),
            MatrixError::InvalidBandwidth { bandwidth } => {
                write!(f, "bandwidth {bandwidth} is not odd")
            }
            MatrixError::ValueOutOfRange { value, min, max } => {
                write!(f, "value {value} outside representable range [{min}, {max}]")
            }
            MatrixError::LengthMismatch { expected, actual } => {
                write!(f, "expected {expected} elements, got {actual}")
            }
            MatrixError::Unsupported(what) => write!(f, "unsupported operation: {what}"),
        }
    }
}

/// Result type for matrix operations
pub type Result<T> = core::result::Result<T, MatrixError>;
