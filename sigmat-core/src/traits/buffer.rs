//! Backing-buffer abstraction for concrete storage matrices
//!
//! A backing buffer is a linear, index-addressed store of real values. The
//! coordinate-to-index mapping that feeds it is the private invariant of
//! the storage matrix that owns the buffer, never of the buffer itself.

use crate::error::Result;

/// Trait for linear stores underlying concrete storage matrices
///
/// Lifecycle is allocate-once-then-use: [`allocate`](Self::allocate) must be
/// called exactly once before [`get`](Self::get) or [`set`](Self::set).
/// Using an unallocated buffer, or allocating twice, is a programming error;
/// implementations fail fast on it in debug builds via `debug_assert!`.
///
/// Buffers are exclusively owned by the matrix that allocated them. Deep
/// copies go through `Clone` and are O(size); cloning a buffer whose owner
/// is being mutated concurrently is undefined, as is every concurrent use
/// in this single-threaded layer.
pub trait BackingBuffer {
    /// Allocate storage for `size` values, all set to the default
    fn allocate(&mut self, size: usize);

    /// Whether [`allocate`](Self::allocate) has been called
    fn is_allocated(&self) -> bool;

    /// Number of addressable values
    fn len(&self) -> usize;

    /// Whether the buffer holds no addressable values
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read the value at a linear index
    ///
    /// The index must be in `[0, len)`; out-of-range access panics like
    /// slice indexing does.
    fn get(&self, index: usize) -> f32;

    /// Store a value at a linear index
    ///
    /// Fails with [`ValueOutOfRange`](crate::MatrixError::ValueOutOfRange)
    /// when the buffer cannot represent the value.
    fn set(&mut self, index: usize, value: f32) -> Result<()>;
}
