//! Backing-buffer implementations
//!
//! Five linear storage strategies behind the
//! [`BackingBuffer`](sigmat_core::BackingBuffer) contract: exact dense
//! floats (heap or native memory), rounded integers, signed and unsigned
//! 8-bit quantization, and a hash map over linear indices for sparse data.
//! The coordinate-to-index mapping feeding a buffer belongs to the matrix
//! that owns it; buffers only ever see linear indices.

pub mod byte;
pub mod float;
pub mod int;
pub mod sparse;

pub use byte::{SignedByteBuffer, UnsignedByteBuffer};
pub use float::FloatBuffer;
pub use int::IntBuffer;
pub use sparse::SparseBuffer;
