//! sigmat - Matrix Storage for DSP Pipelines
//!
//! This crate provides the concrete storage strategies behind the
//! `sigmat-core` matrix contracts: five backing buffers and six storage
//! matrices unified behind one logical `(row, column)` interface.
//!
//! ## Architecture
//!
//! The workspace follows a clean contract/implementation separation:
//!
//! - **sigmat-core**: traits, validation, lazy algebra views (no storage)
//! - **sigmat**: backing buffers and storage matrices
//!
//! ## Quick Start
//!
//! ```
//! use sigmat::{FullMatrix, Matrix, MutableMatrix};
//!
//! let mut a = FullMatrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();
//! a.set(0, 0, 5.0).unwrap();
//!
//! // Algebra builders return lazy views over their operands
//! let b = FullMatrix::from_slice(2, 2, &[1.0, 0.0, 0.0, 1.0]).unwrap();
//! let product = (&a).multiply(&b).unwrap();
//! assert_eq!(product.get(0, 0), Ok(5.0));
//! assert_eq!((&a).transpose().get(0, 1), Ok(3.0));
//! ```
//!
//! ## Storage strategies
//!
//! - [`FullMatrix`]: dense row-major over any [`BackingBuffer`] - exact
//!   floats ([`FloatBuffer`], optionally in native memory), rounded
//!   integers ([`IntBuffer`]), or quantized bytes ([`SignedByteBuffer`],
//!   [`UnsignedByteBuffer`])
//! - [`SymmetricMatrix`]: upper-triangle compaction with mirrored access
//! - [`SymmetricBandMatrix`]: diagonal-band compaction with a configurable
//!   out-of-band default
//! - [`SparseMatrix`], [`SparseRowMatrix`], [`SparseColumnMatrix`]:
//!   hash-based storage where absence means zero and reductions iterate
//!   stored entries only
//!
//! All of this is single-threaded, synchronous compute; callers serialize
//! any cross-thread use themselves.

// Re-export the core contracts and helpers
pub use sigmat_core::{
    matrices_equal, matrix_hash, BackingBuffer, DifferenceMatrix, EnlargedMatrix, HadamardMatrix,
    Matrix, MatrixError, MutableMatrix, ProductMatrix, Result, ScaledMatrix, SumMatrix,
    TranslatedMatrix, TransposedMatrix,
};

// Implementation modules
pub mod buffers;
pub mod dense;
pub mod sparse;
pub mod symmetric;

// Public exports
pub use buffers::{FloatBuffer, IntBuffer, SignedByteBuffer, SparseBuffer, UnsignedByteBuffer};
pub use dense::FullMatrix;
pub use sparse::{SparseColumnMatrix, SparseMatrix, SparseRowMatrix};
pub use symmetric::{SymmetricBandMatrix, SymmetricMatrix};
