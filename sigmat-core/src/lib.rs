#![no_std]

//! sigmat-core - Matrix Capability Contracts and Lazy Algebra
//!
//! This crate provides the logical matrix contracts and buffer-less
//! algebra views underlying the sigmat storage crate:
//!
//! - [`Matrix`] / [`MutableMatrix`] - the read and write capabilities over
//!   logical `(row, column)` coordinates, with bounded or zero-padded
//!   access
//! - [`BackingBuffer`] - the allocate-once linear store concrete storage
//!   matrices are built on
//! - composition views ([`view`]) - lazy sums, differences, products,
//!   scalings, transposes, translations, and enlargements computed on
//!   demand from operand state, never materialized
//! - validation ([`validation`]) and structural comparison ([`compare`])
//!   helpers shared by every implementation
//!
//! Everything here is single-threaded, synchronous compute with no
//! locking: views recompute from current operand state on every access, so
//! reads are consistent with the latest completed writes, and callers
//! serialize any cross-thread use themselves.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod compare;
pub mod error;
pub mod traits;
pub mod validation;
pub mod view;

pub use compare::{matrices_equal, matrix_hash};
pub use error::{MatrixError, Result};
pub use traits::{BackingBuffer, Matrix, MutableMatrix};
pub use view::{
    DifferenceMatrix, EnlargedMatrix, HadamardMatrix, ProductMatrix, ScaledMatrix, SumMatrix,
    TranslatedMatrix, TransposedMatrix,
};
