//! Abstract interfaces for the matrix capability layer
//!
//! This module defines the trait abstractions every storage strategy and
//! composition view implements. Traits are pure interfaces - no storage.

pub mod buffer;
pub mod matrix;

pub use buffer::BackingBuffer;
pub use matrix::{Matrix, MutableMatrix};
