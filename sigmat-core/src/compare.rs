//! Structural comparison and bounded hashing of matrices
//!
//! Equality is full elementwise comparison over the logical extent -
//! O(rows * columns) and intentionally so. The hash is the opposite
//! tradeoff: a bounded-cost digest of the shape and a diagonal prefix that
//! accepts collisions to avoid walking the whole matrix.

use crate::traits::Matrix;

/// Longest diagonal prefix folded into [`matrix_hash`]
pub const HASH_DIAGONAL_LIMIT: usize = 100;

/// Compare two matrices element by element
///
/// Equal means: same dimensions and every coordinate compares equal. The
/// zero-padding flags and physical storage strategies of the operands play
/// no part. O(rows * columns).
pub fn matrices_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Matrix + ?Sized,
    B: Matrix + ?Sized,
{
    if a.rows() != b.rows() || a.columns() != b.columns() {
        return false;
    }
    for row in 0..a.rows() {
        for column in 0..a.columns() {
            match (a.get(row, column), b.get(row, column)) {
                (Ok(left), Ok(right)) if left == right => {}
                _ => return false,
            }
        }
    }
    true
}

/// Bounded-cost hash over shape and a diagonal prefix
///
/// Folds `rows`, `columns`, and the first
/// `min(HASH_DIAGONAL_LIMIT, min(rows, columns))` diagonal values into an
/// FNV-1a digest. Matrices that are equal under [`matrices_equal`] hash
/// identically; the converse does not hold.
pub fn matrix_hash<M: Matrix + ?Sized>(matrix: &M) -> u64 {
    let mut hash = 2166136261u64; // FNV offset basis

    let mut fold = |value: u64| {
        for &byte in &value.to_le_bytes() {
            hash ^= byte as u64;
            hash = hash.wrapping_mul(16777619); // FNV prime
        }
    };

    fold(matrix.rows() as u64);
    fold(matrix.columns() as u64);

    let diagonal = matrix
        .rows()
        .min(matrix.columns())
        .min(HASH_DIAGONAL_LIMIT);
    for i in 0..diagonal {
        // In-range reads cannot fail
        fold(matrix.get(i, i).unwrap_or(0.0).to_bits() as u64);
    }

    hash
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::grid::Grid;

    #[test]
    fn test_equal_matrices() {
        let a = Grid::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Grid::zero_padded([[1.0, 2.0], [3.0, 4.0]]);

        // Padding flags do not participate in equality
        assert!(matrices_equal(&a, &b));
        assert_eq!(matrix_hash(&a), matrix_hash(&b));
    }

    #[test]
    fn test_unequal_values() {
        let a = Grid::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Grid::new([[1.0, 2.0], [3.0, 5.0]]);

        assert!(!matrices_equal(&a, &b));
    }

    #[test]
    fn test_unequal_shapes() {
        let a = Grid::new([[1.0, 2.0]]);
        let b = Grid::new([[1.0], [2.0]]);

        assert!(!matrices_equal(&a, &b));
        assert_ne!(matrix_hash(&a), matrix_hash(&b));
    }

    #[test]
    fn test_hash_sees_diagonal_changes() {
        let a = Grid::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = Grid::new([[1.0, 2.0], [3.0, 9.0]]);

        assert_ne!(matrix_hash(&a), matrix_hash(&b));
    }
}
