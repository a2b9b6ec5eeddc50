//! End-to-end behavior of storage matrices combined with algebra views

use std::cell::RefCell;

use sigmat::{
    matrices_equal, matrix_hash, BackingBuffer, FullMatrix, Matrix, MatrixError, MutableMatrix,
    SignedByteBuffer, SparseMatrix, SparseRowMatrix, SymmetricBandMatrix, SymmetricMatrix,
};

#[test]
fn set_then_get_returns_value_on_every_storage() {
    let mut dense = FullMatrix::new(3, 3);
    dense.set(1, 2, 4.25).unwrap();
    assert_eq!(dense.get(1, 2), Ok(4.25));

    let mut symmetric = SymmetricMatrix::new(3);
    symmetric.set(2, 0, -1.5).unwrap();
    assert_eq!(symmetric.get(2, 0), Ok(-1.5));

    let mut sparse = SparseMatrix::new(3, 3);
    sparse.set(0, 1, 2.0).unwrap();
    assert_eq!(sparse.get(0, 1), Ok(2.0));
}

#[test]
fn transpose_and_scale_scenario() {
    let matrix = FullMatrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap();

    assert_eq!((&matrix).transpose().get(0, 1), Ok(3.0));
    assert_eq!((&matrix).scale(2.0).sum(), 20.0);
}

#[test]
fn banded_matrix_scenario() {
    let mut matrix = SymmetricBandMatrix::new(5, 3).unwrap();

    matrix.set(0, 1, 7.0).unwrap();
    assert_eq!(matrix.get(1, 0), Ok(7.0));

    // Distance 4 exceeds the half-bandwidth of 1
    assert!(matches!(
        matrix.set(0, 4, 1.0),
        Err(MatrixError::OutOfBounds { .. })
    ));
    assert_eq!(matrix.get(0, 4), Ok(0.0));
}

#[test]
fn product_dimension_rules() {
    let a = FullMatrix::new(2, 3);
    let b = FullMatrix::new(3, 4);
    let c = FullMatrix::new(2, 4);

    let product = (&a).multiply(&b).unwrap();
    assert_eq!(product.dimensions(), (2, 4));

    assert_eq!(
        (&a).multiply(&c).err(),
        Some(MatrixError::IncompatibleDimensions {
            left_columns: 3,
            right_rows: 2,
        })
    );
}

#[test]
fn views_recompute_from_mutated_operands() {
    let a = RefCell::new(FullMatrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap());
    let b = FullMatrix::from_slice(2, 2, &[10.0, 10.0, 10.0, 10.0]).unwrap();

    let view = (&a).add(&b);
    assert_eq!(view.get(0, 0), Ok(11.0));
    assert_eq!(view.sum(), 50.0);

    a.borrow_mut().set(0, 0, 100.0).unwrap();
    assert_eq!(view.get(0, 0), Ok(110.0));
    assert_eq!(view.sum(), 149.0);
}

#[test]
fn product_view_tracks_operand_writes() {
    let a = RefCell::new(FullMatrix::from_slice(2, 2, &[1.0, 0.0, 0.0, 1.0]).unwrap());
    let b = FullMatrix::from_slice(2, 2, &[5.0, 6.0, 7.0, 8.0]).unwrap();

    let product = (&a).multiply(&b).unwrap();
    assert_eq!(product.get(0, 0), Ok(5.0));

    a.borrow_mut().set(0, 0, 2.0).unwrap();
    assert_eq!(product.get(0, 0), Ok(10.0));
}

#[test]
fn quantized_round_trip_tolerance() {
    let mut buffer = SignedByteBuffer::new();
    buffer.allocate(8);

    buffer.set(3, 0.5).unwrap();
    assert!((buffer.get(3) - 0.5).abs() <= 1.0 / 127.0);
}

#[test]
fn sparse_elision_is_observable() {
    let mut matrix = SparseMatrix::new(50, 50);

    matrix.set(10, 10, 1.0).unwrap();
    matrix.set(20, 20, 2.0).unwrap();
    assert_eq!(matrix.nnz(), 2);

    matrix.set(10, 10, 0.0).unwrap();
    assert_eq!(matrix.nnz(), 1);
}

#[test]
fn chained_views_compose() {
    let a = FullMatrix::from_slice(2, 3, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();

    // (A^T * A) is 3x3 and symmetric
    let transposed = (&a).transpose();
    let gram = (&transposed).multiply(&a).unwrap();
    assert_eq!(gram.dimensions(), (3, 3));
    assert_eq!(gram.get(0, 0), Ok(17.0));
    assert_eq!(gram.get(0, 1), gram.get(1, 0));

    // Difference of a view against itself vanishes
    let zero = (&gram).subtract(&gram);
    assert_eq!(zero.sum(), 0.0);
}

#[test]
fn translate_and_enlarge_reposition_blocks() {
    let mut block = FullMatrix::zero_padded(2, 2);
    block.copy_from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
    let canvas = FullMatrix::zero_padded(4, 4);

    // Move the block one row/column inward, then lay it over the canvas
    let moved = (&block).translate(1, 1);
    let composed = (&moved).enlarge(&canvas);

    assert_eq!(composed.dimensions(), (4, 4));
    assert_eq!(composed.get(0, 0), Ok(0.0));
    assert_eq!(composed.get(1, 1), Ok(1.0));
    assert_eq!(composed.get(2, 2), Ok(4.0));
    assert_eq!(composed.get(3, 3), Ok(0.0));
    assert_eq!(composed.sum(), 10.0);
}

#[test]
fn zero_padding_gates_out_of_range_reads() {
    let strict = FullMatrix::new(2, 2);
    let padded = FullMatrix::zero_padded(2, 2);

    // Both operands padded: the sum view pads too
    let padded_sum = (&padded).add(&padded);
    assert!(padded_sum.is_zero_padded());
    assert_eq!(padded_sum.get(10, 10), Ok(0.0));

    // One strict operand makes the view strict
    let mixed_sum = (&strict).add(&padded);
    assert!(!mixed_sum.is_zero_padded());
    assert!(mixed_sum.get(10, 10).is_err());
}

#[test]
fn materializing_a_view_snapshots_it() {
    let a = RefCell::new(FullMatrix::from_slice(2, 2, &[1.0, 2.0, 3.0, 4.0]).unwrap());
    let doubled = (&a).scale(2.0);

    let snapshot = FullMatrix::copy_of(&doubled).unwrap();
    assert_eq!(snapshot.get(1, 1), Ok(8.0));

    // The copy is detached from later operand writes, the view is not
    a.borrow_mut().set(1, 1, 10.0).unwrap();
    assert_eq!(snapshot.get(1, 1), Ok(8.0));
    assert_eq!(doubled.get(1, 1), Ok(20.0));
}

#[test]
fn equality_and_hashing_cross_storage() {
    let mut dense = FullMatrix::new(3, 3);
    let mut sparse = SparseRowMatrix::new(3, 3);

    dense.set(1, 1, 5.0).unwrap();
    sparse.set(1, 1, 5.0).unwrap();

    assert!(matrices_equal(&dense, &sparse));
    assert_eq!(matrix_hash(&dense), matrix_hash(&sparse));

    sparse.set(0, 2, 1.0).unwrap();
    assert!(!matrices_equal(&dense, &sparse));
}

#[test]
fn views_refuse_linear_access() {
    let a = FullMatrix::new(2, 2);
    let b = FullMatrix::new(2, 2);

    assert!(a.get_linear(0).is_ok());
    assert!(matches!(
        (&a).add(&b).get_linear(0),
        Err(MatrixError::Unsupported(_))
    ));
    assert!(matches!(
        (&a).transpose().get_linear(0),
        Err(MatrixError::Unsupported(_))
    ));
}

#[test]
fn symmetric_storage_feeds_views() {
    let mut symmetric = SymmetricMatrix::new(3);
    symmetric.set(0, 2, 4.0).unwrap();
    symmetric.set(1, 1, 2.0).unwrap();

    // Transposing a symmetric matrix changes nothing observable
    let transposed = (&symmetric).transpose();
    assert!(matrices_equal(&symmetric, &transposed));

    let doubled = (&symmetric).scale(2.0);
    assert_eq!(doubled.get(2, 0), Ok(8.0));
    assert_eq!(doubled.get(1, 1), Ok(4.0));
}

#[test]
fn hadamard_over_mixed_storage() {
    let mut sparse = SparseMatrix::zero_padded(2, 2);
    sparse.set(0, 0, 3.0).unwrap();
    sparse.set(1, 1, 2.0).unwrap();

    let dense = FullMatrix::from_slice(2, 2, &[2.0, 2.0, 2.0, 2.0]).unwrap();

    let masked = (&sparse).hadamard(&dense);
    assert_eq!(masked.get(0, 0), Ok(6.0));
    assert_eq!(masked.get(0, 1), Ok(0.0));
    assert_eq!(masked.sum(), 10.0);
}
