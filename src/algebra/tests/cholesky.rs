#![allow(non_snake_case)]
use crate::algebra::*;

#[test]
fn test_cholesky_solve() {
    // A = [4 2; 2 3], spd
    let A = DenseMatrix::new(2, 2, vec![4., 2., 2., 3.], MatrixLayout::ColMajor).unwrap();
    let chol = CholeskyFactor::new(&A).unwrap();

    // solve A x = [8; 7]  =>  x = [1.25; 1.5]
    let mut b: Vec<f64> = vec![8., 7.];
    chol.solve(&mut b);
    assert!((b[0] - 1.25).abs() < 1e-14);
    assert!((b[1] - 1.5).abs() < 1e-14);
}

#[test]
fn test_cholesky_refactor() {
    let A = DenseMatrix::identity(3);
    let mut chol = CholeskyFactor::new(&A).unwrap();

    let mut B = DenseMatrix::identity(3);
    B.data.scale(4.);
    chol.refactor(&B).unwrap();

    let mut b = vec![8., 4., 2.];
    chol.solve(&mut b);
    assert_eq!(b, vec![2., 1., 0.5]);
}

#[test]
fn test_cholesky_not_positive_definite() {
    let A = DenseMatrix::new(2, 2, vec![1., 2., 2., 1.], MatrixLayout::ColMajor).unwrap();
    assert!(matches!(
        CholeskyFactor::new(&A),
        Err(FactorizationError::NotPositiveDefinite(1))
    ));
}

#[test]
fn test_cholesky_dimension_mismatch() {
    let A: DenseMatrix<f64> = DenseMatrix::identity(2);
    let mut chol = CholeskyFactor::new(&A).unwrap();
    let B = DenseMatrix::identity(3);
    assert!(matches!(
        chol.refactor(&B),
        Err(FactorizationError::IncompatibleDimension)
    ));
}
