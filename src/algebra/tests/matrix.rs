#![allow(non_snake_case)]
use crate::algebra::*;

// A = [1 2 0]
//     [0 3 4]
fn test_matrix_dense(layout: MatrixLayout) -> DenseMatrix<f64> {
    let data = match layout {
        MatrixLayout::RowMajor => vec![1., 2., 0., 0., 3., 4.],
        MatrixLayout::ColMajor => vec![1., 0., 2., 3., 0., 4.],
    };
    DenseMatrix::new(2, 3, data, layout).unwrap()
}

fn test_matrix_sparse(format: CompressedFormat) -> CompressedMatrix<f64> {
    match format {
        CompressedFormat::Csr => CompressedMatrix::new(
            2,
            3,
            vec![0, 2, 4],
            vec![0, 1, 1, 2],
            vec![1., 2., 3., 4.],
            format,
        )
        .unwrap(),
        CompressedFormat::Csc => CompressedMatrix::new(
            2,
            3,
            vec![0, 1, 3, 4],
            vec![0, 0, 1, 1],
            vec![1., 2., 3., 4.],
            format,
        )
        .unwrap(),
    }
}

fn all_operators() -> Vec<LinearOperator<f64>> {
    vec![
        test_matrix_dense(MatrixLayout::RowMajor).into(),
        test_matrix_dense(MatrixLayout::ColMajor).into(),
        test_matrix_sparse(CompressedFormat::Csr).into(),
        test_matrix_sparse(CompressedFormat::Csc).into(),
    ]
}

#[test]
fn test_gemv_all_representations() {
    for A in all_operators() {
        assert_eq!(A.nrows(), 2);
        assert_eq!(A.ncols(), 3);

        let x = [1., 1., 1.];
        let mut y = vec![1., 1.];
        A.gemv(MatrixShape::N, &mut y, &x, 2., 1.);
        assert_eq!(y, vec![7., 15.]);

        let yt = [1., 2.];
        let mut xt = vec![0.; 3];
        A.gemv(MatrixShape::T, &mut xt, &yt, 1., 0.);
        assert_eq!(xt, vec![1., 8., 8.]);
    }
}

#[test]
fn test_norms_all_representations() {
    for A in all_operators() {
        let mut rows = vec![0.; 2];
        let mut cols = vec![0.; 3];
        A.row_norms(&mut rows);
        A.col_norms(&mut cols);
        assert_eq!(rows, vec![2., 4.]);
        assert_eq!(cols, vec![1., 3., 4.]);
    }
}

#[test]
fn test_diagonal_scaling_all_representations() {
    for mut A in all_operators() {
        A.lscale(&[2., 3.]);
        A.rscale(&[1., 10., 100.]);

        // scaled matrix is [2 40 0; 0 90 1200]
        let x = [1., 1., 1.];
        let mut y = vec![0.; 2];
        A.gemv(MatrixShape::N, &mut y, &x, 1., 0.);
        assert_eq!(y, vec![42., 1290.]);
    }
}

#[test]
fn test_gram_all_representations() {
    // AtA = [1 2 0; 2 13 12; 0 12 16]
    // AAt = [5 6; 6 25]
    for A in all_operators() {
        let AtA = A.gram(GramSide::Normal);
        let AAt = A.gram(GramSide::Transpose);

        let expected_n = [[1., 2., 0.], [2., 13., 12.], [0., 12., 16.]];
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(AtA.get(i, j), expected_n[i][j]);
            }
        }

        let expected_t = [[5., 6.], [6., 25.]];
        for i in 0..2 {
            for j in 0..2 {
                assert_eq!(AAt.get(i, j), expected_t[i][j]);
            }
        }
    }
}

#[test]
fn test_sparse_format_validation() {
    // bad pointer start
    assert!(matches!(
        CompressedMatrix::new(
            2,
            2,
            vec![1, 1, 2],
            vec![0, 1],
            vec![1., 2.],
            CompressedFormat::Csr
        ),
        Err(MatrixFormatError::BadPointers)
    ));

    // non-monotonic pointers
    assert!(matches!(
        CompressedMatrix::new(
            2,
            2,
            vec![0, 2, 1],
            vec![0, 1],
            vec![1., 2.],
            CompressedFormat::Csr
        ),
        Err(MatrixFormatError::BadPointers)
    ));

    // out of range column index
    assert!(matches!(
        CompressedMatrix::new(
            2,
            2,
            vec![0, 1, 2],
            vec![0, 2],
            vec![1., 2.],
            CompressedFormat::Csr
        ),
        Err(MatrixFormatError::BadIndex)
    ));

    // value/index length mismatch
    assert!(matches!(
        CompressedMatrix::new(
            2,
            2,
            vec![0, 1, 2],
            vec![0, 1],
            vec![1.],
            CompressedFormat::Csr
        ),
        Err(MatrixFormatError::IncompatibleDimension)
    ));

    // dense data length mismatch
    assert!(matches!(
        DenseMatrix::new(2, 2, vec![1., 2., 3.], MatrixLayout::RowMajor),
        Err(MatrixFormatError::IncompatibleDimension)
    ));
}

#[test]
fn test_unsorted_indices_within_row_are_accepted() {
    // same matrix as test_matrix_sparse but with row entries reversed
    let A = CompressedMatrix::new(
        2,
        3,
        vec![0, 2, 4],
        vec![1, 0, 2, 1],
        vec![2., 1., 4., 3.],
        CompressedFormat::Csr,
    )
    .unwrap();

    let x = [1., 1., 1.];
    let mut y = vec![0.; 2];
    A.gemv_shaped(MatrixShape::N, &mut y, &x, 1., 0.);
    assert_eq!(y, vec![3., 7.]);
}
