#![allow(non_snake_case)]
use graphform::{algebra::*, prox::*, solver::*};

fn tight_settings() -> Settings<f64> {
    SettingsBuilder::default()
        .tol_abs(1e-8)
        .tol_rel(1e-7)
        .build()
        .unwrap()
}

#[test]
fn test_least_squares() {
    // minimize ½‖Ax − b‖², solution (AᵀA)⁻¹Aᵀb = (13/9, 10/9)
    let A: LinearOperator<f64> = DenseMatrix::new(
        3,
        2,
        vec![1., 0., 0., 2., 1., 1.],
        MatrixLayout::RowMajor,
    )
    .unwrap()
    .into();
    let b = [1., 2., 3.];
    let f: Vec<_> = b
        .iter()
        .map(|&bi| ProxFn::new(Kernel::Square).with_offset(bi))
        .collect();
    let g = vec![ProxFn::new(Kernel::Zero); 2];

    let mut solver = Solver::new(&A, &f, &g, tight_settings()).unwrap();
    solver.solve();

    assert!(solver.solution.status.is_solved());
    let xstar = [13. / 9., 10. / 9.];
    assert!(solver.solution.x.norm_inf_diff(&xstar) < 1e-5);

    // y reported as A·x½
    let mut ax = vec![0.; 3];
    A.gemv(MatrixShape::N, &mut ax, &solver.solution.x, 1., 0.);
    assert!(ax.norm_inf_diff(&solver.solution.y) < 1e-5);

    // objective = ½‖Ax* − b‖²
    ax.axpby(-1., &b, 1.);
    assert!((solver.solution.obj_val - 0.5 * ax.sumsq()).abs() < 1e-5);
}

#[test]
fn test_soft_threshold_scenario() {
    // minimize ½‖x − v‖² + 0.5‖x‖₁ over the identity; the solution is
    // the soft threshold of v at 0.5
    let A: LinearOperator<f64> = DenseMatrix::identity(3).into();
    let v = [1., -2., 3.];
    let f: Vec<_> = v
        .iter()
        .map(|&vi| ProxFn::new(Kernel::Square).with_offset(vi))
        .collect();
    let g = vec![ProxFn::new(Kernel::Abs).with_weight(0.5); 3];

    let mut solver = Solver::new(&A, &f, &g, tight_settings()).unwrap();
    solver.solve();

    assert!(solver.solution.status.is_solved());
    assert!(solver.solution.x.norm_inf_diff(&[0.5, -1.5, 2.5]) < 1e-5);
}

#[test]
fn test_empty_operator_rows() {
    // m = 0 collapses to minimize g(x); the first iterate is already
    // optimal at x = prox_g(0)
    let A: LinearOperator<f64> =
        DenseMatrix::new(0, 2, vec![], MatrixLayout::ColMajor).unwrap().into();
    let f = vec![];
    let g = vec![ProxFn::new(Kernel::Square).with_offset(1.); 2];

    let mut solver = Solver::new(&A, &f, &g, Settings::default()).unwrap();
    solver.solve();

    assert!(solver.solution.status.is_solved());
    assert_eq!(solver.solution.iterations, 1);
    // argmin ½(x−1)² + ½x² = ½
    assert!(solver.solution.x.norm_inf_diff(&[0.5, 0.5]) < 1e-12);
}

#[test]
fn test_box_constrained_least_squares() {
    // the unconstrained solution (13/9, 10/9) exceeds the box and the
    // objective gradient still points outward at (1, 1), so both
    // coordinates pin at the upper bound
    let A: LinearOperator<f64> = DenseMatrix::new(
        3,
        2,
        vec![1., 0., 0., 2., 1., 1.],
        MatrixLayout::RowMajor,
    )
    .unwrap()
    .into();
    let b = [1., 2., 3.];
    let f: Vec<_> = b
        .iter()
        .map(|&bi| ProxFn::new(Kernel::Square).with_offset(bi))
        .collect();
    let g = vec![ProxFn::new(Kernel::IndBox).with_bounds(0., 1.); 2];

    let mut solver = Solver::new(&A, &f, &g, tight_settings()).unwrap();
    solver.solve();

    assert!(solver.solution.status.is_solved());
    assert!(solver.solution.x.norm_inf_diff(&[1., 1.]) < 1e-5);
}

#[test]
fn test_sparse_matches_dense() {
    // the same lasso through dense and CSC storage
    let dense: LinearOperator<f64> = DenseMatrix::new(
        2,
        3,
        vec![1., 2., 0., 0., 3., 4.],
        MatrixLayout::RowMajor,
    )
    .unwrap()
    .into();
    let sparse: LinearOperator<f64> = CompressedMatrix::new(
        2,
        3,
        vec![0, 1, 3, 4],
        vec![0, 0, 1, 1],
        vec![1., 2., 3., 4.],
        CompressedFormat::Csc,
    )
    .unwrap()
    .into();

    let f = vec![
        ProxFn::new(Kernel::Square).with_offset(1.),
        ProxFn::new(Kernel::Square).with_offset(-2.),
    ];
    let g = vec![ProxFn::new(Kernel::Abs).with_weight(0.2); 3];

    let mut s1 = Solver::new(&dense, &f, &g, tight_settings()).unwrap();
    let mut s2 = Solver::new(&sparse, &f, &g, tight_settings()).unwrap();
    s1.solve();
    s2.solve();

    assert!(s1.solution.status.is_solved());
    assert!(s2.solution.status.is_solved());
    assert!(s1.solution.x.norm_inf_diff(&s2.solution.x) < 1e-6);
}

#[test]
fn test_iteration_cap() {
    let A: LinearOperator<f64> = DenseMatrix::new(
        3,
        2,
        vec![1., 0., 0., 2., 1., 1.],
        MatrixLayout::RowMajor,
    )
    .unwrap()
    .into();
    let f = vec![ProxFn::new(Kernel::Square).with_offset(1.); 3];
    let g = vec![ProxFn::new(Kernel::Abs); 2];

    let settings = SettingsBuilder::default()
        .max_iter(1)
        .tol_abs(1e-14)
        .tol_rel(1e-14)
        .build()
        .unwrap();
    let mut solver = Solver::new(&A, &f, &g, settings).unwrap();
    solver.solve();

    // not converged, but the best iterate is still reported in full
    assert_eq!(solver.solution.status, SolverStatus::MaxIterations);
    assert_eq!(solver.solution.iterations, 1);
    assert!(solver.solution.x.is_finite());
    assert!(solver.solution.y.is_finite());
}

#[test]
fn test_single_precision() {
    let A: LinearOperator<f32> = DenseMatrix::identity(2).into();
    let f = vec![ProxFn::new(Kernel::Square).with_offset(2.0f32); 2];
    let g = vec![ProxFn::new(Kernel::Zero); 2];

    let mut solver = Solver::new(&A, &f, &g, Settings::<f32>::default()).unwrap();
    solver.solve();

    assert!(solver.solution.status.is_solved());
    assert!(solver.solution.x.norm_inf_diff(&[2.0f32, 2.0]) < 1e-2);
}

#[test]
fn test_numerical_failure_status() {
    // finite data whose gram matrix overflows; with equilibration off
    // the factorization breaks down and the solve terminates cleanly
    let A: LinearOperator<f64> = DenseMatrix::new(
        2,
        2,
        vec![1e200, 0., 0., 1e200],
        MatrixLayout::RowMajor,
    )
    .unwrap()
    .into();
    let f = vec![ProxFn::new(Kernel::Square); 2];
    let g = vec![ProxFn::new(Kernel::Zero); 2];

    let settings = SettingsBuilder::default()
        .equilibrate_enable(false)
        .build()
        .unwrap();
    let mut solver = Solver::new(&A, &f, &g, settings).unwrap();
    solver.solve();

    assert_eq!(solver.solution.status, SolverStatus::NumericalError);
    assert!(!solver.solution.status.is_solved());
    // the solution vectors are still written, and finite
    assert_eq!(solver.solution.x.len(), 2);
    assert_eq!(solver.solution.y.len(), 2);
    assert!(solver.solution.x.is_finite());
    assert!(solver.solution.y.is_finite());
}
