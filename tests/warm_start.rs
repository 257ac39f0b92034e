#![allow(non_snake_case)]
use graphform::{algebra::*, prox::*, solver::*};

fn lasso_problem() -> (LinearOperator<f64>, Vec<ProxFn<f64>>, Vec<ProxFn<f64>>) {
    let A = DenseMatrix::new(
        4,
        3,
        vec![1., 0.5, 0., 0., 2., 0.3, 1., 0., 1., 0.2, 0.1, 2.],
        MatrixLayout::RowMajor,
    )
    .unwrap()
    .into();
    let b = [1., -2., 0.5, 3.];
    let f = b
        .iter()
        .map(|&bi| ProxFn::new(Kernel::Square).with_offset(bi))
        .collect();
    let g = vec![ProxFn::new(Kernel::Abs).with_weight(0.1); 3];
    (A, f, g)
}

#[test]
fn test_warm_start_resolve_is_instant() {
    let (A, f, g) = lasso_problem();
    let settings = SettingsBuilder::default().warm_start(true).build().unwrap();
    let mut solver = Solver::new(&A, &f, &g, settings).unwrap();

    solver.solve();
    assert!(solver.solution.status.is_solved());
    let first = solver.solution.clone();
    assert!(first.iterations > 1);

    // re-solving from the converged iterate terminates immediately
    solver.solve();
    assert!(solver.solution.status.is_solved());
    assert_eq!(solver.solution.iterations, 1);
    // the single extra step stays within the convergence tolerance
    assert!(solver.solution.x.norm_inf_diff(&first.x) < 5e-2);
}

#[test]
fn test_cold_start_repeats_iteration_count() {
    let (A, f, g) = lasso_problem();
    let mut solver = Solver::new(&A, &f, &g, Settings::default()).unwrap();

    solver.solve();
    let first_iters = solver.solution.iterations;
    assert!(solver.solution.status.is_solved());

    // warm_start defaults to false, so the second solve repeats the
    // full iteration from zero
    solver.solve();
    assert_eq!(solver.solution.iterations, first_iters);
}

#[test]
fn test_bounded_iterations_well_conditioned() {
    let (A, f, g) = lasso_problem();
    let mut solver = Solver::new(&A, &f, &g, Settings::default()).unwrap();
    solver.solve();

    assert!(solver.solution.status.is_solved());
    assert!(
        solver.solution.iterations < 500,
        "took {} iterations",
        solver.solution.iterations
    );
}

#[test]
fn test_explicit_factor_lifecycle() {
    let (A, f, g) = lasso_problem();
    let mut solver = Solver::new(&A, &f, &g, Settings::default()).unwrap();

    solver.allocate_factors().unwrap();
    solver.solve();
    assert!(solver.solution.status.is_solved());
    let x1 = solver.solution.x.clone();

    // releasing and re-solving reallocates lazily
    solver.release_factors();
    solver.solve();
    assert!(solver.solution.status.is_solved());
    assert!(solver.solution.x.norm_inf_diff(&x1) < 1e-10);
}
