#![allow(non_snake_case)]
use graphform::{algebra::*, prox::*, solver::*};

// A badly row/column scaled lasso; equilibration on and off must land
// on the same (unscaled) answer.
fn scaled_problem() -> (LinearOperator<f64>, Vec<ProxFn<f64>>, Vec<ProxFn<f64>>) {
    let A = DenseMatrix::new(
        4,
        3,
        vec![
            200., 0.5, 0., //
            0., 30., 0.01, //
            1., 0., 150., //
            0.02, 5., 1.,
        ],
        MatrixLayout::RowMajor,
    )
    .unwrap()
    .into();
    let b = [1., -2., 0.5, 3.];
    let f = b
        .iter()
        .map(|&bi| ProxFn::new(Kernel::Square).with_offset(bi))
        .collect();
    let g = vec![ProxFn::new(Kernel::Abs).with_weight(0.05); 3];
    (A, f, g)
}

fn solve_with(equilibrate: bool) -> Solution<f64> {
    let (A, f, g) = scaled_problem();
    let settings = SettingsBuilder::default()
        .equilibrate_enable(equilibrate)
        .tol_abs(1e-10)
        .tol_rel(1e-9)
        .max_iter(50_000)
        .build()
        .unwrap();
    let mut solver = Solver::new(&A, &f, &g, settings).unwrap();
    solver.solve();
    assert!(solver.solution.status.is_solved());
    solver.solution.clone()
}

#[test]
fn test_equilibration_invariance() {
    let on = solve_with(true);
    let off = solve_with(false);

    assert!(
        on.x.norm_inf_diff(&off.x) < 1e-5,
        "x mismatch: {:?} vs {:?}",
        on.x,
        off.x
    );
    assert!((on.obj_val - off.obj_val).abs() < 1e-5);
}

#[test]
fn test_equilibration_helps_conditioning() {
    let on = solve_with(true);
    let off = solve_with(false);
    // not a performance guarantee, just a sanity check that the
    // scaled run is no worse by an order of magnitude
    assert!(on.iterations <= off.iterations.saturating_mul(10));
}
