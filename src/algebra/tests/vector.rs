use crate::algebra::*;

#[test]
fn test_norms() {
    let x = [-3., 4., 0.];
    assert_eq!(x.norm(), 5.);
    assert_eq!(x.norm_inf(), 4.);
    assert_eq!(x.norm_one(), 7.);
    assert_eq!(x.sumsq(), 25.);
}

#[test]
fn test_norm_inf_diff() {
    let x = [1., 2., 3.];
    let y = [1., 0., 7.];
    assert_eq!(x.norm_inf_diff(&y), 4.);
}

#[test]
fn test_norm_scaled() {
    let x = [1., 2.];
    let v = [2., 0.5];
    // ||(2,1)|| = sqrt(5)
    assert!((x.norm_scaled(&v) - 5f64.sqrt()).abs() < 1e-15);
}

#[test]
fn test_dot_pairwise_matches_naive() {
    let n = 257;
    let x: Vec<f64> = (0..n).map(|i| (i as f64).sin()).collect();
    let y: Vec<f64> = (0..n).map(|i| (i as f64).cos()).collect();

    let naive: f64 = std::iter::zip(&x, &y).map(|(a, b)| a * b).sum();
    assert!((x.dot(&y) - naive).abs() < 1e-12);
}

#[test]
fn test_axpby() {
    let mut y = vec![1., 1., 1.];
    let x = [1., 2., 3.];
    y.axpby(2., &x, -1.);
    assert_eq!(y, vec![1., 3., 5.]);

    let mut w = vec![0.; 3];
    w.waxpby(1., &x, 2., &[1., 1., 1.]);
    assert_eq!(w, vec![3., 4., 5.]);
}

#[test]
fn test_scalar_ops() {
    let mut x = vec![4., 16.];
    x.rsqrt();
    assert_eq!(x, vec![0.5, 0.25]);
    x.recip();
    assert_eq!(x, vec![2., 4.]);
    x.hadamard(&[3., 0.5]);
    assert_eq!(x, vec![6., 2.]);
}

#[test]
fn test_is_finite() {
    assert!([1., 2.].is_finite());
    assert!(![1., f64::NAN].is_finite());
    assert!(![1., f64::INFINITY].is_finite());
}

#[test]
fn test_reductions() {
    let v: [f64; 3] = [1., -5., 3.];
    let sum: f64 = reduce_sum(v.len(), |i| v[i].abs());
    let max: f64 = reduce_max(v.len(), |i| v[i].abs());
    assert_eq!(sum, 9.);
    assert_eq!(max, 5.);

    // empty reductions are well defined
    assert_eq!(reduce_sum(0, |_| 1.0f64), 0.);
    assert_eq!(reduce_max(0, |_| 1.0f64), 0.);
}

#[test]
fn test_map_indexed() {
    let mut out = vec![0.; 4];
    map_indexed(&mut out, |i| (i * i) as f64);
    assert_eq!(out, vec![0., 1., 4., 9.]);
}
