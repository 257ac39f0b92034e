use crate::algebra::*;
use crate::solver::Settings;

/// Diagonal scalings produced by Ruiz-style equilibration of the
/// internal operator copy, so the iteration sees `E·A·D` with balanced
/// row and column norms.  `d` applies to columns (length n) and `e` to
/// rows (length m); the inverses are kept so solution unscaling is a
/// single hadamard pass.
#[derive(Debug, Clone)]
pub struct EquilibrationData<T> {
    pub d: Vec<T>,
    pub dinv: Vec<T>,
    pub e: Vec<T>,
    pub einv: Vec<T>,
}

impl<T: FloatT> EquilibrationData<T> {
    /// Identity scaling for an `m × n` operator.
    pub fn new(m: usize, n: usize) -> Self {
        Self {
            d: vec![T::one(); n],
            dinv: vec![T::one(); n],
            e: vec![T::one(); m],
            einv: vec![T::one(); m],
        }
    }
}

/// Scale the operator in place by a bounded number of alternating
/// row/column normalization passes, accumulating the applied scalings.
/// Deterministic for fixed input and settings.
pub(crate) fn equilibrate<T: FloatT>(
    A: &mut LinearOperator<T>,
    eq: &mut EquilibrationData<T>,
    settings: &Settings<T>,
) {
    let (m, n) = (A.nrows(), A.ncols());
    let mut dwork = vec![T::zero(); n];
    let mut ework = vec![T::zero(); m];

    for _ in 0..settings.equilibrate_max_iter {
        A.col_norms(&mut dwork);
        A.row_norms(&mut ework);

        let bound = |x| limit_scaling(x, settings);
        dwork.scalarop(bound).rsqrt();
        ework.scalarop(bound).rsqrt();

        A.rscale(&dwork);
        A.lscale(&ework);

        eq.d.hadamard(&dwork);
        eq.e.hadamard(&ework);
    }

    eq.dinv.scalarop_from(T::recip, &eq.d);
    eq.einv.scalarop_from(T::recip, &eq.e);
}

// Norms are clipped into the allowed scaling range before inversion,
// with exact zeros (empty rows or columns) left unscaled.
fn limit_scaling<T: FloatT>(s: T, settings: &Settings<T>) -> T {
    if s == T::zero() {
        T::one()
    } else {
        T::min(
            T::max(s, settings.equilibrate_min_scaling),
            settings.equilibrate_max_scaling,
        )
    }
}
