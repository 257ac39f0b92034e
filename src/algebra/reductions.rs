use super::FloatT;

// Elementwise passes and their associated reductions (sum, max) are the
// data parallel core of the solver: every index is independent, and the
// only cross-index interaction is a final associative-commutative
// combine.  They are expressed here as explicit primitives so that the
// serial and multithreaded builds share one call site and produce the
// same results to within floating point tolerance.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Writes `out[i] = f(i)` for every index of `out`.
pub fn map_indexed<T, F>(out: &mut [T], f: F)
where
    T: FloatT,
    F: Fn(usize) -> T + Sync + Send,
{
    cfg_if::cfg_if! {
        if #[cfg(feature = "parallel")] {
            out.par_iter_mut().enumerate().for_each(|(i, x)| *x = f(i));
        } else {
            for (i, x) in out.iter_mut().enumerate() {
                *x = f(i);
            }
        }
    }
}

/// Sum of `f(i)` over `0..n`.
pub fn reduce_sum<T, F>(n: usize, f: F) -> T
where
    T: FloatT,
    F: Fn(usize) -> T + Sync + Send,
{
    cfg_if::cfg_if! {
        if #[cfg(feature = "parallel")] {
            (0..n).into_par_iter().map(f).sum()
        } else {
            accumulate_pairwise(0..n, f)
        }
    }
}

/// Maximum of `f(i)` over `0..n`, or zero when `n == 0`.
pub fn reduce_max<T, F>(n: usize, f: F) -> T
where
    T: FloatT,
    F: Fn(usize) -> T + Sync + Send,
{
    cfg_if::cfg_if! {
        if #[cfg(feature = "parallel")] {
            (0..n).into_par_iter().map(f).reduce(T::zero, T::max)
        } else {
            (0..n).fold(T::zero(), |acc, i| T::max(acc, f(i)))
        }
    }
}

// ---------------------------------------------------------------------
// generic pairwise accumulator utility for sums, dot products etc

pub(crate) fn accumulate_pairwise<T, I, A, F>(x: I, op: F) -> T
where
    T: FloatT,
    I: IntoIterator<Item = A> + Clone,
    I::IntoIter: ExactSizeIterator,
    F: Fn(A) -> T,
{
    const BASE_CASE_DIM: usize = 16;

    let n = x.clone().into_iter().len();
    return if n == 0 {
        T::zero()
    } else {
        accumulate_pairwise_inner(x, &op, 0, n)
    };

    fn accumulate_pairwise_inner<T, I, A, F>(x: I, op: &F, i1: usize, n: usize) -> T
    where
        T: FloatT,
        I: IntoIterator<Item = A> + Clone,
        I::IntoIter: ExactSizeIterator,
        F: Fn(A) -> T,
    {
        if n < BASE_CASE_DIM {
            x.into_iter()
                .skip(i1)
                .take(n)
                .fold(T::zero(), |acc, x| acc + op(x))
        } else {
            let n2 = n / 2;
            accumulate_pairwise_inner(x.clone(), op, i1, n2)
                + accumulate_pairwise_inner(x, op, i1 + n2, n - n2)
        }
    }
}
