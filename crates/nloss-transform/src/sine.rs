//! Discrete sine transforms (DST-II and its DST-III inverse)
//!
//! Both directions use the half-sample basis `sin(π(n+0.5)(k+1)/N)`.
//! The last coefficient enters the inverse with weight 1/2, mirroring the
//! DC term of the cosine pair, which makes `idst2(dst2(x)) == x`.
//! The basis is real, so real and imaginary parts are transformed alike.

use std::f64::consts::PI;

use nloss_core::Sample;
use num_traits::Zero;

#[inline]
fn basis(n: usize, k: usize, len: usize) -> f64 {
    (PI * (n as f64 + 0.5) * (k + 1) as f64 / len as f64).sin()
}

/// Type-II DST: `Y[k] = Σ a[n]·sin(π(n+0.5)(k+1)/N)`
pub fn dst2(input: &[Sample]) -> Vec<Sample> {
    let len = input.len();
    (0..len)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .fold(Sample::zero(), |acc, (n, x)| acc + *x * basis(n, k, len))
        })
        .collect()
}

/// Type-III DST scaled as the exact inverse of [`dst2`]:
/// `y[n] = (2/N)·(Σ_{k<N-1} a[k]·sin(π(n+0.5)(k+1)/N) + a[N-1]·(-1)^n/2)`
pub fn idst2(input: &[Sample]) -> Vec<Sample> {
    let len = input.len();
    (0..len)
        .map(|n| {
            let sum = input
                .iter()
                .enumerate()
                .fold(Sample::zero(), |acc, (k, x)| {
                    let weight = if k + 1 == len { 0.5 } else { 1.0 };
                    acc + *x * (weight * basis(n, k, len))
                });
            sum * (2.0 / len as f64)
        })
        .collect()
}
