//! Discrete cosine transforms (DCT-II and its DCT-III inverse)
//!
//! Only the real part of the input is used and the output is real-valued.

use std::f64::consts::PI;

use nloss_core::Sample;

#[inline]
fn basis(n: usize, k: usize, len: usize) -> f64 {
    (PI * (n as f64 + 0.5) * k as f64 / len as f64).cos()
}

/// Type-II DCT: `Y[k] = Σ a[n]·cos(π(n+0.5)k/N)`
pub fn dct2(input: &[Sample]) -> Vec<Sample> {
    let len = input.len();
    (0..len)
        .map(|k| {
            let sum: f64 = input
                .iter()
                .enumerate()
                .map(|(n, x)| x.re * basis(n, k, len))
                .sum();
            Sample::new(sum, 0.0)
        })
        .collect()
}

/// Type-III DCT scaled as the exact inverse of [`dct2`]:
/// `y[n] = (2/N)·(a[0]/2 + Σ_{k≥1} a[k]·cos(π(n+0.5)k/N))`
pub fn idct2(input: &[Sample]) -> Vec<Sample> {
    let len = input.len();
    let Some(first) = input.first() else {
        return Vec::new();
    };

    (0..len)
        .map(|n| {
            let tail: f64 = input
                .iter()
                .enumerate()
                .skip(1)
                .map(|(k, x)| x.re * basis(n, k, len))
                .sum();
            Sample::new(2.0 / len as f64 * (first.re / 2.0 + tail), 0.0)
        })
        .collect()
}
