//! Discrete Fourier transforms
//!
//! `fft`/`ifft` use an iterative radix-2 Cooley–Tukey butterfly. Inputs whose
//! length is not a power of two are zero-padded to the next power of two and
//! the result is truncated back to the input length, so the round trip is
//! exact only for power-of-two lengths. `dft`/`idft` are the direct O(N²)
//! summations and are exact inverses for every length.

use std::f64::consts::PI;

use nloss_core::Sample;
use num_traits::{One, Zero};

/// Copies `input` into a new vector of length `len`, filling the tail with zeros
pub(crate) fn zero_padded(input: &[Sample], len: usize) -> Vec<Sample> {
    let mut padded = Vec::with_capacity(len.max(input.len()));
    padded.extend_from_slice(input);
    padded.resize(len, Sample::zero());
    padded
}

/// Reorders a power-of-two length buffer into bit-reversed index order
fn bit_reverse_permute(a: &mut [Sample]) {
    let n = a.len();
    let mut j = 0usize;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;
        if i < j {
            a.swap(i, j);
        }
    }
}

/// Fast Fourier transform with power-of-two zero padding.
///
/// Lengths 0 and 1 are returned unchanged.
pub fn fft(input: &[Sample]) -> Vec<Sample> {
    let n = input.len();
    if n <= 1 {
        return input.to_vec();
    }

    let m = n.next_power_of_two();
    let mut a = zero_padded(input, m);
    bit_reverse_permute(&mut a);

    let mut len = 2;
    while len <= m {
        let wlen = Sample::from_polar(1.0, -2.0 * PI / len as f64);
        for chunk in a.chunks_exact_mut(len) {
            let (lo, hi) = chunk.split_at_mut(len / 2);
            let mut w = Sample::one();
            for (u, v) in lo.iter_mut().zip(hi.iter_mut()) {
                let even = *u;
                let odd = *v * w;
                *u = even + odd;
                *v = even - odd;
                w *= wlen;
            }
        }
        len <<= 1;
    }

    a.truncate(n);
    a
}

/// Inverse of [`fft`], normalized by the unpadded input length
pub fn ifft(input: &[Sample]) -> Vec<Sample> {
    let n = input.len();
    let conjugated: Vec<Sample> = input.iter().map(Sample::conj).collect();
    fft(&conjugated)
        .into_iter()
        .map(|x| x.conj() / n as f64)
        .collect()
}

/// Direct discrete Fourier transform, `X[k] = Σ a[n]·e^(−2πikn/N)`
pub fn dft(input: &[Sample]) -> Vec<Sample> {
    let n = input.len();
    (0..n)
        .map(|k| {
            input
                .iter()
                .enumerate()
                .fold(Sample::zero(), |acc, (j, &x)| {
                    // k*j is reduced mod N to keep the angle small
                    let angle = -2.0 * PI * ((k * j) % n) as f64 / n as f64;
                    acc + x * Sample::from_polar(1.0, angle)
                })
        })
        .collect()
}

/// Inverse of [`dft`]
pub fn idft(input: &[Sample]) -> Vec<Sample> {
    let n = input.len();
    let conjugated: Vec<Sample> = input.iter().map(Sample::conj).collect();
    dft(&conjugated)
        .into_iter()
        .map(|x| x.conj() / n as f64)
        .collect()
}
