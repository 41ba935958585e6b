//! Walsh–Hadamard transform
//!
//! Inputs are zero-padded to the next power of two `M`, run through
//! `log2(M)` stages of (+, −) butterflies and truncated back. The inverse is
//! the same transform divided by `M`.

use nloss_core::Sample;

use crate::fourier::zero_padded;

/// Unnormalized fast Walsh–Hadamard transform
pub fn wht(input: &[Sample]) -> Vec<Sample> {
    let n = input.len();
    if n == 0 {
        return Vec::new();
    }

    let m = n.next_power_of_two();
    let mut a = zero_padded(input, m);

    let mut half = 1;
    while half < m {
        for chunk in a.chunks_exact_mut(half * 2) {
            let (lo, hi) = chunk.split_at_mut(half);
            for (x, y) in lo.iter_mut().zip(hi.iter_mut()) {
                let (u, v) = (*x, *y);
                *x = u + v;
                *y = u - v;
            }
        }
        half <<= 1;
    }

    a.truncate(n);
    a
}

/// Inverse of [`wht`]; divides by the padded length of this input
pub fn iwht(input: &[Sample]) -> Vec<Sample> {
    let m = input.len().next_power_of_two() as f64;
    wht(input).into_iter().map(|x| x / m).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_close, ramp, real};

    #[test]
    fn test_wht_known_values() {
        let out = wht(&real(&[1.0, 0.0, 1.0, 0.0]));
        assert_close(&out, &real(&[2.0, 2.0, 0.0, 0.0]), 1e-12);
    }

    #[test]
    fn test_wht_pads_and_truncates() {
        // [1, 2, 3, 0] -> [6, 2, 0, -4], truncated to three entries
        let out = wht(&real(&[1.0, 2.0, 3.0]));
        assert_close(&out, &real(&[6.0, 2.0, 0.0]), 1e-12);
    }

    #[test]
    fn test_roundtrip_both_directions() {
        for len in [1, 2, 4, 8, 64] {
            let x = ramp(len);
            assert_close(&iwht(&wht(&x)), &x, 1e-9);
            assert_close(&wht(&iwht(&x)), &x, 1e-9);
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(wht(&[]).is_empty());
        assert!(iwht(&[]).is_empty());
    }
}
