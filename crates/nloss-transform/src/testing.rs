use nloss_core::Sample;

pub fn real(values: &[f64]) -> Vec<Sample> {
    values.iter().map(|&v| Sample::new(v, 0.0)).collect()
}

pub fn assert_close(actual: &[Sample], expected: &[Sample], tol: f64) {
    assert_eq!(actual.len(), expected.len(), "length mismatch");
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let scale = e.norm().max(1.0);
        assert!(
            (a - e).norm() <= tol * scale,
            "index {}: got {}, expected {}",
            i,
            a,
            e
        );
    }
}

/// Deterministic pseudo-random real sequence
pub fn ramp(len: usize) -> Vec<Sample> {
    (0..len)
        .map(|i| Sample::new(((i * 37 + 11) % 256) as f64, 0.0))
        .collect()
}
