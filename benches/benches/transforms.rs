//! Benchmarks for the one-dimensional transforms
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nloss_core::Sample;
use nloss_transform::{dct2, dft, fft, idct2, ifft, wht, TransformKind};

fn ramp(len: usize) -> Vec<Sample> {
    (0..len)
        .map(|i| Sample::new((i * 37 % 256) as f64, 0.0))
        .collect()
}

fn bench_fft_vs_dft(c: &mut Criterion) {
    let mut group = c.benchmark_group("Fourier");

    for len in [8usize, 64, 256] {
        let input = ramp(len);
        group.bench_with_input(BenchmarkId::new("fft", len), &input, |b, input| {
            b.iter(|| fft(black_box(input)));
        });
        group.bench_with_input(BenchmarkId::new("dft", len), &input, |b, input| {
            b.iter(|| dft(black_box(input)));
        });
    }

    // Padded to the next power of two and truncated
    let odd = ramp(300);
    group.bench_function("fft_padded_300", |b| {
        b.iter(|| fft(black_box(&odd)));
    });

    group.finish();
}

fn bench_roundtrips(c: &mut Criterion) {
    let mut group = c.benchmark_group("Roundtrip");
    let input = ramp(64);

    group.bench_function("fft_ifft_64", |b| {
        b.iter(|| ifft(&fft(black_box(&input))));
    });
    group.bench_function("dct_idct_64", |b| {
        b.iter(|| idct2(&dct2(black_box(&input))));
    });

    group.finish();
}

fn bench_all_kinds(c: &mut Criterion) {
    let mut group = c.benchmark_group("Kinds");
    let input = ramp(32);

    for kind in TransformKind::ALL {
        let transform = kind.function();
        group.bench_with_input(BenchmarkId::new(kind.name(), 32), &input, |b, input| {
            b.iter(|| transform(black_box(input)));
        });
    }
    group.bench_function("wht_1024", |b| {
        let long = ramp(1024);
        b.iter(|| wht(black_box(&long)));
    });

    group.finish();
}

criterion_group!(benches, bench_fft_vs_dft, bench_roundtrips, bench_all_kinds);
criterion_main!(benches);
