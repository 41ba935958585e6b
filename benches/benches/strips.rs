//! Benchmarks for strip application over whole images

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nloss::{Axis, CommandConfig, ImageBank, Operation, TransformKind};
use nloss_bmp::RgbImage;
use nloss_core::ImageData;
use nloss_transform::apply_strips;

fn test_image(width: usize, height: usize) -> ImageData {
    let pixels: Vec<[u8; 3]> = (0..width * height)
        .map(|i| {
            let v = (i % 256) as u8;
            [v, v / 2, 255 - v]
        })
        .collect();
    ImageData::from_rgb8(width, height, &pixels).unwrap()
}

fn bench_apply_strips(c: &mut Criterion) {
    let mut group = c.benchmark_group("Strips");
    let image = test_image(128, 128);

    for block in [8usize, 32, 128] {
        group.bench_with_input(BenchmarkId::new("fft_both", block), &block, |b, &block| {
            b.iter(|| {
                let mut working = image.clone();
                apply_strips(&mut working, Axis::Both, block, block, &TransformKind::Fft).unwrap();
                black_box(working)
            });
        });
        group.bench_with_input(BenchmarkId::new("dct_both", block), &block, |b, &block| {
            b.iter(|| {
                let mut working = image.clone();
                apply_strips(&mut working, Axis::Both, block, block, &TransformKind::Dct2).unwrap();
                black_box(working)
            });
        });
    }

    group.finish();
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("Session");
    let raster = RgbImage::from_image_data(&test_image(256, 256)).unwrap();
    let bytes = nloss_bmp::encode(&raster).unwrap();

    group.bench_function("load_dct_idct_save_256", |b| {
        let config = CommandConfig::new()
            .block_width(8)
            .block_height(8)
            .axis(Axis::Both);
        b.iter(|| {
            let mut bank = ImageBank::new();
            bank.load_bytes(0, black_box(&bytes)).unwrap();
            bank.apply(Operation::Transform(TransformKind::Dct2), &config)
                .unwrap();
            bank.apply(Operation::Transform(TransformKind::Idct2), &config)
                .unwrap();
            black_box(bank.encode_slot(0).unwrap())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_apply_strips, bench_session);
criterion_main!(benches);
