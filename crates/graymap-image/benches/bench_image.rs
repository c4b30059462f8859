use criterion::{criterion_group, criterion_main, Criterion};
use graymap_image::{Counters, GrayImage, ImageSize, NoopRecorder};
use std::hint::black_box;

fn sample_image() -> GrayImage {
    GrayImage::from_size_val(
        ImageSize {
            width: 1920,
            height: 1080,
        },
        255,
        127,
    )
    .unwrap()
}

fn bench_image(c: &mut Criterion) {
    let mut group = c.benchmark_group("Image");

    group.bench_function("get_pixel_noop", |b| {
        let image = sample_image();
        b.iter(|| {
            let mut sum = 0u64;
            for y in 0..image.height() {
                for x in 0..image.width() {
                    sum += image.get_pixel(x, y, &mut NoopRecorder).unwrap() as u64;
                }
            }
            black_box(sum)
        })
    });

    group.bench_function("get_pixel_counted", |b| {
        let image = sample_image();
        let mut counters = Counters::new();
        b.iter(|| {
            let mut sum = 0u64;
            for y in 0..image.height() {
                for x in 0..image.width() {
                    sum += image.get_pixel(x, y, &mut counters).unwrap() as u64;
                }
            }
            black_box(sum)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_image);
criterion_main!(benches);
