//! Benchmarks for the color conversions.
//!
//! Run with: `cargo bench`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

use xyy_color::prelude::*;
use xyy_transfer::gamma;

fn gray_ramp(size: usize) -> Vec<RgbColor> {
    (0..size)
        .map(|i| {
            let v = i as f64 / size as f64;
            RgbColor::new(v, 1.0 - v, 0.5)
        })
        .collect()
}

/// Benchmark the gamma curve.
fn bench_gamma(c: &mut Criterion) {
    let mut group = c.benchmark_group("gamma");

    for size in [1000, 10000, 100000].iter() {
        let values: Vec<f64> = (0..*size).map(|i| i as f64 / *size as f64).collect();

        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("decode_2.4", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| gamma::decode(black_box(x), 2.4)).collect::<Vec<_>>())
        });

        group.bench_with_input(BenchmarkId::new("encode_2.4", size), &values, |b, v| {
            b.iter(|| v.iter().map(|&x| gamma::encode(black_box(x), 2.4)).collect::<Vec<_>>())
        });
    }

    group.finish();
}

/// Benchmark the individual transforms.
fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");

    let colors = gray_ramp(10000);
    let xyz: Vec<XyzColor> = colors.iter().map(|&c| rgb_to_xyz(c, 0.0)).collect();
    let xyy: Vec<XyyColor> = xyz.iter().map(|&c| xyz_to_xyy(c)).collect();
    group.throughput(Throughput::Elements(colors.len() as u64));

    group.bench_function("rgb_to_xyz", |b| {
        b.iter(|| colors.iter().map(|&c| rgb_to_xyz(black_box(c), 0.0)).collect::<Vec<_>>())
    });

    group.bench_function("rgb_to_xyz_gamma", |b| {
        b.iter(|| colors.iter().map(|&c| rgb_to_xyz(black_box(c), 2.4)).collect::<Vec<_>>())
    });

    group.bench_function("xyz_to_xyy", |b| {
        b.iter(|| xyz.iter().map(|&c| xyz_to_xyy(black_box(c))).collect::<Vec<_>>())
    });

    group.bench_function("xyy_to_xyz", |b| {
        b.iter(|| xyy.iter().map(|&c| xyy_to_xyz(black_box(c))).collect::<Vec<_>>())
    });

    group.bench_function("xyz_to_rgb_gamma", |b| {
        b.iter(|| xyz.iter().map(|&c| xyz_to_rgb(black_box(c), 2.4)).collect::<Vec<_>>())
    });

    group.finish();
}

/// Benchmark the full round trip through the pipeline.
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    let colors = gray_ramp(1000);
    group.throughput(Throughput::Elements(colors.len() as u64));

    for gamma in [0.0, 2.4] {
        let pipeline = Pipeline::rgb_round_trip(ConvertConfig::default().with_gamma(gamma));
        group.bench_with_input(BenchmarkId::new("rgb_round_trip", gamma), &colors, |b, v| {
            b.iter(|| {
                v.iter()
                    .map(|&c| pipeline.apply(black_box(c.into())))
                    .collect::<Vec<_>>()
            })
        });
    }

    group.finish();
}

/// Benchmark the 3x3 matrix inverse.
fn bench_matrix(c: &mut Criterion) {
    c.bench_function("mat3_inverse", |b| {
        b.iter(|| black_box(CIE_RGB_TO_XYZ).inverse())
    });
}

criterion_group!(benches, bench_gamma, bench_transforms, bench_pipeline, bench_matrix);
criterion_main!(benches);
