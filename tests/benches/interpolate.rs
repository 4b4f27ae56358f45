extern crate morph;
extern crate morph_tests;
#[macro_use]
extern crate criterion;

use criterion::{BenchmarkId, Criterion};
use morph::path::PathData;
use morph::{interpolate_path, interpolate_path_data, InterpolationOptions};
use morph_tests::{curves, polyline};

fn build(c: &mut Criterion) {
    let mut g = c.benchmark_group("build");
    for &n in &[10, 100, 1000] {
        let a = polyline(n / 3 + 1, 50.0);
        let b = curves(n);
        g.bench_with_input(BenchmarkId::new("text", n), &n, |bench, _| {
            bench.iter(|| interpolate_path(Some(&a), Some(&b)).unwrap())
        });

        let a: PathData = a.parse().unwrap();
        let b: PathData = b.parse().unwrap();
        g.bench_with_input(BenchmarkId::new("path_data", n), &n, |bench, _| {
            bench.iter(|| interpolate_path_data(Some(&a), Some(&b), &InterpolationOptions::DEFAULT))
        });
    }
}

fn sample(c: &mut Criterion) {
    let a = polyline(50, 50.0);
    let b = curves(200);

    let text = interpolate_path(Some(&a), Some(&b)).unwrap();
    c.bench_function("sample text", |bench| bench.iter(|| text.sample(0.5)));

    let data = interpolate_path_data(
        Some(&a.parse().unwrap()),
        Some(&b.parse().unwrap()),
        &InterpolationOptions::DEFAULT,
    );
    c.bench_function("sample path_data", |bench| bench.iter(|| data.sample(0.5)));
}

criterion_group!(interpolate, build, sample);
criterion_main!(interpolate);
