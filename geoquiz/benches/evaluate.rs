//! Benchmarks pour l'évaluation des clics

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use geoquiz::{evaluate, Feature, Point};

/// Rue en zigzag de `n` sommets autour de Tours
fn zigzag_street(n: usize) -> Feature {
    let path = (0..n)
        .map(|i| {
            let lat = 47.39 + i as f64 * 1e-4;
            let lon = 0.68 + if i % 2 == 0 { 0.0 } else { 1e-4 };
            Point::new(lat, lon)
        })
        .collect();
    Feature::street("Zigzag", path)
}

/// Lieu circulaire de `n` sommets
fn round_landmark(n: usize) -> Feature {
    let path = (0..n)
        .map(|i| {
            let angle = i as f64 / n as f64 * std::f64::consts::TAU;
            Point::new(47.39 + 0.001 * angle.sin(), 0.68 + 0.001 * angle.cos())
        })
        .collect();
    Feature::landmark("Rond-point", path)
}

fn bench_street(c: &mut Criterion) {
    let click = Point::new(47.395, 0.6805);
    let mut group = c.benchmark_group("street");
    for n in [10, 100, 1000] {
        let feature = zigzag_street(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &feature, |b, feature| {
            b.iter(|| evaluate(black_box(click), black_box(feature)).unwrap())
        });
    }
    group.finish();
}

fn bench_landmark(c: &mut Criterion) {
    let inside = Point::new(47.39, 0.68);
    let outside = Point::new(47.40, 0.69);
    let mut group = c.benchmark_group("landmark");
    for n in [8, 64, 512] {
        let feature = round_landmark(n);
        group.bench_with_input(BenchmarkId::new("inside", n), &feature, |b, feature| {
            b.iter(|| evaluate(black_box(inside), black_box(feature)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("outside", n), &feature, |b, feature| {
            b.iter(|| evaluate(black_box(outside), black_box(feature)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_street, bench_landmark);
criterion_main!(benches);
