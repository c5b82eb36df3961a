//! Criterion benchmarks for the sweep mapping and a full animation run.
//! Results land under target/criterion.

use std::time::Duration;

use arcgauge::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_progress(n: usize, max: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen_range(-max..=max)).collect()
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("sweep");
    let inputs = random_progress(1024, 100.0, 42);
    group.bench_function("compute_sweep_1024", |b| {
        b.iter(|| {
            for &p in &inputs {
                black_box(compute_sweep(black_box(p), 100.0));
            }
        })
    });
    for mode in [BoundsMode::Strict, BoundsMode::Wrap, BoundsMode::Clamp] {
        let raw = random_progress(1024, 250.0, 43);
        group.bench_with_input(
            BenchmarkId::new("enforce_bounds", format!("{mode:?}")),
            &raw,
            |b, raw| {
                b.iter(|| {
                    for &v in raw {
                        black_box(enforce_bounds(v, 100.0, mode));
                    }
                })
            },
        );
    }
    group.finish();
}

fn bench_animation(c: &mut Criterion) {
    let mut group = c.benchmark_group("animation");
    for &frame_ms in &[4u64, 16, 33] {
        group.bench_with_input(BenchmarkId::new("run_1s", frame_ms), &frame_ms, |b, &f| {
            b.iter_batched(
                Gauge::default,
                |mut g| {
                    g.animate_progress(-25.0, 100.0, Duration::from_secs(1));
                    while g.advance(Duration::from_millis(f)) == GaugeState::Animating {}
                    g
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sweep, bench_animation);
criterion_main!(benches);
