//! 1-D Wasserstein distance benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 200K samples per side)
//! - Weighted versus unweighted inputs
//! - Reusable calculator versus one-off calls
//! - Batch distance matrices (pairwise and cross)
//! - Pathological cases (heavy ties, pre-sorted input, disjoint supports)
//!
//! For serial batch execution, use `WASSERSTEIN_BATCH=serial cargo bench`.
//! For parallel batch execution (default), use `WASSERSTEIN_BATCH=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastWasserstein::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::Distribution as _;
use rand_distr::{Exp, Normal, Uniform};
use std::env;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("WASSERSTEIN_BATCH").ok().as_deref() {
        Some("serial") => (false, "serial"),
        Some("parallel") | _ => (true, "parallel"),
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Gaussian samples with the given location.
fn generate_normal(size: usize, mean: f64, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Normal::new(mean, 1.0).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Positive weights drawn from an exponential distribution.
fn generate_weights(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Exp::new(1.0).unwrap();
    (0..size).map(|_| dist.sample(&mut rng)).collect()
}

/// Samples restricted to a handful of distinct values.
fn generate_ties(size: usize, levels: u32, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(0, levels).unwrap();
    (0..size).map(|_| dist.sample(&mut rng) as f64).collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(50);

    for size in [1_000, 10_000, 50_000, 200_000] {
        group.throughput(Throughput::Elements(2 * size as u64));

        let u = generate_normal(size, 0.0, 42);
        let v = generate_normal(size, 0.5, 43);
        let uw = generate_weights(size, 44);
        let vw = generate_weights(size, 45);

        group.bench_with_input(BenchmarkId::new("unweighted", size), &size, |b, _| {
            b.iter(|| wasserstein(black_box(&u), black_box(&v)).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("weighted", size), &size, |b, _| {
            b.iter(|| {
                wasserstein_weighted(black_box(&u), black_box(&uw), black_box(&v), black_box(&vw))
                    .unwrap()
            })
        });
    }
    group.finish();
}

fn bench_calculator(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator");
    group.sample_size(100);

    let size = 10_000;
    let u = generate_normal(size, 0.0, 42);
    let v = generate_normal(size, 1.0, 43);

    group.bench_function("one_off", |b| {
        b.iter(|| wasserstein(black_box(&u), black_box(&v)).unwrap())
    });

    let mut calc = Wasserstein::new().capacity(2 * size).build().unwrap();
    group.bench_function("reused", |b| {
        b.iter(|| calc.distance(black_box(&u), black_box(&v)).unwrap())
    });

    let mut unchecked = Wasserstein::new()
        .capacity(2 * size)
        .check_finite(false)
        .build()
        .unwrap();
    group.bench_function("reused_unchecked", |b| {
        b.iter(|| unchecked.distance(black_box(&u), black_box(&v)).unwrap())
    });

    group.finish();
}

fn bench_pairwise(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("pairwise_{}", mode_name));
    group.sample_size(20);

    let batch = Wasserstein::new()
        .parallel(use_parallel)
        .batch()
        .build()
        .unwrap();

    for count in [16, 64, 128] {
        let samples: Vec<Vec<f64>> = (0..count)
            .map(|i| generate_normal(1_000, i as f64 * 0.1, i as u64))
            .collect();
        let dists: Vec<Distribution<'_, f64>> =
            samples.iter().map(|s| Distribution::new(s)).collect();

        group.throughput(Throughput::Elements((count * (count - 1) / 2) as u64));
        group.bench_with_input(BenchmarkId::new("matrix", count), &count, |b, _| {
            b.iter(|| batch.pairwise(black_box(&dists)).unwrap())
        });
    }
    group.finish();
}

fn bench_cross(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("cross_{}", mode_name));
    group.sample_size(20);

    let batch = Wasserstein::new()
        .parallel(use_parallel)
        .batch()
        .build()
        .unwrap();

    let rows: Vec<Vec<f64>> = (0..32).map(|i| generate_normal(2_000, 0.0, i)).collect();
    let cols: Vec<Vec<f64>> = (0..8).map(|i| generate_normal(2_000, 1.0, 100 + i)).collect();
    let weights: Vec<Vec<f64>> = (0..8).map(|i| generate_weights(2_000, 200 + i)).collect();

    let row_dists: Vec<_> = rows.iter().map(|s| Distribution::new(s)).collect();
    let col_dists: Vec<_> = cols
        .iter()
        .zip(&weights)
        .map(|(s, w)| Distribution::weighted(s, w))
        .collect();

    group.bench_function("32x8_weighted_columns", |b| {
        b.iter(|| batch.cross(black_box(&row_dists), black_box(&col_dists)).unwrap())
    });
    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let mut group = c.benchmark_group("pathological");
    group.sample_size(50);

    let size = 50_000;

    // Many repeated values
    let u_ties = generate_ties(size, 8, 42);
    let v_ties = generate_ties(size, 8, 43);
    group.bench_function("heavy_ties", |b| {
        b.iter(|| wasserstein(black_box(&u_ties), black_box(&v_ties)).unwrap())
    });

    // Already sorted input
    let mut u_sorted = generate_normal(size, 0.0, 42);
    let mut v_sorted = generate_normal(size, 0.5, 43);
    u_sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    v_sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
    group.bench_function("presorted", |b| {
        b.iter(|| wasserstein(black_box(&u_sorted), black_box(&v_sorted)).unwrap())
    });

    // Supports that never overlap
    let u_far = generate_normal(size, 0.0, 42);
    let v_far = generate_normal(size, 1_000.0, 43);
    group.bench_function("disjoint", |b| {
        b.iter(|| wasserstein(black_box(&u_far), black_box(&v_far)).unwrap())
    });

    // Fixed harness inputs
    let a = [3.4, 3.9, 7.5, 7.8];
    let aw = [1.4, 0.9, 3.1, 7.2];
    let bv = [4.5, 1.4];
    let bw = [3.2, 3.5];
    group.bench_function("small_weighted", |b| {
        b.iter(|| {
            wasserstein_weighted(black_box(&a), black_box(&aw), black_box(&bv), black_box(&bw))
                .unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_calculator,
    bench_pairwise,
    bench_cross,
    bench_pathological,
);

criterion_main!(benches);
