//! Criterion benchmarks for lehmer_sampling.
//!
//! Benchmarks cover:
//! - Raw generator throughput (1K, 10K, 100K values)
//! - Multi-stream generation with varying stream counts
//! - Derived distributions at lab sample sizes

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lehmer_core::generator::{generate, GeneratorState};
use lehmer_sampling::{
    Distribution, DistributionSampler, MultiStreamSampler, SamplerRng, TriangleMode,
    DEFAULT_NORMAL_STREAMS,
};

/// Benchmark the bare recurrence.
fn bench_generator(c: &mut Criterion) {
    let mut group = c.benchmark_group("generator");

    for n in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("generate", n), &n, |b, &n| {
            b.iter(|| black_box(generate(15, 1643, 12_031_278, n)));
        });
    }

    // Iterator form, summed without allocating
    for n in [1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("iter_sum", n), &n, |b, &n| {
            let state = GeneratorState::new(15, 1643, 12_031_278).unwrap();
            b.iter(|| black_box(state.iter().take(n).sum::<f64>()));
        });
    }

    group.finish();
}

/// Benchmark stream generation; with the `parallel` feature streams run on rayon.
fn bench_streams(c: &mut Criterion) {
    let mut group = c.benchmark_group("streams");
    let sampler = MultiStreamSampler::default();

    for stream_count in [1, 2, 6, 12] {
        group.bench_with_input(
            BenchmarkId::new("sample_100k", stream_count),
            &stream_count,
            |b, &k| {
                let mut rng = SamplerRng::from_seed(42);
                b.iter(|| black_box(sampler.sample(&mut rng, 100_000, k)));
            },
        );
    }

    group.finish();
}

/// Benchmark every distribution at n = 100K.
fn bench_distributions(c: &mut Criterion) {
    let mut group = c.benchmark_group("distributions");
    group.sample_size(20);

    let distributions = [
        Distribution::Uniform { a: 2.0, b: 5.0 },
        Distribution::Normal {
            mean: 3.0,
            sigma: 1.0,
            streams: DEFAULT_NORMAL_STREAMS,
        },
        Distribution::Exponential { lambda: 2.0 },
        Distribution::Gamma {
            lambda: 1.0,
            shape: 6,
        },
        Distribution::Triangle {
            a: -4.0,
            b: 5.0,
            mode: TriangleMode::MinOf,
        },
        Distribution::Simpson { a: 4.0, b: 8.0 },
    ];

    for dist in &distributions {
        group.bench_with_input(BenchmarkId::new(dist.name(), 100_000), dist, |b, dist| {
            let mut sampler = DistributionSampler::from_seed(42);
            b.iter(|| black_box(sampler.sample(dist, 100_000)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generator, bench_streams, bench_distributions);
criterion_main!(benches);
