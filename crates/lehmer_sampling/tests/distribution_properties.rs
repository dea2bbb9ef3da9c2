//! Statistical properties of the derived distributions.
//!
//! Stream parameters are drawn at random, and an unlucky draw can land on a
//! multiplier with a short cycle modulo the drawn modulus. Moment checks
//! therefore run over several seeds and require a clear majority to pass.

use approx::assert_relative_eq;
use lehmer_core::stats::Summary;
use lehmer_sampling::{Distribution, DistributionSampler, TriangleMode, DEFAULT_NORMAL_STREAMS};

const N: usize = 100_000;
const SEEDS: [u64; 5] = [11, 23, 37, 41, 53];

/// Runs `check` for every seed and asserts that at least 3 of 5 pass.
fn assert_majority<F>(label: &str, mut check: F)
where
    F: FnMut(&mut DistributionSampler) -> bool,
{
    let passed = SEEDS
        .iter()
        .filter(|&&seed| check(&mut DistributionSampler::from_seed(seed)))
        .count();
    assert!(
        passed >= 3,
        "{}: only {} of {} seeds within tolerance",
        label,
        passed,
        SEEDS.len()
    );
}

#[test]
fn test_uniform_range() {
    let mut sampler = DistributionSampler::from_seed(1);
    let values = sampler.uniform(2.0, 5.0, N).unwrap();
    assert_eq!(values.len(), N);
    for &v in &values {
        assert!((2.0..5.0).contains(&v), "uniform value {} outside [2, 5)", v);
    }
}

#[test]
fn test_uniform_mean() {
    assert_majority("uniform mean", |s| {
        let summary = Summary::of(&s.uniform(2.0, 5.0, N).unwrap()).unwrap();
        (summary.mean - 3.5).abs() < 0.05
    });
}

#[test]
fn test_normal_moments() {
    assert_majority("normal mean", |s| {
        let values = s.normal(3.0, 1.0, N, DEFAULT_NORMAL_STREAMS).unwrap();
        let summary = Summary::of(&values).unwrap();
        (summary.mean - 3.0).abs() < 0.05 && (summary.sigma - 1.0).abs() < 0.05
    });
}

#[test]
fn test_normal_stream_count_is_configurable() {
    let mut sampler = DistributionSampler::from_seed(5);
    let values = sampler.normal(0.0, 1.0, 1_000, 12).unwrap();
    // With k uniforms the support is bounded by sqrt(12 / k) * k / 2.
    let bound = (12.0_f64 / 12.0).sqrt() * 6.0;
    assert!(values.iter().all(|v| v.abs() <= bound));
}

#[test]
fn test_exp_mean() {
    assert_majority("exp mean", |s| {
        let summary = Summary::of(&s.exp(2.0, N).unwrap()).unwrap();
        (summary.mean - 0.5).abs() < 0.025
    });
}

#[test]
fn test_exp_is_non_negative() {
    let values = DistributionSampler::from_seed(9).exp(2.0, N).unwrap();
    assert!(values.iter().all(|&v| v >= 0.0));
}

#[test]
fn test_gamma_mean() {
    assert_majority("gamma mean", |s| {
        let summary = Summary::of(&s.gamma(1.0, 6, N).unwrap()).unwrap();
        (summary.mean - 6.0).abs() < 0.15
    });
}

#[test]
fn test_triangle_modes() {
    let mut sampler = DistributionSampler::from_seed(17);
    let right = sampler.triangle(-4.0, 5.0, N, TriangleMode::MaxOf).unwrap();
    let left = sampler.triangle(-4.0, 5.0, N, TriangleMode::MinOf).unwrap();

    for &v in right.iter().chain(&left) {
        assert!((-4.0..5.0).contains(&v), "triangle value {} outside [-4, 5)", v);
    }

    let right_mean = Summary::of(&right).unwrap().mean;
    let left_mean = Summary::of(&left).unwrap().mean;
    assert!(
        right_mean > left_mean,
        "MaxOf mean {} should exceed MinOf mean {}",
        right_mean,
        left_mean
    );
    assert!((5.0 - right_mean) < (5.0 - left_mean));
}

#[test]
fn test_triangle_parses_legacy_tags() {
    let mode: TriangleMode = "second".parse().unwrap();
    let mut a = DistributionSampler::from_seed(3);
    let mut b = DistributionSampler::from_seed(3);
    assert_eq!(
        a.triangle(0.0, 1.0, 100, mode).unwrap(),
        b.triangle(0.0, 1.0, 100, TriangleMode::MinOf).unwrap()
    );
    assert!("third".parse::<TriangleMode>().is_err());
}

#[test]
fn test_simpson_concentrates_near_centre() {
    let mut sampler = DistributionSampler::from_seed(29);
    let simpson = sampler.simpson(4.0, 8.0, N).unwrap();
    let uniform = sampler.uniform(4.0, 8.0, N).unwrap();

    assert!(simpson.iter().all(|&v| (4.0..=8.0).contains(&v)));

    let simpson_var = Summary::of(&simpson).unwrap().variance;
    let uniform_var = Summary::of(&uniform).unwrap().variance;
    assert!(
        simpson_var < uniform_var,
        "Simpson variance {} should be below uniform variance {}",
        simpson_var,
        uniform_var
    );
}

#[test]
fn test_expected_moments_track_samples() {
    let dist = Distribution::Uniform { a: 0.0, b: 1.0 };
    assert_majority("uniform variance", |s| {
        let summary = Summary::of(&s.sample(&dist, N).unwrap()).unwrap();
        (summary.variance - dist.expected_variance()).abs() < 0.005
    });
    assert_relative_eq!(dist.expected_mean(), 0.5);
}

#[test]
fn test_reproducible_with_fixed_seed() {
    let dist = Distribution::Normal {
        mean: 0.0,
        sigma: 1.0,
        streams: DEFAULT_NORMAL_STREAMS,
    };
    let a = DistributionSampler::from_seed(77).sample(&dist, 1_000).unwrap();
    let b = DistributionSampler::from_seed(77).sample(&dist, 1_000).unwrap();
    assert_eq!(a, b);
}
