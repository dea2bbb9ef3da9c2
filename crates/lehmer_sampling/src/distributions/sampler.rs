//! Distribution samplers drawing their own Lehmer streams.

use super::mode::TriangleMode;
use super::transforms::{
    exp_from, gamma_from, normal_from, simpson_from, triangle_from, uniform_from,
};
use super::Distribution;
use crate::rng::SamplerRng;
use crate::streams::MultiStreamSampler;
use lehmer_core::{LehmerError, Result, Sequence};
use tracing::debug;

/// Default number of uniform streams summed by [`DistributionSampler::normal`].
pub const DEFAULT_NORMAL_STREAMS: usize = 6;

/// Samples derived distributions from freshly drawn Lehmer streams.
///
/// Owns its [`SamplerRng`], so two samplers built from the same seed and
/// ranges produce identical sequences call for call.
///
/// # Examples
///
/// ```rust
/// use lehmer_sampling::distributions::{DistributionSampler, TriangleMode};
///
/// let mut sampler = DistributionSampler::from_seed(42);
///
/// let uniform = sampler.uniform(2.0, 5.0, 1_000).unwrap();
/// assert!(uniform.iter().all(|&x| (2.0..5.0).contains(&x)));
///
/// let normal = sampler.normal(3.0, 1.0, 1_000, 6).unwrap();
/// assert_eq!(normal.len(), 1_000);
///
/// let tri = sampler.triangle(-4.0, 5.0, 1_000, TriangleMode::MinOf).unwrap();
/// assert!(tri.iter().all(|&x| (-4.0..5.0).contains(&x)));
/// ```
#[derive(Clone, Debug)]
pub struct DistributionSampler {
    streams: MultiStreamSampler,
    rng: SamplerRng,
}

impl DistributionSampler {
    /// Creates a sampler from explicit stream ranges and random source.
    pub fn new(streams: MultiStreamSampler, rng: SamplerRng) -> Self {
        Self { streams, rng }
    }

    /// Creates a sampler with default stream ranges and a seeded random source.
    pub fn from_seed(seed: u64) -> Self {
        Self::new(MultiStreamSampler::default(), SamplerRng::from_seed(seed))
    }

    /// Returns the seed of the underlying random source.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Returns the stream sampler.
    #[inline]
    pub fn streams(&self) -> &MultiStreamSampler {
        &self.streams
    }

    /// `n` values uniform on `[a, b)`.
    pub fn uniform(&mut self, a: f64, b: f64, n: usize) -> Result<Sequence> {
        let u = self.streams.sample_one(&mut self.rng, n)?;
        Ok(uniform_from(&u, a, b))
    }

    /// `n` approximately normal values from `stream_count` summed uniforms.
    ///
    /// # Errors
    ///
    /// Returns [`LehmerError::InvalidParameters`] if `stream_count` is 0.
    pub fn normal(
        &mut self,
        avg: f64,
        sigma: f64,
        n: usize,
        stream_count: usize,
    ) -> Result<Sequence> {
        let set = self.streams.sample(&mut self.rng, n, stream_count)?;
        Ok(normal_from(&set, avg, sigma))
    }

    /// `n` exponential values with rate `lambda`.
    ///
    /// # Errors
    ///
    /// Returns [`LehmerError::InvalidParameters`] if `lambda` is 0 or not finite.
    pub fn exp(&mut self, lambda: f64, n: usize) -> Result<Sequence> {
        let u = self.streams.sample_one(&mut self.rng, n)?;
        exp_from(&u, lambda)
    }

    /// `n` Erlang values with rate `lambda` and integer `shape`.
    ///
    /// # Errors
    ///
    /// Returns [`LehmerError::InvalidParameters`] if `shape` is 0 or `lambda`
    /// is 0 or not finite.
    pub fn gamma(&mut self, lambda: f64, shape: usize, n: usize) -> Result<Sequence> {
        if shape == 0 {
            return Err(LehmerError::invalid("shape", "must be at least 1"));
        }
        let set = self.streams.sample(&mut self.rng, n, shape)?;
        gamma_from(&set, lambda)
    }

    /// `n` triangular values on `[a, b)`.
    pub fn triangle(&mut self, a: f64, b: f64, n: usize, mode: TriangleMode) -> Result<Sequence> {
        let set = self.streams.sample(&mut self.rng, n, 2)?;
        let streams = set.streams();
        Ok(triangle_from(&streams[0], &streams[1], a, b, mode))
    }

    /// `n` values from the Simpson (triangular) density on `[a, b]`.
    ///
    /// Sums two independent `uniform(a / 2, b / 2, n)` sequences.
    pub fn simpson(&mut self, a: f64, b: f64, n: usize) -> Result<Sequence> {
        let first = self.uniform(a / 2.0, b / 2.0, n)?;
        let second = self.uniform(a / 2.0, b / 2.0, n)?;
        Ok(simpson_from(&first, &second))
    }

    /// Samples any [`Distribution`].
    pub fn sample(&mut self, distribution: &Distribution, n: usize) -> Result<Sequence> {
        debug!(%distribution, n, "Sampling distribution");
        match *distribution {
            Distribution::Uniform { a, b } => self.uniform(a, b, n),
            Distribution::Normal {
                mean,
                sigma,
                streams,
            } => self.normal(mean, sigma, n, streams),
            Distribution::Exponential { lambda } => self.exp(lambda, n),
            Distribution::Gamma { lambda, shape } => self.gamma(lambda, shape, n),
            Distribution::Triangle { a, b, mode } => self.triangle(a, b, n, mode),
            Distribution::Simpson { a, b } => self.simpson(a, b, n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_output() {
        let mut s1 = DistributionSampler::from_seed(2024);
        let mut s2 = DistributionSampler::from_seed(2024);
        assert_eq!(s1.uniform(0.0, 1.0, 100).unwrap(), s2.uniform(0.0, 1.0, 100).unwrap());
        assert_eq!(s1.gamma(1.0, 3, 100).unwrap(), s2.gamma(1.0, 3, 100).unwrap());
    }

    #[test]
    fn test_successive_calls_draw_new_streams() {
        let mut sampler = DistributionSampler::from_seed(3);
        let a = sampler.uniform(0.0, 1.0, 50).unwrap();
        let b = sampler.uniform(0.0, 1.0, 50).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_parameter_validation() {
        let mut sampler = DistributionSampler::from_seed(1);
        assert!(sampler.normal(0.0, 1.0, 10, 0).is_err());
        assert!(sampler.exp(0.0, 10).is_err());
        assert!(matches!(
            sampler.gamma(1.0, 0, 10),
            Err(LehmerError::InvalidParameters { name: "shape", .. })
        ));
        assert!(sampler.gamma(0.0, 2, 10).is_err());
    }

    #[test]
    fn test_sample_dispatch_matches_direct_call() {
        let dist = Distribution::Triangle {
            a: 0.0,
            b: 1.0,
            mode: TriangleMode::MaxOf,
        };
        let via_enum = DistributionSampler::from_seed(8).sample(&dist, 64).unwrap();
        let direct = DistributionSampler::from_seed(8)
            .triangle(0.0, 1.0, 64, TriangleMode::MaxOf)
            .unwrap();
        assert_eq!(via_enum, direct);
    }

    #[test]
    fn test_empty_requests() {
        let mut sampler = DistributionSampler::from_seed(1);
        assert!(sampler.simpson(4.0, 8.0, 0).unwrap().is_empty());
        assert!(sampler.normal(0.0, 1.0, 0, DEFAULT_NORMAL_STREAMS).unwrap().is_empty());
    }
}
