//! Independent Lehmer streams with randomly drawn parameters.
//!
//! Randomness enters only once per stream, when `(seed, multiplier, modulus)`
//! is drawn from [`StreamParamRanges`]; each stream is fully deterministic
//! afterwards. All parameters of a [`StreamSet`] are drawn before any stream
//! is generated, so the draws do not depend on whether generation runs in
//! parallel.

use crate::rng::SamplerRng;
use lehmer_core::generator::{GeneratorState, MAX_MODULUS};
use lehmer_core::{LehmerError, Result, Sequence};
use std::ops::RangeInclusive;
use tracing::{debug, trace};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Default inclusive range for stream seeds.
pub const SEED_RANGE: RangeInclusive<u64> = 2..=100;

/// Default inclusive range for stream multipliers.
pub const MULTIPLIER_RANGE: RangeInclusive<u64> = 1_000..=5_000;

/// Default inclusive range for stream moduli.
pub const MODULUS_RANGE: RangeInclusive<u64> = 10_000_000..=20_000_000;

/// Inclusive ranges from which stream parameters are drawn.
///
/// # Examples
///
/// ```rust
/// use lehmer_sampling::streams::{StreamParamRanges, MODULUS_RANGE};
///
/// let ranges = StreamParamRanges::default();
/// assert_eq!(ranges.modulus, MODULUS_RANGE);
/// assert!(ranges.validate().is_ok());
///
/// let bad = StreamParamRanges {
///     multiplier: 1_000..=20_000_000,
///     ..StreamParamRanges::default()
/// };
/// assert!(bad.validate().is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StreamParamRanges {
    /// Range for the initial seed `r_0`.
    pub seed: RangeInclusive<u64>,
    /// Range for the multiplier `a`.
    pub multiplier: RangeInclusive<u64>,
    /// Range for the modulus `m`.
    pub modulus: RangeInclusive<u64>,
}

impl Default for StreamParamRanges {
    fn default() -> Self {
        Self {
            seed: SEED_RANGE,
            multiplier: MULTIPLIER_RANGE,
            modulus: MODULUS_RANGE,
        }
    }
}

impl StreamParamRanges {
    /// Validates the ranges.
    ///
    /// # Errors
    ///
    /// Returns [`LehmerError::InvalidParameters`] if:
    /// - any range is empty
    /// - the modulus range includes 0 or exceeds [`MAX_MODULUS`]
    /// - the largest multiplier is not below the smallest modulus
    pub fn validate(&self) -> Result<()> {
        if self.seed.is_empty() {
            return Err(empty_range("seed", &self.seed));
        }
        if self.multiplier.is_empty() {
            return Err(empty_range("multiplier", &self.multiplier));
        }
        if self.modulus.is_empty() {
            return Err(empty_range("modulus", &self.modulus));
        }
        if *self.modulus.start() == 0 || *self.modulus.end() > MAX_MODULUS {
            return Err(LehmerError::invalid(
                "modulus",
                format!(
                    "range [{}, {}] must lie within [1, 2^53]",
                    self.modulus.start(),
                    self.modulus.end()
                ),
            ));
        }
        if *self.multiplier.end() >= *self.modulus.start() {
            return Err(LehmerError::invalid(
                "multiplier",
                format!(
                    "upper bound {} must be less than the smallest modulus {}",
                    self.multiplier.end(),
                    self.modulus.start()
                ),
            ));
        }
        Ok(())
    }
}

fn empty_range(name: &'static str, range: &RangeInclusive<u64>) -> LehmerError {
    LehmerError::invalid(
        name,
        format!("range [{}, {}] is empty", range.start(), range.end()),
    )
}

/// `k` index-aligned Lehmer streams of equal length.
///
/// Value `i` of stream `j` belongs to the same draw as value `i` of every
/// other stream, which is what element-wise transforms rely on.
#[derive(Clone, Debug, PartialEq)]
pub struct StreamSet {
    params: Vec<GeneratorState>,
    streams: Vec<Sequence>,
    len: usize,
}

impl StreamSet {
    /// Builds a stream set from caller-supplied sequences.
    ///
    /// The result carries no generator parameters.
    ///
    /// # Errors
    ///
    /// Returns [`LehmerError::InvalidParameters`] if `streams` is empty or the
    /// sequences differ in length.
    pub fn from_streams(streams: Vec<Sequence>) -> Result<Self> {
        let len = streams
            .first()
            .map(Vec::len)
            .ok_or_else(|| LehmerError::invalid("streams", "at least one stream is required"))?;
        if let Some(j) = streams.iter().position(|s| s.len() != len) {
            return Err(LehmerError::invalid(
                "streams",
                format!(
                    "stream {} has length {}, expected {}",
                    j,
                    streams[j].len(),
                    len
                ),
            ));
        }
        Ok(Self {
            params: Vec::new(),
            streams,
            len,
        })
    }

    /// Number of streams `k`.
    #[inline]
    pub fn stream_count(&self) -> usize {
        self.streams.len()
    }

    /// Length `n` shared by every stream.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the streams hold no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns stream `j`, if present.
    #[inline]
    pub fn stream(&self, j: usize) -> Option<&[f64]> {
        self.streams.get(j).map(Vec::as_slice)
    }

    /// All streams in order.
    #[inline]
    pub fn streams(&self) -> &[Sequence] {
        &self.streams
    }

    /// Generator parameters drawn for each stream (empty for
    /// [`StreamSet::from_streams`]).
    #[inline]
    pub fn params(&self) -> &[GeneratorState] {
        &self.params
    }

    /// Iterates over value `i` of every stream, in stream order.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    pub fn column(&self, i: usize) -> impl Iterator<Item = f64> + '_ {
        self.streams.iter().map(move |s| s[i])
    }

    /// Consumes the set and returns the streams.
    pub fn into_streams(self) -> Vec<Sequence> {
        self.streams
    }
}

/// Draws independent Lehmer streams with random parameters.
///
/// # Examples
///
/// ```rust
/// use lehmer_sampling::rng::SamplerRng;
/// use lehmer_sampling::streams::MultiStreamSampler;
///
/// let sampler = MultiStreamSampler::default();
/// let mut rng = SamplerRng::from_seed(42);
///
/// let set = sampler.sample(&mut rng, 1_000, 6).unwrap();
/// assert_eq!(set.stream_count(), 6);
/// assert_eq!(set.len(), 1_000);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MultiStreamSampler {
    ranges: StreamParamRanges,
}

impl MultiStreamSampler {
    /// Creates a sampler drawing from the given ranges.
    ///
    /// # Errors
    ///
    /// Returns [`LehmerError::InvalidParameters`] if the ranges fail
    /// [`StreamParamRanges::validate`].
    pub fn new(ranges: StreamParamRanges) -> Result<Self> {
        ranges.validate()?;
        Ok(Self { ranges })
    }

    /// Returns the parameter ranges.
    #[inline]
    pub fn ranges(&self) -> &StreamParamRanges {
        &self.ranges
    }

    /// Draws one set of generator parameters: seed, then multiplier, then modulus.
    pub fn draw_params(&self, rng: &mut SamplerRng) -> Result<GeneratorState> {
        let seed = rng.gen_range(self.ranges.seed.clone());
        let multiplier = rng.gen_range(self.ranges.multiplier.clone());
        let modulus = rng.gen_range(self.ranges.modulus.clone());
        GeneratorState::new(seed, multiplier, modulus)
    }

    /// Draws `stream_count` independent streams of `count` values each.
    ///
    /// # Errors
    ///
    /// Returns [`LehmerError::InvalidParameters`] if `stream_count` is 0.
    pub fn sample(
        &self,
        rng: &mut SamplerRng,
        count: usize,
        stream_count: usize,
    ) -> Result<StreamSet> {
        if stream_count == 0 {
            return Err(LehmerError::invalid("stream_count", "must be at least 1"));
        }
        debug!(stream_count, count, rng_seed = rng.seed(), "Sampling Lehmer streams");

        let params = (0..stream_count)
            .map(|_| self.draw_params(rng))
            .collect::<Result<Vec<_>>>()?;
        for (j, p) in params.iter().enumerate() {
            trace!(
                stream = j,
                seed = p.seed(),
                multiplier = p.multiplier(),
                modulus = p.modulus(),
                "Drew stream parameters"
            );
        }

        let streams = generate_streams(&params, count);

        Ok(StreamSet {
            params,
            streams,
            len: count,
        })
    }

    /// Draws a single stream of `count` values.
    pub fn sample_one(&self, rng: &mut SamplerRng, count: usize) -> Result<Sequence> {
        let mut streams = self.sample(rng, count, 1)?.into_streams();
        Ok(streams.swap_remove(0))
    }
}

#[cfg(feature = "parallel")]
fn generate_streams(params: &[GeneratorState], count: usize) -> Vec<Sequence> {
    params
        .par_iter()
        .map(|state| state.iter().take(count).collect())
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn generate_streams(params: &[GeneratorState], count: usize) -> Vec<Sequence> {
    params
        .iter()
        .map(|state| state.iter().take(count).collect())
        .collect()
}
