//! # Derived Distributions
//!
//! Analytical transforms that turn uniform Lehmer streams into samples of
//! other distributions:
//!
//! | Distribution | Construction | Streams per value |
//! |--------------|--------------|-------------------|
//! | Uniform `[a, b)` | `a + (b - a) u` | 1 |
//! | Normal | Irwin-Hall sum, rescaled | `k` (default 6) |
//! | Exponential | inverse CDF `-ln(1 - u) / lambda` | 1 |
//! | Gamma (Erlang) | `-ln(prod u_j) / lambda` | `shape` |
//! | Triangular | `max` / `min` of two uniforms | 2 |
//! | Simpson | sum of two `U(a/2, b/2)` | 2 |
//!
//! ## Module Structure
//!
//! - [`transforms`]: Pure functions over already drawn streams
//! - [`DistributionSampler`]: Draws streams and applies a transform
//! - [`TriangleMode`]: Closed set of triangular variants
//! - [`Distribution`]: A distribution together with its parameters

mod mode;
mod sampler;
pub mod transforms;

pub use mode::TriangleMode;
pub use sampler::{DistributionSampler, DEFAULT_NORMAL_STREAMS};

use lehmer_core::{Result, Sequence};
use std::fmt;

/// A target distribution and its parameters.
///
/// # Examples
///
/// ```rust
/// use lehmer_sampling::distributions::{Distribution, DistributionSampler};
///
/// let dist = Distribution::Exponential { lambda: 2.0 };
/// assert_eq!(dist.expected_mean(), 0.5);
///
/// let mut sampler = DistributionSampler::from_seed(7);
/// let values = sampler.sample(&dist, 100).unwrap();
/// assert!(values.iter().all(|&x| x >= 0.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Distribution {
    /// Uniform on `[a, b)`.
    Uniform {
        /// Lower bound.
        a: f64,
        /// Upper bound (exclusive).
        b: f64,
    },
    /// Normal approximation from `streams` summed uniforms.
    Normal {
        /// Target mean.
        mean: f64,
        /// Target standard deviation.
        sigma: f64,
        /// Number of uniform streams summed per value.
        #[cfg_attr(feature = "serde", serde(default = "default_normal_streams"))]
        streams: usize,
    },
    /// Exponential with rate `lambda`.
    Exponential {
        /// Rate parameter.
        lambda: f64,
    },
    /// Erlang (integer-shape gamma) with rate `lambda`.
    Gamma {
        /// Rate parameter.
        lambda: f64,
        /// Number of exponential terms.
        shape: usize,
    },
    /// Triangular on `[a, b)`.
    Triangle {
        /// Lower bound.
        a: f64,
        /// Upper bound.
        b: f64,
        /// Which order statistic is kept.
        mode: TriangleMode,
    },
    /// Simpson (symmetric triangular) on `[a, b]`.
    Simpson {
        /// Lower bound.
        a: f64,
        /// Upper bound.
        b: f64,
    },
}

#[cfg(feature = "serde")]
fn default_normal_streams() -> usize {
    DEFAULT_NORMAL_STREAMS
}

impl Distribution {
    /// Short name of the distribution family.
    pub fn name(&self) -> &'static str {
        match self {
            Distribution::Uniform { .. } => "Uniform",
            Distribution::Normal { .. } => "Normal",
            Distribution::Exponential { .. } => "Exp",
            Distribution::Gamma { .. } => "Gamma",
            Distribution::Triangle { .. } => "Triangle",
            Distribution::Simpson { .. } => "Simpson",
        }
    }

    /// Draws `n` values of this distribution from `sampler`.
    ///
    /// # Errors
    ///
    /// Propagates parameter errors from the matching sampler method.
    pub fn sample(&self, sampler: &mut DistributionSampler, n: usize) -> Result<Sequence> {
        sampler.sample(self, n)
    }

    /// Theoretical mean of the target distribution.
    pub fn expected_mean(&self) -> f64 {
        match *self {
            Distribution::Uniform { a, b } | Distribution::Simpson { a, b } => (a + b) / 2.0,
            Distribution::Normal { mean, .. } => mean,
            Distribution::Exponential { lambda } => 1.0 / lambda,
            Distribution::Gamma { lambda, shape } => shape as f64 / lambda,
            Distribution::Triangle { a, b, mode } => match mode {
                TriangleMode::MaxOf => a + (b - a) * 2.0 / 3.0,
                TriangleMode::MinOf => a + (b - a) / 3.0,
            },
        }
    }

    /// Theoretical variance of the target distribution.
    pub fn expected_variance(&self) -> f64 {
        match *self {
            Distribution::Uniform { a, b } => (b - a).powi(2) / 12.0,
            Distribution::Normal { sigma, .. } => sigma * sigma,
            Distribution::Exponential { lambda } => 1.0 / (lambda * lambda),
            Distribution::Gamma { lambda, shape } => shape as f64 / (lambda * lambda),
            // Beta(2, 1) and Beta(1, 2) both have variance 1/18.
            Distribution::Triangle { a, b, .. } => (b - a).powi(2) / 18.0,
            Distribution::Simpson { a, b } => (b - a).powi(2) / 24.0,
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distribution::Uniform { a, b } => write!(f, "Uniform({}, {})", a, b),
            Distribution::Normal {
                mean,
                sigma,
                streams,
            } => write!(f, "Normal({}, {}; k={})", mean, sigma, streams),
            Distribution::Exponential { lambda } => write!(f, "Exp({})", lambda),
            Distribution::Gamma { lambda, shape } => write!(f, "Gamma({}, {})", lambda, shape),
            Distribution::Triangle { a, b, mode } => {
                write!(f, "Triangle({}, {}; {})", a, b, mode)
            }
            Distribution::Simpson { a, b } => write!(f, "Simpson({}, {})", a, b),
        }
    }
}
