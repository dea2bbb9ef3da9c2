//! # lehmer_sampling: Sampling Layer
//!
//! ## Layer 2 Role
//!
//! lehmer_sampling builds on the generator in `lehmer_core` to provide:
//! - A seeded random source for stream parameters ([`rng::SamplerRng`])
//! - Independent, index-aligned Lehmer streams ([`streams::MultiStreamSampler`])
//! - Derived distributions: uniform, normal, exponential, gamma, triangular
//!   and Simpson ([`distributions`])
//!
//! ## Reproducibility
//!
//! Randomness is confined to the one-time draw of `(seed, multiplier, modulus)`
//! per stream. The random source is always an explicit argument, so a fixed
//! seed reproduces every sequence exactly.
//!
//! ## Usage Example
//!
//! ```rust
//! use lehmer_sampling::distributions::{DistributionSampler, DEFAULT_NORMAL_STREAMS};
//!
//! let mut sampler = DistributionSampler::from_seed(12345);
//! let normal = sampler.normal(3.0, 1.0, 10_000, DEFAULT_NORMAL_STREAMS).unwrap();
//!
//! let mean = normal.iter().sum::<f64>() / normal.len() as f64;
//! assert!((mean - 3.0).abs() < 0.2);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): Generate independent streams on the rayon thread pool
//! - `serde`: Enable serialisation for `Distribution` and `TriangleMode`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod distributions;
pub mod rng;
pub mod streams;

// Re-export commonly used items for convenience
pub use distributions::{Distribution, DistributionSampler, TriangleMode, DEFAULT_NORMAL_STREAMS};
pub use rng::SamplerRng;
pub use streams::{
    MultiStreamSampler, StreamParamRanges, StreamSet, MODULUS_RANGE, MULTIPLIER_RANGE, SEED_RANGE,
};
