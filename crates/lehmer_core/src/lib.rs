//! # lehmer_core: Foundation Layer
//!
//! ## Layer 1 (Foundation) Role
//!
//! lehmer_core is the bottom layer of the workspace, providing:
//! - The Lehmer generator: `GeneratorState`, `step`, `generate`, `LehmerIter` (`generator`)
//! - Error types: `LehmerError`, `PeriodBoundary` (`types::error`)
//! - Summary statistics and histogram binning (`stats`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 depends on no other workspace crate, with minimal external dependencies:
//! - num-traits: Generic float statistics
//! - thiserror: Error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use lehmer_core::generator::generate;
//! use lehmer_core::stats::Summary;
//!
//! let values = generate(15, 1643, 12_031_278, 10_000).unwrap();
//! let summary = Summary::of(&values).unwrap();
//!
//! // A good generator is close to U(0, 1): mean 1/2, variance 1/12.
//! assert!((summary.mean - 0.5).abs() < 0.05);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `GeneratorState`, `Summary` and `Histogram`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod generator;
pub mod stats;
pub mod types;

pub use generator::{generate, step, GeneratorState, LehmerIter};
pub use types::{LehmerError, PeriodBoundary, Result, Sequence};
