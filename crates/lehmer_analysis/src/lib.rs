//! # lehmer_analysis: Analysis Layer
//!
//! ## Layer 2 Role
//!
//! lehmer_analysis inspects raw normalised generator output:
//! - Period and aperiodic-length detection ([`SequenceAnalyzer`], [`analyze`])
//! - The quarter-circle pair test ([`quadrant_count`])
//!
//! ## Usage Example
//!
//! ```rust
//! use lehmer_analysis::analyze_default;
//! use lehmer_core::generate;
//!
//! // 3 is a primitive root modulo 7, so the cycle has length 6.
//! let values = generate(1, 3, 7, 20).unwrap();
//! let info = analyze_default(&values).unwrap();
//! assert_eq!(info.period, 6);
//! assert_eq!(info.aperiodic_length, 0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `PeriodInfo`, `QuadrantCount` and `AnalyzerConfig`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

mod config;
mod period;
mod quadrant;

pub use config::{AnalyzerConfig, OddTailPolicy, DEFAULT_EPSILON};
pub use period::{analyze, analyze_default, PeriodInfo, SequenceAnalyzer};
pub use quadrant::{quadrant_count, QuadrantCount};
