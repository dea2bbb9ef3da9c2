//! Shared types: error enums and the sequence alias.

pub mod error;

pub use error::{LehmerError, PeriodBoundary, Result};

/// Ordered list of generated values; index order is step order.
pub type Sequence = Vec<f64>;
