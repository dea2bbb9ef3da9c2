//! Quarter-circle (quadrant) test.
//!
//! Consecutive pairs `(v[2j], v[2j + 1])` are treated as points in
//! `[0, 1)^2`. For a good generator the fraction inside the unit quarter
//! circle approaches pi/4.

use crate::config::OddTailPolicy;
use lehmer_core::{LehmerError, Result};
use tracing::warn;

/// Outcome of the quadrant test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadrantCount {
    /// Pairs with `x^2 + y^2 <= 1`.
    pub inside: usize,
    /// Pairs evaluated.
    pub pairs: usize,
}

impl QuadrantCount {
    /// Fraction of pairs inside the quarter circle (0 when no pairs).
    pub fn ratio(&self) -> f64 {
        if self.pairs == 0 {
            return 0.0;
        }
        self.inside as f64 / self.pairs as f64
    }
}

/// Counts consecutive pairs inside the unit quarter circle.
///
/// # Errors
///
/// Returns [`LehmerError::InvalidParameters`] for an odd-length sequence
/// under [`OddTailPolicy::Reject`].
///
/// # Examples
///
/// ```rust
/// use lehmer_analysis::{quadrant_count, OddTailPolicy};
///
/// let values = [0.1, 0.2, 0.9, 0.9, 0.5];
/// let q = quadrant_count(&values, OddTailPolicy::Truncate).unwrap();
/// assert_eq!((q.inside, q.pairs), (1, 2));
///
/// assert!(quadrant_count(&values, OddTailPolicy::Reject).is_err());
/// ```
pub fn quadrant_count(values: &[f64], policy: OddTailPolicy) -> Result<QuadrantCount> {
    if values.len() % 2 == 1 {
        match policy {
            OddTailPolicy::Reject => {
                return Err(LehmerError::invalid(
                    "values",
                    format!("quadrant test needs an even length, got {}", values.len()),
                ));
            }
            OddTailPolicy::Truncate => {
                warn!(len = values.len(), "Ignoring unpaired trailing value");
            }
        }
    }

    let inside = values
        .chunks_exact(2)
        .filter(|pair| pair[0] * pair[0] + pair[1] * pair[1] <= 1.0)
        .count();

    Ok(QuadrantCount {
        inside,
        pairs: values.len() / 2,
    })
}
