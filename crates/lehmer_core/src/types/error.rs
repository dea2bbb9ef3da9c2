//! Error types for structured error handling.
//!
//! This module provides:
//! - `LehmerError`: Errors from generation, sampling and sequence analysis
//! - `PeriodBoundary`: Which end of the period the analyser failed to locate

use std::fmt;
use thiserror::Error;

/// Which boundary of a period could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodBoundary {
    /// No value before the anchor matched it.
    Start,
    /// The anchor matched once, but never a second time.
    End,
}

impl fmt::Display for PeriodBoundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodBoundary::Start => write!(f, "start"),
            PeriodBoundary::End => write!(f, "end"),
        }
    }
}

/// Categorised errors for the Lehmer workspace.
///
/// Every failure is an input or configuration error; none of them are
/// transient, so callers should never retry.
///
/// # Variants
/// - `InvalidParameters`: A generator precondition or sampler argument was violated
/// - `PeriodNotFound`: The analyser found no repeating anchor in the sample window
///
/// # Examples
/// ```
/// use lehmer_core::types::{LehmerError, PeriodBoundary};
///
/// let err = LehmerError::invalid("multiplier", "must be less than modulus");
/// assert_eq!(
///     format!("{}", err),
///     "Invalid parameter 'multiplier': must be less than modulus"
/// );
///
/// let err = LehmerError::PeriodNotFound(PeriodBoundary::End);
/// assert_eq!(format!("{}", err), "Period end not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LehmerError {
    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameters {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// The anchor value did not repeat within the analysed sequence.
    #[error("Period {0} not found")]
    PeriodNotFound(PeriodBoundary),
}

impl LehmerError {
    /// Shorthand for [`LehmerError::InvalidParameters`].
    pub fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        LehmerError::InvalidParameters {
            name,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, LehmerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameters_display() {
        let err = LehmerError::invalid("lambda", "must be non-zero");
        assert!(err.to_string().contains("lambda"));
        assert!(err.to_string().contains("must be non-zero"));
    }

    #[test]
    fn test_period_not_found_display() {
        assert_eq!(
            LehmerError::PeriodNotFound(PeriodBoundary::Start).to_string(),
            "Period start not found"
        );
        assert_eq!(
            LehmerError::PeriodNotFound(PeriodBoundary::End).to_string(),
            "Period end not found"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            LehmerError::invalid("mode", "third"),
            LehmerError::InvalidParameters {
                name: "mode",
                reason: "third".to_string(),
            }
        );
    }
}
