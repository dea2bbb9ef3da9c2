//! Analyser configuration.

use lehmer_core::{LehmerError, Result};
use std::fmt;
use std::str::FromStr;

/// Default tolerance when comparing normalised values.
pub const DEFAULT_EPSILON: f64 = 1e-6;

/// What the quadrant test does with the unpaired last value of an
/// odd-length sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OddTailPolicy {
    /// Ignore the trailing value.
    #[default]
    Truncate,
    /// Fail with `InvalidParameters`.
    Reject,
}

impl FromStr for OddTailPolicy {
    type Err = LehmerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "truncate" => Ok(OddTailPolicy::Truncate),
            "reject" => Ok(OddTailPolicy::Reject),
            _ => Err(LehmerError::invalid(
                "odd_tail",
                format!("unknown policy '{}': expected truncate or reject", s),
            )),
        }
    }
}

impl fmt::Display for OddTailPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OddTailPolicy::Truncate => write!(f, "truncate"),
            OddTailPolicy::Reject => write!(f, "reject"),
        }
    }
}

/// Settings for [`SequenceAnalyzer`](crate::SequenceAnalyzer).
///
/// # Examples
///
/// ```rust
/// use lehmer_analysis::{AnalyzerConfig, OddTailPolicy, DEFAULT_EPSILON};
///
/// let config = AnalyzerConfig::default();
/// assert_eq!(config.epsilon, DEFAULT_EPSILON);
/// assert_eq!(config.odd_tail, OddTailPolicy::Truncate);
///
/// let bad = AnalyzerConfig { epsilon: 0.0, ..config };
/// assert!(bad.validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalyzerConfig {
    /// Two values closer than this are considered equal.
    pub epsilon: f64,
    /// Handling of an odd-length tail in the quadrant test.
    pub odd_tail: OddTailPolicy,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            epsilon: DEFAULT_EPSILON,
            odd_tail: OddTailPolicy::Truncate,
        }
    }
}

impl AnalyzerConfig {
    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LehmerError::InvalidParameters`] if `epsilon` is not a
    /// positive finite number.
    pub fn validate(&self) -> Result<()> {
        if !(self.epsilon > 0.0 && self.epsilon.is_finite()) {
            return Err(LehmerError::invalid(
                "epsilon",
                format!("{} must be positive and finite", self.epsilon),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.epsilon, 1e-6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_epsilon_validation() {
        for epsilon in [0.0, -1e-6, f64::NAN, f64::INFINITY] {
            let config = AnalyzerConfig {
                epsilon,
                ..AnalyzerConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(LehmerError::InvalidParameters {
                    name: "epsilon",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!(
            OddTailPolicy::from_str("Truncate").unwrap(),
            OddTailPolicy::Truncate
        );
        assert_eq!(
            OddTailPolicy::from_str("reject").unwrap(),
            OddTailPolicy::Reject
        );
        assert!(OddTailPolicy::from_str("pad").is_err());
        assert_eq!(OddTailPolicy::Reject.to_string(), "reject");
    }
}
