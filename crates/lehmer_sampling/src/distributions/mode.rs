//! Triangular distribution variants.

use lehmer_core::LehmerError;
use std::fmt;
use std::str::FromStr;

/// Which order statistic of two uniforms the triangular sampler keeps.
///
/// The legacy tags `"first"` and `"second"` parse to `MaxOf` and `MinOf`.
///
/// # Examples
///
/// ```rust
/// use lehmer_sampling::distributions::TriangleMode;
///
/// assert_eq!("first".parse::<TriangleMode>().unwrap(), TriangleMode::MaxOf);
/// assert_eq!("min_of".parse::<TriangleMode>().unwrap(), TriangleMode::MinOf);
/// assert!("third".parse::<TriangleMode>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TriangleMode {
    /// `max(u0, u1)`: density rising towards `b`.
    #[cfg_attr(feature = "serde", serde(alias = "first", alias = "max"))]
    MaxOf,
    /// `min(u0, u1)`: density falling away from `a`.
    #[cfg_attr(feature = "serde", serde(alias = "second", alias = "min"))]
    MinOf,
}

impl TriangleMode {
    /// Combines two uniform draws according to the mode.
    #[inline]
    pub fn combine(self, u0: f64, u1: f64) -> f64 {
        match self {
            TriangleMode::MaxOf => u0.max(u1),
            TriangleMode::MinOf => u0.min(u1),
        }
    }

    /// Canonical tag of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            TriangleMode::MaxOf => "max_of",
            TriangleMode::MinOf => "min_of",
        }
    }
}

impl FromStr for TriangleMode {
    type Err = LehmerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" | "max" | "max_of" => Ok(TriangleMode::MaxOf),
            "second" | "min" | "min_of" => Ok(TriangleMode::MinOf),
            _ => Err(LehmerError::invalid(
                "mode",
                format!("unknown triangle mode '{}'", s),
            )),
        }
    }
}

impl fmt::Display for TriangleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_parsing() {
        assert_eq!(TriangleMode::from_str("first").unwrap(), TriangleMode::MaxOf);
        assert_eq!(TriangleMode::from_str("SECOND").unwrap(), TriangleMode::MinOf);
        assert_eq!(TriangleMode::from_str("max").unwrap(), TriangleMode::MaxOf);
        assert_eq!(TriangleMode::from_str("min_of").unwrap(), TriangleMode::MinOf);
    }

    #[test]
    fn test_unknown_mode_fails() {
        assert!(matches!(
            TriangleMode::from_str("third"),
            Err(LehmerError::InvalidParameters { name: "mode", .. })
        ));
    }

    #[test]
    fn test_combine() {
        assert_eq!(TriangleMode::MaxOf.combine(0.2, 0.7), 0.7);
        assert_eq!(TriangleMode::MinOf.combine(0.2, 0.7), 0.2);
    }

    #[test]
    fn test_display_round_trips() {
        for mode in [TriangleMode::MaxOf, TriangleMode::MinOf] {
            assert_eq!(mode.to_string().parse::<TriangleMode>().unwrap(), mode);
        }
    }
}
