//! Period and aperiodic-length detection.
//!
//! Congruential generators are eventually periodic. The last value of the
//! sequence serves as an anchor: its first two earlier occurrences bound
//! one full period.

use crate::config::{AnalyzerConfig, DEFAULT_EPSILON};
use crate::quadrant::quadrant_count;
use lehmer_core::{LehmerError, PeriodBoundary, Result};
use tracing::debug;

/// Cycle structure and quadrant statistic of a raw sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PeriodInfo {
    /// Leading values before the sequence settles into its cycle.
    ///
    /// The scan stops at the first index `i` with `v[i] == v[i + period]`
    /// (within epsilon). A coincidental early match therefore shortens the
    /// result; this is a heuristic, not a proof of periodicity.
    pub aperiodic_length: usize,
    /// Cycle length; always positive.
    pub period: usize,
    /// Index of the first anchor match.
    pub period_start: usize,
    /// Pairs inside the unit quarter circle.
    pub quadrant_count: usize,
    /// Pairs evaluated by the quadrant test.
    pub quadrant_pairs: usize,
}

impl PeriodInfo {
    /// `quadrant_count / quadrant_pairs`; compare with pi/4.
    pub fn quadrant_ratio(&self) -> f64 {
        if self.quadrant_pairs == 0 {
            return 0.0;
        }
        self.quadrant_count as f64 / self.quadrant_pairs as f64
    }
}

/// Analyser for raw normalised Lehmer output.
///
/// # Examples
///
/// ```rust
/// use lehmer_analysis::{AnalyzerConfig, OddTailPolicy, SequenceAnalyzer};
///
/// let analyzer = SequenceAnalyzer::new(AnalyzerConfig {
///     epsilon: 1e-9,
///     odd_tail: OddTailPolicy::Reject,
/// })
/// .unwrap();
///
/// let info = analyzer
///     .analyze(&[0.9, 0.1, 0.2, 0.3, 0.2, 0.3, 0.2, 0.3])
///     .unwrap();
/// assert_eq!(info.period, 2);
/// assert_eq!(info.aperiodic_length, 2);
/// assert_eq!(info.quadrant_count, 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SequenceAnalyzer {
    config: AnalyzerConfig,
}

impl SequenceAnalyzer {
    /// Creates an analyser with a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LehmerError::InvalidParameters`] if the configuration fails
    /// [`AnalyzerConfig::validate`].
    pub fn new(config: AnalyzerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Computes period, aperiodic length and quadrant statistic.
    ///
    /// # Errors
    ///
    /// - [`LehmerError::PeriodNotFound`] with [`PeriodBoundary::Start`] if the
    ///   anchor never occurs earlier (including empty input), or with
    ///   [`PeriodBoundary::End`] if it occurs only once
    /// - [`LehmerError::InvalidParameters`] for odd input under
    ///   [`OddTailPolicy::Reject`](crate::OddTailPolicy::Reject)
    pub fn analyze(&self, values: &[f64]) -> Result<PeriodInfo> {
        let eps = self.config.epsilon;
        debug!(len = values.len(), epsilon = eps, "Analysing sequence");

        let quadrant = quadrant_count(values, self.config.odd_tail)?;

        let (period_start, period_end) = find_anchor_matches(values, eps)?;
        let period = period_end - period_start;

        let aperiodic_length = (0..period_start)
            .take_while(|&i| (values[i] - values[i + period]).abs() >= eps)
            .count();

        let info = PeriodInfo {
            aperiodic_length,
            period,
            period_start,
            quadrant_count: quadrant.inside,
            quadrant_pairs: quadrant.pairs,
        };
        debug!(
            period = info.period,
            aperiodic_length = info.aperiodic_length,
            quadrant_count = info.quadrant_count,
            "Sequence analysed"
        );
        Ok(info)
    }
}

/// Indices of the first two values (excluding the last) within `eps` of the
/// last value.
fn find_anchor_matches(values: &[f64], eps: f64) -> Result<(usize, usize)> {
    let (&anchor, head) = values
        .split_last()
        .ok_or(LehmerError::PeriodNotFound(PeriodBoundary::Start))?;

    let mut matches = head
        .iter()
        .enumerate()
        .filter(|&(_, &v)| (anchor - v).abs() < eps)
        .map(|(i, _)| i);

    let start = matches
        .next()
        .ok_or(LehmerError::PeriodNotFound(PeriodBoundary::Start))?;
    let end = matches
        .next()
        .ok_or(LehmerError::PeriodNotFound(PeriodBoundary::End))?;
    Ok((start, end))
}

/// Analyses `values` with the given epsilon and the default odd-tail policy.
///
/// # Examples
///
/// ```rust
/// use lehmer_analysis::{analyze, DEFAULT_EPSILON};
///
/// let info = analyze(&[5.0, 1.0, 2.0, 3.0, 2.0, 3.0, 2.0], DEFAULT_EPSILON).unwrap();
/// assert_eq!((info.aperiodic_length, info.period), (2, 2));
/// ```
pub fn analyze(values: &[f64], epsilon: f64) -> Result<PeriodInfo> {
    SequenceAnalyzer::new(AnalyzerConfig {
        epsilon,
        ..AnalyzerConfig::default()
    })?
    .analyze(values)
}

/// [`analyze`] with [`DEFAULT_EPSILON`].
pub fn analyze_default(values: &[f64]) -> Result<PeriodInfo> {
    analyze(values, DEFAULT_EPSILON)
}
