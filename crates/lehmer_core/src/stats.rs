//! Summary statistics and histogram binning for finished sequences.
//!
//! These are the numbers a reporter or plotter consumes: population mean,
//! variance and standard deviation, plus fixed-width bin counts.

use crate::types::{LehmerError, Result};
use num_traits::Float;

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean<T: Float>(values: &[T]) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let sum = values.iter().fold(T::zero(), |acc, &x| acc + x);
    T::from(values.len()).map(|n| sum / n)
}

/// Population variance (divides by `n`), or `None` for an empty slice.
pub fn variance<T: Float>(values: &[T]) -> Option<T> {
    let avg = mean(values)?;
    let sum_sq = values
        .iter()
        .fold(T::zero(), |acc, &x| acc + (x - avg) * (x - avg));
    T::from(values.len()).map(|n| sum_sq / n)
}

/// Mean, variance and standard deviation of a sequence.
///
/// # Examples
///
/// ```rust
/// use lehmer_core::stats::Summary;
///
/// let summary = Summary::of(&[1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(summary.mean, 2.5);
/// assert_eq!(summary.variance, 1.25);
/// assert!((summary.sigma - 1.25_f64.sqrt()).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Summary {
    /// Sample mean.
    pub mean: f64,
    /// Population variance.
    pub variance: f64,
    /// Square root of the variance.
    pub sigma: f64,
}

impl Summary {
    /// Computes the summary of `values`.
    ///
    /// # Errors
    ///
    /// Returns [`LehmerError::InvalidParameters`] for an empty slice.
    pub fn of(values: &[f64]) -> Result<Self> {
        let mean =
            mean(values).ok_or_else(|| LehmerError::invalid("values", "must not be empty"))?;
        let variance = variance(values).unwrap_or(0.0);
        Ok(Self {
            mean,
            variance,
            sigma: variance.sqrt(),
        })
    }
}

/// Fixed-width histogram over the observed range of a sequence.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Histogram {
    /// Lower edge of the first bin.
    pub min: f64,
    /// Upper edge of the last bin (inclusive).
    pub max: f64,
    /// Number of values in each bin.
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Width of every bin.
    pub fn bin_width(&self) -> f64 {
        (self.max - self.min) / self.counts.len() as f64
    }

    /// The `counts.len() + 1` bin edges in ascending order.
    pub fn edges(&self) -> Vec<f64> {
        let width = self.bin_width();
        (0..=self.counts.len())
            .map(|i| self.min + width * i as f64)
            .collect()
    }

    /// Total number of binned values.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

/// Bins `values` into `bins` equal-width bins spanning `[min, max]`.
///
/// The last bin is closed on the right. When every value is equal the
/// range is widened to `[x - 0.5, x + 0.5]`. Non-finite values are skipped.
///
/// # Errors
///
/// Returns [`LehmerError::InvalidParameters`] if `bins` is 0 or `values`
/// holds no finite value.
pub fn histogram(values: &[f64], bins: usize) -> Result<Histogram> {
    if bins == 0 {
        return Err(LehmerError::invalid("bins", "must be at least 1"));
    }
    let (mut min, mut max) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        });
    if min > max {
        return Err(LehmerError::invalid("values", "no finite values to bin"));
    }
    if min == max {
        min -= 0.5;
        max += 0.5;
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for &v in values.iter().filter(|v| v.is_finite()) {
        let idx = (((v - min) / width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Ok(Histogram { min, max, counts })
}
