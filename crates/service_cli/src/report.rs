//! Console and JSON rendering of lab results.

use crate::Result;
use clap::ValueEnum;
use lehmer_analysis::{PeriodInfo, QuadrantCount};
use lehmer_core::stats::{histogram, Histogram, Summary};
use lehmer_core::GeneratorState;
use serde::Serialize;
use std::f64::consts::FRAC_PI_4;

/// Width in characters of the longest histogram bar.
pub const BAR_WIDTH: usize = 50;

const RULE: &str = "========================================";

/// How reports are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable tables and text histograms
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Reports that can be printed as a table.
pub trait Render {
    fn print_table(&self);
}

/// Writes `report` in the requested format.
pub fn emit<R: Render + Serialize>(report: &R, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => report.print_table(),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(report)?),
    }
    Ok(())
}

/// Summary and histogram of one sequence.
#[derive(Debug, Clone, Serialize)]
pub struct SequenceReport {
    pub label: String,
    pub len: usize,
    pub summary: Summary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_mean: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_variance: Option<f64>,
    pub histogram: Histogram,
}

impl SequenceReport {
    pub fn new(label: impl Into<String>, values: &[f64], bins: usize) -> Result<Self> {
        Ok(Self {
            label: label.into(),
            len: values.len(),
            summary: Summary::of(values)?,
            expected_mean: None,
            expected_variance: None,
            histogram: histogram(values, bins)?,
        })
    }

    pub fn with_expected(mut self, mean: f64, variance: f64) -> Self {
        self.expected_mean = Some(mean);
        self.expected_variance = Some(variance);
        self
    }
}

impl Render for SequenceReport {
    fn print_table(&self) {
        println!("{} (n = {})", self.label, self.len);
        println!("----------------------------------------");
        println!("{:<12} {:>14} {:>14}", "", "sample", "expected");
        print_stat_row("mean", self.summary.mean, self.expected_mean);
        print_stat_row("variance", self.summary.variance, self.expected_variance);
        print_stat_row(
            "sigma",
            self.summary.sigma,
            self.expected_variance.map(f64::sqrt),
        );
        println!();
        for line in render_histogram(&self.histogram, BAR_WIDTH) {
            println!("{}", line);
        }
        println!();
    }
}

fn print_stat_row(name: &str, sample: f64, expected: Option<f64>) {
    match expected {
        Some(e) => println!("{:<12} {:>14.6} {:>14.6}", name, sample, e),
        None => println!("{:<12} {:>14.6} {:>14}", name, sample, "-"),
    }
}

/// One line per bin: `[lo, hi) | ##### count`.
pub fn render_histogram(hist: &Histogram, width: usize) -> Vec<String> {
    let peak = hist.counts.iter().copied().max().unwrap_or(0);
    let edges = hist.edges();
    hist.counts
        .iter()
        .zip(edges.windows(2))
        .map(|(&count, edge)| {
            let bar = if peak == 0 {
                0
            } else {
                (count * width + peak / 2) / peak
            };
            format!(
                "[{:>10.4}, {:>10.4}) | {:<width$} {}",
                edge[0],
                edge[1],
                "#".repeat(bar),
                count,
                width = width
            )
        })
        .collect()
}

/// Moments of U(0, 1) and the quarter-circle ratio a good generator approaches.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReferenceValues {
    pub mean: f64,
    pub variance: f64,
    pub sigma: f64,
    pub quarter_pi: f64,
}

impl Default for ReferenceValues {
    fn default() -> Self {
        Self {
            mean: 0.5,
            variance: 1.0 / 12.0,
            sigma: 1.0 / 12.0_f64.sqrt(),
            quarter_pi: FRAC_PI_4,
        }
    }
}

/// Full analysis of one raw Lehmer sequence.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratorReport {
    pub title: String,
    pub params: GeneratorState,
    pub reference: ReferenceValues,
    pub sequence: SequenceReport,
    /// `None` when the sequence is too short to contain a full cycle.
    pub period: Option<PeriodInfo>,
    pub quadrant: QuadrantCount,
    /// `2K / N` with `K` pairs inside the quarter circle and `N` values.
    pub two_k_over_n: f64,
}

impl Render for GeneratorReport {
    fn print_table(&self) {
        let reference = &self.reference;
        println!("{}", RULE);
        println!("{}", self.title);
        println!("{}", RULE);
        println!(
            "r0 = {}, a = {}, m = {}, n = {}",
            self.params.seed(),
            self.params.multiplier(),
            self.params.modulus(),
            self.sequence.len
        );
        println!();
        println!("Reference values for U(0, 1):");
        println!("  mean        {:.6}", reference.mean);
        println!("  variance    {:.6}  (1/12)", reference.variance);
        println!("  sigma       {:.6}  (1/sqrt(12))", reference.sigma);
        println!("  pi/4        {:.6}", reference.quarter_pi);
        println!();
        println!("Cycle structure:");
        match &self.period {
            Some(info) => {
                println!("  aperiodic length  {}", info.aperiodic_length);
                println!("  period            {}", info.period);
            }
            None => println!("  period not found within {} values", self.sequence.len),
        }
        println!(
            "  2K/N              {:.6}  (K = {} of {} pairs)",
            self.two_k_over_n, self.quadrant.inside, self.quadrant.pairs
        );
        println!();
        self.sequence.print_table();
    }
}

/// Samples of every configured distribution from one seeded run.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionsReport {
    pub seed: u64,
    pub samples: usize,
    pub distributions: Vec<SequenceReport>,
}

impl Render for DistributionsReport {
    fn print_table(&self) {
        println!("{}", RULE);
        println!("Lab 2: derived distributions");
        println!("{}", RULE);
        println!("seed = {}, n = {}", self.seed, self.samples);
        println!();
        for report in &self.distributions {
            report.print_table();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sequence_report() {
        let report = SequenceReport::new("Uniform(0, 1)", &[0.1, 0.2, 0.3, 0.4], 2)
            .unwrap()
            .with_expected(0.5, 1.0 / 12.0);
        assert_eq!(report.len, 4);
        assert_relative_eq!(report.summary.mean, 0.25, epsilon = 1e-12);
        assert_eq!(report.histogram.counts, vec![2, 2]);
        assert_eq!(report.expected_mean, Some(0.5));
    }

    #[test]
    fn test_empty_sequence_is_an_error() {
        assert!(SequenceReport::new("empty", &[], 10).is_err());
    }

    #[test]
    fn test_histogram_bars_scale_to_peak() {
        let hist = Histogram {
            min: 0.0,
            max: 1.0,
            counts: vec![10, 5, 0],
        };
        let lines = render_histogram(&hist, 10);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].matches('#').count(), 10);
        assert_eq!(lines[1].matches('#').count(), 5);
        assert_eq!(lines[2].matches('#').count(), 0);
        assert!(lines[0].ends_with(" 10"));
    }

    #[test]
    fn test_json_field_names() {
        let report = SequenceReport::new("x", &[0.5, 0.5], 1).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["len"], 2);
        assert_eq!(json["summary"]["variance"], 0.0);
        assert!(json.get("expected_mean").is_none());
    }

    #[test]
    fn test_reference_values() {
        let reference = ReferenceValues::default();
        assert_relative_eq!(reference.variance, 0.083_333_333, epsilon = 1e-9);
        assert_relative_eq!(reference.sigma * reference.sigma, reference.variance, epsilon = 1e-12);
    }
}
