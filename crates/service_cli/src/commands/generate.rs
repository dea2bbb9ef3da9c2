//! `lehmer generate`: analyse a sequence with explicit parameters.
//!
//! Also the engine behind `lab1`, which runs the same analysis on the
//! configured reference generator.

use crate::config::LabConfig;
use crate::report::{emit, GeneratorReport, OutputFormat, ReferenceValues, SequenceReport};
use crate::Result;
use lehmer_analysis::{quadrant_count, SequenceAnalyzer};
use lehmer_core::{GeneratorState, LehmerError};
use tracing::{info, warn};

/// Generates `count` values from `state` and prints the analysis.
pub fn run(
    config: &LabConfig,
    state: GeneratorState,
    count: usize,
    format: OutputFormat,
) -> Result<()> {
    let report = analyse(config, "Lehmer sequence analysis", state, count)?;
    emit(&report, format)
}

/// Builds the full generator report without printing it.
pub fn analyse(
    config: &LabConfig,
    title: &str,
    state: GeneratorState,
    count: usize,
) -> Result<GeneratorReport> {
    info!(
        seed = state.seed(),
        multiplier = state.multiplier(),
        modulus = state.modulus(),
        count,
        "Generating sequence"
    );
    let values: Vec<f64> = state.iter().take(count).collect();

    let analyzer = SequenceAnalyzer::new(config.analysis)?;
    let period = match analyzer.analyze(&values) {
        Ok(info) => Some(info),
        Err(LehmerError::PeriodNotFound(boundary)) => {
            warn!(
                %boundary,
                count,
                "Period {} not found; the cycle may be longer than the sequence",
                boundary
            );
            None
        }
        Err(e) => return Err(e.into()),
    };

    let quadrant = quadrant_count(&values, config.analysis.odd_tail)?;
    let two_k_over_n = if values.is_empty() {
        0.0
    } else {
        2.0 * quadrant.inside as f64 / values.len() as f64
    };

    let reference = ReferenceValues::default();
    let sequence = SequenceReport::new("Normalised sequence", &values, config.histogram_bins)?
        .with_expected(reference.mean, reference.variance);

    Ok(GeneratorReport {
        title: title.to_string(),
        params: state,
        reference,
        sequence,
        period,
        quadrant,
        two_k_over_n,
    })
}
