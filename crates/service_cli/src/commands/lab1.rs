//! `lehmer lab1`: the reference generator from the first lab.

use crate::commands::generate;
use crate::config::LabConfig;
use crate::report::{emit, OutputFormat};
use crate::Result;

/// Analyses the configured lab 1 generator and prints the report.
pub fn run(config: &LabConfig, format: OutputFormat) -> Result<()> {
    let state = config.lab1.state()?;
    let report = generate::analyse(config, "Lab 1: Lehmer generator", state, config.lab1.count)?;
    emit(&report, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_4;

    #[test]
    fn test_reference_generator() {
        let config = LabConfig::default();
        let report =
            generate::analyse(&config, "lab1", config.lab1.state().unwrap(), config.lab1.count)
                .unwrap();

        let period = report.period.unwrap();
        assert_eq!(period.period, 286_458);
        assert_eq!(period.aperiodic_length, 0);
        assert_abs_diff_eq!(report.two_k_over_n, FRAC_PI_4, epsilon = 0.02);
        assert_abs_diff_eq!(report.sequence.summary.mean, 0.5, epsilon = 0.01);
        assert_abs_diff_eq!(report.sequence.summary.variance, 1.0 / 12.0, epsilon = 0.005);
        assert_eq!(report.sequence.histogram.counts.len(), 20);
        assert_eq!(report.sequence.histogram.total(), 1_000_000);
    }
}
