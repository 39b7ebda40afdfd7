use std::fmt::Display;

use fitreport_types::LogRecord;

use crate::{
    AnalysisError,
    helpers::{
        distributions::student_t_two_sided,
        stats_math::{mean, sample_variance},
    },
};

/// Paired t-test of each weight against the next one.
///
/// Pairs follow the order the logs were recorded in, not their dates, so
/// "before" is always the earlier-arriving record.
pub struct PairedEffectivenessTester;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairedTestResult {
    pub t_statistic: f64,
    pub p_value: f64,
    pub pairs: usize,
    /// Mean of `before - after`; positive means weight went down.
    pub mean_difference: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Significance {
    VerySignificant,
    Significant,
    MarginallySignificant,
    NotSignificant,
}

/// Outcome shown in a report. Too little data is a placeholder, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effectiveness {
    Tested(PairedTestResult),
    InsufficientData,
}

impl PairedEffectivenessTester {
    pub const MIN_LOGS: usize = 2;

    pub fn pairs(logs: &[LogRecord]) -> (Vec<f64>, Vec<f64>) {
        logs.windows(2).map(|w| (w[0].weight, w[1].weight)).unzip()
    }

    pub fn test(logs: &[LogRecord]) -> Result<PairedTestResult, AnalysisError> {
        if logs.len() < Self::MIN_LOGS {
            return Err(AnalysisError::InsufficientData {
                required: Self::MIN_LOGS,
                found: logs.len(),
            });
        }

        let (before, after) = Self::pairs(logs);
        let differences = before
            .iter()
            .zip(&after)
            .map(|(b, a)| b - a)
            .collect::<Vec<_>>();

        Ok(paired_t_test(&differences))
    }

    pub fn evaluate(logs: &[LogRecord]) -> Effectiveness {
        match Self::test(logs) {
            Ok(result) => Effectiveness::Tested(result),
            Err(error) => {
                debug!("skipping effectiveness test: {}", error);
                Effectiveness::InsufficientData
            }
        }
    }
}

fn paired_t_test(differences: &[f64]) -> PairedTestResult {
    let pairs = differences.len();
    let mean_difference = mean(differences);

    let (t_statistic, p_value) = match sample_variance(differences) {
        // A single pair has no spread to test against.
        None => (f64::NAN, f64::NAN),
        Some(variance) if variance == 0.0 => {
            if mean_difference == 0.0 {
                (f64::NAN, f64::NAN)
            } else {
                (mean_difference.signum() * f64::INFINITY, 0.0)
            }
        }
        Some(variance) => {
            let std_err = (variance / pairs as f64).sqrt();
            let t = mean_difference / std_err;
            (t, student_t_two_sided(t, (pairs - 1) as f64))
        }
    };

    PairedTestResult {
        t_statistic,
        p_value,
        pairs,
        mean_difference,
    }
}

impl Significance {
    pub fn from_p(p: f64) -> Self {
        if p < 0.01 {
            Significance::VerySignificant
        } else if p < 0.05 {
            Significance::Significant
        } else if p < 0.10 {
            Significance::MarginallySignificant
        } else {
            Significance::NotSignificant
        }
    }
}

impl PairedTestResult {
    pub fn significance(&self) -> Significance {
        Significance::from_p(self.p_value)
    }
}

impl Display for Significance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Significance::VerySignificant => "very significant",
            Significance::Significant => "significant",
            Significance::MarginallySignificant => "marginally significant",
            Significance::NotSignificant => "not significant",
        })
    }
}

impl Display for PairedTestResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "t_stat: {:.3}. p_val: {:.3} → {}",
            self.t_statistic,
            self.p_value,
            self.significance()
        ))
    }
}

impl Display for Effectiveness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effectiveness::Tested(result) => Display::fmt(result, f),
            Effectiveness::InsufficientData => f.write_str("Not enough data for t-test."),
        }
    }
}
