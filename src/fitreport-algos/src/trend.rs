use std::fmt::Display;

use fitreport_types::LogRecord;

use crate::{
    AnalysisError,
    helpers::{distributions::student_t_two_sided, stats_math::mean},
};

pub struct TrendForecaster;

/// Least squares line through `(rank, steps)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendFit {
    pub slope: f64,
    pub intercept: f64,
    /// Pearson correlation coefficient
    pub r: f64,
    /// Two-sided p-value for a zero slope
    pub p_value: f64,
    pub stderr: f64,
    pub n: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationStrength {
    VeryStrong,
    Strong,
    Moderate,
    Weak,
    Negligible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Increasing,
    Decreasing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendForecast {
    pub fit: TrendFit,
    pub horizon_days: u32,
    pub predicted_steps: f64,
}

impl TrendForecaster {
    pub const DEFAULT_HORIZON_DAYS: u32 = 7;

    /// Logs in ascending date order. Same-day records keep their input order.
    pub fn chronological(logs: &[LogRecord]) -> Vec<&LogRecord> {
        let mut ordered = logs.iter().collect::<Vec<_>>();
        ordered.sort_by_key(|log| log.date);
        ordered
    }

    pub fn fit(logs: &[LogRecord]) -> Result<TrendFit, AnalysisError> {
        match logs.len() {
            0 => return Err(AnalysisError::EmptyLogSequence),
            1 => {
                return Err(AnalysisError::InsufficientData {
                    required: 2,
                    found: 1,
                });
            }
            _ => {}
        }

        let steps = Self::chronological(logs)
            .into_iter()
            .map(|log| log.steps as f64)
            .collect::<Vec<_>>();
        let ranks = (0..steps.len()).map(|i| i as f64).collect::<Vec<_>>();

        Ok(linear_regression(&ranks, &steps))
    }

    pub fn forecast(logs: &[LogRecord], horizon_days: u32) -> Result<TrendForecast, AnalysisError> {
        let fit = Self::fit(logs)?;
        let future_rank = (fit.n as f64) + f64::from(horizon_days);
        let predicted_steps = fit.slope * future_rank + fit.intercept;

        debug!(
            "step trend over {} logs: slope {:.2}, r {:.3}, +{}d -> {:.0}",
            fit.n, fit.slope, fit.r, horizon_days, predicted_steps
        );

        Ok(TrendForecast {
            fit,
            horizon_days,
            predicted_steps,
        })
    }
}

fn linear_regression(x: &[f64], y: &[f64]) -> TrendFit {
    let n = x.len();
    let x_mean = mean(x);
    let y_mean = mean(y);

    let (ss_x, ss_y, ss_xy) = x.iter().zip(y).fold((0.0, 0.0, 0.0), |(sx, sy, sxy), (xi, yi)| {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        (sx + dx * dx, sy + dy * dy, sxy + dx * dy)
    });

    let r = if ss_x == 0.0 || ss_y == 0.0 {
        0.0
    } else {
        (ss_xy / (ss_x * ss_y).sqrt()).clamp(-1.0, 1.0)
    };

    let slope = ss_xy / ss_x;
    let intercept = y_mean - slope * x_mean;

    let (p_value, stderr) = if n == 2 {
        // Two points always sit on the line.
        let p = if y[0] == y[1] { 1.0 } else { 0.0 };
        (p, 0.0)
    } else {
        let df = (n - 2) as f64;
        let t = r * (df / ((1.0 - r) * (1.0 + r))).sqrt();
        let stderr = ((1.0 - r * r) * ss_y / ss_x / df).sqrt();
        (student_t_two_sided(t, df), stderr)
    };

    TrendFit {
        slope,
        intercept,
        r,
        p_value,
        stderr,
        n,
    }
}

impl CorrelationStrength {
    pub fn from_r(r: f64) -> Self {
        let r = r.abs();
        if r > 0.9 {
            CorrelationStrength::VeryStrong
        } else if r > 0.7 {
            CorrelationStrength::Strong
        } else if r > 0.5 {
            CorrelationStrength::Moderate
        } else if r > 0.3 {
            CorrelationStrength::Weak
        } else {
            CorrelationStrength::Negligible
        }
    }
}

impl TrendDirection {
    /// A flat trend (r = 0) reads as decreasing.
    pub fn from_r(r: f64) -> Self {
        if r > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        }
    }
}

impl TrendForecast {
    pub fn strength(&self) -> CorrelationStrength {
        CorrelationStrength::from_r(self.fit.r)
    }

    pub fn direction(&self) -> TrendDirection {
        TrendDirection::from_r(self.fit.r)
    }
}

impl Display for CorrelationStrength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            CorrelationStrength::VeryStrong => "very strong",
            CorrelationStrength::Strong => "strong",
            CorrelationStrength::Moderate => "moderate",
            CorrelationStrength::Weak => "weak",
            CorrelationStrength::Negligible => "negligible",
        };
        f.write_str(s)
    }
}

impl Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TrendDirection::Increasing => "increasing",
            TrendDirection::Decreasing => "decreasing",
        })
    }
}

impl Display for TrendForecast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Predicted steps: {:.0}. Correlation: {:.3} → {} {} trend",
            self.predicted_steps,
            self.fit.r,
            self.strength(),
            self.direction()
        ))
    }
}
