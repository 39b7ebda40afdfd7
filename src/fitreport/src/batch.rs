use std::io::Write;

use fitreport_algos::{
    AggregateStatsCalculator, AnalysisError, GroupVarianceAnalyzer, PairedEffectivenessTester,
    RecommendationComposer, ReportConfig, TrendForecaster,
};
use fitreport_types::WorkoutPlan;
use rand::Rng;

/// What to print for each user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Analysis {
    Report(ReportConfig),
    Forecast { horizon_days: u32 },
    Calories,
    Effectiveness,
    Stats,
}

impl Analysis {
    pub fn run<R>(&self, plan: &WorkoutPlan, rng: &mut R) -> Result<String, AnalysisError>
    where
        R: Rng,
    {
        let logs = plan.daily_logs.as_slice();
        match self {
            Analysis::Report(config) => RecommendationComposer::new(*config)
                .compose(plan, rng)
                .map(|report| report.to_string()),
            Analysis::Forecast { horizon_days } => TrendForecaster::forecast(logs, *horizon_days)
                .map(|forecast| format!("{}: {}", plan.name, forecast)),
            Analysis::Calories => GroupVarianceAnalyzer::analyze(logs)
                .map(|anova| format!("{}: {}", plan.name, anova)),
            Analysis::Effectiveness => Ok(format!(
                "{}: {}",
                plan.name,
                PairedEffectivenessTester::evaluate(logs)
            )),
            Analysis::Stats => Ok(format!(
                "{}: {}",
                plan.name,
                AggregateStatsCalculator::calculate(logs)
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Runs one analysis over every user. A failing user is logged and skipped.
pub struct BatchRunner<R> {
    analysis: Analysis,
    rng: R,
}

impl<R> BatchRunner<R>
where
    R: Rng,
{
    pub fn new(analysis: Analysis, rng: R) -> Self {
        Self { analysis, rng }
    }

    pub fn run<W>(&mut self, plans: &[WorkoutPlan], out: &mut W) -> std::io::Result<BatchSummary>
    where
        W: Write,
    {
        let mut summary = BatchSummary::default();

        for plan in plans {
            match self.analysis.run(plan, &mut self.rng) {
                Ok(text) => {
                    writeln!(out, "{}", text)?;
                    summary.succeeded += 1;
                }
                Err(error) => {
                    error!("skipping {}: {}", plan.name, error);
                    summary.failed += 1;
                }
            }
        }

        debug!(
            "batch finished: {} ok, {} failed",
            summary.succeeded, summary.failed
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, TimeDelta};
    use fitreport_types::{Goal, LogRecord, WorkoutPlan};
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    fn plan(name: &str, entries: &[(u64, f64, &str, f64)]) -> WorkoutPlan {
        let base = NaiveDate::from_ymd_opt(2025, 5, 1).unwrap();
        let logs = entries
            .iter()
            .enumerate()
            .map(|(i, &(steps, calories, workout, weight))| {
                LogRecord::new(base + TimeDelta::days(i as i64), steps, calories, workout, weight)
            })
            .collect();
        WorkoutPlan::new(name, 30, Goal::Cardio, logs)
    }

    fn users() -> Vec<WorkoutPlan> {
        vec![
            plan(
                "Alice",
                &[
                    (5000, 300.0, "run", 70.0),
                    (5500, 320.0, "swim", 69.6),
                    (6000, 350.0, "run", 69.1),
                ],
            ),
            plan("Bob", &[]),
            plan("Cleo", &[(4000, 200.0, "yoga", 55.0)]),
        ]
    }

    fn run(analysis: Analysis) -> (BatchSummary, String) {
        let mut out = Vec::new();
        let summary = BatchRunner::new(analysis, StdRng::seed_from_u64(9))
            .run(&users(), &mut out)
            .unwrap();
        (summary, String::from_utf8(out).unwrap())
    }

    #[test]
    fn reports_skip_failing_users() {
        let (summary, out) = run(Analysis::Report(ReportConfig::default()));
        assert_eq!(
            summary,
            BatchSummary {
                succeeded: 1,
                failed: 2
            }
        );
        assert!(out.starts_with("Alice | Next workout: 2025-05-04 + Snapshot\n"));
        assert!(!out.contains("Bob"));
        assert!(!out.contains("Cleo"));
        // blank line after each report
        assert!(out.ends_with("\n\n"));
    }

    #[test]
    fn stats_never_fail() {
        let (summary, out) = run(Analysis::Stats);
        assert_eq!(summary.failed, 0);
        let lines = out.lines().collect::<Vec<_>>();
        assert_eq!(
            lines,
            vec![
                "Alice: Total calories burned: 970. Total steps: 16500 Total workouts completed: 3",
                "Bob: Total calories burned: 0. Total steps: 0 Total workouts completed: 0",
                "Cleo: Total calories burned: 200. Total steps: 4000 Total workouts completed: 1",
            ]
        );
    }

    #[test]
    fn effectiveness_prints_sentinel() {
        let (summary, out) = run(Analysis::Effectiveness);
        assert_eq!(summary.succeeded, 3);
        assert!(out.contains("Bob: Not enough data for t-test."));
        assert!(out.contains("Cleo: Not enough data for t-test."));
        assert!(out.contains("Alice: t_stat: "));
    }

    #[test]
    fn calories_need_two_types() {
        let (summary, out) = run(Analysis::Calories);
        assert_eq!(summary.succeeded, 1);
        assert_eq!(summary.failed, 2);
        assert!(out.starts_with("Alice: F_stat: "));
    }

    #[test]
    fn forecast_uses_horizon() {
        let (summary, out) = run(Analysis::Forecast { horizon_days: 1 });
        assert_eq!(summary.succeeded, 1);
        // 5000 + 500 * (3 + 1)
        assert!(out.starts_with("Alice: Predicted steps: 7000."));
    }
}
