use std::fmt::Display;

use chrono::{NaiveDate, TimeDelta};
use fitreport_types::WorkoutPlan;
use rand::Rng;

use crate::{
    AggregateStats, AggregateStatsCalculator, AnalysisError, Effectiveness,
    PairedEffectivenessTester, TrendForecast, TrendForecaster, WorkoutSelector,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportConfig {
    pub horizon_days: u32,
    /// Fraction added on top of the average daily steps.
    pub step_target_boost: f64,
    pub min_duration_minutes: u32,
    pub max_duration_minutes: u32,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            horizon_days: TrendForecaster::DEFAULT_HORIZON_DAYS,
            step_target_boost: 0.05,
            min_duration_minutes: 15,
            max_duration_minutes: 60,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub name: String,
    pub next_workout: NaiveDate,
    pub step_target: f64,
    pub workout: &'static str,
    pub duration_minutes: u32,
    pub forecast: TrendForecast,
    pub effectiveness: Effectiveness,
    pub totals: AggregateStats,
}

#[derive(Debug, Default)]
pub struct RecommendationComposer {
    pub config: ReportConfig,
}

impl RecommendationComposer {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    /// Builds the full report for one user, or nothing at all.
    pub fn compose<R>(&self, plan: &WorkoutPlan, rng: &mut R) -> Result<Report, AnalysisError>
    where
        R: Rng,
    {
        let logs = plan.daily_logs.as_slice();
        let latest = plan.latest_date().ok_or(AnalysisError::EmptyLogSequence)?;

        let totals = AggregateStatsCalculator::calculate(logs);
        let step_target = totals
            .step_target(self.config.step_target_boost)
            .ok_or(AnalysisError::EmptyLogSequence)?;
        let forecast = TrendForecaster::forecast(logs, self.config.horizon_days)?;
        let effectiveness = PairedEffectivenessTester::evaluate(logs);

        let duration_minutes = self.draw_duration(rng);
        let workout = WorkoutSelector::select(&plan.goal, rng);

        let next_workout = latest + TimeDelta::days(1);
        debug!(
            "report for {}: {} logs, next workout {}",
            plan.name,
            logs.len(),
            next_workout
        );

        Ok(Report {
            name: plan.name.clone(),
            next_workout,
            step_target,
            workout,
            duration_minutes,
            forecast,
            effectiveness,
            totals,
        })
    }

    fn draw_duration<R>(&self, rng: &mut R) -> u32
    where
        R: Rng,
    {
        let min = self.config.min_duration_minutes;
        let max = self.config.max_duration_minutes;
        rng.random_range(min.min(max)..=max.max(min))
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} | Next workout: {} + Snapshot\n---------------------------\n",
            self.name,
            self.next_workout.format("%Y-%m-%d"),
        ))?;
        f.write_fmt(format_args!(
            "1. Walk {:.0} steps\n2. Today's workout: {}\n3. Duration: {} minutes\n",
            self.step_target, self.workout, self.duration_minutes,
        ))?;
        f.write_fmt(format_args!(
            "4. Next week step prediction: {}\n5. Program effectiveness prediction: {}\n6. Stats: {}\n",
            self.forecast, self.effectiveness, self.totals,
        ))?;
        Ok(())
    }
}
