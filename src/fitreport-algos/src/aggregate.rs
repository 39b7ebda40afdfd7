use std::fmt::Display;

use fitreport_types::LogRecord;

pub struct AggregateStatsCalculator;

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AggregateStats {
    pub total_calories: f64,
    pub total_steps: u64,
    /// Every log record counts as one completed workout.
    pub workouts: u64,
}

impl AggregateStatsCalculator {
    pub fn calculate(logs: &[LogRecord]) -> AggregateStats {
        if logs.is_empty() {
            return AggregateStats::default();
        }

        logs.iter().fold(AggregateStats::default(), |acc, log| AggregateStats {
            total_calories: acc.total_calories + log.calories,
            total_steps: acc.total_steps.saturating_add(log.steps),
            workouts: acc.workouts + 1,
        })
    }
}

impl AggregateStats {
    pub fn average_steps(&self) -> Option<f64> {
        if self.workouts == 0 {
            return None;
        }
        Some(self.total_steps as f64 / self.workouts as f64)
    }

    pub fn average_calories(&self) -> Option<f64> {
        if self.workouts == 0 {
            return None;
        }
        Some(self.total_calories / self.workouts as f64)
    }

    /// Average steps raised by `boost` (0.05 means +5%).
    pub fn step_target(&self, boost: f64) -> Option<f64> {
        self.average_steps().map(|avg| avg * (1.0 + boost))
    }
}

impl Display for AggregateStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Total calories burned: {}. Total steps: {} Total workouts completed: {}",
            self.total_calories, self.total_steps, self.workouts
        ))
    }
}
