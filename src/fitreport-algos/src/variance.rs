use std::fmt::Display;

use fitreport_types::LogRecord;

use crate::{
    AnalysisError,
    helpers::{
        distributions::f_survival,
        stats_math::{mean, sum_sq_dev},
    },
};

/// One-way ANOVA of calories burned, grouped by workout type.
pub struct GroupVarianceAnalyzer;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnovaResult {
    pub f_statistic: f64,
    pub p_value: f64,
    pub df_between: usize,
    pub df_within: usize,
}

impl GroupVarianceAnalyzer {
    /// Calories per workout type, in order of first appearance.
    pub fn groups(logs: &[LogRecord]) -> Vec<(&str, Vec<f64>)> {
        let mut groups: Vec<(&str, Vec<f64>)> = Vec::new();
        for log in logs {
            match groups
                .iter_mut()
                .find(|(workout, _)| *workout == log.workout_type)
            {
                Some((_, calories)) => calories.push(log.calories),
                None => groups.push((log.workout_type.as_str(), vec![log.calories])),
            }
        }
        groups
    }

    pub fn analyze(logs: &[LogRecord]) -> Result<AnovaResult, AnalysisError> {
        let groups = Self::groups(logs);
        if groups.len() < 2 {
            return Err(AnalysisError::InsufficientGroups {
                found: groups.len(),
            });
        }

        let samples = groups.into_iter().map(|(_, c)| c).collect::<Vec<_>>();
        Ok(one_way_anova(&samples))
    }
}

fn one_way_anova(samples: &[Vec<f64>]) -> AnovaResult {
    let k = samples.len();
    let total = samples.iter().map(Vec::len).sum::<usize>();
    let all = samples.iter().flatten().copied().collect::<Vec<_>>();
    let grand_mean = mean(&all);

    let (ss_between, ss_within) = samples.iter().fold((0.0, 0.0), |(ssb, ssw), group| {
        let group_mean = mean(group);
        (
            ssb + group.len() as f64 * (group_mean - grand_mean).powi(2),
            ssw + sum_sq_dev(group, group_mean),
        )
    });

    let df_between = k - 1;
    let df_within = total - k;

    let (f_statistic, p_value) = if df_within == 0 {
        warn!("every workout type has a single log, F statistic is undefined");
        (f64::NAN, f64::NAN)
    } else if ss_within == 0.0 {
        if ss_between == 0.0 {
            (f64::NAN, f64::NAN)
        } else {
            (f64::INFINITY, 0.0)
        }
    } else {
        let ms_between = ss_between / df_between as f64;
        let ms_within = ss_within / df_within as f64;
        let f = ms_between / ms_within;
        (f, f_survival(f, df_between as f64, df_within as f64))
    };

    AnovaResult {
        f_statistic,
        p_value,
        df_between,
        df_within,
    }
}

impl Display for AnovaResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "F_stat: {}. p_value: {}",
            self.f_statistic, self.p_value
        ))
    }
}
