#[macro_use]
extern crate log;

mod error;
pub use error::AnalysisError;

pub(crate) mod aggregate;
pub use aggregate::{AggregateStats, AggregateStatsCalculator};

pub(crate) mod workout;
pub use workout::{WorkoutPool, WorkoutSelector};

pub(crate) mod trend;
pub use trend::{CorrelationStrength, TrendDirection, TrendFit, TrendForecast, TrendForecaster};

pub(crate) mod variance;
pub use variance::{AnovaResult, GroupVarianceAnalyzer};

pub(crate) mod effectiveness;
pub use effectiveness::{Effectiveness, PairedEffectivenessTester, PairedTestResult, Significance};

pub(crate) mod recommendation;
pub use recommendation::{RecommendationComposer, Report, ReportConfig};

pub mod helpers;
