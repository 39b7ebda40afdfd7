pub mod distributions;
pub mod stats_math;
