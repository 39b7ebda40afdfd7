#[macro_use]
extern crate serde;

mod date;
pub use date::{DateParseError, parse_log_date};

pub mod goal;
pub use goal::Goal;

pub mod logs;
pub use logs::{LogRecord, WorkoutPlan};
