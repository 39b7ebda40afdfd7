use chrono::NaiveDate;

use crate::{Goal, date::serde_date};

/// One day of recorded activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    #[serde(with = "serde_date")]
    pub date: NaiveDate,
    pub steps: u64,
    pub calories: f64,
    #[serde(rename = "workout")]
    pub workout_type: String,
    pub weight: f64,
}

impl LogRecord {
    pub fn new(
        date: NaiveDate,
        steps: u64,
        calories: f64,
        workout_type: impl Into<String>,
        weight: f64,
    ) -> Self {
        Self {
            date,
            steps,
            calories,
            workout_type: workout_type.into(),
            weight,
        }
    }
}

/// A user together with their log history.
///
/// `daily_logs` keeps arrival order, which is not necessarily chronological.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPlan {
    pub name: String,
    pub age: u32,
    pub goal: Goal,
    pub daily_logs: Vec<LogRecord>,
}

impl WorkoutPlan {
    pub fn new(name: impl Into<String>, age: u32, goal: Goal, daily_logs: Vec<LogRecord>) -> Self {
        Self {
            name: name.into(),
            age,
            goal,
            daily_logs,
        }
    }

    pub fn latest_date(&self) -> Option<NaiveDate> {
        self.daily_logs.iter().map(|log| log.date).max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER: &str = r#"{
        "name": "Ada",
        "age": 34,
        "goal": "strength",
        "daily_logs": [
            {"date": "2025-01-02", "steps": 8000, "calories": 420, "workout": "squats", "weight": 70.5},
            {"date": "2025-01-01", "steps": 6500, "calories": 390.5, "workout": "run", "weight": 70.9}
        ]
    }"#;

    #[test]
    fn deserialize_user_record() {
        let plan: WorkoutPlan = serde_json::from_str(USER).unwrap();
        assert_eq!(plan.name, "Ada");
        assert_eq!(plan.age, 34);
        assert_eq!(plan.goal, Goal::Strength);
        assert_eq!(plan.daily_logs.len(), 2);

        let first = &plan.daily_logs[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
        assert_eq!(first.steps, 8000);
        assert_eq!(first.calories, 420.0);
        assert_eq!(first.workout_type, "squats");
        assert_eq!(first.weight, 70.5);
    }

    #[test]
    fn latest_date_ignores_arrival_order() {
        let plan: WorkoutPlan = serde_json::from_str(USER).unwrap();
        assert_eq!(
            plan.latest_date(),
            Some(NaiveDate::from_ymd_opt(2025, 1, 2).unwrap())
        );
    }

    #[test]
    fn latest_date_empty() {
        let plan = WorkoutPlan::new("Nobody", 40, Goal::Cardio, Vec::new());
        assert_eq!(plan.latest_date(), None);
    }

    #[test]
    fn bad_date_fails_deserialization() {
        let raw = r#"{"date": "soon", "steps": 1, "calories": 1, "workout": "run", "weight": 1}"#;
        let err = serde_json::from_str::<LogRecord>(raw).unwrap_err();
        assert!(err.to_string().contains("invalid log date"));
    }

    #[test]
    fn serialize_keeps_input_shape() {
        let log = LogRecord::new(
            NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            100,
            50.0,
            "yoga",
            60.0,
        );
        let value = serde_json::to_value(&log).unwrap();
        assert_eq!(value["date"], "2025-02-03");
        assert_eq!(value["workout"], "yoga");
    }
}
