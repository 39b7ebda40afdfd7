use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use fitreport_types::WorkoutPlan;

/// JSON array of users, each with their daily logs.
#[derive(Debug, Clone)]
pub struct UsersFile {
    path: PathBuf,
}

impl UsersFile {
    pub fn new<P>(path: P) -> Self
    where
        P: Into<PathBuf>,
    {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> anyhow::Result<Vec<WorkoutPlan>> {
        let file = File::open(&self.path)
            .with_context(|| format!("failed to open users file {}", self.path.display()))?;

        let plans = Self::from_reader(BufReader::new(file))
            .with_context(|| format!("invalid users file {}", self.path.display()))?;

        info!("loaded {} users from {}", plans.len(), self.path.display());
        Ok(plans)
    }

    pub fn from_reader<R>(reader: R) -> anyhow::Result<Vec<WorkoutPlan>>
    where
        R: Read,
    {
        let plans: Vec<WorkoutPlan> = serde_json::from_reader(reader)?;
        for plan in plans.iter().filter(|p| p.daily_logs.is_empty()) {
            warn!("user {} has no daily logs", plan.name);
        }
        Ok(plans)
    }
}
