use std::{convert::Infallible, fmt::Display, str::FromStr};

/// Training goal declared by the user.
///
/// The label vocabulary is open: anything outside the known labels is kept
/// verbatim in [`Goal::Other`] instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Goal {
    Cardio,
    Strength,
    MuscleGain,
    Flexibility,
    Other(String),
}

impl Goal {
    pub fn label(&self) -> &str {
        match self {
            Goal::Cardio => "cardio",
            Goal::Strength => "strength",
            Goal::MuscleGain => "muscle_gain",
            Goal::Flexibility => "flexibility",
            Goal::Other(label) => label,
        }
    }
}

impl FromStr for Goal {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "cardio" => Goal::Cardio,
            "strength" => Goal::Strength,
            "muscle_gain" => Goal::MuscleGain,
            "flexibility" => Goal::Flexibility,
            other => Goal::Other(other.to_owned()),
        })
    }
}

impl From<String> for Goal {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(goal) => goal,
            Err(never) => match never {},
        }
    }
}

impl From<Goal> for String {
    fn from(value: Goal) -> Self {
        match value {
            Goal::Other(label) => label,
            known => known.label().to_owned(),
        }
    }
}

impl Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
