use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error category enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCategory {
    ValidationError,
    ParseError,
    MappingError,
    SerializationError,
    IoError,
    InternalError,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Error severity enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Error,
    Warning,
}

/// What to do with sets whose exercise could not be identified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum UnknownExercisePolicy {
    /// Emit the row with the `UNKNOWN` exercise name so it can be fixed in Hevy.
    #[default]
    Keep,
    /// Drop the row; the activity is still listed for manual correction.
    Skip,
}

impl fmt::Display for UnknownExercisePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownExercisePolicy::Keep => write!(f, "keep"),
            UnknownExercisePolicy::Skip => write!(f, "skip"),
        }
    }
}

impl FromStr for UnknownExercisePolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "keep" => Ok(UnknownExercisePolicy::Keep),
            "skip" => Ok(UnknownExercisePolicy::Skip),
            _ => Err(format!(
                "invalid unknown exercise policy '{}'; supported values are keep, skip",
                value
            )),
        }
    }
}
