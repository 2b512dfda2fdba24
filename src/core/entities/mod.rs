//! Serde models for the Garmin Connect activity export.
//!
//! Only the fields the converter reads are modelled; everything else in the
//! export is ignored. Garmin writes `null` for most absent values, so every
//! field deserializes `null` and missing keys to its zero value.

use serde::{Deserialize, Deserializer};

/// Activity type key of the only activities that get converted.
pub const STRENGTH_TRAINING: &str = "strength_training";

/// Set type of sets that count as performed work.
pub const ACTIVE_SET: &str = "ACTIVE";

/// Set category Garmin assigns to warm-up sets.
pub const WARM_UP_CATEGORY: &str = "WARM_UP";

/// One workout session from the export.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    #[serde(default, deserialize_with = "lenient_int")]
    pub activity_id: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub activity_type: ActivityType,

    #[serde(default, deserialize_with = "null_as_default")]
    pub start_time_local: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub activity_name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Total duration in seconds.
    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: f64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub full_exercise_sets: Vec<ExerciseSet>,
}

impl Activity {
    pub fn is_strength_training(&self) -> bool {
        self.activity_type.type_key == STRENGTH_TRAINING
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityType {
    #[serde(default, deserialize_with = "null_as_default")]
    pub type_key: String,
}

/// One performed set inside an activity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSet {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub set_type: String,

    /// Garmin's ranked guesses at the exercise performed.
    #[serde(default, deserialize_with = "null_as_default")]
    pub exercises: Vec<Candidate>,

    #[serde(default, deserialize_with = "lenient_int")]
    pub repetition_count: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub duration: f64,

    /// Weight in thousandths of a kilogram.
    #[serde(default, deserialize_with = "lenient_int")]
    pub weight: i64,
}

/// A probability-scored guess at a set's exercise.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Candidate {
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub probability: f64,
}

impl Candidate {
    pub fn new(category: &str, name: &str, probability: f64) -> Self {
        Candidate {
            category: category.to_string(),
            name: name.to_string(),
            probability,
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Integers may be exported as `60000` or `60000.0`; fractions truncate toward zero.
fn lenient_int<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map_or(0, |value| value.trunc() as i64))
}
