//! Set admission rules and Hevy field formatting.

use crate::core::entities::{ExerciseSet, ACTIVE_SET, WARM_UP_CATEGORY};
use chrono::NaiveDateTime;

/// Timestamp layout Hevy expects in the `Date` column.
pub const OUTPUT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Layouts Garmin uses for `startTimeLocal`. `%.f` also accepts a missing fraction.
// `%.f` also matches when the fraction is absent.
const INPUT_DATE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

pub const WEIGHT_UNIT: &str = "kg";
pub const DISTANCE_UNIT: &str = "km";

/// Why a set produced no row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotActive,
    WarmUp,
    NoReps,
    SingleRepWithoutWeight,
}

impl Rejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rejection::NotActive => "not an active set",
            Rejection::WarmUp => "warm-up set",
            Rejection::NoReps => "zero repetitions",
            Rejection::SingleRepWithoutWeight => "single rep without weight",
        }
    }
}

/// Decide whether a set is worth importing.
///
/// Single unweighted reps are usually untracked holds or placeholders, so
/// they are dropped along with warm-ups and rest entries.
pub fn check_admission(set: &ExerciseSet) -> Result<(), Rejection> {
    if set.set_type != ACTIVE_SET {
        return Err(Rejection::NotActive);
    }
    if set.category == WARM_UP_CATEGORY {
        return Err(Rejection::WarmUp);
    }
    if set.repetition_count == 0 {
        return Err(Rejection::NoReps);
    }
    if set.weight == 0 && set.repetition_count == 1 {
        return Err(Rejection::SingleRepWithoutWeight);
    }
    Ok(())
}

/// Whole kilograms from Garmin's thousandths, truncated.
pub fn format_weight(weight: i64) -> String {
    if weight > 0 {
        (weight / 1000).to_string()
    } else {
        "0".to_string()
    }
}

/// Reps are never reported as zero.
pub fn format_reps(repetition_count: i64) -> String {
    if repetition_count > 0 {
        repetition_count.to_string()
    } else {
        "1".to_string()
    }
}

/// `45s` below a minute, whole minutes (truncated) from a minute up.
pub fn format_duration(seconds: f64) -> String {
    let seconds = seconds.trunc() as i64;
    if seconds >= 60 {
        format!("{}m", seconds / 60)
    } else {
        format!("{}s", seconds)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unrecognized start time '{value}'; expected YYYY-MM-DDTHH:MM:SS.0 or YYYY-MM-DD HH:MM:SS")]
pub struct DateFormatError {
    pub value: String,
}

/// Normalize a Garmin start time to `YYYY-MM-DD HH:MM:SS`.
pub fn format_date(value: &str) -> Result<String, DateFormatError> {
    let trimmed = value.trim();
    INPUT_DATE_FORMATS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(trimmed, layout).ok())
        .map(|parsed| parsed.format(OUTPUT_DATE_FORMAT).to_string())
        .ok_or_else(|| DateFormatError {
            value: value.to_string(),
        })
}

/// `<activity name>-<date>`, using the text before the first `T` or space.
pub fn workout_name(activity_name: &str, start_time_local: &str) -> String {
    let date = start_time_local
        .split(['T', ' '])
        .next()
        .unwrap_or_default();
    format!("{}-{}", activity_name, date)
}

/// The description wrapped in literal quotes, independent of CSV quoting.
pub fn workout_notes(description: &str) -> String {
    format!("\"{}\"", description)
}
