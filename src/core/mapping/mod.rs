//! Garmin exercise identifier → Hevy exercise name translation.
//!
//! Resolution consults the user's override table first, then the built-in
//! defaults, and finally passes the identifier through unchanged. A
//! pass-through is how callers detect an unmapped exercise.

pub mod loader;

pub use loader::{load_overrides, MappingError};

use crate::core::selector::UNKNOWN_EXERCISE;
use std::collections::{HashMap, HashSet};

const DEFAULT_EXERCISE_NAMES: &str = include_str!("../../../data/default_exercise_names.json");
const REP_ONLY_EXERCISES: &str = include_str!("../../../data/rep_only_exercises.json");

/// Two-tier lookup table, immutable once built.
#[derive(Debug, Clone, Default)]
pub struct ExerciseNameMap {
    overrides: HashMap<String, String>,
    defaults: HashMap<String, String>,
}

impl ExerciseNameMap {
    /// Table holding only the built-in default mappings.
    pub fn builtin() -> Result<Self, MappingError> {
        let defaults: HashMap<String, String> =
            serde_json::from_str(DEFAULT_EXERCISE_NAMES).map_err(MappingError::Builtin)?;
        Ok(Self::new(HashMap::new(), defaults))
    }

    pub fn new(overrides: HashMap<String, String>, defaults: HashMap<String, String>) -> Self {
        ExerciseNameMap {
            overrides,
            defaults,
        }
    }

    /// Replace the override tier.
    pub fn with_overrides(mut self, overrides: HashMap<String, String>) -> Self {
        self.overrides = overrides;
        self
    }

    /// Resolve a Garmin identifier to the Hevy display name.
    pub fn resolve<'a>(&'a self, identifier: &'a str) -> &'a str {
        self.overrides
            .get(identifier)
            .or_else(|| self.defaults.get(identifier))
            .map(String::as_str)
            .unwrap_or(identifier)
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    pub fn default_count(&self) -> usize {
        self.defaults.len()
    }
}

/// Whether a resolved name still looks like a raw Garmin identifier.
///
/// Hevy names are mixed case without underscores. The `UNKNOWN` sentinel is
/// excluded; it is reported per activity instead.
pub fn looks_unmapped(name: &str) -> bool {
    if name == UNKNOWN_EXERCISE {
        return false;
    }
    name.contains('_') || name == name.to_uppercase()
}

/// Hevy exercises tracked by reps alone.
///
/// Importing a weight for one of these makes Hevy create a custom exercise
/// instead of matching the stock one.
#[derive(Debug, Clone, Default)]
pub struct RepOnlyExercises {
    names: HashSet<String>,
}

impl RepOnlyExercises {
    pub fn builtin() -> Result<Self, MappingError> {
        let names: Vec<String> =
            serde_json::from_str(REP_ONLY_EXERCISES).map_err(MappingError::Builtin)?;
        Ok(names.into_iter().collect())
    }

    pub fn contains(&self, display_name: &str) -> bool {
        self.names.contains(display_name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl FromIterator<String> for RepOnlyExercises {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        RepOnlyExercises {
            names: iter.into_iter().collect(),
        }
    }
}
