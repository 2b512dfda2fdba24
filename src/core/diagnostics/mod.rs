//! Run-wide accumulation of recoverable problems.
//!
//! The pipeline records into one `Diagnostics` value passed by reference;
//! the CLI renders it once after the conversion finishes. Entries keep
//! first-seen order.

use crate::core::formatter::DateFormatError;
use indexmap::{IndexMap, IndexSet};
use std::fmt::Write;

pub const UNMAPPED_HEADER: &str = "Workouts not mapped to Hevy equivalents. These need a PR to the repo to add the mapping, or a custom exercise in Hevy:";
pub const UNRESOLVED_HEADER: &str = "Workouts with unknown exercises. You might want to go through these, add the correct exercise and then redownload the Garmin data:";
pub const DATE_HEADER: &str = "Workouts with unreadable start times (exported with an empty date):";

/// Counters describing one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    pub activities_read: usize,
    pub strength_activities: usize,
    pub sets_admitted: usize,
    pub sets_filtered: usize,
    pub unknown_sets_skipped: usize,
}

#[derive(Debug, Default)]
pub struct Diagnostics {
    unmapped_exercises: IndexSet<String>,
    unresolved_activities: IndexMap<i64, String>,
    date_errors: IndexMap<i64, String>,
    stats: RunStats,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_unmapped(&mut self, exercise_name: &str) {
        if self.unmapped_exercises.insert(exercise_name.to_string()) {
            tracing::warn!("no Hevy mapping for exercise {}", exercise_name);
        }
    }

    /// Remember an activity containing an unidentified set, as a link to it.
    pub fn record_unresolved(&mut self, activity_id: i64, activity_url_base: &str) {
        if !self.unresolved_activities.contains_key(&activity_id) {
            let link = format!("{}{}", activity_url_base, activity_id);
            tracing::warn!("activity {} contains unknown exercises", activity_id);
            self.unresolved_activities.insert(activity_id, link);
        }
    }

    pub fn record_date_error(&mut self, activity_id: i64, error: &DateFormatError) {
        tracing::warn!("activity {}: {}", activity_id, error);
        self.date_errors
            .entry(activity_id)
            .or_insert_with(|| error.value.clone());
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    pub fn stats_mut(&mut self) -> &mut RunStats {
        &mut self.stats
    }

    pub fn unmapped_exercises(&self) -> impl Iterator<Item = &str> {
        self.unmapped_exercises.iter().map(String::as_str)
    }

    pub fn unresolved_activity_links(&self) -> impl Iterator<Item = &str> {
        self.unresolved_activities.values().map(String::as_str)
    }

    pub fn unresolved_activity_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.unresolved_activities.keys().copied()
    }

    pub fn date_error_count(&self) -> usize {
        self.date_errors.len()
    }

    pub fn is_clean(&self) -> bool {
        self.unmapped_exercises.is_empty()
            && self.unresolved_activities.is_empty()
            && self.date_errors.is_empty()
    }

    /// Human-readable end-of-run report; empty when there is nothing to act on.
    pub fn render_report(&self) -> String {
        let mut report = String::new();

        if !self.unmapped_exercises.is_empty() {
            let _ = writeln!(report, "{}", UNMAPPED_HEADER);
            for name in &self.unmapped_exercises {
                let _ = writeln!(report, "{}", name);
            }
        }

        if !self.unresolved_activities.is_empty() {
            let _ = writeln!(report, "{}", UNRESOLVED_HEADER);
            for link in self.unresolved_activities.values() {
                let _ = writeln!(report, "{}", link);
            }
        }

        if !self.date_errors.is_empty() {
            let _ = writeln!(report, "{}", DATE_HEADER);
            for (activity_id, value) in &self.date_errors {
                let _ = writeln!(report, "{} ({:?})", activity_id, value);
            }
        }

        report
    }
}
