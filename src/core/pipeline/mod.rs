use crate::core::diagnostics::Diagnostics;
use crate::core::entities::{Activity, ExerciseSet};
use crate::core::formatter::{
    check_admission, format_date, format_duration, format_reps, format_weight, workout_name,
    workout_notes, DISTANCE_UNIT, WEIGHT_UNIT,
};
use crate::core::mapping::{looks_unmapped, ExerciseNameMap, RepOnlyExercises};
use crate::core::output::OutputRow;
use crate::core::selector::select_exercise;
use crate::core::sequencer::SetSequencer;
use crate::core::types::UnknownExercisePolicy;

pub const DEFAULT_ACTIVITY_URL_BASE: &str = "https://connect.garmin.com/modern/activity/";

/// Hevy mangles imports that carry set durations, so every row reports zero.
const SECONDS_PLACEHOLDER: &str = "0";

#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub unknown_exercises: UnknownExercisePolicy,
    pub activity_url_base: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        PipelineOptions {
            unknown_exercises: UnknownExercisePolicy::default(),
            activity_url_base: DEFAULT_ACTIVITY_URL_BASE.to_string(),
        }
    }
}

/// Turns Garmin activities into Hevy rows.
pub struct ConversionPipeline<'a> {
    names: &'a ExerciseNameMap,
    rep_only: &'a RepOnlyExercises,
    options: PipelineOptions,
}

/// Values shared by every row of one workout.
struct WorkoutFields {
    date: String,
    name: String,
    notes: String,
    duration: String,
}

impl<'a> ConversionPipeline<'a> {
    pub fn new(
        names: &'a ExerciseNameMap,
        rep_only: &'a RepOnlyExercises,
        options: PipelineOptions,
    ) -> Self {
        ConversionPipeline {
            names,
            rep_only,
            options,
        }
    }

    /// Convert activities in input order, collecting problems into `diagnostics`.
    pub fn convert(&self, activities: &[Activity], diagnostics: &mut Diagnostics) -> Vec<OutputRow> {
        let mut rows = Vec::new();
        let mut sequencer = SetSequencer::new();

        for activity in activities {
            diagnostics.stats_mut().activities_read += 1;
            if !activity.is_strength_training() {
                continue;
            }
            diagnostics.stats_mut().strength_activities += 1;

            let _span = tracing::debug_span!("activity", id = activity.activity_id).entered();
            sequencer.reset();
            let workout = self.workout_fields(activity, diagnostics);

            for set in &activity.full_exercise_sets {
                if let Some(row) = self.convert_set(activity, set, &workout, &mut sequencer, diagnostics)
                {
                    rows.push(row);
                }
            }
        }

        rows
    }

    fn workout_fields(&self, activity: &Activity, diagnostics: &mut Diagnostics) -> WorkoutFields {
        let date = match format_date(&activity.start_time_local) {
            Ok(date) => date,
            Err(err) => {
                diagnostics.record_date_error(activity.activity_id, &err);
                String::new()
            }
        };

        WorkoutFields {
            date,
            name: workout_name(&activity.activity_name, &activity.start_time_local),
            notes: workout_notes(&activity.description),
            duration: format_duration(activity.duration),
        }
    }

    fn convert_set(
        &self,
        activity: &Activity,
        set: &ExerciseSet,
        workout: &WorkoutFields,
        sequencer: &mut SetSequencer,
        diagnostics: &mut Diagnostics,
    ) -> Option<OutputRow> {
        if let Err(rejection) = check_admission(set) {
            tracing::debug!("skipping set: {}", rejection.as_str());
            diagnostics.stats_mut().sets_filtered += 1;
            return None;
        }

        let selection = select_exercise(&set.exercises);
        if selection.is_unknown() {
            diagnostics.record_unresolved(activity.activity_id, &self.options.activity_url_base);
        }

        let exercise_name = self.names.resolve(selection.identifier());
        if looks_unmapped(exercise_name) {
            diagnostics.record_unmapped(exercise_name);
        }

        if selection.is_unknown() && self.options.unknown_exercises == UnknownExercisePolicy::Skip {
            diagnostics.stats_mut().unknown_sets_skipped += 1;
            return None;
        }

        let set_order = sequencer.next_order(selection.identifier());
        let weight = if self.rep_only.contains(exercise_name) {
            "0".to_string()
        } else {
            format_weight(set.weight)
        };

        diagnostics.stats_mut().sets_admitted += 1;
        Some(OutputRow {
            date: workout.date.clone(),
            workout_name: workout.name.clone(),
            exercise_name: exercise_name.to_string(),
            set_order,
            weight,
            weight_unit: WEIGHT_UNIT.to_string(),
            reps: format_reps(set.repetition_count),
            rpe: String::new(),
            distance: String::new(),
            distance_unit: DISTANCE_UNIT.to_string(),
            seconds: SECONDS_PLACEHOLDER.to_string(),
            notes: String::new(),
            workout_notes: workout.notes.clone(),
            workout_duration: workout.duration.clone(),
        })
    }
}
