//! Hevy CSV import rows and writer.

use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Header row of the Hevy (Strong-compatible) import format.
pub const HEADER: [&str; 14] = [
    "Date",
    "Workout Name",
    "Exercise Name",
    "Set Order",
    "Weight",
    "Weight Unit",
    "Reps",
    "RPE",
    "Distance",
    "Distance Unit",
    "Seconds",
    "Notes",
    "Workout Notes",
    "Workout Duration",
];

/// One imported set, already formatted as strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputRow {
    pub date: String,
    pub workout_name: String,
    pub exercise_name: String,
    pub set_order: u32,
    pub weight: String,
    pub weight_unit: String,
    pub reps: String,
    pub rpe: String,
    pub distance: String,
    pub distance_unit: String,
    pub seconds: String,
    pub notes: String,
    pub workout_notes: String,
    pub workout_duration: String,
}

impl OutputRow {
    /// Fields in `HEADER` order.
    pub fn to_record(&self) -> [String; 14] {
        [
            self.date.clone(),
            self.workout_name.clone(),
            self.exercise_name.clone(),
            self.set_order.to_string(),
            self.weight.clone(),
            self.weight_unit.clone(),
            self.reps.clone(),
            self.rpe.clone(),
            self.distance.clone(),
            self.distance_unit.clone(),
            self.seconds.clone(),
            self.notes.clone(),
            self.workout_notes.clone(),
            self.workout_duration.clone(),
        ]
    }
}

/// `<basename>.csv`
pub fn output_path(basename: &str) -> PathBuf {
    PathBuf::from(format!("{}.csv", basename))
}

/// Write the header and all rows to any writer.
pub fn write_rows<W: Write>(rows: &[OutputRow], writer: W) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(HEADER)?;
    for row in rows {
        writer.write_record(row.to_record())?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the CSV next to its final location and move it into place on success.
///
/// A failure at any point leaves no file at `path`.
pub fn write_csv_file(rows: &[OutputRow], path: &Path) -> Result<(), AppError> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let temp = NamedTempFile::new_in(&directory).map_err(|e| {
        AppError::with_source(
            ErrorCategory::IoError,
            format!("Failed to create CSV file in {}", directory.display()),
            e,
        )
        .with_context("path", path.display().to_string())
    })?;

    write_rows(rows, temp.as_file())?;

    temp.persist(path).map_err(|e| {
        AppError::with_source(
            ErrorCategory::IoError,
            format!("Failed to create CSV file {}", path.display()),
            e.error,
        )
    })?;

    tracing::info!("wrote {} rows to {}", rows.len(), path.display());
    Ok(())
}
