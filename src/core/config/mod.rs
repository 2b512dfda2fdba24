use crate::core::pipeline::{PipelineOptions, DEFAULT_ACTIVITY_URL_BASE};
use crate::core::types::UnknownExercisePolicy;
use crate::logging::config::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Converter configuration loaded from garmin-to-hevy.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConverterConfig {
    /// Output file configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Exercise mapping configuration
    #[serde(default)]
    pub mapping: MappingConfig,

    /// Conversion behaviour
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Logging sinks and level
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Output file configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Basename used when none is given on the command line; `.csv` is appended
    #[serde(default = "default_basename")]
    pub default_basename: String,
}

/// Exercise mapping configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MappingConfig {
    /// JSON object of Garmin identifier → Hevy name pairs that win over the built-in table
    #[serde(default = "default_override_file")]
    pub override_file: PathBuf,
}

/// Conversion behaviour
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Keep or skip sets whose exercise Garmin could not identify
    #[serde(default)]
    pub unknown_exercises: UnknownExercisePolicy,

    /// Prefix for links to activities that need manual correction
    #[serde(default = "default_activity_url_base")]
    pub activity_url_base: String,
}

impl ConversionConfig {
    pub fn pipeline_options(&self) -> PipelineOptions {
        PipelineOptions {
            unknown_exercises: self.unknown_exercises,
            activity_url_base: self.activity_url_base.clone(),
        }
    }
}

// Default functions
fn default_basename() -> String {
    "Converted_Garmin_Workouts".to_string()
}

fn default_override_file() -> PathBuf {
    PathBuf::from("custom_exercise_names.json")
}

fn default_activity_url_base() -> String {
    DEFAULT_ACTIVITY_URL_BASE.to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            default_basename: default_basename(),
        }
    }
}

impl Default for MappingConfig {
    fn default() -> Self {
        MappingConfig {
            override_file: default_override_file(),
        }
    }
}

impl MappingConfig {
    /// True when the override path was set away from its default, by file, env or CLI.
    pub fn has_custom_override_file(&self) -> bool {
        self.override_file != default_override_file()
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        ConversionConfig {
            unknown_exercises: UnknownExercisePolicy::default(),
            activity_url_base: default_activity_url_base(),
        }
    }
}


pub mod loader;
pub mod validation;

pub use loader::ConfigLoader;
pub use validation::ConfigValidator;
