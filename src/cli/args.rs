use crate::core::config::ConverterConfig;
use crate::core::types::UnknownExercisePolicy;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct ConvertArgs {
    /// Garmin Connect activity export (JSON array of activities)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file name without extension; `.csv` is appended (default: Converted_Garmin_Workouts)
    #[arg(value_name = "OUTPUT_BASENAME")]
    pub output_basename: Option<String>,

    /// JSON object of Garmin identifier to Hevy name pairs that win over the built-in table
    #[arg(long, value_name = "FILE", help_heading = "Mapping")]
    pub mapping: Option<PathBuf>,

    /// Keep or drop sets whose exercise Garmin could not identify (default: keep)
    #[arg(long, value_enum, value_name = "POLICY", help_heading = "Mapping")]
    pub unknown_exercises: Option<UnknownExercisePolicy>,

    /// Path to config file (default: ./garmin-to-hevy.toml)
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,

    /// Log every filtered set and mapping decision
    #[arg(long, short, help_heading = "Output Options")]
    pub verbose: bool,
}

impl ConvertArgs {
    /// Command line flags take precedence over config file and environment values.
    pub fn apply_overrides(&self, config: &mut ConverterConfig) {
        if let Some(basename) = &self.output_basename {
            config.output.default_basename = basename.clone();
        }
        if let Some(mapping) = &self.mapping {
            config.mapping.override_file = mapping.clone();
        }
        if let Some(policy) = self.unknown_exercises {
            config.conversion.unknown_exercises = policy;
        }
    }
}
