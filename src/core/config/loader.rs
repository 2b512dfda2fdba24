use super::ConverterConfig;
use crate::core::error::AppError;
use crate::core::types::{ErrorCategory, UnknownExercisePolicy};
use std::env;
use std::path::{Path, PathBuf};

/// Config file looked up in the current directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "garmin-to-hevy.toml";

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config from an explicit path, or from `garmin-to-hevy.toml` in the
    /// current directory when it exists.
    /// Environment variables override config file values.
    pub fn load(explicit_path: Option<&Path>) -> Result<ConverterConfig, AppError> {
        let config_file = match explicit_path {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::new(
                        ErrorCategory::IoError,
                        format!("Config file {} does not exist", path.display()),
                    )
                    .with_code("CONFIG_NOT_FOUND"));
                }
                Self::load_from_file(path)?
            }
            None => Self::load_from_file(&PathBuf::from(DEFAULT_CONFIG_FILE))?,
        };

        let mut config = config_file.unwrap_or_default();

        // Apply environment variable overrides
        Self::apply_env_overrides(&mut config);

        Ok(config)
    }

    /// Load config from specific file path
    /// Returns Ok(None) if file doesn't exist
    pub fn load_from_file(path: &Path) -> Result<Option<ConverterConfig>, AppError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::new(
                ErrorCategory::IoError,
                format!("Failed to read config file {}: {}", path.display(), e),
            )
        })?;

        let config: ConverterConfig = toml::from_str(&content).map_err(|e| {
            AppError::new(
                ErrorCategory::ValidationError,
                format!("Failed to parse config file {}: {}", path.display(), e),
            )
        })?;

        Ok(Some(config))
    }

    /// Apply environment variable overrides to the configuration
    /// Environment variables take precedence over config file values
    fn apply_env_overrides(config: &mut ConverterConfig) {
        if let Ok(basename) = env::var("GARMIN_TO_HEVY_OUTPUT_BASENAME") {
            config.output.default_basename = basename;
        }

        if let Ok(mapping_file) = env::var("GARMIN_TO_HEVY_MAPPING_FILE") {
            config.mapping.override_file = PathBuf::from(mapping_file);
        }

        if let Ok(policy_str) = env::var("GARMIN_TO_HEVY_UNKNOWN_EXERCISES") {
            if let Ok(policy) = policy_str.parse::<UnknownExercisePolicy>() {
                config.conversion.unknown_exercises = policy;
            }
        }

        if let Ok(url_base) = env::var("GARMIN_TO_HEVY_ACTIVITY_URL_BASE") {
            config.conversion.activity_url_base = url_base;
        }
    }

    /// Get documentation for supported environment variables
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "GARMIN_TO_HEVY_OUTPUT_BASENAME - Override output basename (default: Converted_Garmin_Workouts)",
            "GARMIN_TO_HEVY_MAPPING_FILE - Override the custom mapping file (default: custom_exercise_names.json)",
            "GARMIN_TO_HEVY_UNKNOWN_EXERCISES - keep or skip sets with unknown exercises (default: keep)",
            "GARMIN_TO_HEVY_ACTIVITY_URL_BASE - Override the activity link prefix",
            "RUST_LOG - Override the log filter",
        ]
    }
}
