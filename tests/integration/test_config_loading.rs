use garmin_to_hevy::core::config::{ConfigLoader, ConfigValidator};
use garmin_to_hevy::core::types::{ErrorCategory, UnknownExercisePolicy};
use garmin_to_hevy::logging::ConsoleOutput;
use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn clear_converter_env() {
    for v in &[
        "GARMIN_TO_HEVY_OUTPUT_BASENAME",
        "GARMIN_TO_HEVY_MAPPING_FILE",
        "GARMIN_TO_HEVY_UNKNOWN_EXERCISES",
        "GARMIN_TO_HEVY_ACTIVITY_URL_BASE",
    ] {
        env::remove_var(v);
    }
}

/// Test integration of config loading with environment variables
#[test]
#[serial]
fn test_config_loading_integration() {
    clear_converter_env();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("garmin-to-hevy.toml");

    let config_content = r#"
[output]
default_basename = "gym_log"

[mapping]
override_file = "my_names.json"

[conversion]
unknown_exercises = "skip"
activity_url_base = "https://connect.garmin.com/app/activity/"

[logging]
default_level = "warn"
console_output = "none"
"#;
    fs::write(&config_path, config_content).unwrap();

    let config = ConfigLoader::load(Some(&config_path)).unwrap();
    assert_eq!(config.output.default_basename, "gym_log");
    assert_eq!(config.mapping.override_file, PathBuf::from("my_names.json"));
    assert_eq!(
        config.conversion.unknown_exercises,
        UnknownExercisePolicy::Skip
    );
    assert_eq!(
        config.conversion.activity_url_base,
        "https://connect.garmin.com/app/activity/"
    );
    assert_eq!(config.logging.default_level, "warn");
    assert_eq!(config.logging.console_output, ConsoleOutput::None);
    assert!(ConfigValidator::validate(&config).is_ok());

    env::set_var(
        "GARMIN_TO_HEVY_ACTIVITY_URL_BASE",
        "https://example.test/activity/",
    );
    env::set_var("GARMIN_TO_HEVY_UNKNOWN_EXERCISES", "KEEP");

    let config = ConfigLoader::load(Some(&config_path)).unwrap();
    assert_eq!(
        config.conversion.activity_url_base,
        "https://example.test/activity/"
    );
    assert_eq!(
        config.conversion.unknown_exercises,
        UnknownExercisePolicy::Keep
    );
    // Untouched by env
    assert_eq!(config.output.default_basename, "gym_log");

    clear_converter_env();
}

#[test]
#[serial]
fn test_empty_file_yields_defaults() {
    clear_converter_env();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("garmin-to-hevy.toml");
    fs::write(&config_path, "").unwrap();

    let config = ConfigLoader::load(Some(&config_path)).unwrap();
    assert_eq!(config.output.default_basename, "Converted_Garmin_Workouts");
    assert_eq!(
        config.mapping.override_file,
        PathBuf::from("custom_exercise_names.json")
    );
    assert_eq!(config.logging.console_output, ConsoleOutput::Stderr);
}

#[test]
#[serial]
fn test_unknown_section_value_is_rejected() {
    clear_converter_env();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("garmin-to-hevy.toml");
    fs::write(
        &config_path,
        "[conversion]\nunknown_exercises = \"sometimes\"\n",
    )
    .unwrap();

    let err = ConfigLoader::load(Some(&config_path)).unwrap_err();
    assert_eq!(err.category, ErrorCategory::ValidationError);
    assert!(err.message.contains("garmin-to-hevy.toml"));
}

#[test]
#[serial]
fn test_env_basename_fails_validation_when_blank() {
    clear_converter_env();
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("garmin-to-hevy.toml");
    fs::write(&config_path, "").unwrap();
    env::set_var("GARMIN_TO_HEVY_OUTPUT_BASENAME", "");

    let config = ConfigLoader::load(Some(&config_path)).unwrap();
    assert!(ConfigValidator::validate(&config).is_err());

    clear_converter_env();
}
