use garmin_to_hevy::core::error::AppError;
use garmin_to_hevy::core::mapping::load_overrides;
use garmin_to_hevy::core::types::{ErrorCategory, ErrorSeverity};
use tempfile::TempDir;

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "activities.json");
    let app_err: AppError = io_err.into();

    assert_eq!(app_err.category, ErrorCategory::IoError);
    assert_eq!(app_err.code, "IO_ERROR");
    assert!(app_err.source.is_some());
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<Vec<i64>>("[1,").unwrap_err();
    let app_err: AppError = json_err.into();

    assert_eq!(app_err.category, ErrorCategory::ParseError);
    assert_eq!(app_err.code, "JSON_ERROR");
    assert!(!app_err.recovery_suggestions.is_empty());
}

#[test]
fn test_mapping_error_conversion_keeps_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("names.json");
    std::fs::write(&path, "[1, 2]").unwrap();

    let mapping_err = load_overrides(&path).unwrap_err();
    let app_err: AppError = mapping_err.into();

    assert_eq!(app_err.category, ErrorCategory::MappingError);
    assert_eq!(app_err.code, "MAPPING_ERROR");
    assert_eq!(
        app_err.context.get("path").map(String::as_str),
        Some(path.display().to_string().as_str())
    );
}

#[test]
fn test_builder_chain_and_display() {
    let err = AppError::new(ErrorCategory::IoError, "Failed to create CSV file out.csv")
        .with_context("path", "out.csv")
        .with_suggestion("Check that the output directory exists");

    assert_eq!(err.severity(), ErrorSeverity::Error);
    let rendered = err.to_string();
    assert!(rendered.starts_with("[IO_ERROR] IoError: Failed to create CSV file out.csv"));
    assert!(rendered.contains("path"));
}

#[test]
fn test_mapping_category_is_a_warning() {
    let err = AppError::new(ErrorCategory::MappingError, "no override file");
    assert_eq!(err.severity(), ErrorSeverity::Warning);
}
