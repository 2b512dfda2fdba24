use super::ConverterConfig;
use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use std::str::FromStr;
use tracing_subscriber::filter::Directive;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration rules
    pub fn validate(config: &ConverterConfig) -> Result<(), AppError> {
        if config.output.default_basename.trim().is_empty() {
            return Err(AppError::new(
                ErrorCategory::ValidationError,
                "output.default_basename cannot be empty",
            ));
        }

        if config.mapping.override_file.as_os_str().is_empty() {
            return Err(AppError::new(
                ErrorCategory::ValidationError,
                "mapping.override_file cannot be empty",
            ));
        }

        if config.conversion.activity_url_base.trim().is_empty() {
            return Err(AppError::new(
                ErrorCategory::ValidationError,
                "conversion.activity_url_base cannot be empty",
            ));
        }

        Directive::from_str(&config.logging.default_level).map_err(|_| {
            AppError::new(
                ErrorCategory::ValidationError,
                "logging.default_level must be a valid tracing directive",
            )
        })?;

        Ok(())
    }
}
