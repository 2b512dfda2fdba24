use crate::core::error::AppError;
use crate::core::types::ErrorCategory;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::Read;
use std::path::Path;

pub trait Serializer {
    fn deserialize<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, AppError>;
}

pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn deserialize<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, AppError> {
        serde_json::from_slice(data).map_err(Into::into)
    }
}

pub trait FileSerializer {
    fn load_from_file<T, S: Serializer>(&self, path: &Path, serializer: &S) -> Result<T, AppError>
    where
        T: DeserializeOwned;
}

pub struct FileUtils;

impl FileSerializer for FileUtils {
    /// Read the whole file, then decode it. Errors carry the path as context.
    fn load_from_file<T, S: Serializer>(&self, path: &Path, serializer: &S) -> Result<T, AppError>
    where
        T: DeserializeOwned,
    {
        let mut file = fs::File::open(path).map_err(|e| {
            AppError::with_source(
                ErrorCategory::IoError,
                format!("Failed to open {}", path.display()),
                e,
            )
            .with_context("path", path.display().to_string())
            .with_suggestion("Check that the Garmin export file exists and is readable")
        })?;
        let mut content = Vec::new();
        file.read_to_end(&mut content).map_err(|e| {
            AppError::with_source(
                ErrorCategory::IoError,
                format!("Failed to read {}", path.display()),
                e,
            )
            .with_context("path", path.display().to_string())
        })?;

        serializer.deserialize(&content).map_err(|mut e| {
            e.add_context("path", &path.display().to_string());
            e
        })
    }
}
