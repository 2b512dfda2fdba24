use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Failures while building a mapping tier. None of them stop a conversion.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error("override mapping file {0} not found")]
    NotFound(PathBuf),
    #[error("failed to read override mapping file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("override mapping file {path} is not a JSON object of strings: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("built-in mapping data is corrupt: {0}")]
    Builtin(#[source] serde_json::Error),
}

impl MappingError {
    /// A missing override file is the normal case and only worth an info line.
    pub fn is_not_found(&self) -> bool {
        matches!(self, MappingError::NotFound(_))
    }
}

/// Load the user's override tier from a JSON object of identifier → name pairs.
///
/// Entries with a blank name are dropped with a warning.
pub fn load_overrides(path: &Path) -> Result<HashMap<String, String>, MappingError> {
    if !path.exists() {
        return Err(MappingError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|source| MappingError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let raw: HashMap<String, String> =
        serde_json::from_str(&content).map_err(|source| MappingError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut overrides = HashMap::with_capacity(raw.len());
    for (identifier, name) in raw {
        let name = name.trim();
        if name.is_empty() {
            tracing::warn!(
                "ignoring override for {} in {}: empty exercise name",
                identifier,
                path.display()
            );
            continue;
        }
        overrides.insert(identifier.trim().to_string(), name.to_string());
    }

    tracing::debug!(
        "loaded {} override mappings from {}",
        overrides.len(),
        path.display()
    );
    Ok(overrides)
}
