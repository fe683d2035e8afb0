//! Error types for hwcatalog
//!
//! Two families of failure are kept apart: catalog-level failures that stop
//! the catalog from loading at all, and record-level field failures that
//! only drop a single entry from a derived collection.

use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Catalog-level error: the catalog could not be fetched or parsed
#[derive(Error, Debug)]
pub enum CatalogError {
    /// I/O error while reading the catalog document
    #[error("I/O error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document is not valid JSON or does not match the catalog shape
    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A catalog source reported a failure of its own
    #[error("Catalog source error: {0}")]
    Source(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// The shared load failed; every waiter receives the same underlying error
    #[error("Failed to load hardware data: {0}")]
    LoadFailed(#[source] Arc<CatalogError>),
}

impl CatalogError {
    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create an error for a source that could not produce the catalog
    pub fn fetch_failed(message: impl Into<String>) -> Self {
        Self::Source(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Check if retrying the load could succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io { .. } | Self::Source(_) => true,
            Self::LoadFailed(inner) => inner.is_recoverable(),
            Self::Parse(_) | Self::ConfigError(_) => false,
        }
    }

    /// Get the path associated with this error, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::LoadFailed(inner) => inner.path(),
            _ => None,
        }
    }
}

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Extension trait for adding path context to std::io::Result
pub trait IoResultExt<T> {
    /// Add path context to an I/O error
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> IoResultExt<T> for std::io::Result<T> {
    fn with_path(self, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|e| CatalogError::io(path, e))
    }
}

/// A record field that is absent or of the wrong shape
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The field is present but not of the expected shape
    #[error("Malformed {field}: '{value}'")]
    Malformed { field: &'static str, value: String },

    /// The field is required for this projection but absent
    #[error("Missing {field}")]
    Missing { field: &'static str },
}

impl FieldError {
    /// Create a malformed-field error
    pub fn malformed(field: &'static str, value: impl Into<String>) -> Self {
        Self::Malformed {
            field,
            value: value.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &'static str {
        match self {
            Self::Malformed { field, .. } | Self::Missing { field } => *field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_with_path() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = CatalogError::io("data/hardware.json", io_err);
        assert_eq!(err.path(), Some(&PathBuf::from("data/hardware.json")));
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_load_failed_delegates_to_inner() {
        let inner = Arc::new(CatalogError::io(
            "/missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        ));
        let err = CatalogError::LoadFailed(inner);
        assert_eq!(err.path(), Some(&PathBuf::from("/missing.json")));
        assert!(err.is_recoverable());
        assert!(err.to_string().starts_with("Failed to load hardware data"));
    }

    #[test]
    fn test_parse_error_not_recoverable() {
        let err: CatalogError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_field_error_display() {
        let err = FieldError::malformed("vram", "lots");
        assert_eq!(err.field(), "vram");
        assert_eq!(err.to_string(), "Malformed vram: 'lots'");
    }
}
