// Error kinds shared by the switcher and the validator

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure kinds for fixture operations.
///
/// Every public operation catches these, prints the message, and reports a
/// boolean result. Internal helpers propagate them with `?`.
#[derive(Debug, Error)]
pub enum MockDataError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Invalid JSON in {}: {source}", .path.display())]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    InvalidSchema(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid configuration in {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    #[error("Failed to write output: {0}")]
    Output(#[from] io::Error),
}

impl MockDataError {
    pub fn schema(message: impl Into<String>) -> Self {
        MockDataError::InvalidSchema(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MockDataError::Io { path: path.into(), source }
    }

    /// Map an I/O error to `NotFound` when that is what it means.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::NotFound {
            MockDataError::NotFound(path)
        } else {
            MockDataError::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, MockDataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_maps_not_found() {
        let err = MockDataError::from_io("a.json", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(err, MockDataError::NotFound(_)));
        assert_eq!(err.to_string(), "File not found: a.json");

        let err = MockDataError::from_io("a.json", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(err, MockDataError::Io { .. }));
    }

    #[test]
    fn test_invalid_format_message_includes_parse_error() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = MockDataError::InvalidFormat { path: PathBuf::from("bad.json"), source };
        let msg = err.to_string();
        assert!(msg.starts_with("Invalid JSON in bad.json:"));
        assert!(msg.contains("EOF"));
    }
}
