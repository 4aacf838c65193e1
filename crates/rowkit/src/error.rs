//! Error types for rowkit.
//!
//! Interactive operations on a list never fail: a disabled capability or a
//! stale reference turns the operation into a no-op. Errors are reserved for
//! configuration and for collection calls that name an impossible position.

use std::path::PathBuf;

/// Result type alias for rowkit operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rowkit.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A collection position past the end was requested.
    #[error("Index {index} out of bounds for collection of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Row height must be a positive, finite number of pixels.
    #[error("Invalid row height {0}: must be positive and finite")]
    InvalidRowHeight(f32),

    /// The list configuration could not be parsed.
    #[error("Invalid list configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// The list configuration could not be serialized.
    #[error("Failed to serialize list configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Reading a configuration file failed.
    #[error("Failed to read list configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A drag payload did not carry a usable row element id.
    #[error("Malformed drag payload: {0}")]
    MalformedPayload(String),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a malformed payload error.
    pub fn malformed_payload(message: impl Into<String>) -> Self {
        Self::MalformedPayload(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::IndexOutOfBounds { index: 5, len: 2 };
        assert_eq!(
            err.to_string(),
            "Index 5 out of bounds for collection of length 2"
        );

        let err = Error::malformed_payload("not utf-8");
        assert_eq!(err.to_string(), "Malformed drag payload: not utf-8");
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = Error::io("list.toml", io);
        assert!(err.to_string().contains("list.toml"));
        assert!(err.source().is_some());
    }
}
