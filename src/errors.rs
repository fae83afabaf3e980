//! Shared error types for the application

use crate::core::VariantIndex;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for useres operations
#[derive(Debug, Error)]
pub enum Error {
    /// A scenario trace is required but could not be read
    #[error("Missing trace for {level} scenario {variant} at {}: {source}", .path.display())]
    MissingTrace {
        level: String,
        variant: VariantIndex,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A scenario trace exists but is not valid UTF-8
    #[error("Trace for {level} scenario {variant} at {} is not valid UTF-8: {source}", .path.display())]
    TraceEncoding {
        level: String,
        variant: VariantIndex,
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// A table field name has no entry in the field hash table
    #[error("Unknown table field: {0}")]
    UnknownField(String),

    /// A table could not be encoded
    #[error("Failed to serialize table {table}: {message}")]
    Serialize { table: String, message: String },

    /// Writing the container failed
    #[error("Failed to pack container {}: {source}", .path.display())]
    Packaging {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A container could not be decoded
    #[error("Malformed container: {0}")]
    Container(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML errors
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// Create a configuration error without file context
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            path: None,
        }
    }

    /// Create a configuration error tied to a config file
    pub fn config_with_path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a packaging error for the given destination
    pub fn packaging(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Packaging {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn missing_trace_names_level_and_scenario() {
        let err = Error::MissingTrace {
            level: "DigMineGalaxy".into(),
            variant: 2,
            path: PathBuf::from("logs/DigMineGalaxy_Scenario2.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let message = err.to_string();
        assert!(message.contains("DigMineGalaxy scenario 2"));
        assert!(message.contains("DigMineGalaxy_Scenario2.txt"));
    }

    #[test]
    fn trace_encoding_is_not_reported_as_missing() {
        let source = String::from_utf8(vec![0xff]).unwrap_err();
        let err = Error::TraceEncoding {
            level: "AbekobeGalaxy".into(),
            variant: 1,
            path: PathBuf::from("logs/AbekobeGalaxy_Scenario1.txt"),
            source,
        };
        let message = err.to_string();
        assert!(message.contains("not valid UTF-8"));
        assert!(!message.contains("Missing"));
    }

    #[test]
    fn packaging_error_keeps_source() {
        let err = Error::packaging(
            "out.arc",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("out.arc"));
    }

    #[test]
    fn config_error_message() {
        let err = Error::config_with_path("duplicate level", ".useres.toml");
        assert_eq!(err.to_string(), "Configuration error: duplicate level");
        match err {
            Error::Config { path, .. } => assert_eq!(path, Some(PathBuf::from(".useres.toml"))),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
