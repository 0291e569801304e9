//! Custom error types for GeoJSON processing

use std::fmt;
use std::io;

/// GeoJSON codec error types
#[derive(Debug)]
pub enum GeoJsonError {
    /// Geometry kind outside the seven GeoJSON geometry types
    UnsupportedGeometryType(String),
    /// Unknown `type`, missing/malformed members or a truncated object
    DecodeError(String),
    /// An ordinate that is not a number
    MalformedNumber(String),
    /// Reprojection between two coordinate systems that is not supported
    UnsupportedTransform { from: String, to: String },
    /// Invalid configuration file or value
    ConfigError(String),
    /// I/O error
    IoError(io::Error),
    /// JSON syntax or serialization error
    JsonError(serde_json::Error),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for GeoJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeoJsonError::UnsupportedGeometryType(t) => write!(f, "Unsupported geometry type: {}", t),
            GeoJsonError::DecodeError(msg) => write!(f, "Decode error: {}", msg),
            GeoJsonError::MalformedNumber(v) => write!(f, "Malformed number: {}", v),
            GeoJsonError::UnsupportedTransform { from, to } => {
                write!(f, "Unsupported coordinate transformation from {} to {}", from, to)
            },
            GeoJsonError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            GeoJsonError::IoError(e) => write!(f, "I/O error: {}", e),
            GeoJsonError::JsonError(e) => write!(f, "JSON error: {}", e),
            GeoJsonError::GenericError(msg) => write!(f, "GeoJSON error: {}", msg),
        }
    }
}

impl std::error::Error for GeoJsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeoJsonError::IoError(e) => Some(e),
            GeoJsonError::JsonError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for GeoJsonError {
    fn from(error: io::Error) -> Self {
        GeoJsonError::IoError(error)
    }
}

impl From<serde_json::Error> for GeoJsonError {
    fn from(error: serde_json::Error) -> Self {
        GeoJsonError::JsonError(error)
    }
}

impl From<toml::de::Error> for GeoJsonError {
    fn from(error: toml::de::Error) -> Self {
        GeoJsonError::ConfigError(error.to_string())
    }
}

/// Result type for GeoJSON operations
pub type GeoJsonResult<T> = Result<T, GeoJsonError>;

impl From<String> for GeoJsonError {
    fn from(msg: String) -> Self {
        GeoJsonError::GenericError(msg)
    }
}
