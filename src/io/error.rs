//! Error types for artwork ingestion, validation, and output

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fallible operations
///
/// The rarity engine itself is total and never produces these; errors arise
/// only at the edges, when loading artwork, validating mint fields, or
/// serializing metadata.
#[derive(Debug)]
pub enum ForgeError {
    /// Failed to load artwork image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Artwork doesn't meet canvas requirements
    InvalidArtwork {
        /// Description of what's wrong with the artwork
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to serialize metadata output
    Serialization {
        /// Name of the document being serialized
        document: &'static str,
        /// Underlying serialization error
        source: serde_json::Error,
    },
}

impl fmt::Display for ForgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load artwork '{}': {source}", path.display())
            }
            Self::InvalidArtwork { reason } => {
                write!(f, "Invalid artwork: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { document, source } => {
                write!(f, "Failed to serialize {document}: {source}")
            }
        }
    }
}

impl std::error::Error for ForgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, ForgeError>;

impl From<image::ImageError> for ForgeError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for ForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for ForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            document: "metadata",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ForgeError {
    ForgeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid artwork error
pub fn invalid_artwork(reason: &impl ToString) -> ForgeError {
    ForgeError::InvalidArtwork {
        reason: reason.to_string(),
    }
}

/// Create a generic path error for CLI target validation
pub fn io_error(msg: &str) -> ForgeError {
    ForgeError::InvalidParameter {
        parameter: "path",
        value: String::new(),
        reason: msg.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameter_error_display() {
        let err = invalid_parameter("name", &"", &"NFT name is required");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'name' = '': NFT name is required"
        );
    }

    #[test]
    fn test_artwork_error_display() {
        let err = invalid_artwork(&"image must be square (48x32)");
        assert_eq!(
            err.to_string(),
            "Invalid artwork: image must be square (48x32)"
        );
    }
}
