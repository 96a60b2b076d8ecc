//! Error types for configuration loading and validation.

use penc_common::ParseDurationError;

/// Errors that can occur when loading or validating a `penc.toml` configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A required field is missing or empty.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// A field is present but its value is not allowed.
    #[error("invalid {field}: {reason}")]
    InvalidField {
        /// Dotted path of the field, e.g. `bench.name`.
        field: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The settle delay is not a valid duration.
    #[error("invalid settle delay: {0}")]
    InvalidSettle(#[from] ParseDurationError),

    /// A stimulus vector is malformed.
    #[error("invalid vector {index} ({name}): {reason}")]
    InvalidVector {
        /// One-based position of the vector in the file.
        index: usize,
        /// The vector's name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The starter configuration could not be serialized.
    #[error("failed to write configuration: {0}")]
    SerializeError(String),
}
