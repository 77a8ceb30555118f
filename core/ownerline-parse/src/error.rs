//! Error types for pipeline configuration.
//!
//! Segment-level failures are not errors; they are reported as
//! [`ownerline_model::InvalidOwner`] values in the roster.

use thiserror::Error;

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while configuring the pipeline.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A company keyword was empty or contained non-letter characters.
    #[error("invalid company keyword: {0:?}")]
    InvalidKeyword(String),

    /// The configuration document could not be decoded.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),

    /// The configuration file could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
