//! Error types for export operations.

use std::path::PathBuf;

/// Errors that can occur while exporting or decoding platform lists.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// JSON encoding or decoding failed.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Protobuf encoding failed.
    #[error("binary serialization error: {0}")]
    Encode(#[from] prost::EncodeError),

    /// Protobuf bytes could not be decoded into a platform list.
    #[error("binary decode error: {0}")]
    Decode(#[from] prost::DecodeError),

    /// TOML parse error in an export configuration.
    #[error("TOML parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O error reading a configuration file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file not found.
    #[error("config file not found: {}", path.display())]
    ConfigNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    #[error("unknown export format '{0}' (expected json or binary)")]
    UnknownFormat(String),
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;
