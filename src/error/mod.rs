//! Error handling module for PhraseClip

use thiserror::Error;

/// Main error type for PhraseClip operations
#[derive(Error, Debug)]
pub enum ClipError {
    /// Input path not found or inaccessible
    #[error("Input path not found: {path}")]
    InputPathNotFound { path: String },

    /// Path exists but is not a directory
    #[error("Path is not a directory: {path}")]
    NotADirectory { path: String },

    /// Invalid subtitle or probe timestamp
    #[error("Invalid timestamp: {value}. Expected HH:MM:SS,mmm or HH:MM:SS.mmm")]
    InvalidTimestamp { value: String },

    /// Media probe error
    #[error("Failed to probe media file: {message}")]
    ProbeError { message: String },

    /// Subtitle extraction error
    #[error("Failed to extract subtitles: {message}")]
    ExtractionError { message: String },

    /// Trim operation error
    #[error("Trim operation failed: {message}")]
    TrimError { message: String },

    /// Configuration file error
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type alias for PhraseClip operations
pub type ClipResult<T> = std::result::Result<T, ClipError>;
