//! Error types for loldle-export
//!
//! This module provides the error hierarchy using `thiserror`. Missing
//! names and fields are not errors: they are reported as
//! [`Anomaly`](crate::extraction::Anomaly) values and degrade to empty strings.

use thiserror::Error;

/// The main error type for export operations
#[derive(Error, Debug)]
pub enum Error {
    /// Extraction errors that abort the whole pass
    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// Output sink errors
    #[error("Sink error: {0}")]
    Sink(#[from] SinkError),

    /// Selector configuration errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors that abort an extraction pass
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// No element carries the container signature
    #[error("Container not found: {0}")]
    ContainerNotFound(String),
}

/// Errors raised while delivering a document
#[derive(Error, Debug)]
pub enum SinkError {
    /// Writing the document failed
    #[error("Failed to write {filename}: {source}")]
    Io {
        /// Target filename
        filename: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A browser API call failed after download support was confirmed
    #[error("Browser download failed: {0}")]
    Browser(String),
}

/// Selector configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Selector file could not be read
    #[error("Failed to read selector file {path}: {source}")]
    Io {
        /// Path that was read
        path: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Selector file is not valid JSON for a selector set
    #[error("Failed to parse selector file: {0}")]
    Parse(#[from] serde_json::Error),

    /// Selector set is structurally unusable
    #[error("Invalid selector set: {0}")]
    Invalid(String),
}

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, Error>;
