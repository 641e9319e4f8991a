//! Error types for tableview
//!
//! View operations are total and never fail. Errors only surface at the
//! boundary: validating configuration, loading records, parsing commands.

use thiserror::Error;

/// Result type alias using ViewError
pub type Result<T> = std::result::Result<T, ViewError>;

/// Unified error type for tableview operations
#[derive(Debug, Error)]
pub enum ViewError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Record Loading Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // -------------------------------------------------------------------------
    // Command Errors
    // -------------------------------------------------------------------------
    #[error("Parse error: {0}")]
    Parse(String),
}
