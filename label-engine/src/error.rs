//! Error types for the label pipeline
//!
//! Validation findings are plain message lists (see [`crate::validate`]);
//! these errors cover failures of a whole operation.

use shared::models::UnknownLabelSize;
use thiserror::Error;

/// Label pipeline error types
#[derive(Debug, Error)]
pub enum LabelError {
    /// QR symbol could not be encoded
    #[error("Failed to generate QR code")]
    QrCode,

    /// Barcode symbol could not be encoded
    #[error("Failed to generate barcode")]
    Barcode,

    /// Document rasterization failed
    #[error("Failed to generate PDF")]
    Pdf,

    /// Template document could not be parsed
    #[error("Invalid template: {0}")]
    Template(#[from] serde_json::Error),

    /// Unknown label size key
    #[error(transparent)]
    LabelSize(#[from] UnknownLabelSize),

    /// Network connection error
    #[error("Connection failed: {0}")]
    Connection(String),

    /// IO error during printing
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Timeout waiting for printer
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Invalid printer configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type for label operations
pub type LabelResult<T> = Result<T, LabelError>;
