//! Custom error types for promissoria-cli
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for promissoria-cli operations
#[derive(Error, Debug)]
pub enum PromissoriaError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for note fields and amounts
    #[error("Validation error: {0}")]
    Validation(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl PromissoriaError {
    /// Create a validation error for a malformed amount
    pub fn invalid_amount(input: impl Into<String>) -> Self {
        Self::Validation(format!(
            "Invalid amount: '{}'. Use a format like '2090,00' or 'R$ 2.090,00'",
            input.into()
        ))
    }

    /// Create a validation error for an installment count outside 1-12
    pub fn invalid_installments(count: u32) -> Self {
        Self::Validation(format!(
            "Invalid installment count: {}. Notes can be split into 1 to 12 installments",
            count
        ))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for PromissoriaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PromissoriaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for promissoria-cli operations
pub type PromissoriaResult<T> = Result<T, PromissoriaError>;
