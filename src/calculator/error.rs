//! Calculator error types

use thiserror::Error;

pub const INVALID_AGE: &str = "Please enter a valid age.";
pub const INVALID_MEASUREMENTS: &str =
    "Please enter valid positive numbers for weight and height.";
pub const INVALID_TOTAL_HEIGHT: &str = "Total height must be a positive number.";

/// Calculation error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// A field failed to parse or broke its positivity constraint
    #[error("Invalid Input: {0}")]
    InvalidInput(String),
}

impl CalcError {
    pub fn invalid(message: impl Into<String>) -> Self {
        CalcError::InvalidInput(message.into())
    }

    /// Human-readable description without the title prefix
    pub fn message(&self) -> &str {
        match self {
            CalcError::InvalidInput(message) => message,
        }
    }
}

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;
