//! Error types for the Oxbow core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors arising from core types and operations.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// Error in date construction, arithmetic, or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Payment frequency that cannot produce a regular monthly schedule.
    #[error("Invalid frequency: {periods} payments per year does not divide 12 months")]
    InvalidFrequency {
        /// The offending number of periods per year.
        periods: u32,
    },

    /// Discounting failed while valuing a cash flow.
    #[error("Discounting error: {reason}")]
    DiscountingError {
        /// Description of what went wrong.
        reason: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a discounting error.
    #[must_use]
    pub fn discounting(reason: impl Into<String>) -> Self {
        Self::DiscountingError {
            reason: reason.into(),
        }
    }
}
