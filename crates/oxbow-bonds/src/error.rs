//! Error types for bond construction and valuation.

use thiserror::Error;

use oxbow_core::error::CoreError;
use oxbow_math::error::MathError;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors that can occur while constructing or valuing a bond.
#[derive(Error, Debug, Clone)]
pub enum BondError {
    /// Invalid instrument terms at construction time.
    #[error("Invalid bond specification: {reason}")]
    InvalidSpec {
        /// Description of what is invalid.
        reason: String,
    },

    /// A loader record carried an unrecognized instrument type tag.
    #[error("Unknown instrument variant: {tag}")]
    UnknownVariant {
        /// The unrecognized type tag.
        tag: String,
    },

    /// Yield solving failed after the bisection fallback.
    ///
    /// Terminal: the market price is inconsistent with any yield in the
    /// fallback bracket. Not retried.
    #[error("Yield solve failed: {source}")]
    YieldSolveFailed {
        /// The underlying solver failure.
        #[source]
        source: MathError,
    },

    /// Date or discounting failure from the core layer.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl BondError {
    /// Creates an invalid specification error.
    #[must_use]
    pub fn invalid_spec(reason: impl Into<String>) -> Self {
        Self::InvalidSpec {
            reason: reason.into(),
        }
    }

    /// Creates an unknown variant error.
    #[must_use]
    pub fn unknown_variant(tag: impl Into<String>) -> Self {
        Self::UnknownVariant { tag: tag.into() }
    }
}
