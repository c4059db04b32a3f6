//! Error types for curve construction and lookup.

use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Errors that can occur while building or querying a rate curve.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// Malformed tenor/rate input at construction time.
    #[error("Invalid curve: {reason}")]
    InvalidCurve {
        /// Description of what is malformed.
        reason: String,
    },

    /// A tenor lookup failed to bracket the query point.
    ///
    /// Unreachable given end clamping, but guarded rather than panicking.
    #[error("Interpolation failed at tenor {tenor}")]
    InterpolationFailed {
        /// The tenor that could not be bracketed.
        tenor: f64,
    },
}

impl CurveError {
    /// Creates an invalid curve error.
    #[must_use]
    pub fn invalid_curve(reason: impl Into<String>) -> Self {
        Self::InvalidCurve {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_curve_display() {
        let err = CurveError::invalid_curve("need at least two points");
        assert!(err.to_string().contains("Invalid curve"));
    }
}
