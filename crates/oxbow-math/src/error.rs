//! Error types for numerical operations.

use thiserror::Error;

/// A specialized Result type for numerical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during root finding.
#[derive(Error, Debug, Clone)]
pub enum MathError {
    /// Root-finding algorithm failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    NotConverged {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// Derivative too close to zero for a Newton step.
    #[error("Derivative too small at x = {x}: {derivative:.2e}")]
    DerivativeTooSmall {
        /// Point at which the derivative was evaluated.
        x: f64,
        /// The near-zero derivative value.
        derivative: f64,
    },

    /// Invalid bracket for a bracketing method.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have the same sign")]
    InvalidBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },
}

impl MathError {
    /// Creates a non-convergence error.
    #[must_use]
    pub fn not_converged(iterations: u32, residual: f64) -> Self {
        Self::NotConverged {
            iterations,
            residual,
        }
    }
}
