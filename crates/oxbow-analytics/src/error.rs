//! Error types for the analytics layer.

use thiserror::Error;

use oxbow_bonds::error::BondError;
use oxbow_curves::error::CurveError;

/// A specialized Result type for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

/// Errors that can occur in risk, stress, and VaR calculations.
#[derive(Error, Debug, Clone)]
pub enum AnalyticsError {
    /// The instrument's current price is zero, so percentage changes
    /// cannot be normalized.
    #[error("Degenerate price: current price is zero for {contract_id}")]
    DegeneratePrice {
        /// Identifier of the affected instrument.
        contract_id: String,
    },

    /// A stress test referenced an unregistered scenario.
    #[error("Scenario not found: {name}")]
    ScenarioNotFound {
        /// The requested scenario name.
        name: String,
    },

    /// Invalid analytics input (confidence level, volatility, sample size).
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Valuation failure from the bond layer.
    #[error(transparent)]
    Bond(#[from] BondError),

    /// Curve construction or lookup failure.
    #[error(transparent)]
    Curve(#[from] CurveError),
}

impl AnalyticsError {
    /// Creates a degenerate price error.
    #[must_use]
    pub fn degenerate_price(contract_id: impl Into<String>) -> Self {
        Self::DegeneratePrice {
            contract_id: contract_id.into(),
        }
    }

    /// Creates a scenario-not-found error.
    #[must_use]
    pub fn scenario_not_found(name: impl Into<String>) -> Self {
        Self::ScenarioNotFound { name: name.into() }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Validates a confidence level lies strictly between 0 and 1.
pub(crate) fn validate_confidence(confidence_level: f64) -> AnalyticsResult<()> {
    if confidence_level <= 0.0 || confidence_level >= 1.0 {
        return Err(AnalyticsError::invalid_input(format!(
            "confidence level must be between 0 and 1, got {confidence_level}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_price_display() {
        let err = AnalyticsError::degenerate_price("CORP-001");
        assert!(err.to_string().contains("CORP-001"));
    }

    #[test]
    fn test_validate_confidence() {
        assert!(validate_confidence(0.95).is_ok());
        assert!(validate_confidence(0.0).is_err());
        assert!(validate_confidence(1.0).is_err());
        assert!(validate_confidence(1.5).is_err());
    }
}
