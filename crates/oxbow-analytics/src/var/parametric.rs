//! Parametric (variance-covariance) VaR.

use statrs::distribution::{ContinuousCDF, Normal};

use super::{VarEngine, TRADING_DAYS_PER_YEAR};
use crate::error::{validate_confidence, AnalyticsError, AnalyticsResult};

impl VarEngine<'_> {
    /// Calculates parametric VaR from modified duration.
    ///
    /// `VaR = D_mod * sigma_daily * sqrt(horizon) * z` reported as a
    /// percentage of value, where `sigma_daily = annual_volatility / sqrt(252)`
    /// and `z` is the standard normal quantile magnitude at `1 - c`.
    ///
    /// # Arguments
    ///
    /// * `annual_yield_volatility` - Annualized yield volatility (decimal)
    /// * `confidence_level` - e.g. 0.95 for 95%
    /// * `time_horizon_days` - Horizon in trading days
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidInput`] for a negative volatility
    /// or an out-of-range confidence level.
    pub fn parametric_var(
        &self,
        annual_yield_volatility: f64,
        confidence_level: f64,
        time_horizon_days: u32,
    ) -> AnalyticsResult<f64> {
        validate_confidence(confidence_level)?;
        if annual_yield_volatility < 0.0 {
            return Err(AnalyticsError::invalid_input(
                "yield volatility cannot be negative",
            ));
        }

        let z_score = standard_normal_quantile(1.0 - confidence_level)?.abs();

        let daily_volatility = annual_yield_volatility / TRADING_DAYS_PER_YEAR.sqrt();
        let horizon_volatility = daily_volatility * f64::from(time_horizon_days).sqrt();

        let modified_duration = self.modified_duration()?;

        Ok(modified_duration * horizon_volatility * z_score * 100.0)
    }

    /// Modified duration at the engine's solved yield.
    fn modified_duration(&self) -> AnalyticsResult<f64> {
        Ok(self.bond.modified_duration(
            self.valuation_date,
            self.current_yield,
            self.fixings,
        )?)
    }
}

/// Standard normal inverse CDF.
fn standard_normal_quantile(p: f64) -> AnalyticsResult<f64> {
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| AnalyticsError::invalid_input(format!("normal distribution: {e}")))?;
    Ok(normal.inverse_cdf(p))
}

#[cfg(test)]
mod tests {
    use super::super::tests::{sample_bond, sample_curve};
    use super::*;
    use approx::assert_relative_eq;
    use oxbow_core::types::Date;

    #[test]
    fn test_quantile_matches_reference_z_scores() {
        assert_relative_eq!(
            standard_normal_quantile(0.05).unwrap().abs(),
            1.645,
            epsilon = 0.001
        );
        assert_relative_eq!(
            standard_normal_quantile(0.01).unwrap().abs(),
            2.326,
            epsilon = 0.001
        );
    }

    #[test]
    fn test_parametric_var_scales_with_volatility_and_confidence() {
        let bond = sample_bond();
        let curve = sample_curve();
        let engine =
            VarEngine::new(&bond, Date::from_ymd(2023, 1, 1).unwrap(), &curve, None).unwrap();

        let low_vol = engine.parametric_var(0.005, 0.95, 10).unwrap();
        let high_vol = engine.parametric_var(0.01, 0.95, 10).unwrap();
        assert_relative_eq!(high_vol, 2.0 * low_vol, epsilon = 1e-10);

        let at_99 = engine.parametric_var(0.01, 0.99, 10).unwrap();
        assert!(at_99 > high_vol);
    }

    #[test]
    fn test_negative_volatility_rejected() {
        let bond = sample_bond();
        let curve = sample_curve();
        let engine =
            VarEngine::new(&bond, Date::from_ymd(2023, 1, 1).unwrap(), &curve, None).unwrap();

        let result = engine.parametric_var(-0.01, 0.95, 10);
        assert!(matches!(result, Err(AnalyticsError::InvalidInput { .. })));
    }
}
