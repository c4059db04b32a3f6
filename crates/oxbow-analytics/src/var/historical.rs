//! Historical simulation VaR.

use super::VarEngine;
use crate::error::{validate_confidence, AnalyticsError, AnalyticsResult};

impl VarEngine<'_> {
    /// Calculates historical VaR from an observed yield series.
    ///
    /// Day-over-day deltas of `historical_yields` are applied to the
    /// current yield, the bond is repriced at each, and the percentage
    /// changes sorted ascending. The change at the `floor(N * (1 - c))`
    /// index, scaled by the square root of the horizon, is reported as a
    /// positive percentage of value.
    ///
    /// # Arguments
    ///
    /// * `historical_yields` - Daily yield observations, oldest first
    /// * `confidence_level` - e.g. 0.95 for 95%
    /// * `time_horizon_days` - Horizon the daily deltas are scaled to
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::InvalidInput`] without at least two
    /// observations (no delta can be formed) or with an out-of-range
    /// confidence level.
    pub fn historical_var(
        &self,
        historical_yields: &[f64],
        confidence_level: f64,
        time_horizon_days: u32,
    ) -> AnalyticsResult<f64> {
        validate_confidence(confidence_level)?;
        if historical_yields.len() < 2 {
            return Err(AnalyticsError::invalid_input(
                "historical VaR needs at least two yield observations",
            ));
        }

        let deltas = historical_yields.windows(2).map(|w| w[1] - w[0]);
        let changes = Self::sorted_ascending(self.percentage_changes(deltas)?);

        let var_index = Self::tail_index(changes.len(), confidence_level);
        let scaling = f64::from(time_horizon_days).sqrt();

        Ok((changes[var_index] * scaling).abs() * 100.0)
    }
}
