//! Value-at-risk and expected shortfall estimation.
//!
//! All estimators share one pattern: perturb the solved yield, reprice,
//! collect percentage price changes, and take the tail. They differ only
//! in where the yield perturbations come from:
//!
//! - [`VarEngine::historical_var`]: day-over-day deltas of an observed
//!   yield series
//! - [`VarEngine::parametric_var`]: closed form from modified duration and
//!   an assumed normal yield distribution
//! - [`VarEngine::monte_carlo_var`] / [`VarEngine::expected_shortfall`]:
//!   seeded normal simulation

mod historical;
mod monte_carlo;
mod parametric;

use oxbow_bonds::instruments::Bond;
use oxbow_bonds::ForwardFixings;
use oxbow_core::types::Date;
use oxbow_curves::RateCurve;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Trading days per year, for scaling annual volatilities.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Default seed for the Monte Carlo estimators.
pub const DEFAULT_MC_SEED: u64 = 42;

/// Tail-risk estimator for a single instrument.
///
/// Construction solves the base price and yield once; each estimator then
/// reprices in yield space. The engine borrows its inputs and holds no
/// other state, so engines for different instruments can run concurrently.
///
/// # Example
///
/// ```rust
/// use oxbow_analytics::var::VarEngine;
/// use oxbow_bonds::instruments::{Bond, FixedRateBond};
/// use oxbow_core::types::{Date, Frequency};
/// use oxbow_curves::RateCurve;
///
/// let valuation = Date::from_ymd(2023, 1, 1).unwrap();
/// let bond = Bond::Fixed(FixedRateBond::new(
///     "CORP-001", "5% note", valuation,
///     Date::from_ymd(2028, 1, 1).unwrap(),
///     1000.0, 0.05, Frequency::SemiAnnual,
/// ).unwrap());
/// let curve = RateCurve::new(valuation, vec![1.0, 5.0], vec![0.05, 0.05]).unwrap();
///
/// let engine = VarEngine::new(&bond, valuation, &curve, None).unwrap();
/// let var = engine.parametric_var(0.01, 0.95, 10).unwrap();
/// assert!(var > 0.0);
/// ```
#[derive(Debug)]
pub struct VarEngine<'a> {
    bond: &'a Bond,
    valuation_date: Date,
    fixings: Option<&'a ForwardFixings>,
    current_yield: f64,
    current_price: f64,
}

impl<'a> VarEngine<'a> {
    /// Builds an engine for one instrument, solving the base price and
    /// yield off the supplied curve.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyticsError::DegeneratePrice`] when the instrument has
    /// no value to normalize against (e.g., nothing outstanding at the
    /// valuation date).
    pub fn new(
        bond: &'a Bond,
        valuation_date: Date,
        curve: &RateCurve,
        fixings: Option<&'a ForwardFixings>,
    ) -> AnalyticsResult<Self> {
        let market_price = bond.price(valuation_date, curve, fixings)?;
        if market_price == 0.0 {
            return Err(AnalyticsError::degenerate_price(bond.contract_id()));
        }

        let current_yield = bond.yield_to_maturity(valuation_date, market_price, fixings)?;
        let current_price = bond.price_from_yield(valuation_date, current_yield, fixings)?;
        if current_price == 0.0 {
            return Err(AnalyticsError::degenerate_price(bond.contract_id()));
        }

        Ok(Self {
            bond,
            valuation_date,
            fixings,
            current_yield,
            current_price,
        })
    }

    /// Returns the solved base yield.
    #[must_use]
    pub fn current_yield(&self) -> f64 {
        self.current_yield
    }

    /// Returns the yield-space base price (% of par).
    #[must_use]
    pub fn current_price(&self) -> f64 {
        self.current_price
    }

    /// Reprices at `current_yield + delta` and returns the fractional
    /// price change for each delta.
    fn percentage_changes(
        &self,
        yield_deltas: impl IntoIterator<Item = f64>,
    ) -> AnalyticsResult<Vec<f64>> {
        let mut changes = Vec::new();
        for delta in yield_deltas {
            let shocked = self.bond.price_from_yield(
                self.valuation_date,
                self.current_yield + delta,
                self.fixings,
            )?;
            changes.push((shocked - self.current_price) / self.current_price);
        }
        Ok(changes)
    }

    /// Sorts changes ascending (worst first) and returns them.
    fn sorted_ascending(mut changes: Vec<f64>) -> Vec<f64> {
        changes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        changes
    }

    /// Index of the VaR boundary in an ascending-sorted change vector.
    fn tail_index(n: usize, confidence_level: f64) -> usize {
        (((n as f64) * (1.0 - confidence_level)).floor() as usize).min(n - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxbow_bonds::instruments::FixedRateBond;
    use oxbow_core::types::Frequency;

    pub(super) fn sample_bond() -> Bond {
        Bond::Fixed(
            FixedRateBond::new(
                "CORP-001",
                "5% five year",
                Date::from_ymd(2023, 1, 1).unwrap(),
                Date::from_ymd(2028, 1, 1).unwrap(),
                1000.0,
                0.05,
                Frequency::SemiAnnual,
            )
            .unwrap(),
        )
    }

    pub(super) fn sample_curve() -> RateCurve {
        RateCurve::new(
            Date::from_ymd(2023, 1, 1).unwrap(),
            vec![0.5, 1.0, 2.0, 5.0, 10.0],
            vec![0.048, 0.049, 0.05, 0.051, 0.052],
        )
        .unwrap()
    }

    #[test]
    fn test_engine_solves_base_state() {
        let bond = sample_bond();
        let curve = sample_curve();
        let engine =
            VarEngine::new(&bond, Date::from_ymd(2023, 1, 1).unwrap(), &curve, None).unwrap();

        assert!(engine.current_yield() > 0.0);
        assert!(engine.current_price() > 0.0);
    }

    #[test]
    fn test_degenerate_price_rejected_at_construction() {
        let bond = sample_bond();
        let curve = sample_curve();

        // At maturity nothing is outstanding
        let result = VarEngine::new(&bond, Date::from_ymd(2028, 1, 1).unwrap(), &curve, None);
        assert!(matches!(result, Err(AnalyticsError::DegeneratePrice { .. })));
    }

    #[test]
    fn test_tail_index_bounds() {
        assert_eq!(VarEngine::tail_index(100, 0.95), 5);
        assert_eq!(VarEngine::tail_index(100, 0.99), 1);
        assert_eq!(VarEngine::tail_index(10, 0.95), 0);
        // Clamped into range for tiny samples
        assert_eq!(VarEngine::tail_index(1, 0.5), 0);
    }
}
