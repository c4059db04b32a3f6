//! Interest rate risk reports.

mod key_rate;

pub use key_rate::{
    key_rate_durations, key_rate_durations_1bp, KeyRateDuration, KEY_TENOR_TOLERANCE,
};

use serde::{Deserialize, Serialize};

use oxbow_bonds::instruments::Bond;
use oxbow_bonds::ForwardFixings;
use oxbow_core::traits::DiscountCurve;
use oxbow_core::types::Date;

use crate::error::{AnalyticsError, AnalyticsResult};

/// One basis point as a decimal.
pub(crate) const ONE_BASIS_POINT: f64 = 0.0001;

/// Aggregate interest rate risk metrics for one instrument.
///
/// `price_100bp` is a second-order estimate of the percentage price
/// impact of a 100bp upward rate move:
/// `-D_mod * 0.01 * 100 + 0.5 * C * 0.01^2 * 100`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    /// Macaulay duration in years.
    pub duration: f64,
    /// Modified duration.
    pub modified_duration: f64,
    /// Convexity in years squared.
    pub convexity: f64,
    /// Dollar value of one basis point.
    pub dv01: f64,
    /// Estimated % price impact of a 100bp rate rise.
    pub price_100bp: f64,
}

/// Computes the aggregate risk report at a given yield.
pub fn interest_rate_risk(
    bond: &Bond,
    valuation_date: Date,
    yield_rate: f64,
    fixings: Option<&ForwardFixings>,
) -> AnalyticsResult<RiskReport> {
    let duration = bond.duration(valuation_date, yield_rate, fixings)?;
    let modified_duration = bond.modified_duration(valuation_date, yield_rate, fixings)?;
    let convexity = bond.convexity(valuation_date, yield_rate, fixings)?;
    let dv01 = bond.dv01(valuation_date, yield_rate, fixings)?;

    let price_100bp =
        -modified_duration * 0.01 * 100.0 + 0.5 * convexity * 0.01 * 0.01 * 100.0;

    Ok(RiskReport {
        duration,
        modified_duration,
        convexity,
        dv01,
        price_100bp,
    })
}

/// Computes the percentage price change for a small yield shift.
///
/// The current yield is solved from the bond's curve price; the bond is
/// then repriced at the shifted yield and the change reported as a
/// percentage of the base price.
pub fn price_sensitivity<C: DiscountCurve>(
    bond: &Bond,
    valuation_date: Date,
    curve: &C,
    yield_shift: f64,
    fixings: Option<&ForwardFixings>,
) -> AnalyticsResult<f64> {
    let market_price = bond.price(valuation_date, curve, fixings)?;
    let current_yield = bond.yield_to_maturity(valuation_date, market_price, fixings)?;

    let base = bond.price_from_yield(valuation_date, current_yield, fixings)?;
    if base == 0.0 {
        return Err(AnalyticsError::degenerate_price(bond.contract_id()));
    }

    let shifted = bond.price_from_yield(valuation_date, current_yield + yield_shift, fixings)?;
    Ok((shifted - base) / base * 100.0)
}

/// Computes spread duration: sensitivity to a parallel credit spread move.
///
/// With discounting at a single all-in yield, a spread shift is
/// indistinguishable from a yield shift, so spread duration equals
/// modified duration at the solved yield.
pub fn spread_duration<C: DiscountCurve>(
    bond: &Bond,
    valuation_date: Date,
    curve: &C,
    fixings: Option<&ForwardFixings>,
) -> AnalyticsResult<f64> {
    let market_price = bond.price(valuation_date, curve, fixings)?;
    let current_yield = bond.yield_to_maturity(valuation_date, market_price, fixings)?;
    Ok(bond.modified_duration(valuation_date, current_yield, fixings)?)
}
