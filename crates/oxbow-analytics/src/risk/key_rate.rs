//! Key-rate durations via single-node curve bumps.

use serde::{Deserialize, Serialize};

use oxbow_bonds::instruments::Bond;
use oxbow_bonds::ForwardFixings;
use oxbow_core::types::Date;
use oxbow_curves::RateCurve;

use crate::error::{AnalyticsError, AnalyticsResult};

use super::ONE_BASIS_POINT;

/// Tolerance for matching a requested key tenor to a curve node.
pub const KEY_TENOR_TOLERANCE: f64 = 1e-6;

/// Key-rate duration at one curve node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyRateDuration {
    /// The bumped tenor in years.
    pub tenor: f64,
    /// Price sensitivity to that node's rate.
    pub duration: f64,
}

/// Computes key-rate durations for the requested tenors.
///
/// For each key tenor that matches a curve node (within
/// [`KEY_TENOR_TOLERANCE`]), only that node's rate is bumped up by
/// `shift` and the bond repriced against the bumped curve:
///
/// `KRD = -(P_shifted - P_base) / (shift * P_base)`
///
/// Requested tenors with no matching node are silently omitted; key-rate
/// duration is only defined at curve nodes.
///
/// # Errors
///
/// Returns [`AnalyticsError::DegeneratePrice`] if the base price is zero.
pub fn key_rate_durations(
    bond: &Bond,
    valuation_date: Date,
    curve: &RateCurve,
    key_tenors: &[f64],
    shift: f64,
    fixings: Option<&ForwardFixings>,
) -> AnalyticsResult<Vec<KeyRateDuration>> {
    let base_price = bond.price(valuation_date, curve, fixings)?;
    if base_price == 0.0 {
        return Err(AnalyticsError::degenerate_price(bond.contract_id()));
    }

    let mut results = Vec::new();
    for &tenor in key_tenors {
        let Some(node) = curve
            .tenors()
            .iter()
            .position(|&t| (t - tenor).abs() < KEY_TENOR_TOLERANCE)
        else {
            continue;
        };

        let mut shifted_rates = curve.rates().to_vec();
        shifted_rates[node] += shift;
        let shifted_curve = curve.with_rates(shifted_rates)?;

        let shifted_price = bond.price(valuation_date, &shifted_curve, fixings)?;
        results.push(KeyRateDuration {
            tenor,
            duration: -(shifted_price - base_price) / (shift * base_price),
        });
    }

    Ok(results)
}

/// Computes key-rate durations with the standard one basis point shift.
pub fn key_rate_durations_1bp(
    bond: &Bond,
    valuation_date: Date,
    curve: &RateCurve,
    key_tenors: &[f64],
    fixings: Option<&ForwardFixings>,
) -> AnalyticsResult<Vec<KeyRateDuration>> {
    key_rate_durations(bond, valuation_date, curve, key_tenors, ONE_BASIS_POINT, fixings)
}
