//! Floating rate bond.

use oxbow_core::types::{CashFlow, Date, Frequency};

use crate::cashflows::{coupon_schedule, ForwardFixings};
use crate::error::{BondError, BondResult};

use super::{validate_dates, validate_par};

/// A floating rate bond paying a spread over a reference rate.
///
/// Coupon projection uses forward fixings supplied by the caller per
/// pricing call; when a payment date has no fixing, the coupon falls back
/// to the spread alone (the reference rate is treated as not yet
/// determined). The instrument itself holds no rate state, so schedules
/// are regenerated per call rather than cached.
///
/// # Example
///
/// ```rust
/// use oxbow_bonds::instruments::FloatingRateBond;
/// use oxbow_bonds::ForwardFixings;
/// use oxbow_core::types::{Date, Frequency};
///
/// let frn = FloatingRateBond::new(
///     "FRN-001",
///     "SOFR + 80bp",
///     Date::from_ymd(2024, 1, 1).unwrap(),
///     Date::from_ymd(2026, 1, 1).unwrap(),
///     1000.0,
///     0.008,
///     "SOFR",
///     Frequency::Quarterly,
/// )
/// .unwrap();
///
/// let mut fixings = ForwardFixings::new();
/// fixings.insert(Date::from_ymd(2024, 4, 1).unwrap(), 0.045);
///
/// let flows = frn.cash_flows(Some(&fixings)).unwrap();
/// // First coupon: (4.5% + 0.8%) / 4 on 1000 par
/// assert!((flows[0].amount() - 13.25).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct FloatingRateBond {
    contract_id: String,
    security_desc: String,
    issue_date: Date,
    maturity_date: Date,
    par_value: f64,
    spread: f64,
    reference_rate_name: String,
    frequency: Frequency,
}

impl FloatingRateBond {
    /// Creates a floating rate bond.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InvalidSpec`] when the issue date does not
    /// precede maturity, the par value is not positive, or the frequency
    /// is zero-coupon.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        contract_id: impl Into<String>,
        security_desc: impl Into<String>,
        issue_date: Date,
        maturity_date: Date,
        par_value: f64,
        spread: f64,
        reference_rate_name: impl Into<String>,
        frequency: Frequency,
    ) -> BondResult<Self> {
        validate_dates(issue_date, maturity_date)?;
        validate_par(par_value)?;
        if frequency.is_zero() {
            return Err(BondError::invalid_spec(
                "floating rate bonds require a periodic payment frequency",
            ));
        }

        Ok(Self {
            contract_id: contract_id.into(),
            security_desc: security_desc.into(),
            issue_date,
            maturity_date,
            par_value,
            spread,
            reference_rate_name: reference_rate_name.into(),
            frequency,
        })
    }

    /// Returns the contract identifier.
    #[must_use]
    pub fn contract_id(&self) -> &str {
        &self.contract_id
    }

    /// Returns the security description.
    #[must_use]
    pub fn security_desc(&self) -> &str {
        &self.security_desc
    }

    /// Returns the issue date.
    #[must_use]
    pub fn issue_date(&self) -> Date {
        self.issue_date
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity_date(&self) -> Date {
        self.maturity_date
    }

    /// Returns the par value.
    #[must_use]
    pub fn par_value(&self) -> f64 {
        self.par_value
    }

    /// Returns the spread over the reference rate as a decimal.
    #[must_use]
    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// Returns the reference rate name (e.g., "SOFR").
    #[must_use]
    pub fn reference_rate_name(&self) -> &str {
        &self.reference_rate_name
    }

    /// Returns the payment frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the annualized coupon rate applicable on a payment date.
    #[must_use]
    pub fn rate_for_date(&self, date: Date, fixings: Option<&ForwardFixings>) -> f64 {
        match fixings.and_then(|f| f.rate_for(date)) {
            Some(forward) => forward + self.spread,
            None => self.spread,
        }
    }

    /// Returns the full schedule with coupons projected from `fixings`.
    pub fn cash_flows(&self, fixings: Option<&ForwardFixings>) -> BondResult<Vec<CashFlow>> {
        coupon_schedule(
            self.issue_date,
            self.maturity_date,
            self.par_value,
            self.frequency,
            |date| self.rate_for_date(date, fixings),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_frn() -> FloatingRateBond {
        FloatingRateBond::new(
            "FRN-001",
            "SOFR + 50bp",
            Date::from_ymd(2023, 1, 1).unwrap(),
            Date::from_ymd(2025, 1, 1).unwrap(),
            1000.0,
            0.005,
            "SOFR",
            Frequency::SemiAnnual,
        )
        .unwrap()
    }

    #[test]
    fn test_spread_only_without_fixings() {
        let frn = sample_frn();
        let flows = frn.cash_flows(None).unwrap();

        assert_eq!(flows.len(), 4);
        // Spread-only coupon: 0.5% / 2 on 1000 par
        assert_relative_eq!(flows[0].amount(), 2.5);
    }

    #[test]
    fn test_fixing_applies_to_matching_date_only() {
        let frn = sample_frn();
        let mut fixings = ForwardFixings::new();
        fixings.insert(Date::from_ymd(2023, 7, 1).unwrap(), 0.04);

        let flows = frn.cash_flows(Some(&fixings)).unwrap();

        // Fixed date: (4% + 0.5%) / 2 on 1000 par
        assert_relative_eq!(flows[0].amount(), 22.5);
        // Unfixed date falls back to spread alone
        assert_relative_eq!(flows[1].amount(), 2.5);
    }

    #[test]
    fn test_principal_merges_with_final_fixing() {
        let frn = sample_frn();
        let mut fixings = ForwardFixings::new();
        fixings.insert(Date::from_ymd(2025, 1, 1).unwrap(), 0.04);

        let flows = frn.cash_flows(Some(&fixings)).unwrap();

        let last = flows.last().unwrap();
        assert_relative_eq!(last.amount(), 1000.0 + 22.5);
    }

    #[test]
    fn test_same_fixings_give_same_schedule() {
        let frn = sample_frn();
        let fixings: ForwardFixings = [(Date::from_ymd(2024, 1, 1).unwrap(), 0.035)]
            .into_iter()
            .collect();

        let first = frn.cash_flows(Some(&fixings)).unwrap();
        let second = frn.cash_flows(Some(&fixings)).unwrap();
        assert_eq!(first, second);
    }
}
