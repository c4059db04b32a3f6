//! Fixed rate bond.

use once_cell::sync::OnceCell;

use oxbow_core::types::{CashFlow, Date, Frequency};

use crate::cashflows::coupon_schedule;
use crate::error::{BondError, BondResult};

use super::{validate_dates, validate_par};

/// A fixed rate coupon bond.
///
/// Pays `par * coupon_rate / frequency` per period from the first coupon
/// date after issue through maturity, with the principal merged into the
/// final coupon when the dates coincide.
///
/// The schedule depends only on the terms, so it is generated once and
/// cached.
///
/// # Example
///
/// ```rust
/// use oxbow_bonds::instruments::FixedRateBond;
/// use oxbow_core::types::{Date, Frequency};
///
/// let bond = FixedRateBond::new(
///     "CORP-001",
///     "5% semi-annual corporate",
///     Date::from_ymd(2023, 1, 1).unwrap(),
///     Date::from_ymd(2025, 1, 1).unwrap(),
///     1000.0,
///     0.05,
///     Frequency::SemiAnnual,
/// )
/// .unwrap();
///
/// assert_eq!(bond.cash_flows().unwrap().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct FixedRateBond {
    contract_id: String,
    security_desc: String,
    issue_date: Date,
    maturity_date: Date,
    par_value: f64,
    coupon_rate: f64,
    frequency: Frequency,

    // Cached schedule (lazy initialization)
    schedule: OnceCell<Vec<CashFlow>>,
}

impl FixedRateBond {
    /// Creates a fixed rate bond.
    ///
    /// # Errors
    ///
    /// Returns [`BondError::InvalidSpec`] when the issue date does not
    /// precede maturity, the par value is not positive, or the frequency
    /// is zero-coupon.
    pub fn new(
        contract_id: impl Into<String>,
        security_desc: impl Into<String>,
        issue_date: Date,
        maturity_date: Date,
        par_value: f64,
        coupon_rate: f64,
        frequency: Frequency,
    ) -> BondResult<Self> {
        validate_dates(issue_date, maturity_date)?;
        validate_par(par_value)?;
        if frequency.is_zero() {
            return Err(BondError::invalid_spec(
                "fixed rate bonds require a periodic payment frequency",
            ));
        }

        Ok(Self {
            contract_id: contract_id.into(),
            security_desc: security_desc.into(),
            issue_date,
            maturity_date,
            par_value,
            coupon_rate,
            frequency,
            schedule: OnceCell::new(),
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

    /// Returns the annual coupon rate as a decimal.
    #[must_use]
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Returns the payment frequency.
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    /// Returns the full schedule from issuance to maturity.
    pub fn cash_flows(&self) -> BondResult<&[CashFlow]> {
        self.schedule
            .get_or_try_init(|| {
                coupon_schedule(
                    self.issue_date,
                    self.maturity_date,
                    self.par_value,
                    self.frequency,
                    |_| self.coupon_rate,
                )
            })
            .map(Vec::as_slice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use oxbow_core::types::CashFlowKind;

    fn sample_bond() -> FixedRateBond {
        FixedRateBond::new(
            "CORP-001",
            "5% semi-annual corporate",
            Date::from_ymd(2023, 1, 1).unwrap(),
            Date::from_ymd(2025, 1, 1).unwrap(),
            1000.0,
            0.05,
            Frequency::SemiAnnual,
        )
        .unwrap()
    }

    #[test]
    fn test_schedule_merges_final_coupon() {
        let bond = sample_bond();
        let flows = bond.cash_flows().unwrap();

        assert_eq!(flows.len(), 4);
        assert_relative_eq!(flows[0].amount(), 25.0);
        assert_eq!(flows[3].kind(), CashFlowKind::CouponAndPrincipal);
        assert_relative_eq!(flows[3].amount(), 1025.0);
    }

    #[test]
    fn test_schedule_is_cached() {
        let bond = sample_bond();
        let first = bond.cash_flows().unwrap().as_ptr();
        let second = bond.cash_flows().unwrap().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rejects_inverted_dates() {
        let result = FixedRateBond::new(
            "BAD",
            "inverted",
            Date::from_ymd(2025, 1, 1).unwrap(),
            Date::from_ymd(2023, 1, 1).unwrap(),
            1000.0,
            0.05,
            Frequency::SemiAnnual,
        );
        assert!(matches!(result, Err(BondError::InvalidSpec { .. })));
    }

    #[test]
    fn test_rejects_zero_frequency() {
        let result = FixedRateBond::new(
            "BAD",
            "no frequency",
            Date::from_ymd(2023, 1, 1).unwrap(),
            Date::from_ymd(2025, 1, 1).unwrap(),
            1000.0,
            0.05,
            Frequency::Zero,
        );
        assert!(matches!(result, Err(BondError::InvalidSpec { .. })));
    }

    #[test]
    fn test_rejects_nonpositive_par() {
        let result = FixedRateBond::new(
            "BAD",
            "free bond",
            Date::from_ymd(2023, 1, 1).unwrap(),
            Date::from_ymd(2025, 1, 1).unwrap(),
            0.0,
            0.05,
            Frequency::SemiAnnual,
        );
        assert!(matches!(result, Err(BondError::InvalidSpec { .. })));
    }
}
