//! Bond instrument variants.
//!
//! The instrument universe is a closed set: fixed rate, floating rate, and
//! zero coupon. Representing it as the [`Bond`] enum keeps dispatch
//! exhaustive, so adding a variant is a compile-time event rather than a
//! runtime surprise.

mod fixed_rate;
mod floating_rate;
mod zero_coupon;

pub use fixed_rate::FixedRateBond;
pub use floating_rate::FloatingRateBond;
pub use zero_coupon::ZeroCouponBond;

use oxbow_core::types::{CashFlow, Date, Frequency};

use crate::cashflows::ForwardFixings;
use crate::error::{BondError, BondResult};

/// A fixed income instrument.
///
/// All valuation entry points (`price`, `yield_to_maturity`, `duration`,
/// `convexity`, `dv01` in [`crate::pricing`]) are methods on this enum.
#[derive(Debug, Clone)]
pub enum Bond {
    /// Fixed rate coupon bond.
    Fixed(FixedRateBond),
    /// Floating rate bond paying spread over a reference rate.
    Floating(FloatingRateBond),
    /// Zero coupon bond.
    Zero(ZeroCouponBond),
}

impl Bond {
    /// Returns the contract identifier.
    #[must_use]
    pub fn contract_id(&self) -> &str {
        match self {
            Bond::Fixed(b) => b.contract_id(),
            Bond::Floating(b) => b.contract_id(),
            Bond::Zero(b) => b.contract_id(),
        }
    }

    /// Returns the security description.
    #[must_use]
    pub fn security_desc(&self) -> &str {
        match self {
            Bond::Fixed(b) => b.security_desc(),
            Bond::Floating(b) => b.security_desc(),
            Bond::Zero(b) => b.security_desc(),
        }
    }

    /// Returns the issue date.
    #[must_use]
    pub fn issue_date(&self) -> Date {
        match self {
            Bond::Fixed(b) => b.issue_date(),
            Bond::Floating(b) => b.issue_date(),
            Bond::Zero(b) => b.issue_date(),
        }
    }

    /// Returns the maturity date.
    #[must_use]
    pub fn maturity_date(&self) -> Date {
        match self {
            Bond::Fixed(b) => b.maturity_date(),
            Bond::Floating(b) => b.maturity_date(),
            Bond::Zero(b) => b.maturity_date(),
        }
    }

    /// Returns the par value.
    #[must_use]
    pub fn par_value(&self) -> f64 {
        match self {
            Bond::Fixed(b) => b.par_value(),
            Bond::Floating(b) => b.par_value(),
            Bond::Zero(b) => b.par_value(),
        }
    }

    /// Returns the payment frequency (`Frequency::Zero` for zeros).
    #[must_use]
    pub fn frequency(&self) -> Frequency {
        match self {
            Bond::Fixed(b) => b.frequency(),
            Bond::Floating(b) => b.frequency(),
            Bond::Zero(_) => Frequency::Zero,
        }
    }

    /// Returns true for the zero-coupon variant.
    #[must_use]
    pub fn is_zero_coupon(&self) -> bool {
        matches!(self, Bond::Zero(_))
    }

    /// Returns the rate used to seed iterative yield solving.
    ///
    /// The coupon rate for fixed bonds and the spread for floaters; zeros
    /// bypass iterative solving entirely.
    #[must_use]
    pub fn solver_seed_rate(&self) -> f64 {
        match self {
            Bond::Fixed(b) => b.coupon_rate(),
            Bond::Floating(b) => b.spread(),
            Bond::Zero(_) => 0.0,
        }
    }

    /// Returns the full schedule from issuance to maturity.
    ///
    /// `fixings` projects floating coupons; fixed and zero variants ignore
    /// it.
    pub fn cash_flows(&self, fixings: Option<&ForwardFixings>) -> BondResult<Vec<CashFlow>> {
        match self {
            Bond::Fixed(b) => Ok(b.cash_flows()?.to_vec()),
            Bond::Floating(b) => b.cash_flows(fixings),
            Bond::Zero(b) => Ok(b.cash_flows()),
        }
    }

    /// Returns the cash flows strictly after the valuation date.
    pub fn remaining_cash_flows(
        &self,
        valuation_date: Date,
        fixings: Option<&ForwardFixings>,
    ) -> BondResult<Vec<CashFlow>> {
        let mut flows = self.cash_flows(fixings)?;
        flows.retain(|cf| cf.date() > valuation_date);
        Ok(flows)
    }
}

/// Validates the date ordering shared by every variant.
pub(crate) fn validate_dates(issue_date: Date, maturity_date: Date) -> BondResult<()> {
    if issue_date >= maturity_date {
        return Err(BondError::invalid_spec(format!(
            "issue date {issue_date} must precede maturity date {maturity_date}"
        )));
    }
    Ok(())
}

/// Validates the par value shared by every variant.
pub(crate) fn validate_par(par_value: f64) -> BondResult<()> {
    if !(par_value > 0.0) {
        return Err(BondError::invalid_spec(format!(
            "par value must be positive, got {par_value}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_zero() -> Bond {
        Bond::Zero(
            ZeroCouponBond::new(
                "ZC-1",
                "two year zero",
                Date::from_ymd(2023, 1, 1).unwrap(),
                Date::from_ymd(2025, 1, 1).unwrap(),
                1000.0,
                0.05,
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_common_accessors() {
        let bond = sample_zero();
        assert_eq!(bond.contract_id(), "ZC-1");
        assert_eq!(bond.frequency(), Frequency::Zero);
        assert!(bond.is_zero_coupon());
    }

    #[test]
    fn test_remaining_cash_flows_strict_boundary() {
        let bond = sample_zero();
        // Valuing exactly at maturity leaves nothing outstanding
        let at_maturity = bond
            .remaining_cash_flows(Date::from_ymd(2025, 1, 1).unwrap(), None)
            .unwrap();
        assert!(at_maturity.is_empty());

        let day_before = bond
            .remaining_cash_flows(Date::from_ymd(2024, 12, 31).unwrap(), None)
            .unwrap();
        assert_eq!(day_before.len(), 1);
    }

    #[test]
    fn test_validate_dates_rejects_inverted() {
        let issue = Date::from_ymd(2025, 1, 1).unwrap();
        let maturity = Date::from_ymd(2024, 1, 1).unwrap();
        assert!(validate_dates(issue, maturity).is_err());
        assert!(validate_dates(issue, issue).is_err());
    }
}
