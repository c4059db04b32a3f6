//! Zero coupon bond.

use oxbow_core::types::{CashFlow, Date};

use crate::error::BondResult;

use super::{validate_dates, validate_par};

/// A zero coupon bond.
///
/// The schedule is a single principal payment at maturity. The quoted
/// discount rate is carried for reporting but never consulted by pricing,
/// which discounts off the supplied curve like every other variant.
///
/// # Example
///
/// ```rust
/// use oxbow_bonds::instruments::ZeroCouponBond;
/// use oxbow_core::types::Date;
///
/// let zero = ZeroCouponBond::new(
///     "ZC-001",
///     "two year zero",
///     Date::from_ymd(2023, 1, 1).unwrap(),
///     Date::from_ymd(2025, 1, 1).unwrap(),
///     1000.0,
///     0.05,
/// )
/// .unwrap();
///
/// assert_eq!(zero.cash_flows().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ZeroCouponBond {
    contract_id: String,
    security_desc: String,
    issue_date: Date,
    maturity_date: Date,
    par_value: f64,
    discount_rate: f64,
}

impl ZeroCouponBond {
    /// Creates a zero coupon bond.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::BondError::InvalidSpec`] when the issue date
    /// does not precede maturity or the par value is not positive.
    pub fn new(
        contract_id: impl Into<String>,
        security_desc: impl Into<String>,
        issue_date: Date,
        maturity_date: Date,
        par_value: f64,
        discount_rate: f64,
    ) -> BondResult<Self> {
        validate_dates(issue_date, maturity_date)?;
        validate_par(par_value)?;

        Ok(Self {
            contract_id: contract_id.into(),
            security_desc: security_desc.into(),
            issue_date,
            maturity_date,
            par_value,
            discount_rate,
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

    /// Returns the quoted discount rate (informational only).
    #[must_use]
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate
    }

    /// Returns the single principal cash flow at maturity.
    #[must_use]
    pub fn cash_flows(&self) -> Vec<CashFlow> {
        vec![CashFlow::principal(self.maturity_date, self.par_value)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use oxbow_core::types::CashFlowKind;

    #[test]
    fn test_single_principal_flow() {
        let zero = ZeroCouponBond::new(
            "ZC-001",
            "two year zero",
            Date::from_ymd(2023, 1, 1).unwrap(),
            Date::from_ymd(2025, 1, 1).unwrap(),
            1000.0,
            0.05,
        )
        .unwrap();

        let flows = zero.cash_flows();
        assert_eq!(flows.len(), 1);
        assert_eq!(flows[0].date(), zero.maturity_date());
        assert_relative_eq!(flows[0].amount(), 1000.0);
        assert_eq!(flows[0].kind(), CashFlowKind::Principal);
    }

    #[test]
    fn test_rejects_inverted_dates() {
        let result = ZeroCouponBond::new(
            "BAD",
            "inverted",
            Date::from_ymd(2025, 1, 1).unwrap(),
            Date::from_ymd(2023, 1, 1).unwrap(),
            1000.0,
            0.05,
        );
        assert!(result.is_err());
    }
}
