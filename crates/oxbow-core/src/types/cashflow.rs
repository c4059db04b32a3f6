//! Cash flow type for bond valuation.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Date;
use crate::error::CoreResult;
use crate::traits::DiscountCurve;

/// Type of cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CashFlowKind {
    /// Regular coupon payment
    Coupon,
    /// Principal repayment at maturity
    Principal,
    /// Combined coupon and principal (final payment)
    CouponAndPrincipal,
}

impl fmt::Display for CashFlowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CashFlowKind::Coupon => "Coupon",
            CashFlowKind::Principal => "Principal",
            CashFlowKind::CouponAndPrincipal => "Coupon+Principal",
        };
        write!(f, "{name}")
    }
}

/// A dated cash flow.
///
/// Created by an instrument's schedule generator and consumed read-only by
/// the valuation engine.
///
/// # Example
///
/// ```rust
/// use oxbow_core::types::{CashFlow, CashFlowKind, Date};
///
/// let cf = CashFlow::coupon(Date::from_ymd(2025, 6, 15).unwrap(), 25.0);
/// assert_eq!(cf.kind(), CashFlowKind::Coupon);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Payment date
    date: Date,
    /// Cash flow amount in currency units
    amount: f64,
    /// Type of cash flow
    kind: CashFlowKind,
}

impl CashFlow {
    /// Creates a new cash flow.
    #[must_use]
    pub fn new(date: Date, amount: f64, kind: CashFlowKind) -> Self {
        Self { date, amount, kind }
    }

    /// Creates a coupon cash flow.
    #[must_use]
    pub fn coupon(date: Date, amount: f64) -> Self {
        Self::new(date, amount, CashFlowKind::Coupon)
    }

    /// Creates a principal cash flow.
    #[must_use]
    pub fn principal(date: Date, amount: f64) -> Self {
        Self::new(date, amount, CashFlowKind::Principal)
    }

    /// Creates a final cash flow combining a coupon with the principal.
    #[must_use]
    pub fn final_payment(date: Date, coupon: f64, principal: f64) -> Self {
        Self::new(date, coupon + principal, CashFlowKind::CouponAndPrincipal)
    }

    /// Returns the payment date.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the cash flow amount.
    #[must_use]
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the cash flow type.
    #[must_use]
    pub fn kind(&self) -> CashFlowKind {
        self.kind
    }

    /// Calculates the present value of this cash flow.
    ///
    /// Flows on or before the valuation date contribute nothing; future
    /// flows are discounted with the supplied curve.
    pub fn present_value(
        &self,
        valuation_date: Date,
        curve: &impl DiscountCurve,
    ) -> CoreResult<f64> {
        if self.date <= valuation_date {
            return Ok(0.0);
        }

        let df = curve.discount_factor(valuation_date, self.date)?;
        Ok(self.amount * df)
    }
}
