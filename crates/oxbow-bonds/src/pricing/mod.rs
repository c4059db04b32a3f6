//! Bond valuation: curve pricing and yield-space repricing.
//!
//! Two discounting spaces coexist deliberately:
//!
//! - **Curve space** ([`Bond::price`]) discounts with the supplied curve's
//!   discrete compounding. A par coupon bond on a flat curve at its coupon
//!   rate prices to par.
//! - **Yield space** ([`Bond::price_from_yield`] and everything built on
//!   it: YTM, duration, convexity, DV01, VaR repricing) discounts at a
//!   single yield. Coupon bonds use continuous compounding, which the
//!   duration and convexity formulas assume; zeros use annual compounding
//!   so their closed-form yield round-trips exactly.

mod sensitivities;
mod yield_solver;

pub use yield_solver::YieldSolver;

use oxbow_core::daycounts;
use oxbow_core::traits::DiscountCurve;
use oxbow_core::types::{CashFlow, Date};

use crate::cashflows::ForwardFixings;
use crate::error::BondResult;
use crate::instruments::Bond;

impl Bond {
    /// Calculates the clean price off a discounting curve.
    ///
    /// The price is the present value of the remaining cash flows,
    /// expressed as a percentage of par.
    ///
    /// # Example
    ///
    /// ```rust
    /// use oxbow_bonds::instruments::{Bond, FixedRateBond};
    /// use oxbow_core::types::{Date, Frequency};
    /// use oxbow_curves::RateCurve;
    ///
    /// let issue = Date::from_ymd(2023, 1, 1).unwrap();
    /// let bond = Bond::Fixed(FixedRateBond::new(
    ///     "B", "par bond", issue,
    ///     Date::from_ymd(2025, 1, 1).unwrap(),
    ///     1000.0, 0.05, Frequency::SemiAnnual,
    /// ).unwrap());
    ///
    /// let curve = RateCurve::new(issue, vec![1.0, 5.0], vec![0.05, 0.05]).unwrap();
    /// let price = bond.price(issue, &curve, None).unwrap();
    /// assert!((price - 100.0).abs() < 0.05);
    /// ```
    pub fn price<C: DiscountCurve>(
        &self,
        valuation_date: Date,
        curve: &C,
        fixings: Option<&ForwardFixings>,
    ) -> BondResult<f64> {
        let flows = self.remaining_cash_flows(valuation_date, fixings)?;

        let mut pv = 0.0;
        for cf in &flows {
            pv += cf.present_value(valuation_date, curve)?;
        }

        Ok(pv / self.par_value() * 100.0)
    }

    /// Calculates the clean price at a single yield.
    ///
    /// This is the repricing primitive behind DV01, VaR, and yield solving.
    pub fn price_from_yield(
        &self,
        valuation_date: Date,
        yield_rate: f64,
        fixings: Option<&ForwardFixings>,
    ) -> BondResult<f64> {
        let flows = self.remaining_cash_flows(valuation_date, fixings)?;
        let pv = present_value_at_yield(&flows, valuation_date, yield_rate, self.is_zero_coupon());
        Ok(pv / self.par_value() * 100.0)
    }
}

/// Present value of a set of cash flows at a single yield.
pub(crate) fn present_value_at_yield(
    flows: &[CashFlow],
    valuation_date: Date,
    yield_rate: f64,
    zero_coupon: bool,
) -> f64 {
    flows
        .iter()
        .map(|cf| {
            let t = daycounts::year_fraction(valuation_date, cf.date());
            cf.amount() * yield_discount_factor(yield_rate, t, zero_coupon)
        })
        .sum()
}

/// Yield-space discount factor for a single time.
///
/// Coupon bonds discount continuously; zeros discount at annual
/// compounding to stay consistent with their closed-form yield.
pub(crate) fn yield_discount_factor(yield_rate: f64, t: f64, zero_coupon: bool) -> f64 {
    if zero_coupon {
        (1.0 + yield_rate).powf(-t)
    } else {
        (-yield_rate * t).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use oxbow_core::types::Frequency;
    use oxbow_curves::RateCurve;

    use crate::instruments::{FixedRateBond, ZeroCouponBond};

    fn fixed_5pct() -> Bond {
        Bond::Fixed(
            FixedRateBond::new(
                "CORP-001",
                "5% semi-annual",
                Date::from_ymd(2023, 1, 1).unwrap(),
                Date::from_ymd(2025, 1, 1).unwrap(),
                1000.0,
                0.05,
                Frequency::SemiAnnual,
            )
            .unwrap(),
        )
    }

    fn flat_curve(rate: f64) -> RateCurve {
        RateCurve::new(
            Date::from_ymd(2023, 1, 1).unwrap(),
            vec![0.25, 1.0, 2.0, 5.0, 10.0],
            vec![rate; 5],
        )
        .unwrap()
    }

    #[test]
    fn test_par_bond_prices_near_par() {
        let bond = fixed_5pct();
        let curve = flat_curve(0.05);
        let price = bond
            .price(Date::from_ymd(2023, 1, 1).unwrap(), &curve, None)
            .unwrap();

        assert_relative_eq!(price, 100.0, epsilon = 0.05);
    }

    #[test]
    fn test_higher_rates_mean_lower_price() {
        let bond = fixed_5pct();
        let valuation = Date::from_ymd(2023, 1, 1).unwrap();

        let p_low = bond.price(valuation, &flat_curve(0.03), None).unwrap();
        let p_high = bond.price(valuation, &flat_curve(0.07), None).unwrap();

        assert!(p_low > 100.0);
        assert!(p_high < 100.0);
    }

    #[test]
    fn test_price_at_maturity_is_zero() {
        let bond = fixed_5pct();
        let curve = flat_curve(0.05);

        // Strict boundary: nothing remains at maturity
        let price = bond
            .price(Date::from_ymd(2025, 1, 1).unwrap(), &curve, None)
            .unwrap();
        assert_relative_eq!(price, 0.0);
    }

    #[test]
    fn test_price_from_yield_decreases_in_yield() {
        let bond = fixed_5pct();
        let valuation = Date::from_ymd(2023, 1, 1).unwrap();

        let p1 = bond.price_from_yield(valuation, 0.03, None).unwrap();
        let p2 = bond.price_from_yield(valuation, 0.08, None).unwrap();
        assert!(p1 > p2);
    }

    #[test]
    fn test_zero_coupon_yield_space_uses_annual_compounding() {
        let zero = Bond::Zero(
            ZeroCouponBond::new(
                "ZC",
                "zero",
                Date::from_ymd(2023, 1, 1).unwrap(),
                Date::from_ymd(2025, 1, 1).unwrap(),
                1000.0,
                0.05,
            )
            .unwrap(),
        );

        let valuation = Date::from_ymd(2023, 1, 1).unwrap();
        let t = daycounts::year_fraction(valuation, zero.maturity_date());
        let price = zero.price_from_yield(valuation, 0.05, None).unwrap();

        assert_relative_eq!(price, 100.0 * 1.05_f64.powf(-t), epsilon = 1e-10);
    }
}
