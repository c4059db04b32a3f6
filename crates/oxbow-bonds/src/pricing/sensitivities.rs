//! Yield sensitivities: duration, convexity, and DV01.

use oxbow_core::daycounts;
use oxbow_core::types::Date;

use crate::cashflows::ForwardFixings;
use crate::error::BondResult;
use crate::instruments::Bond;

/// One basis point as a decimal.
const ONE_BASIS_POINT: f64 = 0.0001;

impl Bond {
    /// Calculates Macaulay duration in years.
    ///
    /// The present-value-weighted average time to the remaining cash
    /// flows, discounted continuously at `yield_rate`. Returns 0.0 when
    /// nothing remains outstanding.
    pub fn duration(
        &self,
        valuation_date: Date,
        yield_rate: f64,
        fixings: Option<&ForwardFixings>,
    ) -> BondResult<f64> {
        let (weighted, total) =
            self.pv_moments(valuation_date, yield_rate, fixings, |t| t)?;
        if total == 0.0 {
            return Ok(0.0);
        }
        Ok(weighted / total)
    }

    /// Calculates modified duration.
    ///
    /// Under continuous compounding this equals Macaulay duration; no
    /// further `1 + y/m` adjustment applies.
    pub fn modified_duration(
        &self,
        valuation_date: Date,
        yield_rate: f64,
        fixings: Option<&ForwardFixings>,
    ) -> BondResult<f64> {
        self.duration(valuation_date, yield_rate, fixings)
    }

    /// Calculates convexity in years squared.
    ///
    /// The present-value-weighted average squared time to the remaining
    /// cash flows. Returns 0.0 when nothing remains outstanding.
    pub fn convexity(
        &self,
        valuation_date: Date,
        yield_rate: f64,
        fixings: Option<&ForwardFixings>,
    ) -> BondResult<f64> {
        let (weighted, total) =
            self.pv_moments(valuation_date, yield_rate, fixings, |t| t * t)?;
        if total == 0.0 {
            return Ok(0.0);
        }
        Ok(weighted / total)
    }

    /// Calculates DV01: the absolute price change, in currency units, for
    /// a one basis point upward yield move.
    ///
    /// One-sided finite difference; always non-negative.
    pub fn dv01(
        &self,
        valuation_date: Date,
        yield_rate: f64,
        fixings: Option<&ForwardFixings>,
    ) -> BondResult<f64> {
        let base = self.price_from_yield(valuation_date, yield_rate, fixings)?;
        let bumped =
            self.price_from_yield(valuation_date, yield_rate + ONE_BASIS_POINT, fixings)?;

        Ok((base - bumped).abs() * self.par_value() / 100.0)
    }

    /// Sums `weight(t) * PV` and `PV` over the remaining cash flows,
    /// discounting continuously at `yield_rate`.
    fn pv_moments(
        &self,
        valuation_date: Date,
        yield_rate: f64,
        fixings: Option<&ForwardFixings>,
        weight: impl Fn(f64) -> f64,
    ) -> BondResult<(f64, f64)> {
        let flows = self.remaining_cash_flows(valuation_date, fixings)?;

        let mut weighted_sum = 0.0;
        let mut price_sum = 0.0;
        for cf in &flows {
            let t = daycounts::year_fraction(valuation_date, cf.date());
            let pv = cf.amount() * (-yield_rate * t).exp();
            weighted_sum += weight(t) * pv;
            price_sum += pv;
        }

        Ok((weighted_sum, price_sum))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use oxbow_core::types::Frequency;

    use crate::instruments::{FixedRateBond, ZeroCouponBond};

    fn fixed_bond() -> Bond {
        Bond::Fixed(
            FixedRateBond::new(
                "CORP-001",
                "5% semi-annual",
                Date::from_ymd(2023, 1, 1).unwrap(),
                Date::from_ymd(2028, 1, 1).unwrap(),
                1000.0,
                0.05,
                Frequency::SemiAnnual,
            )
            .unwrap(),
        )
    }

    fn zero_bond() -> Bond {
        Bond::Zero(
            ZeroCouponBond::new(
                "ZC",
                "five year zero",
                Date::from_ymd(2023, 1, 1).unwrap(),
                Date::from_ymd(2028, 1, 1).unwrap(),
                1000.0,
                0.05,
            )
            .unwrap(),
        )
    }

    #[test]
    fn test_duration_is_positive_and_below_maturity() {
        let bond = fixed_bond();
        let valuation = Date::from_ymd(2023, 1, 1).unwrap();

        let duration = bond.duration(valuation, 0.05, None).unwrap();
        assert!(duration > 0.0);
        // Coupons pull duration below time to maturity
        assert!(duration < 5.1);
    }

    #[test]
    fn test_zero_coupon_duration_equals_time_to_maturity() {
        let bond = zero_bond();
        let valuation = Date::from_ymd(2023, 1, 1).unwrap();
        let t = daycounts::year_fraction(valuation, bond.maturity_date());

        let duration = bond.duration(valuation, 0.05, None).unwrap();
        assert_relative_eq!(duration, t, epsilon = 1e-10);
    }

    #[test]
    fn test_modified_equals_macaulay_under_continuous() {
        let bond = fixed_bond();
        let valuation = Date::from_ymd(2023, 1, 1).unwrap();

        let mac = bond.duration(valuation, 0.05, None).unwrap();
        let modified = bond.modified_duration(valuation, 0.05, None).unwrap();
        assert_relative_eq!(mac, modified);
    }

    #[test]
    fn test_convexity_exceeds_duration_squared() {
        // Jensen: E[t^2] >= (E[t])^2 under the PV weights
        let bond = fixed_bond();
        let valuation = Date::from_ymd(2023, 1, 1).unwrap();

        let duration = bond.duration(valuation, 0.05, None).unwrap();
        let convexity = bond.convexity(valuation, 0.05, None).unwrap();
        assert!(convexity >= duration * duration - 1e-9);
    }

    #[test]
    fn test_dv01_is_nonnegative_and_small() {
        let bond = fixed_bond();
        let valuation = Date::from_ymd(2023, 1, 1).unwrap();

        let dv01 = bond.dv01(valuation, 0.05, None).unwrap();
        assert!(dv01 > 0.0);
        // A 1bp move on a 5-year 1000-par bond is roughly 0.4-0.5
        assert!(dv01 < 1.0);
    }

    #[test]
    fn test_dv01_approximates_duration_times_price() {
        let bond = fixed_bond();
        let valuation = Date::from_ymd(2023, 1, 1).unwrap();
        let y = 0.05;

        let dv01 = bond.dv01(valuation, y, None).unwrap();
        let duration = bond.modified_duration(valuation, y, None).unwrap();
        let dirty = bond.price_from_yield(valuation, y, None).unwrap() / 100.0 * 1000.0;

        // DV01 ~= D * P * 1bp for small moves
        assert_relative_eq!(dv01, duration * dirty * 0.0001, epsilon = dv01 * 0.01);
    }

    #[test]
    fn test_degenerate_schedule_reports_zero() {
        let bond = fixed_bond();
        let at_maturity = Date::from_ymd(2028, 1, 1).unwrap();

        assert_relative_eq!(bond.duration(at_maturity, 0.05, None).unwrap(), 0.0);
        assert_relative_eq!(bond.convexity(at_maturity, 0.05, None).unwrap(), 0.0);
        assert_relative_eq!(bond.dv01(at_maturity, 0.05, None).unwrap(), 0.0);
    }
}
