//! Coupon schedule generation shared by the periodic bond variants.

use oxbow_core::types::{CashFlow, Date, Frequency};

use crate::error::{BondError, BondResult};

/// Generates the full coupon and principal schedule for a periodic bond.
///
/// Starting from the issue date, payment dates step forward by
/// `12 / frequency` months until strictly past issue (the first coupon
/// date), then one coupon is emitted per step up to and including
/// maturity. Each coupon pays `par * rate / frequency`, where `rate` is
/// the annualized period rate supplied per payment date (a fixed coupon
/// for fixed-rate bonds; spread plus any forward fixing for floaters).
///
/// After the coupons, the principal merges into an existing flow exactly
/// on the maturity date, or a principal-only flow is appended. Month
/// stepping clamps the day-of-month to the target month's last valid day,
/// so end-of-month issues stay on end-of-month schedules.
///
/// # Errors
///
/// Returns [`BondError::InvalidSpec`] for a zero-coupon frequency, which
/// has no periodic schedule to generate.
pub fn coupon_schedule<R>(
    issue_date: Date,
    maturity_date: Date,
    par_value: f64,
    frequency: Frequency,
    period_rate: R,
) -> BondResult<Vec<CashFlow>>
where
    R: Fn(Date) -> f64,
{
    if frequency.is_zero() {
        return Err(BondError::invalid_spec(
            "zero-coupon instruments have no periodic schedule",
        ));
    }

    let step_months = frequency.months_per_period() as i32;
    let periods_per_year = f64::from(frequency.periods_per_year());

    // First coupon date: step until strictly past issue
    let mut current = issue_date;
    while current <= issue_date {
        current = current.add_months(step_months)?;
    }

    let mut cash_flows = Vec::new();
    while current <= maturity_date {
        let amount = par_value * period_rate(current) / periods_per_year;
        cash_flows.push(CashFlow::coupon(current, amount));
        current = current.add_months(step_months)?;
    }

    // Principal at maturity: merge into a coincident coupon or append
    if let Some(i) = cash_flows
        .iter()
        .position(|cf| cf.date() == maturity_date)
    {
        cash_flows[i] = CashFlow::final_payment(maturity_date, cash_flows[i].amount(), par_value);
    } else {
        cash_flows.push(CashFlow::principal(maturity_date, par_value));
    }

    Ok(cash_flows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use oxbow_core::types::CashFlowKind;

    #[test]
    fn test_semiannual_schedule_regular_dates() {
        let issue = Date::from_ymd(2023, 1, 1).unwrap();
        let maturity = Date::from_ymd(2025, 1, 1).unwrap();

        let flows = coupon_schedule(issue, maturity, 1000.0, Frequency::SemiAnnual, |_| 0.05)
            .unwrap();

        // Four coupons, the last merged with principal
        assert_eq!(flows.len(), 4);
        assert_eq!(flows[0].date(), Date::from_ymd(2023, 7, 1).unwrap());
        assert_relative_eq!(flows[0].amount(), 25.0);
        assert_eq!(flows[3].date(), maturity);
        assert_relative_eq!(flows[3].amount(), 1025.0);
        assert_eq!(flows[3].kind(), CashFlowKind::CouponAndPrincipal);
    }

    #[test]
    fn test_principal_appended_when_maturity_off_cycle() {
        // Maturity lands between coupon dates, so principal stands alone
        let issue = Date::from_ymd(2023, 1, 1).unwrap();
        let maturity = Date::from_ymd(2024, 10, 15).unwrap();

        let flows = coupon_schedule(issue, maturity, 1000.0, Frequency::SemiAnnual, |_| 0.05)
            .unwrap();

        let last = flows.last().unwrap();
        assert_eq!(last.date(), maturity);
        assert_relative_eq!(last.amount(), 1000.0);
        assert_eq!(last.kind(), CashFlowKind::Principal);

        // Coupons at 2023-07-01, 2024-01-01, 2024-07-01 plus the principal
        assert_eq!(flows.len(), 4);
    }

    #[test]
    fn test_quarterly_schedule_count() {
        let issue = Date::from_ymd(2024, 1, 1).unwrap();
        let maturity = Date::from_ymd(2026, 1, 1).unwrap();

        let flows = coupon_schedule(issue, maturity, 1000.0, Frequency::Quarterly, |_| 0.08)
            .unwrap();

        // Eight quarterly coupons; the final one carries the principal
        assert_eq!(flows.len(), 8);
        assert_relative_eq!(flows[0].amount(), 20.0);
        assert_relative_eq!(flows[7].amount(), 1020.0);
    }

    #[test]
    fn test_end_of_month_clamping() {
        // Issued at the end of August; the six-month step lands on the
        // last day of February
        let issue = Date::from_ymd(2023, 8, 31).unwrap();
        let maturity = Date::from_ymd(2024, 8, 31).unwrap();

        let flows = coupon_schedule(issue, maturity, 1000.0, Frequency::SemiAnnual, |_| 0.06)
            .unwrap();

        assert_eq!(flows[0].date(), Date::from_ymd(2024, 2, 29).unwrap());
    }

    #[test]
    fn test_rate_function_receives_payment_dates() {
        let issue = Date::from_ymd(2023, 1, 1).unwrap();
        let maturity = Date::from_ymd(2024, 1, 1).unwrap();
        let step_up = Date::from_ymd(2024, 1, 1).unwrap();

        // Second-period rate differs, as with a floating fixing
        let flows = coupon_schedule(issue, maturity, 1000.0, Frequency::SemiAnnual, |d| {
            if d == step_up {
                0.06
            } else {
                0.04
            }
        })
        .unwrap();

        assert_relative_eq!(flows[0].amount(), 20.0);
        assert_relative_eq!(flows[1].amount(), 1030.0); // 30 coupon + 1000 principal
    }

    #[test]
    fn test_zero_frequency_rejected() {
        let issue = Date::from_ymd(2023, 1, 1).unwrap();
        let maturity = Date::from_ymd(2025, 1, 1).unwrap();

        let result = coupon_schedule(issue, maturity, 1000.0, Frequency::Zero, |_| 0.0);
        assert!(matches!(result, Err(BondError::InvalidSpec { .. })));
    }
}
