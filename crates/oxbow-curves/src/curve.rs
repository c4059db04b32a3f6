//! Interest rate curve with interpolation and discounting.

use serde::{Deserialize, Serialize};

use oxbow_core::daycounts;
use oxbow_core::error::{CoreError, CoreResult};
use oxbow_core::traits::DiscountCurve;
use oxbow_core::types::Date;

use crate::error::{CurveError, CurveResult};

/// Default compounding frequency (semi-annual).
pub const DEFAULT_COMPOUNDING_FREQUENCY: u32 = 2;

/// An interest rate term structure.
///
/// Holds (tenor, rate) points sorted ascending by tenor. Rates are
/// annualized decimals; tenors are year fractions from the curve date.
/// Duplicate tenors are allowed and kept in sort order.
///
/// The curve is an immutable value object: stress scenarios and key-rate
/// bumps produce new instances via [`RateCurve::with_rates`].
///
/// # Example
///
/// ```rust
/// use oxbow_core::types::Date;
/// use oxbow_curves::RateCurve;
///
/// let curve = RateCurve::new(
///     Date::from_ymd(2025, 1, 1).unwrap(),
///     vec![0.5, 1.0, 2.0, 5.0],
///     vec![0.040, 0.042, 0.045, 0.050],
/// )
/// .unwrap();
///
/// // Clamped at the short end
/// assert_eq!(curve.rate_at(0.1).unwrap(), 0.040);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateCurve {
    /// Reference date for the curve.
    curve_date: Date,
    /// Tenors in years, sorted ascending.
    tenors: Vec<f64>,
    /// Rates corresponding to each tenor.
    rates: Vec<f64>,
    /// Compounding periods per year used for discounting.
    compounding_frequency: u32,
}

impl RateCurve {
    /// Creates a curve with the default semi-annual compounding frequency.
    ///
    /// Points are sorted ascending by tenor; duplicates are preserved.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidCurve`] if the tenor and rate vectors
    /// differ in length or carry fewer than two points.
    pub fn new(curve_date: Date, tenors: Vec<f64>, rates: Vec<f64>) -> CurveResult<Self> {
        Self::with_frequency(curve_date, tenors, rates, DEFAULT_COMPOUNDING_FREQUENCY)
    }

    /// Creates a curve with an explicit compounding frequency.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidCurve`] on shape violations or a zero
    /// compounding frequency.
    pub fn with_frequency(
        curve_date: Date,
        tenors: Vec<f64>,
        rates: Vec<f64>,
        compounding_frequency: u32,
    ) -> CurveResult<Self> {
        if tenors.len() != rates.len() {
            return Err(CurveError::invalid_curve(format!(
                "tenors and rates must have the same length: {} vs {}",
                tenors.len(),
                rates.len()
            )));
        }
        if tenors.len() < 2 {
            return Err(CurveError::invalid_curve(
                "at least two points are needed for interpolation",
            ));
        }
        if compounding_frequency == 0 {
            return Err(CurveError::invalid_curve(
                "compounding frequency must be positive",
            ));
        }

        let mut points: Vec<(f64, f64)> = tenors.into_iter().zip(rates).collect();
        points.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        let (tenors, rates): (Vec<_>, Vec<_>) = points.into_iter().unzip();

        Ok(Self {
            curve_date,
            tenors,
            rates,
            compounding_frequency,
        })
    }

    /// Builds a new curve with the same tenors, date, and compounding
    /// frequency but a replacement rate vector.
    ///
    /// This is the construction path for shocked curves.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::InvalidCurve`] if the rate vector length does
    /// not match the tenor count.
    pub fn with_rates(&self, rates: Vec<f64>) -> CurveResult<Self> {
        if rates.len() != self.tenors.len() {
            return Err(CurveError::invalid_curve(format!(
                "replacement rates must match tenor count: {} vs {}",
                rates.len(),
                self.tenors.len()
            )));
        }

        Ok(Self {
            curve_date: self.curve_date,
            tenors: self.tenors.clone(),
            rates,
            compounding_frequency: self.compounding_frequency,
        })
    }

    /// Returns the curve's reference date.
    #[must_use]
    pub fn curve_date(&self) -> Date {
        self.curve_date
    }

    /// Returns the sorted tenors in years.
    #[must_use]
    pub fn tenors(&self) -> &[f64] {
        &self.tenors
    }

    /// Returns the rates, index-aligned with [`RateCurve::tenors`].
    #[must_use]
    pub fn rates(&self) -> &[f64] {
        &self.rates
    }

    /// Returns the compounding frequency (periods per year).
    #[must_use]
    pub fn compounding_frequency(&self) -> u32 {
        self.compounding_frequency
    }

    /// Returns the interpolated rate at a given tenor.
    ///
    /// Tenors at or below the first point clamp to the first rate; at or
    /// above the last point clamp to the last rate. Interior tenors are
    /// linearly interpolated between their bracketing points. There is no
    /// extrapolation beyond the clamping.
    pub fn rate_at(&self, tenor: f64) -> CurveResult<f64> {
        if tenor <= self.tenors[0] {
            return Ok(self.rates[0]);
        }
        if tenor >= self.tenors[self.tenors.len() - 1] {
            return Ok(self.rates[self.rates.len() - 1]);
        }

        for i in 0..self.tenors.len() - 1 {
            let (t0, t1) = (self.tenors[i], self.tenors[i + 1]);
            if t0 <= tenor && tenor <= t1 {
                if (t1 - t0).abs() < f64::EPSILON {
                    // Duplicate tenor; either rate is valid
                    return Ok(self.rates[i]);
                }
                let (r0, r1) = (self.rates[i], self.rates[i + 1]);
                return Ok(r0 + (r1 - r0) * (tenor - t0) / (t1 - t0));
            }
        }

        // Unreachable given the clamping above; guarded rather than panicking
        Err(CurveError::InterpolationFailed { tenor })
    }

    /// Calculates the discount factor between two dates.
    ///
    /// The year fraction uses Actual/365. Non-positive year fractions
    /// return a factor of exactly 1.0 (no discounting for past or
    /// contemporaneous flows). Otherwise the rate is looked up at the year
    /// fraction and discrete compounding applies:
    ///
    /// `DF = (1 + r/m)^(-m*t)`
    ///
    /// where `m` is the compounding frequency.
    pub fn discount_factor_between(
        &self,
        valuation_date: Date,
        future_date: Date,
    ) -> CurveResult<f64> {
        let t = daycounts::year_fraction(valuation_date, future_date);
        if t <= 0.0 {
            return Ok(1.0);
        }

        let rate = self.rate_at(t)?;
        let m = f64::from(self.compounding_frequency);
        Ok((1.0 + rate / m).powf(-m * t))
    }
}

impl DiscountCurve for RateCurve {
    fn curve_date(&self) -> Date {
        self.curve_date
    }

    fn discount_factor(&self, valuation_date: Date, future_date: Date) -> CoreResult<f64> {
        self.discount_factor_between(valuation_date, future_date)
            .map_err(|e| CoreError::discounting(e.to_string()))
    }
}
