//! Yield-to-maturity solving.

use log::debug;

use oxbow_core::daycounts;
use oxbow_core::types::Date;
use oxbow_math::solvers::{bisection, newton_raphson, SolverConfig};

use crate::cashflows::ForwardFixings;
use crate::error::{BondError, BondResult};
use crate::instruments::{Bond, ZeroCouponBond};

/// Lower bound of the bisection fallback bracket (0% yield).
const FALLBACK_BRACKET_LO: f64 = 0.0;

/// Upper bound of the bisection fallback bracket (20% yield).
const FALLBACK_BRACKET_HI: f64 = 0.20;

/// Yield-to-maturity solver.
///
/// Solves `PV(y) = market_price` in yield space. Newton-Raphson runs
/// first, seeded at the instrument's coupon rate (spread for floaters);
/// any Newton failure falls back to bisection over the 0%-20% yield
/// bracket. If the bracket does not straddle a root, the failure is
/// terminal: the market price is inconsistent with any yield in range.
///
/// Zero-coupon bonds skip the iteration entirely; with a single cash flow
/// the yield has the closed form `(redemption / price)^(1/t) - 1`.
///
/// # Example
///
/// ```rust
/// use oxbow_bonds::instruments::{Bond, FixedRateBond};
/// use oxbow_bonds::pricing::YieldSolver;
/// use oxbow_core::types::{Date, Frequency};
///
/// let bond = Bond::Fixed(FixedRateBond::new(
///     "B", "5% note",
///     Date::from_ymd(2023, 1, 1).unwrap(),
///     Date::from_ymd(2028, 1, 1).unwrap(),
///     1000.0, 0.05, Frequency::SemiAnnual,
/// ).unwrap());
///
/// let valuation = Date::from_ymd(2023, 1, 1).unwrap();
/// let ytm = YieldSolver::new().solve(&bond, valuation, 95.0, None).unwrap();
/// assert!(ytm > 0.05); // discount bond yields above its coupon
/// ```
#[derive(Debug, Clone)]
pub struct YieldSolver {
    config: SolverConfig,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a solver with the default tolerance (1e-8) and iteration
    /// budget (100).
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Creates a solver with an explicit configuration.
    #[must_use]
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solves for the yield that reproduces `market_price` (% of par).
    ///
    /// # Errors
    ///
    /// Returns [`BondError::YieldSolveFailed`] when Newton-Raphson fails
    /// and the bisection bracket cannot straddle a root.
    pub fn solve(
        &self,
        bond: &Bond,
        valuation_date: Date,
        market_price: f64,
        fixings: Option<&ForwardFixings>,
    ) -> BondResult<f64> {
        if let Bond::Zero(zero) = bond {
            return Ok(zero_coupon_yield(zero, valuation_date, market_price));
        }

        let target = market_price / 100.0 * bond.par_value();
        let flows = bond.remaining_cash_flows(valuation_date, fixings)?;

        // Precompute (time, amount) pairs once; both closures share them
        let cf_data: Vec<(f64, f64)> = flows
            .iter()
            .map(|cf| {
                (
                    daycounts::year_fraction(valuation_date, cf.date()),
                    cf.amount(),
                )
            })
            .collect();

        let objective = |y: f64| {
            cf_data
                .iter()
                .map(|(t, amount)| amount * (-y * t).exp())
                .sum::<f64>()
                - target
        };
        let derivative = |y: f64| {
            cf_data
                .iter()
                .map(|(t, amount)| -amount * t * (-y * t).exp())
                .sum::<f64>()
        };

        match newton_raphson(&objective, derivative, bond.solver_seed_rate(), &self.config) {
            Ok(result) => Ok(result.root),
            Err(newton_err) => {
                debug!(
                    "Newton-Raphson failed for {} ({newton_err}); falling back to bisection",
                    bond.contract_id()
                );
                bisection(
                    &objective,
                    FALLBACK_BRACKET_LO,
                    FALLBACK_BRACKET_HI,
                    &self.config,
                )
                .map(|result| result.root)
                .map_err(|source| BondError::YieldSolveFailed { source })
            }
        }
    }
}

impl Bond {
    /// Solves for the yield to maturity at a given market price (% of par)
    /// using the default solver settings.
    pub fn yield_to_maturity(
        &self,
        valuation_date: Date,
        market_price: f64,
        fixings: Option<&ForwardFixings>,
    ) -> BondResult<f64> {
        YieldSolver::new().solve(self, valuation_date, market_price, fixings)
    }
}

/// Closed-form zero-coupon yield: `(redemption / price)^(1/t) - 1`.
///
/// Degenerate inputs (non-positive price or no time left) yield 0.0, as
/// there is no meaningful rate to report.
fn zero_coupon_yield(zero: &ZeroCouponBond, valuation_date: Date, market_price: f64) -> f64 {
    let market_price_decimal = market_price / 100.0;
    let years_to_maturity = daycounts::year_fraction(valuation_date, zero.maturity_date());

    if years_to_maturity <= 0.0 || market_price_decimal <= 0.0 {
        return 0.0;
    }

    let redemption = zero.par_value();
    let price = market_price_decimal * zero.par_value();
    (redemption / price).powf(1.0 / years_to_maturity) - 1.0
}
