//! Stress testing against named curve scenarios.

pub mod scenarios;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use log::debug;

use oxbow_bonds::instruments::Bond;
use oxbow_bonds::ForwardFixings;
use oxbow_core::types::Date;
use oxbow_curves::RateCurve;

use crate::config::AnalyticsConfig;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::parallel::maybe_parallel_map;

/// A pure curve shift: maps the curve's rate vector to a new rate vector,
/// index-aligned with the tenors.
pub type ShiftFn = Box<dyn Fn(&[f64]) -> Vec<f64> + Send + Sync>;

/// Result of repricing one instrument under one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressResult {
    /// Name of the scenario that produced this result.
    pub scenario: String,
    /// Clean price off the unshifted curve.
    pub base_price: f64,
    /// Clean price off the shifted curve.
    pub stressed_price: f64,
    /// Absolute price change.
    pub price_change: f64,
    /// Price change as a percentage of the base price.
    pub percentage_change: f64,
}

/// A named registry of stress scenarios.
///
/// Each scenario is a pure function over the curve's rate vector; running
/// one builds a new shifted curve, reprices, and reports the change. The
/// registry iterates in name order, so batch results are deterministic.
///
/// # Example
///
/// ```rust
/// use oxbow_analytics::stress::StressTestEngine;
///
/// let engine = StressTestEngine::with_standard_scenarios();
/// assert!(engine.scenario_names().any(|n| n == "parallel_up_100bp"));
/// ```
#[derive(Default)]
pub struct StressTestEngine {
    scenarios: BTreeMap<String, ShiftFn>,
}

impl StressTestEngine {
    /// Creates an engine with no registered scenarios.
    #[must_use]
    pub fn new() -> Self {
        Self {
            scenarios: BTreeMap::new(),
        }
    }

    /// Creates an engine preloaded with the standard scenario set:
    /// parallel shifts, steepening/flattening, and the fixed historical
    /// scenarios.
    #[must_use]
    pub fn with_standard_scenarios() -> Self {
        let mut engine = Self::new();

        engine.add_parallel_shift("parallel_up_50bp", 50.0);
        engine.add_parallel_shift("parallel_up_100bp", 100.0);
        engine.add_parallel_shift("parallel_up_200bp", 200.0);
        engine.add_parallel_shift("parallel_down_50bp", -50.0);
        engine.add_parallel_shift("parallel_down_100bp", -100.0);

        // Pivot between the short and long halves of a typical curve
        engine.add_steepening("steepening_50bp", 0.0, 50.0, 3);
        engine.add_steepening("flattening_50bp", 50.0, 0.0, 3);

        engine.add_scenario("financial_crisis_2008", Box::new(scenarios::financial_crisis_2008));
        engine.add_scenario("taper_tantrum_2013", Box::new(scenarios::taper_tantrum_2013));

        engine
    }

    /// Registers a scenario under a name, replacing any existing one.
    pub fn add_scenario(&mut self, name: impl Into<String>, shift: ShiftFn) {
        self.scenarios.insert(name.into(), shift);
    }

    /// Registers a uniform shift of `shift_bps` basis points.
    pub fn add_parallel_shift(&mut self, name: impl Into<String>, shift_bps: f64) {
        let shift = shift_bps / 10_000.0;
        self.add_scenario(
            name,
            Box::new(move |rates| rates.iter().map(|r| r + shift).collect()),
        );
    }

    /// Registers a steepening/flattening shift: `short_bps` applies to
    /// rates before `pivot_index`, `long_bps` from the pivot onward.
    pub fn add_steepening(
        &mut self,
        name: impl Into<String>,
        short_bps: f64,
        long_bps: f64,
        pivot_index: usize,
    ) {
        let short = short_bps / 10_000.0;
        let long = long_bps / 10_000.0;
        self.add_scenario(
            name,
            Box::new(move |rates| {
                rates
                    .iter()
                    .enumerate()
                    .map(|(i, r)| if i < pivot_index { r + short } else { r + long })
                    .collect()
            }),
        );
    }

    /// Returns the registered scenario names in iteration order.
    pub fn scenario_names(&self) -> impl Iterator<Item = &str> {
        self.scenarios.keys().map(String::as_str)
    }

    /// Runs a single scenario against one instrument.
    ///
    /// # Errors
    ///
    /// * [`AnalyticsError::ScenarioNotFound`] for an unregistered name
    /// * [`AnalyticsError::DegeneratePrice`] if the base price is zero
    pub fn run_scenario(
        &self,
        bond: &Bond,
        valuation_date: Date,
        curve: &RateCurve,
        scenario_name: &str,
        fixings: Option<&ForwardFixings>,
    ) -> AnalyticsResult<StressResult> {
        let shift = self
            .scenarios
            .get(scenario_name)
            .ok_or_else(|| AnalyticsError::scenario_not_found(scenario_name))?;

        let base_price = bond.price(valuation_date, curve, fixings)?;
        if base_price == 0.0 {
            return Err(AnalyticsError::degenerate_price(bond.contract_id()));
        }

        let shifted_curve = curve.with_rates(shift(curve.rates()))?;
        let stressed_price = bond.price(valuation_date, &shifted_curve, fixings)?;

        let price_change = stressed_price - base_price;
        debug!(
            "scenario {scenario_name} on {}: {base_price:.4} -> {stressed_price:.4}",
            bond.contract_id()
        );

        Ok(StressResult {
            scenario: scenario_name.to_string(),
            base_price,
            stressed_price,
            price_change,
            percentage_change: price_change / base_price * 100.0,
        })
    }

    /// Runs every registered scenario against one instrument.
    pub fn run_all_scenarios(
        &self,
        bond: &Bond,
        valuation_date: Date,
        curve: &RateCurve,
        fixings: Option<&ForwardFixings>,
    ) -> AnalyticsResult<BTreeMap<String, StressResult>> {
        let mut results = BTreeMap::new();
        for name in self.scenarios.keys() {
            results.insert(
                name.clone(),
                self.run_scenario(bond, valuation_date, curve, name, fixings)?,
            );
        }
        Ok(results)
    }

    /// Runs one scenario across a list of instruments, keyed by contract
    /// identifier (or a position-derived key when the identifier is
    /// blank).
    ///
    /// Instrument repricings are independent, so large portfolios run in
    /// parallel when the `parallel` feature and configuration allow.
    pub fn run_multi_bond(
        &self,
        bonds: &[Bond],
        valuation_date: Date,
        curve: &RateCurve,
        scenario_name: &str,
        fixings: Option<&ForwardFixings>,
        config: &AnalyticsConfig,
    ) -> AnalyticsResult<BTreeMap<String, StressResult>> {
        if !self.scenarios.contains_key(scenario_name) {
            return Err(AnalyticsError::scenario_not_found(scenario_name));
        }

        let indexed: Vec<(usize, &Bond)> = bonds.iter().enumerate().collect();
        let outcomes = maybe_parallel_map(&indexed, config, |(i, bond)| {
            let key = if bond.contract_id().trim().is_empty() {
                format!("bond_{i}")
            } else {
                bond.contract_id().to_string()
            };
            (
                key,
                self.run_scenario(bond, valuation_date, curve, scenario_name, fixings),
            )
        });

        let mut results = BTreeMap::new();
        for (key, outcome) in outcomes {
            results.insert(key, outcome?);
        }
        Ok(results)
    }
}

impl std::fmt::Debug for StressTestEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StressTestEngine")
            .field("scenarios", &self.scenarios.keys().collect::<Vec<_>>())
            .finish()
    }
}
