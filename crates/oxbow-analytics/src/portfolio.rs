//! Per-bond and portfolio-wide analysis records.
//!
//! The records here are the engine's exporter-facing surface: flat,
//! serde-serializable shapes an external writer can persist however it
//! likes.

use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};

use oxbow_bonds::instruments::Bond;
use oxbow_bonds::ForwardFixings;
use oxbow_core::types::Date;
use oxbow_curves::RateCurve;

use crate::config::AnalyticsConfig;
use crate::error::AnalyticsResult;
use crate::parallel::maybe_parallel_map;
use crate::risk::interest_rate_risk;

/// Full valuation and risk record for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondAnalysis {
    /// Contract identifier.
    pub contract_id: String,
    /// Security description.
    pub security_desc: String,
    /// Issue date.
    pub issue_date: Date,
    /// Maturity date.
    pub maturity_date: Date,
    /// Clean price off the curve (% of par).
    pub price: f64,
    /// Yield to maturity at that price.
    pub ytm: f64,
    /// Macaulay duration in years.
    pub duration: f64,
    /// Modified duration.
    pub modified_duration: f64,
    /// Convexity in years squared.
    pub convexity: f64,
    /// Dollar value of one basis point.
    pub dv01: f64,
    /// Estimated % price impact of a 100bp rate rise.
    pub price_100bp: f64,
}

/// One exported cash flow row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowRow {
    /// Payment date.
    pub payment_date: Date,
    /// Payment amount in currency units.
    pub amount: f64,
}

/// Values one instrument and assembles its full analysis record.
///
/// # Errors
///
/// Returns [`crate::error::AnalyticsError::DegeneratePrice`] when nothing
/// is outstanding at the valuation date; a matured instrument has no
/// meaningful report.
pub fn analyze_bond(
    bond: &Bond,
    valuation_date: Date,
    curve: &RateCurve,
    fixings: Option<&ForwardFixings>,
) -> AnalyticsResult<BondAnalysis> {
    let price = bond.price(valuation_date, curve, fixings)?;
    if price == 0.0 {
        return Err(crate::error::AnalyticsError::degenerate_price(
            bond.contract_id(),
        ));
    }
    let ytm = bond.yield_to_maturity(valuation_date, price, fixings)?;
    let report = interest_rate_risk(bond, valuation_date, ytm, fixings)?;

    Ok(BondAnalysis {
        contract_id: bond.contract_id().to_string(),
        security_desc: bond.security_desc().to_string(),
        issue_date: bond.issue_date(),
        maturity_date: bond.maturity_date(),
        price,
        ytm,
        duration: report.duration,
        modified_duration: report.modified_duration,
        convexity: report.convexity,
        dv01: report.dv01,
        price_100bp: report.price_100bp,
    })
}

/// Analyzes a portfolio, keyed by contract identifier.
///
/// Per-bond valuations are independent and run in parallel when the
/// `parallel` feature and configuration allow. The first failed valuation
/// aborts the batch; use [`analyze_portfolio_lenient`] to skip failures
/// instead.
pub fn analyze_portfolio(
    bonds: &[Bond],
    valuation_date: Date,
    curve: &RateCurve,
    fixings: Option<&ForwardFixings>,
    config: &AnalyticsConfig,
) -> AnalyticsResult<BTreeMap<String, BondAnalysis>> {
    let analyses = maybe_parallel_map(bonds, config, |bond| {
        analyze_bond(bond, valuation_date, curve, fixings)
    });

    let mut results = BTreeMap::new();
    for analysis in analyses {
        let analysis = analysis?;
        results.insert(analysis.contract_id.clone(), analysis);
    }
    Ok(results)
}

/// Analyzes a portfolio, skipping instruments whose valuation fails.
///
/// Failures are logged and omitted from the result; the caller decides
/// whether a partial portfolio is acceptable.
pub fn analyze_portfolio_lenient(
    bonds: &[Bond],
    valuation_date: Date,
    curve: &RateCurve,
    fixings: Option<&ForwardFixings>,
    config: &AnalyticsConfig,
) -> BTreeMap<String, BondAnalysis> {
    let analyses = maybe_parallel_map(bonds, config, |bond| {
        (
            bond.contract_id().to_string(),
            analyze_bond(bond, valuation_date, curve, fixings),
        )
    });

    let mut results = BTreeMap::new();
    for (contract_id, analysis) in analyses {
        match analysis {
            Ok(analysis) => {
                results.insert(contract_id, analysis);
            }
            Err(e) => warn!("skipping {contract_id}: {e}"),
        }
    }
    results
}

/// Exports an instrument's full schedule as flat rows.
pub fn cash_flow_rows(
    bond: &Bond,
    fixings: Option<&ForwardFixings>,
) -> AnalyticsResult<Vec<CashFlowRow>> {
    Ok(bond
        .cash_flows(fixings)?
        .iter()
        .map(|cf| CashFlowRow {
            payment_date: cf.date(),
            amount: cf.amount(),
        })
        .collect())
}
