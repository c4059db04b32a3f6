//! Loader-facing instrument construction records.
//!
//! External loaders hand the engine instrument terms in this fixed shape.
//! Conversion validates dates, frequency, and the variant tag; everything
//! format-related (CSV columns, JSON fields, database rows) stays on the
//! loader's side of the boundary.

use serde::{Deserialize, Serialize};

use oxbow_core::types::{Date, Frequency};

use crate::error::{BondError, BondResult};
use crate::instruments::{Bond, FixedRateBond, FloatingRateBond, ZeroCouponBond};

/// An instrument construction record as produced by an external loader.
///
/// The `bond_type` tag selects the variant (case-insensitive: `fixed`,
/// `floating`, or `zero`); the matching type-specific fields must be
/// present. Dates arrive as strings (M/D/YYYY or ISO).
///
/// # Example
///
/// ```rust
/// use oxbow_bonds::instruments::Bond;
/// use oxbow_bonds::records::InstrumentRecord;
///
/// let record: InstrumentRecord = serde_json::from_str(r#"{
///     "contract_id": "CORP-001",
///     "security_desc": "5% semi-annual corporate",
///     "issue_date": "1/1/2023",
///     "maturity_date": "1/1/2025",
///     "par_value": 1000.0,
///     "bond_type": "fixed",
///     "coupon_rate": 0.05
/// }"#).unwrap();
///
/// let bond = Bond::try_from(record).unwrap();
/// assert_eq!(bond.contract_id(), "CORP-001");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentRecord {
    /// Unique contract identifier.
    pub contract_id: String,
    /// Human-readable security description.
    pub security_desc: String,
    /// Issue date (M/D/YYYY or YYYY-MM-DD).
    pub issue_date: String,
    /// Maturity date (M/D/YYYY or YYYY-MM-DD).
    pub maturity_date: String,
    /// Par value in currency units.
    pub par_value: f64,
    /// Variant tag: `fixed`, `floating`, or `zero`.
    pub bond_type: String,
    /// Annual coupon rate (fixed variant).
    #[serde(default)]
    pub coupon_rate: Option<f64>,
    /// Spread over the reference rate (floating variant).
    #[serde(default)]
    pub spread: Option<f64>,
    /// Reference rate name (floating variant).
    #[serde(default)]
    pub reference_rate_name: Option<String>,
    /// Quoted discount rate (zero variant, informational).
    #[serde(default)]
    pub discount_rate: Option<f64>,
    /// Payments per year; 0 for zero-coupon.
    #[serde(default = "default_payment_frequency")]
    pub payment_frequency: u32,
}

fn default_payment_frequency() -> u32 {
    2
}

impl InstrumentRecord {
    fn require<T: Copy>(field: Option<T>, name: &str, tag: &str) -> BondResult<T> {
        field.ok_or_else(|| {
            BondError::invalid_spec(format!("{tag} instruments require the {name} field"))
        })
    }
}

impl TryFrom<InstrumentRecord> for Bond {
    type Error = BondError;

    fn try_from(record: InstrumentRecord) -> BondResult<Self> {
        let issue_date = Date::parse_flexible(&record.issue_date)?;
        let maturity_date = Date::parse_flexible(&record.maturity_date)?;

        match record.bond_type.to_ascii_lowercase().as_str() {
            "fixed" => {
                let coupon_rate =
                    InstrumentRecord::require(record.coupon_rate, "coupon_rate", "fixed")?;
                let frequency = Frequency::from_periods(record.payment_frequency)?;
                Ok(Bond::Fixed(FixedRateBond::new(
                    record.contract_id,
                    record.security_desc,
                    issue_date,
                    maturity_date,
                    record.par_value,
                    coupon_rate,
                    frequency,
                )?))
            }
            "floating" => {
                let spread = InstrumentRecord::require(record.spread, "spread", "floating")?;
                let reference = record.reference_rate_name.ok_or_else(|| {
                    BondError::invalid_spec(
                        "floating instruments require the reference_rate_name field",
                    )
                })?;
                let frequency = Frequency::from_periods(record.payment_frequency)?;
                Ok(Bond::Floating(FloatingRateBond::new(
                    record.contract_id,
                    record.security_desc,
                    issue_date,
                    maturity_date,
                    record.par_value,
                    spread,
                    reference,
                    frequency,
                )?))
            }
            "zero" => {
                let discount_rate = record.discount_rate.unwrap_or(0.0);
                Ok(Bond::Zero(ZeroCouponBond::new(
                    record.contract_id,
                    record.security_desc,
                    issue_date,
                    maturity_date,
                    record.par_value,
                    discount_rate,
                )?))
            }
            other => Err(BondError::unknown_variant(other)),
        }
    }
}
