//! Loader-facing curve construction records.
//!
//! External loaders hand the engine curve data in this fixed shape; how
//! the loader obtained it (CSV, JSON, database) is not the engine's
//! concern.

use serde::{Deserialize, Serialize};

use oxbow_core::types::Date;

use crate::curve::{RateCurve, DEFAULT_COMPOUNDING_FREQUENCY};
use crate::error::{CurveError, CurveResult};

/// A curve construction record as produced by an external loader.
///
/// Dates arrive as strings (M/D/YYYY or ISO) and are parsed
/// deterministically on conversion.
///
/// # Example
///
/// ```rust
/// use oxbow_curves::{CurveRecord, RateCurve};
///
/// let record = CurveRecord {
///     curve_date: "1/15/2025".to_string(),
///     tenors: vec![1.0, 2.0, 5.0],
///     rates: vec![0.04, 0.045, 0.05],
///     compounding_frequency: 2,
/// };
///
/// let curve = RateCurve::try_from(record).unwrap();
/// assert_eq!(curve.tenors().len(), 3);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveRecord {
    /// Reference date for the curve (M/D/YYYY or YYYY-MM-DD).
    pub curve_date: String,
    /// Tenors in years.
    pub tenors: Vec<f64>,
    /// Rates corresponding to each tenor.
    pub rates: Vec<f64>,
    /// Compounding periods per year.
    #[serde(default = "default_compounding_frequency")]
    pub compounding_frequency: u32,
}

fn default_compounding_frequency() -> u32 {
    DEFAULT_COMPOUNDING_FREQUENCY
}

impl TryFrom<CurveRecord> for RateCurve {
    type Error = CurveError;

    fn try_from(record: CurveRecord) -> CurveResult<Self> {
        let curve_date = Date::parse_flexible(&record.curve_date)
            .map_err(|e| CurveError::invalid_curve(e.to_string()))?;

        RateCurve::with_frequency(
            curve_date,
            record.tenors,
            record.rates,
            record.compounding_frequency,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_conversion() {
        let record = CurveRecord {
            curve_date: "2025-01-15".to_string(),
            tenors: vec![1.0, 5.0],
            rates: vec![0.04, 0.05],
            compounding_frequency: 2,
        };

        let curve = RateCurve::try_from(record).unwrap();
        assert_eq!(curve.curve_date(), Date::from_ymd(2025, 1, 15).unwrap());
    }

    #[test]
    fn test_record_bad_date_fails() {
        let record = CurveRecord {
            curve_date: "someday".to_string(),
            tenors: vec![1.0, 5.0],
            rates: vec![0.04, 0.05],
            compounding_frequency: 2,
        };

        assert!(RateCurve::try_from(record).is_err());
    }

    #[test]
    fn test_record_deserializes_with_default_frequency() {
        let json = r#"{
            "curve_date": "1/15/2025",
            "tenors": [1.0, 2.0],
            "rates": [0.04, 0.045]
        }"#;

        let record: CurveRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.compounding_frequency, 2);

        let curve = RateCurve::try_from(record).unwrap();
        assert_eq!(curve.compounding_frequency(), 2);
    }

    #[test]
    fn test_record_shape_mismatch_fails() {
        let record = CurveRecord {
            curve_date: "2025-01-15".to_string(),
            tenors: vec![1.0, 5.0, 10.0],
            rates: vec![0.04, 0.05],
            compounding_frequency: 2,
        };

        assert!(matches!(
            RateCurve::try_from(record),
            Err(CurveError::InvalidCurve { .. })
        ));
    }
}
