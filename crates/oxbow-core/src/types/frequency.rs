//! Payment frequency type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Payment frequency for coupon-bearing instruments.
///
/// Only frequencies that divide evenly into 12 months are representable,
/// so schedule generation can always step by a whole number of months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Frequency {
    /// Annual payments (1 per year)
    Annual,
    /// Semi-annual payments (2 per year) - most common for US bonds
    #[default]
    SemiAnnual,
    /// Quarterly payments (4 per year)
    Quarterly,
    /// Monthly payments (12 per year)
    Monthly,
    /// Zero coupon (no periodic payments)
    Zero,
}

impl Frequency {
    /// Constructs a frequency from a number of payments per year.
    ///
    /// Loader records carry the frequency as a plain integer; 0 denotes a
    /// zero-coupon instrument.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidFrequency` for any count that does not
    /// divide evenly into 12 months.
    pub fn from_periods(periods: u32) -> CoreResult<Self> {
        match periods {
            0 => Ok(Frequency::Zero),
            1 => Ok(Frequency::Annual),
            2 => Ok(Frequency::SemiAnnual),
            4 => Ok(Frequency::Quarterly),
            12 => Ok(Frequency::Monthly),
            _ => Err(CoreError::InvalidFrequency { periods }),
        }
    }

    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::SemiAnnual => 2,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
            Frequency::Zero => 0,
        }
    }

    /// Returns the number of months per period.
    #[must_use]
    pub fn months_per_period(&self) -> u32 {
        match self {
            Frequency::Annual => 12,
            Frequency::SemiAnnual => 6,
            Frequency::Quarterly => 3,
            Frequency::Monthly => 1,
            Frequency::Zero => 0,
        }
    }

    /// Returns true if this is a zero coupon (no periodic payments).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self, Frequency::Zero)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Frequency::Annual => "Annual",
            Frequency::SemiAnnual => "Semi-Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
            Frequency::Zero => "Zero Coupon",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_periods() {
        assert_eq!(Frequency::from_periods(0).unwrap(), Frequency::Zero);
        assert_eq!(Frequency::from_periods(1).unwrap(), Frequency::Annual);
        assert_eq!(Frequency::from_periods(2).unwrap(), Frequency::SemiAnnual);
        assert_eq!(Frequency::from_periods(4).unwrap(), Frequency::Quarterly);
        assert_eq!(Frequency::from_periods(12).unwrap(), Frequency::Monthly);
    }

    #[test]
    fn test_from_periods_rejects_irregular() {
        assert!(Frequency::from_periods(5).is_err());
        assert!(Frequency::from_periods(7).is_err());
        assert!(Frequency::from_periods(3).is_err());
    }

    #[test]
    fn test_periods_and_months_are_consistent() {
        for freq in [
            Frequency::Annual,
            Frequency::SemiAnnual,
            Frequency::Quarterly,
            Frequency::Monthly,
        ] {
            assert_eq!(freq.periods_per_year() * freq.months_per_period(), 12);
        }
    }
}
