//! Externally owned forward-rate fixings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use oxbow_core::types::Date;

/// A table of forward reference rates keyed by payment date.
///
/// Floating-rate coupons are projected as `spread + fixing` when the
/// payment date appears here, and `spread` alone otherwise. The table is
/// owned by the caller and passed by shared reference into schedule and
/// pricing calls; instruments never store it, so no valuation call can
/// observe another call's rate assumptions.
///
/// # Example
///
/// ```rust
/// use oxbow_bonds::ForwardFixings;
/// use oxbow_core::types::Date;
///
/// let mut fixings = ForwardFixings::new();
/// fixings.insert(Date::from_ymd(2025, 7, 1).unwrap(), 0.043);
/// assert_eq!(fixings.rate_for(Date::from_ymd(2025, 7, 1).unwrap()), Some(0.043));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForwardFixings(BTreeMap<Date, f64>);

impl ForwardFixings {
    /// Creates an empty fixings table.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Inserts a forward rate for a payment date, replacing any prior value.
    pub fn insert(&mut self, date: Date, rate: f64) {
        self.0.insert(date, rate);
    }

    /// Returns the forward rate for a payment date, if one was supplied.
    #[must_use]
    pub fn rate_for(&self, date: Date) -> Option<f64> {
        self.0.get(&date).copied()
    }

    /// Returns the number of fixings in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the table holds no fixings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Date, f64)> for ForwardFixings {
    fn from_iter<I: IntoIterator<Item = (Date, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_date_returns_none() {
        let fixings = ForwardFixings::new();
        assert_eq!(fixings.rate_for(Date::from_ymd(2025, 7, 1).unwrap()), None);
        assert!(fixings.is_empty());
    }

    #[test]
    fn test_insert_replaces() {
        let date = Date::from_ymd(2025, 7, 1).unwrap();
        let mut fixings = ForwardFixings::new();
        fixings.insert(date, 0.04);
        fixings.insert(date, 0.045);
        assert_eq!(fixings.rate_for(date), Some(0.045));
        assert_eq!(fixings.len(), 1);
    }

    #[test]
    fn test_from_iterator() {
        let fixings: ForwardFixings = [
            (Date::from_ymd(2025, 7, 1).unwrap(), 0.04),
            (Date::from_ymd(2026, 1, 1).unwrap(), 0.042),
        ]
        .into_iter()
        .collect();

        assert_eq!(fixings.len(), 2);
    }
}
