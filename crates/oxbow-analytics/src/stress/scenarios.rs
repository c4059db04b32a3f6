//! Fixed historical stress scenarios.
//!
//! Shifts are banded by curve index: positions 0-1 are the very short
//! end, 2-3 short/intermediate, and the remainder the long end (with a
//! further 4-6 intermediate band for 2013). The bands assume a curve laid
//! out short-to-long with roughly money-market, 1-5 year, and 7+ year
//! nodes, which is how loader curves arrive.

/// Approximate curve shifts observed through the 2008 financial crisis:
/// aggressive policy easing at the short end while long rates rose.
#[must_use]
pub fn financial_crisis_2008(rates: &[f64]) -> Vec<f64> {
    rates
        .iter()
        .enumerate()
        .map(|(i, r)| {
            if i < 2 {
                r - 0.02 // -200 bps
            } else if i < 4 {
                r - 0.01 // -100 bps
            } else {
                r + 0.005 // +50 bps
            }
        })
        .collect()
}

/// Approximate curve shifts observed through the 2013 taper tantrum: a
/// sell-off concentrated in the intermediate sector.
#[must_use]
pub fn taper_tantrum_2013(rates: &[f64]) -> Vec<f64> {
    rates
        .iter()
        .enumerate()
        .map(|(i, r)| {
            if i < 2 {
                r + 0.001 // +10 bps
            } else if i < 4 {
                r + 0.01 // +100 bps
            } else if i < 7 {
                r + 0.014 // +140 bps
            } else {
                r + 0.008 // +80 bps
            }
        })
        .collect()
}
