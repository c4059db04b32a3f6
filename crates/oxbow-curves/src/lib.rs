//! # Oxbow Curves
//!
//! Term structure interpolation and discounting for the Oxbow fixed income
//! valuation engine.
//!
//! The central type is [`RateCurve`]: an immutable, tenor-sorted set of
//! (tenor, rate) points with clamped linear interpolation and
//! discrete-compounding discount factors. Shocked curves for stress testing
//! and key-rate bumping are always new instances built with
//! [`RateCurve::with_rates`]; a curve is never mutated in place.
//!
//! ## Example
//!
//! ```rust
//! use oxbow_core::types::Date;
//! use oxbow_curves::RateCurve;
//!
//! let curve_date = Date::from_ymd(2025, 1, 1).unwrap();
//! let curve = RateCurve::new(
//!     curve_date,
//!     vec![1.0, 2.0, 5.0],
//!     vec![0.04, 0.045, 0.05],
//! )
//! .unwrap();
//!
//! // Interpolated between the 2Y and 5Y points
//! let rate = curve.rate_at(3.0).unwrap();
//! assert!(rate > 0.045 && rate < 0.05);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod curve;
pub mod error;
pub mod records;

pub use curve::RateCurve;
pub use error::{CurveError, CurveResult};
pub use records::CurveRecord;
