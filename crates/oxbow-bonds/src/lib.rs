//! # Oxbow Bonds
//!
//! Bond instruments, cash-flow schedule generation, and valuation for the
//! Oxbow fixed income engine.
//!
//! Instruments are a closed set of variants behind the [`Bond`] enum:
//!
//! - [`instruments::FixedRateBond`]: periodic fixed coupons plus principal
//! - [`instruments::FloatingRateBond`]: spread over a reference rate, with
//!   forward fixings supplied externally per pricing call
//! - [`instruments::ZeroCouponBond`]: a single principal payment at maturity
//!
//! Valuation methods live on [`Bond`]: curve pricing, yield-to-maturity
//! (Newton-Raphson with a bisection fallback, closed form for zeros),
//! Macaulay/modified duration, convexity, and DV01.
//!
//! ## Example
//!
//! ```rust
//! use oxbow_bonds::instruments::{Bond, FixedRateBond};
//! use oxbow_core::types::{Date, Frequency};
//!
//! let bond = Bond::Fixed(
//!     FixedRateBond::new(
//!         "UST-2030",
//!         "5% semi-annual note",
//!         Date::from_ymd(2025, 1, 1).unwrap(),
//!         Date::from_ymd(2030, 1, 1).unwrap(),
//!         1000.0,
//!         0.05,
//!         Frequency::SemiAnnual,
//!     )
//!     .unwrap(),
//! );
//!
//! let flows = bond.cash_flows(None).unwrap();
//! assert_eq!(flows.len(), 10); // final coupon merged with principal
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]

pub mod cashflows;
pub mod error;
pub mod instruments;
pub mod pricing;
pub mod records;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::ForwardFixings;
    pub use crate::error::{BondError, BondResult};
    pub use crate::instruments::{Bond, FixedRateBond, FloatingRateBond, ZeroCouponBond};
    pub use crate::pricing::YieldSolver;
    pub use crate::records::InstrumentRecord;
}

pub use cashflows::ForwardFixings;
pub use error::{BondError, BondResult};
pub use instruments::Bond;
pub use records::InstrumentRecord;
