//! # Oxbow Core
//!
//! Core types and abstractions for the Oxbow fixed income valuation engine.
//!
//! This crate provides the foundational building blocks used throughout Oxbow:
//!
//! - **Types**: Domain-specific types like [`types::Date`], [`types::Frequency`],
//!   and [`types::CashFlow`]
//! - **Day Count Conventions**: Actual/365 year-fraction calculations
//! - **Traits**: The [`traits::DiscountCurve`] abstraction that decouples cash
//!   flow valuation from any concrete curve representation
//!
//! ## Example
//!
//! ```rust
//! use oxbow_core::types::{CashFlow, Date};
//!
//! let date = Date::from_ymd(2025, 6, 15).unwrap();
//! let cf = CashFlow::coupon(date, 25.0);
//! assert_eq!(cf.amount(), 25.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod daycounts;
pub mod error;
pub mod traits;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::daycounts::{Act365Fixed, DayCount};
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::traits::DiscountCurve;
    pub use crate::types::{CashFlow, CashFlowKind, Date, Frequency};
}

// Re-export commonly used items at crate root
pub use error::{CoreError, CoreResult};
pub use traits::DiscountCurve;
pub use types::{CashFlow, CashFlowKind, Date, Frequency};
