//! # Oxbow Math
//!
//! Numerical root-finding for the Oxbow fixed income valuation engine.
//!
//! The yield solver in `oxbow-bonds` is the main consumer: it runs
//! Newton-Raphson seeded near the coupon rate and falls back to bisection
//! over a fixed yield bracket when Newton fails.
//!
//! ## Example
//!
//! ```rust
//! use oxbow_math::solvers::{newton_raphson, SolverConfig};
//!
//! let f = |x: f64| x * x - 2.0;
//! let df = |x: f64| 2.0 * x;
//!
//! let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
//! assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-8);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

pub use error::{MathError, MathResult};
pub use solvers::{SolverConfig, SolverResult};
