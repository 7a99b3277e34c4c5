//! # Mortgage Core
//!
//! Payment calculations for the mortgage calculator service.
//!
//! This crate provides:
//!
//! - **Payments**: Closed-form monthly payment formulas for repayment
//!   (amortizing) and interest-only mortgages
//! - **Calculator**: [`CalculatorService`], which turns a [`CalculationRequest`]
//!   into a [`CalculationResponse`]
//! - **Types**: Wire-compatible request/response records and [`MortgageType`]
//!
//! ## Design Philosophy
//!
//! - **Total functions**: every numeric input produces a number, degenerate
//!   inputs collapse to `0.0` instead of failing
//! - **Stateless**: nothing is cached or mutated between calculations
//!
//! ## Example
//!
//! ```rust
//! use mortgage_core::prelude::*;
//!
//! let monthly = monthly_repayment(120_000.0, 0.0, 20);
//! assert!((monthly - 500.0).abs() < 1e-9);
//!
//! let request = CalculationRequest {
//!     price: 200_000.0,
//!     deposit: 20_000.0,
//!     term_years: 25,
//!     annual_rate_pct: 5.0,
//!     mortgage_type: MortgageType::Repayment,
//! };
//! let response = CalculatorService::new().calculate(&request);
//! assert_eq!(response.loan_amount, 180_000.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]

pub mod calculator;
pub mod payments;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calculator::CalculatorService;
    pub use crate::payments::{
        interest_only_monthly, monthly_rate, monthly_repayment, total_months, MONTHS_PER_YEAR,
    };
    pub use crate::types::{CalculationRequest, CalculationResponse, MortgageType};
}

pub use calculator::CalculatorService;
pub use types::{CalculationRequest, CalculationResponse, MortgageType};
