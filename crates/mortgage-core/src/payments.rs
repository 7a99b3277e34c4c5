//! Monthly payment formulas.
//!
//! ## Repayment (amortizing)
//!
//! ```text
//! M = P * r * (1 + r)^n / ((1 + r)^n - 1)
//!   = P * r / (1 - (1 + r)^-n)
//! ```
//!
//! ## Interest-only
//!
//! ```text
//! M = P * r
//! ```
//!
//! where:
//! - P = principal (loan amount)
//! - r = monthly rate, annual percentage / 100 / 12
//! - n = number of monthly payments, years * 12
//!
//! Both functions are total: non-positive principals and terms yield `0.0`
//! rather than an error.

/// Number of monthly payments in a year.
pub const MONTHS_PER_YEAR: i64 = 12;

/// Convert an annual percentage rate (e.g. `6.0` for 6%) into a monthly rate.
#[inline]
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

/// Number of monthly payments over a term.
///
/// Negative terms clamp to zero. Computed in `i64` so every `i32` term fits.
#[inline]
pub fn total_months(years: i32) -> i64 {
    i64::from(years.max(0)) * MONTHS_PER_YEAR
}

/// Calculate the monthly payment on an amortizing (repayment) mortgage.
///
/// # Arguments
///
/// * `principal` - Loan amount
/// * `annual_rate_pct` - Nominal annual rate as a percentage (e.g., 6.0 for 6%)
/// * `years` - Term in years; negative values are treated as zero
///
/// # Returns
///
/// The level monthly payment. `0.0` when the principal or the term is not
/// positive; `principal / n` when the rate is exactly zero.
pub fn monthly_repayment(principal: f64, annual_rate_pct: f64, years: i32) -> f64 {
    let r = monthly_rate(annual_rate_pct);
    let n = total_months(years);

    if principal <= 0.0 || n <= 0 {
        return 0.0;
    }
    if r == 0.0 {
        return principal / n as f64;
    }

    // Discount form of the annuity factor; stays finite when (1 + r)^n overflows
    let payment = principal * r / (1.0 - (1.0 + r).powf(-(n as f64)));
    log::trace!("repayment: principal={principal} r={r} n={n} -> {payment}");
    payment
}

/// Calculate the monthly payment on an interest-only mortgage.
///
/// # Arguments
///
/// * `principal` - Loan amount
/// * `annual_rate_pct` - Nominal annual rate as a percentage
///
/// # Returns
///
/// One month of interest on the principal, or `0.0` for a non-positive principal.
pub fn interest_only_monthly(principal: f64, annual_rate_pct: f64) -> f64 {
    let r = monthly_rate(annual_rate_pct);
    if principal <= 0.0 {
        return 0.0;
    }
    principal * r
}
