//! Request and response records for a single calculation.

use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mortgage repayment structure.
///
/// Parsing never fails: only a case-insensitive `interestOnly` selects
/// [`MortgageType::InterestOnly`], anything else is a repayment mortgage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", from = "String")]
pub enum MortgageType {
    /// Amortizing loan; each payment covers interest and reduces principal
    #[default]
    Repayment,
    /// Each payment covers interest only; principal is unchanged
    InterestOnly,
}

impl MortgageType {
    const INTEREST_ONLY: &'static str = "interestOnly";

    /// Parse a wire value.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case(Self::INTEREST_ONLY) {
            MortgageType::InterestOnly
        } else {
            MortgageType::Repayment
        }
    }

    /// Returns true for interest-only mortgages.
    #[must_use]
    pub fn is_interest_only(&self) -> bool {
        matches!(self, MortgageType::InterestOnly)
    }
}

impl From<&str> for MortgageType {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<String> for MortgageType {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl fmt::Display for MortgageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MortgageType::Repayment => "Repayment",
            MortgageType::InterestOnly => "Interest-only",
        };
        write!(f, "{name}")
    }
}

/// Inputs for one payment calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationRequest {
    /// Property value
    pub price: f64,
    /// Upfront payment
    pub deposit: f64,
    /// Loan duration in years
    #[serde(deserialize_with = "deserialize_term_years")]
    pub term_years: i32,
    /// Nominal annual rate as a percentage (6.0 means 6%)
    pub annual_rate_pct: f64,
    /// Repayment structure
    pub mortgage_type: MortgageType,
}

impl CalculationRequest {
    /// Amount borrowed, `max(0, price - deposit)`.
    pub fn loan_amount(&self) -> f64 {
        (self.price - self.deposit).max(0.0)
    }

    /// Loan-to-value ratio as a percentage of the price.
    ///
    /// Returns `0.0` when the price is not positive.
    pub fn loan_to_value_pct(&self) -> f64 {
        if self.price > 0.0 {
            self.loan_amount() / self.price * 100.0
        } else {
            0.0
        }
    }
}

/// Accept any JSON number as a term in years.
///
/// Floats are truncated toward zero (`25.9` becomes `25`). Values outside the
/// `i32` range and non-numbers are rejected.
fn deserialize_term_years<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    struct TermYearsVisitor;

    impl<'de> Visitor<'de> for TermYearsVisitor {
        type Value = i32;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a number of years")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i32, E> {
            i32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Signed(v), &self))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i32, E> {
            i32::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        #[allow(clippy::cast_possible_truncation)]
        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i32, E> {
            let years = v.trunc();
            if (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&years) {
                Ok(years as i32)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_any(TermYearsVisitor)
}

/// Computed payment figures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    /// Amount borrowed
    pub loan_amount: f64,
    /// Level monthly payment
    pub monthly_payment: f64,
    /// Sum of all monthly payments over the term
    pub total_paid: f64,
    /// `total_paid - loan_amount`; negative for degenerate terms
    pub total_interest: f64,
}
