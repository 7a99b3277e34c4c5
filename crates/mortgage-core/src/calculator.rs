//! Calculator service.
//!
//! [`CalculatorService`] holds no state; a single instance can be shared
//! across any number of concurrent callers.

use crate::payments::{self, MONTHS_PER_YEAR};
use crate::types::{CalculationRequest, CalculationResponse, MortgageType};

/// Computes mortgage payment figures.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorService;

impl CalculatorService {
    /// Create a new calculator.
    pub fn new() -> Self {
        Self
    }

    /// Monthly payment on an amortizing mortgage. See [`payments::monthly_repayment`].
    pub fn monthly_repayment(&self, principal: f64, annual_rate_pct: f64, years: i32) -> f64 {
        payments::monthly_repayment(principal, annual_rate_pct, years)
    }

    /// Monthly payment on an interest-only mortgage. See [`payments::interest_only_monthly`].
    pub fn interest_only_monthly(&self, principal: f64, annual_rate_pct: f64) -> f64 {
        payments::interest_only_monthly(principal, annual_rate_pct)
    }

    /// Monthly payment for the given mortgage type.
    pub fn monthly_payment(
        &self,
        mortgage_type: MortgageType,
        principal: f64,
        annual_rate_pct: f64,
        years: i32,
    ) -> f64 {
        if mortgage_type.is_interest_only() {
            self.interest_only_monthly(principal, annual_rate_pct)
        } else {
            self.monthly_repayment(principal, annual_rate_pct, years)
        }
    }

    /// Compute the full set of payment figures for a request.
    ///
    /// `total_interest` is not clamped: a zero term with a non-zero loan
    /// produces a negative figure.
    pub fn calculate(&self, request: &CalculationRequest) -> CalculationResponse {
        let loan_amount = request.loan_amount();

        let monthly_payment = self.monthly_payment(
            request.mortgage_type,
            loan_amount,
            request.annual_rate_pct,
            request.term_years,
        );

        let total_paid =
            monthly_payment * MONTHS_PER_YEAR as f64 * f64::from(request.term_years.max(0));

        CalculationResponse {
            loan_amount,
            monthly_payment,
            total_paid,
            total_interest: total_paid - loan_amount,
        }
    }
}
