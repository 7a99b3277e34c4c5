//! Request handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use tracing::{debug, warn};

use mortgage_core::{CalculationRequest, CalculationResponse, CalculatorService};

use crate::error::ApiError;

/// Application state.
#[derive(Debug, Default)]
pub struct AppState {
    /// The payment calculator
    pub calculator: CalculatorService,
}

impl AppState {
    /// Create state around a calculator.
    pub fn new(calculator: CalculatorService) -> Self {
        Self { calculator }
    }
}

/// Health check handler.
///
/// Liveness probe; always answers `OK`.
pub async fn health() -> &'static str {
    "OK"
}

/// Calculate mortgage payments.
///
/// Any body that does not deserialize into a [`CalculationRequest`] is
/// rejected with `400 Bad Request`.
pub async fn calc(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CalculationRequest>, JsonRejection>,
) -> Result<Json<CalculationResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected calculation request: {}", rejection.body_text());
        ApiError::from(rejection)
    })?;

    let response = state.calculator.calculate(&request);

    debug!(
        mortgage_type = %request.mortgage_type,
        loan_amount = response.loan_amount,
        ltv_pct = request.loan_to_value_pct(),
        term_years = request.term_years,
        monthly_payment = response.monthly_payment,
        "Calculated mortgage payment"
    );

    Ok(Json(response))
}
