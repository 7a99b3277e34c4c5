//! Route definitions.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use mortgage_core::CalculatorService;

use crate::handlers::{self, AppState};

/// Create the API router.
///
/// # Arguments
/// * `calculator` - The payment calculator shared by all requests
pub fn create_router(calculator: CalculatorService) -> Router {
    let state = Arc::new(AppState::new(calculator));

    Router::new()
        // Health
        .route("/api/health", get(handlers::health))
        // Calculation
        .route("/api/calc", post(handlers::calc))
        // State
        .with_state(state)
}
