//! # Mortgage Server
//!
//! REST server for the mortgage payment calculator.
//!
//! ## Endpoints
//!
//! - `GET /api/health` - liveness probe, plain-text `OK`
//! - `POST /api/calc` - monthly payment, total paid and total interest
//!
//! ## Usage
//!
//! ```ignore
//! use mortgage_server::{Server, ServerConfig};
//!
//! let server = Server::new(ServerConfig::default());
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use mortgage_core::CalculatorService;

pub use config::ServerConfig;
pub use error::{ApiError, ConfigError, ErrorResponse};

/// The mortgage calculator server.
pub struct Server {
    config: ServerConfig,
    calculator: CalculatorService,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            calculator: CalculatorService::new(),
        }
    }

    /// Server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let router = routes::create_router(self.calculator).layer(TraceLayer::new_for_http());

        if !self.config.cors_enabled {
            return router;
        }

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
        router.layer(cors)
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = self.config.socket_addr();

        info!("Starting mortgage calculator server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
