//! # HTTP API
//!
//! Endpoints for the Itinera trip-planning service.
//!
//! - `POST /api/itinerary` - Generate a validated, catalog-grounded itinerary
//! - `GET /health` - Service status
//!
//! ## Example
//!
//! ```no_run
//! use itinera::api::{AppState, create_router};
//! use itinera::catalog::Catalog;
//! use itinera::config::PlannerConfig;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = Arc::new(Catalog::bundled());
//! let config = Arc::new(PlannerConfig::default());
//! let state = Arc::new(AppState::new(catalog, config));
//! let app = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All errors are returned as a tagged envelope whose `code` maps to a
//! distinct HTTP status:
//! ```json
//! {
//!   "error": {
//!     "message": "Invalid request",
//!     "type": "invalid_request_error",
//!     "code": "invalid_input",
//!     "details": [{"field": "days", "message": "must be between 1 and 3"}]
//!   }
//! }
//! ```

mod health;
mod itinerary;
pub mod types;

pub use types::*;

use crate::catalog::Catalog;
use crate::config::PlannerConfig;
use crate::model::{GeminiClient, GenerativeBackend};
use crate::plan::Planner;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Maximum request body size (64 KB). Trip preferences are small.
const MAX_BODY_SIZE: usize = 64 * 1024;

/// Shared application state accessible to all handlers.
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<PlannerConfig>,
    /// Present only when a generation credential is configured.
    pub planner: Option<Arc<Planner>>,
    /// Server startup time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create new application state with the given catalog and configuration.
    ///
    /// Without a `GEMINI_API_KEY` the service still starts (health stays
    /// useful) but itinerary requests fail with a credential error.
    pub fn new(catalog: Arc<Catalog>, config: Arc<PlannerConfig>) -> Self {
        let planner = config.gemini.api_key.as_ref().map(|key| {
            let http_client = reqwest::Client::builder()
                .timeout(Duration::from_secs(config.server.request_timeout_seconds))
                .pool_max_idle_per_host(10)
                .build()
                .expect("Failed to create HTTP client");

            let backend: Arc<dyn GenerativeBackend> = Arc::new(GeminiClient::new(
                config.gemini.base_url.clone(),
                config.gemini.api_version.clone(),
                key.clone(),
                Arc::new(http_client),
            ));

            Arc::new(Planner::new(
                Arc::clone(&catalog),
                backend,
                config.gemini.preferred_model.clone(),
            ))
        });

        Self {
            catalog,
            config,
            planner,
            start_time: Instant::now(),
        }
    }

    /// Replace the planner; used by tests to inject a mock backend.
    pub fn with_planner(mut self, planner: Arc<Planner>) -> Self {
        self.planner = Some(planner);
        self
    }
}

/// Create the main API router with all endpoints configured.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/itinerary", post(itinerary::handle))
        .route("/health", get(health::handle))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_SIZE))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
