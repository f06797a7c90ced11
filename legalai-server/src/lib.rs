//! legalai-server library interface
//!
//! Exposes the router and application state for the binary and for
//! integration testing.

pub mod api;
pub mod error;
pub mod gateway;

pub use crate::error::{ApiError, ApiResult};

use axum::Router;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use gateway::ModelGateway;

/// Application state shared across handlers
///
/// Handlers hold no mutable state of their own; the gateway is shared
/// read-only between concurrent requests.
#[derive(Clone)]
pub struct AppState {
    /// Outbound client for the model service
    pub gateway: Arc<ModelGateway>,
    /// Service startup timestamp for uptime tracking
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    pub fn new(gateway: ModelGateway) -> Self {
        Self {
            gateway: Arc::new(gateway),
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::analyze_routes())
        .merge(api::chat_routes())
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // The browser pages may be served from a different origin
        .layer(CorsLayer::permissive())
}
