#![forbid(unsafe_code)]
//! Faunatrack HTTP server: axum routes over the observation store with
//! request-id propagation, ETag caching on stats, and a text metrics scrape.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;
use faunatrack_store::ObservationStore;
use std::sync::atomic::{AtomicBool, AtomicU64};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

mod config;
mod http;
mod telemetry;

pub use config::{validate_startup_config, ApiConfig};
pub use telemetry::RequestMetrics;

pub const CRATE_NAME: &str = "faunatrack-server";

/// Shared handler state. Cheap to clone; everything mutable sits behind
/// an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ObservationStore>,
    pub api: Arc<ApiConfig>,
    pub metrics: Arc<RequestMetrics>,
    pub ready: Arc<AtomicBool>,
    pub request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn ObservationStore>) -> Self {
        Self::with_config(store, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(store: Arc<dyn ObservationStore>, api: ApiConfig) -> Self {
        let seeded = store.is_seeded();
        Self {
            store,
            api: Arc::new(api),
            metrics: Arc::new(RequestMetrics::default()),
            ready: Arc::new(AtomicBool::new(seeded)),
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}

#[must_use]
pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.api.max_body_bytes;
    Router::new()
        .route("/", get(http::landing_handler))
        .route(
            "/api/animals",
            get(http::animals_handler).post(http::submit_sighting_handler),
        )
        .route("/api/stats", get(http::stats_handler))
        .route("/api/version", get(http::version_handler))
        .route("/healthz", get(http::healthz_handler))
        .route("/readyz", get(http::readyz_handler))
        .route("/metrics", get(http::metrics_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(max_body_bytes))
                .layer(RequestBodyLimitLayer::new(max_body_bytes)),
        )
        .with_state(state)
}
