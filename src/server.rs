//! HTTP server setup and configuration.
//!
//! This module provides the router used by both the production server and
//! integration tests. Each request is fully independent; the service holds
//! no shared state, so the router carries none.

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::api;

// Upload cap: decoded RGBA surfaces are 4 bytes per pixel, so bounding the
// compressed input also bounds decode memory.
const MAX_UPLOAD_BYTES: usize = 25 * 1024 * 1024;

/// Build the API router with all endpoints and middleware.
///
/// `cors_origin` is the browser origin allowed to call the API; when `None`,
/// the local Next.js dev frontend origin is used.
pub fn build_router(cors_origin: Option<&str>) -> Router {
    Router::new()
        .route("/api/document/process", post(api::handle_process))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origin))
}

fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let base = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match origin.and_then(|o| o.parse::<HeaderValue>().ok()) {
        Some(origin) => base.allow_origin(origin),
        None => base.allow_origin(HeaderValue::from_static("http://localhost:3000")),
    }
}
