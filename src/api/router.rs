// API router.
// Returns a composable `Router` mountable on any axum server. CORS is
// permissive; the reference deployment served a browser frontend from a
// different origin.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::endpoints;
use crate::api::types::ApiContext;

pub fn api_router(ctx: ApiContext) -> Router {
    Router::new()
        .route("/api/health", get(endpoints::health))
        .route("/api/humanize/text", post(endpoints::rewrite_text))
        .route("/api/humanize/numbers", post(endpoints::humanize_numbers_in_text))
        .route("/api/humanize/comprehensive", post(endpoints::comprehensive))
        .route("/api/detect/ai", post(endpoints::detect_ai))
        .with_state(ctx)
        .layer(CorsLayer::permissive())
}
