//! Axum router wiring.
//!
//! CORS is wide open on purpose: this service exists to be hammered by rate
//! limit test harnesses running from arbitrary origins.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::app_state::AppState;
use crate::handlers::{fox, jump, test};
use crate::ops;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(ops::health))
        .route("/api/fox", get(fox::list).post(fox::create))
        .route("/api/fox/active", get(fox::active))
        .route("/api/fox/by-color/:color", get(fox::by_color))
        .route(
            "/api/fox/:id",
            get(fox::get_one).put(fox::update).delete(fox::remove),
        )
        .route("/api/jump", get(jump::list).post(jump::create))
        .route("/api/jump/fox/:fox_id", get(jump::by_fox))
        .route("/api/jump/top/:count", get(jump::top))
        .route("/api/jump/stats", get(jump::stats))
        .route("/api/test/fast", get(test::fast))
        .route("/api/test/slow", get(test::slow))
        .route("/api/test/memory-intensive", get(test::memory_intensive))
        .route("/api/test/batch", post(test::batch))
        .route("/api/test/load", post(test::load))
        .route("/api/test/error/:error_type", get(test::simulate_error))
        .route("/api/test/metrics", get(test::metrics))
        .route("/api/test/metrics/reset", post(test::reset_metrics))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
