//! Operational HTTP endpoints.
//!
//! - `/health` : liveness, bypasses the request counter

use axum::response::IntoResponse;
use axum::Json;
use chrono::Utc;
use serde_json::json;

pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "Healthy",
        "timestamp": Utc::now(),
        "service": "JumpingFox",
    }))
}
