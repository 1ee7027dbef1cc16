//! Jump record endpoints, including the aggregate stats endpoint that plays
//! the "expensive analytics call" in rate-limit scenarios.

use std::collections::HashMap;

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use chrono::{Duration, Utc};
use serde::Serialize;
use serde_json::json;

use jumpingfox_core::error::ApiError;
use jumpingfox_core::model::JumpInput;

use crate::app_state::AppState;
use crate::response::{created, ok, AppError};

pub async fn list(State(state): State<AppState>) -> Response {
    state.metrics().record("GET /api/jump");
    tracing::info!("getting all jump records");

    state.store_delay(40).await;
    let jumps = state.store().jumps(None);
    let message = format!("Retrieved {} jump records", jumps.len());
    ok(jumps, message)
}

pub async fn by_fox(
    State(state): State<AppState>,
    Path(fox_id): Path<u32>,
) -> Result<Response, AppError> {
    state.metrics().record(&format!("GET /api/jump/fox/{fox_id}"));
    tracing::info!(fox_id, "getting jump records for fox");

    state.store_delay(30).await;
    let fox = state
        .store()
        .fox(fox_id)
        .ok_or_else(|| ApiError::NotFound(format!("Fox with ID {fox_id} not found")))?;

    state.store_delay(40).await;
    let jumps = state.store().jumps(Some(fox_id));
    let message = format!("Retrieved {} jump records for {}", jumps.len(), fox.name);
    Ok(ok(jumps, message))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<JumpInput>,
) -> Result<Response, AppError> {
    state.metrics().record("POST /api/jump");
    tracing::info!(fox_id = input.fox_id, "recording new jump");

    state.store_delay(30).await;
    if state.store().fox(input.fox_id).is_none() {
        return Err(
            ApiError::BadRequest(format!("Fox with ID {} not found", input.fox_id)).into(),
        );
    }
    if input.height <= 0 {
        return Err(ApiError::BadRequest("Jump height must be greater than 0".into()).into());
    }

    state.store_delay(70).await;
    let jump = state.store().create_jump(input);
    Ok(created(jump, "Jump recorded successfully"))
}

pub async fn top(
    State(state): State<AppState>,
    Path(count): Path<usize>,
) -> Result<Response, AppError> {
    state.metrics().record(&format!("GET /api/jump/top/{count}"));
    tracing::info!(count, "getting top jumps");

    if count == 0 || count > 100 {
        return Err(ApiError::BadRequest("Count must be between 1 and 100".into()).into());
    }

    state.store_delay(40).await;
    let mut jumps = state.store().jumps(None);
    jumps.sort_by(|a, b| b.height.cmp(&a.height));
    jumps.truncate(count);
    let message = format!("Retrieved top {} jumps", jumps.len());
    Ok(ok(jumps, message))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JumpStats {
    total_jumps: usize,
    average_height: f64,
    max_height: i32,
    min_height: i32,
    unique_locations: usize,
    jumps_by_location: HashMap<String, usize>,
    recent_jumps: usize,
}

pub async fn stats(State(state): State<AppState>) -> Response {
    state.metrics().record("GET /api/jump/stats");
    tracing::info!("calculating jump statistics");

    state.store_delay(40).await;
    let jumps = state.store().jumps(None);

    if jumps.is_empty() {
        return ok(
            json!({ "message": "No jump records found" }),
            "No statistics available",
        );
    }

    let total: i64 = jumps.iter().map(|j| i64::from(j.height)).sum();
    let average = (total as f64 / jumps.len() as f64 * 100.0).round() / 100.0;

    let mut by_location: HashMap<String, usize> = HashMap::new();
    for j in &jumps {
        *by_location.entry(j.location.clone()).or_insert(0) += 1;
    }

    let week_ago = Utc::now() - Duration::days(7);
    let stats = JumpStats {
        total_jumps: jumps.len(),
        average_height: average,
        max_height: jumps.iter().map(|j| j.height).max().unwrap_or(0),
        min_height: jumps.iter().map(|j| j.height).min().unwrap_or(0),
        unique_locations: by_location.len(),
        jumps_by_location: by_location,
        recent_jumps: jumps.iter().filter(|j| j.jump_time >= week_ago).count(),
    };

    ok(stats, "Jump statistics calculated successfully")
}
