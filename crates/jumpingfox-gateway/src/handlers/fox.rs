//! Fox CRUD endpoints. Collection, single-resource, and filtered reads give
//! rate-limit suites distinct shapes of GET traffic; create/update/delete
//! cover the mutating verbs.

use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;

use jumpingfox_core::error::ApiError;
use jumpingfox_core::model::FoxInput;

use crate::app_state::AppState;
use crate::response::{created, ok, ok_empty, AppError};

pub async fn list(State(state): State<AppState>) -> Response {
    state.metrics().record("GET /api/fox");
    tracing::info!("getting all foxes");

    state.store_delay(50).await;
    let foxes = state.store().all_foxes();
    let message = format!("Retrieved {} foxes", foxes.len());
    ok(foxes, message)
}

pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Response, AppError> {
    state.metrics().record(&format!("GET /api/fox/{id}"));
    tracing::info!(fox_id = id, "getting fox");

    state.store_delay(30).await;
    let fox = state
        .store()
        .fox(id)
        .ok_or_else(|| ApiError::NotFound(format!("Fox with ID {id} not found")))?;
    Ok(ok(fox, "Fox retrieved successfully"))
}

pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<FoxInput>,
) -> Result<Response, AppError> {
    state.metrics().record("POST /api/fox");
    tracing::info!(name = %input.name, "creating fox");

    if input.name.trim().is_empty() {
        return Err(ApiError::BadRequest("Fox name is required".into()).into());
    }

    state.store_delay(100).await;
    let fox = state.store().create_fox(input);
    Ok(created(fox, "Fox created successfully"))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(input): Json<FoxInput>,
) -> Result<Response, AppError> {
    state.metrics().record(&format!("PUT /api/fox/{id}"));
    tracing::info!(fox_id = id, "updating fox");

    state.store_delay(80).await;
    let fox = state
        .store()
        .update_fox(id, input)
        .ok_or_else(|| ApiError::NotFound(format!("Fox with ID {id} not found")))?;
    Ok(ok(fox, "Fox updated successfully"))
}

pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Response, AppError> {
    state.metrics().record(&format!("DELETE /api/fox/{id}"));
    tracing::info!(fox_id = id, "deleting fox");

    state.store_delay(60).await;
    if !state.store().delete_fox(id) {
        return Err(ApiError::NotFound(format!("Fox with ID {id} not found")).into());
    }
    Ok(ok_empty("Fox deleted successfully"))
}

pub async fn active(State(state): State<AppState>) -> Response {
    state.metrics().record("GET /api/fox/active");
    tracing::info!("getting active foxes");

    state.store_delay(50).await;
    let active: Vec<_> = state
        .store()
        .all_foxes()
        .into_iter()
        .filter(|f| f.is_active)
        .collect();
    let message = format!("Retrieved {} active foxes", active.len());
    ok(active, message)
}

pub async fn by_color(State(state): State<AppState>, Path(color): Path<String>) -> Response {
    state.metrics().record(&format!("GET /api/fox/by-color/{color}"));
    tracing::info!(%color, "getting foxes by color");

    state.store_delay(50).await;
    let matched: Vec<_> = state
        .store()
        .all_foxes()
        .into_iter()
        .filter(|f| f.color.eq_ignore_ascii_case(&color))
        .collect();
    let message = format!("Retrieved {} {color} foxes", matched.len());
    ok(matched, message)
}
