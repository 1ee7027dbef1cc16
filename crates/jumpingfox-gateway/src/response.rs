//! Envelope helpers and the error-to-response mapping.
//!
//! Every body leaving this service is an `ApiResponse`; handlers go through
//! these helpers so success and failure shapes stay uniform.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use jumpingfox_core::error::{ApiError, ClientCode};
use jumpingfox_core::model::ApiResponse;

pub fn ok<T: Serialize>(data: T, message: impl Into<String>) -> Response {
    (StatusCode::OK, Json(ApiResponse::ok(data, message))).into_response()
}

pub fn created<T: Serialize>(data: T, message: impl Into<String>) -> Response {
    (StatusCode::CREATED, Json(ApiResponse::ok(data, message))).into_response()
}

/// Success envelope with no data payload (e.g. deletes).
pub fn ok_empty(message: impl Into<String>) -> Response {
    let body = ApiResponse::<()> {
        data: None,
        ..ApiResponse::ok((), message)
    };
    (StatusCode::OK, Json(body)).into_response()
}

pub fn failure(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::<()>::failure(message))).into_response()
}

/// Newtype so `ApiError` can flow out of handlers with `?` and land as a
/// failure envelope with the matching status code.
pub struct AppError(pub ApiError);

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0.client_code() {
            ClientCode::BadRequest => StatusCode::BAD_REQUEST,
            ClientCode::NotFound => StatusCode::NOT_FOUND,
            ClientCode::UnsupportedVersion => StatusCode::BAD_REQUEST,
            ClientCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        };
        failure(status, self.0.to_string())
    }
}
