//! Domain models and the uniform response envelope.
//!
//! Everything serializes camelCase to match the wire format API gateway test
//! suites already script against.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fox known to the demo API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fox {
    pub id: u32,
    pub name: String,
    pub color: String,
    pub jump_height: i32,
    pub created_at: DateTime<Utc>,
    pub is_active: bool,
}

/// Caller-supplied fox fields; id and creation time are assigned by the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoxInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub jump_height: i32,
    #[serde(default)]
    pub is_active: bool,
}

/// A single recorded jump.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JumpRecord {
    pub id: u32,
    pub fox_id: u32,
    pub height: i32,
    pub jump_time: DateTime<Utc>,
    pub location: String,
}

/// Caller-supplied jump fields; id and jump time are assigned by the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JumpInput {
    pub fox_id: u32,
    #[serde(default)]
    pub height: i32,
    #[serde(default)]
    pub location: String,
}

/// Uniform envelope wrapped around every API response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: message.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: message.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Counter snapshot plus store totals, returned by the metrics endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    pub total_requests: u64,
    pub total_foxes: usize,
    pub total_jumps: usize,
    pub last_request_time: DateTime<Utc>,
    pub endpoint_calls: HashMap<String, u64>,
}

/// Body of the batch test endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub request_count: u32,
    #[serde(default)]
    pub test_type: String,
}
