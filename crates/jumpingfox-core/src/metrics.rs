//! Process-wide request counter.
//!
//! Tracks how many requests have been recorded in total and per endpoint
//! label. All three fields move together under one mutex: a snapshot must
//! never observe `total_requests` bumped while `endpoint_calls` still holds
//! the old count, so splitting the fields across independently synchronized
//! cells (an atomic counter plus a locked map) is not an option here.
//!
//! Labels are caller-supplied strings, typically `"GET /api/fox/42"` with
//! path parameters already interpolated. Interpolation means the key space
//! grows without bound over a long process lifetime; that matches the
//! behavior the gateway test suites expect, so no cardinality cap is applied.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Point-in-time copy of the counter aggregate.
///
/// Invariant: `total_requests == endpoint_calls.values().sum()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMetrics {
    pub total_requests: u64,
    pub last_request_time: DateTime<Utc>,
    pub endpoint_calls: HashMap<String, u64>,
}

struct MetricsInner {
    total_requests: u64,
    last_request_time: DateTime<Utc>,
    endpoint_calls: HashMap<String, u64>,
}

impl MetricsInner {
    fn fresh() -> Self {
        Self {
            total_requests: 0,
            last_request_time: Utc::now(),
            endpoint_calls: HashMap::new(),
        }
    }
}

/// Thread-safe tally of recorded requests.
///
/// `record`, `snapshot`, and `reset` are linearizable: each takes the single
/// lock for the duration of its update, none performs I/O or yields while
/// holding it.
pub struct MetricsService {
    inner: Mutex<MetricsInner>,
}

impl MetricsService {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(MetricsInner::fresh()),
        }
    }

    // No code path panics while holding the lock, so poisoning is
    // unreachable; recover the guard rather than propagate a panic.
    fn lock(&self) -> MutexGuard<'_, MetricsInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Record one call against `label`. Any string is accepted as-is,
    /// duplicates and empty labels included.
    pub fn record(&self, label: &str) {
        let mut inner = self.lock();
        inner.total_requests += 1;
        inner.last_request_time = Utc::now();
        *inner.endpoint_calls.entry(label.to_owned()).or_insert(0) += 1;
    }

    /// Return an independent copy of the current state. Later `record` or
    /// `reset` calls are never visible through a snapshot already taken.
    pub fn snapshot(&self) -> RequestMetrics {
        let inner = self.lock();
        RequestMetrics {
            total_requests: inner.total_requests,
            last_request_time: inner.last_request_time,
            endpoint_calls: inner.endpoint_calls.clone(),
        }
    }

    /// Zero the counter and clear per-endpoint counts.
    pub fn reset(&self) {
        let mut inner = self.lock();
        tracing::debug!(dropped = inner.total_requests, "request metrics reset");
        inner.total_requests = 0;
        inner.last_request_time = Utc::now();
        inner.endpoint_calls.clear();
    }
}

impl Default for MetricsService {
    fn default() -> Self {
        Self::new()
    }
}
