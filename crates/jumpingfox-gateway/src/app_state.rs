//! Shared application state for the JumpingFox gateway.
//!
//! One store and one request counter per process, reachable from every
//! handler through an explicit handle. Tests construct isolated instances
//! instead of relying on globals.

use std::sync::Arc;
use std::time::Duration;

use jumpingfox_core::metrics::MetricsService;
use jumpingfox_core::store::DataStore;

use crate::config::GatewayConfig;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    store: DataStore,
    metrics: MetricsService,
}

impl AppState {
    /// Build application state with a freshly seeded store.
    pub fn new(cfg: GatewayConfig) -> Self {
        Self::with_store(cfg, DataStore::seeded())
    }

    /// Build application state around a caller-provided store.
    pub fn with_store(cfg: GatewayConfig, store: DataStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store,
                metrics: MetricsService::new(),
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &DataStore {
        &self.inner.store
    }

    pub fn metrics(&self) -> &MetricsService {
        &self.inner.metrics
    }

    /// Imitate backend latency in front of a store operation. No-op when
    /// disabled in config.
    pub async fn store_delay(&self, ms: u64) {
        if self.inner.cfg.gateway.store_latency_enabled {
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}
