use serde::Deserialize;

use jumpingfox_core::error::{ApiError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewayConfig {
    pub version: u32,

    #[serde(default)]
    pub gateway: GatewaySection,
}

impl GatewayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(ApiError::UnsupportedVersion);
        }
        self.gateway.validate()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GatewaySection {
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Artificial delay of GET /api/test/slow.
    #[serde(default = "default_slow_endpoint_ms")]
    pub slow_endpoint_ms: u64,

    /// When false, store-backed handlers skip their simulated backend
    /// latency. Tests turn this off.
    #[serde(default = "default_store_latency_enabled")]
    pub store_latency_enabled: bool,
}

impl Default for GatewaySection {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            slow_endpoint_ms: default_slow_endpoint_ms(),
            store_latency_enabled: default_store_latency_enabled(),
        }
    }
}

impl GatewaySection {
    pub fn validate(&self) -> Result<()> {
        if !(100..=30000).contains(&self.slow_endpoint_ms) {
            return Err(ApiError::BadRequest(
                "gateway.slow_endpoint_ms must be between 100 and 30000".into(),
            ));
        }
        Ok(())
    }
}

fn default_listen() -> String {
    "0.0.0.0:8080".into()
}
fn default_slow_endpoint_ms() -> u64 {
    2000
}
fn default_store_latency_enabled() -> bool {
    true
}
