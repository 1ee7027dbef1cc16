//! JumpingFox Gateway
//!
//! Demo REST API used as the traffic target when exercising an API gateway's
//! rate-limiting policies:
//! - Fox / jump CRUD backed by an in-memory store
//! - Synthetic test endpoints (fast, slow, batch, load, error simulation)
//! - Request counter exposed via /api/test/metrics

use std::net::SocketAddr;
use tracing_subscriber::{fmt, EnvFilter};

use jumpingfox_gateway::{app_state, config, router};

#[tokio::main]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let cfg = config::load_from_file("jumpingfox.yaml").expect("config load failed");
    let listen: SocketAddr = cfg
        .gateway
        .listen
        .parse()
        .expect("gateway.listen must be a valid SocketAddr");

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    tracing::info!(%listen, "jumpingfox-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await.expect("failed to bind");

    axum::serve(listener, app).await.expect("server failed");
}
