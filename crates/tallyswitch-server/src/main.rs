//! tallyswitch server
//!
//! - `GET /`        : HTML page with counter and switch state
//! - `GET /inc`     : increment the counter
//! - `GET /switch`  : advance the switch ON -> OFF -> UNKNOWN -> ON
//! - `GET /metrics` : Prometheus text format

use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use tallyswitch_core::Result;
use tallyswitch_server::{app_state::AppState, config, router, server};

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, code = e.client_code().as_str(), "tallyswitch-server failed");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let cfg = config::load()?;
    let listen = cfg.server.listen_addr()?;

    let state = AppState::new(&cfg)?;
    let app = router::build_router(state);

    let listener = server::bind(listen).await?;
    server::serve(listener, app).await
}
