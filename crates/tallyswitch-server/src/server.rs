//! Listener setup and serve loop.

use std::net::SocketAddr;

use axum::Router;
use tallyswitch_core::error::{Result, TallyError};
use tokio::net::TcpListener;

pub async fn bind(listen: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(listen)
        .await
        .map_err(|e| TallyError::Bind(format!("{listen}: {e}")))
}

/// Serve until Ctrl-C / SIGTERM, then let in-flight requests finish.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    let local = listener
        .local_addr()
        .map_err(|e| TallyError::Internal(format!("local addr unavailable: {e}")))?;
    tracing::info!(port = local.port(), %local, "server is running on port {}", local.port());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| TallyError::Internal(format!("server failed: {e}")))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    tracing::info!("signal received, shutting down");
}
