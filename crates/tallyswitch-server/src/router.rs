//! Axum router wiring.
//!
//! Route table plus the transport layers every request passes through:
//! a trace span per request, and panic recovery that turns a panicking
//! handler into a 500 instead of tearing down the connection task.

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tallyswitch_core::TallyError;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{app_state::AppState, error::ApiError, handlers, ops};

pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::index))
        .route("/inc", get(handlers::inc))
        .route("/switch", get(handlers::switch))
        .route("/metrics", get(ops::metrics))
        .route("/healthz", get(ops::healthz))
        .with_state(state);

    with_transport_layers(routes)
}

pub fn with_transport_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    tracing::error!(%detail, "handler panicked");

    ApiError(TallyError::Internal("request handler failed".into())).into_response()
}
