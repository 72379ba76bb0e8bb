//! Request handlers for the counter and switch routes.
//!
//! - `/`       : HTML page with current values
//! - `/inc`    : increment counter
//! - `/switch` : advance switch state

use axum::{extract::State, response::Html};

use crate::app_state::AppState;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let snap = state.snapshot();
    Html(format!(
        "<h1>Welcome to the Web App</h1>\n<p>Counter: {}</p>\n<p>Switch State: {}</p>\n",
        snap.counter, snap.state
    ))
}

pub async fn inc(State(state): State<AppState>) -> String {
    let counter = state.counter().increment();
    tracing::debug!(counter, "counter incremented");
    format!("Counter incremented: {counter}")
}

pub async fn switch(State(state): State<AppState>) -> String {
    let next = state.switch().toggle();
    tracing::debug!(state = %next, "switch toggled");
    format!("Switch toggled to: {next}")
}
