//! HTTP mapping for [`TallyError`].
//!
//! Handlers are infallible; the only error that reaches a client is a fault
//! caught at the transport boundary, so every `ApiError` is a 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tallyswitch_core::error::TallyError;

/// Error returned across the HTTP boundary.
#[derive(Debug)]
pub struct ApiError(pub TallyError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.0.client_code().as_str(),
            "message": self.0.to_string(),
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
