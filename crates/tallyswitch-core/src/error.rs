//! Shared error type across tallyswitch crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed config.
    BadRequest,
    /// Switch state name not recognised.
    UnknownState,
    /// Unsupported config version.
    UnsupportedVersion,
    /// Listener could not be bound.
    BindFailed,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::UnknownState => "UNKNOWN_STATE",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::BindFailed => "BIND_FAILED",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Unified error type used by core and server.
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unknown switch state: {0}")]
    UnknownState(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
    #[error("bind failed: {0}")]
    Bind(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl TallyError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            TallyError::BadRequest(_) => ClientCode::BadRequest,
            TallyError::UnknownState(_) => ClientCode::UnknownState,
            TallyError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            TallyError::Bind(_) => ClientCode::BindFailed,
            TallyError::Internal(_) => ClientCode::Internal,
        }
    }
}
