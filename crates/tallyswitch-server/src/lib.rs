//! tallyswitch server library entry.
//!
//! Wires config, shared state, handlers, and metrics rendering into an axum
//! router. Consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod error;
pub mod handlers;
pub mod obs;
pub mod ops;
pub mod router;
pub mod server;
