//! Prometheus text exposition for the counter and switch.
//!
//! No metrics crate is used; the values already live in atomics on
//! `AppState`, so rendering is a pure function over a snapshot taken by the
//! `/metrics` handler.

pub mod metrics;
