//! tallyswitch core: the counter and switch cells plus the shared error type.
//!
//! This crate has no transport or runtime dependencies. The server crate owns
//! one instance of each cell for the lifetime of the process and hands them to
//! request handlers.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. Fallible paths
//! surface as `TallyError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod counter;
pub mod error;
pub mod switch;

pub use counter::Counter;
/// Shared result type.
pub use error::{Result, TallyError};
pub use switch::{Switch, SwitchState};
