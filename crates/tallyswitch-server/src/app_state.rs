//! Shared application state for the tallyswitch server.
//!
//! Holds the counter and switch cells for the lifetime of the process. Cloning
//! is cheap; every clone points at the same cells.

use std::sync::Arc;

use tallyswitch_core::error::Result;
use tallyswitch_core::{Counter, Switch, SwitchState};

use crate::config::ServerConfig;
use crate::obs::metrics::Snapshot;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    counter: Counter,
    switch: Switch,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_initial_state(SwitchState::default())
    }
}

impl AppState {
    /// Build state from config. Fails if the configured switch state is not a known name.
    pub fn new(cfg: &ServerConfig) -> Result<Self> {
        Ok(Self::with_initial_state(cfg.switch.initial_state()?))
    }

    pub fn with_initial_state(initial: SwitchState) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                counter: Counter::new(),
                switch: Switch::new(initial),
            }),
        }
    }

    pub fn counter(&self) -> &Counter {
        &self.inner.counter
    }

    pub fn switch(&self) -> &Switch {
        &self.inner.switch
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            counter: self.inner.counter.get(),
            state: self.inner.switch.state(),
        }
    }
}
