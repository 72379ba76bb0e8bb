//! Process-wide request counter.

use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonic counter starting at 0.
///
/// `increment` is a single atomic add, so concurrent callers never lose an
/// update. Reaching `u64::MAX` wraps to 0.
#[derive(Debug, Default)]
pub struct Counter {
    value: AtomicU64,
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one and return the value after the increment.
    pub fn increment(&self) -> u64 {
        self.value.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    pub fn get(&self) -> u64 {
        self.value.load(Ordering::Relaxed)
    }
}
