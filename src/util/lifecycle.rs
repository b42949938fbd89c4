//! Cancellation flags tying spawned fetch tasks to component lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! A page that unmounts while a request is outstanding must not apply the
//! late response to state that no longer backs a view. Pages create an
//! `AliveFlag`, kill it in `on_cleanup`, and spawned tasks check it before
//! writing results.

#[cfg(test)]
#[path = "lifecycle_test.rs"]
mod lifecycle_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared liveness flag for one component's in-flight tasks.
#[derive(Clone, Debug)]
pub struct AliveFlag(Arc<AtomicBool>);

impl AliveFlag {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    /// Whether results may still be applied to component state.
    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Mark the owning component as unmounted.
    pub fn kill(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

impl Default for AliveFlag {
    fn default() -> Self {
        Self::new()
    }
}
