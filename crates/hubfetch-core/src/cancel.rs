//! Cooperative cancellation for in-flight downloads.
//!
//! The flag is checked before every remote call, so a cancelled tree
//! download stops at the next entry boundary rather than finishing the
//! subtree. Files already written stay on disk.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancel token. Cloning is cheap; any clone can cancel.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation; takes effect at the next entry boundary.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// True when a flag is attached and set.
pub(crate) fn is_cancelled(cancel: Option<&CancelFlag>) -> bool {
    cancel.is_some_and(CancelFlag::is_cancelled)
}
