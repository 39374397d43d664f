//! Cooperative cancellation for analysis passes
//!
//! The host hands a [`CancelToken`] to every long traversal (reference
//! search, recursive scans, fix application). Traversals poll it at their
//! checkpoints and unwind with [`Cancelled`] instead of finishing the pass.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// The host cancelled the current pass. Partial results are discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("analysis pass was cancelled")]
pub struct Cancelled;

/// Shared cancellation flag. Cloning yields a handle to the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        CancelToken::default()
    }

    /// Request cancellation. Observed at the next checkpoint.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Checkpoint: returns `Err(Cancelled)` once cancellation was requested.
    pub fn check(&self) -> Result<(), Cancelled> {
        if self.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }
}
