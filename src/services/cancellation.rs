use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use crate::errors::{AppError, AppResult};

/// Cooperative cancellation flag shared between a caller and a running generation.
///
/// Cancellation is only observed at checkpoints (before each chunk, section and model
/// attempt); an in-flight provider call runs to completion.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    pub fn ensure_active(&self) -> AppResult<()> {
        if self.is_cancelled() {
            return Err(AppError::Cancelled);
        }
        Ok(())
    }
}

/// Checkpoint helper for the optional tokens threaded through the services.
pub(crate) fn checkpoint(cancel: Option<&CancelToken>) -> AppResult<()> {
    cancel.map_or(Ok(()), CancelToken::ensure_active)
}
