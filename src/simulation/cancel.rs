// src/simulation/cancel.rs

use crate::error::{RiskError, RiskResult};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Lets a caller abandon a batch from another thread, or bound it in time.
///
/// Clones share the same flag. Work checks the token between Monte Carlo
/// runs and between SKUs.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
    deadline: Option<Instant>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
            deadline: Some(deadline),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }

    /// `Err` once cancelled or past the deadline.
    pub fn check(&self) -> RiskResult<()> {
        if self.is_cancelled() {
            return Err(RiskError::Cancelled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Err(RiskError::DeadlineExceeded),
            _ => Ok(()),
        }
    }
}
