#[cfg(test)]
#[path = "../../tests/unit/utils/quota_test.rs"]
mod quota_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Specifies a computational quota for an optimization run.
pub trait Quota {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}

/// A cooperative cancellation flag which can be shared between threads.
///
/// Setting the flag is observed by the evolution worker at the next generation boundary.
#[derive(Clone, Default)]
pub struct CancellationQuota {
    is_cancelled: Arc<AtomicBool>,
}

impl CancellationQuota {
    /// Requests cancellation.
    pub fn cancel(&self) {
        self.is_cancelled.store(true, Ordering::Release);
    }
}

impl Quota for CancellationQuota {
    fn is_reached(&self) -> bool {
        self.is_cancelled.load(Ordering::Acquire)
    }
}

/// Combines multiple quotas: reached as soon as any of inner quotas is reached.
#[derive(Clone, Default)]
pub struct CompositeQuota {
    inners: Vec<Arc<dyn Quota + Send + Sync>>,
}

impl CompositeQuota {
    /// Creates a new instance of `CompositeQuota`.
    pub fn new(inners: Vec<Arc<dyn Quota + Send + Sync>>) -> Self {
        Self { inners }
    }
}

impl Quota for CompositeQuota {
    fn is_reached(&self) -> bool {
        self.inners.iter().any(|quota| quota.is_reached())
    }
}
