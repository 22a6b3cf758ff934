//! Interruption handler.

use shortcut_core::utils::{CancellationQuota, Quota};
use std::sync::Arc;

/// Creates a quota which is reached when the process receives Ctrl+C or a termination signal.
/// The handler can be installed only once per process, later calls return a quota which is
/// never reached by a signal.
pub fn create_interruption_quota() -> Arc<dyn Quota + Send + Sync> {
    let quota = CancellationQuota::default();

    let result = ctrlc::set_handler({
        let quota = quota.clone();
        move || quota.cancel()
    });

    match result {
        Ok(_) | Err(ctrlc::Error::MultipleHandlers) => {}
        Err(err) => eprintln!("cannot set interruption handler: '{err}'"),
    }

    Arc::new(quota)
}
