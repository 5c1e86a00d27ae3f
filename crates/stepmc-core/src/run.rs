//! The shared run-status service.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Process-wide "run is stopping" flag.
///
/// The only genuinely shared, mutable state in the whole layer. Workers
/// hold clones of the same handle; sensitive-detector collaborators
/// consult it to suppress further hit recording once any worker has
/// requested a run abort.
///
/// # Lifecycle
///
/// Created once per run and [`reset`](RunStatus::reset) by the run
/// bookkeeping at run start. [`request_stop`](RunStatus::request_stop)
/// is called by the track control surface *before* the event/run abort
/// commands are issued, so the flag is observable on every worker by
/// the time the engine unwinds.
#[derive(Clone, Debug, Default)]
pub struct RunStatus {
    stopping: Arc<AtomicBool>,
}

impl RunStatus {
    /// Create a fresh handle with the flag cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the run as stopping. Visible to all clones of this handle.
    pub fn request_stop(&self) {
        self.stopping.store(true, Ordering::SeqCst);
    }

    /// True once any worker has requested a run stop.
    pub fn stop_requested(&self) -> bool {
        self.stopping.load(Ordering::SeqCst)
    }

    /// Clear the flag at run start.
    pub fn reset(&self) {
        self.stopping.store(false, Ordering::SeqCst);
    }
}
