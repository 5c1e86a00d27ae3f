//! Mock implementations of the engine trait seams.

use std::cell::{Cell, RefCell};

use stepmc_core::{EngineControl, RunStatus, Vec3};
use stepmc_geometry::{AffineTransform, Navigator};

/// One recorded abort command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AbortCall {
    /// `abort_event` was issued.
    Event,
    /// `abort_run` was issued.
    Run,
}

/// Records abort commands instead of aborting anything.
///
/// Optionally watches a [`RunStatus`] handle and samples its flag at
/// the moment `abort_event` arrives, so tests can assert the flag was
/// raised *before* the engine was told to unwind.
#[derive(Debug, Default)]
pub struct MockEngineControl {
    calls: RefCell<Vec<AbortCall>>,
    watched: Option<RunStatus>,
    flag_at_event_abort: Cell<Option<bool>>,
}

impl MockEngineControl {
    /// A mock that only records calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock that additionally samples `run_status` when the event
    /// abort arrives.
    pub fn watching(run_status: RunStatus) -> Self {
        Self {
            watched: Some(run_status),
            ..Self::default()
        }
    }

    /// The abort commands received, in order.
    pub fn calls(&self) -> Vec<AbortCall> {
        self.calls.borrow().clone()
    }

    /// The watched flag's value at the moment of the last
    /// `abort_event`, or `None` if no event abort arrived.
    pub fn flag_at_event_abort(&self) -> Option<bool> {
        self.flag_at_event_abort.get()
    }
}

impl EngineControl for MockEngineControl {
    fn abort_event(&self) {
        if let Some(status) = &self.watched {
            self.flag_at_event_abort.set(Some(status.stop_requested()));
        }
        self.calls.borrow_mut().push(AbortCall::Event);
    }

    fn abort_run(&self) {
        self.calls.borrow_mut().push(AbortCall::Run);
    }
}

/// A navigator answering from plain public fields.
#[derive(Debug)]
pub struct MockNavigator {
    /// The local-frame exit normal to report, if any.
    pub exit_normal: Option<Vec3>,
    /// The local→global transform to report.
    pub local_to_global: AffineTransform,
}

impl MockNavigator {
    /// A navigator with no exit normal and an identity transform.
    pub fn new() -> Self {
        Self {
            exit_normal: None,
            local_to_global: AffineTransform::identity(),
        }
    }
}

impl Default for MockNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for MockNavigator {
    fn local_exit_normal(&self) -> Option<Vec3> {
        self.exit_normal
    }

    fn local_to_global_transform(&self) -> AffineTransform {
        self.local_to_global.clone()
    }
}
