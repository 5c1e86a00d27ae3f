//! The persistent per-worker step manager.

use std::cell::Cell;

use indexmap::IndexSet;
use log::warn;

use stepmc_core::{LogicalId, RunStatus, TrackId};
use stepmc_geometry::{GeometryOrigin, VolumeRegistry};

use crate::error::SetupError;
use crate::regime::StepRegime;
use crate::view::{EngineServices, StepView};

thread_local! {
    static ACTIVE: Cell<bool> = const { Cell::new(false) };
}

/// Marker that exactly one manager exists per worker thread; released
/// on drop.
#[derive(Debug)]
struct ActiveGuard;

impl ActiveGuard {
    fn acquire() -> Result<Self, SetupError> {
        ACTIVE.with(|active| {
            if active.get() {
                Err(SetupError::AlreadyActive)
            } else {
                active.set(true);
                Ok(ActiveGuard)
            }
        })
    }
}

impl Drop for ActiveGuard {
    fn drop(&mut self) {
        ACTIVE.with(|active| active.set(false));
    }
}

/// Carried-over counters for a track resumed from an earlier
/// transport pass.
///
/// When an interrupted track is re-stacked, the engine restarts its
/// step count and path length from zero; queries must report the
/// totals over the whole VMC track. Values are in external units
/// (path length in cm), matching what the queries previously reported.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResumedTrackStatus {
    /// Steps already taken in earlier passes.
    pub step_number: u32,
    /// Path length already accumulated, external cm.
    pub track_length: f64,
}

/// An on-the-fly step-limit override awaiting restoration.
#[derive(Debug)]
struct ModifiedLimit {
    volume: LogicalId,
    previous: f64,
}

/// Worker-local bookkeeping that outlives individual steps.
///
/// One per worker thread (enforced at construction). Holds the
/// copy-number convention of the geometry origin, the shared run
/// status, the resumed-track counters, the set of user-interrupted
/// tracks, and the one pending step-limit override. Everything else a
/// query needs is borrowed fresh each step through
/// [`view`](StepManager::view).
#[derive(Debug)]
pub struct StepManager {
    origin: GeometryOrigin,
    run_status: RunStatus,
    resumed: Option<ResumedTrackStatus>,
    modified_limit: Option<ModifiedLimit>,
    interrupted: IndexSet<TrackId>,
    _active: ActiveGuard,
}

impl StepManager {
    /// Create the worker's step manager.
    ///
    /// Fails with [`SetupError::AlreadyActive`] if this thread already
    /// has one.
    pub fn new(origin: GeometryOrigin, run_status: RunStatus) -> Result<Self, SetupError> {
        Ok(Self {
            origin,
            run_status,
            resumed: None,
            modified_limit: None,
            interrupted: IndexSet::new(),
            _active: ActiveGuard::acquire()?,
        })
    }

    /// The geometry origin fixing the copy-number convention.
    pub fn origin(&self) -> GeometryOrigin {
        self.origin
    }

    /// Handle to the shared run-status flag.
    pub fn run_status(&self) -> &RunStatus {
        &self.run_status
    }

    /// Clear per-event bookkeeping at the start of a new event.
    pub fn begin_event(&mut self) {
        self.interrupted.clear();
        self.resumed = None;
    }

    // ── Resumed tracks ──────────────────────────────────────────────

    /// Install carried-over counters before re-dispatching a resumed
    /// track; step-number and track-length queries add them on top of
    /// the engine's restarted values.
    pub fn set_resumed_track_status(&mut self, status: ResumedTrackStatus) {
        self.resumed = Some(status);
    }

    /// Drop the carried-over counters once the resumed track finishes.
    pub fn clear_resumed_track_status(&mut self) {
        self.resumed = None;
    }

    /// The active carried-over counters, if a resumed track is current.
    pub fn resumed_track_status(&self) -> Option<&ResumedTrackStatus> {
        self.resumed.as_ref()
    }

    // ── Interrupted tracks ──────────────────────────────────────────

    /// True if user code interrupted this track for later re-stacking.
    pub fn is_interrupted(&self, id: TrackId) -> bool {
        self.interrupted.contains(&id)
    }

    pub(crate) fn mark_interrupted(&mut self, id: TrackId) {
        self.interrupted.insert(id);
    }

    // ── On-the-fly step limits ──────────────────────────────────────

    /// The logical volume whose step limit is currently overridden, if
    /// any. The stepping driver consults this at boundary crossings.
    pub fn modified_limit_volume(&self) -> Option<LogicalId> {
        self.modified_limit.as_ref().map(|m| m.volume)
    }

    pub(crate) fn record_modified_limit(&mut self, volume: LogicalId, previous: f64) {
        self.modified_limit = Some(ModifiedLimit { volume, previous });
    }

    /// Undo the pending on-the-fly step-limit override.
    ///
    /// Warns and does nothing if no override is active, and if the
    /// overridden volume no longer carries limits.
    pub fn restore_max_step(&mut self, geometry: &VolumeRegistry) {
        let Some(modified) = self.modified_limit.take() else {
            warn!("restore_max_step: no on-the-fly step-limit override is active");
            return;
        };
        match geometry
            .logical(modified.volume)
            .and_then(|lv| lv.limits.as_ref())
        {
            Some(limits) => {
                limits.replace_max_step(modified.previous);
            }
            None => warn!(
                "restore_max_step: logical volume {} no longer carries step limits",
                modified.volume
            ),
        }
    }

    /// Open the per-step query window.
    pub fn view<'a>(
        &'a mut self,
        regime: StepRegime<'a>,
        services: EngineServices<'a>,
    ) -> StepView<'a> {
        StepView::new(self, regime, services)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_manager_on_one_thread_is_rejected() {
        let first = StepManager::new(GeometryOrigin::Geant4, RunStatus::new()).unwrap();
        let second = StepManager::new(GeometryOrigin::Geant4, RunStatus::new());
        assert!(matches!(second, Err(SetupError::AlreadyActive)));

        // Dropping the live manager frees the slot.
        drop(first);
        assert!(StepManager::new(GeometryOrigin::Geant4, RunStatus::new()).is_ok());
    }

    #[test]
    fn managers_on_different_threads_coexist() {
        let _mine = StepManager::new(GeometryOrigin::Geant4, RunStatus::new()).unwrap();
        let ok = std::thread::spawn(|| {
            StepManager::new(GeometryOrigin::Geant4, RunStatus::new()).is_ok()
        })
        .join()
        .unwrap();
        assert!(ok);
    }

    #[test]
    fn begin_event_clears_track_bookkeeping() {
        let mut mgr = StepManager::new(GeometryOrigin::VmcToGeant4, RunStatus::new()).unwrap();
        mgr.mark_interrupted(TrackId(4));
        mgr.set_resumed_track_status(ResumedTrackStatus {
            step_number: 12,
            track_length: 3.5,
        });
        assert!(mgr.is_interrupted(TrackId(4)));

        mgr.begin_event();
        assert!(!mgr.is_interrupted(TrackId(4)));
        assert!(mgr.resumed_track_status().is_none());
    }

    #[test]
    fn restore_without_override_is_a_no_op() {
        let mut mgr = StepManager::new(GeometryOrigin::Geant4, RunStatus::new()).unwrap();
        let geometry = VolumeRegistry::new();
        mgr.restore_max_step(&geometry);
        assert!(mgr.modified_limit_volume().is_none());
    }
}
