//! The result of one elementary transport step.

use stepmc_core::{OpBoundaryStatus, PdgCode, PhysicalId, Process, Vec3};

/// What bounded a step point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointStatus {
    /// The point lies on a geometric boundary between volumes.
    GeomBoundary,
    /// The point lies on the outer world boundary.
    WorldBoundary,
    /// A physics process defined the point.
    PhysicsProcess,
    /// A user step limit defined the point.
    UserLimit,
    /// No meaningful classification (e.g. the vertex pre-point).
    Undefined,
}

/// One end of a step.
#[derive(Clone, Debug)]
pub struct StepPoint {
    /// Position in native length units.
    pub position: Vec3,
    /// Global time at this point, native time units.
    pub global_time: f64,
    /// The physical volume at this point, if inside the geometry.
    pub volume: Option<PhysicalId>,
    /// How this point was bounded.
    pub status: PointStatus,
    /// The process that defined the step, set on the post point.
    pub process: Option<Process>,
}

impl StepPoint {
    /// A point with everything unset, for builders to fill in.
    pub fn undefined() -> Self {
        Self {
            position: Vec3::ZERO,
            global_time: 0.0,
            volume: None,
            status: PointStatus::Undefined,
            process: None,
        }
    }
}

/// A secondary particle as the engine records it.
#[derive(Clone, Debug)]
pub struct SecondaryTrack {
    /// PDG species code.
    pub pdg: PdgCode,
    /// Production position, native length units.
    pub position: Vec3,
    /// Global time at production, native time units.
    pub global_time: f64,
    /// Momentum at production, native energy units.
    pub momentum: Vec3,
    /// Total energy at production, native energy units.
    pub total_energy: f64,
    /// The process that created this secondary.
    pub creator: Option<Process>,
}

/// The engine's accumulating secondary list for one track.
///
/// The engine appends secondaries across the *whole* track history and
/// separately counts how many of the trailing entries belong to the
/// current step, split by production phase. The reporter's
/// trailing-slice arithmetic depends on exactly this shape.
#[derive(Clone, Debug, Default)]
pub struct SecondaryLog {
    tracks: Vec<SecondaryTrack>,
    n_at_rest: usize,
    n_along_step: usize,
    n_post_step: usize,
}

impl SecondaryLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a secondary produced in an *earlier* step of this track.
    pub fn push_history(&mut self, secondary: SecondaryTrack) {
        self.tracks.push(secondary);
    }

    /// Record an at-rest production in the current step.
    pub fn record_at_rest(&mut self, secondary: SecondaryTrack) {
        self.tracks.push(secondary);
        self.n_at_rest += 1;
    }

    /// Record an along-step production in the current step.
    pub fn record_along_step(&mut self, secondary: SecondaryTrack) {
        self.tracks.push(secondary);
        self.n_along_step += 1;
    }

    /// Record a post-step production in the current step.
    pub fn record_post_step(&mut self, secondary: SecondaryTrack) {
        self.tracks.push(secondary);
        self.n_post_step += 1;
    }

    /// Reset the per-step counters at the start of a new step. The
    /// history itself is kept for the lifetime of the track.
    pub fn begin_step(&mut self) {
        self.n_at_rest = 0;
        self.n_along_step = 0;
        self.n_post_step = 0;
    }

    /// Every secondary created by the track so far, oldest first.
    pub fn all(&self) -> &[SecondaryTrack] {
        &self.tracks
    }

    /// Secondaries created in the current step, summed over the three
    /// production phases.
    pub fn current_step_count(&self) -> usize {
        self.n_at_rest + self.n_along_step + self.n_post_step
    }
}

/// The engine's live step object, replaced every step.
#[derive(Clone, Debug)]
pub struct Step {
    /// State at the start of the step.
    pub pre: StepPoint,
    /// State at the end of the step.
    pub post: StepPoint,
    /// Step length in native length units.
    pub step_length: f64,
    /// Total energy deposited, native energy units.
    pub total_energy_deposit: f64,
    /// Non-ionizing part of the deposit, native energy units.
    pub non_ionizing_energy_deposit: f64,
    /// Processes active along the step (continuous processes).
    pub along_step_processes: Vec<Process>,
    /// Boundary-interaction outcome when an optical photon hit an
    /// optical surface this step.
    pub op_boundary_status: Option<OpBoundaryStatus>,
    /// The accumulating secondary list (see [`SecondaryLog`]).
    pub secondaries: SecondaryLog,
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepmc_core::ProcessKind;

    fn secondary() -> SecondaryTrack {
        SecondaryTrack {
            pdg: PdgCode(11),
            position: Vec3::ZERO,
            global_time: 0.0,
            momentum: Vec3::ZERO,
            total_energy: 1.0,
            creator: Some(Process::new("eIoni", ProcessKind::Ionisation)),
        }
    }

    #[test]
    fn current_step_count_ignores_history() {
        let mut log = SecondaryLog::new();
        log.push_history(secondary());
        log.record_post_step(secondary());
        log.record_along_step(secondary());
        assert_eq!(log.all().len(), 3);
        assert_eq!(log.current_step_count(), 2);
    }

    #[test]
    fn begin_step_keeps_history_but_clears_counts() {
        let mut log = SecondaryLog::new();
        log.record_post_step(secondary());
        log.begin_step();
        assert_eq!(log.all().len(), 1);
        assert_eq!(log.current_step_count(), 0);
    }
}
