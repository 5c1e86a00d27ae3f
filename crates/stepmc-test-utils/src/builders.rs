//! Builders for engine-native tracks, steps, and secondaries.
//!
//! Defaults are chosen so a test states only what it asserts on;
//! everything else stays zero / empty / undefined.

use stepmc_core::{OpBoundaryStatus, PdgCode, PhysicalId, Process, ProcessKind, TrackId, Vec3};
use stepmc_geometry::Touchable;
use stepmc_track::{ParticleDef, PointStatus, SecondaryLog, SecondaryTrack, Step, StepPoint, Track};

/// Builds a [`Track`] with explicit overrides on top of vertex
/// defaults.
pub struct TrackBuilder {
    track: Track,
}

impl TrackBuilder {
    /// Start from a fresh track of the given species in the given
    /// touchable.
    pub fn new(id: u32, particle: ParticleDef, touchable: Touchable) -> Self {
        Self {
            track: Track::new(TrackId(id), particle, touchable),
        }
    }

    /// Position in native length units.
    pub fn position(mut self, position: Vec3) -> Self {
        self.track.position = position;
        self
    }

    /// Momentum in native energy units.
    pub fn momentum(mut self, momentum: Vec3) -> Self {
        self.track.momentum = momentum;
        self
    }

    /// Total energy in native energy units.
    pub fn total_energy(mut self, energy: f64) -> Self {
        self.track.total_energy = energy;
        self
    }

    /// Global time in native time units.
    pub fn global_time(mut self, time: f64) -> Self {
        self.track.global_time = time;
        self
    }

    /// Polarization vector.
    pub fn polarization(mut self, polarization: Vec3) -> Self {
        self.track.polarization = polarization;
        self
    }

    /// Statistical weight.
    pub fn weight(mut self, weight: f64) -> Self {
        self.track.weight = weight;
        self
    }

    /// Steps already taken in the engine.
    pub fn step_number(mut self, steps: u32) -> Self {
        self.track.step_number = steps;
        self
    }

    /// Path length already accumulated, native length units.
    pub fn track_length(mut self, length: f64) -> Self {
        self.track.track_length = length;
        self
    }

    /// The touchable the track is about to enter.
    pub fn next_touchable(mut self, touchable: Touchable) -> Self {
        self.track.next_touchable = Some(touchable);
        self
    }

    /// Finish the track.
    pub fn build(self) -> Track {
        self.track
    }
}

/// Builds a [`Step`] with explicit overrides on top of an empty,
/// undefined step.
pub struct StepBuilder {
    step: Step,
}

impl StepBuilder {
    /// Start from an empty step with undefined points.
    pub fn new() -> Self {
        Self {
            step: Step {
                pre: StepPoint::undefined(),
                post: StepPoint::undefined(),
                step_length: 0.0,
                total_energy_deposit: 0.0,
                non_ionizing_energy_deposit: 0.0,
                along_step_processes: Vec::new(),
                op_boundary_status: None,
                secondaries: SecondaryLog::new(),
            },
        }
    }

    /// Pre-step position, native length units.
    pub fn pre_position(mut self, position: Vec3) -> Self {
        self.step.pre.position = position;
        self
    }

    /// Post-step position, native length units.
    pub fn post_position(mut self, position: Vec3) -> Self {
        self.step.post.position = position;
        self
    }

    /// The volume at the pre-step point.
    pub fn pre_volume(mut self, volume: PhysicalId) -> Self {
        self.step.pre.volume = Some(volume);
        self
    }

    /// The volume at the post-step point.
    pub fn post_volume(mut self, volume: PhysicalId) -> Self {
        self.step.post.volume = Some(volume);
        self
    }

    /// What bounded the post-step point.
    pub fn post_status(mut self, status: PointStatus) -> Self {
        self.step.post.status = status;
        self
    }

    /// Step length, native length units.
    pub fn length(mut self, length: f64) -> Self {
        self.step.step_length = length;
        self
    }

    /// Total energy deposit, native energy units.
    pub fn deposit(mut self, deposit: f64) -> Self {
        self.step.total_energy_deposit = deposit;
        self
    }

    /// Non-ionizing energy deposit, native energy units.
    pub fn non_ionizing_deposit(mut self, deposit: f64) -> Self {
        self.step.non_ionizing_energy_deposit = deposit;
        self
    }

    /// Add an along-step (continuous) process.
    pub fn along_step(mut self, name: &str, kind: ProcessKind) -> Self {
        self.step.along_step_processes.push(Process::new(name, kind));
        self
    }

    /// Set the process that limited the step.
    pub fn terminated_by(mut self, name: &str, kind: ProcessKind) -> Self {
        self.step.post.process = Some(Process::new(name, kind));
        self
    }

    /// Publish an optical-boundary outcome for this step.
    pub fn op_boundary(mut self, status: OpBoundaryStatus) -> Self {
        self.step.op_boundary_status = Some(status);
        self
    }

    /// Append a secondary produced in an earlier step of the track.
    pub fn history_secondary(mut self, secondary: SecondaryTrack) -> Self {
        self.step.secondaries.push_history(secondary);
        self
    }

    /// Record an at-rest secondary of the current step.
    pub fn at_rest_secondary(mut self, secondary: SecondaryTrack) -> Self {
        self.step.secondaries.record_at_rest(secondary);
        self
    }

    /// Record an along-step secondary of the current step.
    pub fn along_step_secondary(mut self, secondary: SecondaryTrack) -> Self {
        self.step.secondaries.record_along_step(secondary);
        self
    }

    /// Record a post-step secondary of the current step.
    pub fn post_step_secondary(mut self, secondary: SecondaryTrack) -> Self {
        self.step.secondaries.record_post_step(secondary);
        self
    }

    /// Finish the step.
    pub fn build(self) -> Step {
        self.step
    }
}

impl Default for StepBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A secondary with unit kinematics and no creator process.
pub fn secondary(pdg: i32) -> SecondaryTrack {
    SecondaryTrack {
        pdg: PdgCode(pdg),
        position: Vec3::ZERO,
        global_time: 0.0,
        momentum: Vec3::new(0.0, 0.0, 1.0),
        total_energy: 1.0,
        creator: None,
    }
}

/// A secondary credited to the given creator process.
pub fn secondary_from(pdg: i32, process: &str, kind: ProcessKind) -> SecondaryTrack {
    SecondaryTrack {
        creator: Some(Process::new(process, kind)),
        ..secondary(pdg)
    }
}
