//! The currently transported particle.

use std::cell::Cell;

use stepmc_core::{PdgCode, TrackId, Vec3};
use stepmc_geometry::Touchable;

/// Static particle-species properties attached to a track.
#[derive(Clone, Debug, PartialEq)]
pub struct ParticleDef {
    /// PDG species code.
    pub pdg: PdgCode,
    /// Species name (diagnostics only).
    pub name: String,
    /// Rest mass in native energy units.
    pub mass: f64,
    /// Charge in positron charges.
    pub charge: f64,
}

impl ParticleDef {
    /// Construct a particle definition.
    pub fn new(pdg: PdgCode, name: impl Into<String>, mass: f64, charge: f64) -> Self {
        Self {
            pdg,
            name: name.into(),
            mass,
            charge,
        }
    }
}

/// Engine track status.
///
/// The engine owns the transitions; the control surface only requests
/// the three "stop" values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackStatus {
    /// Continue tracking.
    Alive,
    /// Invoke at-rest processes, then kill the track.
    StopButAlive,
    /// Kill the track after the current step.
    StopAndKill,
    /// Kill the track and every secondary it created.
    KillTrackAndSecondaries,
    /// Suspend tracking; the track returns to the stack.
    Suspend,
    /// Postpone the track to the next event.
    PostponeToNextEvent,
}

impl TrackStatus {
    /// True if the particle has stopped, been killed, suspended, or
    /// postponed.
    pub fn is_stopped(self) -> bool {
        matches!(
            self,
            TrackStatus::StopAndKill
                | TrackStatus::KillTrackAndSecondaries
                | TrackStatus::Suspend
                | TrackStatus::PostponeToNextEvent
        )
    }

    /// True if the particle has disappeared: killed or postponed, but
    /// not merely suspended.
    pub fn is_disappeared(self) -> bool {
        matches!(
            self,
            TrackStatus::StopAndKill
                | TrackStatus::KillTrackAndSecondaries
                | TrackStatus::PostponeToNextEvent
        )
    }

    /// True if tracking continues (including the at-rest phase).
    pub fn is_alive(self) -> bool {
        matches!(self, TrackStatus::Alive | TrackStatus::StopButAlive)
    }
}

/// The engine's live track object.
///
/// All kinematic fields are in native units (mm, ns, MeV, e+). The
/// step manager borrows `&Track` for one step callback and must not
/// retain it; the engine replaces or mutates the track between steps.
///
/// `status` is interior-mutable: the engine hands out shared borrows
/// during the step callback, yet the control surface must be able to
/// request a kill, exactly as the original engine API allows.
#[derive(Clone, Debug)]
pub struct Track {
    /// Engine track identifier.
    pub id: TrackId,
    /// Particle species.
    pub particle: ParticleDef,
    /// Position in native length units (post-step point).
    pub position: Vec3,
    /// Momentum in native energy units.
    pub momentum: Vec3,
    /// Total energy in native energy units.
    pub total_energy: f64,
    /// Time since the start of the event, native time units.
    pub global_time: f64,
    /// Polarization vector (dimensionless direction).
    pub polarization: Vec3,
    /// Statistical weight.
    pub weight: f64,
    /// Steps taken so far by this track in this engine.
    pub step_number: u32,
    /// Cumulative path length in native length units.
    pub track_length: f64,
    /// Current position in the volume hierarchy.
    pub touchable: Touchable,
    /// The touchable the track is about to enter, when crossing a
    /// boundary with a next volume.
    pub next_touchable: Option<Touchable>,
    status: Cell<TrackStatus>,
}

impl Track {
    /// Create a freshly started track at its vertex.
    pub fn new(id: TrackId, particle: ParticleDef, touchable: Touchable) -> Self {
        let rest_energy = particle.mass;
        Self {
            id,
            particle,
            position: Vec3::ZERO,
            momentum: Vec3::ZERO,
            total_energy: rest_energy,
            global_time: 0.0,
            polarization: Vec3::ZERO,
            weight: 1.0,
            step_number: 0,
            track_length: 0.0,
            touchable,
            next_touchable: None,
            status: Cell::new(TrackStatus::Alive),
        }
    }

    /// Current engine status.
    pub fn status(&self) -> TrackStatus {
        self.status.get()
    }

    /// Request a status change on the live track.
    pub fn set_status(&self, status: TrackStatus) {
        self.status.set(status);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepmc_geometry::AffineTransform;

    fn touchable() -> Touchable {
        Touchable::new(stepmc_core::PhysicalId(0), [], AffineTransform::identity())
    }

    #[test]
    fn status_predicates_partition_the_states() {
        use TrackStatus::*;
        for status in [
            Alive,
            StopButAlive,
            StopAndKill,
            KillTrackAndSecondaries,
            Suspend,
            PostponeToNextEvent,
        ] {
            // A track is either still alive or stopped, never both.
            assert_ne!(status.is_alive(), status.is_stopped());
        }
        assert!(Suspend.is_stopped());
        assert!(!Suspend.is_disappeared());
    }

    #[test]
    fn status_mutates_through_shared_borrow() {
        let track = Track::new(
            TrackId(1),
            ParticleDef::new(PdgCode(11), "e-", 0.511, -1.0),
            touchable(),
        );
        let borrow: &Track = &track;
        borrow.set_status(TrackStatus::StopAndKill);
        assert_eq!(track.status(), TrackStatus::StopAndKill);
    }
}
