//! Track kinematics, step predicates, and frame conversion.
//!
//! Everything here answers in external units (cm / s / GeV); the
//! engine's native values are divided by exactly one
//! [`units`](stepmc_core::units) constant at the query boundary and
//! never earlier.

use stepmc_core::{units, FourVector, McProcess, OpBoundaryStatus, PdgCode, Vec3};
use stepmc_geometry::TransformMode;
use stepmc_track::{PointStatus, TrackStatus};

use crate::regime::{StepRegime, StepStatus};
use crate::view::StepView;

impl<'a> StepView<'a> {
    // ── Track state ─────────────────────────────────────────────────

    /// Position (cm) and global time (s) of the current query point.
    ///
    /// In the spot regime this is the spot position, not the track's.
    pub fn track_position(&self) -> FourVector {
        let position = match self.regime {
            StepRegime::GflashSpot { spot, .. } => spot.position,
            _ => self.track().position,
        };
        FourVector::new(
            position.scaled_down(units::LENGTH),
            self.track().global_time / units::TIME,
        )
    }

    /// Momentum (GeV/c) and total energy (GeV) of the track.
    pub fn track_momentum(&self) -> FourVector {
        let track = self.track();
        FourVector::new(
            track.momentum.scaled_down(units::ENERGY),
            track.total_energy / units::ENERGY,
        )
    }

    /// Polarization vector; dimensionless, no conversion.
    pub fn track_polarization(&self) -> Vec3 {
        self.track().polarization
    }

    /// Global time since the start of the event, seconds.
    pub fn track_time(&self) -> f64 {
        self.track().global_time / units::TIME
    }

    /// Statistical weight of the track.
    pub fn track_weight(&self) -> f64 {
        self.track().weight
    }

    /// Total energy, GeV.
    pub fn etot(&self) -> f64 {
        self.track().total_energy / units::ENERGY
    }

    /// PDG species code.
    pub fn track_pid(&self) -> PdgCode {
        self.track().particle.pdg
    }

    /// Charge in positron charges.
    pub fn track_charge(&self) -> f64 {
        self.track().particle.charge / units::CHARGE
    }

    /// Rest mass, GeV.
    pub fn track_mass(&self) -> f64 {
        self.track().particle.mass / units::MASS
    }

    // ── Step state ──────────────────────────────────────────────────

    /// Length of the current step, cm. Zero outside the normal regime:
    /// a vertex, a boundary re-dispatch, and a spot deposit add no new
    /// path.
    pub fn track_step_length(&self) -> f64 {
        match self.regime {
            StepRegime::Normal { step, .. } => step.step_length / units::LENGTH,
            _ => 0.0,
        }
    }

    /// Cumulative path length over the whole VMC track, cm, including
    /// any passes before an interruption.
    pub fn track_length(&self) -> f64 {
        let carried = self
            .manager
            .resumed_track_status()
            .map_or(0.0, |s| s.track_length);
        self.track().track_length / units::LENGTH + carried
    }

    /// Number of steps over the whole VMC track, including any passes
    /// before an interruption.
    pub fn step_number(&self) -> u32 {
        let carried = self
            .manager
            .resumed_track_status()
            .map_or(0, |s| s.step_number);
        self.track().step_number + carried
    }

    /// Energy deposited in the current regime, GeV.
    ///
    /// Normal steps report the step's total deposit and spot regimes
    /// the spot energy. A boundary re-dispatch deposits nothing —
    /// except for an optical photon detected at the boundary, whose
    /// full energy lands in the entered volume.
    pub fn energy_deposit(&self) -> f64 {
        match self.regime {
            StepRegime::Normal { step, .. } => step.total_energy_deposit / units::ENERGY,
            StepRegime::GflashSpot { spot, .. } => spot.energy / units::ENERGY,
            StepRegime::Boundary { track, step } => {
                let detected = track.status() == TrackStatus::StopAndKill
                    && step
                        .post
                        .process
                        .as_ref()
                        .map(|p| McProcess::from_kind(p.kind))
                        == Some(McProcess::LightScattering)
                    && step.op_boundary_status == Some(OpBoundaryStatus::Detection);
                if detected {
                    track.total_energy / units::ENERGY
                } else {
                    0.0
                }
            }
            StepRegime::Vertex { .. } => 0.0,
        }
    }

    /// Non-ionizing part of the deposit, GeV. Defined for normal steps
    /// only.
    pub fn non_ionizing_energy_deposit(&self) -> f64 {
        match self.regime {
            StepRegime::Normal { step, .. } => step.non_ionizing_energy_deposit / units::ENERGY,
            _ => 0.0,
        }
    }

    // ── Predicates ──────────────────────────────────────────────────

    /// True at the track's first dispatch, before any step.
    pub fn is_new_track(&self) -> bool {
        self.status() == StepStatus::Vertex
    }

    /// True when the step stayed entirely inside one volume.
    pub fn is_track_inside(&self) -> bool {
        self.status() == StepStatus::Normal && !self.is_track_entering() && !self.is_track_exiting()
    }

    /// True in the boundary re-dispatch, i.e. when the entered volume
    /// is seeing the step.
    pub fn is_track_entering(&self) -> bool {
        self.status() == StepStatus::Boundary
    }

    /// True when the step ended on a geometric boundary. The boundary
    /// re-dispatch carries the same boundary-limited step but is seen
    /// from the entered volume, so a track is never exiting there.
    pub fn is_track_exiting(&self) -> bool {
        self.status() == StepStatus::Normal
            && self
                .regime
                .step()
                .is_some_and(|step| step.post.status == PointStatus::GeomBoundary)
    }

    /// True when the step ended on the world boundary.
    pub fn is_track_out(&self) -> bool {
        self.regime
            .step()
            .is_some_and(|step| step.post.status == PointStatus::WorldBoundary)
    }

    /// True if the track has stopped (killed, suspended, or postponed).
    pub fn is_track_stopped(&self) -> bool {
        self.track().status().is_stopped()
    }

    /// True if the track has disappeared (killed or postponed; a
    /// suspended track has not disappeared).
    pub fn is_track_disappeared(&self) -> bool {
        self.track().status().is_disappeared()
    }

    /// True while the engine keeps tracking, including the at-rest
    /// phase.
    pub fn is_track_alive(&self) -> bool {
        self.track().status().is_alive()
    }

    // ── Frame conversion ────────────────────────────────────────────

    /// Transform from the global frame into the local frame of the
    /// regime's current volume. Positions are cm in and cm out;
    /// directions are unscaled.
    pub fn gmtod(&self, global: Vec3, mode: TransformMode) -> Vec3 {
        let transform = self.regime.touchable().transform();
        match mode {
            TransformMode::Position => transform
                .transform_point(global * units::LENGTH)
                .scaled_down(units::LENGTH),
            TransformMode::Direction => transform.transform_axis(global),
        }
    }

    /// Inverse of [`gmtod`](StepView::gmtod): local frame to global.
    pub fn gdtom(&self, local: Vec3, mode: TransformMode) -> Vec3 {
        let transform = self.regime.touchable().transform().inverse();
        match mode {
            TransformMode::Position => transform
                .transform_point(local * units::LENGTH)
                .scaled_down(units::LENGTH),
            TransformMode::Direction => transform.transform_axis(local),
        }
    }

    /// Single-precision variant of [`gmtod`](StepView::gmtod), for
    /// callers keeping G3-style float buffers.
    pub fn gmtod_f32(&self, global: [f32; 3], mode: TransformMode) -> [f32; 3] {
        let v = self.gmtod(
            Vec3::new(global[0] as f64, global[1] as f64, global[2] as f64),
            mode,
        );
        [v.x as f32, v.y as f32, v.z as f32]
    }

    /// Single-precision variant of [`gdtom`](StepView::gdtom).
    pub fn gdtom_f32(&self, local: [f32; 3], mode: TransformMode) -> [f32; 3] {
        let v = self.gdtom(
            Vec3::new(local[0] as f64, local[1] as f64, local[2] as f64),
            mode,
        );
        [v.x as f32, v.y as f32, v.z as f32]
    }

    /// Global-frame normal of the surface the track is leaving, if the
    /// navigator has one.
    pub fn boundary_normal(&self) -> Option<Vec3> {
        let local = self.services.navigator.local_exit_normal()?;
        Some(
            self.services
                .navigator
                .local_to_global_transform()
                .transform_axis(local),
        )
    }
}
