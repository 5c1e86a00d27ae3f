//! Secondary-particle reporting and per-step process lists.
//!
//! The engine appends secondaries over the whole track history; the
//! queries here expose only the trailing entries produced in the
//! current step, converted to external units, and translate process
//! classifications into the engine-independent codes.

use log::warn;
use smallvec::smallvec;

use stepmc_core::{units, FourVector, McProcess, PdgCode, ProcessKind, ProcessList};
use stepmc_track::SecondaryTrack;

use crate::regime::StepRegime;
use crate::view::StepView;

/// A secondary produced in the current step, in external units.
#[derive(Clone, Debug, PartialEq)]
pub struct Secondary {
    /// PDG species code.
    pub pdg: PdgCode,
    /// Production position (cm) and global time (s).
    pub position: FourVector,
    /// Momentum (GeV/c) and total energy (GeV) at production.
    pub momentum: FourVector,
}

impl<'a> StepView<'a> {
    /// Number of secondaries produced in the current step. Zero at a
    /// vertex and for spot deposits, which have no step.
    pub fn secondary_count(&self) -> usize {
        self.regime
            .step()
            .map_or(0, |step| step.secondaries.current_step_count())
    }

    fn secondary_track(&self, index: usize) -> Option<&'a SecondaryTrack> {
        let step = self.regime.step()?;
        let count = step.secondaries.current_step_count();
        if index >= count {
            warn!("secondary {index} requested but the current step produced {count}");
            return None;
        }
        let all = step.secondaries.all();
        Some(&all[all.len() - count + index])
    }

    /// The `index`-th secondary of the current step, or `None` (with a
    /// warning) when the index is out of range.
    pub fn secondary(&self, index: usize) -> Option<Secondary> {
        let track = self.secondary_track(index)?;
        Some(Secondary {
            pdg: track.pdg,
            position: FourVector::new(
                track.position.scaled_down(units::LENGTH),
                track.global_time / units::TIME,
            ),
            momentum: FourVector::new(
                track.momentum.scaled_down(units::ENERGY),
                track.total_energy / units::ENERGY,
            ),
        })
    }

    /// The VMC process code that produced the `index`-th secondary.
    ///
    /// Secondaries created by continuous energy loss report
    /// [`McProcess::DeltaRay`]: the generic energy-loss code is
    /// reserved for the deposit itself, and a produced particle on an
    /// ionisation step is by definition a knock-on electron.
    pub fn secondary_production_process(&self, index: usize) -> McProcess {
        let Some(track) = self.secondary_track(index) else {
            return McProcess::NoProcess;
        };
        match &track.creator {
            Some(process) => match McProcess::from_kind(process.kind) {
                McProcess::EnergyLoss => McProcess::DeltaRay,
                code => code,
            },
            None => McProcess::NoProcess,
        }
    }

    /// VMC process codes active in the current step.
    ///
    /// Vertex, boundary re-dispatch, and spot regimes report a single
    /// [`McProcess::Null`]. Normal steps list the along-step processes
    /// (transport excluded) followed by the terminating process; when
    /// the terminator is the optical boundary process its opaque
    /// [`McProcess::LightScattering`] code is unpacked into the
    /// specific boundary outcome, and the transport code that actually
    /// moved the photon across the surface closes the list, so callers
    /// always find a terminator last.
    pub fn step_processes(&self) -> ProcessList {
        let StepRegime::Normal { step, .. } = self.regime else {
            return smallvec![McProcess::Null];
        };

        let mut processes = ProcessList::new();
        for process in &step.along_step_processes {
            if process.kind != ProcessKind::Transportation {
                processes.push(McProcess::from_kind(process.kind));
            }
        }
        match &step.post.process {
            Some(terminator) => {
                processes.push(McProcess::from_kind(terminator.kind));
                if terminator.kind == ProcessKind::OpticalBoundary {
                    if let Some(status) = step.op_boundary_status {
                        processes.push(status.mc_process());
                        processes.push(McProcess::Transportation);
                    }
                }
            }
            None => {
                warn!("step has no post-step process; reporting null");
                processes.push(McProcess::Null);
            }
        }
        processes
    }
}
