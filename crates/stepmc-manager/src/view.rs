//! The per-step query window.

use log::warn;

use stepmc_core::{EngineControl, LogicalId};
use stepmc_geometry::{LogicalVolume, Navigator, PhysicalVolume, VolumeRegistry};
use stepmc_track::Track;

use crate::manager::StepManager;
use crate::regime::{StepRegime, StepStatus};

/// Borrowed engine collaborators a view resolves queries against.
///
/// Bundled so the stepping driver can thread one value through every
/// dispatch instead of three.
#[derive(Clone, Copy)]
pub struct EngineServices<'a> {
    /// The registry built by the detector construction.
    pub geometry: &'a VolumeRegistry,
    /// Event/run abort commands.
    pub control: &'a dyn EngineControl,
    /// The tracking navigator, for boundary normals.
    pub navigator: &'a dyn Navigator,
}

/// One step's worth of query and control surface.
///
/// Combines the live [`StepRegime`] with the persistent manager
/// bookkeeping and the engine services. Valid only for the duration of
/// the step callback that created it; queries answer in VMC external
/// units throughout.
pub struct StepView<'a> {
    pub(crate) manager: &'a mut StepManager,
    pub(crate) regime: StepRegime<'a>,
    pub(crate) services: EngineServices<'a>,
}

impl<'a> StepView<'a> {
    pub(crate) fn new(
        manager: &'a mut StepManager,
        regime: StepRegime<'a>,
        services: EngineServices<'a>,
    ) -> Self {
        Self {
            manager,
            regime,
            services,
        }
    }

    /// Which regime this view was dispatched in.
    pub fn status(&self) -> StepStatus {
        self.regime.status()
    }

    /// The live regime with its borrowed engine objects.
    pub fn regime(&self) -> &StepRegime<'a> {
        &self.regime
    }

    /// The live track.
    pub fn track(&self) -> &'a Track {
        self.regime.track()
    }

    /// The geometry registry the view resolves against.
    pub fn geometry(&self) -> &'a VolumeRegistry {
        self.services.geometry
    }

    // ── Internal resolution helpers ─────────────────────────────────

    /// The physical volume `level` steps above the regime's current
    /// one (0 = current). Callers probing depth on purpose pass
    /// `warn_depth = false` to keep the excess-depth lookup quiet;
    /// registry mismatches always warn, since they indicate a geometry
    /// built behind the registry's back.
    pub(crate) fn physical_at(&self, level: usize, warn_depth: bool) -> Option<&'a PhysicalVolume> {
        let touchable = self.regime.touchable();
        let Some(id) = touchable.volume_at(level) else {
            if warn_depth {
                warn!(
                    "volume level {level} exceeds hierarchy depth {}",
                    touchable.depth()
                );
            }
            return None;
        };
        let volume = self.services.geometry.physical(id);
        if volume.is_none() {
            warn!("physical volume {id} is not registered");
        }
        volume
    }

    /// The logical volume of the regime's current physical volume.
    pub(crate) fn current_logical(&self) -> Option<(LogicalId, &'a LogicalVolume)> {
        let physical = self.physical_at(0, true)?;
        let logical = self.services.geometry.logical(physical.logical);
        if logical.is_none() {
            warn!("logical volume {} is not registered", physical.logical);
        }
        Some((physical.logical, logical?))
    }

    /// The external copy number of a placement: the raw engine value
    /// plus the geometry origin's offsets.
    pub(crate) fn adjusted_copy_no(&self, volume: &PhysicalVolume) -> i32 {
        let origin = self.manager.origin();
        let mut copy_no = volume.copy_no + origin.copy_no_offset();
        if volume.placement.is_division() {
            copy_no += origin.division_copy_no_offset();
        }
        copy_no
    }
}
