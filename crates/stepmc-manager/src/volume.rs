//! Volume, material, and medium queries against the regime's current
//! touchable.
//!
//! All answers are in external units. Missing registrations are never
//! fatal at query time: the query warns and answers with the documented
//! sentinel, leaving the decision to user code.

use std::fmt::Write as _;

use log::warn;

use stepmc_core::{units, MediumId, SensitiveId};

use crate::view::StepView;

/// Material properties of the current volume, in external units.
///
/// Mirrors the classic G3 material query: effective A and Z, density
/// in g/cm³, radiation length in cm. The absorption length is not
/// defined by the engine and always reads 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialView {
    /// Effective atomic mass [au].
    pub eff_a: f64,
    /// Effective atomic number.
    pub eff_z: f64,
    /// Density in g/cm³.
    pub density: f64,
    /// Radiation length in cm.
    pub radiation_length: f64,
    /// Absorption length; not defined, always 0.
    pub absorption_length: f64,
    /// Number of elements in the mixture.
    pub n_elements: u32,
}

impl<'a> StepView<'a> {
    fn volume_id_at(&self, level: usize) -> (SensitiveId, i32) {
        let Some(physical) = self.physical_at(level, true) else {
            return (SensitiveId::NONE, 0);
        };
        let sensitive = self.services.geometry.sensitive_id(physical.logical);
        (sensitive, self.adjusted_copy_no(physical))
    }

    /// The sensitive-detector id and external copy number of the
    /// current volume.
    ///
    /// `(SensitiveId::NONE, 0)` when the volume is not registered.
    pub fn current_volume_id(&self) -> (SensitiveId, i32) {
        self.volume_id_at(0)
    }

    /// Like [`current_volume_id`](StepView::current_volume_id) but for
    /// the volume `level` mothers up (0 = current).
    pub fn mother_volume_id(&self, level: usize) -> (SensitiveId, i32) {
        self.volume_id_at(level)
    }

    /// Name of the current volume's placement, or `""` if unresolvable.
    pub fn current_volume_name(&self) -> &'a str {
        self.physical_at(0, true).map_or("", |pv| pv.name.as_str())
    }

    /// Name of the placement `level` mothers up, or `""`. Unlike the
    /// id query this probes depth quietly, so user code can walk up
    /// the hierarchy until the name comes back empty.
    pub fn mother_volume_name(&self, level: usize) -> &'a str {
        self.physical_at(level, false)
            .map_or("", |pv| pv.name.as_str())
    }

    /// The full placement path from the world to the current volume,
    /// one `/name_copyNo` segment per level with raw engine copy
    /// numbers.
    pub fn current_volume_path(&self) -> String {
        let mut path = String::new();
        for id in self.regime.touchable().iter_from_world() {
            match self.services.geometry.physical(id) {
                Some(pv) => {
                    let _ = write!(path, "/{}_{}", pv.name, pv.copy_no);
                }
                None => {
                    warn!("physical volume {id} is not registered");
                    path.push_str("/?_0");
                }
            }
        }
        path
    }

    /// Material of the current volume, external units.
    ///
    /// `None` when the volume chain or its material is not registered.
    pub fn current_material(&self) -> Option<MaterialView> {
        let (_, logical) = self.current_logical()?;
        let Some(material) = self.services.geometry.material(logical.material) else {
            warn!(
                "material {} of volume {} is not registered",
                logical.material, logical.name
            );
            return None;
        };
        Some(MaterialView {
            eff_a: material.eff_a,
            eff_z: material.eff_z,
            density: material.density / units::MASS_DENSITY,
            radiation_length: material.radiation_length / units::LENGTH,
            absorption_length: 0.0,
            n_elements: material.n_elements,
        })
    }

    /// Tracking-medium id of the current volume, or [`MediumId::NONE`].
    pub fn current_medium_id(&self) -> MediumId {
        match self.current_logical() {
            Some((id, _)) => self.services.geometry.medium_id(id),
            None => MediumId::NONE,
        }
    }

    /// The maximum allowed step in the current volume, external cm.
    ///
    /// `f64::MAX` (with a warning) when the volume's tracking medium
    /// defines no limits.
    pub fn max_step(&self) -> f64 {
        let Some((_, logical)) = self.current_logical() else {
            return f64::MAX;
        };
        match &logical.limits {
            Some(limits) => limits.max_step() / units::LENGTH,
            None => {
                warn!("volume {} defines no step limits", logical.name);
                f64::MAX
            }
        }
    }
}
