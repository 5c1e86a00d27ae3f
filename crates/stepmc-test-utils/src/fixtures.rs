//! A small sampling-calorimeter geometry for tests.

use stepmc_core::{LogicalId, MediumId, PdgCode, PhysicalId, SensitiveId};
use stepmc_geometry::{AffineTransform, Material, Placement, StepLimits, Touchable, VolumeRegistry};
use stepmc_track::ParticleDef;

/// A three-level demo geometry: a vacuum world containing a lead
/// calorimeter containing one replicated liquid-argon layer.
///
/// The calorimeter carries sensitive id 1; the layer carries sensitive
/// id 2, medium id 3, and a 1 cm step limit (10 in native units). All
/// placements use raw copy number 0 so copy-number offset tests can
/// predict the adjusted values.
pub struct DemoGeometry {
    /// The registry holding the volumes below.
    pub registry: VolumeRegistry,
    /// World logical volume.
    pub world_lv: LogicalId,
    /// Calorimeter logical volume.
    pub calor_lv: LogicalId,
    /// Layer logical volume.
    pub layer_lv: LogicalId,
    /// World placement.
    pub world_pv: PhysicalId,
    /// Calorimeter placement.
    pub calor_pv: PhysicalId,
    /// Layer placement (replicated).
    pub layer_pv: PhysicalId,
}

impl DemoGeometry {
    /// Touchable sitting in the world volume.
    pub fn world_touchable(&self) -> Touchable {
        Touchable::new(self.world_pv, [], AffineTransform::identity())
    }

    /// Touchable sitting in the calorimeter.
    pub fn calor_touchable(&self) -> Touchable {
        Touchable::new(
            self.calor_pv,
            [self.world_pv],
            AffineTransform::identity(),
        )
    }

    /// Touchable sitting in the replicated layer.
    pub fn layer_touchable(&self) -> Touchable {
        Touchable::new(
            self.layer_pv,
            [self.calor_pv, self.world_pv],
            AffineTransform::identity(),
        )
    }
}

/// Build the demo geometry.
///
/// Panics on registry errors; the fixture is static and a failure here
/// is a broken test, not a runtime condition.
pub fn demo_geometry() -> DemoGeometry {
    let mut registry = VolumeRegistry::new();

    // Densities are native units (external g/cm3 times 6.241509074e18),
    // radiation lengths native mm.
    registry.add_material(Material::element("Galactic", 1.01, 1.0, 6.24e-7, 4.3e22));
    registry.add_material(Material::element("Pb", 207.2, 82.0, 7.084e19, 5.612));
    registry.add_material(Material::element("lAr", 39.95, 18.0, 8.675697613e18, 140.0));

    let world_lv = registry.add_logical("WRLD", "Galactic").unwrap();
    let calor_lv = registry.add_logical("CALO", "Pb").unwrap();
    let layer_lv = registry.add_logical("LAYR", "lAr").unwrap();

    registry.set_sensitive(calor_lv, SensitiveId(1));
    registry.set_sensitive(layer_lv, SensitiveId(2));
    registry.set_medium(layer_lv, MediumId(3));
    registry.set_limits(layer_lv, StepLimits::new(10.0));

    let world_pv = registry
        .place("WRLD", world_lv, 0, Placement::Simple)
        .unwrap();
    let calor_pv = registry
        .place("CALO", calor_lv, 0, Placement::Simple)
        .unwrap();
    let layer_pv = registry
        .place("LAYR", layer_lv, 0, Placement::Replicated)
        .unwrap();

    DemoGeometry {
        registry,
        world_lv,
        calor_lv,
        layer_lv,
        world_pv,
        calor_pv,
        layer_pv,
    }
}

/// An electron, 0.511 MeV rest mass.
pub fn electron() -> ParticleDef {
    ParticleDef::new(PdgCode(11), "e-", 0.511, -1.0)
}

/// The engine's optical photon: massless, chargeless, non-PDG code.
pub fn optical_photon() -> ParticleDef {
    ParticleDef::new(PdgCode::OPTICAL_PHOTON, "opticalphoton", 0.0, 0.0)
}
