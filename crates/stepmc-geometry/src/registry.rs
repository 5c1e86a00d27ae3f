//! The volume registry built by the detector construction collaborator.

use indexmap::IndexMap;

use stepmc_core::{LogicalId, MaterialId, MediumId, PhysicalId, SensitiveId};

use crate::error::GeometryError;
use crate::material::Material;
use crate::volume::{LogicalVolume, PhysicalVolume, Placement, StepLimits};

/// Which tool authored the geometry the engine navigates.
///
/// Fixes the two copy-number offsets that reconcile the authoring
/// tool's numbering convention with the engine's zero-based one. Set
/// once at construction, never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GeometryOrigin {
    /// Geometry built natively in the engine.
    Geant4,
    /// Geometry converted from a VMC G3-style definition.
    VmcToGeant4,
    /// Geometry converted from a Root geometry model.
    RootToGeant4,
}

impl GeometryOrigin {
    /// Offset added to every raw engine copy number.
    pub fn copy_no_offset(self) -> i32 {
        match self {
            GeometryOrigin::Geant4 => 0,
            GeometryOrigin::VmcToGeant4 => 1,
            GeometryOrigin::RootToGeant4 => 1,
        }
    }

    /// Extra offset added for replicated/parameterised placements,
    /// whose numbering the authoring tools start from 1 where the
    /// engine starts from 0.
    pub fn division_copy_no_offset(self) -> i32 {
        match self {
            GeometryOrigin::Geant4 => 1,
            GeometryOrigin::VmcToGeant4 => 0,
            GeometryOrigin::RootToGeant4 => 1,
        }
    }
}

/// Registry of materials, logical volumes, and physical placements.
///
/// Built once by the detector construction, then read-only for the
/// lifetime of the run (step-limit values are interior-mutable, see
/// [`StepLimits`]). IDs handed out by the `add_*` methods index the
/// registry's internal storage; name lookups are insertion-ordered.
#[derive(Debug, Default)]
pub struct VolumeRegistry {
    materials: Vec<Material>,
    logicals: Vec<LogicalVolume>,
    physicals: Vec<PhysicalVolume>,
    material_names: IndexMap<String, MaterialId>,
    logical_names: IndexMap<String, LogicalId>,
}

impl VolumeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a material, returning its id.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        let id = MaterialId(self.materials.len() as u32);
        self.material_names.insert(material.name.clone(), id);
        self.materials.push(material);
        id
    }

    /// Register a logical volume referencing a material by name.
    ///
    /// Fails if the material is unknown or the volume name is already
    /// taken — both are build errors, not runtime conditions.
    pub fn add_logical(
        &mut self,
        name: impl Into<String>,
        material: &str,
    ) -> Result<LogicalId, GeometryError> {
        let name = name.into();
        if self.logical_names.contains_key(&name) {
            return Err(GeometryError::DuplicateVolume { name });
        }
        let material_id =
            self.material_names
                .get(material)
                .copied()
                .ok_or_else(|| GeometryError::UnknownMaterial {
                    material: material.to_string(),
                    volume: name.clone(),
                })?;
        let id = LogicalId(self.logicals.len() as u32);
        self.logical_names.insert(name.clone(), id);
        self.logicals.push(LogicalVolume {
            name,
            material: material_id,
            sensitive: None,
            medium: None,
            limits: None,
        });
        Ok(id)
    }

    /// Register a sensitive-detector identifier for a logical volume.
    pub fn set_sensitive(&mut self, volume: LogicalId, id: SensitiveId) {
        if let Some(lv) = self.logicals.get_mut(volume.0 as usize) {
            lv.sensitive = Some(id);
        }
    }

    /// Assign a tracking-medium identifier to a logical volume.
    pub fn set_medium(&mut self, volume: LogicalId, id: MediumId) {
        if let Some(lv) = self.logicals.get_mut(volume.0 as usize) {
            lv.medium = Some(id);
        }
    }

    /// Attach step limits to a logical volume.
    pub fn set_limits(&mut self, volume: LogicalId, limits: StepLimits) {
        if let Some(lv) = self.logicals.get_mut(volume.0 as usize) {
            lv.limits = Some(limits);
        }
    }

    /// Place a logical volume, returning the physical placement id.
    pub fn place(
        &mut self,
        name: impl Into<String>,
        logical: LogicalId,
        copy_no: i32,
        placement: Placement,
    ) -> Result<PhysicalId, GeometryError> {
        let name = name.into();
        if self.logicals.get(logical.0 as usize).is_none() {
            return Err(GeometryError::UnknownLogicalVolume { placement: name });
        }
        let id = PhysicalId(self.physicals.len() as u32);
        self.physicals.push(PhysicalVolume {
            name,
            logical,
            copy_no,
            placement,
        });
        Ok(id)
    }

    /// Look up a material.
    pub fn material(&self, id: MaterialId) -> Option<&Material> {
        self.materials.get(id.0 as usize)
    }

    /// Look up a logical volume.
    pub fn logical(&self, id: LogicalId) -> Option<&LogicalVolume> {
        self.logicals.get(id.0 as usize)
    }

    /// Look up a physical placement.
    pub fn physical(&self, id: PhysicalId) -> Option<&PhysicalVolume> {
        self.physicals.get(id.0 as usize)
    }

    /// Look up a logical volume by name.
    pub fn logical_by_name(&self, name: &str) -> Option<LogicalId> {
        self.logical_names.get(name).copied()
    }

    /// The sensitive-detector identifier registered for a logical
    /// volume, or [`SensitiveId::NONE`].
    pub fn sensitive_id(&self, volume: LogicalId) -> SensitiveId {
        self.logical(volume)
            .and_then(|lv| lv.sensitive)
            .unwrap_or(SensitiveId::NONE)
    }

    /// The tracking-medium identifier of a logical volume, or
    /// [`MediumId::NONE`].
    pub fn medium_id(&self, volume: LogicalId) -> MediumId {
        self.logical(volume)
            .and_then(|lv| lv.medium)
            .unwrap_or(MediumId::NONE)
    }
}
