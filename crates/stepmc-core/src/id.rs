//! Strongly-typed identifiers used across the workspace.

use std::fmt;

/// Identifies a track within the transport engine.
///
/// Assigned by the engine when a track is pushed to the stack; unique
/// within one event on one worker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TrackId(pub u32);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TrackId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a logical volume (a shape + material, placed many times)
/// within a [`VolumeRegistry`](../../stepmc_geometry/struct.VolumeRegistry.html).
///
/// `LogicalId(n)` is the n-th logical volume registered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LogicalId(pub u32);

impl fmt::Display for LogicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LogicalId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies one physical placement of a logical volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PhysicalId(pub u32);

impl fmt::Display for PhysicalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for PhysicalId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Identifies a material in the geometry registry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MaterialId(pub u32);

impl fmt::Display for MaterialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MaterialId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Sensitive-detector identifier registered for a logical volume.
///
/// The value 0 ([`SensitiveId::NONE`]) means "no sensitive detector
/// registered"; user code keys its hit collections on the nonzero values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SensitiveId(pub i32);

impl SensitiveId {
    /// No sensitive detector registered for the volume.
    pub const NONE: SensitiveId = SensitiveId(0);

    /// True if this is the "not registered" sentinel.
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

impl fmt::Display for SensitiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for SensitiveId {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// Tracking-medium identifier associated with a logical volume.
///
/// Media group volumes that share tracking parameters (cuts, step
/// limits). 0 ([`MediumId::NONE`]) means no medium assigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediumId(pub i32);

impl MediumId {
    /// No tracking medium assigned.
    pub const NONE: MediumId = MediumId(0);
}

impl fmt::Display for MediumId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for MediumId {
    fn from(v: i32) -> Self {
        Self(v)
    }
}

/// PDG particle species code (Monte Carlo numbering scheme).
///
/// Negative codes are antiparticles; codes above 50000000 are reserved
/// for engine-specific species such as the optical photon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PdgCode(pub i32);

impl PdgCode {
    /// The engine's optical-photon species, which has no standard PDG
    /// assignment.
    pub const OPTICAL_PHOTON: PdgCode = PdgCode(50_000_050);
}

impl fmt::Display for PdgCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for PdgCode {
    fn from(v: i32) -> Self {
        Self(v)
    }
}
