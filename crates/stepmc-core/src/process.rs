//! Physics-process taxonomy: engine-native kinds and the
//! engine-independent VMC process codes, plus the mapping between them.

use smallvec::SmallVec;
use std::fmt;

/// Process codes reported during one step.
///
/// Sized for the common case — a handful of along-step processes plus
/// the terminating one — without heap allocation.
pub type ProcessList = SmallVec<[McProcess; 8]>;

/// Engine-native classification of a physics process.
///
/// This mirrors the engine's own process sub-typing; it is what the
/// engine attaches to steps and secondaries. User code never sees it
/// directly — the step manager maps it to [`McProcess`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ProcessKind {
    /// Geometric transport between interactions.
    Transportation,
    /// Multiple Coulomb scattering.
    MultipleScattering,
    /// Continuous ionisation energy loss.
    Ionisation,
    /// Bremsstrahlung emission.
    Bremsstrahlung,
    /// e+e- pair production.
    PairProduction,
    /// Compton scattering.
    ComptonScattering,
    /// Photoelectric effect.
    PhotoelectricEffect,
    /// Rayleigh scattering.
    Rayleigh,
    /// e+e- annihilation.
    Annihilation,
    /// Particle decay.
    Decay,
    /// Elastic hadronic interaction.
    HadronElastic,
    /// Inelastic hadronic interaction.
    HadronInelastic,
    /// Neutron capture.
    NeutronCapture,
    /// Cherenkov photon emission.
    Cerenkov,
    /// Scintillation photon emission.
    Scintillation,
    /// Bulk absorption of optical photons.
    OpticalAbsorption,
    /// Rayleigh scattering of optical photons.
    OpticalRayleigh,
    /// Optical-photon interaction at a volume boundary.
    ///
    /// The engine folds reflection/refraction/absorption/detection into
    /// this single process; the step manager unpacks it using
    /// [`OpBoundaryStatus`].
    OpticalBoundary,
    /// User step limitation.
    StepLimiter,
    /// Any process outside the taxonomy above.
    UserDefined,
}

/// A physics process as the engine reports it: a display name plus its
/// native classification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Process {
    /// The engine's name for the process (diagnostics only).
    pub name: String,
    /// Native classification.
    pub kind: ProcessKind,
}

impl Process {
    /// Construct a process record.
    pub fn new(name: impl Into<String>, kind: ProcessKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

impl fmt::Display for Process {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Outcome of an optical-photon interaction at a volume boundary.
///
/// Published by the engine's boundary process after the step; the step
/// manager turns it into the matching [`McProcess`] code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OpBoundaryStatus {
    /// Photon reflected at the boundary.
    Reflection,
    /// Photon refracted through the boundary.
    Refraction,
    /// Photon absorbed at the boundary surface.
    Absorption,
    /// Photon detected by a photosensitive surface.
    Detection,
}

impl OpBoundaryStatus {
    /// The VMC process code for this boundary outcome.
    pub fn mc_process(self) -> McProcess {
        match self {
            OpBoundaryStatus::Reflection => McProcess::LightReflection,
            OpBoundaryStatus::Refraction => McProcess::LightRefraction,
            OpBoundaryStatus::Absorption => McProcess::LightAbsorption,
            OpBoundaryStatus::Detection => McProcess::LightDetection,
        }
    }
}

/// Engine-independent VMC process codes.
///
/// The stable enumeration user code matches on. Codes exist for every
/// process family the query surface can report, including the synthetic
/// optical-boundary codes the step manager inserts when unpacking the
/// engine's opaque boundary transportation step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum McProcess {
    /// Multiple Coulomb scattering.
    MultipleScattering,
    /// Continuous energy loss.
    ///
    /// Never reported for secondary production — see
    /// [`McProcess::DeltaRay`].
    EnergyLoss,
    /// Particle decay.
    Decay,
    /// e+e- pair production.
    PairProduction,
    /// Compton scattering.
    Compton,
    /// Photoelectric effect.
    Photoelectric,
    /// Bremsstrahlung.
    Bremsstrahlung,
    /// Delta-ray (knock-on electron) production.
    ///
    /// The engine classifies delta-ray production as generic energy
    /// loss; the reporter remaps it here so callers can tell the two
    /// apart.
    DeltaRay,
    /// e+e- annihilation.
    Annihilation,
    /// Elastic hadronic interaction.
    HadronElastic,
    /// Inelastic hadronic interaction.
    HadronInelastic,
    /// Neutron capture.
    NeutronCapture,
    /// Rayleigh scattering.
    Rayleigh,
    /// Cherenkov emission.
    Cerenkov,
    /// Scintillation emission.
    Scintillation,
    /// Optical-photon scattering, including arrival at a boundary.
    LightScattering,
    /// Optical-photon absorption.
    LightAbsorption,
    /// Optical-photon detection at a photosensitive surface.
    LightDetection,
    /// Optical-photon reflection at a boundary.
    LightReflection,
    /// Optical-photon refraction through a boundary.
    LightRefraction,
    /// Geometric transport.
    Transportation,
    /// User step limitation.
    StepMax,
    /// A process outside the standard taxonomy.
    UserDefined,
    /// Placeholder reported when a regime has no meaningful process
    /// (vertex, boundary re-dispatch, fast-simulation spot).
    Null,
    /// No process: nothing produced the queried object.
    NoProcess,
}

impl McProcess {
    /// Map an engine-native process classification to its VMC code.
    ///
    /// This is the raw taxonomy mapping; the secondary reporter applies
    /// the energy-loss→delta-ray disambiguation on top of it.
    pub fn from_kind(kind: ProcessKind) -> McProcess {
        match kind {
            ProcessKind::Transportation => McProcess::Transportation,
            ProcessKind::MultipleScattering => McProcess::MultipleScattering,
            ProcessKind::Ionisation => McProcess::EnergyLoss,
            ProcessKind::Bremsstrahlung => McProcess::Bremsstrahlung,
            ProcessKind::PairProduction => McProcess::PairProduction,
            ProcessKind::ComptonScattering => McProcess::Compton,
            ProcessKind::PhotoelectricEffect => McProcess::Photoelectric,
            ProcessKind::Rayleigh => McProcess::Rayleigh,
            ProcessKind::Annihilation => McProcess::Annihilation,
            ProcessKind::Decay => McProcess::Decay,
            ProcessKind::HadronElastic => McProcess::HadronElastic,
            ProcessKind::HadronInelastic => McProcess::HadronInelastic,
            ProcessKind::NeutronCapture => McProcess::NeutronCapture,
            ProcessKind::Cerenkov => McProcess::Cerenkov,
            ProcessKind::Scintillation => McProcess::Scintillation,
            ProcessKind::OpticalAbsorption => McProcess::LightAbsorption,
            ProcessKind::OpticalRayleigh => McProcess::LightScattering,
            ProcessKind::OpticalBoundary => McProcess::LightScattering,
            ProcessKind::StepLimiter => McProcess::StepMax,
            ProcessKind::UserDefined => McProcess::UserDefined,
        }
    }
}

impl fmt::Display for McProcess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            McProcess::MultipleScattering => "multiple scattering",
            McProcess::EnergyLoss => "energy loss",
            McProcess::Decay => "decay",
            McProcess::PairProduction => "pair production",
            McProcess::Compton => "Compton scattering",
            McProcess::Photoelectric => "photoelectric effect",
            McProcess::Bremsstrahlung => "bremsstrahlung",
            McProcess::DeltaRay => "delta ray",
            McProcess::Annihilation => "annihilation",
            McProcess::HadronElastic => "hadronic elastic",
            McProcess::HadronInelastic => "hadronic inelastic",
            McProcess::NeutronCapture => "neutron capture",
            McProcess::Rayleigh => "Rayleigh scattering",
            McProcess::Cerenkov => "Cherenkov",
            McProcess::Scintillation => "scintillation",
            McProcess::LightScattering => "light scattering",
            McProcess::LightAbsorption => "light absorption",
            McProcess::LightDetection => "light detection",
            McProcess::LightReflection => "light reflection",
            McProcess::LightRefraction => "light refraction",
            McProcess::Transportation => "transportation",
            McProcess::StepMax => "step limit",
            McProcess::UserDefined => "user defined",
            McProcess::Null => "null",
            McProcess::NoProcess => "no process",
        };
        f.write_str(name)
    }
}
