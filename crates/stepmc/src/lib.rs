//! stepmc: an engine-independent step query API over a Geant4-family
//! particle transport engine.
//!
//! This is the top-level facade crate re-exporting the public API of
//! the stepmc sub-crates. The centre of the API is the
//! [`manager::StepView`]: once per transport step the stepping driver
//! opens a view over the engine's live track/step objects and hands it
//! to user code, which queries positions, volumes, deposits, and
//! secondaries in VMC external units (cm / s / GeV) without ever
//! touching the engine directly.
//!
//! # Quick start
//!
//! ```rust
//! use stepmc::prelude::*;
//!
//! // User scoring code sees one view per dispatched step regime.
//! struct Scorer {
//!     deposited: f64,
//! }
//! impl StepObserver for Scorer {
//!     fn on_step(&mut self, view: &mut StepView<'_>) {
//!         if view.status() == StepStatus::Normal {
//!             self.deposited += view.energy_deposit();
//!         }
//!     }
//! }
//!
//! // An engine stand-in for the two trait seams.
//! struct NoEngine;
//! impl EngineControl for NoEngine {
//!     fn abort_event(&self) {}
//!     fn abort_run(&self) {}
//! }
//! impl Navigator for NoEngine {
//!     fn local_exit_normal(&self) -> Option<Vec3> {
//!         None
//!     }
//!     fn local_to_global_transform(&self) -> AffineTransform {
//!         AffineTransform::identity()
//!     }
//! }
//!
//! // A one-volume world, registered by the detector construction.
//! let mut registry = VolumeRegistry::new();
//! registry.add_material(Material::element("Pb", 207.2, 82.0, 7.084e19, 5.612));
//! let world = registry.add_logical("WRLD", "Pb").unwrap();
//! registry.set_sensitive(world, SensitiveId(1));
//! let world_pv = registry.place("WRLD", world, 0, Placement::Simple).unwrap();
//!
//! // Engine-native objects for one track and one step (mm / MeV).
//! let touchable = Touchable::new(world_pv, [], AffineTransform::identity());
//! let electron = ParticleDef::new(PdgCode(11), "e-", 0.511, -1.0);
//! let track = Track::new(TrackId(1), electron, touchable);
//! let step = Step {
//!     pre: StepPoint::undefined(),
//!     post: StepPoint::undefined(),
//!     step_length: 12.0,
//!     total_energy_deposit: 1.5,
//!     non_ionizing_energy_deposit: 0.0,
//!     along_step_processes: Vec::new(),
//!     op_boundary_status: None,
//!     secondaries: SecondaryLog::new(),
//! };
//!
//! // Wire up the per-worker manager and drive the callbacks.
//! let engine = NoEngine;
//! let services = EngineServices {
//!     geometry: &registry,
//!     control: &engine,
//!     navigator: &engine,
//! };
//! let mut manager = StepManager::new(GeometryOrigin::Geant4, RunStatus::new()).unwrap();
//! let driver = SteppingDriver::new();
//! let mut scorer = Scorer { deposited: 0.0 };
//!
//! driver.track_started(&mut manager, services, &track, &mut scorer);
//! driver.step_finished(&mut manager, services, &track, &step, &mut scorer);
//!
//! // 1.5 MeV deposited, reported as GeV.
//! assert!((scorer.deposited - 0.0015).abs() < 1e-12);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stepmc-core` | IDs, unit constants, vectors, process codes, run status |
//! | [`geometry`] | `stepmc-geometry` | Transforms, volume registry, touchables, navigator seam |
//! | [`track`] | `stepmc-track` | Engine-native track, step, and spot objects |
//! | [`manager`] | `stepmc-manager` | The step manager, regimes, views, and the stepping driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core IDs, unit constants, vector types, the process-code taxonomy,
/// and the shared run status (`stepmc-core`).
pub use stepmc_core as types;

/// Frame transforms, materials, the volume registry, touchables, and
/// the navigator trait seam (`stepmc-geometry`).
pub use stepmc_geometry as geometry;

/// Engine-native per-track and per-step state (`stepmc-track`).
pub use stepmc_track as track;

/// The step manager: regimes, per-step views, the control surface, and
/// the stepping driver (`stepmc-manager`).
pub use stepmc_manager as manager;

/// Common imports for typical stepmc usage.
///
/// ```rust
/// use stepmc::prelude::*;
/// ```
pub mod prelude {
    // IDs, vectors, and shared services
    pub use stepmc_core::{
        EngineControl, FourVector, LogicalId, McProcess, MediumId, OpBoundaryStatus, PdgCode,
        PhysicalId, Process, ProcessKind, RunStatus, SensitiveId, TrackId, Vec3,
    };

    // Geometry
    pub use stepmc_geometry::{
        AffineTransform, GeometryOrigin, Material, Navigator, Placement, StepLimits, Touchable,
        TransformMode, VolumeRegistry,
    };

    // Engine-native objects
    pub use stepmc_track::{
        GflashSpot, ParticleDef, PointStatus, SecondaryLog, SecondaryTrack, Step, StepPoint,
        Track, TrackStatus,
    };

    // The step manager surface
    pub use stepmc_manager::{
        EngineServices, MaterialView, ResumedTrackStatus, Secondary, SetupError, StepManager,
        StepObserver, SteppingDriver, StepRegime, StepStatus, StepView,
    };
}
