//! Core types for the stepmc Virtual-Monte-Carlo layer.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary shared by the whole workspace: typed IDs,
//! the native↔external unit conversion constants, vector value types,
//! the process-code taxonomy (engine-native kinds and engine-independent
//! VMC codes), the shared run-status service, and the engine-control
//! trait seam.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod id;
pub mod process;
pub mod run;
pub mod traits;
pub mod units;
pub mod vector;

pub use id::{LogicalId, MaterialId, MediumId, PdgCode, PhysicalId, SensitiveId, TrackId};
pub use process::{McProcess, OpBoundaryStatus, Process, ProcessKind, ProcessList};
pub use run::RunStatus;
pub use traits::EngineControl;
pub use vector::{FourVector, Vec3};
