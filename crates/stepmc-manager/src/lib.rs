//! The step manager: the per-step adapter between a Geant4-family
//! transport engine and the engine-independent VMC query API.
//!
//! Every step the engine takes, the stepping driver classifies the
//! step into a [`StepRegime`] and hands user code a [`StepView`]: a
//! short-lived window combining the engine's live objects (track,
//! step, fast-simulation spot) with the geometry registry and the
//! persistent [`StepManager`] bookkeeping. All queries answer in VMC
//! external units (cm / s / GeV / positron charges); everything the
//! engine owns stays native until the final conversion.
//!
//! Views are cheap and borrow everything; nothing here retains engine
//! state across steps except the explicit bookkeeping on
//! [`StepManager`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod control;
pub mod driver;
pub mod error;
pub mod kinematics;
pub mod manager;
pub mod regime;
pub mod secondaries;
pub mod view;
pub mod volume;

pub use driver::{SteppingDriver, StepObserver};
pub use error::SetupError;
pub use manager::{ResumedTrackStatus, StepManager};
pub use regime::{StepRegime, StepStatus};
pub use secondaries::Secondary;
pub use view::{EngineServices, StepView};
pub use volume::MaterialView;
