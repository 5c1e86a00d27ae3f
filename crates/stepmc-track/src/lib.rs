//! Engine-native per-track and per-step state.
//!
//! These types model the transport engine's live objects exactly as
//! the step manager sees them: owned by the engine, expressed in
//! native units, and borrowed by the adapter for the duration of one
//! step callback. Nothing here performs unit conversion — that is the
//! step manager's job.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod spot;
pub mod step;
pub mod track;

pub use spot::GflashSpot;
pub use step::{PointStatus, SecondaryLog, SecondaryTrack, Step, StepPoint};
pub use track::{ParticleDef, Track, TrackStatus};
