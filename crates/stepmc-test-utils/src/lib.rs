//! Shared test fixtures for the stepmc workspace.
//!
//! Provides a small demo calorimeter geometry, builders for
//! engine-native tracks and steps, and mock implementations of the
//! engine trait seams. Everything here is test-only support; none of
//! it ships in production paths.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod builders;
pub mod fixtures;
pub mod mocks;

pub use builders::{secondary, secondary_from, StepBuilder, TrackBuilder};
pub use fixtures::{demo_geometry, electron, optical_photon, DemoGeometry};
pub use mocks::{AbortCall, MockEngineControl, MockNavigator};
