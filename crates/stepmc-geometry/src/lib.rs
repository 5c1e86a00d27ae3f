//! Geometry services for the stepmc Virtual-Monte-Carlo layer.
//!
//! Holds everything the step manager needs to answer "where is the
//! track" questions: affine frame transforms, materials, logical and
//! physical volumes, the volume registry built by the detector
//! construction collaborator, touchables (the per-track position in
//! the volume hierarchy), and the navigator trait seam for boundary
//! normals.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod material;
pub mod navigator;
pub mod registry;
pub mod touchable;
pub mod transform;
pub mod volume;

pub use error::GeometryError;
pub use material::Material;
pub use navigator::Navigator;
pub use registry::{GeometryOrigin, VolumeRegistry};
pub use touchable::Touchable;
pub use transform::{AffineTransform, TransformMode};
pub use volume::{LogicalVolume, PhysicalVolume, Placement, StepLimits};
