//! The navigator trait seam.

use stepmc_core::Vec3;

use crate::transform::AffineTransform;

/// Read access to the engine's tracking navigator.
///
/// Implemented by the engine's navigation service; mocked in tests.
/// Used by the kinematics surface to resolve the exit-surface normal at
/// the last geometric boundary crossing.
pub trait Navigator {
    /// The normal of the surface last exited, in the local frame of the
    /// volume being left.
    ///
    /// `None` when no valid normal is defined — e.g. the track is not
    /// at a boundary. Callers must treat `None` as "no normal
    /// available", never substitute a default.
    fn local_exit_normal(&self) -> Option<Vec3>;

    /// The transform from the navigator's current local frame to the
    /// global frame.
    fn local_to_global_transform(&self) -> AffineTransform;
}
