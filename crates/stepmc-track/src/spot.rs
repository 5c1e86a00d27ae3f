//! Fast-simulation energy spots.

use stepmc_core::Vec3;
use stepmc_geometry::Touchable;

/// A coarse energy deposit produced by parameterised (Gflash-style)
/// shower simulation in place of full tracking.
///
/// Carries only an energy, a position, and the touchable it lands in;
/// there are no step points, no secondaries, and no kinematics beyond
/// the position. Mutually exclusive with a [`Step`](crate::Step) in
/// the active regime.
#[derive(Clone, Debug)]
pub struct GflashSpot {
    /// Deposited energy in native energy units.
    pub energy: f64,
    /// Deposit position in native length units.
    pub position: Vec3,
    /// Where in the hierarchy the deposit lands.
    pub touchable: Touchable,
}

impl GflashSpot {
    /// Construct a spot.
    pub fn new(energy: f64, position: Vec3, touchable: Touchable) -> Self {
        Self {
            energy,
            position,
            touchable,
        }
    }
}
