//! Error types for geometry registry construction.

use std::fmt;

/// Errors raised while the detector construction builds the registry.
///
/// These are structural build/configuration failures and are always
/// fatal to registry construction; there is no warn-and-continue path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeometryError {
    /// A volume referenced a material name that was never registered.
    UnknownMaterial {
        /// The missing material name.
        material: String,
        /// The volume that referenced it.
        volume: String,
    },
    /// Two logical volumes were registered under the same name.
    DuplicateVolume {
        /// The colliding name.
        name: String,
    },
    /// A placement referenced a logical volume id outside the registry.
    UnknownLogicalVolume {
        /// The referencing placement name.
        placement: String,
    },
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownMaterial { material, volume } => {
                write!(f, "volume '{volume}' references unknown material '{material}'")
            }
            Self::DuplicateVolume { name } => {
                write!(f, "logical volume '{name}' registered twice")
            }
            Self::UnknownLogicalVolume { placement } => {
                write!(f, "placement '{placement}' references unknown logical volume")
            }
        }
    }
}

impl std::error::Error for GeometryError {}
