//! Material records as the detector construction registers them.

/// A material, stored in engine-native units.
///
/// `eff_a`/`eff_z` are the effective atomic mass and number — for a
/// mixture, the engine's weighted averages over the elements. Density
/// and radiation length stay native until the query surface converts
/// them.
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    /// Material name.
    pub name: String,
    /// Effective atomic mass [au].
    pub eff_a: f64,
    /// Effective atomic number.
    pub eff_z: f64,
    /// Density in native units.
    pub density: f64,
    /// Radiation length in native length units.
    pub radiation_length: f64,
    /// Number of elements in the mixture.
    pub n_elements: u32,
}

impl Material {
    /// Construct a single-element material.
    pub fn element(
        name: impl Into<String>,
        eff_a: f64,
        eff_z: f64,
        density: f64,
        radiation_length: f64,
    ) -> Self {
        Self {
            name: name.into(),
            eff_a,
            eff_z,
            density,
            radiation_length,
            n_elements: 1,
        }
    }
}
