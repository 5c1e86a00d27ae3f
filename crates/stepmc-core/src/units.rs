//! Conversion constants between engine-native and VMC external units.
//!
//! The transport engine works internally in mm / ns / MeV / e+; the VMC
//! external system is cm / s / GeV / e+. Every quantity crossing the
//! component boundary is divided by exactly one of the constants below
//! (native units per external unit). Keeping the six factors in one
//! place is a correctness requirement, not a convenience: a hand-inlined
//! conversion that drifts from these values is a silent unit bug.
//!
//! Internal arithmetic stays in native units until the final division.

/// Native length units per external unit: mm per cm.
pub const LENGTH: f64 = 10.0;

/// Native time units per external unit: ns per s.
pub const TIME: f64 = 1.0e9;

/// Native energy units per external unit: MeV per GeV.
pub const ENERGY: f64 = 1.0e3;

/// Native mass units per external unit: MeV per GeV.
///
/// Masses are expressed as energies in both systems, so this equals
/// [`ENERGY`]; it exists separately so call sites state which quantity
/// they convert.
pub const MASS: f64 = ENERGY;

/// Native charge units per external unit: both systems count positron
/// charges.
pub const CHARGE: f64 = 1.0;

/// Native mass-density units per external unit: native density units
/// per g/cm³.
///
/// In the native MeV/mm/ns system the gram is 6.241509074e21 MeV·ns²/mm²
/// and the cm³ is 10³ mm³.
pub const MASS_DENSITY: f64 = 6.241_509_074e18;
