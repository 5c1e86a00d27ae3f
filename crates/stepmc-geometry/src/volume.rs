//! Logical and physical volumes.

use std::cell::Cell;

use stepmc_core::{LogicalId, MaterialId, MediumId, SensitiveId};

/// Per-volume step-size limit, owned by the tracking medium.
///
/// The current value is interior-mutable so the track control surface
/// can override it on the fly through a shared registry borrow and
/// restore it later, the way the engine's user-limits objects work.
/// Worker-local; never shared across threads.
#[derive(Clone, Debug)]
pub struct StepLimits {
    max_step: Cell<f64>,
}

impl StepLimits {
    /// Create limits with the given maximum step in native length units.
    pub fn new(max_step: f64) -> Self {
        Self {
            max_step: Cell::new(max_step),
        }
    }

    /// The current maximum allowed step, native units.
    pub fn max_step(&self) -> f64 {
        self.max_step.get()
    }

    /// Replace the current maximum step, returning the previous value.
    pub fn replace_max_step(&self, value: f64) -> f64 {
        self.max_step.replace(value)
    }
}

/// How a physical volume was placed in its mother.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Placement {
    /// A plain single placement.
    Simple,
    /// One of N identical replicas along an axis.
    Replicated,
    /// A parameterised (per-copy computed) placement.
    Parameterised,
}

impl Placement {
    /// True for replicated and parameterised placements, which take the
    /// extra division copy-number offset.
    pub fn is_division(self) -> bool {
        matches!(self, Placement::Replicated | Placement::Parameterised)
    }
}

/// A logical volume: shape + material + the per-volume registrations
/// the step manager resolves at query time.
#[derive(Clone, Debug)]
pub struct LogicalVolume {
    /// Volume name as the authoring tool spelled it.
    pub name: String,
    /// The volume's material.
    pub material: MaterialId,
    /// Sensitive-detector identifier, if user code registered one.
    pub sensitive: Option<SensitiveId>,
    /// Tracking-medium identifier, if assigned.
    pub medium: Option<MediumId>,
    /// Step limits, if the tracking medium defines any.
    pub limits: Option<StepLimits>,
}

/// One physical placement of a logical volume.
#[derive(Clone, Debug)]
pub struct PhysicalVolume {
    /// Placement name.
    pub name: String,
    /// The logical volume placed here.
    pub logical: LogicalId,
    /// Raw engine copy number of this placement.
    pub copy_no: i32,
    /// Placement kind; divisions take an extra copy-number offset.
    pub placement: Placement,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_max_step_returns_previous() {
        let limits = StepLimits::new(20.0);
        let previous = limits.replace_max_step(5.0);
        assert_eq!(previous, 20.0);
        assert_eq!(limits.max_step(), 5.0);
    }

    #[test]
    fn divisions_are_replicated_or_parameterised() {
        assert!(!Placement::Simple.is_division());
        assert!(Placement::Replicated.is_division());
        assert!(Placement::Parameterised.is_division());
    }
}
