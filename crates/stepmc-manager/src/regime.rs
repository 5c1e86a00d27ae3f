//! Step regimes: which engine objects are live for the current
//! callback.
//!
//! The original engine API exposes a step status plus nullable step /
//! spot pointers and asks every query to re-check which ones are set.
//! Here the regime is a sum type: each variant carries exactly the
//! borrows that are valid in it, so "step queried at a vertex" is not
//! representable as a dangling access, only as a defined sentinel
//! answer.

use log::warn;

use stepmc_geometry::Touchable;
use stepmc_track::{GflashSpot, Step, Track};

/// The discriminant of a [`StepRegime`], for matching without borrows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    /// Track just started; no step exists yet.
    Vertex,
    /// An ordinary completed step.
    Normal,
    /// Re-dispatch of a boundary-crossing step to the entered volume.
    Boundary,
    /// A fast-simulation energy spot; no step exists.
    GflashSpot,
}

/// The engine objects live for one step callback.
///
/// All borrows share the callback lifetime `'a`; a regime must never
/// outlive the engine call that produced it.
#[derive(Clone, Copy, Debug)]
pub enum StepRegime<'a> {
    /// Track just started at its vertex.
    Vertex {
        /// The newly started track.
        track: &'a Track,
    },
    /// An ordinary step, dispatched in the volume the step began in.
    Normal {
        /// The live track after the step.
        track: &'a Track,
        /// The completed step.
        step: &'a Step,
    },
    /// The same boundary-crossing step, re-dispatched so the entered
    /// volume's detector also sees it.
    Boundary {
        /// The live track after the step.
        track: &'a Track,
        /// The completed boundary-limited step.
        step: &'a Step,
    },
    /// A parameterised-shower energy deposit.
    GflashSpot {
        /// The track whose shower is being parameterised.
        track: &'a Track,
        /// The energy spot.
        spot: &'a GflashSpot,
    },
}

impl<'a> StepRegime<'a> {
    /// The regime discriminant.
    pub fn status(&self) -> StepStatus {
        match self {
            StepRegime::Vertex { .. } => StepStatus::Vertex,
            StepRegime::Normal { .. } => StepStatus::Normal,
            StepRegime::Boundary { .. } => StepStatus::Boundary,
            StepRegime::GflashSpot { .. } => StepStatus::GflashSpot,
        }
    }

    /// The live track; present in every regime.
    pub fn track(&self) -> &'a Track {
        match *self {
            StepRegime::Vertex { track }
            | StepRegime::Normal { track, .. }
            | StepRegime::Boundary { track, .. }
            | StepRegime::GflashSpot { track, .. } => track,
        }
    }

    /// The completed step, in the regimes that have one.
    pub fn step(&self) -> Option<&'a Step> {
        match *self {
            StepRegime::Normal { step, .. } | StepRegime::Boundary { step, .. } => Some(step),
            StepRegime::Vertex { .. } | StepRegime::GflashSpot { .. } => None,
        }
    }

    /// The fast-simulation spot, in the spot regime.
    pub fn spot(&self) -> Option<&'a GflashSpot> {
        match *self {
            StepRegime::GflashSpot { spot, .. } => Some(spot),
            _ => None,
        }
    }

    /// The touchable volume queries resolve against.
    ///
    /// Spot deposits carry their own touchable. In the boundary regime
    /// the *entered* volume answers, so the next touchable is used; a
    /// boundary regime without one is an engine inconsistency and falls
    /// back to the current touchable with a warning.
    pub fn touchable(&self) -> &'a Touchable {
        match *self {
            StepRegime::GflashSpot { spot, .. } => &spot.touchable,
            StepRegime::Boundary { track, .. } => match &track.next_touchable {
                Some(next) => next,
                None => {
                    warn!(
                        "boundary regime for track {} has no next touchable; \
                         answering for the exited volume",
                        track.id
                    );
                    &track.touchable
                }
            },
            StepRegime::Vertex { track } | StepRegime::Normal { track, .. } => &track.touchable,
        }
    }
}
