//! Step-manager setup errors.

use std::error::Error;
use std::fmt;

/// Errors raised while wiring the step manager into a worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// A step manager already exists on this worker thread.
    ///
    /// The manager mirrors engine state that exists once per worker;
    /// a second instance would silently shadow the first.
    AlreadyActive,
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::AlreadyActive => {
                write!(f, "a step manager is already active on this worker thread")
            }
        }
    }
}

impl Error for SetupError {}
