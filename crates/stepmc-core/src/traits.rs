//! Trait seams implemented by the transport engine.

/// Event- and run-level abort commands against the live engine.
///
/// Implemented by the engine's command dispatch; the track control
/// surface calls it when user code requests `stop_event` / `stop_run`.
/// Aborts take effect at the engine's next scheduling point, never
/// synchronously.
///
/// Lives in the leaf crate so mock implementations can be shared
/// without dependency cycles.
pub trait EngineControl {
    /// Abort processing of the current event.
    fn abort_event(&self);

    /// Abort the current run.
    fn abort_run(&self);
}
