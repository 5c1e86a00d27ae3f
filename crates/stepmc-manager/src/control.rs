//! The track control surface: the handful of operations user code may
//! apply back to the engine during a step callback.

use log::warn;

use stepmc_core::units;
use stepmc_track::TrackStatus;

use crate::view::StepView;

impl<'a> StepView<'a> {
    /// Kill the current track after this step. Its secondaries keep
    /// being tracked.
    pub fn stop_track(&self) {
        self.track().set_status(TrackStatus::StopAndKill);
    }

    /// Kill the current track and remember it as interrupted, so event
    /// bookkeeping can re-stack it for a later transport pass.
    pub fn interrupt_track(&mut self) {
        let track = self.track();
        track.set_status(TrackStatus::StopAndKill);
        self.manager.mark_interrupted(track.id);
    }

    /// Abort the current event: the track and all its secondaries are
    /// killed, and the engine is told to drop the event at its next
    /// scheduling point.
    pub fn stop_event(&self) {
        self.track()
            .set_status(TrackStatus::KillTrackAndSecondaries);
        self.services.control.abort_event();
    }

    /// Abort the run.
    ///
    /// The shared run-status flag is raised *first* so every worker
    /// and every sensitive detector observes the stop before the
    /// engine starts unwinding, then the current event is aborted and
    /// the run abort is issued.
    pub fn stop_run(&self) {
        self.manager.run_status().request_stop();
        self.stop_event();
        self.services.control.abort_run();
    }

    /// Override the current volume's maximum step on the fly, in cm.
    ///
    /// The previous value is remembered; the stepping driver restores
    /// it when the track leaves the volume, or user code may call
    /// [`restore_max_step`](StepView::restore_max_step) directly.
    /// Warns and does nothing when the current volume's medium defines
    /// no limits to override.
    pub fn set_max_step(&mut self, step: f64) {
        let Some((logical_id, logical)) = self.current_logical() else {
            return;
        };
        let Some(limits) = &logical.limits else {
            warn!(
                "set_max_step: volume {} defines no step limits to override",
                logical.name
            );
            return;
        };
        let previous = limits.replace_max_step(step * units::LENGTH);
        self.manager.record_modified_limit(logical_id, previous);
    }

    /// Undo the pending on-the-fly step-limit override.
    pub fn restore_max_step(&mut self) {
        self.manager.restore_max_step(self.services.geometry);
    }
}

#[cfg(test)]
mod tests {
    use stepmc_core::RunStatus;
    use stepmc_geometry::GeometryOrigin;
    use stepmc_test_utils::{
        demo_geometry, electron, AbortCall, MockEngineControl, MockNavigator, TrackBuilder,
    };
    use stepmc_track::TrackStatus;

    use crate::manager::StepManager;
    use crate::regime::StepRegime;
    use crate::view::EngineServices;

    macro_rules! services {
        ($demo:expr, $control:expr, $navigator:expr) => {
            EngineServices {
                geometry: &$demo.registry,
                control: &$control,
                navigator: &$navigator,
            }
        };
    }

    #[test]
    fn stop_track_requests_a_kill() {
        let demo = demo_geometry();
        let control = MockEngineControl::new();
        let navigator = MockNavigator::new();
        let track = TrackBuilder::new(1, electron(), demo.layer_touchable()).build();
        let mut mgr = StepManager::new(GeometryOrigin::Geant4, RunStatus::new()).unwrap();
        let view = mgr.view(
            StepRegime::Vertex { track: &track },
            services!(demo, control, navigator),
        );

        view.stop_track();
        assert_eq!(track.status(), TrackStatus::StopAndKill);
        assert!(control.calls().is_empty());
    }

    #[test]
    fn interrupt_track_is_remembered() {
        let demo = demo_geometry();
        let control = MockEngineControl::new();
        let navigator = MockNavigator::new();
        let track = TrackBuilder::new(9, electron(), demo.layer_touchable()).build();
        let mut mgr = StepManager::new(GeometryOrigin::Geant4, RunStatus::new()).unwrap();
        let mut view = mgr.view(
            StepRegime::Vertex { track: &track },
            services!(demo, control, navigator),
        );

        view.interrupt_track();
        drop(view);
        assert_eq!(track.status(), TrackStatus::StopAndKill);
        assert!(mgr.is_interrupted(track.id));
    }

    #[test]
    fn stop_event_kills_secondaries_and_aborts() {
        let demo = demo_geometry();
        let control = MockEngineControl::new();
        let navigator = MockNavigator::new();
        let track = TrackBuilder::new(1, electron(), demo.layer_touchable()).build();
        let mut mgr = StepManager::new(GeometryOrigin::Geant4, RunStatus::new()).unwrap();
        let view = mgr.view(
            StepRegime::Vertex { track: &track },
            services!(demo, control, navigator),
        );

        view.stop_event();
        assert_eq!(track.status(), TrackStatus::KillTrackAndSecondaries);
        assert_eq!(control.calls(), vec![AbortCall::Event]);
    }

    #[test]
    fn stop_run_raises_the_flag_before_aborting() {
        let demo = demo_geometry();
        let run_status = RunStatus::new();
        let control = MockEngineControl::watching(run_status.clone());
        let navigator = MockNavigator::new();
        let track = TrackBuilder::new(1, electron(), demo.layer_touchable()).build();
        let mut mgr = StepManager::new(GeometryOrigin::Geant4, run_status.clone()).unwrap();
        let view = mgr.view(
            StepRegime::Vertex { track: &track },
            services!(demo, control, navigator),
        );

        view.stop_run();
        assert!(run_status.stop_requested());
        // The event abort must already have seen the flag raised.
        assert_eq!(control.flag_at_event_abort(), Some(true));
        assert_eq!(control.calls(), vec![AbortCall::Event, AbortCall::Run]);
    }

    #[test]
    fn max_step_override_round_trips() {
        let demo = demo_geometry();
        let control = MockEngineControl::new();
        let navigator = MockNavigator::new();
        let track = TrackBuilder::new(1, electron(), demo.layer_touchable()).build();
        let mut mgr = StepManager::new(GeometryOrigin::Geant4, RunStatus::new()).unwrap();
        let mut view = mgr.view(
            StepRegime::Vertex { track: &track },
            services!(demo, control, navigator),
        );

        assert!((view.max_step() - 1.0).abs() < 1e-12);
        view.set_max_step(0.2);
        assert!((view.max_step() - 0.2).abs() < 1e-12);
        drop(view);
        assert_eq!(mgr.modified_limit_volume(), Some(demo.layer_lv));

        let mut view = mgr.view(
            StepRegime::Vertex { track: &track },
            services!(demo, control, navigator),
        );
        view.restore_max_step();
        assert!((view.max_step() - 1.0).abs() < 1e-12);
        drop(view);
        assert!(mgr.modified_limit_volume().is_none());
    }

    #[test]
    fn set_max_step_without_limits_is_a_no_op() {
        let demo = demo_geometry();
        let control = MockEngineControl::new();
        let navigator = MockNavigator::new();
        // The calorimeter volume carries no limits.
        let track = TrackBuilder::new(1, electron(), demo.calor_touchable()).build();
        let mut mgr = StepManager::new(GeometryOrigin::Geant4, RunStatus::new()).unwrap();
        let mut view = mgr.view(
            StepRegime::Vertex { track: &track },
            services!(demo, control, navigator),
        );

        view.set_max_step(0.5);
        drop(view);
        assert!(mgr.modified_limit_volume().is_none());
    }
}
