//! The stepping driver: sequences regime dispatches around the
//! engine's tracking callbacks.
//!
//! The engine calls in three times — at track start, after every step,
//! and for each fast-simulation spot. The driver classifies each call
//! into the right [`StepRegime`], opens a [`StepView`], and hands it
//! to the observer (typically the sensitive-detector dispatch). It
//! also owns the two pieces of step hygiene the engine does not do for
//! us: killing looping tracks and undoing on-the-fly step-limit
//! overrides at volume changes.

use log::warn;

use stepmc_track::{GflashSpot, PointStatus, Step, Track, TrackStatus};

use crate::manager::StepManager;
use crate::regime::StepRegime;
use crate::view::{EngineServices, StepView};

/// Receives one [`StepView`] per regime dispatch.
///
/// Implemented by the sensitive-detector dispatch in production and by
/// recording observers in tests.
pub trait StepObserver {
    /// Called once per dispatched regime; the view is valid only for
    /// the duration of the call.
    fn on_step(&mut self, view: &mut StepView<'_>);
}

/// Sequences regime dispatches for one worker.
#[derive(Clone, Debug)]
pub struct SteppingDriver {
    max_step_count: u32,
}

impl SteppingDriver {
    /// Default cap on steps per track before it is treated as looping.
    pub const DEFAULT_MAX_STEP_COUNT: u32 = 30_000;

    /// Create a driver with the default looping cap.
    pub fn new() -> Self {
        Self {
            max_step_count: Self::DEFAULT_MAX_STEP_COUNT,
        }
    }

    /// Cap on steps per track before the driver kills it as looping.
    pub fn max_step_count(&self) -> u32 {
        self.max_step_count
    }

    /// Override the looping cap.
    pub fn set_max_step_count(&mut self, limit: u32) {
        self.max_step_count = limit;
    }

    /// Dispatch the vertex regime for a freshly started track.
    pub fn track_started(
        &self,
        manager: &mut StepManager,
        services: EngineServices<'_>,
        track: &Track,
        observer: &mut dyn StepObserver,
    ) {
        let mut view = manager.view(StepRegime::Vertex { track }, services);
        observer.on_step(&mut view);
    }

    /// Dispatch the regimes for one completed step.
    ///
    /// The normal regime always runs. When the step ended on a
    /// geometric boundary with a next volume, any pending step-limit
    /// override set in a different volume is restored, and the same
    /// step is re-dispatched in the boundary regime so the entered
    /// volume's detector sees it — unless the track was killed.
    pub fn step_finished(
        &self,
        manager: &mut StepManager,
        services: EngineServices<'_>,
        track: &Track,
        step: &Step,
        observer: &mut dyn StepObserver,
    ) {
        if track.step_number > self.max_step_count && track.status().is_alive() {
            warn!(
                "track {} exceeded {} steps; killing it as looping",
                track.id, self.max_step_count
            );
            track.set_status(TrackStatus::StopAndKill);
        }

        let mut view = manager.view(StepRegime::Normal { track, step }, services);
        observer.on_step(&mut view);
        drop(view);

        if step.post.status != PointStatus::GeomBoundary {
            return;
        }
        let Some(next) = &track.next_touchable else {
            return;
        };

        if let Some(modified) = manager.modified_limit_volume() {
            let next_logical = services
                .geometry
                .physical(next.volume())
                .map(|volume| volume.logical);
            if next_logical != Some(modified) {
                manager.restore_max_step(services.geometry);
            }
        }

        if track.status().is_alive() {
            let mut view = manager.view(StepRegime::Boundary { track, step }, services);
            observer.on_step(&mut view);
        }
    }

    /// Dispatch the spot regime for one fast-simulation energy spot.
    pub fn spot_created(
        &self,
        manager: &mut StepManager,
        services: EngineServices<'_>,
        track: &Track,
        spot: &GflashSpot,
        observer: &mut dyn StepObserver,
    ) {
        let mut view = manager.view(StepRegime::GflashSpot { track, spot }, services);
        observer.on_step(&mut view);
    }
}

impl Default for SteppingDriver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stepmc_core::{RunStatus, SensitiveId, Vec3};
    use stepmc_geometry::GeometryOrigin;
    use stepmc_test_utils::{
        demo_geometry, electron, MockEngineControl, MockNavigator, StepBuilder, TrackBuilder,
    };

    use crate::regime::StepStatus;

    macro_rules! services {
        ($demo:expr, $control:expr, $navigator:expr) => {
            EngineServices {
                geometry: &$demo.registry,
                control: &$control,
                navigator: &$navigator,
            }
        };
    }

    #[derive(Default)]
    struct Recorder {
        dispatches: Vec<(StepStatus, SensitiveId)>,
    }

    impl StepObserver for Recorder {
        fn on_step(&mut self, view: &mut StepView<'_>) {
            self.dispatches.push((view.status(), view.current_volume_id().0));
        }
    }

    #[test]
    fn interior_step_dispatches_normal_only() {
        let demo = demo_geometry();
        let control = MockEngineControl::new();
        let navigator = MockNavigator::new();
        let track = TrackBuilder::new(1, electron(), demo.layer_touchable())
            .step_number(5)
            .build();
        let step = StepBuilder::new()
            .post_status(PointStatus::PhysicsProcess)
            .build();
        let mut mgr = StepManager::new(GeometryOrigin::Geant4, RunStatus::new()).unwrap();
        let mut recorder = Recorder::default();

        SteppingDriver::new().step_finished(
            &mut mgr,
            services!(demo, control, navigator),
            &track,
            &step,
            &mut recorder,
        );
        assert_eq!(
            recorder.dispatches,
            vec![(StepStatus::Normal, SensitiveId(2))]
        );
    }

    #[test]
    fn boundary_step_is_redispatched_in_the_entered_volume() {
        let demo = demo_geometry();
        let control = MockEngineControl::new();
        let navigator = MockNavigator::new();
        let mut track = TrackBuilder::new(1, electron(), demo.layer_touchable())
            .step_number(5)
            .build();
        track.next_touchable = Some(demo.calor_touchable());
        let step = StepBuilder::new()
            .post_status(PointStatus::GeomBoundary)
            .build();
        let mut mgr = StepManager::new(GeometryOrigin::Geant4, RunStatus::new()).unwrap();
        let mut recorder = Recorder::default();

        SteppingDriver::new().step_finished(
            &mut mgr,
            services!(demo, control, navigator),
            &track,
            &step,
            &mut recorder,
        );
        assert_eq!(
            recorder.dispatches,
            vec![
                (StepStatus::Normal, SensitiveId(2)),
                (StepStatus::Boundary, SensitiveId(1)),
            ]
        );
    }

    #[test]
    fn killed_track_is_not_redispatched() {
        let demo = demo_geometry();
        let control = MockEngineControl::new();
        let navigator = MockNavigator::new();
        let mut track = TrackBuilder::new(1, electron(), demo.layer_touchable())
            .step_number(5)
            .build();
        track.next_touchable = Some(demo.calor_touchable());
        track.set_status(TrackStatus::StopAndKill);
        let step = StepBuilder::new()
            .post_status(PointStatus::GeomBoundary)
            .build();
        let mut mgr = StepManager::new(GeometryOrigin::Geant4, RunStatus::new()).unwrap();
        let mut recorder = Recorder::default();

        SteppingDriver::new().step_finished(
            &mut mgr,
            services!(demo, control, navigator),
            &track,
            &step,
            &mut recorder,
        );
        assert_eq!(
            recorder.dispatches,
            vec![(StepStatus::Normal, SensitiveId(2))]
        );
    }

    #[test]
    fn looping_track_is_killed_at_the_cap() {
        let demo = demo_geometry();
        let control = MockEngineControl::new();
        let navigator = MockNavigator::new();
        let track = TrackBuilder::new(1, electron(), demo.layer_touchable())
            .step_number(101)
            .build();
        let step = StepBuilder::new()
            .post_status(PointStatus::PhysicsProcess)
            .build();
        let mut mgr = StepManager::new(GeometryOrigin::Geant4, RunStatus::new()).unwrap();
        let mut recorder = Recorder::default();
        let mut driver = SteppingDriver::new();
        driver.set_max_step_count(100);

        driver.step_finished(
            &mut mgr,
            services!(demo, control, navigator),
            &track,
            &step,
            &mut recorder,
        );
        assert_eq!(track.status(), TrackStatus::StopAndKill);
        // The detector still sees the final step.
        assert_eq!(recorder.dispatches.len(), 1);
    }

    #[test]
    fn limit_override_is_restored_when_leaving_the_volume() {
        let demo = demo_geometry();
        let control = MockEngineControl::new();
        let navigator = MockNavigator::new();
        let mut track = TrackBuilder::new(1, electron(), demo.layer_touchable())
            .step_number(2)
            .build();
        track.next_touchable = Some(demo.calor_touchable());
        let step = StepBuilder::new()
            .post_status(PointStatus::GeomBoundary)
            .build();
        let mut mgr = StepManager::new(GeometryOrigin::Geant4, RunStatus::new()).unwrap();
        let services = services!(demo, control, navigator);

        let mut view = mgr.view(StepRegime::Vertex { track: &track }, services);
        view.set_max_step(0.2);
        drop(view);

        let mut recorder = Recorder::default();
        SteppingDriver::new().step_finished(&mut mgr, services, &track, &step, &mut recorder);

        assert!(mgr.modified_limit_volume().is_none());
        let layer = demo.registry.logical(demo.layer_lv).unwrap();
        assert!((layer.limits.as_ref().unwrap().max_step() - 10.0).abs() < 1e-12);
    }

    #[test]
    fn vertex_and_spot_regimes_dispatch_once() {
        let demo = demo_geometry();
        let control = MockEngineControl::new();
        let navigator = MockNavigator::new();
        let track = TrackBuilder::new(1, electron(), demo.calor_touchable()).build();
        let spot = stepmc_track::GflashSpot::new(
            100.0,
            Vec3::new(0.0, 0.0, 5.0),
            demo.layer_touchable(),
        );
        let mut mgr = StepManager::new(GeometryOrigin::Geant4, RunStatus::new()).unwrap();
        let services = services!(demo, control, navigator);
        let driver = SteppingDriver::new();
        let mut recorder = Recorder::default();

        driver.track_started(&mut mgr, services, &track, &mut recorder);
        driver.spot_created(&mut mgr, services, &track, &spot, &mut recorder);
        assert_eq!(
            recorder.dispatches,
            vec![
                (StepStatus::Vertex, SensitiveId(1)),
                (StepStatus::GflashSpot, SensitiveId(2)),
            ]
        );
    }
}
