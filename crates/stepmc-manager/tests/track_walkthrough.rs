//! Integration test: one electron's life through the demo calorimeter.
//!
//! Drives the full dispatch sequence — vertex, interior step, boundary
//! crossing with re-dispatch, world exit — through the stepping driver
//! and checks that a scoring observer sees the regimes in order, with
//! deposits credited to the right sensitive volumes and all kinematics
//! in external units.

use std::collections::BTreeMap;

use stepmc_core::{RunStatus, SensitiveId, Vec3};
use stepmc_geometry::GeometryOrigin;
use stepmc_manager::{EngineServices, StepManager, StepObserver, SteppingDriver, StepStatus, StepView};
use stepmc_test_utils::{demo_geometry, electron, MockEngineControl, MockNavigator, StepBuilder, TrackBuilder};
use stepmc_track::PointStatus;

// ── Scoring observer ─────────────────────────────────────────────────

/// Accumulates energy deposits per sensitive detector and records the
/// dispatch sequence.
#[derive(Default)]
struct Scorer {
    dispatches: Vec<(StepStatus, SensitiveId)>,
    deposits: BTreeMap<i32, f64>,
}

impl StepObserver for Scorer {
    fn on_step(&mut self, view: &mut StepView<'_>) {
        let (sensitive, _) = view.current_volume_id();
        self.dispatches.push((view.status(), sensitive));
        if !sensitive.is_none() {
            *self.deposits.entry(sensitive.0).or_default() += view.energy_deposit();
        }
    }
}

#[test]
fn electron_walkthrough_scores_the_right_volumes() {
    let demo = demo_geometry();
    let control = MockEngineControl::new();
    let navigator = MockNavigator::new();
    let services = EngineServices {
        geometry: &demo.registry,
        control: &control,
        navigator: &navigator,
    };
    let mut manager = StepManager::new(GeometryOrigin::Geant4, RunStatus::new()).unwrap();
    let driver = SteppingDriver::new();
    let mut scorer = Scorer::default();

    // Track starts at its vertex inside the layer.
    let mut track = TrackBuilder::new(1, electron(), demo.layer_touchable())
        .momentum(Vec3::new(0.0, 0.0, 50.0))
        .total_energy(50.0)
        .build();
    driver.track_started(&mut manager, services, &track, &mut scorer);

    // Step 1: interior step in the layer, 0.8 MeV deposited.
    track.step_number = 1;
    track.track_length = 5.0;
    let interior = StepBuilder::new()
        .post_status(PointStatus::PhysicsProcess)
        .length(5.0)
        .deposit(0.8)
        .build();
    driver.step_finished(&mut manager, services, &track, &interior, &mut scorer);

    // Step 2: the electron reaches the layer/calorimeter boundary.
    track.step_number = 2;
    track.track_length = 9.0;
    track.next_touchable = Some(demo.calor_touchable());
    let crossing = StepBuilder::new()
        .post_status(PointStatus::GeomBoundary)
        .length(4.0)
        .deposit(0.4)
        .build();
    driver.step_finished(&mut manager, services, &track, &crossing, &mut scorer);

    // Step 3: now inside the calorimeter, the electron leaves the world.
    track.touchable = demo.calor_touchable();
    track.next_touchable = None;
    track.step_number = 3;
    track.track_length = 29.0;
    let escape = StepBuilder::new()
        .post_status(PointStatus::WorldBoundary)
        .length(20.0)
        .deposit(0.05)
        .build();
    driver.step_finished(&mut manager, services, &track, &escape, &mut scorer);

    // Regimes in order; the crossing step was seen by both volumes.
    assert_eq!(
        scorer.dispatches,
        vec![
            (StepStatus::Vertex, SensitiveId(2)),
            (StepStatus::Normal, SensitiveId(2)),
            (StepStatus::Normal, SensitiveId(2)),
            (StepStatus::Boundary, SensitiveId(1)),
            (StepStatus::Normal, SensitiveId(1)),
        ]
    );

    // Deposits in GeV, credited to the volume the step ran in; the
    // boundary re-dispatch itself deposits nothing.
    assert!((scorer.deposits[&2] - 1.2e-3).abs() < 1e-15);
    assert!((scorer.deposits[&1] - 0.05e-3).abs() < 1e-15);
}

// ── Per-step assertions from inside the observer ─────────────────────

/// Checks queries that only make sense while the view is live.
struct InsideChecker {
    checked: usize,
}

impl StepObserver for InsideChecker {
    fn on_step(&mut self, view: &mut StepView<'_>) {
        match view.status() {
            StepStatus::Vertex => {
                assert!(view.is_new_track());
                assert_eq!(view.track_step_length(), 0.0);
                assert_eq!(view.secondary_count(), 0);
                assert_eq!(view.current_volume_path(), "/WRLD_0/CALO_0/LAYR_0");
            }
            StepStatus::Normal => {
                assert!(view.is_track_exiting());
                assert!(!view.is_track_entering());
                // 4 mm step reported as 0.4 cm.
                assert!((view.track_step_length() - 0.4).abs() < 1e-12);
            }
            StepStatus::Boundary => {
                assert!(view.is_track_entering());
                assert!(!view.is_track_exiting());
                assert_eq!(view.track_step_length(), 0.0);
                assert_eq!(view.current_volume_name(), "CALO");
            }
            StepStatus::GflashSpot => unreachable!(),
        }
        self.checked += 1;
    }
}

#[test]
fn regime_dependent_queries_flip_at_the_boundary() {
    let demo = demo_geometry();
    let control = MockEngineControl::new();
    let navigator = MockNavigator::new();
    let services = EngineServices {
        geometry: &demo.registry,
        control: &control,
        navigator: &navigator,
    };
    let mut manager = StepManager::new(GeometryOrigin::Geant4, RunStatus::new()).unwrap();
    let driver = SteppingDriver::new();
    let mut checker = InsideChecker { checked: 0 };

    let mut track = TrackBuilder::new(1, electron(), demo.layer_touchable()).build();
    driver.track_started(&mut manager, services, &track, &mut checker);

    track.step_number = 1;
    track.next_touchable = Some(demo.calor_touchable());
    let crossing = StepBuilder::new()
        .post_status(PointStatus::GeomBoundary)
        .length(4.0)
        .build();
    driver.step_finished(&mut manager, services, &track, &crossing, &mut checker);

    assert_eq!(checker.checked, 3);
}
