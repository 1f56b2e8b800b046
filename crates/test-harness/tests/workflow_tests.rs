//! Tests for the Survey workflow API.

use approx::assert_abs_diff_eq;
use incidence_bridge::messages::UiToEngine;
use test_harness::{HarnessError, Survey};

#[test]
fn survey_builds_request() {
    let survey = Survey::new(45.0).plane(10.0, 20.0).plane(30.0, 40.0).sweep(0.0, 90.0, 15.0);
    assert_eq!(survey.plane_count(), 2);
    assert_eq!(survey.plunge(), 45.0);
    match survey.request() {
        UiToEngine::SweepAzimuth { plunge, planes, sweep } => {
            assert_eq!(plunge, 45.0);
            assert_eq!(planes.len(), 2);
            assert_eq!(sweep.unwrap().step, 15.0);
        }
        other => panic!("Expected SweepAzimuth, got {:?}", other),
    }
}

#[test]
fn survey_runs_reference_case() {
    let run = Survey::new(60.0).plane(90.0, 45.0).run().unwrap();
    assert_eq!(run.plunge, 60.0);
    assert_eq!(run.series.len(), 1);
    assert_abs_diff_eq!(run.angle_at(1, 90.0).unwrap(), 37.76124390703506, epsilon = 1e-9);
    assert_abs_diff_eq!(run.angle_at(1, 180.0).unwrap(), 15.0, epsilon = 1e-9);
    run.assert_all_pass().unwrap();
}

#[test]
fn survey_custom_sweep_samples() {
    let run = Survey::new(60.0).plane(90.0, 45.0).sweep(0.0, 180.0, 45.0).run().unwrap();
    let series = run.series(1).unwrap();
    assert_eq!(series.azimuths, vec![0.0, 45.0, 90.0, 135.0, 180.0]);
    // nearest sample to 100 is 90
    assert_abs_diff_eq!(run.angle_at(1, 100.0).unwrap(), 37.76124390703506, epsilon = 1e-9);
    run.assert_all_pass().unwrap();
}

#[test]
fn survey_many_planes_all_pass() {
    let mut survey = Survey::new(35.0);
    for i in 0..10 {
        survey = survey.plane(i as f64 * 36.0, i as f64 * 9.0);
    }
    let run = survey.run().unwrap();
    assert_eq!(run.series.len(), 10);
    assert_eq!(run.series(10).unwrap().label, "Plane 10: 324°/81°");
    run.assert_all_pass().unwrap();
}

#[test]
fn series_lookup_is_one_based() {
    let run = Survey::new(60.0).plane(90.0, 45.0).run().unwrap();
    assert!(matches!(run.series(0), Err(HarnessError::AssertionFailed { .. })));
    assert!(matches!(run.series(2), Err(HarnessError::AssertionFailed { .. })));
    assert!(run.angle_at(3, 0.0).is_err());
}

#[test]
fn survey_rejects_negative_dip() {
    match Survey::new(60.0).plane(90.0, -10.0).run() {
        Err(HarnessError::DispatchError { message }) => {
            assert!(message.contains("dip -10"), "{}", message)
        }
        other => panic!("Expected DispatchError, got {:?}", other),
    }
}

#[test]
fn survey_rejects_plunge_out_of_range() {
    let err = Survey::new(95.0).plane(90.0, 45.0).run().unwrap_err();
    assert!(err.to_string().contains("plunge 95"), "{}", err);
}

#[test]
fn survey_rejects_too_many_planes() {
    let mut survey = Survey::new(60.0);
    for _ in 0..11 {
        survey = survey.plane(90.0, 45.0);
    }
    assert!(matches!(survey.run(), Err(HarnessError::DispatchError { .. })));
}

#[test]
fn survey_rejects_zero_step() {
    let err = Survey::new(60.0).plane(90.0, 45.0).sweep(0.0, 360.0, 0.0).run().unwrap_err();
    assert!(err.to_string().contains("invalid azimuth sweep"), "{}", err);
}
