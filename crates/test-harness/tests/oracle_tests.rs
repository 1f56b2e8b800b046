//! Tests for verification oracles.

use incidence_bridge::messages::SeriesData;
use incidence_kernel::{IncidenceConfig, Plane};
use test_harness::helpers::plane_grid;
use test_harness::oracle::*;
use test_harness::Survey;

/// Default sweep of the reference plane at plunge 60.
fn reference_series() -> SeriesData {
    let run = Survey::new(60.0).plane(90.0, 45.0).run().unwrap();
    run.series(1).unwrap().clone()
}

fn synthetic(azimuths: Vec<f64>, angles: Vec<f64>) -> SeriesData {
    let ratios = angles.iter().map(|a| a.to_radians().sin()).collect();
    SeriesData {
        label: "synthetic".to_string(),
        strike: 0.0,
        dip: 0.0,
        azimuths,
        angles,
        ratios,
        summary: None,
    }
}

// ── Series Oracle Tests ─────────────────────────────────────────────────

#[test]
fn incidence_range_passes_for_reference_sweep() {
    let result = check_incidence_range(&reference_series());
    assert!(result.passed, "{}", result.detail);
}

#[test]
fn incidence_range_flags_out_of_range_angles() {
    let series = synthetic(vec![0.0, 1.0, 2.0], vec![10.0, 95.0, -1.0]);
    let result = check_incidence_range(&series);
    assert!(!result.passed);
    assert!(result.detail.contains("2 angles out of range"), "{}", result.detail);
}

#[test]
fn sweep_continuity_passes_for_reference_sweep() {
    let result = check_sweep_continuity(&reference_series(), &IncidenceConfig::default());
    assert!(result.passed, "{}", result.detail);
    let slope = result.value.unwrap();
    assert!(slope > 0.4 && slope <= 1.0 + 1e-9, "slope {}", slope);
}

#[test]
fn sweep_continuity_flags_a_jump() {
    let series = synthetic(vec![0.0, 1.0, 2.0], vec![10.0, 11.0, 30.0]);
    let result = check_sweep_continuity(&series, &IncidenceConfig::default());
    assert!(!result.passed, "{}", result.detail);
    assert_eq!(result.value, Some(19.0));
}

#[test]
fn full_turn_closure_passes_for_default_sweep() {
    let result = check_full_turn_closure(&reference_series(), 1e-9);
    assert!(result.passed, "{}", result.detail);
}

#[test]
fn full_turn_closure_skips_partial_sweeps() {
    let series = synthetic(vec![0.0, 90.0], vec![10.0, 50.0]);
    let result = check_full_turn_closure(&series, 1e-9);
    assert!(result.passed);
    assert!(result.detail.contains("skipped"), "{}", result.detail);
}

#[test]
fn full_turn_closure_fails_on_empty_series() {
    let result = check_full_turn_closure(&synthetic(Vec::new(), Vec::new()), 1e-9);
    assert!(!result.passed);
}

#[test]
fn ratio_consistency_passes_for_reference_sweep() {
    let result = check_ratio_consistency(&reference_series(), 1e-5);
    assert!(result.passed, "{}", result.detail);
}

#[test]
fn ratio_consistency_flags_wrong_ratio() {
    let mut series = synthetic(vec![0.0, 1.0], vec![30.0, 60.0]);
    series.ratios[0] = 0.9;
    let result = check_ratio_consistency(&series, 1e-5);
    assert!(!result.passed, "{}", result.detail);
}

#[test]
fn ratio_consistency_flags_length_mismatch() {
    let mut series = synthetic(vec![0.0, 1.0], vec![30.0, 60.0]);
    series.ratios.pop();
    let result = check_ratio_consistency(&series, 1e-5);
    assert!(!result.passed);
    assert!(result.detail.contains("1 ratios for 2 angles"), "{}", result.detail);
}

// ── Plane Oracle Tests ──────────────────────────────────────────────────

#[test]
fn perpendicular_crossing_passes_for_reference_plane() {
    let result = check_perpendicular_crossing(&Plane::default(), 1e-5);
    assert!(result.passed, "{}", result.detail);
}

#[test]
fn in_plane_grazing_passes_for_reference_plane() {
    let result = check_in_plane_grazing(&Plane::default(), 1e-6);
    assert!(result.passed, "{}", result.detail);
}

#[test]
fn reference_value_matches_known_case() {
    let result = check_reference_value(&Plane::default(), 90.0, 60.0, 37.76124390703506, 1e-9);
    assert!(result.passed, "{}", result.detail);
}

#[test]
fn reference_value_flags_wrong_expectation() {
    let result = check_reference_value(&Plane::default(), 90.0, 60.0, 45.0, 1e-9);
    assert!(!result.passed);
    assert!(result.detail.contains("expected 45"), "{}", result.detail);
}

#[test]
fn reference_value_reports_geometry_errors() {
    let result = check_reference_value(&Plane::default(), f64::NAN, 60.0, 45.0, 1e-9);
    assert!(!result.passed);
    assert!(result.detail.contains("azimuth"), "{}", result.detail);
}

#[test]
fn strike_periodicity_passes_for_reference_plane() {
    let result = check_strike_periodicity(&Plane::default(), 37.0, 55.0, 1e-4);
    assert!(result.passed, "{}", result.detail);
}

#[test]
fn plane_checks_pass_across_grid() {
    let planes = plane_grid(30.0, 15.0).unwrap();
    assert_eq!(planes.len(), 12 * 7);
    for plane in &planes {
        for v in run_plane_checks(plane) {
            assert!(v.passed, "{}: {}", v.oracle_name, v.detail);
        }
    }
}

#[test]
fn plane_grid_rejects_non_positive_steps() {
    assert!(plane_grid(0.0, 10.0).is_err());
    assert!(plane_grid(10.0, -1.0).is_err());
    assert!(plane_grid(f64::NAN, 10.0).is_err());
}
