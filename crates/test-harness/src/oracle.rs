//! Verification oracles: pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not panics.
//! This lets a test collect all failures in one pass.

use incidence_bridge::messages::SeriesData;
use incidence_kernel::{
    angle_of_incidence, ratio_to_angle, steepest_slope, true_thickness_ratio, IncidenceConfig,
    Plane,
};

use crate::helpers::{hole_along_dip, hole_along_normal, hole_along_strike};

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn pass_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: Some(value),
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn fail_val(name: &str, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: Some(value),
        }
    }

    fn verdict(name: &str, passed: bool, detail: String, value: f64) -> Self {
        if passed {
            Self::pass_val(name, detail, value)
        } else {
            Self::fail_val(name, detail, value)
        }
    }
}

// ── Series Oracles ──────────────────────────────────────────────────────────

/// Check that every incidence angle lies in [0, 90].
pub fn check_incidence_range(series: &SeriesData) -> OracleVerdict {
    let bad: Vec<(f64, f64)> = series
        .azimuths
        .iter()
        .zip(&series.angles)
        .filter(|(_, a)| !(0.0..=90.0).contains(*a))
        .map(|(az, a)| (*az, *a))
        .collect();

    if bad.is_empty() {
        OracleVerdict::pass(
            "incidence_range",
            format!("{}: all {} angles in [0, 90]", series.label, series.angles.len()),
        )
    } else {
        OracleVerdict::fail(
            "incidence_range",
            format!(
                "{}: {} angles out of range (azimuth, angle): {:?}",
                series.label,
                bad.len(),
                &bad[..bad.len().min(5)]
            ),
        )
    }
}

/// Check that adjacent samples never change faster than the configured slope.
pub fn check_sweep_continuity(series: &SeriesData, config: &IncidenceConfig) -> OracleVerdict {
    let (slope, at) = steepest_slope(&series.azimuths, &series.angles).unwrap_or((0.0, f64::NAN));

    OracleVerdict::verdict(
        "sweep_continuity",
        slope <= config.max_slope,
        format!(
            "{}: max slope {:.6} deg/deg at azimuth {} (limit {})",
            series.label, slope, at, config.max_slope
        ),
        slope,
    )
}

/// Check that a sweep spanning a full turn starts and ends on the same value.
pub fn check_full_turn_closure(series: &SeriesData, tol: f64) -> OracleVerdict {
    let (Some(first_az), Some(last_az)) = (series.azimuths.first(), series.azimuths.last()) else {
        return OracleVerdict::fail("full_turn_closure", format!("{}: empty series", series.label));
    };
    if (last_az - first_az - 360.0).abs() > 1e-9 {
        return OracleVerdict::pass(
            "full_turn_closure",
            format!("{}: sweep spans {} deg, not a full turn; skipped", series.label, last_az - first_az),
        );
    }
    let first = series.angles[0];
    let last = series.angles[series.angles.len() - 1];
    let diff = (first - last).abs();
    OracleVerdict::verdict(
        "full_turn_closure",
        diff <= tol,
        format!("{}: |{:.9} - {:.9}| = {:.3e}", series.label, first, last, diff),
        diff,
    )
}

/// Check that each ratio is sin(angle) and maps back to its angle.
pub fn check_ratio_consistency(series: &SeriesData, tol: f64) -> OracleVerdict {
    if series.ratios.len() != series.angles.len() {
        return OracleVerdict::fail(
            "ratio_consistency",
            format!(
                "{}: {} ratios for {} angles",
                series.label,
                series.ratios.len(),
                series.angles.len()
            ),
        );
    }
    let mut worst = 0.0_f64;
    for (angle, ratio) in series.angles.iter().zip(&series.ratios) {
        worst = worst.max((true_thickness_ratio(*angle) - ratio).abs());
        worst = worst.max((ratio_to_angle(*ratio) - angle).abs());
    }
    OracleVerdict::verdict(
        "ratio_consistency",
        worst <= tol,
        format!("{}: worst deviation {:.3e} (tol {:.1e})", series.label, worst, tol),
        worst,
    )
}

/// Run all series oracles with default tolerances.
pub fn run_series_checks(series: &SeriesData) -> Vec<OracleVerdict> {
    let config = IncidenceConfig::default();
    vec![
        check_incidence_range(series),
        check_sweep_continuity(series, &config),
        check_full_turn_closure(series, 1e-9),
        check_ratio_consistency(series, 1e-5),
    ]
}

// ── Plane Oracles ───────────────────────────────────────────────────────────

/// Check that a hole along the plane's normal crosses at 90 degrees.
pub fn check_perpendicular_crossing(plane: &Plane, tol: f64) -> OracleVerdict {
    let result = hole_along_normal(plane).and_then(|hole| hole.incidence_with(plane));
    match result {
        Ok(angle) => OracleVerdict::verdict(
            "perpendicular_crossing",
            (angle - 90.0).abs() <= tol,
            format!(
                "{}/{}: hole along normal crosses at {:.9} deg",
                plane.strike, plane.dip, angle
            ),
            angle,
        ),
        Err(e) => OracleVerdict::fail("perpendicular_crossing", e.to_string()),
    }
}

/// Check that holes along the strike and dip lines graze the plane (0 degrees).
pub fn check_in_plane_grazing(plane: &Plane, tol: f64) -> OracleVerdict {
    let strike = hole_along_strike(plane).and_then(|hole| hole.incidence_with(plane));
    let dip = hole_along_dip(plane).and_then(|hole| hole.incidence_with(plane));
    match (strike, dip) {
        (Ok(s), Ok(d)) => {
            let worst = s.max(d);
            OracleVerdict::verdict(
                "in_plane_grazing",
                worst <= tol,
                format!(
                    "{}/{}: strike line {:.3e} deg, dip line {:.3e} deg",
                    plane.strike, plane.dip, s, d
                ),
                worst,
            )
        }
        (Err(e), _) | (_, Err(e)) => OracleVerdict::fail("in_plane_grazing", e.to_string()),
    }
}

/// Check that shifting strike by a full turn leaves the incidence unchanged.
pub fn check_strike_periodicity(plane: &Plane, azimuth: f64, plunge: f64, tol: f64) -> OracleVerdict {
    let a = angle_of_incidence(plane.strike, plane.dip, azimuth, plunge);
    let b = angle_of_incidence(plane.strike + 360.0, plane.dip, azimuth, plunge);
    match (a, b) {
        (Ok(a), Ok(b)) => {
            let diff = (a - b).abs();
            OracleVerdict::verdict(
                "strike_periodicity",
                diff <= tol,
                format!(
                    "{}/{} vs {}/{}: {:.9} vs {:.9}",
                    plane.strike,
                    plane.dip,
                    plane.strike + 360.0,
                    plane.dip,
                    a,
                    b
                ),
                diff,
            )
        }
        (Err(e), _) | (_, Err(e)) => OracleVerdict::fail("strike_periodicity", e.to_string()),
    }
}

/// Check one hole/plane pair against a known incidence.
pub fn check_reference_value(
    plane: &Plane,
    azimuth: f64,
    plunge: f64,
    expected: f64,
    tol: f64,
) -> OracleVerdict {
    match angle_of_incidence(plane.strike, plane.dip, azimuth, plunge) {
        Ok(angle) => OracleVerdict::verdict(
            "reference_value",
            (angle - expected).abs() <= tol,
            format!(
                "{}/{} at {}->{}: got {:.12}, expected {:.12}",
                plane.strike, plane.dip, azimuth, plunge, angle, expected
            ),
            angle,
        ),
        Err(e) => OracleVerdict::fail("reference_value", e.to_string()),
    }
}

/// Run all plane oracles with default tolerances.
pub fn run_plane_checks(plane: &Plane) -> Vec<OracleVerdict> {
    vec![
        check_perpendicular_crossing(plane, 1e-5),
        check_in_plane_grazing(plane, 1e-6),
        check_strike_periodicity(plane, 37.0, 55.0, 1e-4),
    ]
}
