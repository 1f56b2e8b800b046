//! Helper functions: error type and constructive orientations.

use incidence_kernel::{Drillhole, GeometryError, Plane};

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("dispatch error: {message}")]
    DispatchError { message: String },

    #[error("unexpected response: expected {expected}, got {got}")]
    UnexpectedResponse { expected: String, got: String },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },

    #[error("geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

// ── Constructive Orientations ───────────────────────────────────────────────

/// Hole running along the plane's normal, heading down.
///
/// A horizontal plane gives a vertical hole; a vertical plane gives a
/// horizontal hole toward strike - 90.
pub fn hole_along_normal(plane: &Plane) -> Result<Drillhole, GeometryError> {
    Drillhole::new(plane.strike - 90.0, 90.0 - plane.dip)
}

/// Horizontal hole following the plane's strike line.
pub fn hole_along_strike(plane: &Plane) -> Result<Drillhole, GeometryError> {
    Drillhole::new(plane.strike, 0.0)
}

/// Hole following the plane's dip line, down toward the dip direction.
pub fn hole_along_dip(plane: &Plane) -> Result<Drillhole, GeometryError> {
    Drillhole::new(plane.dip_direction(), plane.dip)
}

/// Planes on a regular grid: strike over [0, 360), dip over [0, 90].
pub fn plane_grid(strike_step: f64, dip_step: f64) -> Result<Vec<Plane>, GeometryError> {
    if !(strike_step > 0.0 && dip_step > 0.0) {
        return Err(GeometryError::InvalidSweep {
            reason: format!("grid steps must be positive ({strike_step}, {dip_step})"),
        });
    }
    let mut planes = Vec::new();
    let strikes = (360.0 / strike_step).floor() as usize;
    let dips = (90.0 / dip_step).floor() as usize;
    for i in 0..strikes {
        for j in 0..=dips {
            planes.push(Plane::new(i as f64 * strike_step, j as f64 * dip_step)?);
        }
    }
    Ok(planes)
}
