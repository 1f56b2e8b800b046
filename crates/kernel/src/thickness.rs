//! Apparent-to-true thickness correction.

use crate::config::IncidenceConfig;
use crate::types::GeometryError;

/// Ratio of true to apparent thickness for a crossing at `incidence_deg`.
///
/// 1.0 at a perpendicular crossing, 0.0 when grazing.
pub fn true_thickness_ratio(incidence_deg: f64) -> f64 {
    incidence_deg.to_radians().sin()
}

/// Inverse of [`true_thickness_ratio`], in degrees.
///
/// The ratio is clamped to [0, 1] first so roundoff never leaves `asin`'s domain.
pub fn ratio_to_angle(ratio: f64) -> f64 {
    ratio.clamp(0.0, 1.0).asin().to_degrees()
}

/// True layer thickness from a thickness measured along the hole.
pub fn true_thickness(apparent: f64, incidence_deg: f64) -> f64 {
    apparent * true_thickness_ratio(incidence_deg)
}

/// Along-hole thickness expected for a layer of `true_thickness`.
///
/// Fails at grazing incidence, where any layer would appear infinitely thick.
pub fn apparent_thickness(
    true_thickness: f64,
    incidence_deg: f64,
    config: &IncidenceConfig,
) -> Result<f64, GeometryError> {
    let ratio = true_thickness_ratio(incidence_deg);
    if ratio.abs() < config.zero_ratio {
        return Err(GeometryError::GrazingIncidence {
            angle: incidence_deg,
        });
    }
    Ok(true_thickness / ratio)
}
