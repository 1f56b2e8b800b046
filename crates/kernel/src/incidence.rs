//! Angle of incidence between a drillhole axis and a geological plane.
//!
//! The incidence angle is measured against the plane surface, not its normal:
//! 90 degrees is a perpendicular crossing (the hole runs along the normal) and
//! 0 degrees is a grazing hole lying in the plane.

use crate::config::{default_config, IncidenceConfig};
use crate::geometry::orientation::{normal_vector_from_strike_dip, vector_from_azimuth_plunge};
use crate::geometry::vector::Vec3;
use crate::types::{ensure_finite, Drillhole, GeometryError, Plane};

/// Incidence angle in degrees, in [0, 90], between a line direction and the
/// plane with the given normal.
///
/// Neither vector needs to be unit length. Each is normalized first and a
/// near-zero length is reported as [`GeometryError::DegenerateOrientation`].
pub fn incidence_between(
    direction: &Vec3,
    normal: &Vec3,
    config: &IncidenceConfig,
) -> Result<f64, GeometryError> {
    let line = direction
        .normalized(config.zero_length)
        .ok_or(GeometryError::DegenerateOrientation { what: "direction" })?;
    let normal = normal
        .normalized(config.zero_length)
        .ok_or(GeometryError::DegenerateOrientation { what: "normal" })?;

    let to_normal = line.angle_to_unit(&normal);
    Ok((90.0 - to_normal.to_degrees()).abs())
}

/// Incidence angle in degrees, in [0, 90], of a hole at `azimuth`/`plunge`
/// crossing the plane `strike`/`dip`.
///
/// Any finite inputs are accepted; bearings wrap and dip/plunge are not range
/// checked here. Non-finite inputs are rejected.
pub fn angle_of_incidence(
    strike: f64,
    dip: f64,
    azimuth: f64,
    plunge: f64,
) -> Result<f64, GeometryError> {
    angle_of_incidence_with(&default_config(), strike, dip, azimuth, plunge)
}

/// [`angle_of_incidence`] with explicit tolerances.
pub fn angle_of_incidence_with(
    config: &IncidenceConfig,
    strike: f64,
    dip: f64,
    azimuth: f64,
    plunge: f64,
) -> Result<f64, GeometryError> {
    ensure_finite("strike", strike)?;
    ensure_finite("dip", dip)?;
    ensure_finite("azimuth", azimuth)?;
    ensure_finite("plunge", plunge)?;

    let hole = Drillhole { azimuth, plunge };
    let plane = Plane { strike, dip };
    incidence_between(&hole.direction(), &plane.normal(), config)
}

impl Drillhole {
    /// Unit vector pointing down the hole.
    pub fn direction(&self) -> Vec3 {
        vector_from_azimuth_plunge(self.azimuth, self.plunge)
    }

    /// Incidence of this hole against `plane`, in degrees.
    pub fn incidence_with(&self, plane: &Plane) -> Result<f64, GeometryError> {
        angle_of_incidence(plane.strike, plane.dip, self.azimuth, self.plunge)
    }
}

impl Plane {
    /// Upward unit normal.
    pub fn normal(&self) -> Vec3 {
        normal_vector_from_strike_dip(self.strike, self.dip)
    }
}
