use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced by the incidence kernel.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("invalid orientation: {field} = {value} is not finite")]
    InvalidOrientation { field: &'static str, value: f64 },

    #[error("degenerate orientation: {what} vector has zero length")]
    DegenerateOrientation { what: &'static str },

    #[error("dip {dip} outside [0, 90]; express overturned planes by rotating strike 180")]
    DipOutOfRange { dip: f64 },

    #[error("plunge {plunge} outside [-90, 90]")]
    PlungeOutOfRange { plunge: f64 },

    #[error("invalid azimuth sweep: {reason}")]
    InvalidSweep { reason: String },

    #[error("grazing incidence ({angle} deg): true thickness cannot be expanded to apparent")]
    GrazingIncidence { angle: f64 },
}

pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::InvalidOrientation { field, value })
    }
}

/// Wrap a bearing into [0, 360).
pub fn normalize_bearing(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Orientation of a drillhole axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Drillhole {
    /// Bearing of the horizontal projection, degrees clockwise from north.
    pub azimuth: f64,
    /// Inclination below horizontal, degrees. Negative values are up-holes.
    pub plunge: f64,
}

impl Drillhole {
    /// Validated constructor: both values finite, plunge within [-90, 90].
    pub fn new(azimuth: f64, plunge: f64) -> Result<Self, GeometryError> {
        let azimuth = ensure_finite("azimuth", azimuth)?;
        let plunge = ensure_finite("plunge", plunge)?;
        if !(-90.0..=90.0).contains(&plunge) {
            return Err(GeometryError::PlungeOutOfRange { plunge });
        }
        Ok(Self { azimuth, plunge })
    }

    /// Same hole with azimuth wrapped into [0, 360).
    pub fn normalized(&self) -> Self {
        Self {
            azimuth: normalize_bearing(self.azimuth),
            plunge: self.plunge,
        }
    }
}

impl Default for Drillhole {
    fn default() -> Self {
        Self {
            azimuth: 0.0,
            plunge: 60.0,
        }
    }
}

/// Orientation of a planar geological feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Bearing of a horizontal line on the plane, degrees clockwise from north.
    pub strike: f64,
    /// Maximum inclination below horizontal toward strike + 90, degrees.
    pub dip: f64,
}

impl Plane {
    /// Validated constructor: both values finite, dip within [0, 90].
    pub fn new(strike: f64, dip: f64) -> Result<Self, GeometryError> {
        let strike = ensure_finite("strike", strike)?;
        let dip = ensure_finite("dip", dip)?;
        if !(0.0..=90.0).contains(&dip) {
            return Err(GeometryError::DipOutOfRange { dip });
        }
        Ok(Self { strike, dip })
    }

    /// Same plane with strike wrapped into [0, 360).
    pub fn normalized(&self) -> Self {
        Self {
            strike: normalize_bearing(self.strike),
            dip: self.dip,
        }
    }

    /// Bearing toward which the plane dips, in [0, 360).
    pub fn dip_direction(&self) -> f64 {
        normalize_bearing(self.strike + 90.0)
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            strike: 90.0,
            dip: 45.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plane_accepts_geological_range() {
        assert!(Plane::new(0.0, 0.0).is_ok());
        assert!(Plane::new(359.9, 90.0).is_ok());
        assert!(Plane::new(-45.0, 30.0).is_ok());
    }

    #[test]
    fn test_plane_rejects_negative_dip() {
        assert_eq!(
            Plane::new(10.0, -5.0),
            Err(GeometryError::DipOutOfRange { dip: -5.0 })
        );
    }

    #[test]
    fn test_plane_rejects_steep_dip() {
        assert!(matches!(
            Plane::new(10.0, 90.5),
            Err(GeometryError::DipOutOfRange { .. })
        ));
    }

    #[test]
    fn test_plane_rejects_non_finite() {
        assert!(matches!(
            Plane::new(f64::NAN, 10.0),
            Err(GeometryError::InvalidOrientation { field: "strike", .. })
        ));
        assert!(matches!(
            Plane::new(10.0, f64::INFINITY),
            Err(GeometryError::InvalidOrientation { field: "dip", .. })
        ));
    }

    #[test]
    fn test_drillhole_plunge_range() {
        assert!(Drillhole::new(0.0, -90.0).is_ok());
        assert!(Drillhole::new(0.0, 90.0).is_ok());
        assert!(matches!(
            Drillhole::new(0.0, 91.0),
            Err(GeometryError::PlungeOutOfRange { .. })
        ));
        assert!(matches!(
            Drillhole::new(f64::NEG_INFINITY, 10.0),
            Err(GeometryError::InvalidOrientation { field: "azimuth", .. })
        ));
    }

    #[test]
    fn test_normalize_bearing() {
        assert_eq!(normalize_bearing(0.0), 0.0);
        assert_eq!(normalize_bearing(360.0), 0.0);
        assert_eq!(normalize_bearing(450.0), 90.0);
        assert_eq!(normalize_bearing(-90.0), 270.0);
        let tiny = normalize_bearing(-1e-20);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_normalized_wraps_bearings_only() {
        let hole = Drillhole::new(-30.0, 45.0).unwrap().normalized();
        assert_eq!(hole, Drillhole { azimuth: 330.0, plunge: 45.0 });
        let plane = Plane::new(720.0, 12.0).unwrap().normalized();
        assert_eq!(plane, Plane { strike: 0.0, dip: 12.0 });
    }

    #[test]
    fn test_dip_direction() {
        assert_eq!(Plane::new(300.0, 20.0).unwrap().dip_direction(), 30.0);
    }

    #[test]
    fn test_defaults_match_chart_defaults() {
        assert_eq!(Plane::default(), Plane { strike: 90.0, dip: 45.0 });
        assert_eq!(Drillhole::default().plunge, 60.0);
    }

    #[test]
    fn test_plane_serde_shape() {
        let json = serde_json::to_string(&Plane::default()).unwrap();
        assert_eq!(json, r#"{"strike":90.0,"dip":45.0}"#);
    }
}
