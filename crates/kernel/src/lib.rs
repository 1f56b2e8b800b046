//! Drillhole incidence geometry.
//!
//! Converts drillhole orientations (azimuth/plunge) and geological planes
//! (strike/dip) into vectors, measures the angle at which the hole crosses
//! each plane, and maps that angle to a true-thickness correction.

pub mod config;
pub mod geometry;
pub mod incidence;
pub mod sweep;
pub mod thickness;
pub mod types;

pub use config::{default_config, IncidenceConfig};
pub use geometry::orientation::{normal_vector_from_strike_dip, vector_from_azimuth_plunge};
pub use geometry::vector::Vec3;
pub use incidence::{angle_of_incidence, angle_of_incidence_with, incidence_between};
pub use sweep::{
    steepest_slope, sweep_plane, sweep_planes, AzimuthSweep, PlaneSeries, SeriesSummary, SweepSample,
};
pub use thickness::{apparent_thickness, ratio_to_angle, true_thickness, true_thickness_ratio};
pub use types::{normalize_bearing, Drillhole, GeometryError, Plane};
