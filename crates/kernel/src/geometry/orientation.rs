//! Orientation measurements to vectors.
//!
//! Both builders are unvalidated scalar functions: any real input is accepted
//! and periodicity wraps out-of-range bearings. Range checks live on
//! [`Drillhole`](crate::types::Drillhole) and [`Plane`](crate::types::Plane).

use super::vector::Vec3;

/// Direction of a line given its compass azimuth and downward plunge, in degrees.
///
/// Azimuth is measured clockwise from north, so 90 points east. Positive plunge
/// points below horizontal, giving a negative `z`.
pub fn vector_from_azimuth_plunge(azimuth_deg: f64, plunge_deg: f64) -> Vec3 {
    let az = azimuth_deg.to_radians();
    let pl = plunge_deg.to_radians();
    Vec3::new(pl.cos() * az.sin(), pl.cos() * az.cos(), -pl.sin())
}

/// Upward normal of a plane given its strike and dip, in degrees.
///
/// The dip direction is strike + 90 (right-hand rule). The normal leans toward
/// the dip direction by the dip amount: a horizontal plane gives `Vec3::UP`, a
/// vertical plane gives a horizontal normal.
pub fn normal_vector_from_strike_dip(strike_deg: f64, dip_deg: f64) -> Vec3 {
    let dip = dip_deg.to_radians();
    let dip_dir = strike_deg.to_radians() + std::f64::consts::FRAC_PI_2;
    Vec3::new(dip.sin() * dip_dir.sin(), dip.sin() * dip_dir.cos(), dip.cos())
}
