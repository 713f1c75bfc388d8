//! Heliocentric ecliptic positions from orbital elements

use super::elements::OrbitalElements;
use super::kepler::true_anomaly;
use super::Body;
use crate::coordinates::cartesian::Cartesian3;

/// Distance from the Sun (AU) at true anomaly `v`
pub fn orbital_radius(elements: &OrbitalElements, v: f64) -> f64 {
    let OrbitalElements { a, e, .. } = *elements;
    a * (1.0 - e * e) / (1.0 + e * v.cos())
}

/// Heliocentric ecliptic position of `body` in AU
///
/// Earth is placed exactly in the ecliptic plane (`z == 0.0`); the tiny
/// tabulated inclination of its orbit is ignored. Every other body is
/// rotated through its ascending node and inclination.
pub fn heliocentric_position(body: Body, elements: &OrbitalElements) -> Cartesian3 {
    let OrbitalElements { e, i, o, w, .. } = *elements;
    let v = true_anomaly(elements.mean_anomaly(), e);
    let r = orbital_radius(elements, v);

    if body == Body::Earth {
        return Cartesian3::new(r * (v + w).cos(), r * (v + w).sin(), 0.0);
    }

    // Argument of latitude: angle from the ascending node along the orbit
    let u = v + w - o;
    Cartesian3::new(
        r * (o.cos() * u.cos() - o.sin() * u.sin() * i.cos()),
        r * (o.sin() * u.cos() + o.cos() * u.sin() * i.cos()),
        r * (u.sin() * i.sin()),
    )
}
