use crate::constants::{OBLIQUITY_J2000_DEG, RAD2DEG};
use crate::coordinates::angle::{mod2pi, radians_to_hours};
use crate::coordinates::cartesian::Cartesian3;
use crate::planetlib::Body;
use lazy_static::lazy_static;
use nalgebra::{Rotation3, Vector3};
use serde::{Deserialize, Serialize};

lazy_static! {
    static ref EC_TO_EQ_J2000: EclipticToEquatorial =
        EclipticToEquatorial::from_degrees(OBLIQUITY_J2000_DEG);
}

// Marker trait for inertial coordinate systems
pub trait InertialFrame: Sized {
    fn to_cartesian(&self) -> Cartesian3;
    fn from_cartesian(cart: Cartesian3) -> Self;
}

/// Geocentric equatorial coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equatorial {
    pub ra: f64,       // Right ascension in radians, [0, 2π)
    pub dec: f64,      // Declination in radians
    pub distance: f64, // Distance from the origin in AU
}

impl Equatorial {
    pub fn new(ra: f64, dec: f64, distance: f64) -> Self {
        Equatorial {
            ra: mod2pi(ra),
            dec,
            distance,
        }
    }

    /// Right ascension in hours, [0, 24)
    pub fn ra_hours(&self) -> f64 {
        radians_to_hours(self.ra)
    }

    /// Get right ascension in degrees
    pub fn ra_degrees(&self) -> f64 {
        self.ra * RAD2DEG
    }

    /// Get declination in degrees
    pub fn dec_degrees(&self) -> f64 {
        self.dec * RAD2DEG
    }
}

impl InertialFrame for Equatorial {
    fn to_cartesian(&self) -> Cartesian3 {
        let cos_dec = self.dec.cos();
        Cartesian3::new(
            self.distance * cos_dec * self.ra.cos(),
            self.distance * cos_dec * self.ra.sin(),
            self.distance * self.dec.sin(),
        )
    }

    /// `ra = atan2(y, x)` wrapped with `mod2pi`, `dec = atan(z / √(x² + y²))`
    fn from_cartesian(cart: Cartesian3) -> Self {
        let r_xy = (cart.x * cart.x + cart.y * cart.y).sqrt();
        Equatorial::new(
            cart.y.atan2(cart.x),
            (cart.z / r_xy).atan(),
            cart.magnitude(),
        )
    }
}

/// Rotation from the ecliptic frame into the equatorial frame
///
/// A rotation about the shared x axis (the equinox direction) by the
/// obliquity of the ecliptic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticToEquatorial {
    obliquity: f64,
    rotation: Rotation3<f64>,
}

impl EclipticToEquatorial {
    /// Rotation for the J2000 obliquity of 23.439281°
    pub fn j2000() -> Self {
        *EC_TO_EQ_J2000
    }

    pub fn from_degrees(obliquity_deg: f64) -> Self {
        let obliquity = obliquity_deg.to_radians();
        Self {
            obliquity,
            rotation: Rotation3::from_axis_angle(&Vector3::x_axis(), obliquity),
        }
    }

    pub fn obliquity_degrees(&self) -> f64 {
        self.obliquity * RAD2DEG
    }

    /// `(X, Y cos ε − Z sin ε, Y sin ε + Z cos ε)`
    pub fn rotate(&self, ecliptic: &Cartesian3) -> Cartesian3 {
        Cartesian3::from_vector3(self.rotation * ecliptic.to_vector3())
    }

    /// Geocentric equatorial position of `body`
    ///
    /// Both positions must be heliocentric ecliptic positions for the same
    /// epoch. Earth has no position relative to itself, so `Body::Earth`
    /// yields `None` without computing anything.
    pub fn project(
        &self,
        body: Body,
        heliocentric: &Cartesian3,
        earth_heliocentric: &Cartesian3,
    ) -> Option<Equatorial> {
        if body == Body::Earth {
            return None;
        }
        let geocentric = *heliocentric - *earth_heliocentric;
        Some(Equatorial::from_cartesian(self.rotate(&geocentric)))
    }
}

impl Default for EclipticToEquatorial {
    fn default() -> Self {
        Self::j2000()
    }
}
