//! # Cartesian Coordinate System Module
//!
//! Three-dimensional Cartesian positions used between the projection
//! stages of the ephemeris.
//!
//! Heliocentric positions are expressed in the ecliptic frame of J2000:
//! - **X-axis**: toward the vernal equinox
//! - **Y-axis**: 90° along the ecliptic from the equinox
//! - **Z-axis**: toward the north ecliptic pole
//!
//! Units are astronomical units throughout.
//!
//! ## Examples
//!
//! ```rust
//! use solarfield::coordinates::cartesian::Cartesian3;
//!
//! let earth = Cartesian3::new(-0.18, 0.97, 0.0);
//! let mars = Cartesian3::new(1.39, -0.01, -0.03);
//!
//! // Mars as seen from Earth
//! let relative = mars - earth;
//! assert!((relative.x - 1.57).abs() < 1e-12);
//! ```

use super::angle::mod2pi;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Three-dimensional Cartesian coordinate representation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cartesian3 {
    /// X-component (toward vernal equinox)
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component (toward the pole of the frame)
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian coordinate
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// Calculates the magnitude (length) of the coordinate vector
    ///
    /// # Examples
    ///
    /// ```rust
    /// use solarfield::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(3.0, 4.0, 0.0);
    /// assert_eq!(coord.magnitude(), 5.0);
    /// ```
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Converts to spherical coordinates of the same frame
    ///
    /// Returns `(longitude, latitude, distance)` with longitude in `[0, 2π)`
    /// and latitude in `[-π/2, π/2]`. The origin maps to all zeros.
    pub fn to_spherical(&self) -> (f64, f64, f64) {
        let distance = self.magnitude();

        if distance == 0.0 {
            return (0.0, 0.0, 0.0);
        }

        let lat = (self.z / distance).asin();
        let lon = if self.x == 0.0 && self.y == 0.0 {
            0.0 // Arbitrary choice at poles
        } else {
            mod2pi(self.y.atan2(self.x))
        };

        (lon, lat, distance)
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }
}

impl std::ops::Sub for Cartesian3 {
    type Output = Cartesian3;

    fn sub(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}
