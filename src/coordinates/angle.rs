//! # Angle Representation Module
//!
//! Exact angle representation plus the normalization helpers the ephemeris
//! pipeline relies on.
//!
//! The `Angle` type keeps a value in the unit it was created with (degrees
//! or radians) and converts only when asked. The orbital element table is
//! written in degrees and consumed in radians, so the conversion happens
//! once, at the boundary.
//!
//! [`mod2pi`] maps any finite angle into `[0, 2π)` using floor (not
//! truncation) semantics, so negative angles land on the right side of
//! zero.
//!
//! ## Examples
//!
//! ```rust
//! use solarfield::coordinates::angle::{mod2pi, Angle};
//! use std::f64::consts::PI;
//!
//! let angle = Angle::from_degrees(-90.0);
//! assert!((mod2pi(angle.to_radians()) - 1.5 * PI).abs() < 1e-12);
//!
//! assert!((mod2pi(-PI / 2.0) - 1.5 * PI).abs() < 1e-15);
//! ```

use crate::constants::{DEG2HOURS, DEG2RAD, RAD2DEG, TAU};
use serde::{Deserialize, Serialize};

/// Map an angle in radians into `[0, 2π)`
///
/// Computes `2π·(b − ⌊b⌋)` with `b = angle / 2π`. A result nudged below zero
/// or onto 2π by rounding is folded back into range. Values already inside
/// the range are returned as-is, which makes the function exactly
/// idempotent. Non-finite input yields NaN.
pub fn mod2pi(angle: f64) -> f64 {
    if (0.0..TAU).contains(&angle) {
        return angle;
    }

    let b = angle / TAU;
    let mut a = TAU * (b - b.floor());
    if a < 0.0 {
        a += TAU;
    }
    if a >= TAU {
        a -= TAU;
    }
    a
}

/// Convert radians to hours of right ascension
pub fn radians_to_hours(radians: f64) -> f64 {
    radians * RAD2DEG * DEG2HOURS
}

/// Internal representation format for angle values
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
enum AngleFormat {
    /// Angle stored in degrees
    Degrees(f64),
    /// Angle stored in radians
    Radians(f64),
}

/// An angular measurement stored in the unit it was created with
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    angle: AngleFormat,
}

impl Angle {
    /// Creates an angle from a value in degrees
    ///
    /// ```rust
    /// use solarfield::coordinates::angle::Angle;
    ///
    /// let right_angle = Angle::from_degrees(90.0);
    /// assert_eq!(right_angle.to_degrees(), 90.0);
    /// ```
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            angle: AngleFormat::Degrees(degrees),
        }
    }

    /// Creates an angle from a value in radians
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            angle: AngleFormat::Radians(radians),
        }
    }

    /// Returns the angle value in degrees
    ///
    /// Exact when the angle was created in degrees.
    pub fn to_degrees(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg,
            AngleFormat::Radians(rad) => rad * RAD2DEG,
        }
    }

    /// Returns the angle value in radians
    ///
    /// Exact when the angle was created in radians.
    pub fn to_radians(&self) -> f64 {
        match self.angle {
            AngleFormat::Degrees(deg) => deg * DEG2RAD,
            AngleFormat::Radians(rad) => rad,
        }
    }
}
