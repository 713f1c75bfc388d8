//! Constants module for astronomical calculations

use std::f64::consts::PI;

// Time constants
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;
/// J2000.0 epoch as Julian date
pub const J2000: f64 = 2_451_545.0;
/// Days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;
/// Short-form day number of 2000-01-01 12:00, see `time::calendar`
pub const J2000_DAY_NUMBER: f64 = 730_531.5;

// Angles
/// Arcseconds in a degree
pub const ASEC_PER_DEG: f64 = 3_600.0;
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Degrees to hours of right ascension
pub const DEG2HOURS: f64 = 24.0 / 360.0;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Earth constants
/// Obliquity of the ecliptic at J2000.0 in degrees
pub const OBLIQUITY_J2000_DEG: f64 = 23.439_281;
