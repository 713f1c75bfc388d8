//! Solarfield: low-precision planetary positions for a moment in time
//!
//! Evaluates the JPL mean orbital elements of the planets and Pluto for an
//! instant, places each body around the Sun, and reports where it appears
//! on the sky from Earth as right ascension and declination.
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//!
//! let time = Utc.with_ymd_and_hms(2024, 4, 8, 18, 0, 0).unwrap();
//! let system = solarfield::compute(Some(time));
//!
//! let ra = system.right_ascension("jupiter").unwrap();
//! let dec = system.declination("jupiter").unwrap();
//! assert!((ra - 3.096).abs() < 1e-3);
//! assert!((dec - 16.602).abs() < 1e-3);
//! ```

use chrono::{DateTime, Utc};
use thiserror::Error;

pub mod celestial;
pub mod constants;
pub mod coordinates;
pub mod framelib;
pub mod planetlib;
pub mod time;

// Re-export commonly used types
pub use celestial::{CelestialBody, CelestialObject, SolarSystem};
pub use coordinates::{Cartesian3, Equatorial};
pub use planetlib::{Body, Ephemeris, OrbitalElements};
pub use time::{CalendarTuple, Clock, Epoch, FixedClock, SystemClock};

/// Main error type for the solarfield library
#[derive(Debug, Error)]
pub enum SolarfieldError {
    #[error("Time error: {0}")]
    Time(#[from] time::TimeError),

    #[error("Planet error: {0}")]
    Planet(#[from] planetlib::PlanetError),
}

/// Result type for solarfield operations
pub type Result<T> = std::result::Result<T, SolarfieldError>;

/// Positions of every tracked body at `time`, or at the current instant
/// when `time` is `None`
pub fn compute(time: Option<DateTime<Utc>>) -> SolarSystem {
    let ephemeris = Ephemeris::default();
    match time {
        Some(time) => ephemeris.compute(time),
        None => ephemeris.compute_now(&SystemClock),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_compute_with_explicit_time() {
        let time = Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap();
        let system = compute(Some(time));
        assert_eq!(system.epoch(), Epoch::j2000());
        assert_eq!(system.len(), 9);
    }

    #[test]
    fn test_compute_defaults_to_now() {
        let before = Epoch::now(&SystemClock);
        let system = compute(None);
        let after = Epoch::now(&SystemClock);
        assert!(system.epoch() >= before);
        assert!(system.epoch() <= after);
    }

    #[test]
    fn test_errors_convert() {
        let err: SolarfieldError = planetlib::PlanetError::NotFound("x".into()).into();
        assert_eq!(err.to_string(), "Planet error: Planet not found: x");

        let err: SolarfieldError = Epoch::from_calendar((2023, 2_u32, 30_u32))
            .unwrap_err()
            .into();
        assert!(matches!(err, SolarfieldError::Time(_)));
    }
}
