//! Planetary ephemeris calculations module
//!
//! Approximate positions of the eight planets and Pluto from mean orbital
//! elements. An [`Ephemeris`] evaluates every body for one instant and
//! returns an immutable [`SolarSystem`] snapshot.

pub mod elements;
pub mod heliocentric;
pub mod kepler;
pub mod names;

pub use elements::OrbitalElements;
pub use heliocentric::heliocentric_position;
pub use kepler::true_anomaly;

use crate::celestial::{CelestialBody, CelestialObject, SolarSystem};
use crate::coordinates::cartesian::Cartesian3;
use crate::framelib::inertial::{EclipticToEquatorial, Equatorial};
use crate::time::{Clock, Epoch};
use chrono::{DateTime, Utc};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error type for planetary calculations
#[derive(Debug, Error)]
pub enum PlanetError {
    #[error("Planet not found: {0}")]
    NotFound(String),

    #[error("No geocentric position for {0}")]
    NoGeocentricPosition(Body),
}

/// Result type for planetary lookups
pub type Result<T> = std::result::Result<T, PlanetError>;

/// The bodies tracked by the ephemeris, in order of distance from the Sun
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Body {
    Mercury,
    Venus,
    /// The Earth-Moon barycenter
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    /// Every tracked body, innermost first
    pub const ALL: [Body; 9] = [
        Body::Mercury,
        Body::Venus,
        Body::Earth,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Get the body's name as a lowercase string
    pub fn name(&self) -> &'static str {
        match self {
            Body::Mercury => "mercury",
            Body::Venus => "venus",
            Body::Earth => "earth",
            Body::Mars => "mars",
            Body::Jupiter => "jupiter",
            Body::Saturn => "saturn",
            Body::Uranus => "uranus",
            Body::Neptune => "neptune",
            Body::Pluto => "pluto",
        }
    }

    /// NAIF ID of the body itself (199, 299, ... 999)
    pub fn naif_id(&self) -> i32 {
        self.barycenter_id() * 100 + 99
    }

    /// NAIF ID of the body's system barycenter (1 through 9)
    pub fn barycenter_id(&self) -> i32 {
        *self as i32 + 1
    }

    /// Mean orbital elements at `centuries` since J2000.0
    pub fn elements_at(&self, centuries: f64) -> OrbitalElements {
        OrbitalElements::at(*self, centuries)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = PlanetError;

    fn from_str(s: &str) -> Result<Self> {
        names::body_from_name(s).ok_or_else(|| PlanetError::NotFound(s.to_string()))
    }
}

/// Positions from a default [`Ephemeris`], i.e. with the J2000 obliquity.
/// Use [`Ephemeris::position`] when a different axial tilt is configured.
impl CelestialObject for Body {
    fn position_at(&self, epoch: &Epoch) -> crate::Result<Equatorial> {
        Ephemeris::default().position(*self, *epoch)
    }
}

/// Low-precision planetary ephemeris
///
/// Stateless apart from its configuration; one value can be shared freely
/// between threads and reused for any number of epochs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Ephemeris {
    frame: EclipticToEquatorial,
}

impl Ephemeris {
    /// Ephemeris using the J2000 obliquity of the ecliptic
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different axial tilt for the ecliptic to equatorial rotation
    pub fn with_axial_tilt_degrees(mut self, degrees: f64) -> Self {
        self.frame = EclipticToEquatorial::from_degrees(degrees);
        self
    }

    pub fn axial_tilt_degrees(&self) -> f64 {
        self.frame.obliquity_degrees()
    }

    /// Positions of every body at a UTC instant
    pub fn compute(&self, time: DateTime<Utc>) -> SolarSystem {
        self.compute_epoch(Epoch::from_datetime(time))
    }

    /// Positions of every body at the instant reported by `clock`
    pub fn compute_now<C: Clock + ?Sized>(&self, clock: &C) -> SolarSystem {
        self.compute_epoch(Epoch::now(clock))
    }

    /// Positions of every body at `epoch`
    pub fn compute_epoch(&self, epoch: Epoch) -> SolarSystem {
        let centuries = epoch.centuries();
        debug!("Computing solar system at {} (T = {:.9})", epoch, centuries);

        let earth = self.heliocentric(Body::Earth, centuries);
        let bodies: BTreeMap<Body, CelestialBody> = Body::ALL
            .into_iter()
            .map(|body| {
                let state = if body == Body::Earth {
                    CelestialBody::new(body, earth.0, earth.1, None)
                } else {
                    self.state_relative_to(body, centuries, &earth.1)
                };
                (body, state)
            })
            .collect();

        SolarSystem::new(epoch, bodies)
    }

    /// State of a single body at `epoch`
    pub fn body_state(&self, body: Body, epoch: Epoch) -> CelestialBody {
        let centuries = epoch.centuries();
        let (elements, earth) = self.heliocentric(Body::Earth, centuries);
        if body == Body::Earth {
            return CelestialBody::new(body, elements, earth, None);
        }
        self.state_relative_to(body, centuries, &earth)
    }

    /// Geocentric position of a single body; an error for Earth
    pub fn position(&self, body: Body, epoch: Epoch) -> crate::Result<Equatorial> {
        self.body_state(body, epoch)
            .equatorial
            .ok_or_else(|| PlanetError::NoGeocentricPosition(body).into())
    }

    fn heliocentric(&self, body: Body, centuries: f64) -> (OrbitalElements, Cartesian3) {
        let elements = body.elements_at(centuries);
        (elements, heliocentric_position(body, &elements))
    }

    fn state_relative_to(
        &self,
        body: Body,
        centuries: f64,
        earth_heliocentric: &Cartesian3,
    ) -> CelestialBody {
        let (elements, helio) = self.heliocentric(body, centuries);
        let equatorial = self.frame.project(body, &helio, earth_heliocentric);

        if let Some(eq) = &equatorial {
            trace!(
                "{}: r={:.6} AU ra={:.6}h dec={:.6}° dist={:.6} AU",
                body,
                helio.magnitude(),
                eq.ra_hours(),
                eq.dec_degrees(),
                eq.distance
            );
        }

        CelestialBody::new(body, elements, helio, equatorial)
    }
}
