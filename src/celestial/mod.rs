//! Celestial body definitions and computed solar-system snapshots

use crate::coordinates::cartesian::Cartesian3;
use crate::framelib::inertial::Equatorial;
use crate::planetlib::{Body, OrbitalElements, PlanetError};
use crate::time::Epoch;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A trait for objects that have a position in the sky
pub trait CelestialObject {
    /// Get the geocentric position of the object at a specific epoch
    fn position_at(&self, epoch: &Epoch) -> Result<Equatorial>;
}

/// The computed state of one body at one epoch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    pub body: Body,
    /// Orbital elements the positions were derived from
    pub elements: OrbitalElements,
    /// Position relative to the Sun, ecliptic frame, AU
    pub heliocentric: Cartesian3,
    /// Position seen from Earth; `None` for Earth itself
    pub equatorial: Option<Equatorial>,
}

impl CelestialBody {
    pub fn new(
        body: Body,
        elements: OrbitalElements,
        heliocentric: Cartesian3,
        equatorial: Option<Equatorial>,
    ) -> Self {
        Self {
            body,
            elements,
            heliocentric,
            equatorial,
        }
    }

    pub fn name(&self) -> &'static str {
        self.body.name()
    }

    /// Right ascension in hours
    pub fn right_ascension(&self) -> Option<f64> {
        self.equatorial.map(|eq| eq.ra_hours())
    }

    /// Declination in degrees
    pub fn declination(&self) -> Option<f64> {
        self.equatorial.map(|eq| eq.dec_degrees())
    }

    /// Distance from Earth in AU
    pub fn geocentric_distance(&self) -> Option<f64> {
        self.equatorial.map(|eq| eq.distance)
    }
}

/// Every tracked body computed for a single epoch
///
/// Built in one pass by [`crate::planetlib::Ephemeris`] and never modified
/// afterwards, so a snapshot is always internally consistent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarSystem {
    epoch: Epoch,
    bodies: BTreeMap<Body, CelestialBody>,
}

impl SolarSystem {
    pub(crate) fn new(epoch: Epoch, bodies: BTreeMap<Body, CelestialBody>) -> Self {
        Self { epoch, bodies }
    }

    pub fn epoch(&self) -> Epoch {
        self.epoch
    }

    /// State of a body
    pub fn body(&self, body: Body) -> Option<&CelestialBody> {
        self.bodies.get(&body)
    }

    /// State of a body by name (see [`crate::planetlib::names`])
    pub fn get(&self, name: &str) -> Result<&CelestialBody> {
        let body: Body = name.parse()?;
        self.body(body)
            .ok_or_else(|| PlanetError::NotFound(name.to_string()).into())
    }

    /// Geocentric coordinates of a body; an error for Earth
    pub fn equatorial(&self, name: &str) -> Result<Equatorial> {
        let state = self.get(name)?;
        state
            .equatorial
            .ok_or_else(|| PlanetError::NoGeocentricPosition(state.body).into())
    }

    /// Right ascension in hours
    pub fn right_ascension(&self, name: &str) -> Result<f64> {
        Ok(self.equatorial(name)?.ra_hours())
    }

    /// Declination in degrees
    pub fn declination(&self, name: &str) -> Result<f64> {
        Ok(self.equatorial(name)?.dec_degrees())
    }

    /// Bodies in heliocentric order
    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.values()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl<'a> IntoIterator for &'a SolarSystem {
    type Item = &'a CelestialBody;
    type IntoIter = std::collections::btree_map::Values<'a, Body, CelestialBody>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.values()
    }
}
