//! Body names and NAIF ID numbers
//!
//! Maps the names a caller may use for a tracked body onto [`Body`]. The
//! lookup is case-insensitive and accepts the SPICE spellings of the planet
//! and its system barycenter as well as the numeric NAIF IDs.

use super::Body;
use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    /// Map from lowercase names and aliases to bodies
    static ref BODY_NAMES: HashMap<String, Body> = {
        let mut m = HashMap::new();
        for &(body, name) in BODY_NAME_PAIRS.iter() {
            m.insert(name.to_lowercase(), body);
        }
        for body in Body::ALL {
            m.insert(body.name().to_string(), body);
            m.insert(body.naif_id().to_string(), body);
            m.insert(body.barycenter_id().to_string(), body);
        }
        m
    };
}

/// Find the body a name refers to
pub fn body_from_name(name: &str) -> Option<Body> {
    BODY_NAMES.get(&name.trim().to_lowercase()).copied()
}

/// Pairs of (body, alias) beyond the canonical lowercase name
const BODY_NAME_PAIRS: &[(Body, &str)] = &[
    (Body::Mercury, "MERCURY_BARYCENTER"),
    (Body::Mercury, "MERCURY BARYCENTER"),
    (Body::Venus, "VENUS_BARYCENTER"),
    (Body::Venus, "VENUS BARYCENTER"),
    (Body::Earth, "EARTH_BARYCENTER"),
    (Body::Earth, "EMB"),
    (Body::Earth, "EARTH MOON BARYCENTER"),
    (Body::Earth, "EARTH-MOON BARYCENTER"),
    (Body::Earth, "EARTH BARYCENTER"),
    (Body::Mars, "MARS_BARYCENTER"),
    (Body::Mars, "MARS BARYCENTER"),
    (Body::Jupiter, "JUPITER_BARYCENTER"),
    (Body::Jupiter, "JUPITER BARYCENTER"),
    (Body::Saturn, "SATURN_BARYCENTER"),
    (Body::Saturn, "SATURN BARYCENTER"),
    (Body::Uranus, "URANUS_BARYCENTER"),
    (Body::Uranus, "URANUS BARYCENTER"),
    (Body::Neptune, "NEPTUNE_BARYCENTER"),
    (Body::Neptune, "NEPTUNE BARYCENTER"),
    (Body::Pluto, "PLUTO_BARYCENTER"),
    (Body::Pluto, "PLUTO BARYCENTER"),
];
