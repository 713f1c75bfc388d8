//! Keplerian orbital elements for approximate planetary positions
//!
//! Each body has a first-order fit in time to its mean elements, taken from
//! the JPL table "Keplerian Elements for Approximate Positions of the Major
//! Planets" (J2000 ecliptic and equinox, E. M. Standish). A value is
//! `base + rate·T` with `T` in Julian centuries from J2000.0. Angular rates
//! are tabulated in arcseconds per century.
//!
//! These are mean elements, not osculating ones; positions built from them
//! are good to a fraction of a degree for the inner planets over 1800-2050.

use super::Body;
use crate::constants::ASEC_PER_DEG;
use crate::coordinates::angle::Angle;
use serde::{Deserialize, Serialize};

/// Orbital elements of one body at one epoch
///
/// Distances are in AU and angles in radians. Angles are not wrapped:
/// the mean longitude in particular keeps accumulating whole turns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Semi-major axis (AU)
    pub a: f64,
    /// Eccentricity
    pub e: f64,
    /// Inclination to the ecliptic
    pub i: f64,
    /// Longitude of the ascending node, Ω
    pub o: f64,
    /// Longitude of perihelion, ϖ
    pub w: f64,
    /// Mean longitude, L
    pub l: f64,
}

impl OrbitalElements {
    /// Evaluate the element table of `body` at `centuries` since J2000.0
    pub fn at(body: Body, centuries: f64) -> Self {
        element_table(body).evaluate(centuries)
    }

    /// Mean anomaly `M = L − ϖ`
    pub fn mean_anomaly(&self) -> f64 {
        self.l - self.w
    }

    /// Argument of perihelion `ω = ϖ − Ω`
    pub fn argument_of_perihelion(&self) -> f64 {
        self.w - self.o
    }

    pub fn perihelion_distance(&self) -> f64 {
        self.a * (1.0 - self.e)
    }

    pub fn aphelion_distance(&self) -> f64 {
        self.a * (1.0 + self.e)
    }
}

/// Tabulated `(base, rate per century)` pairs for one body
///
/// `a` in AU and AU/cy, `e` dimensionless per cy, angles in degrees and
/// arcseconds per cy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementTable {
    pub a: (f64, f64),
    pub e: (f64, f64),
    pub i: (f64, f64),
    pub o: (f64, f64),
    pub w: (f64, f64),
    pub l: (f64, f64),
}

impl ElementTable {
    pub fn evaluate(&self, centuries: f64) -> OrbitalElements {
        let linear = |(base, rate): (f64, f64)| base + rate * centuries;
        let angle = |(deg, asec_rate): (f64, f64)| {
            Angle::from_degrees(deg + asec_rate * centuries / ASEC_PER_DEG).to_radians()
        };

        OrbitalElements {
            a: linear(self.a),
            e: linear(self.e),
            i: angle(self.i),
            o: angle(self.o),
            w: angle(self.w),
            l: angle(self.l),
        }
    }
}

/// The element table row for `body`
pub fn element_table(body: Body) -> &'static ElementTable {
    match body {
        Body::Mercury => &MERCURY,
        Body::Venus => &VENUS,
        Body::Earth => &EARTH,
        Body::Mars => &MARS,
        Body::Jupiter => &JUPITER,
        Body::Saturn => &SATURN,
        Body::Uranus => &URANUS,
        Body::Neptune => &NEPTUNE,
        Body::Pluto => &PLUTO,
    }
}

const MERCURY: ElementTable = ElementTable {
    a: (0.38709893, 0.00000066),
    e: (0.20563069, 0.00002527),
    i: (7.00487, -23.51),
    o: (48.33167, -446.30),
    w: (77.45645, 573.57),
    l: (252.25084, 538101628.29),
};

const VENUS: ElementTable = ElementTable {
    a: (0.72333199, 0.00000092),
    e: (0.00677323, -0.00004938),
    i: (3.39471, -2.86),
    o: (76.68069, -996.89),
    w: (131.53298, -108.80),
    l: (181.97973, 210664136.06),
};

// Earth-Moon barycenter
const EARTH: ElementTable = ElementTable {
    a: (1.00000011, -0.00000005),
    e: (0.01671022, -0.00003804),
    i: (0.00005, -46.94),
    o: (-11.26064, -18228.25),
    w: (102.94719, 1198.28),
    l: (100.46435, 129597740.63),
};

const MARS: ElementTable = ElementTable {
    a: (1.52366231, -0.00007221),
    e: (0.09341233, 0.00011902),
    i: (1.85061, -25.47),
    o: (49.57854, -1020.19),
    w: (336.04084, 1560.78),
    l: (355.45332, 68905103.78),
};

const JUPITER: ElementTable = ElementTable {
    a: (5.20336301, 0.00060737),
    e: (0.04839266, -0.00012880),
    i: (1.30530, -4.15),
    o: (100.55615, 1217.17),
    w: (14.75385, 839.93),
    l: (34.40438, 10925078.35),
};

const SATURN: ElementTable = ElementTable {
    a: (9.53707032, -0.00301530),
    e: (0.05415060, -0.00036762),
    i: (2.48446, 6.11),
    o: (113.71504, -1591.05),
    w: (92.43194, -1948.89),
    l: (49.94432, 4401052.95),
};

const URANUS: ElementTable = ElementTable {
    a: (19.19126393, 0.00152025),
    e: (0.04716771, -0.00019150),
    i: (0.76986, -2.09),
    o: (74.22988, -1681.40),
    w: (170.96424, 1312.56),
    l: (313.23218, 1542547.79),
};

const NEPTUNE: ElementTable = ElementTable {
    a: (30.06896348, -0.00125196),
    e: (0.00858587, 0.00002510),
    i: (1.76917, -3.64),
    o: (131.72169, -151.25),
    w: (44.97135, -844.43),
    l: (304.88003, 786449.21),
};

const PLUTO: ElementTable = ElementTable {
    a: (39.48168677, -0.00076912),
    e: (0.24880766, 0.00006465),
    i: (17.14175, 11.07),
    o: (110.30347, -37.33),
    w: (224.06676, -132.25),
    l: (238.92881, 522747.90),
};

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[test]
    fn test_earth_mean_longitude_at_j2000() {
        let earth = OrbitalElements::at(Body::Earth, 0.0);
        assert_relative_eq!(earth.l, 100.46435_f64.to_radians(), epsilon = 1e-15);
        assert_eq!(earth.a, 1.00000011);
        assert_eq!(earth.e, 0.01671022);
    }

    #[rstest]
    #[case(Body::Mercury)]
    #[case(Body::Venus)]
    #[case(Body::Earth)]
    #[case(Body::Mars)]
    #[case(Body::Jupiter)]
    #[case(Body::Saturn)]
    #[case(Body::Uranus)]
    #[case(Body::Neptune)]
    #[case(Body::Pluto)]
    fn test_elements_stay_physical(#[case] body: Body) {
        // Five centuries either side of J2000
        for step in -50..=50 {
            let t = step as f64 / 10.0;
            let el = OrbitalElements::at(body, t);
            assert!(el.a > 0.0, "{} a={} at T={}", body, el.a, t);
            assert!(
                (0.0..1.0).contains(&el.e),
                "{} e={} at T={}",
                body,
                el.e,
                t
            );
            assert!(el.perihelion_distance() > 0.0);
            assert!(el.aphelion_distance() > el.perihelion_distance());
        }
    }

    #[test]
    fn test_semi_major_axes_are_ordered() {
        let axes: Vec<f64> = Body::ALL
            .iter()
            .map(|&b| OrbitalElements::at(b, 0.0).a)
            .collect();
        assert!(axes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_mean_motion_over_one_century() {
        // Earth's mean longitude advances ~100 turns per century
        let start = OrbitalElements::at(Body::Earth, 0.0);
        let end = OrbitalElements::at(Body::Earth, 1.0);
        let turns = (end.l - start.l).to_degrees() / 360.0;
        assert_relative_eq!(turns, 100.0, epsilon = 0.01);
    }

    #[test]
    fn test_angular_rates_are_arcseconds() {
        let start = OrbitalElements::at(Body::Mercury, 0.0);
        let end = OrbitalElements::at(Body::Mercury, 1.0);
        assert_relative_eq!(
            (end.i - start.i).to_degrees() * 3600.0,
            -23.51,
            epsilon = 1e-8
        );
        assert_relative_eq!(
            (end.o - start.o).to_degrees() * 3600.0,
            -446.30,
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_derived_angles() {
        let mars = OrbitalElements::at(Body::Mars, 0.0);
        assert_relative_eq!(
            mars.mean_anomaly(),
            (355.45332_f64 - 336.04084).to_radians(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            mars.argument_of_perihelion(),
            (336.04084_f64 - 49.57854).to_radians(),
            epsilon = 1e-12
        );
    }
}
