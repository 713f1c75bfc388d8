//! Mean to true anomaly conversion
//!
//! Kepler's equation `M = E − e·sin E` is not iterated here. The eccentric
//! anomaly comes from the closed-form second-order expansion
//! `E ≈ M + e·sin M·(1 + e·cos M)`, which is adequate for planetary
//! eccentricities and keeps results reproducible against the element table
//! it was paired with. Pluto (e ≈ 0.25) is the worst case, with errors in E
//! of up to about half a degree.

/// Approximate eccentric anomaly for mean anomaly `m` (radians)
pub fn eccentric_anomaly(m: f64, e: f64) -> f64 {
    m + e * m.sin() * (1.0 + e * m.cos())
}

/// True anomaly for mean anomaly `m` (radians) and eccentricity `e`
///
/// Returns a value in `(-π, π]`. Only elliptic orbits (`0 ≤ e < 1`) are
/// meaningful.
pub fn true_anomaly(m: f64, e: f64) -> f64 {
    debug_assert!((0.0..1.0).contains(&e), "eccentricity {} outside [0, 1)", e);

    let ea = eccentric_anomaly(m, e);
    2.0 * (((1.0 + e) / (1.0 - e)).sqrt() * (0.5 * ea).tan()).atan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::angle::mod2pi;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::PI;

    #[test]
    fn test_circular_orbit_is_identity() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let m = rng.gen_range(-PI + 1e-6..PI - 1e-6);
            assert_relative_eq!(true_anomaly(m, 0.0), m, epsilon = 1e-12);
            assert_eq!(eccentric_anomaly(m, 0.0), m);
        }
    }

    #[test]
    fn test_circular_orbit_outside_principal_range() {
        // Same direction, reported in (-π, π]
        for m in [4.0, -4.0, 10.0, 100.0] {
            assert_relative_eq!(mod2pi(true_anomaly(m, 0.0)), mod2pi(m), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_apsides_are_fixed_points() {
        for e in [0.0, 0.0167, 0.0934, 0.2488] {
            assert_eq!(true_anomaly(0.0, e), 0.0);
            assert_relative_eq!(true_anomaly(PI, e).abs(), PI, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_true_anomaly_leads_mean_anomaly_after_perihelion() {
        // Between perihelion and aphelion the body runs ahead of the mean
        let e = 0.2;
        for step in 1..18 {
            let m = step as f64 * PI / 18.0;
            let v = true_anomaly(m, e);
            assert!(v > m, "v={} should exceed m={}", v, m);
        }
    }

    #[test]
    fn test_close_to_exact_solution_for_small_eccentricity() {
        // Check against Kepler's equation: E - e sin E should reproduce M
        let e = 0.0167;
        for step in 0..36 {
            let m = step as f64 * PI / 18.0 - PI;
            let ea = eccentric_anomaly(m, e);
            assert!((ea - e * ea.sin() - m).abs() < 1e-5);
        }
    }
}
