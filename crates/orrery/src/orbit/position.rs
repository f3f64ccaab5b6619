//! Polar conic-section position model — pure math, no engine dependencies.
//!
//! Uses f64 throughout. The bridge converts to f32 only when packing
//! buffers for the renderer.
use std::f64::consts::TAU;

use glam::DVec2;

/// Map any finite angle into `[0, 2π)`.
///
/// Works for arbitrarily large or negative inputs (whole turns are removed,
/// not a single conditional subtraction).
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

/// Semi-latus rectum `p = a (1 - e²)`.
pub fn semi_latus_rectum(semi_major_axis: f64, eccentricity: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentricity)
}

/// Distance from the focus at true anomaly `angle`: `r = p / (1 + e cos θ)`.
///
/// For `e` in `[0, 1)` the denominator is strictly greater than `1 - e`,
/// so the result is always finite and positive.
pub fn radius_at(semi_major_axis: f64, eccentricity: f64, angle: f64) -> f64 {
    semi_latus_rectum(semi_major_axis, eccentricity) / (1.0 + eccentricity * angle.cos())
}

/// Planar position at true anomaly `angle`, measured from the periapsis
/// direction, with the attracting body at the origin.
///
/// Inputs are assumed valid; `OrbitalElements::new` is where they get checked.
pub fn position_at(semi_major_axis: f64, eccentricity: f64, angle: f64) -> DVec2 {
    let r = radius_at(semi_major_axis, eccentricity, angle);
    DVec2::new(r * angle.cos(), r * angle.sin())
}

/// Closest approach `a (1 - e)`.
pub fn periapsis_distance(semi_major_axis: f64, eccentricity: f64) -> f64 {
    semi_major_axis * (1.0 - eccentricity)
}

/// Farthest point `a (1 + e)`.
pub fn apoapsis_distance(semi_major_axis: f64, eccentricity: f64) -> f64 {
    semi_major_axis * (1.0 + eccentricity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    #[test]
    fn circular_orbit_has_constant_radius() {
        for a in [0.5, 10.0, 75.0, 506.0] {
            for i in 0..32 {
                let theta = i as f64 * 0.37 - 4.0;
                let p = position_at(a, 0.0, theta);
                assert!((p.length() - a).abs() < EPS, "a={a} theta={theta} r={}", p.length());
            }
        }
    }

    #[test]
    fn periapsis_and_apoapsis_bound_the_radius() {
        let cases = [(10.0, 0.2056), (20.0, 0.0167), (75.0, 0.2488), (30.0, 0.079)];
        for (a, e) in cases {
            let peri = position_at(a, e, 0.0).length();
            let apo = position_at(a, e, PI).length();
            assert!((peri - a * (1.0 - e)).abs() < EPS, "peri {peri}");
            assert!((apo - a * (1.0 + e)).abs() < EPS, "apo {apo}");
            assert!((peri - periapsis_distance(a, e)).abs() < EPS);
            assert!((apo - apoapsis_distance(a, e)).abs() < EPS);

            for i in 0..64 {
                let r = radius_at(a, e, i as f64 * TAU / 64.0);
                assert!(r >= peri - EPS && r <= apo + EPS, "r={r} outside [{peri}, {apo}]");
            }
        }
    }

    #[test]
    fn periapsis_lies_on_positive_x_axis() {
        let p = position_at(25.0, 0.0934, 0.0);
        assert!(p.y.abs() < EPS);
        assert!(p.x > 0.0);
    }

    #[test]
    fn sedna_high_eccentricity_stays_finite() {
        let (a, e) = (506.0, 0.855);
        let peri = position_at(a, e, 0.0).length();
        let apo = position_at(a, e, PI).length();
        assert!((peri - 73.37).abs() < 0.01, "periapsis {peri}");
        assert!((apo - 938.63).abs() < 0.01, "apoapsis {apo}");

        for i in 0..1024 {
            let p = position_at(a, e, i as f64 * TAU / 1024.0);
            assert!(p.x.is_finite() && p.y.is_finite());
        }
    }

    #[test]
    fn near_parabolic_eccentricity_has_no_singularity() {
        let r = radius_at(1.0, 0.999_999, PI);
        assert!(r.is_finite() && r > 0.0);
    }

    #[test]
    fn wrap_angle_lands_in_range() {
        for theta in [0.0, 1.0, TAU, -TAU, -1e-18, 7.5, -7.5, 1e6, -1e6, 123.0 * TAU] {
            let w = wrap_angle(theta);
            assert!((0.0..TAU).contains(&w), "wrap({theta}) = {w}");
        }
    }

    #[test]
    fn wrap_angle_is_idempotent() {
        for theta in [-20.0, -PI, 0.3, 4.0, 50.0, 1e9] {
            let once = wrap_angle(theta);
            assert_eq!(wrap_angle(once), once);
        }
    }

    #[test]
    fn wrap_angle_removes_whole_turns() {
        assert!((wrap_angle(3.0 * TAU + 0.5) - 0.5).abs() < EPS);
        assert!((wrap_angle(-0.5) - (TAU - 0.5)).abs() < EPS);
    }
}
