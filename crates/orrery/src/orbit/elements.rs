use glam::DVec2;

use crate::error::{OrbitError, OrbitResult};
use crate::orbit::position;

/// Fixed orbital elements of one body.
///
/// Only obtainable through [`OrbitalElements::new`], so a value of this type
/// always satisfies `a > 0` and `0 <= e < 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    semi_major_axis: f64,
    eccentricity: f64,
    angular_speed: f64,
    initial_anomaly: f64,
}

impl OrbitalElements {
    /// Validate and build a set of elements.
    ///
    /// `angular_speed` is the base anomaly rate per tick (scaled by the
    /// simulation clock); `initial_anomaly` is the true anomaly at time zero
    /// in radians.
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        angular_speed: f64,
        initial_anomaly: f64,
    ) -> OrbitResult<Self> {
        if !semi_major_axis.is_finite() || semi_major_axis <= 0.0 {
            return Err(OrbitError::invalid(format!(
                "semi-major axis must be positive, got {semi_major_axis}"
            )));
        }
        if !eccentricity.is_finite() || !(0.0..1.0).contains(&eccentricity) {
            return Err(OrbitError::invalid(format!(
                "eccentricity {eccentricity} outside [0, 1)"
            )));
        }
        if !angular_speed.is_finite() {
            return Err(OrbitError::invalid(format!(
                "angular speed must be finite, got {angular_speed}"
            )));
        }
        if !initial_anomaly.is_finite() {
            return Err(OrbitError::invalid(format!(
                "initial anomaly must be finite, got {initial_anomaly}"
            )));
        }

        Ok(Self {
            semi_major_axis,
            eccentricity,
            angular_speed,
            initial_anomaly,
        })
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn angular_speed(&self) -> f64 {
        self.angular_speed
    }

    pub fn initial_anomaly(&self) -> f64 {
        self.initial_anomaly
    }

    /// Planar position at true anomaly `angle`.
    pub fn position_at(&self, angle: f64) -> DVec2 {
        position::position_at(self.semi_major_axis, self.eccentricity, angle)
    }

    pub fn periapsis(&self) -> f64 {
        position::periapsis_distance(self.semi_major_axis, self.eccentricity)
    }

    pub fn apoapsis(&self) -> f64 {
        position::apoapsis_distance(self.semi_major_axis, self.eccentricity)
    }
}
