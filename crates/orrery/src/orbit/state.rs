use glam::DVec2;

use crate::core::clock::SimulationClock;
use crate::orbit::elements::OrbitalElements;
use crate::orbit::position::wrap_angle;

/// Mutable per-body orbital state: the current true anomaly.
///
/// Always kept in `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalState {
    current_anomaly: f64,
}

impl OrbitalState {
    /// State at time zero for the given elements.
    pub fn new(elements: &OrbitalElements) -> Self {
        Self::at_anomaly(elements.initial_anomaly())
    }

    /// State at an arbitrary anomaly (wrapped into range).
    pub fn at_anomaly(anomaly: f64) -> Self {
        Self {
            current_anomaly: wrap_angle(anomaly),
        }
    }

    pub fn current_anomaly(&self) -> f64 {
        self.current_anomaly
    }

    /// Advance in place by `delta` radians. Negative deltas run retrograde.
    pub fn advance_by(&mut self, delta: f64) {
        if delta != 0.0 {
            self.current_anomaly = wrap_angle(self.current_anomaly + delta);
        }
    }

    /// Position of the body for this state.
    pub fn position(&self, elements: &OrbitalElements) -> DVec2 {
        elements.position_at(self.current_anomaly)
    }
}

/// Integrator step: returns the state after adding `delta_anomaly` radians.
///
/// The step depends only on the delta; `elements` names the body being advanced.
pub fn advance(state: OrbitalState, _elements: &OrbitalElements, delta_anomaly: f64) -> OrbitalState {
    let mut next = state;
    next.advance_by(delta_anomaly);
    next
}

/// Anomaly increment for one tick: `angular_speed * speed_multiplier * tick_scale`.
/// Zero while the clock is paused.
pub fn delta_for(elements: &OrbitalElements, clock: &SimulationClock) -> f64 {
    if clock.is_paused() {
        return 0.0;
    }
    elements.angular_speed() * clock.speed_multiplier() * clock.tick_scale()
}
