use glam::{DVec2, Vec3};

use crate::core::clock::SimulationClock;
use crate::core::plane::OrbitPlane;
use crate::error::{OrbitError, OrbitResult};
use crate::orbit::{delta_for, OrbitTrace};
use crate::system::body::Body;
use crate::system::catalog::{SunConfig, SystemConfig};

/// Simulation state owned by the renderer: every body plus the shared clock.
///
/// Each body owns its state exclusively; the clock is only read during a
/// tick, and mutation needs `&mut self`, so speed changes land between ticks.
#[derive(Debug, Clone)]
pub struct Simulation {
    bodies: Vec<Body>,
    clock: SimulationClock,
    plane: OrbitPlane,
    sun: SunConfig,
}

impl Simulation {
    /// Build every body from configuration. The first invalid body aborts
    /// construction; the caller decides whether to skip, substitute or stop.
    pub fn from_config(config: &SystemConfig) -> OrbitResult<Self> {
        let clock = SimulationClock::new(config.tick_scale, config.speed)?;
        let bodies = config
            .bodies
            .iter()
            .map(|b| Body::from_config(b, config.segments_for(b), config.orbit.color))
            .collect::<OrbitResult<Vec<_>>>()?;

        log::info!(
            "simulation: {} bodies, tick scale {}, plane {:?}",
            bodies.len(),
            config.tick_scale,
            config.plane
        );

        Ok(Self {
            bodies,
            clock,
            plane: config.plane,
            sun: config.sun,
        })
    }

    /// Build from configuration, dropping invalid bodies instead of failing.
    /// Invalid speed settings fall back to the default clock. Returns the
    /// simulation and the errors for everything that was replaced or skipped.
    pub fn from_config_lenient(config: &SystemConfig) -> (Self, Vec<OrbitError>) {
        let mut bodies = Vec::with_capacity(config.bodies.len());
        let mut skipped = Vec::new();
        let clock = SimulationClock::new(config.tick_scale, config.speed).unwrap_or_else(|e| {
            log::warn!("using default speed settings: {e}");
            skipped.push(e);
            SimulationClock::default()
        });
        for b in &config.bodies {
            match Body::from_config(b, config.segments_for(b), config.orbit.color) {
                Ok(body) => bodies.push(body),
                Err(e) => {
                    log::warn!("skipping body: {e}");
                    skipped.push(e);
                }
            }
        }
        let sim = Self {
            bodies,
            clock,
            plane: config.plane,
            sun: config.sun,
        };
        (sim, skipped)
    }

    /// Advance every body by one tick. No-op while paused.
    pub fn tick(&mut self) {
        if self.clock.is_paused() {
            return;
        }
        for body in &mut self.bodies {
            let delta = delta_for(body.elements(), &self.clock);
            body.advance(delta);
        }
        self.clock.record_tick();
    }

    /// Run `n` ticks.
    pub fn step(&mut self, n: u32) {
        for _ in 0..n {
            self.tick();
        }
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, name: &str) -> Option<&Body> {
        self.bodies.iter().find(|b| b.name() == name)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn clock(&self) -> &SimulationClock {
        &self.clock
    }

    pub fn plane(&self) -> OrbitPlane {
        self.plane
    }

    pub fn sun(&self) -> &SunConfig {
        &self.sun
    }

    pub fn speed_multiplier(&self) -> f64 {
        self.clock.speed_multiplier()
    }

    /// Change the global speed. See [`SimulationClock::set_speed_multiplier`].
    pub fn set_speed_multiplier(&mut self, speed: f64) -> OrbitResult<f64> {
        self.clock.set_speed_multiplier(speed)
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.clock.toggle_pause()
    }

    /// Planar position of every body, in catalog order.
    pub fn positions(&self) -> impl Iterator<Item = (&str, DVec2)> + '_ {
        self.bodies.iter().map(|b| (b.name(), b.position()))
    }

    /// World-space position of body `index`, embedded in the orbit plane.
    pub fn position_3d(&self, index: usize) -> Option<Vec3> {
        self.bodies.get(index).map(|b| self.plane.embed(b.position()))
    }

    /// One closed trace per body, in catalog order.
    pub fn traces(&self) -> impl Iterator<Item = OrbitTrace> + '_ {
        self.bodies.iter().map(Body::trace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::position_at;
    use crate::system::catalog::default_bodies;

    fn default_sim() -> Simulation {
        Simulation::from_config(&SystemConfig::default()).unwrap()
    }

    #[test]
    fn builds_default_catalog() {
        let sim = default_sim();
        assert_eq!(sim.len(), 11);
        assert!(sim.body("Ceres").is_some());
        assert_eq!(sim.speed_multiplier(), 1.0);
    }

    #[test]
    fn earth_single_tick_scenario() {
        let config = SystemConfig {
            bodies: vec![crate::system::catalog::BodyConfig {
                true_anomaly: 0.0,
                ..default_bodies().into_iter().find(|b| b.name == "Earth").unwrap()
            }],
            ..SystemConfig::default()
        };
        let mut sim = Simulation::from_config(&config).unwrap();
        let before_anomaly = sim.bodies()[0].anomaly();
        let before_pos = sim.bodies()[0].position();
        assert_eq!(before_pos, position_at(20.0, 0.0167, before_anomaly));

        sim.tick();

        let after_anomaly = sim.bodies()[0].anomaly();
        assert!((after_anomaly - before_anomaly - 0.0002).abs() < 1e-15);
        assert_eq!(sim.bodies()[0].position(), position_at(20.0, 0.0167, after_anomaly));
    }

    #[test]
    fn sedna_periapsis_and_apoapsis() {
        let sim = default_sim();
        let sedna = sim.body("Sedna").unwrap().elements();
        assert!((sedna.periapsis() - 73.37).abs() < 0.01);
        assert!((sedna.apoapsis() - 938.63).abs() < 0.01);
        // Epoch anomaly ~π puts Sedna near aphelion.
        assert!((sim.body("Sedna").unwrap().distance() - 938.63).abs() < 0.1);
    }

    #[test]
    fn first_invalid_body_fails_construction() {
        let mut config = SystemConfig::default();
        config.bodies[3].eccentricity = -0.01;
        let err = Simulation::from_config(&config).unwrap_err();
        assert!(err.is_invalid_elements());
        assert!(err.to_string().contains("Mars"));
    }

    #[test]
    fn inverted_speed_range_fails_construction() {
        let json = r#"{ "bodies": [], "speed": { "min": 10, "max": 1, "step": 1, "defaultValue": 5 } }"#;
        let config = SystemConfig::from_json(json).unwrap();
        assert!(matches!(
            Simulation::from_config(&config),
            Err(OrbitError::InvalidSpeedRange { .. })
        ));
    }

    #[test]
    fn non_positive_default_speed_fails_construction() {
        for default_value in [0.0, -4.0] {
            let mut config = SystemConfig::default();
            config.speed.min = default_value;
            config.speed.default_value = default_value;
            assert!(Simulation::from_config(&config).is_err());
        }
    }

    #[test]
    fn lenient_build_replaces_bad_speed_settings() {
        let mut config = SystemConfig::default();
        config.speed.min = 10.0;
        config.speed.max = 1.0;
        let (mut sim, skipped) = Simulation::from_config_lenient(&config);
        assert_eq!(sim.len(), 11);
        assert_eq!(skipped.len(), 1);
        assert_eq!(sim.set_speed_multiplier(3.0).unwrap(), 3.0);
    }

    #[test]
    fn lenient_build_skips_invalid_bodies() {
        let mut config = SystemConfig::default();
        config.bodies[0].semi_major_axis = 0.0;
        config.bodies[1].name.clear();
        let (sim, skipped) = Simulation::from_config_lenient(&config);
        assert_eq!(sim.len(), 9);
        assert_eq!(skipped.len(), 2);
    }

    #[test]
    fn speed_multiplier_scales_every_body() {
        let mut slow = default_sim();
        let mut fast = default_sim();
        fast.set_speed_multiplier(10.0).unwrap();
        slow.tick();
        fast.tick();
        let base = default_sim();
        for i in 0..base.len() {
            let b0 = base.bodies()[i].anomaly();
            let ds = slow.bodies()[i].anomaly() - b0;
            let df = fast.bodies()[i].anomaly() - b0;
            // Skip a body that wrapped past 2π in this tick.
            if ds > 0.0 && df > 0.0 {
                assert!((df - 10.0 * ds).abs() < 1e-12, "{}", base.bodies()[i].name());
            }
        }
    }

    #[test]
    fn paused_simulation_does_not_move() {
        let mut sim = default_sim();
        let before: Vec<DVec2> = sim.positions().map(|(_, p)| p).collect();
        sim.toggle_pause();
        sim.step(100);
        let after: Vec<DVec2> = sim.positions().map(|(_, p)| p).collect();
        assert_eq!(before, after);
        assert_eq!(sim.clock().ticks(), 0);
    }

    #[test]
    fn many_ticks_keep_anomalies_wrapped() {
        let mut sim = default_sim();
        sim.set_speed_multiplier(1000.0).unwrap();
        sim.step(5000);
        for body in sim.bodies() {
            assert!((0.0..std::f64::consts::TAU).contains(&body.anomaly()));
        }
        assert_eq!(sim.clock().ticks(), 5000);
    }

    #[test]
    fn bodies_stay_on_their_traces_after_ticking() {
        let mut sim = default_sim();
        sim.step(250);
        for body in sim.bodies() {
            let e = body.elements();
            let r = body.distance();
            assert!(r >= e.periapsis() - 1e-9 && r <= e.apoapsis() + 1e-9);
            let closed: Vec<DVec2> = body.trace().collect();
            assert_eq!(closed.first(), closed.last());
            assert_eq!(closed.len(), body.segments() + 1);
        }
    }

    #[test]
    fn position_3d_uses_plane() {
        let config = SystemConfig {
            plane: OrbitPlane::Xz,
            ..SystemConfig::default()
        };
        let sim = Simulation::from_config(&config).unwrap();
        let p = sim.position_3d(2).unwrap();
        assert_eq!(p.y, 0.0);
        assert!(sim.position_3d(99).is_none());
    }
}
