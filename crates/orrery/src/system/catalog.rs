//! Body catalog — orbital elements and display metadata for the system.
//!
//! Distances are scene units, not AU: inner planets are spread out for
//! readability while Sedna keeps its real eccentricity.
use serde::{Deserialize, Serialize};

use crate::core::clock::SpeedConfig;
use crate::core::plane::OrbitPlane;
use crate::error::OrbitResult;
use crate::DEFAULT_TICK_SCALE;

/// Where an orbit trace starts drawing from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TracePhase {
    /// First vertex at periapsis (phase offset 0).
    #[default]
    Periapsis,
    /// First vertex at the body's epoch position.
    Epoch,
}

/// One body as described in configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodyConfig {
    #[serde(default)]
    pub name: String,
    /// Display radius in scene units.
    pub radius: f32,
    pub semi_major_axis: f64,
    #[serde(default)]
    pub eccentricity: f64,
    /// Base anomaly rate (scaled by clock speed and tick scale).
    pub speed: f64,
    /// 0xRRGGBB body color.
    pub color: u32,
    /// 0xRRGGBB orbit trace color; falls back to `OrbitConfig::color`.
    #[serde(default)]
    pub orbit_color: Option<u32>,
    /// True anomaly at time zero, radians.
    #[serde(default)]
    pub true_anomaly: f64,
    /// Per-body trace tessellation override.
    #[serde(default)]
    pub orbit_segments: Option<usize>,
    #[serde(default)]
    pub trace_phase: TracePhase,
}

/// Central star display settings. The star sits at the focus (origin).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SunConfig {
    pub radius: f32,
    pub color: u32,
}

impl Default for SunConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            color: 0xffaa00,
        }
    }
}

/// Orbit trace defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitConfig {
    #[serde(default = "default_segments")]
    pub segments: usize,
    #[serde(default = "default_orbit_color")]
    pub color: u32,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            segments: default_segments(),
            color: default_orbit_color(),
        }
    }
}

fn default_segments() -> usize {
    64
}

fn default_orbit_color() -> u32 {
    0x555555
}

fn default_tick_scale() -> f64 {
    DEFAULT_TICK_SCALE
}

fn default_frame_rate() -> f64 {
    60.0
}

/// Whole-system configuration. Loadable from JSON; every section except
/// `bodies` has a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfig {
    #[serde(default)]
    pub sun: SunConfig,
    #[serde(alias = "planetsData")]
    pub bodies: Vec<BodyConfig>,
    #[serde(default)]
    pub orbit: OrbitConfig,
    #[serde(default)]
    pub speed: SpeedConfig,
    #[serde(default = "default_tick_scale")]
    pub tick_scale: f64,
    #[serde(default)]
    pub plane: OrbitPlane,
    #[serde(default = "default_frame_rate")]
    pub frame_rate: f64,
}

impl SystemConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> OrbitResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> OrbitResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Segment count for a body: its override, else the global default.
    pub fn segments_for(&self, body: &BodyConfig) -> usize {
        body.orbit_segments.unwrap_or(self.orbit.segments)
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            sun: SunConfig::default(),
            bodies: default_bodies(),
            orbit: OrbitConfig::default(),
            speed: SpeedConfig::default(),
            tick_scale: DEFAULT_TICK_SCALE,
            plane: OrbitPlane::default(),
            frame_rate: default_frame_rate(),
        }
    }
}

fn body(
    name: &str,
    radius: f32,
    semi_major_axis: f64,
    eccentricity: f64,
    speed: f64,
    color: u32,
    true_anomaly: f64,
) -> BodyConfig {
    BodyConfig {
        name: name.to_string(),
        radius,
        semi_major_axis,
        eccentricity,
        speed,
        color,
        orbit_color: Some(color),
        true_anomaly,
        orbit_segments: None,
        trace_phase: TracePhase::Periapsis,
    }
}

/// The default eleven bodies: eight planets, Ceres, Pluto and Sedna.
/// Epoch anomalies place bodies near their real positions instead of all
/// starting at periapsis.
pub fn default_bodies() -> Vec<BodyConfig> {
    vec![
        body("Mercury", 0.4, 10.0, 0.2056, 0.04, 0x8a8a8a, 4.935),
        body("Venus", 0.6, 15.0, 0.0068, 0.03, 0xe6c229, 3.347),
        body("Earth", 0.6, 20.0, 0.0167, 0.02, 0x3498db, 4.578),
        body("Mars", 0.4, 25.0, 0.0934, 0.015, 0xe74c3c, 5.919),
        BodyConfig {
            orbit_color: Some(0x888888),
            ..body("Ceres", 0.08, 30.0, 0.079, 0.008, 0xcccccc, 0.785)
        },
        body("Jupiter", 1.3, 35.0, 0.0484, 0.01, 0xe67e22, 0.257),
        body("Saturn", 1.1, 45.0, 0.0542, 0.008, 0xf1c40f, 1.884),
        body("Uranus", 0.9, 55.0, 0.0472, 0.006, 0x1abc9c, 2.984),
        body("Neptune", 0.8, 65.0, 0.0086, 0.004, 0x3498db, 4.512),
        body("Pluto", 0.3, 75.0, 0.2488, 0.002, 0x9b59b6, 5.267),
        // Large, very eccentric orbit: finer tessellation.
        BodyConfig {
            orbit_segments: Some(256),
            ..body("Sedna", 0.2, 506.0, 0.855, 0.0005, 0xcc6666, 3.141)
        },
    ]
}
