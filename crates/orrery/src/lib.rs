pub mod bridge;
pub mod core;
pub mod error;
pub mod orbit;
pub mod system;

/// Radians of anomaly per tick for one unit of `angular_speed` at 1x speed.
pub const DEFAULT_TICK_SCALE: f64 = 0.01;

// Re-export key types at crate root for convenience
pub use error::{OrbitError, OrbitResult};
pub use orbit::{
    advance, apoapsis_distance, delta_for, periapsis_distance, position_at, trace_orbit,
    wrap_angle, OrbitTrace, OrbitalElements, OrbitalState,
};
pub use crate::core::clock::{SimulationClock, SpeedConfig};
pub use crate::core::plane::OrbitPlane;
pub use crate::core::time::FrameGate;
pub use crate::system::body::Body;
pub use crate::system::catalog::{BodyConfig, OrbitConfig, SunConfig, SystemConfig, TracePhase};
pub use crate::system::simulation::Simulation;
pub use crate::bridge::instance::{BodyInstance, TraceVertex};
pub use crate::bridge::protocol::{FrameBuffers, PROTOCOL_VERSION};
