pub mod elements;
pub mod position;
pub mod state;
pub mod trace;

pub use elements::OrbitalElements;
pub use position::{
    apoapsis_distance, periapsis_distance, position_at, radius_at, semi_latus_rectum, wrap_angle,
};
pub use state::{advance, delta_for, OrbitalState};
pub use trace::{trace_orbit, OrbitTrace, MIN_TRACE_SEGMENTS};
