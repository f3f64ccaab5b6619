//! Flat buffers shared with the JavaScript scene.
//! Must stay in sync with the TypeScript reader.
//!
//! Layout (all values f32):
//! ```text
//! [Instances: (1 + body_count) × 8 floats]   star first, then bodies in catalog order
//! [Trace vertices: Σ(segments_i + 1) × 4 floats]   static, built once
//! ```
//!
//! Instances are rewritten every tick. Trace vertices depend only on the
//! fixed elements, so they are built at init; `trace_offsets[i]` is the first
//! vertex of body `i` and `orbit_colors[i]` its line color (0xRRGGBB).
use glam::Vec3;

use crate::bridge::instance::{BodyInstance, TraceVertex};
use crate::system::simulation::Simulation;

/// Protocol version the TypeScript side checks against.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Instance slot reserved for the central star.
pub const STAR_INSTANCE: usize = 0;

pub struct FrameBuffers {
    instances: Vec<BodyInstance>,
    trace_vertices: Vec<TraceVertex>,
    trace_offsets: Vec<u32>,
    orbit_colors: Vec<u32>,
}

impl FrameBuffers {
    /// Allocate buffers for `sim` and build its static traces.
    pub fn new(sim: &Simulation) -> Self {
        let total_vertices: usize = sim.bodies().iter().map(|b| b.segments() + 1).sum();
        let mut buffers = Self {
            instances: Vec::with_capacity(sim.len() + 1),
            trace_vertices: Vec::with_capacity(total_vertices),
            trace_offsets: Vec::with_capacity(sim.len()),
            orbit_colors: Vec::with_capacity(sim.len()),
        };
        buffers.rebuild_traces(sim);
        buffers.update(sim);
        buffers
    }

    /// Re-tessellate every orbit (call after the plane or catalog changes).
    pub fn rebuild_traces(&mut self, sim: &Simulation) {
        self.trace_vertices.clear();
        self.trace_offsets.clear();
        self.orbit_colors.clear();
        let plane = sim.plane();
        for (i, (body, trace)) in sim.bodies().iter().zip(sim.traces()).enumerate() {
            self.trace_offsets.push(self.trace_vertices.len() as u32);
            self.orbit_colors.push(body.orbit_color);
            let slot = i + 1;
            self.trace_vertices
                .extend(trace.map(|p| TraceVertex::new(plane.embed(p), slot)));
        }
        log::debug!(
            "rebuilt {} trace vertices for {} bodies",
            self.trace_vertices.len(),
            self.trace_offsets.len()
        );
    }

    /// Rewrite the instance buffer from current body positions.
    pub fn update(&mut self, sim: &Simulation) {
        self.instances.clear();
        let sun = sim.sun();
        self.instances.push(BodyInstance::new(Vec3::ZERO, sun.radius, sun.color, 0.0));
        let plane = sim.plane();
        for body in sim.bodies() {
            self.instances.push(BodyInstance::new(
                plane.embed(body.position()),
                body.radius,
                body.color,
                body.anomaly(),
            ));
        }
    }

    pub fn instances(&self) -> &[BodyInstance] {
        &self.instances
    }

    pub fn trace_vertices(&self) -> &[TraceVertex] {
        &self.trace_vertices
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn trace_vertex_count(&self) -> u32 {
        self.trace_vertices.len() as u32
    }

    /// First trace vertex of body `body` (catalog index), if it exists.
    pub fn trace_offset(&self, body: usize) -> Option<u32> {
        self.trace_offsets.get(body).copied()
    }

    /// Number of trace vertices for body `body`.
    pub fn trace_len(&self, body: usize) -> Option<u32> {
        let start = *self.trace_offsets.get(body)?;
        let end = self
            .trace_offsets
            .get(body + 1)
            .copied()
            .unwrap_or(self.trace_vertex_count());
        Some(end - start)
    }

    /// Orbit line colors (0xRRGGBB), one per body in catalog order.
    pub fn orbit_colors(&self) -> &[u32] {
        &self.orbit_colors
    }

    /// Raw pointer to instance data for direct memory reads.
    pub fn instances_ptr(&self) -> *const f32 {
        self.instances.as_ptr() as *const f32
    }

    /// Raw pointer to trace vertex data for direct memory reads.
    pub fn trace_vertices_ptr(&self) -> *const f32 {
        self.trace_vertices.as_ptr() as *const f32
    }
}
