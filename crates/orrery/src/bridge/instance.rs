use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::system::body::rgb;

/// Per-body data read by the JavaScript scene each frame.
/// Must match the TypeScript side: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct BodyInstance {
    /// World position (orbit plane already embedded).
    pub x: f32,
    pub y: f32,
    pub z: f32,
    /// Display radius in scene units.
    pub radius: f32,
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// Current true anomaly in radians, [0, 2π).
    pub anomaly: f32,
}

impl BodyInstance {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub fn new(pos: Vec3, radius: f32, color: u32, anomaly: f64) -> Self {
        let (r, g, b) = rgb(color);
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            radius,
            r,
            g,
            b,
            anomaly: anomaly as f32,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }
}

/// One orbit trace vertex. `body` is the index of the owning body in the
/// instance buffer (the star is never traced).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct TraceVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub body: f32,
}

impl TraceVertex {
    pub const FLOATS: usize = 4;

    pub fn new(pos: Vec3, body: usize) -> Self {
        Self {
            x: pos.x,
            y: pos.y,
            z: pos.z,
            body: body as f32,
        }
    }
}
