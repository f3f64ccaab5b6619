use glam::DVec2;

use crate::error::{OrbitError, OrbitResult};
use crate::orbit::{OrbitTrace, OrbitalElements, OrbitalState};
use crate::system::catalog::{BodyConfig, TracePhase};

/// Split a 0xRRGGBB color into linear-ish [0, 1] channels.
pub fn rgb(color: u32) -> (f32, f32, f32) {
    (
        ((color >> 16) & 0xff) as f32 / 255.0,
        ((color >> 8) & 0xff) as f32 / 255.0,
        (color & 0xff) as f32 / 255.0,
    )
}

/// One simulated body: fixed elements plus its own mutable state.
#[derive(Debug, Clone)]
pub struct Body {
    name: String,
    elements: OrbitalElements,
    state: OrbitalState,
    /// Display radius in scene units.
    pub radius: f32,
    pub color: u32,
    pub orbit_color: u32,
    segments: usize,
    trace_phase: TracePhase,
}

impl Body {
    /// Build a body from configuration. Elements are validated here, so a bad
    /// entry fails at construction, not on the first position query.
    pub fn from_config(config: &BodyConfig, segments: usize, default_orbit_color: u32) -> OrbitResult<Self> {
        if config.name.trim().is_empty() {
            return Err(OrbitError::MissingName);
        }
        let with_name = |e: OrbitError| e.for_body(&config.name);

        let elements = OrbitalElements::new(
            config.semi_major_axis,
            config.eccentricity,
            config.speed,
            config.true_anomaly,
        )
        .map_err(with_name)?;

        // Validate tessellation up front too.
        OrbitTrace::for_elements(&elements, segments, 0.0).map_err(with_name)?;

        Ok(Self {
            name: config.name.clone(),
            state: OrbitalState::new(&elements),
            elements,
            radius: config.radius,
            color: config.color,
            orbit_color: config.orbit_color.unwrap_or(default_orbit_color),
            segments,
            trace_phase: config.trace_phase,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    pub fn state(&self) -> &OrbitalState {
        &self.state
    }

    pub fn anomaly(&self) -> f64 {
        self.state.current_anomaly()
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    /// Advance this body's anomaly by `delta` radians.
    pub fn advance(&mut self, delta: f64) {
        self.state.advance_by(delta);
    }

    /// Current planar position.
    pub fn position(&self) -> DVec2 {
        self.state.position(&self.elements)
    }

    /// Distance from the central star right now.
    pub fn distance(&self) -> f64 {
        self.position().length()
    }

    /// Phase offset of this body's trace start.
    pub fn trace_phase_offset(&self) -> f64 {
        match self.trace_phase {
            TracePhase::Periapsis => 0.0,
            TracePhase::Epoch => self.elements.initial_anomaly(),
        }
    }

    /// Closed orbit polyline for this body.
    pub fn trace(&self) -> OrbitTrace {
        // Segment count was checked in from_config.
        OrbitTrace::validated(&self.elements, self.segments, self.trace_phase_offset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::catalog::default_bodies;

    fn config(name: &str) -> BodyConfig {
        default_bodies().into_iter().find(|b| b.name == name).unwrap()
    }

    #[test]
    fn rgb_splits_channels() {
        assert_eq!(rgb(0xff0000), (1.0, 0.0, 0.0));
        assert_eq!(rgb(0x00ff00), (0.0, 1.0, 0.0));
        let (_, _, b) = rgb(0x000080);
        assert!((b - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn starts_at_epoch_position() {
        let body = Body::from_config(&config("Mars"), 64, 0x555555).unwrap();
        assert_eq!(body.position(), body.elements().position_at(5.919));
    }

    #[test]
    fn rejects_bad_eccentricity_with_body_name() {
        let mut cfg = config("Pluto");
        cfg.eccentricity = 1.0;
        let err = Body::from_config(&cfg, 64, 0).unwrap_err();
        assert!(err.is_invalid_elements());
        assert!(err.to_string().contains("Pluto"));
    }

    #[test]
    fn rejects_too_few_segments() {
        let err = Body::from_config(&config("Earth"), 2, 0).unwrap_err();
        assert!(matches!(err, OrbitError::Body { ref source, .. } if matches!(**source, OrbitError::TooFewSegments(2))));
    }

    #[test]
    fn rejects_blank_name() {
        let mut cfg = config("Earth");
        cfg.name = "  ".to_string();
        assert!(matches!(Body::from_config(&cfg, 64, 0), Err(OrbitError::MissingName)));
    }

    #[test]
    fn orbit_color_falls_back() {
        let mut cfg = config("Venus");
        cfg.orbit_color = None;
        let body = Body::from_config(&cfg, 64, 0x555555).unwrap();
        assert_eq!(body.orbit_color, 0x555555);
    }

    #[test]
    fn epoch_trace_starts_at_body() {
        let mut cfg = config("Jupiter");
        cfg.trace_phase = TracePhase::Epoch;
        let body = Body::from_config(&cfg, 64, 0).unwrap();
        let first = body.trace().next().unwrap();
        assert_eq!(first, body.position());
    }
}
