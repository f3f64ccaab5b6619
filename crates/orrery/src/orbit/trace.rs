use std::f64::consts::TAU;

use glam::DVec2;

use crate::error::{OrbitError, OrbitResult};
use crate::orbit::elements::OrbitalElements;
use crate::orbit::position::position_at;

/// Smallest segment count that still approximates an ellipse.
pub const MIN_TRACE_SEGMENTS: usize = 3;

/// Lazy, closed polyline over an orbit.
///
/// Yields `segments + 1` points at `phase_offset + 2π·i/segments` for
/// `i = 0..=segments`. The final point is computed at exactly `phase_offset`
/// so it is bit-identical to the first. Cloning the trace restarts it.
#[derive(Debug, Clone)]
pub struct OrbitTrace {
    semi_major_axis: f64,
    eccentricity: f64,
    segments: usize,
    phase_offset: f64,
    next: usize,
}

/// Sample the orbit `(a, e)` into `segments` line segments starting at
/// `phase_offset` radians from periapsis.
pub fn trace_orbit(
    semi_major_axis: f64,
    eccentricity: f64,
    segments: usize,
    phase_offset: f64,
) -> OrbitResult<OrbitTrace> {
    if !phase_offset.is_finite() {
        return Err(OrbitError::InvalidPhase(phase_offset));
    }
    let elements = OrbitalElements::new(semi_major_axis, eccentricity, 0.0, 0.0)?;
    OrbitTrace::for_elements(&elements, segments, phase_offset)
}

impl OrbitTrace {
    pub fn for_elements(
        elements: &OrbitalElements,
        segments: usize,
        phase_offset: f64,
    ) -> OrbitResult<Self> {
        if !phase_offset.is_finite() {
            return Err(OrbitError::InvalidPhase(phase_offset));
        }
        if segments < MIN_TRACE_SEGMENTS {
            return Err(OrbitError::TooFewSegments(segments));
        }
        Ok(Self::validated(elements, segments, phase_offset))
    }

    /// Caller guarantees `segments >= MIN_TRACE_SEGMENTS`.
    pub(crate) fn validated(elements: &OrbitalElements, segments: usize, phase_offset: f64) -> Self {
        debug_assert!(segments >= MIN_TRACE_SEGMENTS);
        Self {
            semi_major_axis: elements.semi_major_axis(),
            eccentricity: elements.eccentricity(),
            segments,
            phase_offset,
            next: 0,
        }
    }

    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn phase_offset(&self) -> f64 {
        self.phase_offset
    }

    /// Angle of the `i`-th sample.
    fn angle(&self, i: usize) -> f64 {
        if i == self.segments {
            return self.phase_offset;
        }
        self.phase_offset + TAU * i as f64 / self.segments as f64
    }
}

impl Iterator for OrbitTrace {
    type Item = DVec2;

    fn next(&mut self) -> Option<DVec2> {
        if self.next > self.segments {
            return None;
        }
        let point = position_at(self.semi_major_axis, self.eccentricity, self.angle(self.next));
        self.next += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.segments + 1).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for OrbitTrace {}
