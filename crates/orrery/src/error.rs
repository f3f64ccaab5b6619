//! Error types for orbit construction and simulation setup.

use thiserror::Error;

/// Result type for orbit model operations.
pub type OrbitResult<T> = Result<T, OrbitError>;

/// Errors raised while building orbits, traces or a simulation.
///
/// All of these surface at construction time. Position queries and
/// anomaly advancement never fail once a body exists.
#[derive(Error, Debug)]
pub enum OrbitError {
    #[error("invalid orbital elements: {reason}")]
    InvalidOrbitalElements { reason: String },

    #[error("orbit trace needs at least 3 segments, got {0}")]
    TooFewSegments(usize),

    #[error("speed multiplier must be positive and finite, got {0}")]
    InvalidSpeed(f64),

    #[error("invalid speed settings: {reason}")]
    InvalidSpeedRange { reason: String },

    #[error("trace phase offset must be finite, got {0}")]
    InvalidPhase(f64),

    #[error("body is missing a name")]
    MissingName,

    #[error("body '{name}': {source}")]
    Body {
        name: String,
        #[source]
        source: Box<OrbitError>,
    },

    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
}

impl OrbitError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        OrbitError::InvalidOrbitalElements { reason: reason.into() }
    }

    /// Attach the owning body's name to an error.
    pub fn for_body(self, name: &str) -> Self {
        OrbitError::Body {
            name: name.to_string(),
            source: Box::new(self),
        }
    }

    /// True when this error (or the per-body error it wraps) is an
    /// out-of-range orbital element.
    pub fn is_invalid_elements(&self) -> bool {
        match self {
            OrbitError::InvalidOrbitalElements { .. } => true,
            OrbitError::Body { source, .. } => source.is_invalid_elements(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_context_keeps_kind() {
        let err = OrbitError::invalid("eccentricity 1 outside [0, 1)").for_body("Sedna");
        assert!(err.is_invalid_elements());
        assert_eq!(
            err.to_string(),
            "body 'Sedna': invalid orbital elements: eccentricity 1 outside [0, 1)"
        );
    }

    #[test]
    fn other_kinds_are_not_invalid_elements() {
        assert!(!OrbitError::TooFewSegments(2).is_invalid_elements());
        assert!(!OrbitError::MissingName.for_body("").is_invalid_elements());
        assert!(!OrbitError::InvalidPhase(f64::NAN).is_invalid_elements());
    }
}
