use glam::{DVec2, Vec3};
use serde::{Deserialize, Serialize};

/// Which pair of world axes hosts the 2D orbital plane.
///
/// All orbits are coplanar; the out-of-plane coordinate is always zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrbitPlane {
    /// Orbit plane is world XY (camera looks down Z).
    #[default]
    Xy,
    /// Orbit plane is world XZ (Y is up).
    Xz,
}

impl OrbitPlane {
    /// Embed a planar point into world space.
    pub fn embed(self, p: DVec2) -> Vec3 {
        let (x, y) = (p.x as f32, p.y as f32);
        match self {
            OrbitPlane::Xy => Vec3::new(x, y, 0.0),
            OrbitPlane::Xz => Vec3::new(x, 0.0, y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embeds_into_chosen_axes() {
        let p = DVec2::new(3.0, -4.0);
        assert_eq!(OrbitPlane::Xy.embed(p), Vec3::new(3.0, -4.0, 0.0));
        assert_eq!(OrbitPlane::Xz.embed(p), Vec3::new(3.0, 0.0, -4.0));
    }

    #[test]
    fn embedded_point_is_in_plane() {
        let p = DVec2::new(12.5, 7.25);
        assert_eq!(OrbitPlane::Xy.embed(p).z, 0.0);
        assert_eq!(OrbitPlane::Xz.embed(p).y, 0.0);
    }

    #[test]
    fn parses_lowercase_names() {
        let plane: OrbitPlane = serde_json::from_str("\"xz\"").unwrap();
        assert_eq!(plane, OrbitPlane::Xz);
    }
}
