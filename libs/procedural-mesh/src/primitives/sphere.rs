//! # Sphere Primitive
//!
//! Generates a UV sphere from the shared ring/segment lattice.

use crate::lattice::{Lattice, LatticeNormal};
use crate::mesh::SubMesh;
use config::constants::{clamp_rings, clamp_segments};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Parameters of a sphere centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SphereParams {
    pub radius: f64,
    /// Latitude bands between the poles.
    pub rings: u32,
    /// Longitude columns around the Z axis.
    pub segments: u32,
}

/// Creates a sphere mesh.
///
/// Ring 0 sits on the south pole and ring `rings` on the north pole; both
/// poles are made of `segments + 1` coincident vertices so every column
/// keeps its own texture coordinate.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::primitives::{create_sphere, SphereParams};
///
/// let sub = create_sphere(&SphereParams { radius: 0.5, rings: 4, segments: 4 });
/// assert_eq!(sub.vertex_count(), 25);
/// assert_eq!(sub.index_count(), 96);
/// ```
pub fn create_sphere(params: &SphereParams) -> SubMesh {
    let rings = clamp_rings(params.rings);
    let segments = clamp_segments(params.segments);
    let radius = params.radius;
    let ring_angle = PI / rings as f64;

    let mut sub = SubMesh::with_capacity(
        ((rings + 1) * (segments + 1)) as usize,
        (rings * segments * 6) as usize,
    );
    Lattice {
        rings,
        segments,
        sweep: TAU,
        radius: |ring: u32| radius * (ring as f64 * ring_angle).sin(),
        height: |ring: u32| -radius * (ring as f64 * ring_angle).cos(),
        normal: LatticeNormal::Spherical,
    }
    .build(&mut sub);
    sub
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sphere_lattice_counts() {
        let sub = create_sphere(&SphereParams {
            radius: 0.5,
            rings: 4,
            segments: 4,
        });
        assert_eq!(sub.vertex_count(), 25);
        assert_eq!(sub.normal_count(), 25);
        assert_eq!(sub.texcoord_count(), 25);
        assert_eq!(sub.index_count(), 96);
        assert!(sub.validate().is_ok());
    }

    #[test]
    fn test_sphere_vertices_on_surface() {
        let sub = create_sphere(&SphereParams {
            radius: 2.0,
            rings: 8,
            segments: 12,
        });
        for v in sub.vertices() {
            assert_relative_eq!(v.length(), 2.0, epsilon = 1e-9);
        }
        for (v, n) in sub.vertices().iter().zip(sub.normals()) {
            assert_relative_eq!(*n, v.normalize(), epsilon = 1e-9);
        }
    }

    #[test]
    fn test_sphere_poles() {
        let sub = create_sphere(&SphereParams {
            radius: 1.0,
            rings: 6,
            segments: 6,
        });
        let (min, max) = sub.bounding_box().unwrap();
        assert_relative_eq!(min.z, -1.0, epsilon = 1e-12);
        assert_relative_eq!(max.z, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sphere_clamps_resolution() {
        let sub = create_sphere(&SphereParams {
            radius: 1.0,
            rings: 0,
            segments: 1,
        });
        assert_eq!(sub.vertex_count(), 2 * 4);
        assert_eq!(sub.index_count(), 3 * 6);
    }
}
