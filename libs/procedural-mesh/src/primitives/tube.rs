//! # Tube Primitive
//!
//! Generates a thick-walled tube (annulus swept along Z), optionally cut
//! to a partial arc.

use crate::lattice::{add_facing_quad, add_facing_triangle, Lattice, LatticeNormal};
use crate::mesh::SubMesh;
use config::constants::{clamp_rings, clamp_segments, EPSILON, FULL_ARC};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Parameters of a tube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TubeParams {
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub height: f64,
    pub rings: u32,
    pub segments: u32,
    /// Swept angle in radians, `2π` for a closed ring.
    pub arc: f64,
}

/// Creates a tube mesh.
///
/// The outer and inner walls are two lattice passes; the inner pass has
/// its winding reversed so it faces the axis. Annular caps close the top
/// and bottom, and when `arc < 2π` two quads close the radial cut faces.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::primitives::{create_tube, TubeParams};
///
/// let sub = create_tube(&TubeParams {
///     inner_radius: 1.0,
///     outer_radius: 1.2,
///     height: 0.01,
///     rings: 1,
///     segments: 64,
///     arc: std::f64::consts::TAU,
/// });
/// assert!(sub.validate().is_ok());
/// ```
pub fn create_tube(params: &TubeParams) -> SubMesh {
    let rings = clamp_rings(params.rings);
    let segments = clamp_segments(params.segments);
    let TubeParams {
        inner_radius,
        outer_radius,
        height,
        arc,
        ..
    } = *params;
    let half = height / 2.0;
    let ring_height = |ring: u32| ring as f64 * height / rings as f64 - half;

    let mut sub = SubMesh::new();

    Lattice {
        rings,
        segments,
        sweep: arc,
        radius: |_: u32| outer_radius,
        height: ring_height,
        normal: LatticeNormal::Radial,
    }
    .build(&mut sub);

    let inner = Lattice {
        rings,
        segments,
        sweep: arc,
        radius: |_: u32| inner_radius,
        height: ring_height,
        normal: LatticeNormal::RadialInward,
    }
    .build(&mut sub);
    sub.reverse_winding_from(inner.first_index);

    let step = arc / segments as f64;
    add_annular_cap(&mut sub, params, segments, step, half, DVec3::Z);
    add_annular_cap(&mut sub, params, segments, step, -half, DVec3::NEG_Z);

    if arc < FULL_ARC - EPSILON {
        let uvs = [
            DVec2::new(0.0, 0.0),
            DVec2::new(0.0, 1.0),
            DVec2::new(1.0, 1.0),
            DVec2::new(1.0, 0.0),
        ];
        for (angle, sign) in [(0.0, -1.0), (arc, 1.0)] {
            let (sin, cos) = f64::sin_cos(angle);
            let radial = DVec3::new(sin, cos, 0.0);
            // Sweep direction at this angle
            let tangent = DVec3::new(cos, -sin, 0.0);
            let corners = [
                radial * outer_radius - DVec3::Z * half,
                radial * outer_radius + DVec3::Z * half,
                radial * inner_radius + DVec3::Z * half,
                radial * inner_radius - DVec3::Z * half,
            ];
            add_facing_quad(&mut sub, corners, uvs, tangent * sign);
        }
    }

    sub
}

fn add_annular_cap(
    sub: &mut SubMesh,
    params: &TubeParams,
    segments: u32,
    step: f64,
    z: f64,
    facing: DVec3,
) {
    let first = sub.vertex_count() as u32;
    for seg in 0..=segments {
        let (sin, cos) = (seg as f64 * step).sin_cos();
        let u = seg as f64 / segments as f64;
        sub.add_vertex(DVec3::new(params.outer_radius * sin, params.outer_radius * cos, z));
        sub.add_normal(facing);
        sub.add_texcoord(DVec2::new(u, 0.0));
        sub.add_vertex(DVec3::new(params.inner_radius * sin, params.inner_radius * cos, z));
        sub.add_normal(facing);
        sub.add_texcoord(DVec2::new(u, 1.0));
    }

    for seg in 0..segments {
        let outer = first + seg * 2;
        let inner = outer + 1;
        add_facing_triangle(sub, outer, outer + 2, inner + 2, facing);
        add_facing_triangle(sub, outer, inner + 2, inner, facing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn tube(arc: f64) -> SubMesh {
        create_tube(&TubeParams {
            inner_radius: 1.0,
            outer_radius: 1.5,
            height: 0.5,
            rings: 2,
            segments: 12,
            arc,
        })
    }

    fn face(sub: &SubMesh, [a, b, c]: [u32; 3]) -> (DVec3, DVec3) {
        let pa = sub.vertex(a as usize).unwrap();
        let pb = sub.vertex(b as usize).unwrap();
        let pc = sub.vertex(c as usize).unwrap();
        ((pb - pa).cross(pc - pa), (pa + pb + pc) / 3.0)
    }

    #[test]
    fn test_full_tube_counts() {
        let sub = tube(FULL_ARC);
        let lattice = 2 * 3 * 13;
        let caps = 2 * 2 * 13;
        assert_eq!(sub.vertex_count(), lattice + caps);
        assert_eq!(sub.triangle_count(), 2 * (2 * 12 * 2) + 2 * 12 * 2);
        assert!(sub.validate().is_ok());
    }

    #[test]
    fn test_partial_tube_adds_end_caps() {
        let sub = tube(PI);
        let full = tube(FULL_ARC);
        assert_eq!(sub.vertex_count(), full.vertex_count() + 8);
        assert_eq!(sub.triangle_count(), full.triangle_count() + 4);
        assert!(sub.validate().is_ok());
    }

    #[test]
    fn test_walls_face_away_from_material() {
        let sub = tube(FULL_ARC);
        let wall_triangles = 2 * 12 * 2;
        for (i, tri) in sub.triangles().enumerate().take(wall_triangles * 2) {
            let (normal, centroid) = face(&sub, tri);
            let radial = DVec3::new(centroid.x, centroid.y, 0.0);
            if i < wall_triangles {
                assert!(normal.dot(radial) > 0.0, "outer wall triangle {i}");
            } else {
                assert!(normal.dot(radial) < 0.0, "inner wall triangle {i}");
            }
        }
    }

    #[test]
    fn test_caps_face_up_and_down() {
        let sub = tube(FULL_ARC);
        let walls = 2 * 2 * 12 * 2;
        let cap = 12 * 2;
        for (i, tri) in sub.triangles().enumerate().skip(walls) {
            let (normal, _) = face(&sub, tri);
            if i < walls + cap {
                assert!(normal.z > 0.0);
            } else {
                assert!(normal.z < 0.0);
            }
        }
    }

    #[test]
    fn test_partial_tube_end_faces_point_out_of_the_cut() {
        let sub = tube(PI);
        let tris: Vec<_> = sub.triangles().collect();
        let n = tris.len();
        // A half tube occupies x >= 0, so both cut faces look toward -X
        let (start, _) = face(&sub, tris[n - 4]);
        let (end, _) = face(&sub, tris[n - 1]);
        assert_relative_eq!(start.normalize(), DVec3::NEG_X, epsilon = 1e-9);
        assert_relative_eq!(end.normalize(), DVec3::NEG_X, epsilon = 1e-9);
    }

    #[test]
    fn test_tube_bounds() {
        let sub = tube(FULL_ARC);
        let (min, max) = sub.bounding_box().unwrap();
        assert_relative_eq!(max.x, 1.5, epsilon = 1e-9);
        assert_relative_eq!(min.z, -0.25);
        assert_relative_eq!(max.z, 0.25);
    }
}
