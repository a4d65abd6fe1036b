//! # Ring/Segment Lattice
//!
//! Shared sweep used by the sphere, cylinder, cone and tube generators.
//!
//! A lattice is `rings + 1` rings of `segments + 1` vertices each, swept
//! around the Z axis. The seam column is duplicated so the first and last
//! column carry distinct texture coordinates. Rings advance toward +Z and
//! the sweep runs clockwise seen from +Z (`x = r·sin θ`, `y = r·cos θ`),
//! which makes the fixed stitching pattern face outward.

use crate::mesh::SubMesh;
use config::constants::{clamp_rings, clamp_segments};
use glam::{DVec2, DVec3};

/// How lattice vertex normals are derived from vertex positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LatticeNormal {
    /// Direction from the origin to the vertex.
    Spherical,
    /// Direction away from the Z axis.
    Radial,
    /// Direction toward the Z axis.
    RadialInward,
    /// Caller supplied constant, used for flat surfaces.
    Constant(DVec3),
}

impl LatticeNormal {
    fn at(&self, position: DVec3) -> DVec3 {
        match *self {
            LatticeNormal::Spherical => position.normalize_or_zero(),
            LatticeNormal::Radial => DVec3::new(position.x, position.y, 0.0).normalize_or_zero(),
            LatticeNormal::RadialInward => {
                -DVec3::new(position.x, position.y, 0.0).normalize_or_zero()
            }
            LatticeNormal::Constant(normal) => normal,
        }
    }
}

/// Range of a submesh written by one lattice pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeSpan {
    /// Index of the first vertex of ring 0.
    pub first_vertex: u32,
    /// Position of the first emitted index.
    pub first_index: usize,
}

impl LatticeSpan {
    /// Vertex index of `(ring, seg)` inside this span.
    pub fn vertex(&self, segments: u32, ring: u32, seg: u32) -> u32 {
        self.first_vertex + ring * (segments + 1) + seg
    }
}

/// A parameterized ring×segment sweep.
///
/// `radius` and `height` are evaluated once per ring. Ring and segment
/// counts below the minimum are raised to it when building.
pub struct Lattice<R, H>
where
    R: Fn(u32) -> f64,
    H: Fn(u32) -> f64,
{
    pub rings: u32,
    pub segments: u32,
    /// Angle covered by the sweep, `2π` for closed shapes.
    pub sweep: f64,
    pub radius: R,
    pub height: H,
    pub normal: LatticeNormal,
}

impl<R, H> Lattice<R, H>
where
    R: Fn(u32) -> f64,
    H: Fn(u32) -> f64,
{
    /// Appends the lattice vertices and triangles to `sub`.
    ///
    /// Emits `(rings + 1) * (segments + 1)` vertices, each with a normal and
    /// a `(seg / segments, ring / rings)` texture coordinate, followed by
    /// `rings * segments * 6` indices, using the clamped counts.
    pub fn build(&self, sub: &mut SubMesh) -> LatticeSpan {
        let rings = clamp_rings(self.rings);
        let segments = clamp_segments(self.segments);
        let span = LatticeSpan {
            first_vertex: sub.vertex_count() as u32,
            first_index: sub.index_count(),
        };
        let step = self.sweep / segments as f64;

        for ring in 0..=rings {
            let r = (self.radius)(ring);
            let z = (self.height)(ring);
            for seg in 0..=segments {
                let (sin, cos) = (seg as f64 * step).sin_cos();
                let position = DVec3::new(r * sin, r * cos, z);
                sub.add_vertex(position);
                sub.add_normal(self.normal.at(position));
                sub.add_texcoord(DVec2::new(
                    seg as f64 / segments as f64,
                    ring as f64 / rings as f64,
                ));
            }
        }

        // Quad (ring, seg) takes triangle B anchored at its lower-left
        // vertex and triangle A anchored at its lower-right vertex.
        let stride = segments + 1;
        for ring in 0..rings {
            for seg in 0..segments {
                let v = span.vertex(segments, ring, seg);
                sub.add_triangle(v + stride, v + 1, v);
                let w = v + 1;
                sub.add_triangle(w + stride, w, w + segments);
            }
        }

        span
    }
}

/// Appends a flat cap: one ring of `segments + 1` vertices plus a center
/// vertex, fanned into `segments` triangles facing `+Z` or `-Z`.
/// `segments` is clamped like a lattice's.
pub fn add_cap_fan(sub: &mut SubMesh, radius: f64, z: f64, segments: u32, facing_up: bool) {
    let segments = clamp_segments(segments);
    let normal = if facing_up { DVec3::Z } else { DVec3::NEG_Z };
    let step = std::f64::consts::TAU / segments as f64;

    let first = sub.vertex_count() as u32;
    for seg in 0..=segments {
        let (sin, cos) = (seg as f64 * step).sin_cos();
        sub.add_vertex(DVec3::new(radius * sin, radius * cos, z));
        sub.add_normal(normal);
        sub.add_texcoord(DVec2::new(0.5 + 0.5 * sin, 0.5 + 0.5 * cos));
    }

    let center = sub.add_vertex(DVec3::new(0.0, 0.0, z));
    sub.add_normal(normal);
    sub.add_texcoord(DVec2::splat(0.5));

    for seg in 0..segments {
        let a = first + seg;
        if facing_up {
            sub.add_triangle(center, a + 1, a);
        } else {
            sub.add_triangle(center, a, a + 1);
        }
    }
}

/// Adds triangle `(a, b, c)`, swapping the last two corners when needed so
/// its face normal points along `facing`.
pub fn add_facing_triangle(sub: &mut SubMesh, a: u32, b: u32, c: u32, facing: DVec3) {
    let vertices = sub.vertices();
    let (Some(pa), Some(pb), Some(pc)) = (
        vertices.get(a as usize),
        vertices.get(b as usize),
        vertices.get(c as usize),
    ) else {
        sub.add_triangle(a, b, c);
        return;
    };

    if (*pb - *pa).cross(*pc - *pa).dot(facing) >= 0.0 {
        sub.add_triangle(a, b, c);
    } else {
        sub.add_triangle(a, c, b);
    }
}

/// Adds four new vertices forming a flat quad with normal `facing`, wound
/// so the quad faces that way. Corners must be given in perimeter order.
pub fn add_facing_quad(sub: &mut SubMesh, corners: [DVec3; 4], uvs: [DVec2; 4], facing: DVec3) {
    let first = sub.vertex_count() as u32;
    for (corner, uv) in corners.iter().zip(uvs) {
        sub.add_vertex(*corner);
        sub.add_normal(facing);
        sub.add_texcoord(uv);
    }
    add_facing_triangle(sub, first, first + 1, first + 2, facing);
    add_facing_triangle(sub, first, first + 2, first + 3, facing);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::TAU;

    fn cylinder_lattice(rings: u32, segments: u32) -> SubMesh {
        let mut sub = SubMesh::new();
        Lattice {
            rings,
            segments,
            sweep: TAU,
            radius: |_: u32| 1.0,
            height: |ring: u32| ring as f64,
            normal: LatticeNormal::Radial,
        }
        .build(&mut sub);
        sub
    }

    #[test]
    fn test_lattice_counts() {
        let sub = cylinder_lattice(2, 5);
        assert_eq!(sub.vertex_count(), 3 * 6);
        assert_eq!(sub.normal_count(), 3 * 6);
        assert_eq!(sub.texcoord_count(), 3 * 6);
        assert_eq!(sub.index_count(), 2 * 5 * 6);
        assert!(sub.validate().is_ok());
    }

    #[test]
    fn test_lattice_clamps_zero_rings() {
        let sub = cylinder_lattice(0, 4);
        assert_eq!(sub.vertex_count(), 2 * 5);
        assert_eq!(sub.index_count(), 4 * 6);
        assert!(sub.texcoords().iter().all(|uv| uv.is_finite()));
        assert_eq!(sub.texcoord(5).unwrap().y, 1.0);
        assert!(sub.validate().is_ok());
    }

    #[test]
    fn test_lattice_clamps_zero_segments() {
        let sub = cylinder_lattice(1, 0);
        assert_eq!(sub.vertex_count(), 2 * 4);
        assert_eq!(sub.index_count(), 3 * 6);
        assert!(sub.vertices().iter().all(|p| p.is_finite()));
        assert!(sub.texcoords().iter().all(|uv| uv.is_finite()));
        assert!(sub.validate().is_ok());
        assert_eq!(sub.degenerate_triangle_count(), 0);
    }

    #[test]
    fn test_lattice_seam_duplicated() {
        let sub = cylinder_lattice(1, 8);
        let first = sub.vertex(0).unwrap();
        let last = sub.vertex(8).unwrap();
        assert_relative_eq!(first, last, epsilon = 1e-12);
        assert_eq!(sub.texcoord(0).unwrap().x, 0.0);
        assert_eq!(sub.texcoord(8).unwrap().x, 1.0);
    }

    #[test]
    fn test_lattice_faces_outward() {
        let sub = cylinder_lattice(3, 12);
        for [a, b, c] in sub.triangles() {
            let (pa, pb, pc) = (
                sub.vertex(a as usize).unwrap(),
                sub.vertex(b as usize).unwrap(),
                sub.vertex(c as usize).unwrap(),
            );
            let face = (pb - pa).cross(pc - pa);
            let centroid = (pa + pb + pc) / 3.0;
            let outward = DVec3::new(centroid.x, centroid.y, 0.0);
            assert!(face.dot(outward) > 0.0);
        }
    }

    #[test]
    fn test_lattice_has_no_degenerate_triangles_on_constant_radius() {
        let sub = cylinder_lattice(2, 6);
        assert_eq!(sub.degenerate_triangle_count(), 0);
    }

    #[test]
    fn test_lattice_span_offsets() {
        let mut sub = cylinder_lattice(1, 4);
        let span = Lattice {
            rings: 1,
            segments: 4,
            sweep: TAU,
            radius: |_: u32| 2.0,
            height: |_: u32| 0.0,
            normal: LatticeNormal::Constant(DVec3::Z),
        }
        .build(&mut sub);
        assert_eq!(span.first_vertex, 10);
        assert_eq!(span.first_index, 24);
        assert_eq!(span.vertex(4, 1, 2), 10 + 5 + 2);
        assert_eq!(sub.normal(12).unwrap(), DVec3::Z);
    }

    #[test]
    fn test_cap_fan_faces_requested_direction() {
        for facing_up in [true, false] {
            let mut sub = SubMesh::new();
            add_cap_fan(&mut sub, 1.0, 0.0, 6, facing_up);
            assert_eq!(sub.vertex_count(), 8);
            assert_eq!(sub.triangle_count(), 6);
            let expected = if facing_up { 1.0 } else { -1.0 };
            for [a, b, c] in sub.triangles() {
                let (pa, pb, pc) = (
                    sub.vertex(a as usize).unwrap(),
                    sub.vertex(b as usize).unwrap(),
                    sub.vertex(c as usize).unwrap(),
                );
                assert!((pb - pa).cross(pc - pa).z * expected > 0.0);
            }
        }
    }

    #[test]
    fn test_cap_fan_clamps_zero_segments() {
        let mut sub = SubMesh::new();
        add_cap_fan(&mut sub, 1.0, 0.0, 0, true);
        assert_eq!(sub.vertex_count(), 4 + 1);
        assert_eq!(sub.triangle_count(), 3);
        assert!(sub.vertices().iter().all(|p| p.is_finite()));
        assert!(sub.validate().is_ok());
    }

    #[test]
    fn test_facing_quad_winding() {
        let mut sub = SubMesh::new();
        let corners = [
            DVec3::ZERO,
            DVec3::X,
            DVec3::new(1.0, 1.0, 0.0),
            DVec3::Y,
        ];
        add_facing_quad(&mut sub, corners, [DVec2::ZERO; 4], DVec3::NEG_Z);
        for [a, b, c] in sub.triangles() {
            let (pa, pb, pc) = (
                sub.vertex(a as usize).unwrap(),
                sub.vertex(b as usize).unwrap(),
                sub.vertex(c as usize).unwrap(),
            );
            assert!((pb - pa).cross(pc - pa).z < 0.0);
        }
    }
}
