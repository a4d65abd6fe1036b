//! # Box Primitives
//!
//! Generates boxes and the faceted camera box from a fixed corner table.
//!
//! Each face owns four duplicated corner vertices so it can carry its own
//! flat normal, giving 24 vertices and 36 indices for every box.

use crate::mesh::SubMesh;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Unit cube corners, `±1` on every axis.
const CORNERS: [[f64; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

/// Corners of each face, counter-clockwise seen from outside.
const FACES: [[usize; 4]; 6] = [
    [4, 5, 6, 7], // +Z
    [0, 3, 2, 1], // -Z
    [0, 1, 5, 4], // -Y
    [2, 3, 7, 6], // +Y
    [3, 0, 4, 7], // -X
    [1, 2, 6, 5], // +X
];

const FACE_NORMALS: [[f64; 3]; 6] = [
    [0.0, 0.0, 1.0],
    [0.0, 0.0, -1.0],
    [0.0, -1.0, 0.0],
    [0.0, 1.0, 0.0],
    [-1.0, 0.0, 0.0],
    [1.0, 0.0, 0.0],
];

/// Texture coordinates of the four corners of every face.
const FACE_UVS: [[f64; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

/// Two triangles per face over the 24 face vertices.
const INDICES: [u32; 36] = [
    0, 1, 2, 0, 2, 3, //
    4, 5, 6, 4, 6, 7, //
    8, 9, 10, 8, 10, 11, //
    12, 13, 14, 12, 14, 15, //
    16, 17, 18, 16, 18, 19, //
    20, 21, 22, 20, 22, 23,
];

/// Parameters of an axis-aligned box centered at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxParams {
    /// Full side lengths along X, Y and Z.
    pub sides: DVec3,
    /// Texture tiling along U and V on every face.
    pub uv: DVec2,
}

impl Default for BoxParams {
    fn default() -> Self {
        Self {
            sides: DVec3::ONE,
            uv: DVec2::ONE,
        }
    }
}

/// Parameters of the faceted camera box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraParams {
    /// Half extent of the box on every axis.
    pub scale: f64,
}

/// Creates a box with one flat normal per face.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::primitives::{create_box, BoxParams};
/// use glam::{DVec2, DVec3};
///
/// let sub = create_box(&BoxParams { sides: DVec3::ONE, uv: DVec2::ONE });
/// assert_eq!(sub.vertex_count(), 24);
/// assert_eq!(sub.index_count(), 36);
/// ```
pub fn create_box(params: &BoxParams) -> SubMesh {
    let half = params.sides * 0.5;
    let mut sub = SubMesh::with_capacity(24, 36);

    for (face, normal) in FACES.iter().zip(FACE_NORMALS) {
        for (corner, uv) in face.iter().zip(FACE_UVS) {
            sub.add_vertex(DVec3::from_array(CORNERS[*corner]) * half);
            sub.add_normal(DVec3::from_array(normal));
            sub.add_texcoord(DVec2::from_array(uv) * params.uv);
        }
    }
    push_indices(&mut sub);
    sub
}

/// Creates the camera box: the same 24-vertex layout with corner-direction
/// normals for a faceted look, and no texture coordinates.
pub fn create_camera_box(params: &CameraParams) -> SubMesh {
    let mut sub = SubMesh::with_capacity(24, 36);

    for face in &FACES {
        for corner in face {
            let direction = DVec3::from_array(CORNERS[*corner]);
            sub.add_vertex(direction * params.scale);
            sub.add_normal(direction.normalize());
        }
    }
    push_indices(&mut sub);
    sub
}

fn push_indices(sub: &mut SubMesh) {
    for index in INDICES {
        sub.add_index(index);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Mesh;
    use approx::assert_relative_eq;

    fn unit_box() -> SubMesh {
        create_box(&BoxParams {
            sides: DVec3::ONE,
            uv: DVec2::ONE,
        })
    }

    #[test]
    fn test_box_counts() {
        let sub = unit_box();
        assert_eq!(sub.vertex_count(), 24);
        assert_eq!(sub.normal_count(), 24);
        assert_eq!(sub.texcoord_count(), 24);
        assert_eq!(sub.index_count(), 36);
        assert!(sub.validate().is_ok());
    }

    #[test]
    fn test_box_bounding_box() {
        let mesh = Mesh::from_submesh("b", unit_box());
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::splat(-0.5));
        assert_eq!(max, DVec3::splat(0.5));
    }

    #[test]
    fn test_box_rectangular() {
        let sub = create_box(&BoxParams {
            sides: DVec3::new(2.0, 4.0, 6.0),
            uv: DVec2::ONE,
        });
        let (min, max) = sub.bounding_box().unwrap();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_box_winding_matches_face_normals() {
        let sub = unit_box();
        for [a, b, c] in sub.triangles() {
            let (pa, pb, pc) = (
                sub.vertex(a as usize).unwrap(),
                sub.vertex(b as usize).unwrap(),
                sub.vertex(c as usize).unwrap(),
            );
            let face = (pb - pa).cross(pc - pa).normalize();
            assert_relative_eq!(face, sub.normal(a as usize).unwrap(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_box_uv_tiling() {
        let sub = create_box(&BoxParams {
            sides: DVec3::ONE,
            uv: DVec2::new(2.0, 3.0),
        });
        let max_uv = sub
            .texcoords()
            .iter()
            .fold(DVec2::ZERO, |acc, uv| acc.max(*uv));
        assert_eq!(max_uv, DVec2::new(2.0, 3.0));
    }

    #[test]
    fn test_camera_box() {
        let sub = create_camera_box(&CameraParams { scale: 0.5 });
        assert_eq!(sub.vertex_count(), 24);
        assert_eq!(sub.index_count(), 36);
        assert_eq!(sub.texcoord_count(), 0);
        assert!(sub.validate().is_ok());

        let expected = DVec3::ONE.normalize();
        let top_right = sub
            .vertices()
            .iter()
            .position(|v| *v == DVec3::splat(0.5))
            .unwrap();
        assert_relative_eq!(sub.normal(top_right).unwrap(), expected, epsilon = 1e-12);
    }
}
