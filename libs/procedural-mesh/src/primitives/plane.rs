//! # Plane Primitive
//!
//! Generates a subdivided, textured plane with a thin back layer.

use crate::mesh::SubMesh;
use crate::tessellate::{tessellate_grid, GridFaces};
use config::constants::PLANE_THICKNESS;
use glam::{DMat3, DVec2, DVec3, UVec2};
use serde::{Deserialize, Serialize};

/// Parameters of a rectangular plane.
///
/// The plane is centered on `normal * offset`, with its local X/Y axes
/// chosen perpendicular to `normal`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneParams {
    /// Plane normal; need not be unit length.
    pub normal: DVec3,
    /// Signed distance of the plane from the origin along `normal`.
    pub offset: f64,
    /// Extent along the local X and Y axes.
    pub size: DVec2,
    /// Number of grid cells along the local X and Y axes.
    pub segments: UVec2,
    /// Texture repeat count along the local X and Y axes.
    pub uv_tile: DVec2,
}

impl Default for PlaneParams {
    fn default() -> Self {
        Self {
            normal: DVec3::Z,
            offset: 0.0,
            size: DVec2::ONE,
            segments: UVec2::ONE,
            uv_tile: DVec2::ONE,
        }
    }
}

/// Creates a plane mesh.
///
/// Two `(segments.x + 1) × (segments.y + 1)` grids are emitted: the front
/// layer facing `normal`, and a back layer [`PLANE_THICKNESS`] behind it
/// facing away, so shadow passes never see a zero-thickness surface.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::primitives::{create_plane, PlaneParams};
///
/// let sub = create_plane(&PlaneParams::default());
/// assert_eq!(sub.vertex_count(), 8);
/// assert_eq!(sub.triangle_count(), 4);
/// ```
pub fn create_plane(params: &PlaneParams) -> SubMesh {
    let segments = params.segments.max(UVec2::ONE);
    let z_axis = params.normal.try_normalize().unwrap_or(DVec3::Z);
    let y_axis = z_axis.any_orthonormal_vector();
    let x_axis = y_axis.cross(z_axis);
    let rotation = DMat3::from_cols(x_axis, y_axis, z_axis);
    let origin = z_axis * params.offset;

    let spacing = params.size / segments.as_dvec2();
    let half = params.size * 0.5;
    let tex_step = params.uv_tile / segments.as_dvec2();

    let layer_len = ((segments.x + 1) * (segments.y + 1)) as usize;
    let mut sub = SubMesh::with_capacity(layer_len * 2, layer_len * 2 * 6);

    for (layer, normal) in [(0u32, z_axis), (1u32, -z_axis)] {
        let depth = -(layer as f64) * PLANE_THICKNESS;
        for y in 0..=segments.y {
            for x in 0..=segments.x {
                let local = DVec3::new(
                    x as f64 * spacing.x - half.x,
                    y as f64 * spacing.y - half.y,
                    depth,
                );
                sub.add_vertex(rotation * local + origin);
                sub.add_normal(normal);
                sub.add_texcoord(DVec2::new(
                    x as f64 * tex_step.x,
                    1.0 - y as f64 * tex_step.y,
                ));
            }
        }
    }

    let (width, height) = (segments.x + 1, segments.y + 1);
    tessellate_grid(&mut sub, 0, width, height, GridFaces::Front);
    tessellate_grid(&mut sub, layer_len as u32, width, height, GridFaces::Back);
    sub
}
