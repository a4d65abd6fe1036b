//! # Cone Primitive
//!
//! Generates a cone along the Z axis with its apex at `+height / 2`.

use crate::lattice::{add_cap_fan, Lattice, LatticeNormal};
use crate::mesh::SubMesh;
use config::constants::{clamp_rings, clamp_segments};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Parameters of a cone.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConeParams {
    /// Radius of the base.
    pub radius: f64,
    pub height: f64,
    pub rings: u32,
    pub segments: u32,
}

/// Creates a cone mesh with a flat bottom cap.
///
/// The radius tapers linearly to zero, so the last ring collapses onto the
/// apex. Side normals are flattened per triangle and then recomputed from
/// the faces.
pub fn create_cone(params: &ConeParams) -> SubMesh {
    let rings = clamp_rings(params.rings);
    let segments = clamp_segments(params.segments);
    let ConeParams { radius, height, .. } = *params;

    let mut sub = SubMesh::new();
    Lattice {
        rings,
        segments,
        sweep: TAU,
        radius: |ring: u32| radius * (1.0 - ring as f64 / rings as f64),
        height: |ring: u32| ring as f64 * height / rings as f64 - height / 2.0,
        normal: LatticeNormal::Spherical,
    }
    .build(&mut sub);

    add_cap_fan(&mut sub, radius, -height / 2.0, segments, false);

    sub.flatten_corner_normals();
    sub.recalculate_normals();
    sub
}
