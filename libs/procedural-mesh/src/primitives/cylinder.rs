//! # Cylinder Primitive
//!
//! Generates a capped cylinder along the Z axis, centered at the origin.

use crate::lattice::{add_cap_fan, Lattice, LatticeNormal};
use crate::mesh::SubMesh;
use config::constants::{clamp_rings, clamp_segments};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Parameters of a cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CylinderParams {
    pub radius: f64,
    pub height: f64,
    /// Bands along the height.
    pub rings: u32,
    /// Columns around the Z axis.
    pub segments: u32,
}

/// Creates a cylinder mesh with flat top and bottom caps.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::primitives::{create_cylinder, CylinderParams};
///
/// let sub = create_cylinder(&CylinderParams { radius: 0.5, height: 1.0, rings: 1, segments: 8 });
/// let (min, max) = sub.bounding_box().unwrap();
/// assert_eq!(min.z, -0.5);
/// assert_eq!(max.z, 0.5);
/// ```
pub fn create_cylinder(params: &CylinderParams) -> SubMesh {
    let rings = clamp_rings(params.rings);
    let segments = clamp_segments(params.segments);
    let CylinderParams { radius, height, .. } = *params;

    let mut sub = SubMesh::new();
    Lattice {
        rings,
        segments,
        sweep: TAU,
        radius: |_: u32| radius,
        height: |ring: u32| ring as f64 * height / rings as f64 - height / 2.0,
        normal: LatticeNormal::Radial,
    }
    .build(&mut sub);

    add_cap_fan(&mut sub, radius, height / 2.0, segments, true);
    add_cap_fan(&mut sub, radius, -height / 2.0, segments, false);
    sub
}
