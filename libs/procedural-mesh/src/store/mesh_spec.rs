//! Serializable mesh descriptions.

use crate::error::MeshError;
use crate::extrude::{extrude_polylines, ExtrusionParams, Triangulator};
use crate::mesh::Mesh;
use crate::primitives::{
    create_box, create_camera_box, create_cone, create_cylinder, create_plane, create_sphere,
    create_tube, BoxParams, CameraParams, ConeParams, CylinderParams, PlaneParams, SphereParams,
    TubeParams,
};
use serde::{Deserialize, Serialize};

/// A generator together with its parameters.
///
/// Serialized with an internal `type` tag:
///
/// ```rust
/// use procedural_mesh::store::MeshSpec;
///
/// let spec: MeshSpec = serde_json::from_str(
///     r#"{ "type": "sphere", "radius": 0.5, "rings": 4, "segments": 4 }"#,
/// ).unwrap();
/// assert_eq!(spec.kind(), "sphere");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MeshSpec {
    Plane(PlaneParams),
    Box(BoxParams),
    Camera(CameraParams),
    Sphere(SphereParams),
    Cylinder(CylinderParams),
    Cone(ConeParams),
    Tube(TubeParams),
    ExtrudedPolyline(ExtrusionParams),
}

impl MeshSpec {
    /// Short generator name, used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            MeshSpec::Plane(_) => "plane",
            MeshSpec::Box(_) => "box",
            MeshSpec::Camera(_) => "camera",
            MeshSpec::Sphere(_) => "sphere",
            MeshSpec::Cylinder(_) => "cylinder",
            MeshSpec::Cone(_) => "cone",
            MeshSpec::Tube(_) => "tube",
            MeshSpec::ExtrudedPolyline(_) => "extruded_polyline",
        }
    }

    /// Runs the generator into a single-submesh [`Mesh`].
    ///
    /// Only extrusions can fail; every other generator clamps its input.
    pub fn build(&self, name: &str, triangulator: &dyn Triangulator) -> Result<Mesh, MeshError> {
        let submesh = match self {
            MeshSpec::Plane(params) => create_plane(params),
            MeshSpec::Box(params) => create_box(params),
            MeshSpec::Camera(params) => create_camera_box(params),
            MeshSpec::Sphere(params) => create_sphere(params),
            MeshSpec::Cylinder(params) => create_cylinder(params),
            MeshSpec::Cone(params) => create_cone(params),
            MeshSpec::Tube(params) => create_tube(params),
            MeshSpec::ExtrudedPolyline(params) => extrude_polylines(params, triangulator)?,
        };
        Ok(Mesh::from_submesh(name, submesh))
    }
}
