//! Meshes every store starts with.

use super::MeshSpec;
use crate::primitives::{
    BoxParams, CameraParams, ConeParams, CylinderParams, PlaneParams, SphereParams, TubeParams,
};
use config::constants::{
    AXIS_GIZMO_SEGMENTS, AXIS_HEAD, AXIS_SHAFT, BODY_CG, BUILTIN_SEGMENTS,
    BUILTIN_SPHERE_RESOLUTION, FULL_ARC, JOINT_ANCHOR, SELECTION_TUBE, SELECTION_TUBE_SEGMENTS,
    UNIT_BOX, UNIT_CAMERA, UNIT_CONE, UNIT_CYLINDER, UNIT_PLANE, UNIT_SPHERE,
};
use glam::{DVec2, DVec3};

/// Names and generators of the built-in meshes.
///
/// The order matches [`config::constants::BUILTIN_MESH_NAMES`].
pub fn builtin_specs() -> Vec<(&'static str, MeshSpec)> {
    let sphere = |radius| {
        MeshSpec::Sphere(SphereParams {
            radius,
            rings: BUILTIN_SPHERE_RESOLUTION,
            segments: BUILTIN_SPHERE_RESOLUTION,
        })
    };
    let cube = |side| {
        MeshSpec::Box(BoxParams {
            sides: DVec3::splat(side),
            uv: DVec2::splat(side),
        })
    };

    vec![
        (UNIT_PLANE, MeshSpec::Plane(PlaneParams::default())),
        (UNIT_SPHERE, sphere(0.5)),
        (JOINT_ANCHOR, sphere(0.01)),
        (BODY_CG, cube(0.014)),
        (UNIT_BOX, cube(1.0)),
        (
            UNIT_CYLINDER,
            MeshSpec::Cylinder(CylinderParams {
                radius: 0.5,
                height: 1.0,
                rings: 1,
                segments: BUILTIN_SEGMENTS,
            }),
        ),
        (
            UNIT_CONE,
            MeshSpec::Cone(ConeParams {
                radius: 0.5,
                height: 1.0,
                rings: 5,
                segments: BUILTIN_SEGMENTS,
            }),
        ),
        (UNIT_CAMERA, MeshSpec::Camera(CameraParams { scale: 0.5 })),
        (
            AXIS_SHAFT,
            MeshSpec::Cylinder(CylinderParams {
                radius: 0.01,
                height: 0.2,
                rings: 1,
                segments: AXIS_GIZMO_SEGMENTS,
            }),
        ),
        (
            AXIS_HEAD,
            MeshSpec::Cone(ConeParams {
                radius: 0.02,
                height: 0.08,
                rings: 1,
                segments: AXIS_GIZMO_SEGMENTS,
            }),
        ),
        (
            SELECTION_TUBE,
            MeshSpec::Tube(TubeParams {
                inner_radius: 1.0,
                outer_radius: 1.2,
                height: 0.01,
                rings: 1,
                segments: SELECTION_TUBE_SEGMENTS,
                arc: FULL_ARC,
            }),
        ),
    ]
}
