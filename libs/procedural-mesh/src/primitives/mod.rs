//! # Primitives
//!
//! Mesh generation for primitive solids. Every generator returns a single
//! [`SubMesh`](crate::SubMesh) with positions, normals and (except for the
//! camera box) texture coordinates.

pub mod cone;
pub mod cube;
pub mod cylinder;
pub mod plane;
pub mod sphere;
pub mod tube;

pub use cone::{create_cone, ConeParams};
pub use cube::{create_box, create_camera_box, BoxParams, CameraParams};
pub use cylinder::{create_cylinder, CylinderParams};
pub use plane::{create_plane, PlaneParams};
pub use sphere::{create_sphere, SphereParams};
pub use tube::{create_tube, TubeParams};
