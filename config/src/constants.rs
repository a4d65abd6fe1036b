//! # Configuration Constants
//!
//! Centralized constants for the procedural mesh engine. Tolerances,
//! tessellation clamps, loader extension tables and the parameters of the
//! built-in mesh catalog are all defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Tessellation**: Minimum ring/segment counts and plane thickness
//! - **Formats**: File extensions understood by the mesh store
//! - **Catalog**: Names and parameters of the eagerly created built-ins

use std::f64::consts::TAU;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance used when matching 2D points produced by the triangulator
/// against the caller's polyline points, relative to the diagonal of the
/// polylines' bounding box.
///
/// Triangulators may round-trip coordinates through their own numeric
/// representation, so an exact comparison is too strict, and an absolute
/// one breaks on very small or very large inputs.
///
/// # Example
///
/// ```rust
/// use config::constants::point_match_tolerance;
///
/// assert_eq!(point_match_tolerance(2.0), 2e-6);
/// assert!(point_match_tolerance(1e-7) < 1e-7);
/// ```
pub const POINT_MATCH_RELATIVE_EPSILON: f64 = 1e-6;

/// Epsilon below which a triangle is considered degenerate (zero area).
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Minimum number of angular segments for any swept shape.
///
/// Callers passing fewer segments are silently clamped up.
///
/// # Example
///
/// ```rust
/// use config::constants::{clamp_segments, MIN_SEGMENTS};
///
/// assert_eq!(clamp_segments(1), MIN_SEGMENTS);
/// assert_eq!(clamp_segments(16), 16);
/// ```
pub const MIN_SEGMENTS: u32 = 3;

/// Minimum number of rings for any swept shape.
///
/// # Example
///
/// ```rust
/// use config::constants::{clamp_rings, MIN_RINGS};
///
/// assert_eq!(clamp_rings(0), MIN_RINGS);
/// ```
pub const MIN_RINGS: u32 = 1;

/// Offset of the duplicated back layer of a generated plane.
///
/// The back layer sits this far behind the front layer along the plane
/// normal so downstream shadow passes never see a zero-thickness surface.
pub const PLANE_THICKNESS: f64 = 0.01;

/// A full revolution, the default sweep of a tube.
pub const FULL_ARC: f64 = TAU;

// =============================================================================
// FORMAT CONSTANTS
// =============================================================================

/// Extensions handled by the triangle-soup loader (binary and ASCII).
pub const TRIANGLE_SOUP_EXTENSIONS: &[&str] = &["stl"];

/// Extensions handled by the ASCII indexed triangle-mesh loader.
pub const ASCII_TRIMESH_EXTENSIONS: &[&str] = &["obj"];

/// Extensions handled by the XML scene-graph loader.
pub const SCENE_GRAPH_EXTENSIONS: &[&str] = &["dae"];

// =============================================================================
// BUILT-IN CATALOG
// =============================================================================

/// Name of the built-in unit plane.
pub const UNIT_PLANE: &str = "unit_plane";
/// Name of the built-in unit sphere.
pub const UNIT_SPHERE: &str = "unit_sphere";
/// Name of the small sphere used to mark joint anchors.
pub const JOINT_ANCHOR: &str = "joint_anchor";
/// Name of the small box used to mark a body's center of gravity.
pub const BODY_CG: &str = "body_cg";
/// Name of the built-in unit box.
pub const UNIT_BOX: &str = "unit_box";
/// Name of the built-in unit cylinder.
pub const UNIT_CYLINDER: &str = "unit_cylinder";
/// Name of the built-in unit cone.
pub const UNIT_CONE: &str = "unit_cone";
/// Name of the built-in camera box.
pub const UNIT_CAMERA: &str = "unit_camera";
/// Name of the axis gizmo shaft.
pub const AXIS_SHAFT: &str = "axis_shaft";
/// Name of the axis gizmo arrow head.
pub const AXIS_HEAD: &str = "axis_head";
/// Name of the annular selection tube.
pub const SELECTION_TUBE: &str = "selection_tube";

/// Every name the store pre-populates when built-ins are enabled.
///
/// # Example
///
/// ```rust
/// use config::constants::{BUILTIN_MESH_NAMES, UNIT_SPHERE};
///
/// assert!(BUILTIN_MESH_NAMES.contains(&UNIT_SPHERE));
/// assert_eq!(BUILTIN_MESH_NAMES.len(), 11);
/// ```
pub const BUILTIN_MESH_NAMES: &[&str] = &[
    UNIT_PLANE,
    UNIT_SPHERE,
    JOINT_ANCHOR,
    BODY_CG,
    UNIT_BOX,
    UNIT_CYLINDER,
    UNIT_CONE,
    UNIT_CAMERA,
    AXIS_SHAFT,
    AXIS_HEAD,
    SELECTION_TUBE,
];

/// Default ring and segment count for built-in spheres.
pub const BUILTIN_SPHERE_RESOLUTION: u32 = 32;

/// Default segment count for built-in cylinders and cones.
pub const BUILTIN_SEGMENTS: u32 = 32;

/// Segment count for the axis gizmo primitives.
pub const AXIS_GIZMO_SEGMENTS: u32 = 16;

/// Segment count for the selection tube.
pub const SELECTION_TUBE_SEGMENTS: u32 = 64;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Clamps a caller supplied segment count to [`MIN_SEGMENTS`].
#[inline]
pub fn clamp_segments(segments: u32) -> u32 {
    segments.max(MIN_SEGMENTS)
}

/// Clamps a caller supplied ring count to [`MIN_RINGS`].
#[inline]
pub fn clamp_rings(rings: u32) -> u32 {
    rings.max(MIN_RINGS)
}

/// Absolute point matching tolerance for input spanning `extent`.
#[inline]
pub fn point_match_tolerance(extent: f64) -> f64 {
    extent * POINT_MATCH_RELATIVE_EPSILON
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
