//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_point_match_tolerance_scales_with_extent() {
    assert!(POINT_MATCH_RELATIVE_EPSILON > 0.0);
    assert_eq!(point_match_tolerance(0.0), 0.0);
    // Stays well below the spacing of any distinct corners
    for extent in [1e-7, 1.0, 1e6] {
        assert!(point_match_tolerance(extent) < extent * 1e-3);
    }
}

// =============================================================================
// TESSELLATION TESTS
// =============================================================================

#[test]
fn test_min_segments_forms_polygon() {
    // A sweep needs at least 3 columns to enclose any area
    assert_eq!(MIN_SEGMENTS, 3);
}

#[test]
fn test_clamp_segments() {
    assert_eq!(clamp_segments(0), 3);
    assert_eq!(clamp_segments(2), 3);
    assert_eq!(clamp_segments(3), 3);
    assert_eq!(clamp_segments(64), 64);
}

#[test]
fn test_clamp_rings() {
    assert_eq!(clamp_rings(0), 1);
    assert_eq!(clamp_rings(1), 1);
    assert_eq!(clamp_rings(5), 5);
}

#[test]
fn test_plane_thickness_is_small() {
    assert!(PLANE_THICKNESS > 0.0);
    assert!(PLANE_THICKNESS < 0.1);
}

// =============================================================================
// FORMAT TESTS
// =============================================================================

#[test]
fn test_format_extensions_disjoint() {
    for ext in TRIANGLE_SOUP_EXTENSIONS {
        assert!(!ASCII_TRIMESH_EXTENSIONS.contains(ext));
        assert!(!SCENE_GRAPH_EXTENSIONS.contains(ext));
    }
    for ext in ASCII_TRIMESH_EXTENSIONS {
        assert!(!SCENE_GRAPH_EXTENSIONS.contains(ext));
    }
}

#[test]
fn test_format_extensions_lowercase() {
    let all = TRIANGLE_SOUP_EXTENSIONS
        .iter()
        .chain(ASCII_TRIMESH_EXTENSIONS)
        .chain(SCENE_GRAPH_EXTENSIONS);
    for ext in all {
        assert_eq!(*ext, ext.to_lowercase());
    }
}

// =============================================================================
// CATALOG TESTS
// =============================================================================

#[test]
fn test_builtin_names_unique() {
    let mut names = BUILTIN_MESH_NAMES.to_vec();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), BUILTIN_MESH_NAMES.len());
}

#[test]
fn test_builtin_resolutions_above_minimum() {
    assert!(BUILTIN_SPHERE_RESOLUTION >= MIN_SEGMENTS);
    assert!(BUILTIN_SEGMENTS >= MIN_SEGMENTS);
    assert!(AXIS_GIZMO_SEGMENTS >= MIN_SEGMENTS);
    assert!(SELECTION_TUBE_SEGMENTS >= MIN_SEGMENTS);
}

// =============================================================================
// APPROX TESTS
// =============================================================================

#[test]
fn test_approx_equal_same_values() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(0.0, 0.0));
}

#[test]
fn test_approx_equal_different_values() {
    assert!(!approx_equal(1.0, 1.0001));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(-1e-11));
    assert!(!approx_zero(1e-3));
}
