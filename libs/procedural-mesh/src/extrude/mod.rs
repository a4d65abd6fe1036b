//! # Polyline Extrusion
//!
//! Sweeps closed 2D polylines along +Z into a solid with a bottom cap, a
//! top cap and flat side walls.
//!
//! The pipeline runs in fixed stages:
//!
//! 1. [`sanitize_paths`] drops unusable loops and implicit closing points
//! 2. a [`Triangulator`] fills the loop interiors
//! 3. [`boundary_edges`] lists every loop edge, wrap-around included
//! 4. [`resolve_outward_normals`] picks the outward side of each edge
//! 5. caps and walls are appended to a fresh [`SubMesh`]
//!
//! Every loop is treated as an outer boundary. Nested loops are triangulated
//! as holes, but their walls still face away from the triangle that touches
//! them.

mod triangulate;


pub use triangulate::{
    point_in_paths, point_in_polygon, DelaunayTriangulator, Triangulation, Triangulator,
};

use crate::error::MeshError;
use crate::mesh::SubMesh;
use config::constants::point_match_tolerance;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Parameters for a polyline extrusion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtrusionParams {
    /// Closed loops in the XY plane. The closing edge is implicit.
    pub paths: Vec<Vec<DVec2>>,
    /// Extent along +Z.
    pub height: f64,
}

impl Default for ExtrusionParams {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            height: 1.0,
        }
    }
}

/// One edge of an input loop, from `start` to `end`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryEdge {
    pub start: DVec2,
    pub end: DVec2,
}

/// Extrudes `params.paths` to `params.height`.
///
/// # Errors
///
/// - [`MeshError::TriangulationUnavailable`] when the triangulator is not
///   compiled in
/// - [`MeshError::TriangulationFailed`] when no usable loop remains, the
///   triangulator fails, or an edge has no resolvable outward normal
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use procedural_mesh::extrude::{extrude_polylines, DelaunayTriangulator, ExtrusionParams};
///
/// let params = ExtrusionParams {
///     paths: vec![vec![DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y]],
///     height: 2.0,
/// };
/// # #[cfg(feature = "triangulation")]
/// # {
/// let sub = extrude_polylines(&params, &DelaunayTriangulator).unwrap();
/// assert_eq!(sub.triangle_count(), 12);
/// # }
/// ```
pub fn extrude_polylines(
    params: &ExtrusionParams,
    triangulator: &dyn Triangulator,
) -> Result<SubMesh, MeshError> {
    let paths = sanitize_paths(&params.paths);
    if paths.is_empty() {
        return Err(MeshError::triangulation_failed(
            "no path with at least 3 points",
        ));
    }

    let triangulation = triangulator.triangulate(&paths)?;
    let edges = boundary_edges(&paths);
    let normals = resolve_outward_normals(&edges, &triangulation)?;

    let mut sub = SubMesh::with_capacity(
        triangulation.points.len() * 2 + edges.len() * 6,
        triangulation.triangles.len() * 6 + edges.len() * 6,
    );
    add_caps(&mut sub, &triangulation, params.height)?;
    for (edge, normal) in edges.iter().zip(&normals) {
        add_wall(&mut sub, edge, *normal, params.height);
    }

    debug!(
        paths = paths.len(),
        edges = edges.len(),
        vertices = sub.vertex_count(),
        indices = sub.index_count(),
        "Extruded polylines"
    );
    Ok(sub)
}

/// Drops an explicit closing point identical to the first point, then
/// drops loops left with fewer than 3 points.
pub fn sanitize_paths(paths: &[Vec<DVec2>]) -> Vec<Vec<DVec2>> {
    paths
        .iter()
        .filter_map(|path| {
            let mut path = path.clone();
            if let (Some(first), Some(last)) = (path.first(), path.last()) {
                if path.len() > 1 && first == last {
                    path.pop();
                }
            }
            (path.len() >= 3).then_some(path)
        })
        .collect()
}

/// Every consecutive point pair of every loop, including the closing edge.
pub fn boundary_edges(paths: &[Vec<DVec2>]) -> Vec<BoundaryEdge> {
    paths
        .iter()
        .flat_map(|path| {
            path.iter().enumerate().map(move |(i, start)| BoundaryEdge {
                start: *start,
                end: path[(i + 1) % path.len()],
            })
        })
        .collect()
}

/// Resolves one outward normal per boundary edge.
///
/// The outward side of an edge is the side away from the third corner of
/// the first triangle that uses both edge endpoints.
///
/// # Errors
///
/// [`MeshError::TriangulationFailed`] when any edge is left without a
/// normal.
pub fn resolve_outward_normals(
    edges: &[BoundaryEdge],
    triangulation: &Triangulation,
) -> Result<Vec<DVec3>, MeshError> {
    let tolerance = point_match_tolerance(edge_extent(edges));
    let normals: Vec<DVec3> = edges
        .iter()
        .filter_map(|edge| edge_normal(edge, triangulation, tolerance))
        .collect();

    if normals.len() != edges.len() {
        return Err(MeshError::triangulation_failed(format!(
            "resolved {} outward normals for {} boundary edges",
            normals.len(),
            edges.len()
        )));
    }
    Ok(normals)
}

/// Diagonal of the bounding box of every edge endpoint.
fn edge_extent(edges: &[BoundaryEdge]) -> f64 {
    let Some(first) = edges.first() else {
        return 0.0;
    };
    let (min, max) = edges
        .iter()
        .fold((first.start, first.start), |(min, max), edge| {
            (min.min(edge.start).min(edge.end), max.max(edge.start).max(edge.end))
        });
    (max - min).length()
}

fn edge_normal(
    edge: &BoundaryEdge,
    triangulation: &Triangulation,
    tolerance: f64,
) -> Option<DVec3> {
    let p0 = edge.start;
    let p1 = edge.end;
    let edge_dir = (p0 - p1).try_normalize()?;
    let n = DVec2::new(edge_dir.y, -edge_dir.x);

    let p2 = triangulation.triangles.iter().find_map(|&triangle| {
        let corners = triangulation.corners(triangle)?;
        third_corner(corners, p0, p1, tolerance)
    })?;
    let other_dir = (p0 - p2).try_normalize()?;

    let s0 = other_dir.dot(n);
    let s1 = other_dir.dot(-n);
    let chosen = if s0 > s1 && s0 >= 0.0 {
        n
    } else if s1 > s0 && s1 >= 0.0 {
        -n
    } else {
        return None;
    };
    Some(chosen.extend(0.0))
}

/// Returns the corner that is neither `p0` nor `p1`, when both are present.
fn third_corner(corners: [DVec2; 3], p0: DVec2, p1: DVec2, tolerance: f64) -> Option<DVec2> {
    let matches = |a: DVec2, b: DVec2| a.distance(b) <= tolerance;
    let i0 = corners.iter().position(|c| matches(*c, p0))?;
    let i1 = corners.iter().position(|c| matches(*c, p1))?;
    if i0 == i1 {
        return None;
    }
    Some(corners[3 - i0 - i1])
}

fn add_caps(sub: &mut SubMesh, triangulation: &Triangulation, height: f64) -> Result<(), MeshError> {
    let bottom = sub.vertex_count() as u32;
    for p in &triangulation.points {
        sub.add_vertex(p.extend(0.0));
        sub.add_normal(DVec3::NEG_Z);
    }
    let top = sub.vertex_count() as u32;
    for p in &triangulation.points {
        sub.add_vertex(p.extend(height));
        sub.add_normal(DVec3::Z);
    }

    for &triangle in &triangulation.triangles {
        let [a, b, c] = triangulation.corners(triangle).ok_or_else(|| {
            MeshError::triangulation_failed(format!(
                "triangle {triangle:?} names a point outside {} points",
                triangulation.points.len()
            ))
        })?;
        // Bottom faces -Z, so counter-clockwise input is flipped
        let [i, j, k] = triangle;
        let (j, k) = if (b - a).perp_dot(c - a) > 0.0 { (k, j) } else { (j, k) };
        sub.add_triangle(bottom + i, bottom + j, bottom + k);
        sub.add_triangle(top + i, top + k, top + j);
    }
    Ok(())
}

fn add_wall(sub: &mut SubMesh, edge: &BoundaryEdge, normal: DVec3, height: f64) {
    let a = edge.start.extend(0.0);
    let b = edge.start.extend(height);
    let c = edge.end.extend(height);
    let d = edge.end.extend(0.0);

    let corners = if (d - a).cross(normal).z > 0.0 {
        [a, c, d, a, b, c]
    } else {
        [a, d, c, a, c, b]
    };
    let first = sub.vertex_count() as u32;
    for corner in corners {
        sub.add_vertex(corner);
        sub.add_normal(normal);
    }
    sub.add_triangle(first, first + 1, first + 2);
    sub.add_triangle(first + 3, first + 4, first + 5);
}
