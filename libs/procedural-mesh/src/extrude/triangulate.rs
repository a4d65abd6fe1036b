//! # Triangulation Collaborator
//!
//! Constrained 2D triangulation of one or more closed loops. The extruder
//! only depends on the [`Triangulator`] trait; [`DelaunayTriangulator`] is
//! the default backend, built on `spade` when the `triangulation` feature
//! is enabled.

use crate::error::MeshError;
use glam::DVec2;

/// Triangles over a combined 2D point set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Triangulation {
    pub points: Vec<DVec2>,
    pub triangles: Vec<[u32; 3]>,
}

impl Triangulation {
    /// Returns the three corners of a triangle, or `None` when it names a
    /// point outside `points`.
    pub fn corners(&self, triangle: [u32; 3]) -> Option<[DVec2; 3]> {
        let [a, b, c] = triangle;
        Some([
            *self.points.get(a as usize)?,
            *self.points.get(b as usize)?,
            *self.points.get(c as usize)?,
        ])
    }
}

/// Triangulates the interior of closed loops.
///
/// Loops are implicitly closed. Regions covered by an odd number of loops
/// are interior, so nested loops describe holes.
pub trait Triangulator: Send + Sync {
    fn triangulate(&self, paths: &[Vec<DVec2>]) -> Result<Triangulation, MeshError>;
}

impl<F> Triangulator for F
where
    F: Fn(&[Vec<DVec2>]) -> Result<Triangulation, MeshError> + Send + Sync,
{
    fn triangulate(&self, paths: &[Vec<DVec2>]) -> Result<Triangulation, MeshError> {
        self(paths)
    }
}

/// Constrained Delaunay triangulation.
///
/// Reports [`MeshError::TriangulationUnavailable`] when the crate is built
/// without the `triangulation` feature.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelaunayTriangulator;

impl Triangulator for DelaunayTriangulator {
    #[cfg(feature = "triangulation")]
    fn triangulate(&self, paths: &[Vec<DVec2>]) -> Result<Triangulation, MeshError> {
        triangulate_delaunay(paths)
    }

    #[cfg(not(feature = "triangulation"))]
    fn triangulate(&self, _paths: &[Vec<DVec2>]) -> Result<Triangulation, MeshError> {
        Err(MeshError::TriangulationUnavailable)
    }
}

#[cfg(feature = "triangulation")]
fn triangulate_delaunay(paths: &[Vec<DVec2>]) -> Result<Triangulation, MeshError> {
    use spade::{ConstrainedDelaunayTriangulation, Point2, Triangulation as _};

    let mut cdt = ConstrainedDelaunayTriangulation::<Point2<f64>>::new();
    let mut handles = Vec::new();

    for path in paths {
        handles.clear();
        for p in path {
            let handle = cdt.insert(Point2::new(p.x, p.y)).map_err(|e| {
                MeshError::triangulation_failed(format!("cannot insert {p}: {e:?}"))
            })?;
            handles.push(handle);
        }

        for ia in 0..handles.len() {
            let ib = (ia + 1) % handles.len();
            if handles[ia] != handles[ib] {
                let _ = cdt.add_constraint_and_split(handles[ia], handles[ib], |v| v);
            }
        }
    }

    // Keep only triangles inside the loops
    let mut points = Vec::new();
    let mut triangles = Vec::new();
    let mut handle_to_point = vec![None; cdt.num_vertices()];

    for face in cdt.inner_faces() {
        let triangle = face.vertices().map(|v| {
            if let Some(id) = handle_to_point[v.fix().index()] {
                id
            } else {
                let pt = v.data();
                let id = points.len() as u32;
                points.push(DVec2::new(pt.x, pt.y));
                handle_to_point[v.fix().index()] = Some(id);
                id
            }
        });
        let [a, b, c] = triangle.map(|i| points[i as usize]);
        if point_in_paths((a + b + c) / 3.0, paths) {
            triangles.push(triangle);
        }
    }

    if triangles.is_empty() {
        return Err(MeshError::triangulation_failed(
            "no triangle lies inside the input paths",
        ));
    }

    Ok(Triangulation { points, triangles })
}

/// Even-odd containment test against every loop.
pub fn point_in_paths(point: DVec2, paths: &[Vec<DVec2>]) -> bool {
    paths
        .iter()
        .filter(|path| point_in_polygon(point, path))
        .count()
        % 2
        == 1
}

/// Crossing-number test for a single implicitly closed loop.
pub fn point_in_polygon(point: DVec2, polygon: &[DVec2]) -> bool {
    let mut inside = false;
    let n = polygon.len();
    for i in 0..n {
        let a = polygon[i];
        let b = polygon[(i + 1) % n];
        if (a.y > point.y) != (b.y > point.y) {
            let x = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if point.x < x {
                inside = !inside;
            }
        }
    }
    inside
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(min: f64, max: f64) -> Vec<DVec2> {
        vec![
            DVec2::new(min, min),
            DVec2::new(max, min),
            DVec2::new(max, max),
            DVec2::new(min, max),
        ]
    }

    #[test]
    fn test_point_in_polygon() {
        let sq = square(0.0, 1.0);
        assert!(point_in_polygon(DVec2::splat(0.5), &sq));
        assert!(!point_in_polygon(DVec2::new(1.5, 0.5), &sq));
    }

    #[test]
    fn test_point_in_paths_even_odd() {
        let paths = vec![square(0.0, 10.0), square(3.0, 7.0)];
        assert!(point_in_paths(DVec2::splat(1.0), &paths));
        assert!(!point_in_paths(DVec2::splat(5.0), &paths));
    }

    #[test]
    fn test_closure_triangulator() {
        let fixed = |_: &[Vec<DVec2>]| -> Result<Triangulation, MeshError> {
            Ok(Triangulation {
                points: vec![DVec2::ZERO, DVec2::X, DVec2::Y],
                triangles: vec![[0, 1, 2]],
            })
        };
        let result = fixed.triangulate(&[]).unwrap();
        assert_eq!(result.triangles.len(), 1);
        assert_eq!(result.corners([0, 1, 2]).unwrap()[1], DVec2::X);
        assert!(result.corners([0, 1, 3]).is_none());
    }

    #[cfg(feature = "triangulation")]
    #[test]
    fn test_delaunay_square() {
        let result = DelaunayTriangulator.triangulate(&[square(0.0, 1.0)]).unwrap();
        assert_eq!(result.points.len(), 4);
        assert_eq!(result.triangles.len(), 2);
    }

    #[cfg(feature = "triangulation")]
    #[test]
    fn test_delaunay_with_hole() {
        let paths = vec![square(0.0, 10.0), square(3.0, 7.0)];
        let result = DelaunayTriangulator.triangulate(&paths).unwrap();
        assert_eq!(result.points.len(), 8);
        // An annulus of 8 boundary vertices triangulates into 8 triangles
        assert_eq!(result.triangles.len(), 8);
        for tri in &result.triangles {
            let [a, b, c] = result.corners(*tri).unwrap();
            assert!(!point_in_polygon((a + b + c) / 3.0, &paths[1]));
        }
    }

    #[cfg(feature = "triangulation")]
    #[test]
    fn test_delaunay_degenerate_input() {
        let line = vec![DVec2::ZERO, DVec2::X, DVec2::new(2.0, 0.0)];
        assert!(matches!(
            DelaunayTriangulator.triangulate(&[line]),
            Err(MeshError::TriangulationFailed { .. })
        ));
    }

    #[cfg(not(feature = "triangulation"))]
    #[test]
    fn test_delaunay_unavailable() {
        assert!(matches!(
            DelaunayTriangulator.triangulate(&[square(0.0, 1.0)]),
            Err(MeshError::TriangulationUnavailable)
        ));
    }
}
