//! # Grid Tessellation
//!
//! Turns a rectangular grid of vertices, appended in row-major order, into
//! triangles. Used by the plane generator.

use crate::mesh::SubMesh;

/// Which side(s) of a grid receive triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFaces {
    /// Counter-clockwise seen from the grid's +Z side.
    Front,
    /// Reversed winding, seen from the -Z side.
    Back,
    /// Both, sharing the same vertices.
    Both,
}

/// Tessellates the `width × height` grid that starts at vertex 0.
///
/// Emits `2 * (width - 1) * (height - 1)` triangles, doubled when
/// `double_sided` is set. Grids narrower than 2 in either direction produce
/// nothing.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::{tessellate::tessellate_2d, SubMesh};
///
/// let mut sub = SubMesh::new();
/// for row in 0..2 {
///     for col in 0..3 {
///         sub.add_vertex_xyz(col as f64, row as f64, 0.0);
///     }
/// }
/// tessellate_2d(&mut sub, 3, 2, false);
/// assert_eq!(sub.triangle_count(), 4);
/// ```
pub fn tessellate_2d(sub: &mut SubMesh, width: u32, height: u32, double_sided: bool) {
    let faces = if double_sided {
        GridFaces::Both
    } else {
        GridFaces::Front
    };
    tessellate_grid(sub, 0, width, height, faces);
}

/// Tessellates the `width × height` grid whose first vertex is
/// `first_vertex`.
pub fn tessellate_grid(sub: &mut SubMesh, first_vertex: u32, width: u32, height: u32, faces: GridFaces) {
    if width < 2 || height < 2 {
        return;
    }

    let at = |row: u32, col: u32| first_vertex + row * width + col;

    if matches!(faces, GridFaces::Front | GridFaces::Both) {
        for row in 0..height - 1 {
            for col in 0..width - 1 {
                let a = at(row + 1, col);
                let b = at(row, col);
                let c = at(row + 1, col + 1);
                let d = at(row, col + 1);
                sub.add_triangle(a, b, c);
                sub.add_triangle(c, b, d);
            }
        }
    }

    // Walking the rows downward mirrors every cell and flips its winding
    if matches!(faces, GridFaces::Back | GridFaces::Both) {
        for row in (1..height).rev() {
            for col in 0..width - 1 {
                let a = at(row - 1, col);
                let b = at(row, col);
                let c = at(row - 1, col + 1);
                let d = at(row, col + 1);
                sub.add_triangle(a, b, c);
                sub.add_triangle(c, b, d);
            }
        }
    }
}
