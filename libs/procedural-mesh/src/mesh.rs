//! # Mesh Data Structure
//!
//! Core mesh representation. A [`Mesh`] is a named aggregate of one or more
//! [`SubMesh`] batches, each holding flat vertex, normal, texture coordinate
//! and triangle index arrays ready for upload.

use crate::error::{BufferKind, MeshError};
use config::constants::DEGENERATE_AREA_EPSILON;
use glam::{DMat4, DVec2, DVec3};

/// One drawable geometry batch.
///
/// Vertex insertion order defines the index space: index `i` refers to the
/// `i`-th inserted vertex. Triangles are stored as a flat index list, three
/// indices per triangle, wound counter-clockwise when seen from outside.
///
/// All geometry calculations use f64 internally. Export to f32 only happens
/// through the `*_f32` accessors.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::SubMesh;
/// use glam::DVec3;
///
/// let mut sub = SubMesh::new();
/// sub.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// sub.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// sub.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// sub.add_triangle(0, 1, 2);
/// assert_eq!(sub.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubMesh {
    vertices: Vec<DVec3>,
    normals: Vec<DVec3>,
    texcoords: Vec<DVec2>,
    indices: Vec<u32>,
}

impl SubMesh {
    /// Creates an empty submesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a submesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            texcoords: Vec::with_capacity(vertex_count),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of normals.
    #[inline]
    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    /// Returns the number of texture coordinates.
    #[inline]
    pub fn texcoord_count(&self) -> usize {
        self.texcoords.len()
    }

    /// Returns the number of indices.
    #[inline]
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Returns the number of complete triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the submesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a vertex from raw coordinates and returns its index.
    pub fn add_vertex_xyz(&mut self, x: f64, y: f64, z: f64) -> u32 {
        self.add_vertex(DVec3::new(x, y, z))
    }

    /// Adds a normal.
    pub fn add_normal(&mut self, normal: DVec3) {
        self.normals.push(normal);
    }

    /// Adds a normal from raw components.
    pub fn add_normal_xyz(&mut self, x: f64, y: f64, z: f64) {
        self.add_normal(DVec3::new(x, y, z));
    }

    /// Adds a texture coordinate.
    pub fn add_texcoord(&mut self, uv: DVec2) {
        self.texcoords.push(uv);
    }

    /// Adds a texture coordinate from raw components.
    pub fn add_texcoord_uv(&mut self, u: f64, v: f64) {
        self.add_texcoord(DVec2::new(u, v));
    }

    /// Adds a single index.
    ///
    /// Indices may legitimately be appended before the vertex they name
    /// exists; use [`SubMesh::validate`] once construction is complete.
    pub fn add_index(&mut self, index: u32) {
        self.indices.push(index);
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.indices.extend_from_slice(&[v0, v1, v2]);
    }

    /// Reverses the winding of every triangle from index position
    /// `first_index` onward by swapping each triangle's last two corners.
    pub fn reverse_winding_from(&mut self, first_index: usize) {
        if let Some(tail) = self.indices.get_mut(first_index..) {
            for tri in tail.chunks_exact_mut(3) {
                tri.swap(1, 2);
            }
        }
    }

    /// Replaces the three corner normals of every triangle with their
    /// normalized average, giving each face a single flat-ish normal.
    ///
    /// Triangles are visited in order, so a vertex shared by several
    /// triangles keeps the value written by the last one.
    pub fn flatten_corner_normals(&mut self) {
        let normal_count = self.normals.len();
        for tri in self.indices.chunks_exact(3) {
            let corners = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
            if corners.iter().any(|&i| i >= normal_count) {
                continue;
            }
            let sum: DVec3 = corners.iter().map(|&i| self.normals[i]).sum();
            let flat = (sum / 3.0).normalize_or_zero();
            for i in corners {
                self.normals[i] = flat;
            }
        }
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns a reference to the texture coordinates.
    #[inline]
    pub fn texcoords(&self) -> &[DVec2] {
        &self.texcoords
    }

    /// Returns a reference to the flat index list.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Iterates over complete triangles.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Returns the vertex at the given index.
    pub fn vertex(&self, index: usize) -> Result<DVec3, MeshError> {
        self.vertices
            .get(index)
            .copied()
            .ok_or_else(|| MeshError::out_of_range(BufferKind::Vertex, index, self.vertices.len()))
    }

    /// Returns the normal at the given index.
    pub fn normal(&self, index: usize) -> Result<DVec3, MeshError> {
        self.normals
            .get(index)
            .copied()
            .ok_or_else(|| MeshError::out_of_range(BufferKind::Normal, index, self.normals.len()))
    }

    /// Overwrites the normal at the given index.
    pub fn set_normal(&mut self, index: usize, normal: DVec3) -> Result<(), MeshError> {
        let len = self.normals.len();
        let slot = self
            .normals
            .get_mut(index)
            .ok_or_else(|| MeshError::out_of_range(BufferKind::Normal, index, len))?;
        *slot = normal;
        Ok(())
    }

    /// Returns the texture coordinate at the given index.
    pub fn texcoord(&self, index: usize) -> Result<DVec2, MeshError> {
        self.texcoords
            .get(index)
            .copied()
            .ok_or_else(|| {
                MeshError::out_of_range(BufferKind::TexCoord, index, self.texcoords.len())
            })
    }

    /// Returns the index stored at the given position of the index list.
    pub fn index(&self, position: usize) -> Result<u32, MeshError> {
        self.indices
            .get(position)
            .copied()
            .ok_or_else(|| MeshError::out_of_range(BufferKind::Index, position, self.indices.len()))
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or `None` when the submesh is empty.
    pub fn bounding_box(&self) -> Option<(DVec3, DVec3)> {
        let (first, rest) = self.vertices.split_first()?;
        let bounds = rest
            .iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)));
        Some(bounds)
    }

    /// Recomputes per-vertex normals from the triangles.
    ///
    /// Every triangle adds its unit face normal into its three corners, then
    /// all non-zero accumulated normals are normalized. Any previous normals
    /// are discarded and the normal array is resized to the vertex count.
    pub fn recalculate_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for [i0, i1, i2] in self.triangles() {
            let (i0, i1, i2) = (i0 as usize, i1 as usize, i2 as usize);
            let (Some(v0), Some(v1), Some(v2)) = (
                self.vertices.get(i0),
                self.vertices.get(i1),
                self.vertices.get(i2),
            ) else {
                continue;
            };

            let face = (*v1 - *v0).cross(*v2 - *v0).normalize_or_zero();
            normals[i0] += face;
            normals[i1] += face;
            normals[i2] += face;
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = normals;
    }

    /// Translates all vertices by an offset.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Scales all vertices component-wise.
    ///
    /// Normals are re-derived through the inverse scale so non-uniform
    /// scaling keeps them perpendicular to the surface.
    pub fn scale(&mut self, factor: DVec3) {
        self.transform(&DMat4::from_scale(factor));
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }

        // Normals use the inverse transpose
        let normal_matrix = matrix.inverse().transpose();
        for n in &mut self.normals {
            *n = normal_matrix.transform_vector3(*n).normalize_or_zero();
        }
    }

    /// Validates the submesh invariants.
    ///
    /// Checks:
    /// - The index list length is a multiple of 3
    /// - Every index names an existing vertex
    /// - Texture coordinates are absent or one per vertex
    /// - Normals are absent or one per vertex
    pub fn validate(&self) -> Result<(), MeshError> {
        if self.indices.len() % 3 != 0 {
            return Err(MeshError::invalid(format!(
                "index count {} is not a multiple of 3",
                self.indices.len()
            )));
        }

        let vertex_count = self.vertices.len();
        if let Some(bad) = self.indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(MeshError::out_of_range(
                BufferKind::Vertex,
                *bad as usize,
                vertex_count,
            ));
        }

        if !self.normals.is_empty() && self.normals.len() != vertex_count {
            return Err(MeshError::invalid(format!(
                "{} normals for {} vertices",
                self.normals.len(),
                vertex_count
            )));
        }

        if !self.texcoords.is_empty() && self.texcoords.len() != vertex_count {
            return Err(MeshError::invalid(format!(
                "{} texture coordinates for {} vertices",
                self.texcoords.len(),
                vertex_count
            )));
        }

        Ok(())
    }

    /// Counts triangles whose area is numerically zero.
    pub fn degenerate_triangle_count(&self) -> usize {
        self.triangles()
            .filter(|&[a, b, c]| {
                match (
                    self.vertices.get(a as usize),
                    self.vertices.get(b as usize),
                    self.vertices.get(c as usize),
                ) {
                    (Some(a), Some(b), Some(c)) => {
                        (*b - *a).cross(*c - *a).length() < DEGENERATE_AREA_EPSILON
                    }
                    _ => false,
                }
            })
            .count()
    }

    /// Exports vertices as a flattened f32 array for GPU upload.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten3(&self.vertices)
    }

    /// Exports normals as a flattened f32 array for GPU upload.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten3(&self.normals)
    }

    /// Exports texture coordinates as a flattened f32 array for GPU upload.
    pub fn texcoords_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.texcoords.len() * 2);
        for uv in &self.texcoords {
            result.push(uv.x as f32);
            result.push(uv.y as f32);
        }
        result
    }

    /// Appends every vertex, normal, texture coordinate and triangle of
    /// `other`, offsetting its indices past this submesh's vertices.
    pub fn append(&mut self, other: &SubMesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.normals.extend_from_slice(&other.normals);
        self.texcoords.extend_from_slice(&other.texcoords);
        self.indices.extend(other.indices.iter().map(|i| i + offset));
    }
}

fn flatten3(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}

/// A named aggregate of submeshes.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::{Mesh, SubMesh};
/// use glam::DVec3;
///
/// let mut sub = SubMesh::new();
/// sub.add_vertex(DVec3::new(-1.0, 0.0, 0.0));
/// sub.add_vertex(DVec3::new(1.0, 2.0, 3.0));
///
/// let mut mesh = Mesh::new("pair");
/// mesh.add_submesh(sub);
/// let (min, max) = mesh.bounding_box();
/// assert_eq!(min, DVec3::new(-1.0, 0.0, 0.0));
/// assert_eq!(max, DVec3::new(1.0, 2.0, 3.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    name: String,
    submeshes: Vec<SubMesh>,
}

impl Mesh {
    /// Creates an empty mesh with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            submeshes: Vec::new(),
        }
    }

    /// Creates a mesh holding a single submesh.
    pub fn from_submesh(name: impl Into<String>, submesh: SubMesh) -> Self {
        Self {
            name: name.into(),
            submeshes: vec![submesh],
        }
    }

    /// Returns the mesh name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the mesh.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Adds a submesh and returns its index.
    pub fn add_submesh(&mut self, submesh: SubMesh) -> usize {
        self.submeshes.push(submesh);
        self.submeshes.len() - 1
    }

    /// Returns the number of submeshes.
    #[inline]
    pub fn submesh_count(&self) -> usize {
        self.submeshes.len()
    }

    /// Returns the submesh at the given index.
    pub fn submesh(&self, index: usize) -> Result<&SubMesh, MeshError> {
        let len = self.submeshes.len();
        self.submeshes
            .get(index)
            .ok_or_else(|| MeshError::out_of_range(BufferKind::SubMesh, index, len))
    }

    /// Returns the submesh at the given index for mutation.
    pub fn submesh_mut(&mut self, index: usize) -> Result<&mut SubMesh, MeshError> {
        let len = self.submeshes.len();
        self.submeshes
            .get_mut(index)
            .ok_or_else(|| MeshError::out_of_range(BufferKind::SubMesh, index, len))
    }

    /// Returns all submeshes.
    #[inline]
    pub fn submeshes(&self) -> &[SubMesh] {
        &self.submeshes
    }

    /// Returns the total number of vertices across submeshes.
    pub fn vertex_count(&self) -> usize {
        self.submeshes.iter().map(SubMesh::vertex_count).sum()
    }

    /// Returns the total number of indices across submeshes.
    pub fn index_count(&self) -> usize {
        self.submeshes.iter().map(SubMesh::index_count).sum()
    }

    /// Returns the total number of triangles across submeshes.
    pub fn triangle_count(&self) -> usize {
        self.submeshes.iter().map(SubMesh::triangle_count).sum()
    }

    /// Returns true if no submesh holds any vertex.
    pub fn is_empty(&self) -> bool {
        self.submeshes.iter().all(SubMesh::is_empty)
    }

    /// Computes the axis-aligned bounding box of every submesh vertex.
    ///
    /// Returns (min, max) corners; an empty mesh yields the origin twice.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        self.submeshes
            .iter()
            .filter_map(SubMesh::bounding_box)
            .reduce(|(amin, amax), (bmin, bmax)| (amin.min(bmin), amax.max(bmax)))
            .unwrap_or((DVec3::ZERO, DVec3::ZERO))
    }

    /// Returns the center of the bounding box.
    pub fn center(&self) -> DVec3 {
        let (min, max) = self.bounding_box();
        (min + max) * 0.5
    }

    /// Recomputes per-vertex normals on every submesh.
    pub fn recalculate_normals(&mut self) {
        for sub in &mut self.submeshes {
            sub.recalculate_normals();
        }
    }

    /// Transforms every submesh by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for sub in &mut self.submeshes {
            sub.transform(matrix);
        }
    }

    /// Translates every submesh.
    pub fn translate(&mut self, offset: DVec3) {
        for sub in &mut self.submeshes {
            sub.translate(offset);
        }
    }

    /// Copies the submeshes of another mesh into this one.
    pub fn merge(&mut self, other: &Mesh) {
        self.submeshes.extend_from_slice(&other.submeshes);
    }

    /// Validates every submesh.
    pub fn validate(&self) -> Result<(), MeshError> {
        self.submeshes.iter().try_for_each(SubMesh::validate)
    }
}
