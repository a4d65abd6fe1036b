//! File-backed mesh formats and the loader seam.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{
    ASCII_TRIMESH_EXTENSIONS, SCENE_GRAPH_EXTENSIONS, TRIANGLE_SOUP_EXTENSIONS,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Interchange formats the store can dispatch to a loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshFormat {
    /// Binary or ASCII triangle soup (`.stl`).
    TriangleSoup,
    /// ASCII indexed triangle mesh (`.obj`).
    AsciiTriMesh,
    /// XML scene graph (`.dae`).
    SceneGraphXml,
}

impl MeshFormat {
    pub const ALL: [MeshFormat; 3] = [
        MeshFormat::TriangleSoup,
        MeshFormat::AsciiTriMesh,
        MeshFormat::SceneGraphXml,
    ];

    /// File extensions handled by this format, lowercase and without dot.
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            MeshFormat::TriangleSoup => TRIANGLE_SOUP_EXTENSIONS,
            MeshFormat::AsciiTriMesh => ASCII_TRIMESH_EXTENSIONS,
            MeshFormat::SceneGraphXml => SCENE_GRAPH_EXTENSIONS,
        }
    }

    /// Case-insensitive extension lookup.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|format| format.extensions().contains(&extension.as_str()))
    }

    /// Picks the format from a file path.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidPath`] when the path has no extension
    /// - [`MeshError::UnsupportedFormat`] when no format claims it
    ///
    /// # Example
    ///
    /// ```rust
    /// use procedural_mesh::store::MeshFormat;
    /// use std::path::Path;
    ///
    /// let format = MeshFormat::from_path(Path::new("robot/base.STL")).unwrap();
    /// assert_eq!(format, MeshFormat::TriangleSoup);
    /// assert!(MeshFormat::from_path(Path::new("scene.fbx")).is_err());
    /// ```
    pub fn from_path(path: &Path) -> Result<Self, MeshError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| MeshError::invalid_path(path))?;
        Self::from_extension(extension).ok_or_else(|| MeshError::unsupported_format(extension))
    }
}

/// Reads a mesh from disk.
///
/// Implemented for any `Fn(&Path) -> Result<Mesh, MeshError>` closure, so
/// callers can register a parser without defining a type.
pub trait MeshLoader: Send + Sync {
    fn load(&self, path: &Path) -> Result<Mesh, MeshError>;
}

impl<F> MeshLoader for F
where
    F: Fn(&Path) -> Result<Mesh, MeshError> + Send + Sync,
{
    fn load(&self, path: &Path) -> Result<Mesh, MeshError> {
        self(path)
    }
}
