//! # Mesh Errors
//!
//! Error types for mesh generation, extrusion and the mesh store.
//!
//! Every failure is local: a failed operation never leaves a partially
//! built mesh registered anywhere.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Buffer addressed by a checked accessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    Vertex,
    Normal,
    TexCoord,
    Index,
    SubMesh,
}

impl fmt::Display for BufferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BufferKind::Vertex => "vertex",
            BufferKind::Normal => "normal",
            BufferKind::TexCoord => "texcoord",
            BufferKind::Index => "index",
            BufferKind::SubMesh => "submesh",
        };
        f.write_str(name)
    }
}

/// Errors that can occur during mesh generation and lookup.
#[derive(Debug, Error)]
pub enum MeshError {
    /// The 2D triangulation backend is not compiled into this build
    #[error("Triangulation unavailable: build without the `triangulation` feature")]
    TriangulationUnavailable,

    /// The triangulator produced no usable result
    #[error("Triangulation failed: {message}")]
    TriangulationFailed { message: String },

    /// Checked accessor addressed past the end of a buffer
    #[error("{kind} index {index} out of range (len {len})")]
    IndexOutOfRange {
        kind: BufferKind,
        index: usize,
        len: usize,
    },

    /// No loader understands this file extension
    #[error("Unsupported mesh format: {extension:?}")]
    UnsupportedFormat { extension: String },

    /// The path carries no file extension to dispatch on
    #[error("Invalid mesh path: {}", path.display())]
    InvalidPath { path: PathBuf },

    /// A registered loader failed to read the file
    #[error("Failed to load {}: {message}", path.display())]
    LoadFailed { path: PathBuf, message: String },

    /// Mesh data violates a structural invariant
    #[error("Invalid mesh: {message}")]
    InvalidMesh { message: String },
}

impl MeshError {
    /// Creates a triangulation failed error.
    pub fn triangulation_failed(message: impl Into<String>) -> Self {
        Self::TriangulationFailed {
            message: message.into(),
        }
    }

    /// Creates an out of range error.
    pub fn out_of_range(kind: BufferKind, index: usize, len: usize) -> Self {
        Self::IndexOutOfRange { kind, index, len }
    }

    /// Creates an unsupported format error.
    pub fn unsupported_format(extension: impl Into<String>) -> Self {
        Self::UnsupportedFormat {
            extension: extension.into(),
        }
    }

    /// Creates an invalid path error.
    pub fn invalid_path(path: impl Into<PathBuf>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Creates a load failed error.
    pub fn load_failed(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::LoadFailed {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid mesh error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidMesh {
            message: message.into(),
        }
    }
}
