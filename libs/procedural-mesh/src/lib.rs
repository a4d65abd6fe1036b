//! # Procedural Mesh
//!
//! Polygonal mesh synthesis for primitive solids and extruded polylines,
//! plus a named registry that owns the results.
//!
//! ## Architecture
//!
//! ```text
//! MeshSpec ─► primitives / extrude ─► SubMesh ─► Mesh ─► MeshStore
//!                 │
//!                 └─ lattice, tessellate (shared builders)
//! ```
//!
//! ## Algorithms
//!
//! All geometry is generated from first principles in f64:
//! - **Lattice**: ring × segment sweeps for sphere, cylinder, cone and tube
//! - **Tessellation**: row-major grid triangulation for planes
//! - **Extrusion**: caps from a constrained Delaunay triangulation (`spade`),
//!   side walls with per-edge outward normals
//!
//! ## Usage
//!
//! ```rust
//! use procedural_mesh::{MeshStore, StoreConfig};
//! use procedural_mesh::primitives::CylinderParams;
//!
//! let store = MeshStore::new(StoreConfig::default()).unwrap();
//! assert!(store.contains("unit_sphere"));
//!
//! let pipe = store
//!     .create_cylinder("pipe", &CylinderParams { radius: 0.1, height: 2.0, rings: 4, segments: 12 })
//!     .unwrap();
//! assert!(pipe.validate().is_ok());
//! ```

pub mod error;
pub mod extrude;
pub mod lattice;
pub mod mesh;
pub mod primitives;
pub mod store;
pub mod tessellate;

pub use error::{BufferKind, MeshError};
pub use extrude::{DelaunayTriangulator, Triangulation, Triangulator};
pub use mesh::{Mesh, SubMesh};
pub use store::{MeshFormat, MeshLoader, MeshSpec, MeshStore, StoreConfig};
