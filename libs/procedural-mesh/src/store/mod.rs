//! # Mesh Store
//!
//! Name-keyed registry of shared meshes.
//!
//! Entries are created once per name and never regenerated: a second
//! request for an existing name returns the stored mesh unchanged, whatever
//! parameters it carries. Each name owns a writer lock, so concurrent
//! requests for one missing name run its generator or loader exactly once
//! while requests for other names proceed independently. Plain lookups
//! never wait on a build in progress.
//!
//! Lookups hand out [`Arc<Mesh>`] handles. Removing or clearing an entry
//! drops the store's reference only; handles already given out stay valid.

mod catalog;
mod format;
mod mesh_spec;


pub use catalog::builtin_specs;
pub use format::{MeshFormat, MeshLoader};
pub use mesh_spec::MeshSpec;

use crate::error::MeshError;
use crate::extrude::{DelaunayTriangulator, ExtrusionParams, Triangulator};
use crate::mesh::Mesh;
use crate::primitives::{
    BoxParams, CameraParams, ConeParams, CylinderParams, PlaneParams, SphereParams, TubeParams,
};
use glam::DVec2;
use parking_lot::{Mutex, RwLock};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, trace, warn};

/// One name's entry. `writer` serializes creation; `mesh` is only
/// write-locked to publish or take the result.
#[derive(Default)]
struct Entry {
    mesh: RwLock<Option<Arc<Mesh>>>,
    writer: Mutex<()>,
}

type Slot = Arc<Entry>;

/// Construction options for a [`MeshStore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Pre-populate the built-in catalog.
    pub builtins: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { builtins: true }
    }
}

/// Registry of named meshes.
///
/// # Example
///
/// ```rust
/// use procedural_mesh::store::{MeshStore, StoreConfig};
/// use procedural_mesh::primitives::SphereParams;
/// use std::sync::Arc;
///
/// let store = MeshStore::new(StoreConfig { builtins: false }).unwrap();
/// let params = SphereParams { radius: 0.5, rings: 4, segments: 4 };
/// let first = store.create_sphere("ball", &params).unwrap();
///
/// let bigger = SphereParams { radius: 2.0, ..params };
/// let second = store.create_sphere("ball", &bigger).unwrap();
/// assert!(Arc::ptr_eq(&first, &second));
/// ```
pub struct MeshStore {
    slots: Mutex<HashMap<String, Slot>>,
    loaders: RwLock<HashMap<MeshFormat, Arc<dyn MeshLoader>>>,
    triangulator: Box<dyn Triangulator>,
}

impl MeshStore {
    /// Creates a store backed by the default [`DelaunayTriangulator`].
    pub fn new(config: StoreConfig) -> Result<Self, MeshError> {
        Self::with_triangulator(config, DelaunayTriangulator)
    }

    /// Creates a store that extrudes with `triangulator`.
    pub fn with_triangulator(
        config: StoreConfig,
        triangulator: impl Triangulator + 'static,
    ) -> Result<Self, MeshError> {
        let store = Self {
            slots: Mutex::new(HashMap::new()),
            loaders: RwLock::new(HashMap::new()),
            triangulator: Box::new(triangulator),
        };
        if config.builtins {
            store.populate_builtins()?;
        }
        Ok(store)
    }

    fn populate_builtins(&self) -> Result<(), MeshError> {
        let specs = builtin_specs();
        let meshes: Vec<Mesh> = specs
            .par_iter()
            .map(|(name, spec)| spec.build(name, self.triangulator.as_ref()))
            .collect::<Result<_, _>>()?;

        for mesh in meshes {
            self.add_mesh(mesh)?;
        }
        info!(count = specs.len(), "Built-in meshes ready");
        Ok(())
    }

    // =========================================================================
    // LOOKUP
    // =========================================================================

    /// Returns the mesh stored under `name`.
    ///
    /// A name still being created is not stored yet.
    pub fn get(&self, name: &str) -> Option<Arc<Mesh>> {
        let slot = self.slots.lock().get(name).cloned()?;
        let mesh = slot.mesh.read().clone();
        mesh
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Names of every stored mesh, sorted.
    ///
    /// Names still being created are skipped.
    pub fn names(&self) -> Vec<String> {
        let slots: Vec<(String, Slot)> = self
            .slots
            .lock()
            .iter()
            .map(|(name, slot)| (name.clone(), Arc::clone(slot)))
            .collect();

        let mut names: Vec<String> = slots
            .into_iter()
            .filter(|(_, slot)| slot.mesh.read().is_some())
            .map(|(name, _)| name)
            .collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.names().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // =========================================================================
    // MUTATION
    // =========================================================================

    /// Drops the store's entry for `name` and returns it.
    pub fn remove(&self, name: &str) -> Option<Arc<Mesh>> {
        let slot = self.slots.lock().remove(name)?;
        let mesh = slot.mesh.write().take();
        if mesh.is_some() {
            debug!(name, "Removed mesh");
        }
        mesh
    }

    /// Drops every entry, built-ins included.
    pub fn clear(&self) {
        let count = {
            let mut slots = self.slots.lock();
            let count = slots.len();
            slots.clear();
            count
        };
        debug!(count, "Cleared mesh store");
    }

    /// Registers an externally built mesh under its own name.
    ///
    /// Returns the stored mesh, which is the existing one when the name is
    /// already taken.
    pub fn add_mesh(&self, mesh: Mesh) -> Result<Arc<Mesh>, MeshError> {
        let name = mesh.name().to_owned();
        self.get_or_insert_with(&name, || Ok(mesh))
    }

    /// Returns the mesh under `name`, generating it from `spec` if missing.
    pub fn get_or_create(&self, name: &str, spec: &MeshSpec) -> Result<Arc<Mesh>, MeshError> {
        trace!(name, kind = spec.kind(), "Mesh requested");
        self.get_or_insert_with(name, || spec.build(name, self.triangulator.as_ref()))
    }

    pub fn create_plane(&self, name: &str, params: &PlaneParams) -> Result<Arc<Mesh>, MeshError> {
        self.get_or_create(name, &MeshSpec::Plane(*params))
    }

    pub fn create_box(&self, name: &str, params: &BoxParams) -> Result<Arc<Mesh>, MeshError> {
        self.get_or_create(name, &MeshSpec::Box(*params))
    }

    pub fn create_camera(&self, name: &str, params: &CameraParams) -> Result<Arc<Mesh>, MeshError> {
        self.get_or_create(name, &MeshSpec::Camera(*params))
    }

    pub fn create_sphere(&self, name: &str, params: &SphereParams) -> Result<Arc<Mesh>, MeshError> {
        self.get_or_create(name, &MeshSpec::Sphere(*params))
    }

    pub fn create_cylinder(
        &self,
        name: &str,
        params: &CylinderParams,
    ) -> Result<Arc<Mesh>, MeshError> {
        self.get_or_create(name, &MeshSpec::Cylinder(*params))
    }

    pub fn create_cone(&self, name: &str, params: &ConeParams) -> Result<Arc<Mesh>, MeshError> {
        self.get_or_create(name, &MeshSpec::Cone(*params))
    }

    pub fn create_tube(&self, name: &str, params: &TubeParams) -> Result<Arc<Mesh>, MeshError> {
        self.get_or_create(name, &MeshSpec::Tube(*params))
    }

    /// Extrudes closed `paths` to `height` under `name`.
    ///
    /// On failure nothing is registered, so a later call may retry the name.
    pub fn create_extruded_polyline(
        &self,
        name: &str,
        paths: &[Vec<DVec2>],
        height: f64,
    ) -> Result<Arc<Mesh>, MeshError> {
        if let Some(mesh) = self.get(name) {
            trace!(name, "Mesh cache hit");
            return Ok(mesh);
        }
        let spec = MeshSpec::ExtrudedPolyline(ExtrusionParams {
            paths: paths.to_vec(),
            height,
        });
        self.get_or_create(name, &spec)
    }

    // =========================================================================
    // FILE LOADING
    // =========================================================================

    /// Whether `path` names a format the store can dispatch.
    pub fn is_valid_filename(path: impl AsRef<Path>) -> bool {
        MeshFormat::from_path(path.as_ref()).is_ok()
    }

    /// Installs the loader for `format`, replacing any previous one.
    pub fn register_loader(&self, format: MeshFormat, loader: impl MeshLoader + 'static) {
        self.loaders.write().insert(format, Arc::new(loader));
    }

    /// Loads `path` once and caches it under the path string.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidPath`] when `path` has no extension
    /// - [`MeshError::UnsupportedFormat`] when the extension is unknown or
    ///   no loader is registered for its format
    /// - whatever the loader reports
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Arc<Mesh>, MeshError> {
        let path = path.as_ref();
        let key = path.to_string_lossy();

        let format = MeshFormat::from_path(path).inspect_err(|err| {
            warn!(path = %path.display(), error = %err, "Cannot dispatch mesh file");
        })?;
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        // Released before loading so loaders may re-enter the store
        let loader = self.loaders.read().get(&format).cloned();
        let Some(loader) = loader else {
            warn!(path = %path.display(), ?format, "No loader registered");
            return Err(MeshError::unsupported_format(extension));
        };

        self.get_or_insert_with(&key, || loader.load(path))
    }

    // =========================================================================
    // SLOTS
    // =========================================================================

    fn slot(&self, name: &str) -> Slot {
        let mut slots = self.slots.lock();
        Arc::clone(slots.entry(name.to_owned()).or_default())
    }

    fn is_registered(&self, name: &str, slot: &Slot) -> bool {
        self.slots
            .lock()
            .get(name)
            .is_some_and(|current| Arc::ptr_eq(current, slot))
    }

    /// Forgets `slot` if it is still registered and empty.
    fn discard_empty(&self, name: &str, slot: &Slot) {
        let mut slots = self.slots.lock();
        let vacant = slots.get(name).is_some_and(|current| {
            Arc::ptr_eq(current, slot)
                && current.writer.try_lock().is_some()
                && current.mesh.read().is_none()
        });
        if vacant {
            slots.remove(name);
        }
    }

    /// Single-writer lookup: the first caller for a missing name runs
    /// `build` while holding the name's writer lock, later callers wait on
    /// it and share the result.
    ///
    /// Lock order is always writer then map, and the map lock is never held
    /// while waiting on a writer.
    fn get_or_insert_with<F>(&self, name: &str, build: F) -> Result<Arc<Mesh>, MeshError>
    where
        F: FnOnce() -> Result<Mesh, MeshError>,
    {
        loop {
            let slot = self.slot(name);
            let cached = slot.mesh.read().clone();
            if let Some(mesh) = cached {
                trace!(name, "Mesh cache hit");
                return Ok(mesh);
            }

            let writer = slot.writer.lock();
            let cached = slot.mesh.read().clone();
            if let Some(mesh) = cached {
                trace!(name, "Mesh cache hit");
                return Ok(mesh);
            }
            // A failed writer discarded this slot while we waited on it
            if !self.is_registered(name, &slot) {
                continue;
            }

            return match build() {
                Ok(mut mesh) => {
                    mesh.set_name(name);
                    debug!(
                        name,
                        vertices = mesh.vertex_count(),
                        indices = mesh.index_count(),
                        "Created mesh"
                    );
                    let mesh = Arc::new(mesh);
                    *slot.mesh.write() = Some(Arc::clone(&mesh));
                    Ok(mesh)
                }
                Err(err) => {
                    drop(writer);
                    self.discard_empty(name, &slot);
                    warn!(name, error = %err, "Mesh creation failed");
                    Err(err)
                }
            };
        }
    }
}

impl Default for MeshStore {
    /// An empty store without built-ins.
    fn default() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
            loaders: RwLock::new(HashMap::new()),
            triangulator: Box::new(DelaunayTriangulator),
        }
    }
}
