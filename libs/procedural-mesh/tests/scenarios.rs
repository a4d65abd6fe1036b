use glam::{DVec2, DVec3, UVec2};
use procedural_mesh::extrude::{boundary_edges, resolve_outward_normals};
use procedural_mesh::primitives::{BoxParams, SphereParams};
use procedural_mesh::tessellate::tessellate_2d;
use procedural_mesh::{MeshError, MeshStore, StoreConfig, SubMesh, Triangulation};
use std::sync::Arc;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("procedural_mesh=debug")
        .try_init();
}

fn empty_store() -> MeshStore {
    MeshStore::new(StoreConfig { builtins: false }).unwrap()
}

fn square() -> Vec<DVec2> {
    vec![
        DVec2::new(0.0, 0.0),
        DVec2::new(1.0, 0.0),
        DVec2::new(1.0, 1.0),
        DVec2::new(0.0, 1.0),
    ]
}

#[test]
fn sphere_lattice_counts() {
    init_tracing();
    let store = empty_store();
    let params = SphereParams {
        radius: 0.5,
        rings: 4,
        segments: 4,
    };
    let sphere = store.create_sphere("s", &params).unwrap();
    assert_eq!(sphere.vertex_count(), 25);
    assert_eq!(sphere.index_count(), 96);
    assert_eq!(sphere.triangle_count(), 32);

    let again = store.get("s").unwrap();
    assert!(Arc::ptr_eq(&sphere, &again));
}

#[test]
fn unit_box_counts_and_bounds() {
    let store = empty_store();
    let params = BoxParams {
        sides: DVec3::ONE,
        uv: DVec2::ONE,
    };
    let cube = store.create_box("b", &params).unwrap();
    let sub = cube.submesh(0).unwrap();
    assert_eq!(sub.vertex_count(), 24);
    assert_eq!(sub.normal_count(), 24);
    assert_eq!(sub.index_count(), 36);

    let (min, max) = cube.bounding_box();
    assert_eq!(min, DVec3::splat(-0.5));
    assert_eq!(max, DVec3::splat(0.5));
}

#[test]
fn tessellate_three_by_two() {
    let mut sub = SubMesh::new();
    for row in 0..2 {
        for col in 0..3 {
            sub.add_vertex(DVec3::new(col as f64, row as f64, 0.0));
        }
    }
    tessellate_2d(&mut sub, 3, 2, false);
    assert_eq!(sub.triangle_count(), 4);

    let mut doubled = SubMesh::new();
    for row in 0..2 {
        for col in 0..3 {
            doubled.add_vertex(DVec3::new(col as f64, row as f64, 0.0));
        }
    }
    tessellate_2d(&mut doubled, 3, 2, true);
    assert_eq!(doubled.triangle_count(), 8);
}

#[test]
fn square_extrusion_edges_and_walls() {
    init_tracing();
    let split = |_: &[Vec<DVec2>]| -> Result<Triangulation, MeshError> {
        Ok(Triangulation {
            points: square(),
            triangles: vec![[0, 1, 2], [0, 2, 3]],
        })
    };

    let edges = boundary_edges(&[square()]);
    assert_eq!(edges.len(), 4);
    let normals = resolve_outward_normals(&edges, &split(&[]).unwrap()).unwrap();
    assert_eq!(normals.len(), 4);
    for normal in &normals {
        let axis_aligned = [DVec3::X, DVec3::NEG_X, DVec3::Y, DVec3::NEG_Y]
            .iter()
            .any(|axis| normal.abs_diff_eq(*axis, 1e-12));
        assert!(axis_aligned, "{normal} is not axis aligned");
    }

    let store = MeshStore::with_triangulator(StoreConfig { builtins: false }, split).unwrap();
    let slab = store
        .create_extruded_polyline("slab", &[square()], 2.0)
        .unwrap();
    // 4 + 4 cap vertices, then 6 per wall
    assert_eq!(slab.vertex_count() - 8, 24);
}

#[cfg(feature = "triangulation")]
#[test]
fn square_extrusion_with_delaunay() {
    let store = empty_store();
    let slab = store
        .create_extruded_polyline("slab", &[square()], 2.0)
        .unwrap();
    assert_eq!(slab.vertex_count(), 32);
    assert_eq!(slab.triangle_count(), 12);
    let (min, max) = slab.bounding_box();
    assert_eq!(min, DVec3::ZERO);
    assert_eq!(max, DVec3::new(1.0, 1.0, 2.0));
}

#[test]
fn failed_extrusion_is_not_registered() {
    let store = empty_store();
    let err = store
        .create_extruded_polyline("bad", &[vec![DVec2::ZERO, DVec2::X]], 1.0)
        .unwrap_err();
    assert!(matches!(err, MeshError::TriangulationFailed { .. }));
    assert!(store.get("bad").is_none());
}

#[test]
fn plane_grid_triangle_count() {
    let store = empty_store();
    let plane = store
        .create_plane(
            "floor",
            &procedural_mesh::primitives::PlaneParams {
                segments: UVec2::new(4, 2),
                ..Default::default()
            },
        )
        .unwrap();
    // Front and back layers, each 2 * 4 * 2 triangles
    assert_eq!(plane.triangle_count(), 32);
    assert!(plane.validate().is_ok());
}
