use crate::kernel::GeometryKernel;
use crate::structs::{BuiltMesh, MeshKind, MeshSet, SpaceNames};
use crate::vertex_index::VertexIndexer;
use va3c_core::geom::{Point3, Transform};
use va3c_core::model::{format_handle, Model, Space, SubSurface, Surface, SurfaceCategory};
use va3c_core::report::Warning;
use va3c_core::scene::{Geometry, GeometryData, UserData, Vertex, FACE_TRIANGLE};

/// Builds the meshes of an envelope surface and its sub-surfaces.
pub struct MeshBuilder<'a, K: GeometryKernel + ?Sized> {
    model: &'a Model,
    kernel: &'a K,
    tolerance: f64,
}

impl<'a, K: GeometryKernel + ?Sized> MeshBuilder<'a, K> {
    pub fn new(model: &'a Model, kernel: &'a K, tolerance: f64) -> Self {
        Self {
            model,
            kernel,
            tolerance,
        }
    }

    /// The surface mesh comes first, then one mesh per sub-surface in model
    /// order. Nothing is emitted when the surface itself cannot be
    /// triangulated; a failed sub-surface is skipped on its own.
    pub fn build(&self, surface: &Surface, category: SurfaceCategory) -> MeshSet {
        let space = surface.space.as_deref().and_then(|h| self.model.space(h));
        let site = self.model.space_site_transformation(space);

        let Some(align) = self.kernel.align_face(&surface.vertices) else {
            return MeshSet::skipped(Warning::new(
                "degenerate_surface",
                format!("Failed to align surface {}", surface.name),
            ));
        };
        let to_local = align.inverse();

        let outer = aligned_loop(&to_local, &surface.vertices);
        let holes: Vec<Vec<Point3>> = surface
            .sub_surfaces
            .iter()
            .map(|sub| aligned_loop(&to_local, &sub.vertices))
            .collect();

        let triangles = self.kernel.triangulate(&outer, &holes);
        if triangles.is_empty() {
            return MeshSet::skipped(Warning::new(
                "triangulation_failed",
                format!(
                    "Failed to triangulate surface {} with {} sub surfaces",
                    surface.name,
                    surface.sub_surfaces.len()
                ),
            ));
        }

        let to_site = site * align;
        let mut set = MeshSet::empty();
        let surface_data = surface_user_data(self.model, surface, space);
        let mesh = build_mesh(self.kernel, self.tolerance, &surface.handle, &triangles, &to_site);
        set.push(mesh, surface_data.clone(), MeshKind::Surface(category));

        for sub in &surface.sub_surfaces {
            let sub_outer = aligned_loop(&to_local, &sub.vertices);
            let triangles = self.kernel.triangulate(&sub_outer, &[]);
            if triangles.is_empty() {
                set.warn(Warning::new(
                    "triangulation_failed",
                    format!(
                        "Failed to triangulate sub surface {} of surface {}",
                        sub.name, surface.name
                    ),
                ));
                continue;
            }
            let mesh = build_mesh(self.kernel, self.tolerance, &sub.handle, &triangles, &to_site);
            let data = sub_surface_user_data(self.model, sub, &surface_data);
            set.push(mesh, data, MeshKind::SubSurface(sub.category()));
        }

        tracing::debug!(
            "surface {}: {} meshes, {} sub surfaces",
            surface.name,
            set.len(),
            surface.sub_surfaces.len()
        );
        set
    }
}

/// Expresses a boundary loop in the face frame, reversed to fix the winding.
pub(crate) fn aligned_loop(to_local: &Transform, vertices: &[Point3]) -> Vec<Point3> {
    let mut points = to_local.apply_all(vertices);
    points.reverse();
    points
}

/// Welds the triangles (given in the face frame) into one triangle-list
/// geometry in viewer axes.
pub(crate) fn build_mesh<K: GeometryKernel + ?Sized>(
    kernel: &K,
    tolerance: f64,
    handle: &str,
    triangles: &[Vec<Point3>],
    to_site: &Transform,
) -> BuiltMesh {
    let mut indexer = VertexIndexer::new(kernel, tolerance);
    let mut faces = Vec::with_capacity(triangles.len() * 4);
    for triangle in triangles {
        faces.push(FACE_TRIANGLE);
        for vertex in triangle {
            faces.push(indexer.index_of(to_site.apply(vertex)));
        }
    }

    BuiltMesh {
        geometry: Geometry::new(
            format_handle(handle),
            GeometryData::triangles(indexer.flatten(), faces),
        ),
        extents: indexer.bbox(),
    }
}

pub(crate) fn space_names(model: &Model, space: Option<&Space>) -> SpaceNames {
    let Some(space) = space else {
        return SpaceNames::default();
    };
    SpaceNames {
        space_name: Some(space.name.clone()),
        thermal_zone_name: space
            .thermal_zone
            .as_deref()
            .and_then(|h| model.thermal_zone(h))
            .map(|z| z.name.clone()),
        space_type_name: space
            .space_type
            .as_deref()
            .and_then(|h| model.space_type(h))
            .map(|t| t.name.clone()),
        building_story_name: space
            .building_story
            .as_deref()
            .and_then(|h| model.building_story(h))
            .map(|s| s.name.clone()),
    }
}

pub(crate) fn construction_name(model: &Model, construction: Option<&str>) -> Option<String> {
    construction
        .and_then(|h| model.construction(h))
        .map(|c| c.name.clone())
}

pub(crate) fn vertices_of(points: &[Point3]) -> Vec<Vertex> {
    points.iter().map(Vertex::from).collect()
}

fn surface_user_data(model: &Model, surface: &Surface, space: Option<&Space>) -> UserData {
    let names = space_names(model, space);
    UserData {
        handle: format_handle(&surface.handle),
        name: surface.name.clone(),
        surface_type: surface.surface_type.clone(),
        construction_name: construction_name(model, surface.construction.as_deref()),
        space_name: names.space_name,
        thermal_zone_name: names.thermal_zone_name,
        space_type_name: names.space_type_name,
        building_story_name: names.building_story_name,
        outside_boundary_condition: Some(surface.outside_boundary_condition.clone()),
        outside_boundary_condition_object_name: surface
            .adjacent_surface
            .as_deref()
            .and_then(|h| model.surface(h))
            .map(|s| s.name.clone()),
        sun_exposure: surface.sun_exposure.clone(),
        wind_exposure: surface.wind_exposure.clone(),
        vertices: vertices_of(&surface.vertices),
    }
}

/// Boundary condition, exposure and space membership come from the parent.
fn sub_surface_user_data(model: &Model, sub: &SubSurface, parent: &UserData) -> UserData {
    UserData {
        handle: format_handle(&sub.handle),
        name: sub.name.clone(),
        surface_type: sub.sub_surface_type.clone(),
        construction_name: construction_name(model, sub.construction.as_deref()),
        space_name: parent.space_name.clone(),
        thermal_zone_name: parent.thermal_zone_name.clone(),
        space_type_name: parent.space_type_name.clone(),
        building_story_name: parent.building_story_name.clone(),
        outside_boundary_condition: parent.outside_boundary_condition.clone(),
        outside_boundary_condition_object_name: sub
            .adjacent_sub_surface
            .as_deref()
            .and_then(|h| model.sub_surface(h))
            .map(|s| s.name.clone()),
        sun_exposure: parent.sun_exposure.clone(),
        wind_exposure: parent.wind_exposure.clone(),
        vertices: vertices_of(&sub.vertices),
    }
}
