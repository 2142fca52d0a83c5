use crate::kernel::GeometryKernel;
use crate::mesh::{aligned_loop, build_mesh, construction_name, space_names, vertices_of};
use crate::structs::{MeshKind, MeshSet, SpaceNames};
use va3c_core::geom::{Point3, Transform};
use va3c_core::model::{
    format_handle, InteriorPartitionSurface, Model, ShadingScope, ShadingSurface,
};
use va3c_core::report::Warning;
use va3c_core::scene::UserData;

/// Builds the single mesh of a shading surface or interior partition surface.
/// Neither can carry sub-surfaces, so triangulation never has holes.
pub struct ShadeMeshBuilder<'a, K: GeometryKernel + ?Sized> {
    model: &'a Model,
    kernel: &'a K,
    tolerance: f64,
}

impl<'a, K: GeometryKernel + ?Sized> ShadeMeshBuilder<'a, K> {
    pub fn new(model: &'a Model, kernel: &'a K, tolerance: f64) -> Self {
        Self {
            model,
            kernel,
            tolerance,
        }
    }

    pub fn build(&self, surface: &ShadingSurface) -> MeshSet {
        let group = surface
            .shading_surface_group
            .as_deref()
            .and_then(|h| self.model.shading_surface_group(h));

        let (scope, site, names) = match group {
            Some(group) => {
                let space = group.space.as_deref().and_then(|h| self.model.space(h));
                (
                    group.shading_surface_type,
                    self.model.shading_group_site_transformation(group),
                    space_names(self.model, space),
                )
            }
            None => (ShadingScope::Building, Transform::identity(), SpaceNames::default()),
        };

        let face = PlanarFace {
            handle: &surface.handle,
            name: &surface.name,
            vertices: &surface.vertices,
        };
        let data = UserData {
            handle: format_handle(&surface.handle),
            name: surface.name.clone(),
            surface_type: format!("{}Shading", scope.as_str()),
            construction_name: construction_name(self.model, surface.construction.as_deref()),
            space_name: names.space_name,
            thermal_zone_name: names.thermal_zone_name,
            space_type_name: names.space_type_name,
            building_story_name: names.building_story_name,
            outside_boundary_condition: None,
            outside_boundary_condition_object_name: None,
            sun_exposure: "SunExposed".to_string(),
            wind_exposure: "WindExposed".to_string(),
            vertices: vertices_of(&surface.vertices),
        };
        self.build_face(face, "shading surface", &site, data, MeshKind::Shading(scope))
    }

    pub fn build_interior(&self, surface: &InteriorPartitionSurface) -> MeshSet {
        let group = surface
            .interior_partition_surface_group
            .as_deref()
            .and_then(|h| self.model.interior_partition_surface_group(h));

        let (site, names) = match group {
            Some(group) => {
                let space = group.space.as_deref().and_then(|h| self.model.space(h));
                (
                    self.model.interior_group_site_transformation(group),
                    space_names(self.model, space),
                )
            }
            None => (Transform::identity(), SpaceNames::default()),
        };

        let face = PlanarFace {
            handle: &surface.handle,
            name: &surface.name,
            vertices: &surface.vertices,
        };
        let data = UserData {
            handle: format_handle(&surface.handle),
            name: surface.name.clone(),
            surface_type: "InteriorPartitionSurface".to_string(),
            construction_name: construction_name(self.model, surface.construction.as_deref()),
            space_name: names.space_name,
            thermal_zone_name: names.thermal_zone_name,
            space_type_name: names.space_type_name,
            building_story_name: names.building_story_name,
            outside_boundary_condition: None,
            outside_boundary_condition_object_name: None,
            sun_exposure: "NoSun".to_string(),
            wind_exposure: "NoWind".to_string(),
            vertices: vertices_of(&surface.vertices),
        };
        self.build_face(
            face,
            "interior partition surface",
            &site,
            data,
            MeshKind::InteriorPartition,
        )
    }

    fn build_face(
        &self,
        face: PlanarFace<'_>,
        label: &str,
        site: &Transform,
        data: UserData,
        kind: MeshKind,
    ) -> MeshSet {
        let Some(align) = self.kernel.align_face(face.vertices) else {
            return MeshSet::skipped(Warning::new(
                "degenerate_surface",
                format!("Failed to align {label} {}", face.name),
            ));
        };
        let outer = aligned_loop(&align.inverse(), face.vertices);
        let triangles = self.kernel.triangulate(&outer, &[]);
        if triangles.is_empty() {
            return MeshSet::skipped(Warning::new(
                "triangulation_failed",
                format!("Failed to triangulate {label} {}", face.name),
            ));
        }

        let to_site = *site * align;
        let mut set = MeshSet::empty();
        let mesh = build_mesh(self.kernel, self.tolerance, face.handle, &triangles, &to_site);
        set.push(mesh, data, kind);
        set
    }
}

struct PlanarFace<'f> {
    handle: &'f str,
    name: &'f str,
    vertices: &'f [Point3],
}
