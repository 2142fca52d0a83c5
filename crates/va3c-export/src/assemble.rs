use crate::ids::{IdGenerator, UuidGenerator};
use crate::kernel::{EarcutKernel, GeometryKernel};
use crate::materials::{MaterialCatalog, Palette};
use crate::mesh::MeshBuilder;
use crate::shade::ShadeMeshBuilder;
use crate::structs::MeshSet;
use crate::vertex_index::DEFAULT_TOLERANCE;
use rayon::prelude::*;
use va3c_core::geom::BBox3;
use va3c_core::model::{InteriorPartitionSurface, Model, ShadingSurface, Surface, SurfaceCategory};
use va3c_core::report::{ExportReport, StatsReport, Warning};
use va3c_core::scene::{SceneChild, SceneDocument, SceneObject};
use va3c_core::{Error, Result};

/// What to do with a surface whose type is not Floor, Wall or RoofCeiling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownSurfacePolicy {
    /// Abort the export with [`Error::UnknownSurfaceType`].
    #[default]
    Reject,
    /// Leave the surface and its sub-surfaces out, with a warning.
    Omit,
}

#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Written to `metadata.generator`.
    pub generator: String,
    pub vertex_tolerance: f64,
    pub unknown_surfaces: UnknownSurfacePolicy,
    /// Build meshes on the rayon pool. Output order is unchanged.
    pub parallel: bool,
    /// Write default rendering colors into the model before exporting.
    /// Only [`Exporter::export_mut`] honours this.
    pub assign_default_colors: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            generator: "OpenStudio".to_string(),
            vertex_tolerance: DEFAULT_TOLERANCE,
            unknown_surfaces: UnknownSurfacePolicy::default(),
            parallel: false,
            assign_default_colors: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Export {
    pub scene: SceneDocument,
    pub report: ExportReport,
}

enum Job<'m> {
    Surface(&'m Surface, SurfaceCategory),
    Shading(&'m ShadingSurface),
    InteriorPartition(&'m InteriorPartitionSurface),
}

impl Job<'_> {
    fn name(&self) -> &str {
        match self {
            Job::Surface(s, _) => &s.name,
            Job::Shading(s) => &s.name,
            Job::InteriorPartition(s) => &s.name,
        }
    }
}

pub struct Exporter<K = EarcutKernel, I = UuidGenerator> {
    cfg: ExportConfig,
    kernel: K,
    ids: I,
}

impl Exporter {
    pub fn new(cfg: ExportConfig) -> Self {
        Self::with_collaborators(cfg, EarcutKernel, UuidGenerator)
    }
}

impl<K, I> Exporter<K, I>
where
    K: GeometryKernel + Sync,
    I: IdGenerator,
{
    pub fn with_collaborators(cfg: ExportConfig, kernel: K, ids: I) -> Self {
        Self { cfg, kernel, ids }
    }

    /// Like [`Exporter::export`], but first assigns default rendering colors
    /// to the model when the config asks for it.
    pub fn export_mut(&self, model: &mut Model) -> Result<Export> {
        if self.cfg.assign_default_colors {
            let assigned = crate::materials::ensure_default_rendering_colors(model);
            tracing::info!("assigned default rendering colors to {assigned} objects");
        }
        self.export(model)
    }

    pub fn export(&self, model: &Model) -> Result<Export> {
        let mut warnings = Vec::new();
        let jobs = self.plan(model, &mut warnings)?;

        let catalog = MaterialCatalog::build(model, &self.ids);
        let palette = Palette::resolve(&catalog)?;
        let scene_uuid = self.ids.next_id();

        let sets = self.build_meshes(model, &jobs);

        let mut stats = StatsReport {
            surfaces_total: model.surfaces.len(),
            sub_surfaces_total: model.surfaces.iter().map(|s| s.sub_surfaces.len()).sum(),
            shading_surfaces_total: model.shading_surfaces.len(),
            interior_partition_surfaces_total: model.interior_partition_surfaces.len(),
            materials_total: catalog.len(),
            skipped_entities: warnings.len(),
            ..StatsReport::default()
        };
        let mut extents = BBox3::empty();
        let mut geometries = Vec::new();
        let mut children = Vec::new();

        for (job, set) in jobs.iter().zip(sets) {
            stats.skipped_entities += set.warnings.len();
            warnings.extend(set.warnings);
            extents = extents.union(&set.extents);

            let pairs = set.geometries.into_iter().zip(set.user_datas).zip(set.kinds);
            for (index, ((geometry, user_data), kind)) in pairs.enumerate() {
                let material = palette.material_for(kind);
                stats.triangles_emitted += geometry.data.triangle_count();
                children.push(SceneChild::mesh(
                    self.ids.next_id(),
                    format!("{} {index}", job.name()),
                    &geometry,
                    material,
                    user_data,
                ));
                geometries.push(geometry);
            }
        }
        stats.geometries_emitted = geometries.len();

        tracing::info!(
            "exported {} geometries ({} triangles), {} materials, {} warnings",
            stats.geometries_emitted,
            stats.triangles_emitted,
            stats.materials_total,
            warnings.len()
        );

        let object = SceneObject::scene(scene_uuid, children);
        let scene = SceneDocument::new(
            self.cfg.generator.clone(),
            geometries,
            catalog.into_materials(),
            object,
        );
        let report = ExportReport {
            generator: self.cfg.generator.clone(),
            stats,
            extents: (!extents.is_empty()).then_some(extents),
            warnings,
        };
        Ok(Export { scene, report })
    }

    /// Surfaces first, then shading surfaces, then interior partitions, each
    /// in model order.
    fn plan<'m>(&self, model: &'m Model, warnings: &mut Vec<Warning>) -> Result<Vec<Job<'m>>> {
        let mut jobs = Vec::with_capacity(
            model.surfaces.len()
                + model.shading_surfaces.len()
                + model.interior_partition_surfaces.len(),
        );

        for surface in &model.surfaces {
            match (surface.category(), self.cfg.unknown_surfaces) {
                (Some(category), _) => jobs.push(Job::Surface(surface, category)),
                (None, UnknownSurfacePolicy::Reject) => {
                    return Err(Error::UnknownSurfaceType {
                        name: surface.name.clone(),
                        surface_type: surface.surface_type.clone(),
                    });
                }
                (None, UnknownSurfacePolicy::Omit) => {
                    let message = format!(
                        "Omitting surface {} with unsupported surface type {}",
                        surface.name, surface.surface_type
                    );
                    tracing::warn!("{message}");
                    warnings.push(Warning::new("unknown_surface_type", message));
                }
            }
        }
        jobs.extend(model.shading_surfaces.iter().map(Job::Shading));
        jobs.extend(
            model
                .interior_partition_surfaces
                .iter()
                .map(Job::InteriorPartition),
        );
        Ok(jobs)
    }

    fn build_meshes(&self, model: &Model, jobs: &[Job<'_>]) -> Vec<MeshSet> {
        let surfaces = MeshBuilder::new(model, &self.kernel, self.cfg.vertex_tolerance);
        let shades = ShadeMeshBuilder::new(model, &self.kernel, self.cfg.vertex_tolerance);
        let run = |job: &Job<'_>| match job {
            Job::Surface(surface, category) => surfaces.build(surface, *category),
            Job::Shading(surface) => shades.build(surface),
            Job::InteriorPartition(surface) => shades.build_interior(surface),
        };

        if self.cfg.parallel {
            jobs.par_iter().map(run).collect()
        } else {
            jobs.iter().map(run).collect()
        }
    }
}
