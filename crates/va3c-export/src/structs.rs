use va3c_core::geom::BBox3;
use va3c_core::model::{ShadingScope, SubSurfaceCategory, SurfaceCategory};
use va3c_core::report::Warning;
use va3c_core::scene::{Geometry, UserData};

/// What an emitted mesh represents; decides its material.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshKind {
    Surface(SurfaceCategory),
    SubSurface(SubSurfaceCategory),
    Shading(ShadingScope),
    InteriorPartition,
}

/// Meshes built from one model surface. `geometries`, `user_datas` and
/// `kinds` are parallel; a base surface always comes first.
#[derive(Debug, Clone)]
pub struct MeshSet {
    pub geometries: Vec<Geometry>,
    pub user_datas: Vec<UserData>,
    pub kinds: Vec<MeshKind>,
    pub warnings: Vec<Warning>,
    pub extents: BBox3,
}

impl MeshSet {
    pub fn empty() -> Self {
        Self {
            geometries: Vec::new(),
            user_datas: Vec::new(),
            kinds: Vec::new(),
            warnings: Vec::new(),
            extents: BBox3::empty(),
        }
    }

    pub fn skipped(warning: Warning) -> Self {
        tracing::warn!("{}", warning.message);
        Self {
            warnings: vec![warning],
            ..Self::empty()
        }
    }

    pub fn push(&mut self, mesh: BuiltMesh, user_data: UserData, kind: MeshKind) {
        self.extents = self.extents.union(&mesh.extents);
        self.geometries.push(mesh.geometry);
        self.user_datas.push(user_data);
        self.kinds.push(kind);
    }

    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }
}

/// One triangulated geometry plus the extents of its welded vertices.
#[derive(Debug, Clone)]
pub struct BuiltMesh {
    pub geometry: Geometry,
    pub extents: BBox3,
}

/// Names reached through a space's optional relationships.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpaceNames {
    pub space_name: Option<String>,
    pub thermal_zone_name: Option<String>,
    pub space_type_name: Option<String>,
    pub building_story_name: Option<String>,
}
