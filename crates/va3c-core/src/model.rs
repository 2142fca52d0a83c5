use crate::geom::{Point3, Transform};
use serde::{Deserialize, Serialize};

pub type Handle = String;

/// Strips the braces the modelling tool wraps around handles.
pub fn format_handle(handle: &str) -> String {
    handle.replace(['{', '}'], "")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderingColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl RenderingColor {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn opacity(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// Packed `0xRRGGBB` value as three.js expects.
    pub fn hex(&self) -> u32 {
        (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }
}

/// Base category of an envelope surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurfaceCategory {
    Floor,
    Wall,
    RoofCeiling,
}

impl SurfaceCategory {
    pub fn parse(surface_type: &str) -> Option<Self> {
        match surface_type.to_ascii_uppercase().as_str() {
            "FLOOR" => Some(Self::Floor),
            "WALL" => Some(Self::Wall),
            "ROOFCEILING" => Some(Self::RoofCeiling),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubSurfaceCategory {
    Window,
    Door,
}

impl SubSurfaceCategory {
    /// Anything glazed renders as a window; everything else as a door.
    pub fn classify(sub_surface_type: &str) -> Self {
        if sub_surface_type.contains("Window") || sub_surface_type.contains("Glass") {
            Self::Window
        } else {
            Self::Door
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShadingScope {
    Site,
    #[default]
    Building,
    Space,
}

impl ShadingScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShadingScope::Site => "Site",
            ShadingScope::Building => "Building",
            ShadingScope::Space => "Space",
        }
    }
}

/// Placement of a planar surface group relative to the building.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Placement {
    pub origin: Option<Point3>,
    pub direction_of_relative_north: f64,
}

impl Placement {
    pub fn transformation(&self) -> Transform {
        let origin = self.origin.unwrap_or(Point3::new(0.0, 0.0, 0.0));
        Transform::translation(origin.x, origin.y, origin.z)
            * Transform::rotation_z(-self.direction_of_relative_north)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubSurface {
    pub handle: Handle,
    pub name: String,
    pub sub_surface_type: String,
    #[serde(default)]
    pub adjacent_sub_surface: Option<Handle>,
    #[serde(default)]
    pub construction: Option<Handle>,
    pub vertices: Vec<Point3>,
}

impl SubSurface {
    pub fn category(&self) -> SubSurfaceCategory {
        SubSurfaceCategory::classify(&self.sub_surface_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub handle: Handle,
    pub name: String,
    pub surface_type: String,
    pub outside_boundary_condition: String,
    #[serde(default)]
    pub adjacent_surface: Option<Handle>,
    pub sun_exposure: String,
    pub wind_exposure: String,
    #[serde(default)]
    pub construction: Option<Handle>,
    #[serde(default)]
    pub space: Option<Handle>,
    pub vertices: Vec<Point3>,
    #[serde(default)]
    pub sub_surfaces: Vec<SubSurface>,
}

impl Surface {
    pub fn category(&self) -> Option<SurfaceCategory> {
        SurfaceCategory::parse(&self.surface_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadingSurfaceGroup {
    pub handle: Handle,
    pub name: String,
    #[serde(default)]
    pub shading_surface_type: ShadingScope,
    #[serde(default)]
    pub space: Option<Handle>,
    #[serde(default)]
    pub placement: Placement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShadingSurface {
    pub handle: Handle,
    pub name: String,
    #[serde(default)]
    pub construction: Option<Handle>,
    #[serde(default)]
    pub shading_surface_group: Option<Handle>,
    pub vertices: Vec<Point3>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteriorPartitionSurfaceGroup {
    pub handle: Handle,
    pub name: String,
    #[serde(default)]
    pub space: Option<Handle>,
    #[serde(default)]
    pub placement: Placement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InteriorPartitionSurface {
    pub handle: Handle,
    pub name: String,
    #[serde(default)]
    pub construction: Option<Handle>,
    #[serde(default)]
    pub interior_partition_surface_group: Option<Handle>,
    pub vertices: Vec<Point3>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Space {
    pub handle: Handle,
    pub name: String,
    #[serde(default)]
    pub thermal_zone: Option<Handle>,
    #[serde(default)]
    pub space_type: Option<Handle>,
    #[serde(default)]
    pub building_story: Option<Handle>,
    #[serde(default)]
    pub placement: Placement,
}

/// Any model object that carries an optional rendering color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedObject {
    pub handle: Handle,
    pub name: String,
    #[serde(default)]
    pub rendering_color: Option<RenderingColor>,
}

pub type Construction = RenderedObject;
pub type ThermalZone = RenderedObject;
pub type SpaceType = RenderedObject;
pub type BuildingStory = RenderedObject;

/// Full snapshot of the building model.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Model {
    /// Building rotation from true north, degrees clockwise.
    pub north_axis: f64,
    pub surfaces: Vec<Surface>,
    pub shading_surfaces: Vec<ShadingSurface>,
    pub shading_surface_groups: Vec<ShadingSurfaceGroup>,
    pub interior_partition_surfaces: Vec<InteriorPartitionSurface>,
    pub interior_partition_surface_groups: Vec<InteriorPartitionSurfaceGroup>,
    pub spaces: Vec<Space>,
    pub constructions: Vec<Construction>,
    pub thermal_zones: Vec<ThermalZone>,
    pub space_types: Vec<SpaceType>,
    pub building_stories: Vec<BuildingStory>,
}

impl Model {
    pub fn surface(&self, handle: &str) -> Option<&Surface> {
        self.surfaces.iter().find(|s| s.handle == handle)
    }

    pub fn sub_surface(&self, handle: &str) -> Option<&SubSurface> {
        self.surfaces
            .iter()
            .flat_map(|s| s.sub_surfaces.iter())
            .find(|s| s.handle == handle)
    }

    pub fn space(&self, handle: &str) -> Option<&Space> {
        self.spaces.iter().find(|s| s.handle == handle)
    }

    pub fn shading_surface_group(&self, handle: &str) -> Option<&ShadingSurfaceGroup> {
        self.shading_surface_groups.iter().find(|g| g.handle == handle)
    }

    pub fn interior_partition_surface_group(
        &self,
        handle: &str,
    ) -> Option<&InteriorPartitionSurfaceGroup> {
        self.interior_partition_surface_groups
            .iter()
            .find(|g| g.handle == handle)
    }

    pub fn construction(&self, handle: &str) -> Option<&Construction> {
        self.constructions.iter().find(|c| c.handle == handle)
    }

    pub fn thermal_zone(&self, handle: &str) -> Option<&ThermalZone> {
        self.thermal_zones.iter().find(|z| z.handle == handle)
    }

    pub fn space_type(&self, handle: &str) -> Option<&SpaceType> {
        self.space_types.iter().find(|t| t.handle == handle)
    }

    pub fn building_story(&self, handle: &str) -> Option<&BuildingStory> {
        self.building_stories.iter().find(|s| s.handle == handle)
    }

    pub fn building_transformation(&self) -> Transform {
        Transform::rotation_z(-self.north_axis)
    }

    /// Site transformation of a space. Geometry outside any space is already
    /// in site coordinates, so `None` is the identity.
    pub fn space_site_transformation(&self, space: Option<&Space>) -> Transform {
        space
            .map(|s| self.building_transformation() * s.placement.transformation())
            .unwrap_or_default()
    }

    /// Site-scoped groups sit outside the building and ignore its north axis;
    /// space-scoped groups are placed relative to their space.
    pub fn shading_group_site_transformation(&self, group: &ShadingSurfaceGroup) -> Transform {
        let local = group.placement.transformation();
        match group.shading_surface_type {
            ShadingScope::Site => local,
            ShadingScope::Building => self.building_transformation() * local,
            ShadingScope::Space => {
                let space = group.space.as_deref().and_then(|h| self.space(h));
                self.space_site_transformation(space) * local
            }
        }
    }

    /// Interior partition groups are placed inside their space, when they have one.
    pub fn interior_group_site_transformation(
        &self,
        group: &InteriorPartitionSurfaceGroup,
    ) -> Transform {
        let space = group.space.as_deref().and_then(|h| self.space(h));
        self.space_site_transformation(space) * group.placement.transformation()
    }
}
