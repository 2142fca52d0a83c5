use crate::ids::IdGenerator;
use crate::structs::MeshKind;
use va3c_core::model::{
    Model, RenderedObject, RenderingColor, ShadingScope, SubSurfaceCategory, SurfaceCategory,
};
use va3c_core::scene::Material;
use va3c_core::{Error, Result};

const OPAQUE: f64 = 1.0;
const GLAZING: f64 = 0.6;

/// Category materials, in catalog order. Colors follow the modelling tool's
/// rendering conventions.
const CATEGORY_MATERIALS: &[(&str, [u8; 3], f64)] = &[
    ("Floor", [128, 128, 128], OPAQUE),
    ("Floor_Int", [191, 191, 191], OPAQUE),
    ("Wall", [204, 178, 102], OPAQUE),
    ("Wall_Int", [235, 226, 197], OPAQUE),
    ("Roof", [153, 76, 76], OPAQUE),
    ("Roof_Int", [202, 149, 149], OPAQUE),
    ("Window", [102, 178, 204], GLAZING),
    ("Window_Int", [192, 226, 235], GLAZING),
    ("Door", [153, 133, 76], OPAQUE),
    ("Door_Int", [202, 188, 149], OPAQUE),
    ("SiteShading", [75, 124, 149], OPAQUE),
    ("SiteShading_Int", [187, 209, 220], OPAQUE),
    ("BuildingShading", [113, 76, 153], OPAQUE),
    ("BuildingShading_Int", [216, 203, 229], OPAQUE),
    ("SpaceShading", [76, 110, 178], OPAQUE),
    ("SpaceShading_Int", [183, 197, 224], OPAQUE),
    ("InteriorPartitionSurface", [158, 188, 143], OPAQUE),
    ("InteriorPartitionSurface_Int", [213, 226, 207], OPAQUE),
    ("Boundary_Surface", [0, 153, 0], OPAQUE),
    ("Boundary_Adiabatic", [255, 101, 178], OPAQUE),
    ("Boundary_Space", [255, 0, 0], OPAQUE),
    ("Boundary_Outdoors", [163, 204, 204], OPAQUE),
    ("Boundary_Outdoors_Sun", [40, 204, 204], OPAQUE),
    ("Boundary_Outdoors_Wind", [9, 159, 162], OPAQUE),
    ("Boundary_Outdoors_SunWind", [68, 119, 161], OPAQUE),
    ("Boundary_Ground", [204, 183, 122], OPAQUE),
    ("Boundary_Groundfcfactormethod", [153, 122, 30], OPAQUE),
    ("Boundary_Groundslabpreprocessoraverage", [255, 191, 0], OPAQUE),
    ("Boundary_Groundslabpreprocessorcore", [255, 182, 50], OPAQUE),
    ("Boundary_Groundslabpreprocessorperimeter", [255, 178, 101], OPAQUE),
    ("Boundary_Groundbasementpreprocessoraveragewall", [204, 51, 0], OPAQUE),
    ("Boundary_Groundbasementpreprocessoraveragefloor", [204, 81, 40], OPAQUE),
    ("Boundary_Groundbasementpreprocessorupperwall", [204, 112, 81], OPAQUE),
    ("Boundary_Groundbasementpreprocessorlowerwall", [204, 173, 163], OPAQUE),
    ("Boundary_Othersidecoefficients", [63, 63, 63], OPAQUE),
    ("Boundary_Othersideconditionsmodel", [153, 0, 76], OPAQUE),
];

/// Colors handed out to model objects without a rendering color, by position.
const DEFAULT_COLORS: &[[u8; 3]] = &[
    [230, 159, 0],
    [86, 180, 233],
    [0, 158, 115],
    [240, 228, 66],
    [0, 114, 178],
    [213, 94, 0],
    [204, 121, 167],
    [153, 153, 153],
    [117, 112, 179],
    [27, 158, 119],
    [217, 95, 2],
    [102, 166, 30],
];

/// Rendering color used for the `index`-th object of a category that has none.
pub fn default_rendering_color(index: usize) -> RenderingColor {
    let [r, g, b] = DEFAULT_COLORS[index % DEFAULT_COLORS.len()];
    RenderingColor::rgb(r, g, b)
}

/// Writes the default rendering colors into the model for every construction,
/// thermal zone, space type and building story that lacks one. Returns the
/// number of objects changed.
///
/// The catalog falls back to the same colors without touching the model, so
/// exporting before or after this call yields the same materials.
pub fn ensure_default_rendering_colors(model: &mut Model) -> usize {
    let mut assigned = 0;
    for objects in [
        &mut model.constructions,
        &mut model.thermal_zones,
        &mut model.space_types,
        &mut model.building_stories,
    ] {
        for (index, object) in objects.iter_mut().enumerate() {
            if object.rendering_color.is_none() {
                object.rendering_color = Some(default_rendering_color(index));
                assigned += 1;
            }
        }
    }
    assigned
}

/// Every material of one export, in output order.
#[derive(Debug, Clone)]
pub struct MaterialCatalog {
    materials: Vec<Material>,
}

impl MaterialCatalog {
    pub fn build(model: &Model, ids: &dyn IdGenerator) -> Self {
        let mut materials: Vec<Material> = CATEGORY_MATERIALS
            .iter()
            .map(|(name, [r, g, b], opacity)| {
                let color = RenderingColor::rgb(*r, *g, *b);
                Material::phong(ids.next_id(), *name, color.hex(), *opacity)
            })
            .collect();

        for (category, objects) in [
            ("Construction", &model.constructions),
            ("ThermalZone", &model.thermal_zones),
            ("SpaceType", &model.space_types),
            ("BuildingStory", &model.building_stories),
        ] {
            materials.extend(object_materials(category, objects, ids));
        }

        Self { materials }
    }

    /// Catalog over a caller-supplied material list, kept in the given order.
    pub fn from_materials(materials: Vec<Material>) -> Self {
        Self { materials }
    }

    pub fn get(&self, name: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.name == name)
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    pub fn into_materials(self) -> Vec<Material> {
        self.materials
    }
}

fn object_materials<'a>(
    category: &'a str,
    objects: &'a [RenderedObject],
    ids: &'a dyn IdGenerator,
) -> impl Iterator<Item = Material> + 'a {
    objects.iter().enumerate().map(move |(index, object)| {
        let color = object
            .rendering_color
            .unwrap_or_else(|| default_rendering_color(index));
        let name = format!("{category}_{}", object.name);
        Material::from_rendering_color(ids.next_id(), name, &color)
    })
}

/// The category materials scene nodes are drawn with, resolved once.
#[derive(Debug, Clone, Copy)]
pub struct Palette<'a> {
    floor: &'a Material,
    wall: &'a Material,
    roof: &'a Material,
    window: &'a Material,
    door: &'a Material,
    site_shading: &'a Material,
    building_shading: &'a Material,
    space_shading: &'a Material,
    interior_partition: &'a Material,
}

impl<'a> Palette<'a> {
    pub fn resolve(catalog: &'a MaterialCatalog) -> Result<Self> {
        let lookup = |name: &str| {
            catalog
                .get(name)
                .ok_or_else(|| Error::MissingMaterial(name.to_string()))
        };
        Ok(Self {
            floor: lookup("Floor")?,
            wall: lookup("Wall")?,
            roof: lookup("Roof")?,
            window: lookup("Window")?,
            door: lookup("Door")?,
            site_shading: lookup("SiteShading")?,
            building_shading: lookup("BuildingShading")?,
            space_shading: lookup("SpaceShading")?,
            interior_partition: lookup("InteriorPartitionSurface")?,
        })
    }

    pub fn material_for(&self, kind: MeshKind) -> &'a Material {
        match kind {
            MeshKind::Surface(SurfaceCategory::Floor) => self.floor,
            MeshKind::Surface(SurfaceCategory::Wall) => self.wall,
            MeshKind::Surface(SurfaceCategory::RoofCeiling) => self.roof,
            MeshKind::SubSurface(SubSurfaceCategory::Window) => self.window,
            MeshKind::SubSurface(SubSurfaceCategory::Door) => self.door,
            MeshKind::Shading(ShadingScope::Site) => self.site_shading,
            MeshKind::Shading(ShadingScope::Building) => self.building_shading,
            MeshKind::Shading(ShadingScope::Space) => self.space_shading,
            MeshKind::InteriorPartition => self.interior_partition,
        }
    }
}
