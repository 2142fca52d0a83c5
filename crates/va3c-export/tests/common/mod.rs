#![allow(dead_code)]

use va3c_core::geom::Point3;
use va3c_core::model::{
    Model, Placement, RenderedObject, ShadingScope, ShadingSurface, ShadingSurfaceGroup, Space,
    SubSurface, Surface,
};
use va3c_core::scene::SceneDocument;

pub fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

pub fn named(handle: &str, name: &str) -> RenderedObject {
    RenderedObject {
        handle: handle.to_string(),
        name: name.to_string(),
        rendering_color: None,
    }
}

/// 10 x 10 floor at z = 0, listed clockwise from above (normal points down).
pub fn floor(handle: &str, name: &str) -> Surface {
    Surface {
        handle: handle.to_string(),
        name: name.to_string(),
        surface_type: "Floor".to_string(),
        outside_boundary_condition: "Ground".to_string(),
        adjacent_surface: None,
        sun_exposure: "NoSun".to_string(),
        wind_exposure: "NoWind".to_string(),
        construction: None,
        space: None,
        vertices: vec![
            p(0.0, 0.0, 0.0),
            p(0.0, 10.0, 0.0),
            p(10.0, 10.0, 0.0),
            p(10.0, 0.0, 0.0),
        ],
        sub_surfaces: Vec::new(),
    }
}

/// South facing 10 x 3 wall in the y = 0 plane.
pub fn wall(handle: &str, name: &str) -> Surface {
    Surface {
        handle: handle.to_string(),
        name: name.to_string(),
        surface_type: "Wall".to_string(),
        outside_boundary_condition: "Outdoors".to_string(),
        adjacent_surface: None,
        sun_exposure: "SunExposed".to_string(),
        wind_exposure: "WindExposed".to_string(),
        construction: None,
        space: None,
        vertices: vec![
            p(0.0, 0.0, 3.0),
            p(0.0, 0.0, 0.0),
            p(10.0, 0.0, 0.0),
            p(10.0, 0.0, 3.0),
        ],
        sub_surfaces: Vec::new(),
    }
}

pub fn window(handle: &str, name: &str, sub_surface_type: &str) -> SubSurface {
    SubSurface {
        handle: handle.to_string(),
        name: name.to_string(),
        sub_surface_type: sub_surface_type.to_string(),
        adjacent_sub_surface: None,
        construction: None,
        vertices: vec![
            p(2.0, 0.0, 2.0),
            p(2.0, 0.0, 1.0),
            p(8.0, 0.0, 1.0),
            p(8.0, 0.0, 2.0),
        ],
    }
}

pub fn wall_with_window() -> Surface {
    let mut surface = wall("{wall-1}", "Wall 1");
    surface.sub_surfaces.push(window("{win-1}", "Window 1", "FixedWindow"));
    surface
}

pub fn canopy(handle: &str, name: &str, group: Option<&str>) -> ShadingSurface {
    ShadingSurface {
        handle: handle.to_string(),
        name: name.to_string(),
        construction: None,
        shading_surface_group: group.map(str::to_string),
        vertices: vec![
            p(0.0, -2.0, 3.0),
            p(0.0, 0.0, 3.0),
            p(10.0, 0.0, 3.0),
            p(10.0, -2.0, 3.0),
        ],
    }
}

pub fn shading_group(handle: &str, scope: ShadingScope, space: Option<&str>) -> ShadingSurfaceGroup {
    ShadingSurfaceGroup {
        handle: handle.to_string(),
        name: format!("{handle} group"),
        shading_surface_type: scope,
        space: space.map(str::to_string),
        placement: Placement::default(),
    }
}

/// A space with zone, space type and story, plus a floor, a wall with a
/// window, and one shading surface.
pub fn office_model() -> Model {
    let mut floor = floor("{floor-1}", "Floor 1");
    floor.space = Some("space-1".to_string());
    floor.construction = Some("c-slab".to_string());
    let mut wall = wall_with_window();
    wall.space = Some("space-1".to_string());
    wall.construction = Some("c-wall".to_string());
    wall.sub_surfaces[0].construction = Some("c-glazing".to_string());

    Model {
        surfaces: vec![floor, wall],
        shading_surfaces: vec![canopy("{shade-1}", "Canopy", None)],
        spaces: vec![Space {
            handle: "space-1".to_string(),
            name: "Office".to_string(),
            thermal_zone: Some("zone-1".to_string()),
            space_type: Some("type-1".to_string()),
            building_story: Some("story-1".to_string()),
            placement: Placement::default(),
        }],
        constructions: vec![
            named("c-slab", "Slab"),
            named("c-wall", "Brick"),
            named("c-glazing", "Double Pane"),
        ],
        thermal_zones: vec![named("zone-1", "Zone A")],
        space_types: vec![named("type-1", "Open Office")],
        building_stories: vec![named("story-1", "Level 1")],
        ..Model::default()
    }
}

/// Checks face structure and reference integrity of a whole document.
pub fn assert_well_formed(doc: &SceneDocument) {
    assert_eq!(doc.geometries.len(), doc.object.children.len());
    for geometry in &doc.geometries {
        let data = &geometry.data;
        assert_eq!(0, data.vertices.len() % 3);
        assert_eq!(0, data.faces.len() % 4);
        for face in data.faces.chunks(4) {
            assert_eq!(0, face[0]);
            for idx in &face[1..] {
                assert!((*idx as usize) < data.vertex_count());
            }
        }
        let refs = doc
            .object
            .children
            .iter()
            .filter(|c| c.geometry == geometry.uuid)
            .count();
        assert_eq!(1, refs, "geometry {} referenced {refs} times", geometry.uuid);
    }
    for child in &doc.object.children {
        assert!(doc.geometry(&child.geometry).is_some());
        assert!(doc.material(&child.material).is_some());
    }
}
