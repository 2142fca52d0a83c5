mod common;

use common::{assert_well_formed, canopy, floor, office_model, p, wall_with_window};
use va3c_core::model::{Model, ShadingScope, Surface};
use va3c_core::Error;
use va3c_export::{
    EarcutKernel, Export, ExportConfig, Exporter, SequentialIds, UnknownSurfacePolicy,
};

fn export_with(model: &Model, cfg: ExportConfig) -> va3c_core::Result<Export> {
    Exporter::with_collaborators(cfg, EarcutKernel, SequentialIds::new("id")).export(model)
}

fn material_name<'a>(export: &'a Export, child: usize) -> &'a str {
    let uuid = &export.scene.object.children[child].material;
    &export.scene.material(uuid).unwrap().name
}

#[test]
fn single_floor_scenario() {
    let model = Model {
        surfaces: vec![floor("{floor-1}", "Floor 1")],
        ..Model::default()
    };
    let export = export_with(&model, ExportConfig::default()).unwrap();
    let scene = &export.scene;

    assert_eq!(1, scene.geometries.len());
    assert_eq!(1, scene.object.children.len());
    assert_eq!(12, scene.geometries[0].data.vertices.len());
    assert_eq!(8, scene.geometries[0].data.faces.len());
    assert_eq!("Floor", material_name(&export, 0));
    assert_eq!("Floor 1 0", scene.object.children[0].name);
    assert_eq!("floor-1", scene.object.children[0].geometry);
    assert_well_formed(scene);

    assert_eq!(4.3, scene.metadata.version);
    assert_eq!("Object", scene.metadata.kind);
    assert_eq!("OpenStudio", scene.metadata.generator);
    assert_eq!(36, scene.materials.len());
}

#[test]
fn wall_with_window_scenario() {
    let model = Model {
        surfaces: vec![wall_with_window()],
        ..Model::default()
    };
    let export = export_with(&model, ExportConfig::default()).unwrap();

    assert_eq!(2, export.scene.geometries.len());
    assert_eq!("Wall", material_name(&export, 0));
    assert_eq!("Window", material_name(&export, 1));
    assert_eq!("Wall 1 0", export.scene.object.children[0].name);
    assert_eq!("Wall 1 1", export.scene.object.children[1].name);
    assert_well_formed(&export.scene);
}

#[test]
fn sub_surfaces_that_are_not_glazed_use_door_material() {
    let mut surface = wall_with_window();
    surface.sub_surfaces[0].sub_surface_type = "Door".to_string();
    let model = Model {
        surfaces: vec![surface],
        ..Model::default()
    };
    let export = export_with(&model, ExportConfig::default()).unwrap();
    assert_eq!("Door", material_name(&export, 1));
}

#[test]
fn ungrouped_shading_scenario() {
    let model = Model {
        shading_surfaces: vec![canopy("{shade-1}", "Canopy", None)],
        ..Model::default()
    };
    let export = export_with(&model, ExportConfig::default()).unwrap();

    let child = &export.scene.object.children[0];
    assert_eq!("BuildingShading", child.user_data.surface_type);
    assert_eq!("SunExposed", child.user_data.sun_exposure);
    assert_eq!(None, child.user_data.space_name);
    assert_eq!("BuildingShading", material_name(&export, 0));
}

#[test]
fn emits_surfaces_before_shading_in_model_order() {
    let mut model = office_model();
    model.shading_surface_groups = vec![common::shading_group("g", ShadingScope::Site, None)];
    model.shading_surfaces.push(canopy("{shade-2}", "Tree", Some("g")));
    let export = export_with(&model, ExportConfig::default()).unwrap();

    let names: Vec<&str> = export
        .scene
        .object
        .children
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(vec!["Floor 1 0", "Wall 1 0", "Wall 1 1", "Canopy 0", "Tree 0"], names);
    assert_eq!("Roof", export.scene.materials[4].name);
    assert_eq!("SiteShading", material_name(&export, 4));
    assert_eq!(36 + 6, export.scene.materials.len());
    assert_well_formed(&export.scene);

    let stats = &export.report.stats;
    assert_eq!(2, stats.surfaces_total);
    assert_eq!(1, stats.sub_surfaces_total);
    assert_eq!(2, stats.shading_surfaces_total);
    assert_eq!(5, stats.geometries_emitted);
    assert_eq!(0, stats.skipped_entities);
    assert!(export.report.extents.is_some());
}

#[test]
fn ids_come_from_the_injected_generator() {
    let model = Model {
        surfaces: vec![floor("f", "Floor 1")],
        ..Model::default()
    };
    let export = export_with(&model, ExportConfig::default()).unwrap();

    // Materials first, then the scene root, then one id per mesh node.
    assert_eq!("id-1", export.scene.materials[0].uuid);
    assert_eq!("id-37", export.scene.object.uuid);
    assert_eq!("id-38", export.scene.object.children[0].uuid);
}

#[test]
fn export_is_deterministic_with_fixed_ids() {
    let model = office_model();
    let first = export_with(&model, ExportConfig::default()).unwrap();
    let second = export_with(&model, ExportConfig::default()).unwrap();
    assert_eq!(first.scene, second.scene);

    let parallel = export_with(
        &model,
        ExportConfig {
            parallel: true,
            ..ExportConfig::default()
        },
    )
    .unwrap();
    assert_eq!(first.scene, parallel.scene);
}

#[test]
fn failed_triangulation_does_not_abort_export() {
    let mut model = office_model();
    let mut sliver = floor("{bad}", "Sliver");
    sliver.vertices = vec![p(0.0, 0.0, 0.0), p(1.0, 0.0, 0.0), p(2.0, 0.0, 0.0)];
    model.surfaces.insert(0, sliver);

    let export = export_with(&model, ExportConfig::default()).unwrap();
    assert_eq!(4, export.scene.geometries.len());
    assert_eq!("Floor 1 0", export.scene.object.children[0].name);
    assert_eq!(1, export.report.warnings.len());
    assert_eq!(1, export.report.stats.skipped_entities);
    assert_well_formed(&export.scene);
}

fn plenum_model() -> Model {
    let mut odd: Surface = floor("{odd}", "Odd");
    odd.surface_type = "Plenum".to_string();
    Model {
        surfaces: vec![odd, floor("{floor-1}", "Floor 1")],
        ..Model::default()
    }
}

#[test]
fn rejects_unknown_surface_types_by_default() {
    let err = export_with(&plenum_model(), ExportConfig::default()).unwrap_err();
    match err {
        Error::UnknownSurfaceType { name, surface_type } => {
            assert_eq!("Odd", name);
            assert_eq!("Plenum", surface_type);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn omits_unknown_surface_types_when_configured() {
    let cfg = ExportConfig {
        unknown_surfaces: UnknownSurfacePolicy::Omit,
        generator: "test-suite".to_string(),
        ..ExportConfig::default()
    };
    let export = export_with(&plenum_model(), cfg).unwrap();

    assert_eq!(1, export.scene.object.children.len());
    assert_eq!("Floor 1 0", export.scene.object.children[0].name);
    assert_eq!("unknown_surface_type", export.report.warnings[0].code);
    assert_eq!(1, export.report.stats.skipped_entities);
    assert_eq!("test-suite", export.scene.metadata.generator);
}

#[test]
fn export_mut_assigns_default_colors_on_request() {
    let mut model = office_model();
    let untouched =
        Exporter::with_collaborators(ExportConfig::default(), EarcutKernel, SequentialIds::new("a"))
            .export_mut(&mut model)
            .unwrap();
    assert!(model.constructions.iter().all(|c| c.rendering_color.is_none()));

    let cfg = ExportConfig {
        assign_default_colors: true,
        ..ExportConfig::default()
    };
    let assigned = Exporter::with_collaborators(cfg, EarcutKernel, SequentialIds::new("a"))
        .export_mut(&mut model)
        .unwrap();
    assert!(model.constructions.iter().all(|c| c.rendering_color.is_some()));
    assert_eq!(untouched.scene.materials, assigned.scene.materials);
}

#[test]
fn serializes_to_viewer_json() {
    let export = Exporter::new(ExportConfig::default())
        .export(&office_model())
        .unwrap();
    let json = serde_json::to_value(&export.scene).unwrap();

    let child = &json["object"]["children"][1];
    assert_eq!("Wall 1 0", child["name"]);
    assert_eq!("Outdoors", child["userData"]["outsideBoundaryCondition"]);
    assert!(child["userData"]["outsideBoundaryConditionObjectName"].is_null());
    assert_eq!("Brick", child["userData"]["constructionName"]);
    assert_eq!(36, child["uuid"].as_str().unwrap().len());
}
