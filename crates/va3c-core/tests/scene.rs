use va3c_core::geom::Point3;
use va3c_core::scene::{
    Geometry, GeometryData, Material, SceneChild, SceneDocument, SceneObject, UserData, Vertex,
    IDENTITY_MATRIX,
};

fn user_data() -> UserData {
    UserData {
        handle: "s1".to_string(),
        name: "Floor 1".to_string(),
        surface_type: "Floor".to_string(),
        construction_name: None,
        space_name: Some("Space 1".to_string()),
        thermal_zone_name: None,
        space_type_name: None,
        building_story_name: None,
        outside_boundary_condition: Some("Ground".to_string()),
        outside_boundary_condition_object_name: None,
        sun_exposure: "NoSun".to_string(),
        wind_exposure: "NoWind".to_string(),
        vertices: vec![Vertex::from(&Point3::new(1.0, 2.0, 3.0))],
    }
}

#[test]
fn material_transparency_follows_opacity() {
    let glass = Material::phong("m1".to_string(), "Window", 0x66b2cc, 0.6);
    assert!(glass.transparent);
    assert_eq!(glass.color, glass.ambient);
    assert_eq!(0x808080, glass.specular);
    assert_eq!(2, glass.side);

    let wall = Material::phong("m2".to_string(), "Wall", 0xccb266, 1.0);
    assert!(!wall.transparent);
}

#[test]
fn serializes_viewer_document_shape() {
    let geometry = Geometry::new(
        "g1".to_string(),
        GeometryData::triangles(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, -1.0], vec![0, 0, 1, 2]),
    );
    let material = Material::phong("m1".to_string(), "Floor", 0x808080, 1.0);
    let child = SceneChild::mesh(
        "c1".to_string(),
        "Floor 1 0".to_string(),
        &geometry,
        &material,
        user_data(),
    );
    let doc = SceneDocument::new(
        "OpenStudio",
        vec![geometry],
        vec![material],
        SceneObject::scene("root".to_string(), vec![child]),
    );

    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(4.3, json["metadata"]["version"]);
    assert_eq!("Object", json["metadata"]["type"]);
    assert_eq!("OpenStudio", json["metadata"]["generator"]);

    let data = &json["geometries"][0]["data"];
    assert_eq!("Geometry", json["geometries"][0]["type"]);
    assert_eq!(true, data["castShadow"]);
    assert_eq!(false, data["receiveShadow"]);
    assert_eq!(true, data["doubleSided"]);
    assert_eq!(1, data["scale"]);
    assert!(data["normals"].as_array().unwrap().is_empty());

    assert_eq!("MeshPhongMaterial", json["materials"][0]["type"]);
    assert_eq!(8421504, json["materials"][0]["color"]);

    let node = &json["object"]["children"][0];
    assert_eq!("Scene", json["object"]["type"]);
    assert_eq!("Mesh", node["type"]);
    assert_eq!("g1", node["geometry"]);
    assert_eq!("m1", node["material"]);
    assert_eq!(16, node["matrix"].as_array().unwrap().len());
    assert_eq!("Space 1", node["userData"]["spaceName"]);
    assert!(node["userData"]["thermalZoneName"].is_null());
    assert_eq!(3.0, node["userData"]["vertices"][0]["z"]);

    let parsed: SceneDocument = serde_json::from_value(json).unwrap();
    assert_eq!(doc, parsed);
    assert_eq!(IDENTITY_MATRIX, parsed.object.matrix);
}
