//! vA3C / three.js JSON object scene, format version 4.3.
//!
//! Everything here is plain data: records are constructed complete by the
//! exporter and serialized as-is.

use crate::geom::Point3;
use crate::model::RenderingColor;
use serde::{Deserialize, Serialize};

pub const FORMAT_VERSION: f64 = 4.3;
pub const DOUBLE_SIDE: u8 = 2;
pub const IDENTITY_MATRIX: [f64; 16] = [
    1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
];

/// Face type marker for a plain triangle (no normals, uvs or colors).
pub const FACE_TRIANGLE: u32 = 0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub version: f64,
    #[serde(rename = "type")]
    pub kind: String,
    pub generator: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeometryData {
    pub vertices: Vec<f64>,
    pub normals: Vec<f64>,
    pub uvs: Vec<Vec<f64>>,
    pub faces: Vec<u32>,
    pub scale: u32,
    pub visible: bool,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
    pub double_sided: bool,
}

impl GeometryData {
    /// Triangle-list geometry with the exporter's fixed render flags.
    pub fn triangles(vertices: Vec<f64>, faces: Vec<u32>) -> Self {
        Self {
            vertices,
            normals: Vec::new(),
            uvs: Vec::new(),
            faces,
            scale: 1,
            visible: true,
            cast_shadow: true,
            receive_shadow: false,
            double_sided: true,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn triangle_count(&self) -> usize {
        self.faces.len() / 4
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub uuid: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub data: GeometryData,
}

impl Geometry {
    pub fn new(uuid: String, data: GeometryData) -> Self {
        Self {
            uuid,
            kind: "Geometry".to_string(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub uuid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub color: u32,
    pub ambient: u32,
    pub emissive: u32,
    pub specular: u32,
    pub shininess: u32,
    pub opacity: f64,
    pub transparent: bool,
    pub wireframe: bool,
    pub side: u8,
}

impl Material {
    /// Double sided Phong material; transparency follows from `opacity < 1`.
    pub fn phong(uuid: String, name: impl Into<String>, color: u32, opacity: f64) -> Self {
        Self {
            uuid,
            name: name.into(),
            kind: "MeshPhongMaterial".to_string(),
            color,
            ambient: color,
            emissive: 0x000000,
            specular: 0x808080,
            shininess: 50,
            opacity,
            transparent: opacity < 1.0,
            wireframe: false,
            side: DOUBLE_SIDE,
        }
    }

    pub fn from_rendering_color(
        uuid: String,
        name: impl Into<String>,
        color: &RenderingColor,
    ) -> Self {
        Self::phong(uuid, name, color.hex(), color.opacity())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<&Point3> for Vertex {
    fn from(p: &Point3) -> Self {
        Self {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

/// Per-surface metadata shown by the viewer's inspector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub handle: String,
    pub name: String,
    pub surface_type: String,
    pub construction_name: Option<String>,
    pub space_name: Option<String>,
    pub thermal_zone_name: Option<String>,
    pub space_type_name: Option<String>,
    pub building_story_name: Option<String>,
    pub outside_boundary_condition: Option<String>,
    pub outside_boundary_condition_object_name: Option<String>,
    pub sun_exposure: String,
    pub wind_exposure: String,
    pub vertices: Vec<Vertex>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneChild {
    pub uuid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub geometry: String,
    pub material: String,
    pub matrix: [f64; 16],
    pub user_data: UserData,
}

impl SceneChild {
    pub fn mesh(
        uuid: String,
        name: String,
        geometry: &Geometry,
        material: &Material,
        user_data: UserData,
    ) -> Self {
        Self {
            uuid,
            name,
            kind: "Mesh".to_string(),
            geometry: geometry.uuid.clone(),
            material: material.uuid.clone(),
            matrix: IDENTITY_MATRIX,
            user_data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneObject {
    pub uuid: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub matrix: [f64; 16],
    pub children: Vec<SceneChild>,
}

impl SceneObject {
    pub fn scene(uuid: String, children: Vec<SceneChild>) -> Self {
        Self {
            uuid,
            kind: "Scene".to_string(),
            matrix: IDENTITY_MATRIX,
            children,
        }
    }
}

/// Top-level document loaded by the viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDocument {
    pub metadata: Metadata,
    pub geometries: Vec<Geometry>,
    pub materials: Vec<Material>,
    pub object: SceneObject,
}

impl SceneDocument {
    pub fn new(
        generator: impl Into<String>,
        geometries: Vec<Geometry>,
        materials: Vec<Material>,
        object: SceneObject,
    ) -> Self {
        Self {
            metadata: Metadata {
                version: FORMAT_VERSION,
                kind: "Object".to_string(),
                generator: generator.into(),
            },
            geometries,
            materials,
            object,
        }
    }

    pub fn geometry(&self, uuid: &str) -> Option<&Geometry> {
        self.geometries.iter().find(|g| g.uuid == uuid)
    }

    pub fn material(&self, uuid: &str) -> Option<&Material> {
        self.materials.iter().find(|m| m.uuid == uuid)
    }
}
