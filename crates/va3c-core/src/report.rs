use crate::geom::BBox3;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Warning {
    pub code: String,
    pub message: String,
}

impl Warning {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsReport {
    pub surfaces_total: usize,
    pub sub_surfaces_total: usize,
    pub shading_surfaces_total: usize,
    pub interior_partition_surfaces_total: usize,
    pub geometries_emitted: usize,
    pub triangles_emitted: usize,
    pub skipped_entities: usize,
    pub materials_total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportReport {
    pub generator: String,
    pub stats: StatsReport,
    /// Extents of every emitted vertex, in model (not viewer) axes.
    pub extents: Option<BBox3>,
    pub warnings: Vec<Warning>,
}
