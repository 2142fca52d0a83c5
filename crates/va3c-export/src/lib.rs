//! Converts a building model snapshot into a vA3C / three.js scene document.
//!
//! ```no_run
//! use va3c_export::{ExportConfig, Exporter};
//! # fn run(model: &va3c_core::model::Model) -> va3c_core::Result<()> {
//! let export = Exporter::new(ExportConfig::default()).export(model)?;
//! println!("{} geometries", export.scene.geometries.len());
//! # Ok(())
//! # }
//! ```

pub mod assemble;
pub mod ids;
pub mod kernel;
pub mod materials;
pub mod mesh;
pub mod shade;
pub mod structs;
pub mod vertex_index;

pub use assemble::{Export, ExportConfig, Exporter, UnknownSurfacePolicy};
pub use ids::{IdGenerator, SequentialIds, UuidGenerator};
pub use kernel::{EarcutKernel, GeometryKernel};
pub use materials::{ensure_default_rendering_colors, MaterialCatalog};
