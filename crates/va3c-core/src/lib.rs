//! Value types shared by the vA3C exporter: geometry primitives, the building
//! model snapshot, and the scene document written for the viewer.

pub mod error;
pub mod geom;
pub mod model;
pub mod report;
pub mod scene;

pub use error::{Error, Result};
