use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The surface type maps to no base material.
    #[error("surface '{name}' has unsupported surface type '{surface_type}'")]
    UnknownSurfaceType { name: String, surface_type: String },

    /// A category material the exporter relies on is not in the catalog.
    #[error("material '{0}' is missing from the catalog")]
    MissingMaterial(String),
}
