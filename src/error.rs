//! Crate-wide error type.

use thiserror::Error;

/// Errors raised while assembling or serializing a fixture dataset.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// Any failure surfaced by the HDF5 layer (file creation, dataset or
    /// attribute writes).
    #[error("hdf5 error: {0}")]
    Hdf5(#[from] hdf5_metno::Error),

    /// A string rejected by the HDF5 variable-length UTF-8 type.
    #[error("invalid hdf5 string {0:?}: {1}")]
    InvalidString(String, String),

    /// Frame or layer dimensions disagree with the primary matrix.
    #[error("shape mismatch: {0}")]
    ShapeMismatch(String),

    /// A layer name was added twice.
    #[error("duplicate layer name: {0}")]
    DuplicateLayer(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, FixtureError>;
