//! Error categories for the crate.
//!
//! The numeric core (matrices and mesh generators) never fails; errors only
//! come from the outer layers: file loading, configuration checks, and the
//! transform stack's empty-chain contract.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A text file (typically a shader source) could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file was read but is not valid UTF-8.
    #[error("File {} is not valid UTF-8", path.display())]
    Encoding { path: PathBuf },

    /// A transform chain was read or popped with nothing on it.
    #[error("Matrix stack is empty")]
    EmptyStack,

    /// Tutorial parameters that would drive the math into its undefined range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub fn zero_span(axis: &str) -> Self {
        Self::InvalidConfig(format!("projection volume has zero span along {axis}"))
    }

    pub fn non_positive(name: &str, value: f32) -> Self {
        Self::InvalidConfig(format!("{name} must be positive, got {value}"))
    }

    pub fn zero_value(name: &str) -> Self {
        Self::InvalidConfig(format!("{name} must be non-zero"))
    }

    pub fn zero_resolution(name: &str) -> Self {
        Self::InvalidConfig(format!("{name} must be at least 1"))
    }

    pub fn too_large(name: &str, value: u32, max: u32) -> Self {
        Self::InvalidConfig(format!("{name} must be at most {max}, got {value}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
