// src/lib.rs
//! Spinmesh
//!
//! The numeric core of a series of classic OpenGL tutorials: a 4x4 matrix
//! library, a model-view / model-view-projection matrix stack, and
//! procedural torus and sphere meshes ready for upload as flat float arrays.
//!
//! Windowing, shader compilation and GPU calls stay with the caller; see
//! [`app::RenderTarget`] for the seam.

pub mod app;
pub mod config;
pub mod error;
pub mod files;
pub mod gfx;
pub mod prelude;

// Re-export main types for convenience
pub use app::{FrameDriver, FrameMatrices, RenderTarget};
pub use config::TutorialConfig;
pub use error::{Error, Result};
