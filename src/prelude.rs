//! # Spinmesh Prelude
//!
//! Commonly used types and functions in one import.
//!
//! ```rust
//! use spinmesh::prelude::*;
//!
//! let mut stack = MatrixStack::new();
//! stack.translate(0.0, 0.0, -3.0).rotate(45.0, 0.0, 1.0, 0.0);
//! let sphere = generate_sphere(3);
//! # let _ = (stack.top_mv(), sphere);
//! ```

// Re-export the frame driver and its collaborators
pub use crate::app::{FrameDriver, FrameMatrices, RenderTarget, TransformUniform};
pub use crate::config::{MeshKind, ProjectionVolume, TutorialConfig};
pub use crate::error::{Error, Result};
pub use crate::files::read_text_file;

// Re-export math, transform and geometry
pub use crate::gfx::geometry::{
    generate_cube, generate_quad, generate_sphere, generate_textured_sphere,
    generate_textured_torus, generate_torus, generate_triangle, sphere_attribute_count,
    torus_vertex_count, MeshBuffer,
};
pub use crate::gfx::math::{
    frustum, identity, multiply, ortho, rotate, transform, translate, Matrix4, Vector3, Vector4,
};
pub use crate::gfx::scene::{TexturedVertex3D, Vertex3D};
pub use crate::gfx::transform::MatrixStack;
