//! # Matrix and Vector Algebra
//!
//! Thin aliases over `cgmath` types plus the classic OpenGL 1.x matrix
//! builders (`glOrtho`, `glFrustum`, `glTranslate`, `glRotate`).
//!
//! cgmath stores a `Matrix4` as four column vectors, so the flat layout
//! produced by [`as_column_major`] is `index = column * 4 + row`, which is
//! exactly what `glUniformMatrix4fv(.., transpose = false, ..)` expects.
//!
//! ## Usage
//!
//! ```rust
//! use spinmesh::gfx::math::{frustum, multiply, rotate, translate};
//!
//! let projection = frustum(-1.0, 1.0, -1.0, 1.0, 2.0, 10.0);
//! let model_view = multiply(translate(0.0, 0.0, -5.0), rotate(45.0, 0.0, 1.0, 0.0));
//! let mvp = multiply(projection, model_view);
//! # let _ = mvp;
//! ```

pub mod matrices;

pub use matrices::*;

pub type Vector3 = cgmath::Vector3<f32>;
pub type Vector4 = cgmath::Vector4<f32>;
pub type Matrix4 = cgmath::Matrix4<f32>;
