//! # Transform Stack
//!
//! Per-frame accumulation of model-view and model-view-projection matrices,
//! in the spirit of the fixed-function OpenGL matrix stack.
//!
//! ## Usage
//!
//! ```rust
//! use spinmesh::gfx::transform::MatrixStack;
//!
//! let mut stack = MatrixStack::new();
//! stack
//!     .frustum(-1.0, 1.0, -1.0, 1.0, 2.0, 10.0)
//!     .translate(0.0, 0.0, -5.0)
//!     .rotate(30.0, 1.0, 0.0, 0.0);
//!
//! let mvp = stack.top_mvp().unwrap();
//! let mv = stack.top_mv().unwrap();
//! # let _ = (mvp, mv);
//! ```

pub mod matrix_stack;

pub use matrix_stack::MatrixStack;
