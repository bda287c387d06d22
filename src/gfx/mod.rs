//! # Graphics Module
//!
//! Everything geometric lives here. None of it touches a graphics context.
//!
//! ## Architecture Overview
//!
//! - **Math** ([`math`]) - Matrix builders and products over `cgmath` types
//! - **Transform** ([`transform`]) - Two-chain matrix stack for MV and MVP
//! - **Geometry** ([`geometry`]) - Non-indexed torus, sphere and fixed meshes
//! - **Scene** ([`scene`]) - Interleaved vertex formats
//!
//! ## Usage
//!
//! ```rust
//! use spinmesh::gfx::{geometry::generate_torus, transform::MatrixStack};
//!
//! let torus = generate_torus(30, 0.3, 1.0);
//!
//! let mut stack = MatrixStack::new();
//! stack
//!     .frustum(-1.0, 1.0, -1.0, 1.0, 2.0, 10.0)
//!     .translate(0.0, 0.0, -5.0);
//! let mvp = stack.top_mvp().unwrap();
//! # let _ = (torus, mvp);
//! ```

pub mod geometry;
pub mod math;
pub mod scene;
pub mod transform;

// Re-export commonly used types
pub use geometry::MeshBuffer;
pub use math::{Matrix4, Vector3, Vector4};
pub use transform::MatrixStack;
