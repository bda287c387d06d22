//! # Procedural Geometry Generation
//!
//! This module synthesizes the meshes drawn by the tutorials. Every mesh is
//! non-indexed: each triangle stores its three vertices explicitly, so shared
//! grid points are duplicated and a draw call simply covers
//! `vertex_count()` vertices.
//!
//! ## Supported Shapes
//!
//! - **Torus**: parametric ring with finite-difference normals
//! - **Sphere**: octahedron refined towards the unit sphere, flat normals,
//!   optional geographic texture coordinates
//! - **Triangle / Quad / Cube**: fixed meshes from the first tutorials
//!
//! ## Usage
//!
//! ```rust
//! use spinmesh::gfx::geometry::{generate_sphere, generate_torus};
//!
//! let torus = generate_torus(30, 0.3, 1.0);
//! assert_eq!(torus.vertex_count(), 30 * 30 * 6);
//!
//! let sphere = generate_sphere(2);
//! let floats: &[f32] = sphere.positions_flat();
//! assert_eq!(floats.len(), 8 * 16 * 3 * 3);
//! ```

pub mod primitives;
pub mod sphere;
pub mod torus;

pub use primitives::*;
pub use sphere::*;
pub use torus::*;

use crate::gfx::scene::vertex::{TexturedVertex3D, Vertex3D};

/// Parallel attribute arrays for one non-indexed mesh.
///
/// `positions[i]`, `normals[i]` and `tex_coords[i]` all describe vertex `i`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffer {
    /// Vertex positions (x, y, z)
    pub positions: Vec<[f32; 3]>,
    /// Normal vectors (x, y, z)
    pub normals: Vec<[f32; 3]>,
    /// Texture coordinates (u, v), when the generator emits them
    pub tex_coords: Option<Vec<[f32; 2]>>,
}

impl MeshBuffer {
    pub fn new(positions: Vec<[f32; 3]>, normals: Vec<[f32; 3]>) -> Self {
        debug_assert_eq!(positions.len(), normals.len());
        Self {
            positions,
            normals,
            tex_coords: None,
        }
    }

    pub fn with_tex_coords(mut self, tex_coords: Vec<[f32; 2]>) -> Self {
        debug_assert_eq!(self.positions.len(), tex_coords.len());
        self.tex_coords = Some(tex_coords);
        self
    }

    /// Number of vertices, i.e. the count handed to a non-indexed draw call.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Positions as one contiguous float slice (3 floats per vertex).
    pub fn positions_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn normals_flat(&self) -> &[f32] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Texture coordinates as one contiguous float slice (2 floats per vertex).
    pub fn tex_coords_flat(&self) -> Option<&[f32]> {
        self.tex_coords
            .as_deref()
            .map(|uvs| bytemuck::cast_slice(uvs))
    }

    /// Interleave positions and normals into a single vertex array.
    pub fn interleaved(&self) -> Vec<Vertex3D> {
        self.positions
            .iter()
            .zip(&self.normals)
            .map(|(&position, &normal)| Vertex3D { position, normal })
            .collect()
    }

    /// Interleave positions, normals and texture coordinates.
    ///
    /// Returns `None` for meshes generated without texture coordinates.
    pub fn interleaved_textured(&self) -> Option<Vec<TexturedVertex3D>> {
        let uvs = self.tex_coords.as_ref()?;
        Some(
            self.positions
                .iter()
                .zip(&self.normals)
                .zip(uvs)
                .map(|((&position, &normal), &tex_coord)| TexturedVertex3D {
                    position,
                    normal,
                    tex_coord,
                })
                .collect(),
        )
    }
}
