//! # Fixed Primitive Meshes
//!
//! Hand-built, non-indexed meshes used by the first tutorials before any
//! procedural generation is introduced.

use super::MeshBuffer;

const FACING_VIEWER: [f32; 3] = [0.0, 0.0, 1.0];

/// A single triangle in the z = 0 plane, facing +z.
pub fn generate_triangle() -> MeshBuffer {
    let positions = vec![[-0.5, -0.5, 0.0], [1.0, -0.5, 0.0], [-0.5, 1.0, 0.0]];
    MeshBuffer::new(positions, vec![FACING_VIEWER; 3])
}

/// An axis-aligned quad in the z = 0 plane made of two triangles.
pub fn generate_quad() -> MeshBuffer {
    let positions = vec![
        [0.5, 0.5, 0.0],
        [-1.0, 0.5, 0.0],
        [0.5, -1.0, 0.0],
        [0.5, -1.0, 0.0],
        [-1.0, -1.0, 0.0],
        [-1.0, 0.5, 0.0],
    ];
    MeshBuffer::new(positions, vec![FACING_VIEWER; 6])
}

/// Generate the cube spanning `[-1, 1]` on every axis.
///
/// Faces are emitted back, front, bottom, top, left, right; each face is two
/// counter-clockwise triangles sharing one outward normal.
#[rustfmt::skip]
pub fn generate_cube() -> MeshBuffer {
    let positions = vec![
        // Back face
        [ 1.0,  1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0,  1.0, -1.0],
        [ 1.0,  1.0, -1.0], [ 1.0, -1.0, -1.0], [-1.0, -1.0, -1.0],
        // Front face
        [-1.0,  1.0,  1.0], [-1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0],
        [-1.0, -1.0,  1.0], [ 1.0, -1.0,  1.0], [ 1.0,  1.0,  1.0],
        // Bottom face
        [-1.0, -1.0,  1.0], [-1.0, -1.0, -1.0], [ 1.0, -1.0,  1.0],
        [-1.0, -1.0, -1.0], [ 1.0, -1.0, -1.0], [ 1.0, -1.0,  1.0],
        // Top face
        [-1.0,  1.0,  1.0], [ 1.0,  1.0,  1.0], [-1.0,  1.0, -1.0],
        [-1.0,  1.0, -1.0], [ 1.0,  1.0,  1.0], [ 1.0,  1.0, -1.0],
        // Left face
        [-1.0, -1.0, -1.0], [-1.0, -1.0,  1.0], [-1.0,  1.0,  1.0],
        [-1.0,  1.0, -1.0], [-1.0, -1.0, -1.0], [-1.0,  1.0,  1.0],
        // Right face
        [ 1.0,  1.0,  1.0], [ 1.0, -1.0,  1.0], [ 1.0, -1.0, -1.0],
        [ 1.0, -1.0, -1.0], [ 1.0,  1.0, -1.0], [ 1.0,  1.0,  1.0],
    ];

    let face_normals = [
        [ 0.0,  0.0, -1.0],
        [ 0.0,  0.0,  1.0],
        [ 0.0, -1.0,  0.0],
        [ 0.0,  1.0,  0.0],
        [-1.0,  0.0,  0.0],
        [ 1.0,  0.0,  0.0],
    ];
    let normals = face_normals
        .iter()
        .flat_map(|&n| std::iter::repeat(n).take(6))
        .collect();

    MeshBuffer::new(positions, normals)
}
