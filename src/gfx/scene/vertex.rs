//! # Vertex Data Structures
//!
//! Interleaved vertex formats for callers that prefer a single vertex
//! buffer over the parallel attribute arrays of
//! [`MeshBuffer`](crate::gfx::geometry::MeshBuffer).

use std::mem;

/// Attribute slot used for positions in every tutorial shader.
pub const POSITION_ATTRIBUTE_INDEX: u32 = 0;
/// Attribute slot used for normals.
pub const NORMAL_ATTRIBUTE_INDEX: u32 = 1;
/// Attribute slot used for texture coordinates.
pub const TEX_COORD_ATTRIBUTE_INDEX: u32 = 2;

/// Where one attribute lives inside an interleaved vertex.
///
/// The fields map one-to-one onto `glVertexAttribPointer(location,
/// components, GL_FLOAT, GL_FALSE, stride, offset)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    pub location: u32,
    pub components: u32,
    pub offset: usize,
}

/// Position followed by normal, 24 bytes. Feeds attribute slots 0 and 1
/// from one buffer; see [`Vertex3D::ATTRIBUTES`].
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex3D {
    pub position: [f32; 3],
    /// Not necessarily unit length; sphere normals are raw centroids
    pub normal: [f32; 3],
}

impl Vertex3D {
    pub const ATTRIBUTES: [VertexAttribute; 2] = [
        VertexAttribute {
            location: POSITION_ATTRIBUTE_INDEX,
            components: 3,
            offset: 0,
        },
        VertexAttribute {
            location: NORMAL_ATTRIBUTE_INDEX,
            components: 3,
            offset: mem::size_of::<[f32; 3]>(),
        },
    ];

    /// Byte distance between consecutive vertices.
    pub const fn stride() -> usize {
        mem::size_of::<Self>()
    }
}

/// [`Vertex3D`] plus a `(u, v)` pair in slot 2.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TexturedVertex3D {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coord: [f32; 2],
}

impl TexturedVertex3D {
    pub const ATTRIBUTES: [VertexAttribute; 3] = [
        VertexAttribute {
            location: POSITION_ATTRIBUTE_INDEX,
            components: 3,
            offset: 0,
        },
        VertexAttribute {
            location: NORMAL_ATTRIBUTE_INDEX,
            components: 3,
            offset: mem::size_of::<[f32; 3]>(),
        },
        VertexAttribute {
            location: TEX_COORD_ATTRIBUTE_INDEX,
            components: 2,
            offset: mem::size_of::<[f32; 6]>(),
        },
    ];

    pub const fn stride() -> usize {
        mem::size_of::<Self>()
    }
}
