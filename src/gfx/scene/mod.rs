pub mod vertex;

pub use vertex::{TexturedVertex3D, Vertex3D, VertexAttribute};
