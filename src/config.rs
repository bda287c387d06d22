//! Tutorial configuration.
//!
//! Defaults reproduce the rotating torus tutorial: a `[-1,1]x[-1,1]` frustum
//! between planes 2 and 10, the object pushed 5 units away, spinning one
//! degree every 30 ms around x and every 10 ms around y.

use crate::error::{Error, Result};
use crate::gfx::geometry::{self, MeshBuffer};

/// The six planes of a projection volume.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionVolume {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionVolume {
    fn default() -> Self {
        Self {
            left: -1.0,
            right: 1.0,
            bottom: -1.0,
            top: 1.0,
            near: 2.0,
            far: 10.0,
        }
    }
}

impl ProjectionVolume {
    fn validate(&self) -> Result<()> {
        if self.right == self.left {
            return Err(Error::zero_span("x"));
        }
        if self.top == self.bottom {
            return Err(Error::zero_span("y"));
        }
        if self.far == self.near {
            return Err(Error::zero_span("z"));
        }
        Ok(())
    }
}

/// Which mesh a tutorial draws.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MeshKind {
    Triangle,
    Cube,
    Torus {
        resolution: usize,
        tube_radius: f32,
        ring_radius: f32,
    },
    /// Flat-shaded octahedron sphere
    Sphere { depth: u32 },
    /// Flat-shaded sphere with texture coordinates
    TexturedSphere { depth: u32 },
}

impl Default for MeshKind {
    fn default() -> Self {
        Self::Torus {
            resolution: 30,
            tube_radius: 0.3,
            ring_radius: 1.0,
        }
    }
}

impl MeshKind {
    pub fn build(&self) -> MeshBuffer {
        match *self {
            Self::Triangle => geometry::generate_triangle(),
            Self::Cube => geometry::generate_cube(),
            Self::Torus {
                resolution,
                tube_radius,
                ring_radius,
            } => geometry::generate_torus(resolution, tube_radius, ring_radius),
            Self::Sphere { depth } => geometry::generate_sphere(depth),
            Self::TexturedSphere { depth } => geometry::generate_textured_sphere(depth),
        }
    }

    /// Vertex count of the built mesh, computed without building it.
    pub fn vertex_count(&self) -> usize {
        match *self {
            Self::Triangle => 3,
            Self::Cube => 36,
            Self::Torus { resolution, .. } => geometry::torus_vertex_count(resolution),
            Self::Sphere { depth } | Self::TexturedSphere { depth } => {
                geometry::sphere_attribute_count(depth)
            }
        }
    }

    fn validate(&self) -> Result<()> {
        match *self {
            Self::Torus {
                resolution,
                tube_radius,
                ring_radius,
            } => {
                if resolution == 0 {
                    return Err(Error::zero_resolution("torus resolution"));
                }
                if tube_radius <= 0.0 {
                    return Err(Error::non_positive("tube radius", tube_radius));
                }
                if ring_radius <= 0.0 {
                    return Err(Error::non_positive("ring radius", ring_radius));
                }
                Ok(())
            }
            Self::Sphere { depth } | Self::TexturedSphere { depth } => {
                if depth == 0 {
                    return Err(Error::zero_resolution("sphere depth"));
                }
                if depth > geometry::MAX_SPHERE_DEPTH {
                    return Err(Error::too_large(
                        "sphere depth",
                        depth,
                        geometry::MAX_SPHERE_DEPTH,
                    ));
                }
                Ok(())
            }
            Self::Triangle | Self::Cube => Ok(()),
        }
    }
}

/// Everything a tutorial needs besides the window and the GPU.
#[derive(Debug, Clone, PartialEq)]
pub struct TutorialConfig {
    pub projection: ProjectionVolume,
    /// Distance the object is pushed along -z
    pub distance: f32,
    /// Milliseconds per degree of rotation around x
    pub spin_x: f32,
    /// Milliseconds per degree of rotation around y
    pub spin_y: f32,
    pub mesh: MeshKind,
}

impl Default for TutorialConfig {
    fn default() -> Self {
        Self {
            projection: ProjectionVolume::default(),
            distance: 5.0,
            spin_x: 30.0,
            spin_y: 10.0,
            mesh: MeshKind::default(),
        }
    }
}

impl TutorialConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// The flat-shaded sphere tutorial: closer camera, slower spin.
    pub fn sphere(depth: u32) -> Self {
        Self {
            distance: 3.0,
            spin_x: 50.0,
            spin_y: 100.0,
            mesh: MeshKind::Sphere { depth },
            ..Self::default()
        }
    }

    pub fn with_projection(mut self, projection: ProjectionVolume) -> Self {
        self.projection = projection;
        self
    }

    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_spin(mut self, spin_x: f32, spin_y: f32) -> Self {
        self.spin_x = spin_x;
        self.spin_y = spin_y;
        self
    }

    pub fn with_mesh(mut self, mesh: MeshKind) -> Self {
        self.mesh = mesh;
        self
    }

    /// Reject parameters the math and generators leave undefined.
    pub fn validate(&self) -> Result<()> {
        self.projection.validate()?;
        self.mesh.validate()?;
        if self.spin_x == 0.0 {
            return Err(Error::zero_value("spin_x"));
        }
        if self.spin_y == 0.0 {
            return Err(Error::zero_value("spin_y"));
        }
        Ok(())
    }
}
