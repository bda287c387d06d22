//! Per-frame driver.
//!
//! The driver owns the tutorial configuration and a [`MatrixStack`]. A
//! windowing layer calls [`FrameDriver::compose`] once per frame with the
//! time since start and the current aspect ratio, then uploads the two
//! matrices and issues a non-indexed draw. [`FrameDriver::run`] plays the
//! same loop against any [`RenderTarget`] without a real window.

use std::time::Duration;

use crate::config::TutorialConfig;
use crate::error::Result;
use crate::gfx::geometry::MeshBuffer;
use crate::gfx::math::{self, Matrix4};
use crate::gfx::transform::MatrixStack;

/// The two matrices a frame hands to the shader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    /// Model-view-projection, model space to clip space
    pub mvp: Matrix4,
    /// Model-view, model space to eye space
    pub mv: Matrix4,
}

impl FrameMatrices {
    pub fn uniform(&self) -> TransformUniform {
        TransformUniform {
            mvp: self.mvp.into(),
            mv: self.mv.into(),
        }
    }
}

/// GPU-ready copy of [`FrameMatrices`], both matrices column-major.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable, Debug)]
pub struct TransformUniform {
    pub mvp: [[f32; 4]; 4],
    pub mv: [[f32; 4]; 4],
}

impl Default for TransformUniform {
    fn default() -> Self {
        let identity: [[f32; 4]; 4] = math::identity().into();
        Self {
            mvp: identity,
            mv: identity,
        }
    }
}

/// The graphics side of a tutorial: whatever owns the context, buffers and
/// shader program.
pub trait RenderTarget {
    /// Receive the mesh once, before the first frame.
    ///
    /// Implementations usually copy the attribute arrays into retained GPU
    /// buffers and keep only their handles.
    fn upload_mesh(&mut self, mesh: &MeshBuffer) -> anyhow::Result<()>;

    /// Set the matrix uniforms and draw `vertex_count` vertices.
    fn draw(&mut self, frame: &FrameMatrices, vertex_count: usize) -> anyhow::Result<()>;
}

pub struct FrameDriver {
    config: TutorialConfig,
    stack: MatrixStack,
}

impl FrameDriver {
    /// Create a driver, rejecting configurations the math leaves undefined.
    pub fn new(config: TutorialConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            stack: MatrixStack::new(),
        })
    }

    pub fn config(&self) -> &TutorialConfig {
        &self.config
    }

    /// Compose the matrices for a frame drawn `elapsed` after start.
    ///
    /// The projection volume is squeezed vertically by `aspect_ratio`
    /// (width / height) so the object keeps its proportions. The object is
    /// rotated around y first, then around x, then pushed away from the eye.
    pub fn compose(&mut self, elapsed: Duration, aspect_ratio: f32) -> Result<FrameMatrices> {
        let elapsed_ms = elapsed.as_millis() as f32;
        let p = self.config.projection;

        self.stack
            .reset()
            .frustum(
                p.left,
                p.right,
                p.bottom / aspect_ratio,
                p.top / aspect_ratio,
                p.near,
                p.far,
            )
            .translate(0.0, 0.0, -self.config.distance)
            .rotate(elapsed_ms / self.config.spin_x, 1.0, 0.0, 0.0)
            .rotate(elapsed_ms / self.config.spin_y, 0.0, 1.0, 0.0);

        Ok(FrameMatrices {
            mvp: self.stack.top_mvp()?,
            mv: self.stack.top_mv()?,
        })
    }

    /// Build and upload the configured mesh, then draw `frames` frames spaced
    /// `frame_interval` apart. Returns the number of frames drawn.
    pub fn run<T: RenderTarget>(
        &mut self,
        target: &mut T,
        frames: usize,
        frame_interval: Duration,
        aspect_ratio: f32,
    ) -> anyhow::Result<usize> {
        let mesh = self.config.mesh.build();
        let vertex_count = mesh.vertex_count();
        target.upload_mesh(&mesh)?;
        // the host copy is no longer needed once the target has it
        drop(mesh);
        log::info!("Uploaded {vertex_count} vertices, drawing {frames} frames");

        let mut elapsed = Duration::ZERO;
        for frame in 0..frames {
            let matrices = self.compose(elapsed, aspect_ratio)?;
            target.draw(&matrices, vertex_count)?;
            log::trace!("frame {frame} at {elapsed:?}");
            elapsed += frame_interval;
        }

        Ok(frames)
    }
}
