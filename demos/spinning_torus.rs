//! Rotating torus, headless.
//!
//! Run with `RUST_LOG=debug cargo run --example spinning_torus` to see the
//! mesh statistics and the matrices composed for each frame.

use std::time::Duration;

use spinmesh::gfx::math::{as_column_major, format_matrix, format_vector, transform};
use spinmesh::prelude::*;

/// Stands in for the GL side: keeps the flat buffers and logs every frame.
struct ConsoleTarget {
    positions: Vec<f32>,
    normals: Vec<f32>,
}

impl RenderTarget for ConsoleTarget {
    fn upload_mesh(&mut self, mesh: &MeshBuffer) -> anyhow::Result<()> {
        self.positions = mesh.positions_flat().to_vec();
        self.normals = mesh.normals_flat().to_vec();
        log::info!(
            "Uploaded {} position floats and {} normal floats",
            self.positions.len(),
            self.normals.len()
        );
        Ok(())
    }

    fn draw(&mut self, frame: &FrameMatrices, vertex_count: usize) -> anyhow::Result<()> {
        let uniform = as_column_major(&frame.mvp);
        log::debug!("mvpMatrix = {uniform:?}");
        log::debug!("mvMatrix =\n{}", format_matrix(&frame.mv));

        // where the first vertex lands in clip space, and where its normal
        // points in eye space
        let first = Vector4::new(self.positions[0], self.positions[1], self.positions[2], 1.0);
        let normal = Vector4::new(self.normals[0], self.normals[1], self.normals[2], 0.0);
        println!(
            "drawing {vertex_count} vertices, first vertex at {}, facing {}",
            format_vector(&transform(frame.mvp, first)),
            format_vector(&transform(frame.mv, normal))
        );
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = TutorialConfig::new();
    let mut driver = FrameDriver::new(config)?;
    let mut target = ConsoleTarget {
        positions: Vec::new(),
        normals: Vec::new(),
    };

    let frames = driver.run(&mut target, 10, Duration::from_millis(100), 4.0 / 3.0)?;
    println!("{frames} frames drawn");
    Ok(())
}
