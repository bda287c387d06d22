//! Flat-shaded sphere, headless.
//!
//! Loads a shader pair when paths are given on the command line, builds the
//! sphere and prints the per-frame matrices.

use std::time::Duration;

use spinmesh::gfx::math::format_matrix;
use spinmesh::prelude::*;

#[derive(Default)]
struct ConsoleTarget {
    vertices: Vec<Vertex3D>,
}

impl RenderTarget for ConsoleTarget {
    fn upload_mesh(&mut self, mesh: &MeshBuffer) -> anyhow::Result<()> {
        self.vertices = mesh.interleaved();
        let bytes: &[u8] = bytemuck::cast_slice(&self.vertices);
        log::info!(
            "Uploaded {} interleaved vertices ({} bytes, stride {})",
            self.vertices.len(),
            bytes.len(),
            Vertex3D::stride()
        );
        Ok(())
    }

    fn draw(&mut self, frame: &FrameMatrices, vertex_count: usize) -> anyhow::Result<()> {
        println!("{vertex_count} vertices\n{}", format_matrix(&frame.mvp));
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    if let (Some(vert), Some(frag)) = (args.next(), args.next()) {
        let vertex_source = read_text_file(&vert)?;
        let fragment_source = read_text_file(&frag)?;
        log::info!(
            "Loaded shaders: {vert} ({} bytes), {frag} ({} bytes)",
            vertex_source.len(),
            fragment_source.len()
        );
    }

    let mut driver = FrameDriver::new(TutorialConfig::sphere(4))?;
    let mut target = ConsoleTarget::default();
    driver.run(&mut target, 3, Duration::from_millis(250), 1.0)?;
    Ok(())
}
