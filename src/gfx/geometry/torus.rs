//! Torus generation.
//!
//! The surface is sampled on an `n x n` grid over `u, v in [0, 2pi)` and each
//! grid quad `(ui, vi)` is emitted as the triangles
//! `(ui,vi) (ui+1,vi) (ui+1,vi+1)` and `(ui,vi) (ui+1,vi+1) (ui,vi+1)`.
//!
//! Normals come from a central finite difference: the cross product of the
//! chords to the neighbouring grid points in `v` and in `u`, normalized.
//! They are close to, but not exactly, the analytic torus normal.

use std::f32::consts::PI;

use cgmath::InnerSpace;

use super::MeshBuffer;
use crate::gfx::math::Vector3;

/// Corner offsets `(dui, dvi)` of the two triangles emitted per grid quad.
const QUAD_CORNERS: [(usize, usize); 6] = [(0, 0), (1, 0), (1, 1), (0, 0), (1, 1), (0, 1)];

/// Number of vertices emitted for a torus of resolution `n`.
pub fn torus_vertex_count(n: usize) -> usize {
    n * n * 6
}

/// Point on the torus with tube radius `r` and ring radius `big_r`.
pub fn torus_point(u: f32, v: f32, r: f32, big_r: f32) -> Vector3 {
    Vector3::new(
        (big_r + r * v.cos()) * u.cos(),
        (big_r + r * v.cos()) * u.sin(),
        r * v.sin(),
    )
}

/// Finite-difference normal at grid point `(ui, vi)`.
///
/// Grid indices are signed because the stencil reaches one step before
/// the first row and column.
pub fn torus_normal(ui: i64, vi: i64, n: usize, r: f32, big_r: f32) -> Vector3 {
    let a = angle_step(n);
    let point = |i: i64, j: i64| torus_point(i as f32 * a, j as f32 * a, r, big_r);

    let along_v = point(ui, vi + 1) - point(ui, vi - 1);
    let along_u = point(ui - 1, vi) - point(ui + 1, vi);
    along_v.cross(along_u).normalize()
}

pub fn torus_positions(n: usize, r: f32, big_r: f32) -> Vec<[f32; 3]> {
    let a = angle_step(n);
    quad_vertices(n)
        .map(|(ui, vi)| torus_point(ui as f32 * a, vi as f32 * a, r, big_r).into())
        .collect()
}

pub fn torus_normals(n: usize, r: f32, big_r: f32) -> Vec<[f32; 3]> {
    quad_vertices(n)
        .map(|(ui, vi)| torus_normal(ui as i64, vi as i64, n, r, big_r).into())
        .collect()
}

/// Grid texture coordinates `(ui / n, vi / n)` for every emitted vertex.
pub fn torus_tex_coords(n: usize) -> Vec<[f32; 2]> {
    quad_vertices(n)
        .map(|(ui, vi)| [ui as f32 / n as f32, vi as f32 / n as f32])
        .collect()
}

/// Generate a torus with positions and finite-difference normals.
///
/// # Arguments
/// * `n` - Grid resolution in both parametric directions
/// * `r` - Tube radius
/// * `big_r` - Ring radius, distance from the centre to the middle of the tube
pub fn generate_torus(n: usize, r: f32, big_r: f32) -> MeshBuffer {
    debug_assert!(n > 0, "torus resolution must be at least 1");
    let mesh = MeshBuffer::new(torus_positions(n, r, big_r), torus_normals(n, r, big_r));
    log::debug!(
        "Generated torus n={n} r={r} R={big_r}: {} vertices",
        mesh.vertex_count()
    );
    mesh
}

pub fn generate_textured_torus(n: usize, r: f32, big_r: f32) -> MeshBuffer {
    generate_torus(n, r, big_r).with_tex_coords(torus_tex_coords(n))
}

fn angle_step(n: usize) -> f32 {
    2.0 * PI / n as f32
}

/// Grid coordinates of every emitted vertex, in emission order.
fn quad_vertices(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..n).flat_map(move |ui| {
        (0..n).flat_map(move |vi| {
            QUAD_CORNERS
                .iter()
                .map(move |&(du, dv)| (ui + du, vi + dv))
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn length(v: [f32; 3]) -> f32 {
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    #[test]
    fn test_vertex_count() {
        for n in [1, 10, 30] {
            assert_eq!(torus_vertex_count(n), n * n * 6);
            let torus = generate_torus(n, 0.3, 1.0);
            assert_eq!(torus.vertex_count(), torus_vertex_count(n));
            assert_eq!(torus.normals.len(), torus_vertex_count(n));
        }
    }

    #[test]
    fn test_first_quad_layout() {
        let positions = torus_positions(4, 0.5, 2.0);
        // (0,0) is the outermost point on the x axis
        assert!((positions[0][0] - 2.5).abs() < 1e-6);
        assert_eq!(positions[0], positions[3]);
        assert_eq!(positions[2], positions[4]);
        // (ui+1, vi) is a quarter turn around z
        assert!(positions[1][0].abs() < 1e-6);
        assert!((positions[1][1] - 2.5).abs() < 1e-6);
    }

    #[test]
    fn test_normals_are_unit_and_point_outwards() {
        let (r, big_r) = (0.3, 1.0);
        let torus = generate_torus(20, r, big_r);
        for (p, n) in torus.positions.iter().zip(&torus.normals) {
            assert!((length(*n) - 1.0).abs() < 1e-4);

            // centre of the tube cross-section under this vertex
            let ring = (p[0] * p[0] + p[1] * p[1]).sqrt();
            let centre = [p[0] * big_r / ring, p[1] * big_r / ring, 0.0];
            let out = [p[0] - centre[0], p[1] - centre[1], p[2] - centre[2]];
            let dot = out[0] * n[0] + out[1] * n[1] + out[2] * n[2];
            assert!(dot > 0.0, "normal {n:?} points inwards at {p:?}");
        }
    }

    #[test]
    fn test_normal_matches_analytic_on_outer_equator() {
        let n = torus_normal(0, 0, 40, 0.3, 1.0);
        assert!((n.x - 1.0).abs() < 1e-3);
        assert!(n.y.abs() < 1e-3);
        assert!(n.z.abs() < 1e-3);
    }

    #[test]
    fn test_tex_coords() {
        let uvs = torus_tex_coords(2);
        assert_eq!(uvs.len(), torus_vertex_count(2));
        assert_eq!(uvs[0], [0.0, 0.0]);
        assert_eq!(uvs[2], [0.5, 0.5]);
        // the last quad wraps to 1.0 rather than back to 0.0
        assert_eq!(uvs[uvs.len() - 4], [1.0, 1.0]);

        let textured = generate_textured_torus(2, 0.3, 1.0);
        assert_eq!(textured.tex_coords.as_ref().map(Vec::len), Some(24));
    }
}
