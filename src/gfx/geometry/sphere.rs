//! Sphere generation by octahedron refinement.
//!
//! Each of the eight octahedron faces is split recursively into four
//! triangles. New edge midpoints are pushed back onto the unit sphere at
//! every level, so after `depth` levels all emitted corners have length 1.
//! Winding follows the face list below (counter-clockwise seen from outside).
//!
//! cf <http://paulbourke.net/miscellaneous/sphere_cylinder/>

use std::f32::consts::PI;

use cgmath::InnerSpace;

use super::MeshBuffer;
use crate::gfx::math::Vector3;

const NORTH: [f32; 3] = [0.0, 1.0, 0.0];
const SOUTH: [f32; 3] = [0.0, -1.0, 0.0];
const POS_X: [f32; 3] = [1.0, 0.0, 0.0];
const NEG_X: [f32; 3] = [-1.0, 0.0, 0.0];
const POS_Z: [f32; 3] = [0.0, 0.0, 1.0];
const NEG_Z: [f32; 3] = [0.0, 0.0, -1.0];

/// The eight octahedron faces, four around each pole.
pub const OCTAHEDRON_FACES: [[[f32; 3]; 3]; 8] = [
    [NORTH, POS_Z, POS_X],
    [NORTH, POS_X, NEG_Z],
    [NORTH, NEG_Z, NEG_X],
    [NORTH, NEG_X, POS_Z],
    [SOUTH, POS_X, POS_Z],
    [SOUTH, POS_Z, NEG_X],
    [SOUTH, NEG_X, NEG_Z],
    [SOUTH, NEG_Z, POS_X],
];

/// Deepest refinement a tutorial may ask for: 25 165 824 vertices, about
/// 600 MB of positions and normals. The vertex count overflows `usize` on
/// 32-bit targets not far beyond this.
pub const MAX_SPHERE_DEPTH: u32 = 10;

/// Number of vertices emitted for refinement depth `depth`: `8 * 4^depth * 3`.
pub fn sphere_attribute_count(depth: u32) -> usize {
    8 * 4usize.pow(depth) * 3
}

/// Unit-sphere triangle corners after `depth` levels of refinement.
pub fn sphere_positions(depth: u32) -> Vec<[f32; 3]> {
    let mut out = Vec::with_capacity(sphere_attribute_count(depth));
    for face in OCTAHEDRON_FACES {
        refine(depth, face.map(Vector3::from), &mut out);
    }
    out
}

fn refine(levels_left: u32, [p1, p2, p3]: [Vector3; 3], out: &mut Vec<[f32; 3]>) {
    if levels_left == 0 {
        let corners: [[f32; 3]; 3] = [p1.into(), p2.into(), p3.into()];
        out.extend(corners);
        return;
    }

    let m1 = midpoint(p2, p3).normalize();
    let m2 = midpoint(p3, p1).normalize();
    let m3 = midpoint(p1, p2).normalize();

    refine(levels_left - 1, [p1, m3, m2], out);
    refine(levels_left - 1, [m3, p2, m1], out);
    refine(levels_left - 1, [m1, m2, m3], out);
    refine(levels_left - 1, [m2, m1, p3], out);
}

fn midpoint(a: Vector3, b: Vector3) -> Vector3 {
    (a + b) / 2.0
}

fn centroid(triangle: &[[f32; 3]]) -> [f32; 3] {
    let mut sum = [0.0f32; 3];
    for p in triangle {
        for axis in 0..3 {
            sum[axis] += p[axis];
        }
    }
    sum.map(|s| s / 3.0)
}

/// Flat-shading normals: each triangle's three vertices share the
/// triangle centroid as their normal.
///
/// The centroid is not renormalized; it lies slightly inside the sphere and
/// the shader normalizes after transforming.
pub fn sphere_flat_normals(positions: &[[f32; 3]]) -> Vec<[f32; 3]> {
    positions
        .chunks_exact(3)
        .flat_map(|triangle| {
            let n = centroid(triangle);
            [n, n, n]
        })
        .collect()
}

/// Longitude mapped to `[0, 1]`, measured from the -z meridian through +x.
pub fn longitude(p: [f32; 3]) -> f32 {
    0.5 + p[0].atan2(p[2]) / (2.0 * PI)
}

/// Latitude mapped to `[0, 1]`, 0 at the north pole.
pub fn latitude(p: [f32; 3]) -> f32 {
    0.5 - p[1].clamp(-1.0, 1.0).asin() / PI
}

/// Move a longitude sitting exactly on the seam to the side its triangle
/// is on.
///
/// `atan2` puts the -z meridian at either 0.0 or 1.0 depending on the sign
/// of a zero x. A vertex there must take the value matching the rest of its
/// triangle, or the texture is stretched across the whole image.
pub fn correct_seam(t1: f32, centroid_t1: f32) -> f32 {
    if t1 == 1.0 && centroid_t1 < 0.5 {
        0.0
    } else if t1 == 0.0 && centroid_t1 > 0.5 {
        1.0
    } else {
        t1
    }
}

/// Geographic texture coordinates `(longitude, latitude)` per vertex, with
/// the seam fixed up per triangle.
pub fn sphere_tex_coords(positions: &[[f32; 3]]) -> Vec<[f32; 2]> {
    positions
        .chunks_exact(3)
        .flat_map(|triangle| {
            let centre = longitude(centroid(triangle));
            let mut uvs = [[0.0f32; 2]; 3];
            for (uv, &p) in uvs.iter_mut().zip(triangle) {
                *uv = [correct_seam(longitude(p), centre), latitude(p)];
            }
            uvs
        })
        .collect()
}

/// Generate a flat-shaded sphere with `depth` levels of refinement.
pub fn generate_sphere(depth: u32) -> MeshBuffer {
    debug_assert!(
        depth <= MAX_SPHERE_DEPTH,
        "sphere depth {depth} exceeds {MAX_SPHERE_DEPTH}"
    );
    let positions = sphere_positions(depth);
    let normals = sphere_flat_normals(&positions);
    let mesh = MeshBuffer::new(positions, normals);
    log::debug!(
        "Generated sphere depth={depth}: {} vertices",
        mesh.vertex_count()
    );
    mesh
}

/// Flat-shaded sphere with geographic texture coordinates.
pub fn generate_textured_sphere(depth: u32) -> MeshBuffer {
    let mesh = generate_sphere(depth);
    let uvs = sphere_tex_coords(&mesh.positions);
    mesh.with_tex_coords(uvs)
}
