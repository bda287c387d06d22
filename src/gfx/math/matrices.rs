//! Matrix builders and products.
//!
//! Every builder writes all sixteen elements explicitly instead of going
//! through cgmath's projection helpers, so the results match the historical
//! OpenGL formulas bit for bit. Degenerate volumes (`right == left`,
//! `top == bottom`, `far == near`) divide by zero and yield `inf`/`NaN`.

use std::f32::consts::PI;
use std::fmt::Write;

use cgmath::SquareMatrix;

use super::{Matrix4, Vector4};

/// Convert degrees to radians.
#[inline]
pub fn to_radians(degrees: f32) -> f32 {
    degrees * PI / 180.0
}

/// The multiplicative identity.
pub fn identity() -> Matrix4 {
    Matrix4::identity()
}

/// Orthographic projection of the cuboid `[left,right]x[bottom,top]x[near,far]`
/// onto the `[-1,1]` cube.
///
/// The depth term is `2 / (far - near)`, so the sign of the depth axis
/// follows `far - near`.
#[rustfmt::skip]
pub fn ortho(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Matrix4 {
    Matrix4::new(
        2.0 / (right - left), 0.0, 0.0, 0.0,
        0.0, 2.0 / (top - bottom), 0.0, 0.0,
        0.0, 0.0, 2.0 / (far - near), 0.0,
        -(right + left) / (right - left),
        -(top + bottom) / (top - bottom),
        -(far + near) / (far - near),
        1.0,
    )
}

/// Perspective projection, as `glFrustum` defines it.
///
/// This is the only builder whose bottom row is not `[0, 0, 0, 1]`.
#[rustfmt::skip]
pub fn frustum(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Matrix4 {
    Matrix4::new(
        2.0 * near / (right - left), 0.0, 0.0, 0.0,
        0.0, 2.0 * near / (top - bottom), 0.0, 0.0,
        (right + left) / (right - left),
        (top + bottom) / (top - bottom),
        -(far + near) / (far - near),
        -1.0,
        0.0, 0.0, -2.0 * far * near / (far - near), 0.0,
    )
}

#[rustfmt::skip]
pub fn translate(x: f32, y: f32, z: f32) -> Matrix4 {
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
        x, y, z, 1.0,
    )
}

/// Rotation of `angle` degrees around the axis `(x, y, z)` (Rodrigues).
///
/// The axis is used as given. A non-unit axis produces a rotation combined
/// with a scale, so callers pass normalized axes.
#[rustfmt::skip]
pub fn rotate(angle: f32, x: f32, y: f32, z: f32) -> Matrix4 {
    let radians = to_radians(angle);
    let c = radians.cos();
    let s = radians.sin();
    let t = 1.0 - c;

    Matrix4::new(
        x * x * t + c, y * x * t + z * s, x * z * t - y * s, 0.0,
        y * x * t - z * s, y * y * t + c, y * z * t + x * s, 0.0,
        x * z * t + y * s, y * z * t - x * s, z * z * t + c, 0.0,
        0.0, 0.0, 0.0, 1.0,
    )
}

/// `a * b`: applies `b` first, then `a`.
#[inline]
pub fn multiply(a: Matrix4, b: Matrix4) -> Matrix4 {
    a * b
}

/// `m * v`
#[inline]
pub fn transform(m: Matrix4, v: Vector4) -> Vector4 {
    m * v
}

/// Flat column-major copy, ready for a uniform upload.
pub fn as_column_major(m: &Matrix4) -> [f32; 16] {
    let flat: &[f32; 16] = m.as_ref();
    *flat
}

/// Render a matrix row by row, one line per row.
pub fn format_matrix(m: &Matrix4) -> String {
    let mut out = String::new();
    for row in 0..4 {
        let _ = writeln!(
            out,
            "{:10.4} {:10.4} {:10.4} {:10.4}",
            m[0][row], m[1][row], m[2][row], m[3][row]
        );
    }
    out
}

pub fn format_vector(v: &Vector4) -> String {
    format!("({:.4}, {:.4}, {:.4}, {:.4})", v.x, v.y, v.z, v.w)
}
