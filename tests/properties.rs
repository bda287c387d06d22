use rand::Rng;
use spinmesh::gfx::geometry::{
    correct_seam, generate_torus, longitude, sphere_attribute_count, sphere_positions,
    torus_vertex_count,
};
use spinmesh::gfx::math::{
    as_column_major, frustum, identity, multiply, rotate, transform, translate, Matrix4, Vector4,
};
use spinmesh::gfx::transform::MatrixStack;

fn assert_close(a: &Matrix4, b: &Matrix4, eps: f32) {
    let a = as_column_major(a);
    let b = as_column_major(b);
    for i in 0..16 {
        let scale = a[i].abs().max(b[i].abs()).max(1.0);
        assert!(
            (a[i] - b[i]).abs() <= eps * scale,
            "element {i} differs: {} vs {}",
            a[i],
            b[i]
        );
    }
}

fn random_transform(rng: &mut impl Rng) -> Matrix4 {
    let angle = rng.random_range(-180.0..180.0);
    let axis = [
        rng.random_range(-1.0f32..1.0),
        rng.random_range(-1.0f32..1.0),
        rng.random_range(0.1f32..1.0),
    ];
    let len = (axis[0] * axis[0] + axis[1] * axis[1] + axis[2] * axis[2]).sqrt();
    let r = rotate(angle, axis[0] / len, axis[1] / len, axis[2] / len);
    let t = translate(
        rng.random_range(-5.0..5.0),
        rng.random_range(-5.0..5.0),
        rng.random_range(-5.0..5.0),
    );
    multiply(t, r)
}

#[test]
fn identity_is_neutral_on_both_sides() {
    let samples = [
        translate(1.0, -2.0, 3.5),
        rotate(33.0, 0.0, 1.0, 0.0),
        rotate(-120.0, 0.6, 0.0, 0.8),
        frustum(-1.0, 1.0, -0.75, 0.75, 2.0, 10.0),
    ];
    for m in samples {
        assert_close(&multiply(identity(), m), &m, 0.0);
        assert_close(&multiply(m, identity()), &m, 0.0);
    }
}

#[test]
fn multiply_is_associative() {
    let mut rng = rand::rng();
    for _ in 0..100 {
        let a = random_transform(&mut rng);
        let b = random_transform(&mut rng);
        let c = random_transform(&mut rng);
        assert_close(
            &multiply(multiply(a, b), c),
            &multiply(a, multiply(b, c)),
            1e-5,
        );
    }
}

#[test]
fn zero_rotation_is_identity() {
    let s = std::f32::consts::FRAC_1_SQRT_2;
    for axis in [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [s, s, 0.0]] {
        assert_close(&rotate(0.0, axis[0], axis[1], axis[2]), &identity(), 1e-6);
    }
}

#[test]
fn half_turn_about_x_flips_y() {
    let v = transform(rotate(180.0, 1.0, 0.0, 0.0), Vector4::new(0.0, 1.0, 0.0, 1.0));
    assert!(v.x.abs() < 1e-5);
    assert!((v.y + 1.0).abs() < 1e-5);
    assert!(v.z.abs() < 1e-5);
    assert!((v.w - 1.0).abs() < 1e-5);
}

#[test]
fn torus_vertex_counts() {
    for n in [1, 10, 30] {
        assert_eq!(torus_vertex_count(n), n * n * 6);
        assert_eq!(generate_torus(n, 0.3, 1.0).vertex_count(), n * n * 6);
    }
}

#[test]
fn torus_vertices_stay_within_the_ring() {
    let torus = generate_torus(30, 0.3, 1.0);
    for p in &torus.positions {
        let from_axis = (p[0] * p[0] + p[1] * p[1]).sqrt();
        assert!(
            (0.7 - 1e-5..=1.3 + 1e-5).contains(&from_axis),
            "{p:?} is {from_axis} from the z axis"
        );
    }
    assert_eq!(torus.positions_flat().len(), 30 * 30 * 6 * 3);
    assert_eq!(torus.normals_flat().len(), 30 * 30 * 6 * 3);
}

#[test]
fn sphere_attribute_counts() {
    for depth in [0, 1, 4] {
        assert_eq!(sphere_attribute_count(depth), 8 * 4usize.pow(depth) * 3);
        assert_eq!(sphere_positions(depth).len(), sphere_attribute_count(depth));
    }
}

#[test]
fn sphere_vertices_are_unit_length() {
    for p in sphere_positions(4) {
        let norm = (p[0] * p[0] + p[1] * p[1] + p[2] * p[2]).sqrt();
        assert!((norm - 1.0).abs() < 1e-5, "{p:?} has norm {norm}");
    }
}

#[test]
fn projection_stays_out_of_model_view() {
    let mut stack = MatrixStack::new();
    stack.reset();
    stack.frustum(-1.0, 1.0, -1.0, 1.0, 2.0, 10.0);
    stack.translate(0.0, 0.0, -5.0);

    assert_eq!(stack.top_mv().unwrap(), translate(0.0, 0.0, -5.0));
    assert_eq!(
        stack.top_mvp().unwrap(),
        multiply(frustum(-1.0, 1.0, -1.0, 1.0, 2.0, 10.0), translate(0.0, 0.0, -5.0))
    );
}

#[test]
fn seam_vertex_follows_its_triangle() {
    assert_eq!(correct_seam(1.0, 0.1), 0.0);

    // a vertex exactly on the -z meridian computes to 1.0
    let on_seam = [0.0, 0.6, -0.8];
    assert_eq!(longitude(on_seam), 1.0);
    // a triangle mostly on the -x side has a small centroid longitude
    let centre = longitude([-0.5, 0.5, -0.7]);
    assert!(centre < 0.5);
    assert_eq!(correct_seam(longitude(on_seam), centre), 0.0);
}
