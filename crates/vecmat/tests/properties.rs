//! Algebraic properties of the vector and matrix kernels, checked over a
//! fixed set of sample values for every shape.

use vecmat::{
    cross, dot, magnitude, normalise, Mat2x4, Mat3, Mat4, Mat4x3, MathError, Vec2, Vec3, Vec4,
    Vector,
};

/// Deterministic samples in [-8, 8), no zeros.
fn samples(n: usize, seed: u64) -> Vec<f64> {
    let mut z = seed;
    (0..n)
        .map(|_| {
            z = z.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            let v = ((z >> 33) as f64 / (1u64 << 31) as f64) * 16.0 - 8.0;
            if v == 0.0 { 0.5 } else { v }
        })
        .collect()
}

fn vec3s(n: usize, seed: u64) -> Vec<Vec3<f64>> {
    samples(n * 3, seed)
        .chunks(3)
        .map(|c| Vec3::new(c[0], c[1], c[2]))
        .collect()
}

fn vec4s(n: usize, seed: u64) -> Vec<Vec4<f64>> {
    samples(n * 4, seed)
        .chunks(4)
        .map(|c| Vec4::new(c[0], c[1], c[2], c[3]))
        .collect()
}

fn close<const N: usize>(a: Vector<f64, N>, b: Vector<f64, N>) -> bool
where
    vecmat::Dim<N>: vecmat::Layout,
{
    (a - b).magnitude() < 1e-9
}

#[test]
fn add_then_sub_restores() {
    for (a, b) in vec4s(32, 1).into_iter().zip(vec4s(32, 2)) {
        assert!(close((a + b) - b, a));
    }
}

#[test]
fn scale_then_divide_restores() {
    let scalars = samples(32, 3);
    for (a, s) in vec3s(32, 4).into_iter().zip(scalars) {
        assert!(close((a * s) / s, a));
    }
}

#[test]
fn self_difference_is_zero_and_double_negation_is_identity() {
    for a in vec4s(16, 5) {
        assert_eq!(a - a, Vec4::zero());
        assert_eq!(-(-a), a);
    }
    let i = Vec2::new(3, -7);
    assert_eq!(i - i, Vec2::zero());
    assert_eq!(-(-i), i);
}

#[test]
fn magnitude_is_non_negative() {
    for a in vec3s(32, 6) {
        assert!(magnitude(a) >= 0.0);
    }
    assert_eq!(magnitude(Vec4::<f64>::zero()), 0.0);
    assert_eq!(magnitude(Vec2::new(3.0, 4.0)), 5.0);
}

#[test]
fn normalised_vectors_have_unit_length() {
    for a in vec4s(32, 7) {
        assert!((normalise(a).magnitude() - 1.0).abs() < 1e-12);
        assert_eq!(a.try_normalise().map(|n| n.magnitude() > 0.0), Ok(true));
    }
    assert_eq!(Vec2::<f32>::zero().try_normalise(), Err(MathError::ZeroMagnitude));
}

#[test]
fn dot_is_commutative() {
    for (a, b) in vec3s(32, 8).into_iter().zip(vec3s(32, 9)) {
        assert_eq!(dot(a, b), dot(b, a));
    }
}

#[test]
fn dot_agrees_with_cosine_form() {
    for (a, b) in vec4s(16, 10).into_iter().zip(vec4s(16, 11)) {
        let via_angle = a.magnitude() * b.magnitude() * a.cos_angle(b);
        assert!((dot(a, b) - via_angle).abs() < 1e-9);
    }
}

#[test]
fn cross_is_anticommutative_and_self_cross_vanishes() {
    for (a, b) in vec3s(32, 12).into_iter().zip(vec3s(32, 13)) {
        assert_eq!(cross(a, b), -cross(b, a));
        assert_eq!(cross(a, a), Vec3::zero());
    }
    assert_eq!(
        cross(Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)),
        Vec3::new(0.0, 0.0, 1.0)
    );
}

#[test]
fn concrete_vector_scenario() {
    let a = Vec2::new(1.0_f32, 2.0);
    let b = Vec2::new(3.0_f32, 4.0);
    assert_eq!(a + b, Vec2::new(4.0, 6.0));
    assert_eq!(a - b, Vec2::new(-2.0, -2.0));
    assert_eq!(a * b, Vec2::new(3.0, 8.0));
    let q = a / b;
    assert!((q.x - 0.333_333).abs() < 1e-6);
    assert!((q.y - 0.5).abs() < 1e-6);
}

#[test]
fn default_matrices_have_unit_diagonal() {
    let m = Mat4x3::<f64>::default();
    for r in 0..4 {
        for c in 0..3 {
            assert_eq!(m[r][c], if r == c { 1.0 } else { 0.0 });
        }
    }
    let w = Mat2x4::<i32>::default();
    assert_eq!(w.get(1, 1), Some(1));
    assert_eq!(w.get(1, 3), Some(0));
    assert_eq!(
        Mat3::<i32>::default(),
        Mat3::from_rows([Vec3::new(1, 0, 0), Vec3::new(0, 1, 0), Vec3::new(0, 0, 1)])
    );
}

#[test]
fn matrix_equality_is_element_wise() {
    let m = Mat4::<f64>::identity().translate(Vec3::new(1.0, 2.0, 3.0));
    let mut n = m;
    assert!(!(m != n));
    assert_eq!(m, n);
    n[3].y += 1.0;
    assert!(m != n);
}

#[test]
fn translate_identity_scenario() {
    let m = Mat4::<f64>::identity().translate(Vec3::new(2.0, 3.0, 4.0));
    assert_eq!(m[3], Vec4::new(2.0, 3.0, 4.0, 1.0));
}

#[test]
fn rotate_about_arbitrary_axis_preserves_length_and_axis() {
    let axis = Vec3::new(1.0, 2.0, -0.5);
    let m = Mat4::<f64>::identity().rotate(73.0, axis);
    assert!(close(m.transform_vec(axis), axis));
    for v in vec3s(16, 14) {
        let r = m.transform_vec(v);
        assert!((r.magnitude() - v.magnitude()).abs() < 1e-9);
    }
}
