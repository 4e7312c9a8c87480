//! Projection, view and model builders for 4x4 matrices.
//!
//! Row-vector convention: a point is a row `p`, transformed as `p * M`
//! (see [`Matrix::mul_vec`](crate::Matrix::mul_vec)), and the translation lives in row 3. Angles are
//! in degrees. None of these functions mutate their inputs.

use crate::{Float, Mat4, MathError, Vec3, Vec4};

impl<S: Float> Mat4<S> {
    /// Right-handed OpenGL-style perspective projection (clip z in [-1, 1]).
    pub fn perspective(fov_degrees: S, aspect: S, z_near: S, z_far: S) -> Self {
        let tan_half_fov = (fov_degrees.to_radians() / S::TWO).tan();
        let depth = z_far - z_near;

        let mut out = Self::zero();
        out[0][0] = S::ONE / (aspect * tan_half_fov);
        out[1][1] = S::ONE / tan_half_fov;
        out[2][2] = -(z_far + z_near) / depth;
        out[2][3] = -S::ONE;
        out[3][2] = -(S::TWO * z_far * z_near) / depth;
        out
    }

    /// Orthographic projection of the given box onto the clip cube.
    pub fn ortho(left: S, right: S, bottom: S, top: S, z_near: S, z_far: S) -> Self {
        let mut out = Self::identity();
        out[0][0] = S::TWO / (right - left);
        out[1][1] = S::TWO / (top - bottom);
        out[2][2] = -S::TWO / (z_far - z_near);
        out[3][0] = -(right + left) / (right - left);
        out[3][1] = -(top + bottom) / (top - bottom);
        out[3][2] = -(z_far + z_near) / (z_far - z_near);
        out
    }

    /// Right-handed view matrix looking from `eye` towards `centre`.
    ///
    /// `eye == centre`, or `up` parallel to the view direction, produce NaN
    /// entries; [`try_look_at`](Self::try_look_at) reports them instead.
    pub fn look_at(eye: Vec3<S>, centre: Vec3<S>, up: Vec3<S>) -> Self {
        let f = (centre - eye).normalise();
        let s = f.cross(up).normalise();
        Self::view_from_basis(eye, f, s)
    }

    pub fn try_look_at(eye: Vec3<S>, centre: Vec3<S>, up: Vec3<S>) -> Result<Self, MathError> {
        let f = (centre - eye).try_normalise()?;
        let s = f.cross(up).try_normalise()?;
        Ok(Self::view_from_basis(eye, f, s))
    }

    fn view_from_basis(eye: Vec3<S>, f: Vec3<S>, s: Vec3<S>) -> Self {
        let u = s.cross(f);

        let mut out = Self::identity();
        for i in 0..3 {
            out[i][0] = s[i];
            out[i][1] = u[i];
            out[i][2] = -f[i];
        }
        out[3][0] = -s.dot(eye);
        out[3][1] = -u.dot(eye);
        out[3][2] = f.dot(eye);
        out
    }

    /// Applies a translation by `v` before `self`: the new translation row is
    /// `self[0] * v.x + self[1] * v.y + self[2] * v.z + self[3]`.
    pub fn translate(self, v: Vec3<S>) -> Self {
        let mut out = self;
        out[3] = self[0] * v.x + self[1] * v.y + self[2] * v.z + self[3];
        out
    }

    /// Applies a rotation of `angle_degrees` about `axis` (Rodrigues'
    /// formula) to the first three rows. Row 3 is kept as is.
    ///
    /// A zero axis produces NaN entries; see [`try_rotate`](Self::try_rotate).
    pub fn rotate(self, angle_degrees: S, axis: Vec3<S>) -> Self {
        self.rotate_unit(angle_degrees, axis.normalise())
    }

    pub fn try_rotate(self, angle_degrees: S, axis: Vec3<S>) -> Result<Self, MathError> {
        Ok(self.rotate_unit(angle_degrees, axis.try_normalise()?))
    }

    fn rotate_unit(self, angle_degrees: S, axis: Vec3<S>) -> Self {
        let (s, c) = angle_degrees.to_radians().sin_cos();
        let temp = axis * (S::ONE - c);

        let rot = [
            Vec3::new(
                c + temp.x * axis.x,
                temp.x * axis.y + s * axis.z,
                temp.x * axis.z - s * axis.y,
            ),
            Vec3::new(
                temp.y * axis.x - s * axis.z,
                c + temp.y * axis.y,
                temp.y * axis.z + s * axis.x,
            ),
            Vec3::new(
                temp.z * axis.x + s * axis.y,
                temp.z * axis.y - s * axis.x,
                c + temp.z * axis.z,
            ),
        ];

        let mut out = self;
        for (i, r) in rot.iter().enumerate() {
            out[i] = self[0] * r.x + self[1] * r.y + self[2] * r.z;
        }
        out
    }

    /// Scales the first three rows by the components of `v`.
    pub fn scale(self, v: Vec3<S>) -> Self {
        let mut out = self;
        out[0] = self[0] * v.x;
        out[1] = self[1] * v.y;
        out[2] = self[2] * v.z;
        out
    }

    /// Transform a point (w = 1) under the row-vector convention.
    #[inline]
    pub fn transform_point(&self, p: Vec3<S>) -> Vec3<S> {
        self.mul_vec(p.extend(S::ONE)).truncate()
    }

    /// Transform a direction (w = 0, ignores translation).
    #[inline]
    pub fn transform_vec(&self, v: Vec3<S>) -> Vec3<S> {
        self.mul_vec(v.extend(S::ZERO)).truncate()
    }

    /// Projects a point and divides by w.
    pub fn project_point(&self, p: Vec3<S>) -> Vec3<S> {
        let h: Vec4<S> = self.mul_vec(p.extend(S::ONE));
        h.truncate() / h.w
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec_close(a: Vec3<f64>, b: Vec3<f64>) {
        assert!((a - b).magnitude() < 1e-10, "{a} vs {b}");
    }

    #[test]
    fn translate_identity_sets_translation_row() {
        let m = Mat4::<f64>::identity().translate(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(m[3], Vec4::new(2.0, 3.0, 4.0, 1.0));
        assert_eq!(m.transform_point(Vec3::new(1.0, 1.0, 1.0)), Vec3::new(3.0, 4.0, 5.0));
    }

    #[test]
    fn translation_ignores_vectors() {
        let m = Mat4::identity().translate(Vec3::new(10.0, 20.0, 30.0));
        let v = Vec3::new(1.0, 0.0, 0.0);
        assert_eq!(m.transform_vec(v), v);
    }

    #[test]
    fn translate_composes_with_scale() {
        // Scale first, then a translation expressed in the scaled frame.
        let m = Mat4::<f64>::identity()
            .scale(Vec3::new(2.0, 2.0, 2.0))
            .translate(Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(m[3], Vec4::new(2.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn scale_leaves_last_row() {
        let base = Mat4::<f64>::identity().translate(Vec3::new(5.0, 6.0, 7.0));
        let m = base.scale(Vec3::new(2.0, 3.0, 4.0));
        assert_eq!(m[0], Vec4::new(2.0, 0.0, 0.0, 0.0));
        assert_eq!(m[1], Vec4::new(0.0, 3.0, 0.0, 0.0));
        assert_eq!(m[2], Vec4::new(0.0, 0.0, 4.0, 0.0));
        assert_eq!(m[3], base[3]);
    }

    #[test]
    fn rotate_quarter_turn_about_z() {
        let m = Mat4::<f64>::identity().rotate(90.0, Vec3::new(0.0, 0.0, 3.0));
        assert_vec_close(m.transform_vec(Vec3::unit_x()), Vec3::unit_y());
        assert_vec_close(m.transform_vec(Vec3::unit_y()), -Vec3::unit_x());
        assert_vec_close(m.transform_vec(Vec3::unit_z()), Vec3::unit_z());
        assert_eq!(m[3], Vec4::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn rotate_keeps_translation_row() {
        let t = Mat4::<f64>::identity().translate(Vec3::new(1.0, 2.0, 3.0));
        let m = t.rotate(37.0, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(m[3], t[3]);
    }

    #[test]
    fn rotate_zero_axis() {
        let m = Mat4::<f64>::identity().rotate(45.0, Vec3::zero());
        assert!(m[0].x.is_nan());
        assert_eq!(
            Mat4::<f64>::identity().try_rotate(45.0, Vec3::zero()),
            Err(MathError::ZeroMagnitude)
        );
    }

    #[test]
    fn perspective_entries() {
        let m = Mat4::<f64>::perspective(90.0, 2.0, 1.0, 3.0);
        // tan(45deg) = 1
        assert!((m[0][0] - 0.5).abs() < 1e-12);
        assert!((m[1][1] - 1.0).abs() < 1e-12);
        assert_eq!(m[2][2], -2.0);
        assert_eq!(m[2][3], -1.0);
        assert_eq!(m[3][2], -3.0);
        assert_eq!(m[3][3], 0.0);
    }

    #[test]
    fn perspective_maps_near_and_far_planes() {
        let m = Mat4::<f64>::perspective(60.0, 1.5, 0.1, 100.0);
        let near = m.project_point(Vec3::new(0.0, 0.0, -0.1));
        let far = m.project_point(Vec3::new(0.0, 0.0, -100.0));
        assert!((near.z + 1.0).abs() < 1e-9);
        assert!((far.z - 1.0).abs() < 1e-9);
    }

    #[test]
    fn ortho_maps_box_to_clip_cube() {
        let m = Mat4::<f64>::ortho(-2.0, 2.0, -1.0, 1.0, 0.5, 10.5);
        assert_vec_close(m.transform_point(Vec3::new(-2.0, -1.0, -0.5)), Vec3::new(-1.0, -1.0, -1.0));
        assert_vec_close(m.transform_point(Vec3::new(2.0, 1.0, -10.5)), Vec3::new(1.0, 1.0, 1.0));
        assert_eq!(m[3][3], 1.0);
    }

    #[test]
    fn look_at_down_negative_z() {
        let eye = Vec3::new(0.0, 0.0, 5.0);
        let m = Mat4::<f64>::look_at(eye, Vec3::zero(), Vec3::unit_y());
        assert_eq!(m[0], Vec4::new(1.0, 0.0, 0.0, 0.0));
        assert_eq!(m[1], Vec4::new(0.0, 1.0, 0.0, 0.0));
        assert_eq!(m[2], Vec4::new(0.0, 0.0, 1.0, 0.0));
        assert_eq!(m[3], Vec4::new(0.0, 0.0, -5.0, 1.0));
        assert_vec_close(m.transform_point(eye), Vec3::zero());
    }

    #[test]
    fn look_at_basis_is_orthonormal() {
        let m = Mat4::<f64>::look_at(
            Vec3::new(3.0, -2.0, 7.0),
            Vec3::new(-1.0, 4.0, 0.5),
            Vec3::new(0.0, 0.0, 1.0),
        );
        let cols: [Vec3<f64>; 3] = [0, 1, 2].map(|j| m.column(j).truncate());
        for (i, a) in cols.iter().enumerate() {
            assert!((a.magnitude() - 1.0).abs() < 1e-10);
            for b in &cols[i + 1..] {
                assert!(a.dot(*b).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn look_at_degenerate_inputs() {
        let p = Vec3::new(1.0, 1.0, 1.0);
        assert_eq!(Mat4::<f64>::try_look_at(p, p, Vec3::unit_y()), Err(MathError::ZeroMagnitude));
        assert_eq!(
            Mat4::<f64>::try_look_at(Vec3::zero(), Vec3::unit_y(), Vec3::unit_y()),
            Err(MathError::ZeroMagnitude)
        );
        assert!(Mat4::<f64>::look_at(p, p, Vec3::unit_y())[0].x.is_nan());
    }

    #[test]
    fn f32_transforms() {
        let m = Mat4::<f32>::identity()
            .translate(Vec3::new(1.0, 2.0, 3.0))
            .rotate(180.0, Vec3::unit_y())
            .scale(Vec3::splat(0.5));
        let p = m.transform_point(Vec3::new(2.0, 0.0, 0.0));
        assert!((p.x - 0.0).abs() < 1e-6);
        assert!((p.y - 2.0).abs() < 1e-6);
        assert!((p.z - 3.0).abs() < 1e-6);
    }
}
