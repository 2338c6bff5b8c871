use core::ops::*;
use super::*;

generic_matrix!{doc = "4x4 matrix (row-major order, points are row vectors so row 3 holds the translation)"; Mat4, 4, 4}

impl<T: Real> Mat4<T> {
    /// Create a new matrix with the given values
    #[inline]
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(m00: T, m01: T, m02: T, m03: T,
               m10: T, m11: T, m12: T, m13: T,
               m20: T, m21: T, m22: T, m23: T,
               m30: T, m31: T, m32: T, m33: T) -> Self {
        Self { vals: [m00, m01, m02, m03,
                      m10, m11, m12, m13,
                      m20, m21, m22, m23,
                      m30, m31, m32, m33] }
    }

    /// Create a new matrix with the given rows
    #[inline]
    #[must_use]
    pub fn from_rows(row0: Vec4<T>, row1: Vec4<T>, row2: Vec4<T>, row3: Vec4<T>) -> Self {
        Self { vals: [row0.x, row0.y, row0.z, row0.w,
                      row1.x, row1.y, row1.z, row1.w,
                      row2.x, row2.y, row2.z, row2.w,
                      row3.x, row3.y, row3.z, row3.w] }
    }

    /// Create a 4x4 matrix from an affine 4x3 matrix, by making the implicit last column explicit
    #[must_use]
    pub fn from_mat4x3(mat: Mat4x3<T>) -> Self {
        Self::from_rows(mat.row(0).extend(T::zero()),
                        mat.row(1).extend(T::zero()),
                        mat.row(2).extend(T::zero()),
                        mat.row(3).extend(T::one()))
    }

    /// Get the row at the given index
    #[inline]
    #[must_use]
    pub fn row(self, index: usize) -> Vec4<T> {
        debug_assert!(index < 4);
        let idx = index * 4;
        Vec4::new(self.vals[idx], self.vals[idx + 1], self.vals[idx + 2], self.vals[idx + 3])
    }

    /// Get the column at the given index
    #[inline]
    #[must_use]
    pub fn column(self, index: usize) -> Vec4<T> {
        debug_assert!(index < 4);
        Vec4::new(self.vals[index], self.vals[index + 4], self.vals[index + 8], self.vals[index + 12])
    }

    /// Get the identity matrix
    #[inline]
    #[must_use]
    pub fn identity() -> Self {
        let zero = T::zero();
        let one = T::one();

        Self { vals: [one , zero, zero, zero,
                      zero, one , zero, zero,
                      zero, zero, one , zero,
                      zero, zero, zero, one ] }
    }

    /// Get the transpose of the matrix
    #[must_use]
    pub fn transpose(self) -> Self {
        Self::from_rows(self.column(0), self.column(1), self.column(2), self.column(3))
    }

    /// Transform a `Vec4`
    #[must_use]
    pub fn transform(self, vec: Vec4<T>) -> Vec4<T> {
        self.row(0) * vec.x + self.row(1) * vec.y + self.row(2) * vec.z + self.row(3) * vec.w
    }

    /// Transform a `Vec3` as a point (implicit w-coord with a value of 1), ignoring the projective column
    #[must_use]
    pub fn transform_point(self, point: Vec3<T>) -> Vec3<T> {
        let row0 = self.row(0).shrink();
        let row1 = self.row(1).shrink();
        let row2 = self.row(2).shrink();
        let row3 = self.row(3).shrink();

        row0 * point.x + row1 * point.y + row2 * point.z + row3
    }

    /// Transform a `Vec3` as a point and divide the result by the resulting w-coord
    #[must_use]
    pub fn transform_point_projective(self, point: Vec3<T>) -> Vec3<T> {
        self.transform(point.extend(T::one())).project()
    }

    /// Transform a `Vec3` as a point that may have infinite coordinates, ignoring the projective column
    ///
    /// See [`TransformPoint::transform_bound`].
    #[must_use]
    pub fn transform_bound(self, point: Vec3<T>) -> Vec3<T> {
        self.transform_bound_homogeneous(point).shrink()
    }

    /// Transform a `Vec3` that may have infinite coordinates as a point, then divide the result by the resulting w-coord
    #[must_use]
    pub fn transform_bound_projective(self, point: Vec3<T>) -> Vec3<T> {
        self.transform_bound_homogeneous(point).project()
    }

    fn transform_bound_homogeneous(self, point: Vec3<T>) -> Vec4<T> {
        let column = |col: usize| {
            mul_bound(self[(0, col)], point.x) +
            mul_bound(self[(1, col)], point.y) +
            mul_bound(self[(2, col)], point.z) +
            self[(3, col)]
        };
        Vec4::new(column(0), column(1), column(2), column(3))
    }

    /// Transform a `Vec3` as a direction (implicit w-coord with a value of 0)
    #[must_use]
    pub fn transform_direction(self, dir: Vec3<T>) -> Vec3<T> {
        let row0 = self.row(0).shrink();
        let row1 = self.row(1).shrink();
        let row2 = self.row(2).shrink();

        row0 * dir.x + row1 * dir.y + row2 * dir.z
    }

    /// Create a 3d scale matrix
    #[must_use]
    pub fn create_scale(scale: Vec3<T>) -> Self {
        let zero = T::zero();
        let one = T::one();

        Self { vals: [scale.x, zero   , zero   , zero,
                      zero   , scale.y, zero   , zero,
                      zero   , zero   , scale.z, zero,
                      zero   , zero   , zero   , one ] }
    }

    /// Create a 3d translation matrix
    #[must_use]
    pub fn create_translation(trans: Vec3<T>) -> Self {
        let zero = T::zero();
        let one = T::one();

        Self { vals: [one    , zero   , zero   , zero,
                      zero   , one    , zero   , zero,
                      zero   , zero   , one    , zero,
                      trans.x, trans.y, trans.z, one ] }
    }

    /// Create a rotation of `angle` radians around the x-axis
    #[must_use]
    pub fn create_rotation_x(angle: T) -> Self {
        Self::from_mat4x3(Mat4x3::create_rotation_x(angle))
    }

    /// Create a rotation of `angle` radians around the y-axis
    #[must_use]
    pub fn create_rotation_y(angle: T) -> Self {
        Self::from_mat4x3(Mat4x3::create_rotation_y(angle))
    }

    /// Create a rotation of `angle` radians around the z-axis
    #[must_use]
    pub fn create_rotation_z(angle: T) -> Self {
        Self::from_mat4x3(Mat4x3::create_rotation_z(angle))
    }
}

impl<T: Real> Mul for Mat4<T> {
    type Output = Self;

    /// Concatenate 2 transforms, `self` is applied first
    fn mul(self, rhs: Self) -> Self::Output {
        let rows = [rhs.row(0), rhs.row(1), rhs.row(2), rhs.row(3)];
        let row = |idx: usize| {
            let lhs = self.row(idx);
            rows[0] * lhs.x + rows[1] * lhs.y + rows[2] * lhs.z + rows[3] * lhs.w
        };
        Self::from_rows(row(0), row(1), row(2), row(3))
    }
}

impl<T: Real> MulAssign for Mat4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Real> TransformPoint<T> for Mat4<T> {
    #[inline]
    fn transform_point(&self, point: Vec3<T>) -> Vec3<T> {
        Mat4::transform_point(*self, point)
    }

    #[inline]
    fn transform_bound(&self, point: Vec3<T>) -> Vec3<T> {
        Mat4::transform_bound(*self, point)
    }
}

#[allow(non_camel_case_types)] pub type f32m4 = Mat4<f32>;
#[allow(non_camel_case_types)] pub type f64m4 = Mat4<f64>;

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn translation_lives_in_last_row() {
        let mat = f32m4::create_translation(f32v3::new(1.0, 2.0, 3.0));
        assert_eq!(mat[(3, 0)], 1.0);
        assert_eq!(mat.element(3, 2), 3.0);
        assert_eq!(mat.transform_point(f32v3::new(1.0, 1.0, 1.0)), f32v3::new(2.0, 3.0, 4.0));
        assert_eq!(mat.transform_direction(f32v3::new(1.0, 1.0, 1.0)), f32v3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn concatenation_applies_lhs_first() {
        let scale = f64m4::create_scale(f64v3::set(2.0));
        let trans = f64m4::create_translation(f64v3::new(1.0, 0.0, 0.0));

        let scale_then_trans = scale * trans;
        assert_eq!(scale_then_trans.transform_point(f64v3::new(1.0, 1.0, 1.0)), f64v3::new(3.0, 2.0, 2.0));

        let trans_then_scale = trans * scale;
        assert_eq!(trans_then_scale.transform_point(f64v3::new(1.0, 1.0, 1.0)), f64v3::new(4.0, 2.0, 2.0));

        assert_eq!(scale * f64m4::identity(), scale);
    }

    #[test]
    fn rotation_z_quarter_turn() {
        let mat = f64m4::create_rotation_z(core::f64::consts::FRAC_PI_2);
        let res = mat.transform_point(f64v3::new(1.0, 0.0, 0.0));
        assert!(res.is_close_to(f64v3::new(0.0, 1.0, 0.0), 1e-12));
    }

    #[test]
    fn projective_divide() {
        let mut mat = f64m4::identity();
        mat[(3, 3)] = 2.0;
        let res = mat.transform_point_projective(f64v3::new(2.0, 4.0, 6.0));
        assert_eq!(res, f64v3::new(1.0, 2.0, 3.0));
        assert_eq!(mat.transpose().transpose(), mat);
    }
}
